use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;

#[derive(Clone, PartialEq, Default, Serialize)]
struct ContactForm {
    name: String,
    email: String,
    phone: String,
    project_type: String,
    message: String,
}

const PROJECT_TYPES: [(&str, &str); 5] = [
    ("structural", "Structural Steel"),
    ("warehouse", "Warehouse"),
    ("staircase", "Staircase"),
    ("custom", "Custom Fabrication"),
    ("other", "Other"),
];

/// Contact block: info column plus the quote-request form. Submission is
/// simulated locally until the quoting backend exists; the payload that
/// would be sent is logged, the fields reset, and a confirmation is shown.
#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let is_submitting = use_state_eq(|| false);
    let is_submitted = use_state_eq(|| false);

    let edit = {
        let form = form.clone();
        move |apply: fn(&mut ContactForm, String)| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                apply(&mut next, input.value());
                form.set(next);
            })
        }
    };
    let on_name = edit(|form, value| form.name = value);
    let on_email = edit(|form, value| form.email = value);
    let on_phone = edit(|form, value| form.phone = value);
    let on_project_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.project_type = select.value();
            form.set(next);
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = area.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let is_submitted = is_submitted.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() {
                return;
            }
            is_submitting.set(true);
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let is_submitted = is_submitted.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::SIMULATED_SUBMIT_DELAY_MS).await;
                match serde_json::to_string(&*form) {
                    Ok(payload) => log::info!("quote request ready to send: {}", payload),
                    Err(e) => log::error!("failed to serialize quote request: {}", e),
                }
                is_submitting.set(false);
                is_submitted.set(true);
                form.set(ContactForm::default());
            });
        })
    };

    let on_reset = {
        let is_submitted = is_submitted.clone();
        Callback::from(move |_| is_submitted.set(false))
    };

    html! {
        <section id="contact" class="contact">
            <div class="contact-inner">
                <div class="contact-header">
                    <span class="eyebrow">{"Get in Touch"}</span>
                    <h2>{"Let's Build Something Together"}</h2>
                    <p>
                        {"Have a project in mind? We'd love to hear from you. Send us a \
                          message and we'll respond as soon as possible."}
                    </p>
                </div>
                <div class="contact-columns">
                    <div class="contact-info">
                        <h3>{"Contact Information"}</h3>
                        <a href={config::PHONE_HREF} class="contact-row">
                            <div class="contact-icon">{"📞"}</div>
                            <div>
                                <p class="field">{"Phone"}</p>
                                <p class="value">{ config::PHONE }</p>
                            </div>
                        </a>
                        <a href={config::EMAIL_HREF} class="contact-row">
                            <div class="contact-icon">{"✉️"}</div>
                            <div>
                                <p class="field">{"Email"}</p>
                                <p class="value">{ config::EMAIL }</p>
                            </div>
                        </a>
                        <div class="contact-row">
                            <div class="contact-icon">{"📍"}</div>
                            <div>
                                <p class="field">{"Location"}</p>
                                <p class="value">{ config::LOCATION }</p>
                            </div>
                        </div>
                        <div class="contact-row">
                            <div class="contact-icon">{"🕐"}</div>
                            <div>
                                <p class="field">{"Working Hours"}</p>
                                <p class="value">{ config::WORKING_HOURS }</p>
                            </div>
                        </div>
                    </div>
                    <div class="contact-form-panel">
                        if *is_submitted {
                            <div class="contact-sent">
                                <div class="sent-badge">{"✓"}</div>
                                <h3>{"Message Sent!"}</h3>
                                <p>{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
                                <button class="send-again" onclick={on_reset}>
                                    {"Send another message"}
                                </button>
                            </div>
                        } else {
                            <form class="contact-form">
                                <div class="form-grid">
                                    <div class="form-field">
                                        <label for="name">{"Full Name"}</label>
                                        <input
                                            id="name"
                                            type="text"
                                            placeholder="John Smith"
                                            value={form.name.clone()}
                                            oninput={on_name}
                                            required=true
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label for="email">{"Email"}</label>
                                        <input
                                            id="email"
                                            type="email"
                                            placeholder="john@example.com"
                                            value={form.email.clone()}
                                            oninput={on_email}
                                            required=true
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label for="phone">{"Phone (optional)"}</label>
                                        <input
                                            id="phone"
                                            type="tel"
                                            placeholder={config::PHONE}
                                            value={form.phone.clone()}
                                            oninput={on_phone}
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label for="project-type">{"Project Type"}</label>
                                        <select id="project-type" onchange={on_project_type}>
                                            <option value="" selected={form.project_type.is_empty()}>
                                                {"Select a type"}
                                            </option>
                                            { for PROJECT_TYPES.iter().map(|(value, label)| html! {
                                                <option
                                                    value={*value}
                                                    selected={form.project_type == *value}
                                                >
                                                    { *label }
                                                </option>
                                            })}
                                        </select>
                                    </div>
                                </div>
                                <div class="form-field">
                                    <label for="message">{"Message"}</label>
                                    <textarea
                                        id="message"
                                        rows="4"
                                        placeholder="Tell us about your project..."
                                        value={form.message.clone()}
                                        oninput={on_message}
                                        required=true
                                    />
                                </div>
                                <button
                                    type="button"
                                    class="submit-button"
                                    onclick={on_submit}
                                    disabled={*is_submitting}
                                >
                                    { if *is_submitting { "Sending..." } else { "Send Message" } }
                                </button>
                            </form>
                        }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .contact { background: #111827; padding: 6rem 1.5rem; }
                    .contact-inner { max-width: 1100px; margin: 0 auto; }
                    .contact-header { text-align: center; margin-bottom: 4rem; }
                    .contact-header .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: #6b7280;
                    }
                    .contact-header h2 {
                        margin: 0.75rem 0 1rem;
                        font-size: clamp(1.9rem, 4vw, 2.5rem);
                        font-weight: 600;
                        color: #fff;
                    }
                    .contact-header p {
                        margin: 0 auto;
                        max-width: 32rem;
                        color: #9ca3af;
                    }
                    .contact-columns {
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 3rem;
                    }
                    @media (max-width: 900px) {
                        .contact-columns { grid-template-columns: 1fr; }
                    }
                    .contact-info h3 {
                        margin: 0 0 1.5rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .contact-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1.25rem;
                        text-decoration: none;
                    }
                    .contact-icon {
                        width: 40px;
                        height: 40px;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 8px;
                        background: rgba(59, 130, 246, 0.1);
                    }
                    .contact-row .field { margin: 0; font-size: 0.85rem; color: #6b7280; }
                    .contact-row .value { margin: 0; color: #fff; transition: color 0.2s; }
                    a.contact-row:hover .value { color: #60a5fa; }
                    .contact-form-panel {
                        background: rgba(31, 41, 55, 0.5);
                        border-radius: 16px;
                        padding: 2.5rem;
                    }
                    .form-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                        margin-bottom: 1.25rem;
                    }
                    @media (max-width: 640px) {
                        .form-grid { grid-template-columns: 1fr; }
                    }
                    .form-field label {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 0.85rem;
                        color: #9ca3af;
                    }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        background: rgba(17, 24, 39, 0.5);
                        border: 1px solid #374151;
                        border-radius: 8px;
                        color: #fff;
                        font-size: 0.95rem;
                        transition: border-color 0.2s;
                    }
                    .form-field textarea { resize: none; }
                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: #3b82f6;
                    }
                    .form-field input::placeholder,
                    .form-field textarea::placeholder { color: #6b7280; }
                    .contact-form > .form-field { margin-bottom: 1.5rem; }
                    .submit-button {
                        width: 100%;
                        padding: 0.9rem;
                        background: #3b82f6;
                        border: none;
                        border-radius: 8px;
                        color: #fff;
                        font-size: 0.95rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .submit-button:hover { background: #60a5fa; }
                    .submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
                    .contact-sent { text-align: center; padding: 2rem 0; }
                    .sent-badge {
                        width: 64px;
                        height: 64px;
                        margin: 0 auto 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: rgba(59, 130, 246, 0.2);
                        color: #60a5fa;
                        font-size: 1.5rem;
                    }
                    .contact-sent h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.25rem;
                        color: #fff;
                    }
                    .contact-sent p { margin: 0 0 1.5rem; color: #9ca3af; }
                    .send-again {
                        background: none;
                        border: none;
                        color: #60a5fa;
                        font-size: 0.85rem;
                        cursor: pointer;
                        transition: color 0.2s;
                    }
                    .send-again:hover { color: #93c5fd; }
                "#}
            </style>
        </section>
    }
}
