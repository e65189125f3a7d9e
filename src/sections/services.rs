use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;

#[derive(Clone, Copy, PartialEq)]
struct Service {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    image: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        id: "structural-steel",
        title: "Structural Steel Framing",
        description: "Residential and commercial building frames engineered for strength, \
                      durability, and precision. We handle everything from design to installation.",
        features: &["House skeletons", "Commercial frames", "Industrial structures"],
        image: "/assets/services/structural-steel.jpg",
    },
    Service {
        id: "metal-staircases",
        title: "Metal Staircases",
        description: "Custom-designed stairs that combine form and function. From elegant \
                      residential spirals to robust industrial access solutions.",
        features: &["Spiral staircases", "Straight runs", "Industrial access"],
        image: "/assets/services/staircase.jpg",
    },
    Service {
        id: "warehouse-construction",
        title: "Warehouse Construction",
        description: "Complete steel frame solutions for warehouses and industrial facilities. \
                      Built to maximize space and withstand the test of time.",
        features: &["Steel frames", "Storage facilities", "Industrial buildings"],
        image: "/assets/services/warehouse.jpg",
    },
    Service {
        id: "architectural-metalwork",
        title: "Architectural Metalwork",
        description: "Decorative and functional metal features that elevate any space. \
                      Railings, gates, canopies, and bespoke architectural elements.",
        features: &["Railings & balustrades", "Gates & fencing", "Canopies"],
        image: "/assets/services/railing.jpg",
    },
    Service {
        id: "custom-fabrication",
        title: "Custom Fabrication",
        description: "Bespoke metal components built to your exact specifications. From \
                      prototypes to production runs, we bring your vision to life.",
        features: &["Prototypes", "One-off projects", "Production runs"],
        image: "/assets/services/workshop.jpg",
    },
    Service {
        id: "steel-roofing",
        title: "Steel Roofing & Cladding",
        description: "Durable roof structures and wall cladding systems designed for longevity \
                      and weather resistance. Protection that lasts decades.",
        features: &["Roof structures", "Wall cladding", "Insulated panels"],
        image: "/assets/services/roofing.jpg",
    },
];

const ADVANCE_INTERVAL_MS: u32 = 6_000;
const MANUAL_PAUSE_MS: u32 = 8_000;

/// Full-bleed services carousel. Advances on its own every six seconds;
/// any manual navigation pauses the auto-advance for a while so the
/// reader is not fought for control.
#[function_component(Services)]
pub fn services() -> Html {
    let active = use_state_eq(|| 0usize);
    let paused = use_state_eq(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(current, paused): &(usize, bool)| {
                let interval = (!paused).then(|| {
                    let next = (current + 1) % SERVICES.len();
                    Interval::new(ADVANCE_INTERVAL_MS, move || active.set(next))
                });
                move || drop(interval)
            },
            (*active, *paused),
        );
    }

    let pause_briefly = {
        let paused = paused.clone();
        move || {
            paused.set(true);
            let paused = paused.clone();
            Timeout::new(MANUAL_PAUSE_MS, move || paused.set(false)).forget();
        }
    };

    let on_prev = {
        let active = active.clone();
        let pause_briefly = pause_briefly.clone();
        Callback::from(move |_| {
            active.set((*active + SERVICES.len() - 1) % SERVICES.len());
            pause_briefly();
        })
    };
    let on_next = {
        let active = active.clone();
        let pause_briefly = pause_briefly.clone();
        Callback::from(move |_| {
            active.set((*active + 1) % SERVICES.len());
            pause_briefly();
        })
    };

    let current = &SERVICES[*active];

    html! {
        <section id="services" class="services">
            <div class="services-backdrop">
                <div class="services-image" key={current.id}>
                    <LazyImage
                        src={current.image}
                        alt={current.title}
                        class={classes!("services-photo")}
                    />
                </div>
                <div class="services-shade"></div>
                <div class="services-shade-side"></div>
            </div>
            <div class="services-content">
                <div class="services-copy" key={current.id}>
                    <div class="services-label">
                        <span class="rule"></span>
                        <span>{"Our Services"}</span>
                    </div>
                    <span class="services-number slide-up">{ format!("{:02}", *active + 1) }</span>
                    <h2 class="slide-up" style="animation-delay: 0.08s;">{ current.title }</h2>
                    <p class="slide-up" style="animation-delay: 0.16s;">{ current.description }</p>
                    <div class="services-features slide-up" style="animation-delay: 0.24s;">
                        { for current.features.iter().map(|feature| html! {
                            <span class="feature-chip">{ *feature }</span>
                        })}
                    </div>
                </div>
                <div class="services-nav">
                    <div class="services-dots">
                        { for SERVICES.iter().enumerate().map(|(index, service)| {
                            let onclick = {
                                let active = active.clone();
                                let pause_briefly = pause_briefly.clone();
                                Callback::from(move |_| {
                                    active.set(index);
                                    pause_briefly();
                                })
                            };
                            html! {
                                <button
                                    key={service.id}
                                    class={classes!("services-dot", (index == *active).then_some("active"))}
                                    {onclick}
                                    aria-label={format!("Show {}", service.title)}
                                >
                                </button>
                            }
                        })}
                    </div>
                    <div class="services-arrows">
                        <button onclick={on_prev} aria-label="Previous service">
                            <svg width="16" height="16" viewBox="0 0 16 16" fill="none">
                                <path d="M10 12L6 8L10 4" stroke="currentColor" stroke-width="1.5"
                                    stroke-linecap="round" stroke-linejoin="round" />
                            </svg>
                        </button>
                        <button onclick={on_next} aria-label="Next service">
                            <svg width="16" height="16" viewBox="0 0 16 16" fill="none">
                                <path d="M6 4L10 8L6 12" stroke="currentColor" stroke-width="1.5"
                                    stroke-linecap="round" stroke-linejoin="round" />
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
            <div class="services-counter">
                <span>{ format!("{:02}", *active + 1) }</span>
                <div class="track">
                    <div
                        class="fill"
                        style={format!(
                            "transform: scaleX({});",
                            (*active + 1) as f64 / SERVICES.len() as f64
                        )}
                    >
                    </div>
                </div>
                <span>{ format!("{:02}", SERVICES.len()) }</span>
            </div>
            <style>
                {r#"
                    .services {
                        position: relative;
                        height: 85vh;
                        min-height: 600px;
                        overflow: hidden;
                        background: #111827;
                    }
                    .services-backdrop { position: absolute; inset: 0; }
                    .services-image {
                        position: absolute;
                        inset: 0;
                        animation: services-fade 0.5s ease forwards;
                    }
                    @keyframes services-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .services-photo {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        display: block;
                    }
                    .services-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .services-shade-side {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right,
                            rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.4), transparent);
                    }
                    .services-content {
                        position: relative;
                        height: 100%;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                    }
                    .services-label {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .services-label .rule { width: 2rem; height: 1px; background: #60a5fa; }
                    .services-copy { max-width: 34rem; }
                    .slide-up {
                        opacity: 0;
                        animation: services-rise 0.45s ease-out forwards;
                    }
                    @keyframes services-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .services-number {
                        display: block;
                        font-size: clamp(4.5rem, 9vw, 7rem);
                        font-weight: 700;
                        color: rgba(255, 255, 255, 0.1);
                        line-height: 1;
                    }
                    .services-copy h2 {
                        margin: -2rem 0 1.25rem;
                        font-size: clamp(1.9rem, 4vw, 2.8rem);
                        font-weight: 600;
                        color: #fff;
                        line-height: 1.1;
                    }
                    .services-copy p {
                        margin: 0 0 1.5rem;
                        font-size: 1rem;
                        color: rgba(255, 255, 255, 0.7);
                        line-height: 1.6;
                    }
                    .services-features { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .feature-chip {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.9);
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                        padding: 0.4rem 0.75rem;
                    }
                    .services-nav {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                    }
                    .services-dots {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .services-dot {
                        width: 8px;
                        height: 8px;
                        padding: 0;
                        border: none;
                        border-radius: 0;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .services-dot:hover { background: rgba(255, 255, 255, 0.6); }
                    .services-dot.active {
                        width: 24px;
                        height: 6px;
                        background: #60a5fa;
                    }
                    .services-arrows { display: flex; gap: 0.5rem; }
                    .services-arrows button {
                        width: 40px;
                        height: 40px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: transparent;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: rgba(255, 255, 255, 0.7);
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .services-arrows button:hover {
                        background: rgba(255, 255, 255, 0.1);
                        border-color: rgba(255, 255, 255, 0.4);
                    }
                    .services-counter {
                        position: absolute;
                        bottom: 2rem;
                        left: 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .services-counter span {
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .services-counter .track {
                        width: 3rem;
                        height: 1px;
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .services-counter .fill {
                        height: 100%;
                        background: #60a5fa;
                        transform-origin: left;
                        transition: transform 0.5s;
                    }
                    @media (max-width: 768px) {
                        .services-content { flex-direction: column; justify-content: center; }
                        .services-nav { flex-direction: row; }
                        .services-dots { flex-direction: row; }
                    }
                "#}
            </style>
        </section>
    }
}
