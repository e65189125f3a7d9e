use web_sys::HtmlVideoElement;
use yew::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("20+", "Years"),
    ("500+", "Projects"),
    ("100%", "Quality"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let video_ref = use_node_ref();

    // Autoplay policies vary; muting through the property and kicking
    // playback from script is the reliable path.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    let _ = video.play();
                }
                || ()
            },
            (),
        );
    }

    html! {
        <section id="home" class="hero">
            <div class="hero-backdrop">
                <video ref={video_ref} autoplay=true loop=true muted=true playsinline=true>
                    <source src="/assets/hero-background.mp4" type="video/mp4" />
                </video>
                <div class="hero-shade hero-shade-side"></div>
                <div class="hero-shade hero-shade-vertical"></div>
            </div>
            <div class="hero-content">
                <div class="hero-copy">
                    <div class="hero-label fade-up" style="animation-delay: 0.2s;">
                        <span class="rule"></span>
                        <span>{"Metal Fabrication"}</span>
                    </div>
                    <h1 class="fade-up" style="animation-delay: 0.3s;">
                        {"Precision steel work, "}
                        <span class="accent">{"built to last."}</span>
                    </h1>
                    <p class="fade-up" style="animation-delay: 0.4s;">
                        {"Structural frameworks, custom metalwork, and architectural \
                          fabrication for residential and commercial projects."}
                    </p>
                    <div class="hero-actions fade-up" style="animation-delay: 0.5s;">
                        <a href="#contact" class="hero-button primary">{"Get a Quote"}</a>
                        <a href="#services" class="hero-button ghost">{"View Services"}</a>
                    </div>
                    <div class="hero-stats fade-up" style="animation-delay: 0.6s;">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="hero-stat">
                                <p class="value">{ *value }</p>
                                <p class="label">{ *label }</p>
                            </div>
                        })}
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        background: #111827;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        animation: hero-settle 1.2s cubic-bezier(0.25, 0.4, 0.25, 1) forwards;
                    }
                    .hero-backdrop video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    @keyframes hero-settle {
                        from { transform: scale(1.05); }
                        to { transform: scale(1); }
                    }
                    .hero-shade { position: absolute; inset: 0; }
                    .hero-shade-side {
                        background: linear-gradient(to right,
                            rgba(0, 0, 0, 0.85), rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.2));
                    }
                    .hero-shade-vertical {
                        background: linear-gradient(to bottom,
                            rgba(0, 0, 0, 0.3), transparent, rgba(0, 0, 0, 0.5));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }
                    .hero-copy { max-width: 36rem; }
                    .fade-up {
                        opacity: 0;
                        animation: fade-up 0.6s cubic-bezier(0.25, 0.4, 0.25, 1) forwards;
                    }
                    @keyframes fade-up {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-label {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: rgba(96, 165, 250, 0.9);
                    }
                    .hero-label .rule { width: 2rem; height: 1px; background: #60a5fa; }
                    .hero-copy h1 {
                        font-size: clamp(2.5rem, 5vw, 3.75rem);
                        font-weight: 600;
                        color: #fff;
                        line-height: 1.1;
                        margin: 0 0 1.25rem;
                    }
                    .hero-copy h1 .accent { color: #60a5fa; }
                    .hero-copy > p {
                        font-size: 1.05rem;
                        color: rgba(255, 255, 255, 0.7);
                        line-height: 1.6;
                        margin: 0 0 2rem;
                    }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                    .hero-button {
                        padding: 0.75rem 1.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.2s, border-color 0.2s;
                    }
                    .hero-button.primary { background: #3b82f6; color: #fff; }
                    .hero-button.primary:hover { background: #60a5fa; }
                    .hero-button.ghost {
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                    }
                    .hero-button.ghost:hover { background: rgba(255, 255, 255, 0.1); }
                    .hero-stats {
                        display: flex;
                        gap: 2.5rem;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .hero-stat .value {
                        font-size: 1.75rem;
                        font-weight: 600;
                        color: #fff;
                        margin: 0;
                    }
                    .hero-stat .label {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.5);
                        margin: 0.25rem 0 0;
                    }
                "#}
            </style>
        </section>
    }
}
