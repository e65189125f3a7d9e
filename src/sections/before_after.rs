use yew::prelude::*;

use crate::components::compare_slider::CompareSlider;
use crate::components::lazy_image::LazyImage;

const GALLERY: [&str; 4] = [
    "/assets/gallery/grid3.jpg",
    "/assets/gallery/grid4.jpg",
    "/assets/gallery/grid8.jpg",
    "/assets/gallery/grid14.jpg",
];

/// "From Blueprint to Reality" block: CTA copy next to the before/after
/// slider, with a small staggered gallery underneath.
#[function_component(BeforeAfter)]
pub fn before_after() -> Html {
    html! {
        <section class="before-after">
            <div class="before-after-inner">
                <div class="before-after-header">
                    <h2>{"From Blueprint to Reality"}</h2>
                    <p>{"See how we transform spaces into steel structures."}</p>
                </div>
                <div class="before-after-body">
                    <div class="before-after-copy">
                        <span class="kicker stagger-in">{"Built to Last"}</span>
                        <h3 class="stagger-in" style="animation-delay: 0.1s;">
                            {"Metalwork That Elevates Your Space"}
                        </h3>
                        <p class="stagger-in" style="animation-delay: 0.2s;">
                            {"From custom staircases and railings to structural steel and \
                              architectural features, we design, fabricate, and install with \
                              precision and care."}
                        </p>
                        <a href="#contact" class="quote-button stagger-in" style="animation-delay: 0.3s;">
                            {"Request a Quote"}
                        </a>
                    </div>
                    <div class="before-after-demo">
                        <CompareSlider
                            before={"/assets/compare/blueprint.jpg"}
                            after={"/assets/compare/finished.jpg"}
                            before_label={"Blueprint"}
                            after_label={"Finished"}
                        />
                    </div>
                </div>
                <div class="before-after-gallery">
                    { for GALLERY.iter().enumerate().map(|(index, image)| html! {
                        <div class="gallery-cell" style={format!("animation-delay: {}s;", 0.1 * index as f64)}>
                            <LazyImage
                                src={*image}
                                alt="Project detail"
                                class={classes!("gallery-cell-photo")}
                            />
                        </div>
                    })}
                </div>
            </div>
            <style>
                {r#"
                    .before-after { background: #fff; padding: 4rem 1.5rem; }
                    .before-after-inner { max-width: 1100px; margin: 0 auto; }
                    .before-after-header {
                        text-align: center;
                        max-width: 28rem;
                        margin: 0 auto 2rem;
                    }
                    .before-after-header h2 {
                        margin: 0 0 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .before-after-header p { margin: 0; font-size: 0.9rem; color: #6b7280; }
                    .before-after-body {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: 2rem;
                        padding: 2rem 0;
                    }
                    @media (max-width: 900px) {
                        .before-after-body { grid-template-columns: 1fr; }
                    }
                    .stagger-in {
                        opacity: 0;
                        animation: blueprint-rise 0.5s ease-out forwards;
                    }
                    @keyframes blueprint-rise {
                        from { opacity: 0; transform: translateY(16px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .before-after-copy .kicker {
                        display: block;
                        margin-bottom: 1rem;
                        font-size: 0.8rem;
                        font-weight: 500;
                        color: #f43f5e;
                    }
                    .before-after-copy h3 {
                        margin: 0 0 1rem;
                        font-size: clamp(1.8rem, 3vw, 2.4rem);
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: #111827;
                    }
                    .before-after-copy p {
                        margin: 0 0 1.5rem;
                        font-size: 1.05rem;
                        color: #334155;
                        line-height: 1.6;
                    }
                    .quote-button {
                        display: inline-block;
                        padding: 0.75rem 1.5rem;
                        background: #f43f5e;
                        color: #fff;
                        font-size: 0.9rem;
                        font-weight: 500;
                        text-decoration: none;
                        border-radius: 8px;
                        transition: background 0.2s;
                    }
                    .quote-button:hover { background: #e11d48; }
                    .before-after-demo {
                        height: 24rem;
                        border-radius: 12px;
                        overflow: hidden;
                    }
                    .before-after-gallery {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                    }
                    @media (max-width: 700px) {
                        .before-after-gallery { grid-template-columns: repeat(2, 1fr); }
                    }
                    .gallery-cell {
                        height: 10rem;
                        border-radius: 8px;
                        overflow: hidden;
                        background: #f3f4f6;
                        opacity: 0;
                        animation: blueprint-rise 0.5s ease-out forwards;
                    }
                    .gallery-cell-photo {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        display: block;
                    }
                "#}
            </style>
        </section>
    }
}
