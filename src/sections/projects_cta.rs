use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::Route;

const FEATURED: [(&str, &str, &str); 3] = [
    ("Limassol Industrial Complex", "Warehouse", "/assets/projects/project1.jpg"),
    ("Nicosia Office Tower", "Structural", "/assets/projects/project2.jpg"),
    ("Luxury Villa Staircase", "Staircase", "/assets/projects/project3.jpg"),
];

#[function_component(ProjectsCta)]
pub fn projects_cta() -> Html {
    html! {
        <section class="projects-cta">
            <div class="projects-cta-inner">
                <div class="projects-cta-top">
                    <div class="projects-cta-header">
                        <div class="section-label">
                            <span class="rule"></span>
                            <span>{"Our Work"}</span>
                        </div>
                        <h2>{"Featured Projects"}</h2>
                        <p>
                            {"From industrial warehouses to custom staircases, see how we bring \
                              precision engineering to every project."}
                        </p>
                    </div>
                    <Link<Route> to={Route::Projects} classes="projects-cta-button">
                        {"View All Projects"}
                        <svg width="18" height="18" viewBox="0 0 24 24" fill="none"
                            stroke="currentColor" stroke-width="2">
                            <path stroke-linecap="round" stroke-linejoin="round"
                                d="M17 8l4 4m0 0l-4 4m4-4H3" />
                        </svg>
                    </Link<Route>>
                </div>
                <div class="projects-cta-grid">
                    { for FEATURED.iter().enumerate().map(|(index, (title, category, image))| html! {
                        <Link<Route> to={Route::Projects} classes="featured-card">
                            <div class="featured-media" style={format!("animation-delay: {}s;", 0.1 * index as f64)}>
                                <LazyImage src={*image} alt={*title} class={classes!("featured-photo")} />
                                <div class="featured-shade"></div>
                                <div class="featured-caption">
                                    <span class="featured-category">{ *category }</span>
                                    <h3>{ *title }</h3>
                                </div>
                            </div>
                        </Link<Route>>
                    })}
                </div>
            </div>
            <style>
                {r#"
                    .projects-cta { background: #eceef1; padding: 6rem 1.5rem; }
                    .projects-cta-inner { max-width: 1100px; margin: 0 auto; }
                    .projects-cta-top {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: flex-end;
                        justify-content: space-between;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .section-label {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: #9ca3af;
                    }
                    .section-label .rule { width: 2rem; height: 1px; background: #3b82f6; }
                    .projects-cta-header { max-width: 36rem; }
                    .projects-cta-header h2 {
                        margin: 0 0 1rem;
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        font-weight: 600;
                        color: #111827;
                        line-height: 1.1;
                    }
                    .projects-cta-header p { margin: 0; color: #4b5563; }
                    .projects-cta-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        background: #3b82f6;
                        color: #fff;
                        font-weight: 500;
                        font-size: 0.9rem;
                        text-decoration: none;
                        border-radius: 999px;
                        transition: background 0.2s;
                    }
                    .projects-cta-button:hover { background: #2563eb; }
                    .projects-cta-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    @media (max-width: 900px) {
                        .projects-cta-grid { grid-template-columns: 1fr; }
                    }
                    .featured-card { display: block; text-decoration: none; }
                    .featured-media {
                        position: relative;
                        height: 17rem;
                        border-radius: 12px;
                        overflow: hidden;
                        opacity: 0;
                        animation: featured-rise 0.5s ease-out forwards;
                    }
                    @keyframes featured-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .featured-photo {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .featured-card:hover .featured-photo { transform: scale(1.05); }
                    .featured-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    }
                    .featured-caption {
                        position: absolute;
                        left: 1rem;
                        right: 1rem;
                        bottom: 1rem;
                    }
                    .featured-category {
                        display: inline-block;
                        margin-bottom: 0.5rem;
                        padding: 0.25rem 0.5rem;
                        font-size: 0.7rem;
                        font-weight: 500;
                        color: #fff;
                        background: rgba(255, 255, 255, 0.2);
                        backdrop-filter: blur(4px);
                        border-radius: 4px;
                    }
                    .featured-caption h3 {
                        margin: 0;
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #fff;
                    }
                "#}
            </style>
        </section>
    }
}
