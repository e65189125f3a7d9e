use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::config;

const STATS: [(u32, &str, &str); 3] = [
    (30, "+", "Years Experience"),
    (200, "+", "Projects Completed"),
    (1990, "", "Founded"),
];

const DIFFERENTIATORS: [&str; 4] = [
    "Decades of real-world experience, not theory",
    "End-to-end control from design to fabrication to installation",
    "Industrial-grade quality with attention to detail",
    "Long-term partnerships built on trust and results",
];

const LEADERSHIP: [(&str, &str, &str); 2] = [
    (
        "Christos Leonida",
        "Mechanical Engineer",
        "Responsible for engineering design, structural solutions, and technical supervision.",
    ),
    (
        "Panikos Leonida",
        "Head of Production",
        "Oversees fabrication, quality control, and on-site execution, ensuring precision at \
         every stage.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="about-inner">
                <div class="about-header">
                    <div class="section-label">
                        <span class="rule"></span>
                        <span>{"About Us"}</span>
                    </div>
                    <h2>
                        {"Built on Experience. "}
                        <span class="accent">{"Driven by Precision."}</span>
                    </h2>
                    <p>
                        {"With over 30 years of experience in metal construction and fabrication, \
                          we have delivered 200+ completed projects across industrial, commercial, \
                          and custom steel applications."}
                    </p>
                </div>
                <div class="about-stats">
                    { for STATS.iter().map(|(target, suffix, label)| html! {
                        <div class="about-stat">
                            <p class="value"><CountUp target={*target} suffix={*suffix} /></p>
                            <p class="label">{ *label }</p>
                        </div>
                    })}
                </div>
                <div class="about-body">
                    <div class="about-story">
                        <p>
                            { format!(
                                "Founded in {}, our company combines engineering expertise with \
                                 hands-on production excellence, ensuring every project meets the \
                                 highest standards of safety, durability, and craftsmanship.",
                                config::FOUNDED_YEAR
                            )}
                        </p>
                        <h3>{"What Sets Us Apart"}</h3>
                        <ul>
                            { for DIFFERENTIATORS.iter().map(|item| html! {
                                <li>
                                    <span class="bullet"></span>
                                    <span>{ *item }</span>
                                </li>
                            })}
                        </ul>
                    </div>
                    <div class="about-leadership">
                        <h3>{"Leadership"}</h3>
                        { for LEADERSHIP.iter().map(|(name, role, description)| html! {
                            <div class="leader">
                                <h4>{ *name }</h4>
                                <p class="role">{ *role }</p>
                                <p class="bio">{ *description }</p>
                            </div>
                        })}
                    </div>
                </div>
                <div class="about-closing">
                    <p>
                        {"From concept to completion, we don't just build metal structures."}
                        <br />
                        <span>{"We build solutions that last."}</span>
                    </p>
                </div>
            </div>
            <style>
                {r#"
                    .about { background: #fff; padding: 6rem 1.5rem; }
                    .about-inner { max-width: 1100px; margin: 0 auto; }
                    .about-header { margin-bottom: 4rem; }
                    .about-header h2 {
                        margin: 0 0 1.5rem;
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        font-weight: 600;
                        color: #111827;
                        line-height: 1.1;
                    }
                    .about-header h2 .accent { color: #3b82f6; }
                    .about-header p {
                        margin: 0;
                        max-width: 46rem;
                        font-size: 1.1rem;
                        color: #4b5563;
                        line-height: 1.6;
                    }
                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-bottom: 5rem;
                        padding-bottom: 5rem;
                        border-bottom: 1px solid #f3f4f6;
                    }
                    .about-stat .value {
                        margin: 0 0 0.5rem;
                        font-size: clamp(2.5rem, 5vw, 3.75rem);
                        font-weight: 600;
                        color: #111827;
                    }
                    .about-stat .label { margin: 0; font-size: 0.85rem; color: #6b7280; }
                    .about-body {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                    }
                    @media (max-width: 900px) {
                        .about-body { grid-template-columns: 1fr; }
                    }
                    .about-story > p {
                        margin: 0 0 2.5rem;
                        color: #4b5563;
                        line-height: 1.6;
                    }
                    .about-story h3, .about-leadership h3 {
                        margin: 0 0 1.5rem;
                        font-size: 0.85rem;
                        font-weight: 400;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: #9ca3af;
                    }
                    .about-story ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .about-story li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        color: #374151;
                    }
                    .about-story .bullet {
                        width: 6px;
                        height: 6px;
                        margin-top: 0.5rem;
                        flex-shrink: 0;
                        border-radius: 50%;
                        background: #3b82f6;
                    }
                    .leader {
                        border-left: 2px solid rgba(59, 130, 246, 0.2);
                        padding-left: 1.5rem;
                        margin-bottom: 2rem;
                        transition: border-color 0.3s;
                    }
                    .leader:hover { border-color: #3b82f6; }
                    .leader h4 {
                        margin: 0 0 0.25rem;
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .leader .role {
                        margin: 0 0 0.75rem;
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: #3b82f6;
                    }
                    .leader .bio {
                        margin: 0;
                        font-size: 0.85rem;
                        color: #4b5563;
                        line-height: 1.6;
                    }
                    .about-closing {
                        margin-top: 5rem;
                        padding-top: 4rem;
                        border-top: 1px solid #f3f4f6;
                        text-align: center;
                    }
                    .about-closing p {
                        margin: 0 auto;
                        max-width: 34rem;
                        font-size: 1.3rem;
                        color: #374151;
                        line-height: 1.6;
                    }
                    .about-closing span { color: #111827; font-weight: 500; }
                "#}
            </style>
        </section>
    }
}
