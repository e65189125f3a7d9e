use yew::prelude::*;

const STEPS: [(&str, &str, &str); 4] = [
    (
        "Design & Engineering",
        "Concept development, structural calculations, and shop drawings.",
        "30+ years",
    ),
    (
        "Fabrication",
        "Precision cutting, welding, and finishing in our workshop.",
        "200+ builds",
    ),
    (
        "Installation",
        "On-site assembly with safety-first planning and execution.",
        "Full-service",
    ),
    (
        "Final Inspection",
        "Quality checks, load verification, and client handover.",
        "Zero guesswork",
    ),
];

#[function_component(ProcessStrip)]
pub fn process_strip() -> Html {
    html! {
        <section class="process-strip">
            <div class="process-grid-paper"></div>
            <div class="process-inner">
                <div class="process-header">
                    <p class="eyebrow">{"Our Process"}</p>
                    <h2>{"From Concept to Completion"}</h2>
                    <p class="lede">
                        {"A clear, disciplined workflow keeps every project on schedule and on spec."}
                    </p>
                </div>
                <div class="process-cards">
                    { for STEPS.iter().enumerate().map(|(index, (title, detail, stat))| html! {
                        <div class="process-card" style={format!("animation-delay: {}s;", 0.1 * index as f64)}>
                            <p class="step-number">{ format!("Step {:02}", index + 1) }</p>
                            <h3>{ *title }</h3>
                            <p class="detail">{ *detail }</p>
                            <div class="stat">{ *stat }</div>
                        </div>
                    })}
                </div>
            </div>
            <style>
                {r#"
                    .process-strip {
                        position: relative;
                        background: #111827;
                        padding: 5rem 1.5rem;
                        overflow: hidden;
                    }
                    .process-grid-paper {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        pointer-events: none;
                        background-image:
                            linear-gradient(to right, rgba(255, 255, 255, 0.12) 1px, transparent 1px),
                            linear-gradient(to bottom, rgba(255, 255, 255, 0.12) 1px, transparent 1px);
                        background-size: 42px 42px;
                    }
                    .process-inner {
                        position: relative;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .process-header .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: rgba(255, 255, 255, 0.7);
                        margin: 0;
                    }
                    .process-header h2 {
                        margin: 0.75rem 0 0;
                        font-size: 1.9rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .process-header .lede {
                        margin: 0.75rem 0 2.5rem;
                        max-width: 36rem;
                        font-size: 0.95rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .process-cards {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .process-cards { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 600px) {
                        .process-cards { grid-template-columns: 1fr; }
                    }
                    .process-card {
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.05);
                        padding: 1.5rem;
                        box-shadow: 0 12px 30px rgba(0, 0, 0, 0.45);
                        backdrop-filter: blur(4px);
                        opacity: 0;
                        animation: process-rise 0.4s ease-out forwards;
                    }
                    @keyframes process-rise {
                        from { opacity: 0; transform: translateY(14px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .process-card .step-number {
                        font-size: 0.7rem;
                        text-transform: uppercase;
                        letter-spacing: 0.25em;
                        color: rgba(255, 255, 255, 0.6);
                        margin: 0;
                    }
                    .process-card h3 {
                        margin: 0.75rem 0 0;
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .process-card .detail {
                        margin: 0.75rem 0 0;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.7);
                        line-height: 1.5;
                    }
                    .process-card .stat {
                        margin-top: 1.5rem;
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: rgba(255, 255, 255, 0.8);
                    }
                "#}
            </style>
        </section>
    }
}
