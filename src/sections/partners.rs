use yew::prelude::*;

const PARTNERS: [&str; 6] = [
    "Atlas Developments",
    "Cyprus Steel Group",
    "Harbor Logistics",
    "Kestrel Architects",
    "Aegis Constructions",
    "Lumen Retail",
];

#[function_component(TrustedPartners)]
pub fn trusted_partners() -> Html {
    html! {
        <section class="partners">
            <div class="partners-inner">
                <div class="partners-header">
                    <p class="eyebrow">{"Trusted Partners"}</p>
                    <h2>{"Built With Teams Who Value Precision"}</h2>
                    <p class="lede">
                        {"Long-term collaborations with developers, architects, and builders across Cyprus."}
                    </p>
                </div>
                <div class="partners-grid">
                    { for PARTNERS.iter().enumerate().map(|(index, partner)| html! {
                        <div class="partner-tile" style={format!("animation-delay: {}s;", 0.05 * index as f64)}>
                            { *partner }
                        </div>
                    })}
                </div>
            </div>
            <style>
                {r#"
                    .partners { background: #fff; padding: 4.5rem 1.5rem; }
                    .partners-inner { max-width: 1100px; margin: 0 auto; }
                    .partners-header { text-align: center; margin-bottom: 2.5rem; }
                    .partners-header .eyebrow {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.3em;
                        color: #6b7280;
                        margin: 0;
                    }
                    .partners-header h2 {
                        margin: 0.75rem 0 0;
                        font-size: 1.9rem;
                        font-weight: 600;
                        color: #111827;
                    }
                    .partners-header .lede {
                        margin: 0.75rem 0 0;
                        font-size: 0.95rem;
                        color: #4b5563;
                    }
                    .partners-grid {
                        display: grid;
                        grid-template-columns: repeat(6, 1fr);
                        gap: 1rem;
                    }
                    @media (max-width: 1024px) {
                        .partners-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    @media (max-width: 600px) {
                        .partners-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    .partner-tile {
                        border: 1px solid rgba(0, 0, 0, 0.05);
                        border-radius: 12px;
                        background: #f6f4ef;
                        padding: 1.5rem 1rem;
                        text-align: center;
                        font-size: 0.7rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: #4b5563;
                        opacity: 0;
                        animation: partner-rise 0.4s ease-out forwards;
                    }
                    @keyframes partner-rise {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </section>
    }
}
