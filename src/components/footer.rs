use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const COMPANY_LINKS: [(&str, &str); 4] = [
    ("About Us", "/#about"),
    ("Services", "/#services"),
    ("Projects", "/projects"),
    ("Contact", "/#contact"),
];

const SERVICE_LINKS: [&str; 4] = [
    "Structural Steel",
    "Warehouses",
    "Metal Staircases",
    "Custom Fabrication",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-columns">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="footer-logo">
                            <img src="/assets/logo.png" alt={format!("{} Logo", config::COMPANY_NAME)} />
                            <span>{ config::COMPANY_NAME }</span>
                        </Link<Route>>
                        <p>
                            {"Over 30 years of excellence in metal construction and fabrication. \
                              Building solutions that last."}
                        </p>
                    </div>
                    <div class="footer-column">
                        <h4>{"Company"}</h4>
                        <ul>
                            { for COMPANY_LINKS.iter().map(|(label, href)| html! {
                                <li><a href={*href}>{ *label }</a></li>
                            })}
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Services"}</h4>
                        <ul>
                            { for SERVICE_LINKS.iter().map(|label| html! {
                                <li><a href="/#services">{ *label }</a></li>
                            })}
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Contact"}</h4>
                        <ul>
                            <li><a href={config::PHONE_HREF}>{ config::PHONE }</a></li>
                            <li><a href={config::EMAIL_HREF}>{ config::EMAIL }</a></li>
                            <li>{ config::LOCATION }</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} {}. All rights reserved.", year, config::COMPANY_LEGAL_NAME) }</p>
                    <p>{ format!("Crafted with precision since {}", config::FOUNDED_YEAR) }</p>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #0a0f1a;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .footer-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .footer-columns {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2.5rem;
                        padding-bottom: 3rem;
                        border-bottom: 1px solid #1f2937;
                    }
                    @media (max-width: 900px) {
                        .footer-columns { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 560px) {
                        .footer-columns { grid-template-columns: 1fr; }
                    }
                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        margin-bottom: 1rem;
                        text-decoration: none;
                    }
                    .footer-logo img { width: 32px; height: 32px; object-fit: contain; }
                    .footer-logo span { font-size: 0.9rem; font-weight: 500; color: #fff; }
                    .footer-brand p {
                        font-size: 0.85rem;
                        color: #6b7280;
                        line-height: 1.6;
                    }
                    .footer-column h4 {
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: #fff;
                        margin: 0 0 1rem;
                    }
                    .footer-column ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .footer-column li { font-size: 0.85rem; color: #6b7280; }
                    .footer-column a {
                        color: #6b7280;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-column a:hover { color: #fff; }
                    .footer-bottom {
                        padding-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .footer-bottom p { font-size: 0.75rem; color: #4b5563; margin: 0; }
                "#}
            </style>
        </footer>
    }
}
