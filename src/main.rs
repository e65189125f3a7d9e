use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod motion {
    pub mod counter;
    pub mod slider;
    pub mod timeline;
}
mod components {
    pub mod compare_slider;
    pub mod count_up;
    pub mod footer;
    pub mod gallery_reveal;
    pub mod lazy_image;
}
mod sections {
    pub mod about;
    pub mod before_after;
    pub mod contact;
    pub mod hero;
    pub mod partners;
    pub mod process_strip;
    pub mod projects_cta;
    pub mod services;
}
mod pages {
    pub mod home;
    pub mod projects;
}

use pages::{home::Home, projects::Projects};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
    }
}

const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", "/#home"),
    ("About Us", "/#about"),
    ("Services", "/#services"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_pos = window_clone.scroll_y().unwrap();
                    is_scrolled.set(scroll_pos > 50.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!(
            "top-nav",
            (*is_scrolled).then_some("scrolled"),
            (*menu_open).then_some("menu-open"),
        )}>
            <nav class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/logo.png" alt={format!("{} Logo", config::COMPANY_NAME)} />
                    <span>{ config::COMPANY_NAME }</span>
                </Link<Route>>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link">{ *label }</a>
                    })}
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Projects} classes="nav-link">
                            {"Projects"}
                        </Link<Route>>
                    </div>
                </div>
                <a href="/#contact" class="nav-cta">{"Contact"}</a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            <div class="mobile-menu" onclick={close_menu}>
                { for NAV_LINKS.iter().map(|(label, href)| html! {
                    <a href={*href} class="nav-link">{ *label }</a>
                })}
                <Link<Route> to={Route::Projects} classes="nav-link">
                    {"Projects"}
                </Link<Route>>
                <a href="/#contact" class="nav-link nav-link-contact">{"Contact"}</a>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        background: transparent;
                        transition: background 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(17, 24, 39, 0.95);
                        backdrop-filter: blur(4px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        text-decoration: none;
                    }
                    .nav-logo img { width: 36px; height: 36px; object-fit: contain; }
                    .nav-logo span { font-size: 0.9rem; font-weight: 500; color: #fff; }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover { color: #fff; }
                    .nav-cta {
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #fff;
                        background: #3b82f6;
                        text-decoration: none;
                        transition: background 0.2s;
                    }
                    .nav-cta:hover { background: #60a5fa; }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 5px;
                        width: 36px;
                        height: 36px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 20px;
                        height: 1px;
                        background: #fff;
                        transition: all 0.3s;
                    }
                    .menu-open .burger-menu span:nth-child(1) {
                        transform: rotate(45deg) translateY(8px);
                    }
                    .menu-open .burger-menu span:nth-child(2) { opacity: 0; }
                    .menu-open .burger-menu span:nth-child(3) {
                        transform: rotate(-45deg) translateY(-8px);
                    }
                    .mobile-menu {
                        display: none;
                        flex-direction: column;
                        gap: 0.25rem;
                        padding: 0.5rem 1.5rem 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(17, 24, 39, 0.98);
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s;
                    }
                    .menu-open .mobile-menu { max-height: 20rem; }
                    .mobile-menu .nav-link { padding: 0.6rem 0; }
                    .mobile-menu .nav-link-contact {
                        margin-top: 0.5rem;
                        padding: 0.6rem 1rem;
                        text-align: center;
                        background: #3b82f6;
                        color: #fff;
                    }
                    @media (max-width: 768px) {
                        .nav-links, .nav-cta { display: none; }
                        .burger-menu { display: flex; }
                        .mobile-menu { display: flex; }
                    }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
