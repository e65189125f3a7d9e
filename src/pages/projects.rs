use std::collections::HashSet;

use gloo_console::log;
use yew::prelude::*;

use crate::components::footer::Footer;

#[derive(Clone, Copy, PartialEq)]
struct Project {
    id: u32,
    title: &'static str,
    category: &'static str,
    location: &'static str,
    year: &'static str,
    description: &'static str,
    image: &'static str,
    specs: &'static [&'static str],
}

const CATEGORIES: [&str; 5] = ["All", "Structural", "Warehouses", "Staircases", "Custom"];

const PROJECTS: [Project; 8] = [
    Project {
        id: 1,
        title: "Limassol Industrial Complex",
        category: "Warehouses",
        location: "Limassol, Cyprus",
        year: "2024",
        description: "A 2,500m² warehouse facility featuring heavy-duty steel framing, \
                      insulated cladding, and loading bay infrastructure.",
        image: "/assets/projects/project1.jpg",
        specs: &["2,500m² floor area", "12m clear height", "4 loading bays"],
    },
    Project {
        id: 2,
        title: "Nicosia Office Tower",
        category: "Structural",
        location: "Nicosia, Cyprus",
        year: "2024",
        description: "Structural steel framework for a 6-story commercial building, including \
                      mezzanine floors and rooftop support structures.",
        image: "/assets/projects/project2.jpg",
        specs: &["6 floors", "Steel frame structure", "Seismic-rated design"],
    },
    Project {
        id: 3,
        title: "Luxury Villa Staircase",
        category: "Staircases",
        location: "Paphos, Cyprus",
        year: "2023",
        description: "Custom-designed floating steel staircase with glass balustrades and \
                      LED-integrated handrails for a private residence.",
        image: "/assets/projects/project3.jpg",
        specs: &["Floating design", "Glass balustrades", "LED lighting"],
    },
    Project {
        id: 4,
        title: "Agricultural Storage Facility",
        category: "Warehouses",
        location: "Larnaca, Cyprus",
        year: "2023",
        description: "Climate-controlled storage warehouse with reinforced steel structure \
                      designed for agricultural equipment and produce.",
        image: "/assets/projects/project4.jpg",
        specs: &["1,800m² area", "Climate controlled", "Heavy load capacity"],
    },
    Project {
        id: 5,
        title: "Industrial Spiral Staircase",
        category: "Staircases",
        location: "Limassol, Cyprus",
        year: "2023",
        description: "Heavy-duty industrial spiral staircase connecting three levels of a \
                      manufacturing facility with anti-slip treads.",
        image: "/assets/projects/project5.jpg",
        specs: &["3-level span", "Anti-slip treads", "Industrial grade"],
    },
    Project {
        id: 6,
        title: "Residential Steel Frame",
        category: "Structural",
        location: "Ayia Napa, Cyprus",
        year: "2022",
        description: "Complete steel skeleton for a modern 4-bedroom villa, designed for rapid \
                      construction and earthquake resistance.",
        image: "/assets/projects/project6.jpg",
        specs: &["4-bedroom villa", "Rapid assembly", "Seismic-resistant"],
    },
    Project {
        id: 7,
        title: "Custom Gate & Railing System",
        category: "Custom",
        location: "Protaras, Cyprus",
        year: "2024",
        description: "Bespoke entrance gate and perimeter railing system with automated sliding \
                      mechanism and decorative metalwork.",
        image: "/assets/projects/project7.jpg",
        specs: &["Automated gate", "Decorative panels", "Powder-coated finish"],
    },
    Project {
        id: 8,
        title: "Logistics Center Extension",
        category: "Warehouses",
        location: "Nicosia, Cyprus",
        year: "2022",
        description: "3,200m² extension to existing logistics facility with integrated conveyor \
                      supports and overhead crane rails.",
        image: "/assets/projects/project8.jpg",
        specs: &["3,200m² extension", "Crane rails", "Conveyor integration"],
    },
];

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    project: Project,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="project-modal-overlay" onclick={on_overlay_click}>
            <div class="project-modal" onclick={swallow_click}>
                <button class="modal-close" onclick={on_close_click} aria-label="Close">
                    {"✕"}
                </button>
                <div class="modal-media">
                    <img src={project.image} alt={project.title} />
                    <div class="modal-media-shade"></div>
                    <div class="modal-media-caption">
                        <span class="modal-category">{ project.category }</span>
                        <h3>{ project.title }</h3>
                    </div>
                </div>
                <div class="modal-body">
                    <div class="modal-meta">
                        <span>{"📍 "}{ project.location }</span>
                        <span>{"📅 "}{ project.year }</span>
                    </div>
                    <p class="modal-description">{ project.description }</p>
                    <h4>{"Project Specifications"}</h4>
                    <div class="modal-specs">
                        { for project.specs.iter().map(|spec| html! {
                            <span class="spec-chip">{ *spec }</span>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Project showcase: category filter chips, card grid, and a modal with
/// the full write-up. Cards whose images fail to load fall back to a
/// neutral panel and stay clickable.
#[function_component(Projects)]
pub fn projects() -> Html {
    let active_category = use_state_eq(|| "All");
    let selected = use_state_eq(|| None::<u32>);
    let broken_images = use_state(HashSet::<u32>::new);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let filtered: Vec<&Project> = PROJECTS
        .iter()
        .filter(|project| *active_category == "All" || project.category == *active_category)
        .collect();

    html! {
        <main class="projects-page">
            <section class="projects">
                <div class="projects-inner">
                    <div class="projects-header">
                        <div class="section-label">
                            <span class="rule"></span>
                            <span>{"Our Work"}</span>
                        </div>
                        <h2>{"Featured Projects"}</h2>
                        <p>
                            {"A selection of our completed works across industrial, commercial, \
                              and residential applications."}
                        </p>
                    </div>
                    <div class="projects-filters">
                        { for CATEGORIES.iter().map(|category| {
                            let onclick = {
                                let active_category = active_category.clone();
                                let category = *category;
                                Callback::from(move |_| active_category.set(category))
                            };
                            html! {
                                <button
                                    key={*category}
                                    class={classes!(
                                        "filter-chip",
                                        (*active_category == *category).then_some("active"),
                                    )}
                                    {onclick}
                                >
                                    { *category }
                                </button>
                            }
                        })}
                    </div>
                    <div class="projects-grid">
                        { for filtered.iter().map(|project| {
                            let project = **project;
                            let open = {
                                let selected = selected.clone();
                                Callback::from(move |_| selected.set(Some(project.id)))
                            };
                            let onerror = {
                                let broken_images = broken_images.clone();
                                Callback::from(move |_: Event| {
                                    log!("project image failed to load:", project.image);
                                    let mut next = (*broken_images).clone();
                                    next.insert(project.id);
                                    broken_images.set(next);
                                })
                            };
                            html! {
                                <article key={project.id} class="project-card" onclick={open}>
                                    <div class="card-media">
                                        if broken_images.contains(&project.id) {
                                            <div class="card-media-fallback"></div>
                                        } else {
                                            <img
                                                src={project.image}
                                                alt={project.title}
                                                loading="lazy"
                                                {onerror}
                                            />
                                        }
                                        <div class="card-media-shade"></div>
                                        <div class="card-arrow">{"↗"}</div>
                                    </div>
                                    <div class="card-body">
                                        <div class="card-meta">
                                            <span class="card-category">{ project.category }</span>
                                            <span class="dot">{"•"}</span>
                                            <span class="card-year">{ project.year }</span>
                                        </div>
                                        <h3>{ project.title }</h3>
                                        <p>{"📍 "}{ project.location }</p>
                                    </div>
                                </article>
                            }
                        })}
                    </div>
                </div>
                { if let Some(id) = *selected {
                    match PROJECTS.iter().find(|project| project.id == id) {
                        Some(project) => html! {
                            <ProjectModal project={*project} on_close={close_modal} />
                        },
                        None => html! {},
                    }
                } else {
                    html! {}
                }}
            </section>
            <Footer />
            <style>
                {r#"
                    .projects-page { padding-top: 5rem; background: #eceef1; }
                    .projects { padding: 6rem 1.5rem; }
                    .projects-inner { max-width: 1100px; margin: 0 auto; }
                    .projects-header { max-width: 42rem; margin-bottom: 3rem; }
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
                    .projects-header h2 {
                        margin: 0 0 1rem;
                        font-size: clamp(1.9rem, 4vw, 3rem);
                        font-weight: 600;
                        color: #111827;
                        line-height: 1.1;
                    }
                    .projects-header p { margin: 0; color: #4b5563; }
                    .projects-filters {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 2.5rem;
                    }
                    .filter-chip {
                        padding: 0.5rem 1rem;
                        font-size: 0.85rem;
                        font-weight: 500;
                        background: #fff;
                        color: #4b5563;
                        border: none;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .filter-chip:hover { background: #f3f4f6; }
                    .filter-chip.active { background: #3b82f6; color: #fff; }
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .projects-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 640px) {
                        .projects-grid { grid-template-columns: 1fr; }
                    }
                    .project-card {
                        background: #fff;
                        overflow: hidden;
                        cursor: pointer;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                        transition: box-shadow 0.3s;
                        animation: card-in 0.3s ease-out;
                    }
                    @keyframes card-in {
                        from { opacity: 0; transform: scale(0.95); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .project-card:hover { box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1); }
                    .card-media {
                        position: relative;
                        height: 14rem;
                        overflow: hidden;
                        background: #e5e7eb;
                    }
                    .card-media img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .project-card:hover .card-media img { transform: scale(1.05); }
                    .card-media-fallback {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, #d1d5db, #9ca3af);
                    }
                    .card-media-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .project-card:hover .card-media-shade { opacity: 1; }
                    .card-arrow {
                        position: absolute;
                        bottom: 1rem;
                        right: 1rem;
                        width: 40px;
                        height: 40px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #fff;
                        color: #3b82f6;
                        opacity: 0;
                        transform: translateY(8px);
                        transition: all 0.3s;
                    }
                    .project-card:hover .card-arrow { opacity: 1; transform: translateY(0); }
                    .card-body { padding: 1.25rem; }
                    .card-meta {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 0.5rem;
                        font-size: 0.75rem;
                    }
                    .card-category { color: #3b82f6; font-weight: 500; }
                    .card-meta .dot { color: #d1d5db; }
                    .card-year { color: #9ca3af; }
                    .card-body h3 {
                        margin: 0 0 0.25rem;
                        font-size: 1rem;
                        font-weight: 600;
                        color: #111827;
                        transition: color 0.2s;
                    }
                    .project-card:hover .card-body h3 { color: #3b82f6; }
                    .card-body p { margin: 0; font-size: 0.85rem; color: #6b7280; }
                    .project-modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                        animation: overlay-in 0.2s ease-out;
                    }
                    @keyframes overlay-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .project-modal {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #fff;
                        animation: modal-in 0.25s ease-out;
                    }
                    @keyframes modal-in {
                        from { opacity: 0; transform: scale(0.95); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 1;
                        width: 40px;
                        height: 40px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(4px);
                        border: none;
                        color: #4b5563;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .modal-close:hover { background: #fff; color: #111827; }
                    .modal-media { position: relative; height: 24rem; background: #e5e7eb; }
                    .modal-media img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .modal-media-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    }
                    .modal-media-caption {
                        position: absolute;
                        left: 1.5rem;
                        right: 1.5rem;
                        bottom: 1.5rem;
                    }
                    .modal-category {
                        display: inline-block;
                        margin-bottom: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #fff;
                        background: #3b82f6;
                    }
                    .modal-media-caption h3 {
                        margin: 0;
                        font-size: clamp(1.5rem, 3vw, 1.9rem);
                        font-weight: 600;
                        color: #fff;
                    }
                    .modal-body { padding: 2rem; }
                    .modal-meta {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.85rem;
                        color: #6b7280;
                    }
                    .modal-description {
                        margin: 0 0 1.5rem;
                        color: #4b5563;
                        line-height: 1.6;
                    }
                    .modal-body h4 {
                        margin: 0 0 0.75rem;
                        font-size: 0.8rem;
                        font-weight: 400;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        color: #9ca3af;
                    }
                    .modal-specs { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .spec-chip {
                        padding: 0.4rem 0.75rem;
                        font-size: 0.85rem;
                        background: #f3f4f6;
                        color: #374151;
                    }
                "#}
            </style>
        </main>
    }
}
