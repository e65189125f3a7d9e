use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::lazy_image::LazyImage;
use crate::config;
use crate::motion::timeline::{ItemFrame, Rect, RevealItem, RevealTimeline, Vec2};

/// Scroll distance in pixels over which the grid entrance is scrubbed.
/// Fixed rather than derived from viewport height, so the scrub pacing
/// is the same on every device.
const SCRUB_DISTANCE: f64 = 1200.0;
/// Authoring units of the shared timeline: each item tweens for one unit
/// and starts 0.12 units after the previous one.
const ITEM_STEP: f64 = 0.12;
const ITEM_DURATION: f64 = 1.0;

const ITEMS: [RevealItem; 9] = [
    RevealItem {
        position: Rect { top: 10.0, left: 10.0, width: 24.0, height: 26.0 },
        entry_offset: Vec2 { x: -140.0, y: -80.0 },
    },
    RevealItem {
        position: Rect { top: 8.0, left: 42.0, width: 20.0, height: 22.0 },
        entry_offset: Vec2 { x: 130.0, y: -90.0 },
    },
    RevealItem {
        position: Rect { top: 14.0, left: 68.0, width: 18.0, height: 30.0 },
        entry_offset: Vec2 { x: -150.0, y: 70.0 },
    },
    RevealItem {
        position: Rect { top: 38.0, left: 6.0, width: 22.0, height: 28.0 },
        entry_offset: Vec2 { x: 140.0, y: 120.0 },
    },
    RevealItem {
        position: Rect { top: 36.0, left: 34.0, width: 24.0, height: 30.0 },
        entry_offset: Vec2 { x: 90.0, y: -130.0 },
    },
    RevealItem {
        position: Rect { top: 44.0, left: 66.0, width: 20.0, height: 24.0 },
        entry_offset: Vec2 { x: -110.0, y: 140.0 },
    },
    RevealItem {
        position: Rect { top: 70.0, left: 18.0, width: 28.0, height: 20.0 },
        entry_offset: Vec2 { x: 120.0, y: 40.0 },
    },
    RevealItem {
        position: Rect { top: 62.0, left: 52.0, width: 22.0, height: 22.0 },
        entry_offset: Vec2 { x: -160.0, y: 20.0 },
    },
    RevealItem {
        position: Rect { top: 58.0, left: 78.0, width: 14.0, height: 24.0 },
        entry_offset: Vec2 { x: 160.0, y: -40.0 },
    },
];

const IMAGES: [(&str, &str); 9] = [
    ("/assets/gallery/grid1.jpg", "Metal fabrication project 1"),
    ("/assets/gallery/grid2.jpg", "Metal fabrication project 2"),
    ("/assets/gallery/grid3.jpg", "Metal fabrication project 3"),
    ("/assets/gallery/grid4.jpg", "Metal fabrication project 4"),
    ("/assets/gallery/grid5.jpg", "Metal fabrication project 5"),
    ("/assets/gallery/grid6.jpg", "Metal fabrication project 6"),
    ("/assets/gallery/grid7.jpg", "Metal fabrication project 7"),
    ("/assets/gallery/grid8.jpg", "Metal fabrication project 8"),
    ("/assets/gallery/grid9.jpg", "Metal fabrication project 9"),
];

/// Pinned image grid whose entrance is scrubbed by scroll. The section is
/// one viewport taller than the pinned frame by `SCRUB_DISTANCE`; a sticky
/// inner frame holds still while the section scrolls through, and the
/// window scroll listener converts the section's offset into timeline
/// progress. Scroll and resize listeners are dropped on unmount.
#[function_component(GalleryReveal)]
pub fn gallery_reveal() -> Html {
    let section_ref = use_node_ref();
    let progress = use_state_eq(|| 0.0f64);

    {
        let section_ref = section_ref.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let timeline =
                    RevealTimeline::staggered(ITEMS.len(), ITEM_STEP, ITEM_DURATION, SCRUB_DISTANCE);
                let update = {
                    let section_ref = section_ref.clone();
                    let progress = progress.clone();
                    move || {
                        // Rect not readable yet means not ready; the next
                        // event recomputes from fresh geometry, which also
                        // covers viewport resizes.
                        if let Some(section) = section_ref.cast::<web_sys::HtmlElement>() {
                            let rect = section.get_bounding_client_rect();
                            progress.set(timeline.global_progress(-rect.top()));
                        }
                    }
                };
                update();
                let on_scroll = Closure::wrap(Box::new(update.clone()) as Box<dyn FnMut()>);
                let on_resize = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let timeline = RevealTimeline::staggered(ITEMS.len(), ITEM_STEP, ITEM_DURATION, SCRUB_DISTANCE);
    let t = *progress;

    html! {
        <section
            class="gallery-reveal"
            ref={section_ref}
            style={format!("height: calc(100vh + {}px);", SCRUB_DISTANCE)}
        >
            <div class="gallery-frame">
                <div class="gallery-grid-paper"></div>
                <div class="gallery-haze"></div>
                <div class="gallery-watermark">
                    <img src="/assets/logo.png" alt={config::COMPANY_NAME} />
                </div>
                { for ITEMS.iter().enumerate().map(|(index, item)| {
                    let frame = ItemFrame::at(item, timeline.item_progress(t, index));
                    let (src, alt) = IMAGES[index];
                    html! {
                        <div
                            key={src}
                            class="gallery-item"
                            style={format!(
                                "top: {}%; left: {}%; width: {}%; height: {}%; \
                                 transform: translate({}%, {}%) scale({}); opacity: {};",
                                item.position.top,
                                item.position.left,
                                item.position.width,
                                item.position.height,
                                frame.translate_x,
                                frame.translate_y,
                                frame.scale,
                                frame.opacity,
                            )}
                        >
                            <LazyImage src={src} alt={alt} class={classes!("gallery-photo")} />
                        </div>
                    }
                })}
            </div>
            <style>
                {r#"
                    .gallery-reveal {
                        position: relative;
                        background: #fff;
                    }
                    .gallery-frame {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .gallery-grid-paper {
                        position: absolute;
                        inset: 0;
                        opacity: 0.3;
                        pointer-events: none;
                        background-image:
                            linear-gradient(to right, rgba(0, 0, 0, 0.25) 1px, transparent 1px),
                            linear-gradient(to bottom, rgba(0, 0, 0, 0.25) 1px, transparent 1px);
                        background-size: 42px 42px;
                    }
                    .gallery-haze {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(to bottom, #fff, transparent, rgba(255, 255, 255, 0.7));
                    }
                    .gallery-watermark {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        pointer-events: none;
                    }
                    .gallery-watermark img {
                        width: 520px;
                        max-width: 70vw;
                        opacity: 0.15;
                    }
                    .gallery-item {
                        position: absolute;
                        overflow: hidden;
                        border-radius: 16px;
                        border: 1px solid rgba(0, 0, 0, 0.1);
                        background: #f3f4f6;
                        will-change: transform, opacity;
                    }
                    .gallery-photo {
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
