use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::motion::counter;

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(2000.0)]
    pub duration_ms: f64,
}

/// Animated stat number. Renders the target until the element scrolls
/// into view, then counts up through animation frames. Runs once per
/// mount; a pending frame request is cancelled if the view goes away
/// mid-animation.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let node_ref = use_node_ref();
    // Start at the target so there is no flash of 0 before the first frame.
    let value = use_state_eq(|| props.target);
    let started = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let check = {
                    let window = window.clone();
                    let node_ref = node_ref.clone();
                    let started = started.clone();
                    move || {
                        if let Some(element) = node_ref.cast::<web_sys::HtmlElement>() {
                            let rect = element.get_bounding_client_rect();
                            let viewport = window.inner_height().unwrap().as_f64().unwrap();
                            if rect.top() < viewport * 0.85 && rect.bottom() > 0.0 {
                                started.set(true);
                            }
                        }
                    }
                };
                check();
                let on_scroll = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    {
        let value = value.clone();
        let target = props.target;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |started: &bool| {
                let pending = Rc::new(RefCell::new(None::<i32>));
                if *started {
                    let window = web_sys::window().unwrap();
                    let performance = window.performance().unwrap();
                    let curve = counter::CountUp::new(target, duration_ms);
                    let started_at = performance.now();
                    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                        Rc::new(RefCell::new(None));
                    let schedule = {
                        let window = window.clone();
                        let pending = pending.clone();
                        let frame = frame.clone();
                        move || {
                            let id = window
                                .request_animation_frame(
                                    frame.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                                )
                                .unwrap();
                            *pending.borrow_mut() = Some(id);
                        }
                    };
                    *frame.borrow_mut() = Some(Closure::wrap(Box::new({
                        let schedule = schedule.clone();
                        let pending = pending.clone();
                        move || {
                            let elapsed = performance.now() - started_at;
                            value.set(curve.value_at(elapsed));
                            if curve.finished(elapsed) {
                                *pending.borrow_mut() = None;
                            } else {
                                schedule();
                            }
                        }
                    }) as Box<dyn FnMut()>));
                    schedule();
                }
                let pending = pending.clone();
                move || {
                    if let Some(id) = pending.borrow_mut().take() {
                        let _ = web_sys::window().unwrap().cancel_animation_frame(id);
                    }
                }
            },
            *started,
        );
    }

    html! {
        <span ref={node_ref}>{ *value }{ props.suffix.to_string() }</span>
    }
}
