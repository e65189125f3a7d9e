use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::motion::slider::SliderState;

#[derive(Properties, PartialEq)]
pub struct CompareSliderProps {
    pub before: AttrValue,
    pub after: AttrValue,
    #[prop_or(AttrValue::Static("Before"))]
    pub before_label: AttrValue,
    #[prop_or(AttrValue::Static("After"))]
    pub after_label: AttrValue,
}

/// Before/after image reveal. Pressing down inside the container arms the
/// drag; move and release are observed at window level so the drag keeps
/// tracking when the pointer leaves the container. The latest pointer
/// position wins; there is no buffering.
#[function_component(CompareSlider)]
pub fn compare_slider(props: &CompareSliderProps) -> Html {
    let container_ref = use_node_ref();
    let state = use_state_eq(SliderState::default);

    let press = {
        let container_ref = container_ref.clone();
        let state = state.clone();
        move |client_x: f64| {
            if let Some(container) = container_ref.cast::<web_sys::HtmlElement>() {
                let rect = container.get_bounding_client_rect();
                let mut next = *state;
                next.begin_drag();
                next.move_to(client_x, rect.left(), rect.width());
                state.set(next);
            }
        }
    };

    let onmousedown = {
        let press = press.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            press(f64::from(event.client_x()));
        })
    };

    let ontouchstart = Callback::from(move |event: TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            press(f64::from(touch.client_x()));
        }
    });

    {
        let container_ref = container_ref.clone();
        let state = state.clone();
        use_event_with_window("mousemove", move |event: MouseEvent| {
            drag_to(&container_ref, &state, f64::from(event.client_x()));
        });
    }
    {
        let container_ref = container_ref.clone();
        let state = state.clone();
        use_event_with_window("touchmove", move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                drag_to(&container_ref, &state, f64::from(touch.client_x()));
            }
        });
    }
    {
        let state = state.clone();
        use_event_with_window("mouseup", move |_: MouseEvent| release(&state));
    }
    {
        let state = state.clone();
        use_event_with_window("touchend", move |_: TouchEvent| release(&state));
    }
    {
        let state = state.clone();
        use_event_with_window("touchcancel", move |_: TouchEvent| release(&state));
    }

    let position = state.position();

    html! {
        <div ref={container_ref} class="compare-slider" {onmousedown} {ontouchstart}>
            <img
                class="compare-layer"
                src={props.after.clone()}
                alt={props.after_label.clone()}
                loading="lazy"
            />
            <div
                class="compare-before"
                style={format!("clip-path: inset(0 {}% 0 0);", 100.0 - position)}
            >
                <img
                    class="compare-layer"
                    src={props.before.clone()}
                    alt={props.before_label.clone()}
                    loading="lazy"
                />
            </div>
            <div class="compare-divider" style={format!("left: {}%;", position)}>
                <div class="compare-handle">
                    <svg width="16" height="16" viewBox="0 0 16 16" fill="none">
                        <path d="M6 4L2 8L6 12" stroke="currentColor" stroke-width="1.5"
                            stroke-linecap="round" stroke-linejoin="round" />
                        <path d="M10 4L14 8L10 12" stroke="currentColor" stroke-width="1.5"
                            stroke-linecap="round" stroke-linejoin="round" />
                    </svg>
                </div>
            </div>
            <span class="compare-tag compare-tag-before">{ props.before_label.to_string() }</span>
            <span class="compare-tag compare-tag-after">{ props.after_label.to_string() }</span>
            <style>
                {r#"
                    .compare-slider {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        min-height: 320px;
                        overflow: hidden;
                        cursor: ew-resize;
                        user-select: none;
                        touch-action: none;
                        background: #e5e7eb;
                    }
                    .compare-layer {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        pointer-events: none;
                    }
                    .compare-before {
                        position: absolute;
                        inset: 0;
                    }
                    .compare-divider {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        margin-left: -1px;
                        background: #fff;
                        box-shadow: 0 0 8px rgba(0, 0, 0, 0.35);
                    }
                    .compare-handle {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        background: #fff;
                        color: #374151;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 2px 10px rgba(0, 0, 0, 0.3);
                    }
                    .compare-tag {
                        position: absolute;
                        bottom: 12px;
                        padding: 4px 10px;
                        font-size: 0.7rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #fff;
                        background: rgba(17, 24, 39, 0.65);
                        backdrop-filter: blur(4px);
                        pointer-events: none;
                    }
                    .compare-tag-before { left: 12px; }
                    .compare-tag-after { right: 12px; }
                "#}
            </style>
        </div>
    }
}

fn drag_to(container_ref: &NodeRef, state: &UseStateHandle<SliderState>, client_x: f64) {
    if !state.dragging() {
        return;
    }
    if let Some(container) = container_ref.cast::<web_sys::HtmlElement>() {
        let rect = container.get_bounding_client_rect();
        let mut next = **state;
        if next.move_to(client_x, rect.left(), rect.width()) {
            state.set(next);
        }
    }
}

fn release(state: &UseStateHandle<SliderState>) {
    if state.dragging() {
        let mut next = **state;
        next.end_drag();
        state.set(next);
    }
}
