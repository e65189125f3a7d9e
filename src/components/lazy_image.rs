use yew::prelude::*;
use gloo_console::log;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    /// Swapped in when the primary source fails to load. Without one the
    /// broken-image affordance is left as-is; either way nothing outside
    /// the element is touched.
    #[prop_or_default]
    pub fallback: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// Image element with lazy loading and an on-error fallback hook. Asset
/// loading stays decoupled from whatever animation the parent is running.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let current = use_state_eq(|| props.src.clone());

    {
        let current = current.clone();
        use_effect_with_deps(
            move |src: &AttrValue| {
                current.set(src.clone());
                || ()
            },
            props.src.clone(),
        );
    }

    let onerror = {
        let current = current.clone();
        let fallback = props.fallback.clone();
        Callback::from(move |_: Event| {
            log!("image failed to load:", current.to_string());
            if let Some(fallback) = fallback.clone() {
                current.set(fallback);
            }
        })
    };

    html! {
        <img
            src={(*current).clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            style={props.style.clone()}
            loading="lazy"
            {onerror}
        />
    }
}
