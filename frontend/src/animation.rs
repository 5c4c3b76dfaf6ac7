use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

/// A section counts as in view once its top edge is this far above the
/// bottom of the viewport.
pub const REVEAL_MARGIN_PX: f64 = 100.0;

pub const STAGGER_STEP_MS: u32 = 200;
pub const STAGGER_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    InView,
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FadeInUp,
    FadeInLeft,
    FadeInRight,
    FadeIn,
    SlideDown,
    Stagger,
    Float,
    Lift,
    Grow,
}

impl Effect {
    pub fn class(self) -> &'static str {
        match self {
            Effect::FadeInUp => "fx-fade-up",
            Effect::FadeInLeft => "fx-fade-left",
            Effect::FadeInRight => "fx-fade-right",
            Effect::FadeIn => "fx-fade",
            Effect::SlideDown => "fx-slide-down",
            Effect::Stagger => "fx-stagger",
            Effect::Float => "fx-float",
            Effect::Lift => "fx-lift",
            Effect::Grow => "fx-grow",
        }
    }
}

pub type Motion = (Trigger, Effect);

pub const SECTION_HEADER: &[Motion] = &[(Trigger::InView, Effect::FadeInUp)];
pub const STAGGERED: &[Motion] = &[(Trigger::InView, Effect::Stagger)];
pub const FROM_LEFT: &[Motion] = &[(Trigger::InView, Effect::FadeInLeft)];
pub const FROM_RIGHT: &[Motion] = &[(Trigger::InView, Effect::FadeInRight)];
pub const HEADER_ENTRANCE: &[Motion] = &[(Trigger::Mount, Effect::SlideDown)];
pub const HERO_IMAGE: &[Motion] = &[
    (Trigger::Mount, Effect::FadeIn),
    (Trigger::Mount, Effect::Float),
    (Trigger::Hover, Effect::Grow),
];
pub const CARD: &[Motion] = &[(Trigger::Hover, Effect::Lift)];
pub const BUTTON: &[Motion] = &[(Trigger::Hover, Effect::Grow)];

/// Turns a motion list into classes for the render layer. In-view effects get
/// `revealed` once the element has scrolled into view, mount effects start
/// right away.
pub fn motion_classes(motions: &[Motion], revealed: bool) -> Classes {
    let mut classes = Classes::new();
    for (trigger, effect) in motions {
        classes.push(effect.class());
        match trigger {
            Trigger::Mount => classes.push("on-mount"),
            Trigger::InView if revealed => classes.push("revealed"),
            _ => {}
        }
    }
    classes
}

/// Inline delay for the `index`th child of a staggered container.
pub fn stagger_style(index: usize, step_ms: u32, delay_ms: u32) -> String {
    let delay = delay_ms as usize + index * step_ms as usize;
    format!("transition-delay: {}ms; animation-delay: {}ms;", delay, delay)
}

pub fn is_in_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN_PX
}

/// Flips to true the first time `node` scrolls into view and stays there.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let done = Rc::new(Cell::new(false));

                let check = Closure::<dyn Fn()>::new(move || {
                    if done.get() {
                        return;
                    }
                    let Some(window) = web_sys::window() else { return };
                    let Some(element) = node.cast::<Element>() else { return };
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    if is_in_view(element.get_bounding_client_rect().top(), viewport) {
                        done.set(true);
                        revealed.set(true);
                    }
                });

                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref());
                }
                // Initial check for sections already on screen
                let _ = check
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            check.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motions: &'static [Motion],
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps children in a div that animates in when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!(props.class.clone(), motion_classes(props.motions, revealed))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_view_effects_wait_for_reveal() {
        let hidden = motion_classes(SECTION_HEADER, false);
        assert!(hidden.contains("fx-fade-up"));
        assert!(!hidden.contains("revealed"));

        let shown = motion_classes(SECTION_HEADER, true);
        assert!(shown.contains("fx-fade-up"));
        assert!(shown.contains("revealed"));
    }

    #[test]
    fn mount_effects_start_immediately() {
        let classes = motion_classes(HERO_IMAGE, false);
        assert!(classes.contains("on-mount"));
        assert!(classes.contains("fx-float"));
        assert!(classes.contains("fx-grow"));
        assert!(!classes.contains("revealed"));
    }

    #[test]
    fn hover_effects_only_add_their_class() {
        let classes = motion_classes(CARD, true);
        assert!(classes.contains("fx-lift"));
        assert!(!classes.contains("revealed"));
        assert!(!classes.contains("on-mount"));
    }

    #[test]
    fn stagger_delays_grow_per_child() {
        assert_eq!(
            stagger_style(0, STAGGER_STEP_MS, STAGGER_DELAY_MS),
            "transition-delay: 100ms; animation-delay: 100ms;"
        );
        assert_eq!(
            stagger_style(3, STAGGER_STEP_MS, STAGGER_DELAY_MS),
            "transition-delay: 700ms; animation-delay: 700ms;"
        );
    }

    #[test]
    fn reveal_margin() {
        assert!(is_in_view(500.0, 800.0));
        assert!(!is_in_view(700.0, 800.0));
        assert!(!is_in_view(750.0, 800.0));
        assert!(is_in_view(-200.0, 800.0));
    }
}
