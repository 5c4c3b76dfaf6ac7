use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{motion_classes, stagger_style, BUTTON, HEADER_ENTRANCE};
use crate::pages::content::{anchor, BRAND, NAV_LINKS};

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(scroll_y) = win.scroll_y() {
                            is_scrolled.set(scroll_y > 10.0);
                        }
                    }
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
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
            "site-header",
            motion_classes(HEADER_ENTRANCE, false),
            (*is_scrolled).then(|| "scrolled"),
        )}>
            <div class="container header-content">
                <a href="#" class={classes!("brand", motion_classes(BUTTON, false))}>
                    <span class="brand-mark">{"⚡"}</span>
                    <span class="brand-name">{BRAND}</span>
                </a>

                <nav class={classes!("header-nav", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for NAV_LINKS.iter().enumerate().map(|(index, label)| html! {
                        <a
                            href={anchor(label)}
                            class="nav-link on-mount fx-slide-down"
                            style={stagger_style(index, 100, 0)}
                            onclick={close_menu.clone()}
                        >
                            {*label}
                        </a>
                    }) }
                </nav>

                <div class="header-actions">
                    <button class={classes!("btn", "btn-ghost", "desktop-only", motion_classes(BUTTON, false))}>
                        {"Sign In"}
                    </button>
                    <button class={classes!("btn", "btn-primary", motion_classes(BUTTON, false))}>
                        {"Get Started"}
                    </button>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
