use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::Route;

pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

/// Section anchors the landing page guarantees to expose.
pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", section: "hero" },
    NavItem { label: "About", section: "about" },
    NavItem { label: "Services", section: "services" },
    NavItem { label: "How It Works", section: "how-it-works" },
    NavItem { label: "Why Choose Us", section: "why-choose-us" },
    NavItem { label: "Contact", section: "call-to-action" },
];

/// UI flags owned by the nav bar. The two flags are independent: the menu
/// only changes on toggle/navigation actions, the chrome only on scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

pub enum NavAction {
    MenuToggled,
    /// Any navigation action closes the menu, whether or not it scrolled.
    Navigated,
    ScrollChanged(f64),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        match action {
            NavAction::MenuToggled => Rc::new(Self {
                menu_open: !self.menu_open,
                ..*self
            }),
            NavAction::Navigated => Rc::new(Self {
                menu_open: false,
                ..*self
            }),
            NavAction::ScrollChanged(offset) => Rc::new(Self {
                scrolled: offset > 0.0,
                ..*self
            }),
        }
    }
}

/// Smooth-scrolls the viewport to the given section. Unknown anchors are a
/// silent no-op.
pub fn scroll_to_section(section_id: &str) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_handle = window.clone();

                let scroll_dispatcher = dispatcher.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_handle.scroll_y().unwrap_or(0.0);
                    scroll_dispatcher.dispatch(NavAction::ScrollChanged(offset));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Sync once so a mid-page reload starts with the right chrome
                if let Ok(offset) = window.scroll_y() {
                    dispatcher.dispatch(NavAction::ScrollChanged(offset));
                }

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
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::MenuToggled);
        })
    };

    let close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(NavAction::Navigated);
        })
    };

    let menu_class = if state.menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", state.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div onclick={close_menu}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"Ghulam Shabeer Services"}
                    </Link<Route>>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_ITEMS.iter().map(|item| {
                            let dispatcher = state.dispatcher();
                            let section = item.section;
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                scroll_to_section(section);
                                dispatcher.dispatch(NavAction::Navigated);
                            });
                            html! {
                                <button class="nav-link" {onclick}>
                                    { item.label }
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavState, action: NavAction) -> NavState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_with_menu_closed_at_top() {
        let state = NavState::default();
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn menu_follows_toggle_parity() {
        let mut state = NavState::default();
        for n in 1..=7 {
            state = reduce(state, NavAction::MenuToggled);
            assert_eq!(state.menu_open, n % 2 == 1);
        }
    }

    #[test]
    fn navigation_always_leaves_the_menu_closed() {
        let open = NavState { menu_open: true, scrolled: true };
        let closed = NavState { menu_open: false, scrolled: false };

        let after_open = reduce(open, NavAction::Navigated);
        assert!(!after_open.menu_open);
        assert!(after_open.scrolled, "navigation must not disturb the chrome");

        let after_closed = reduce(closed, NavAction::Navigated);
        assert!(!after_closed.menu_open);
        assert!(!after_closed.scrolled);
    }

    #[test]
    fn scroll_indicator_is_a_pure_function_of_the_offset() {
        let mut state = NavState::default();

        state = reduce(state, NavAction::ScrollChanged(120.0));
        assert!(state.scrolled);

        // Repeated identical events change nothing
        state = reduce(state, NavAction::ScrollChanged(120.0));
        assert!(state.scrolled);

        state = reduce(state, NavAction::ScrollChanged(0.0));
        assert!(!state.scrolled);

        state = reduce(state, NavAction::ScrollChanged(0.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn scroll_events_never_touch_the_menu() {
        let open = NavState { menu_open: true, scrolled: false };
        let state = reduce(open, NavAction::ScrollChanged(50.0));
        assert!(state.menu_open);
        assert!(state.scrolled);
    }

    #[test]
    fn nav_targets_match_the_landing_anchors() {
        let sections: Vec<&str> = NAV_ITEMS.iter().map(|item| item.section).collect();
        assert_eq!(
            sections,
            [
                "hero",
                "about",
                "services",
                "how-it-works",
                "why-choose-us",
                "call-to-action",
            ]
        );
        for item in &NAV_ITEMS {
            assert!(!item.label.is_empty());
        }
    }
}
