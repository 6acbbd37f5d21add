use leptos::prelude::*;

use crate::config::use_site_config;
use crate::content::NavSection;
use crate::scroll::{current_scroll_offset, is_scrolled, scroll_to_section};

/// Navbar view state shared by every section that can navigate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Bookkeeping for any navigation action: the mobile menu closes.
    pub fn navigate(&mut self) {
        self.close_menu();
    }

    /// Returns `true` if the scrolled flag flipped.
    pub fn observe_scroll(&mut self, offset: f64, threshold: f64) -> bool {
        let scrolled = is_scrolled(offset, threshold);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn nav_class(&self) -> &'static str {
        if self.scrolled { "nav nav-scrolled" } else { "nav" }
    }
}

/// Scroll to a section and close the mobile menu.
///
/// Needs the `RwSignal<NavState>` that `App` provides.
pub fn use_section_nav() -> impl Fn(NavSection) + Copy + 'static {
    let state = expect_context::<RwSignal<NavState>>();
    let nav_offset = use_site_config().nav_offset_px;

    move |section: NavSection| {
        scroll_to_section(section.id(), nav_offset);
        state.update(NavState::navigate);
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let config = use_site_config();
    let state = expect_context::<RwSignal<NavState>>();
    let go = use_section_nav();
    let threshold = config.scroll_threshold_px;

    // A page restored mid-scroll starts elevated.
    state.update(|s| {
        s.observe_scroll(current_scroll_offset(), threshold);
    });

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = current_scroll_offset();
        let changed = state
            .try_update(|s| s.observe_scroll(offset, threshold))
            .unwrap_or(false);
        if changed {
            tracing::trace!(offset, "navbar style toggled");
        }
    });
    on_cleanup(move || handle.remove());

    let menu_open = move || state.with(|s| s.menu_open);

    view! {
        <nav class=move || state.with(NavState::nav_class) data-testid="navbar">
            <div class="container">
                <div class="nav-inner">
                    <button
                        class="nav-brand"
                        data-testid="logo-button"
                        on:click=move |_| go(NavSection::Home)
                    >
                        {config.brand}
                    </button>

                    <div class="nav-links">
                        {NavSection::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="nav-link"
                                        data-testid=format!("nav-{}", section.id())
                                        on:click=move |_| go(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="btn btn-primary nav-cta"
                            data-testid="cta-book-session"
                            on:click=move |_| go(NavSection::Contact)
                        >
                            "Book Session"
                        </button>
                    </div>

                    <button
                        class="nav-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                        data-testid="mobile-menu-toggle"
                        on:click=move |_| state.update(NavState::toggle_menu)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=menu_open>
                    <div class="nav-mobile" data-testid="mobile-menu">
                        {NavSection::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="nav-mobile-link"
                                        data-testid=format!("mobile-nav-{}", section.id())
                                        on:click=move |_| go(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_flips_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn every_navigation_closes_the_menu() {
        for section in NavSection::ALL {
            for open in [true, false] {
                let mut state = NavState {
                    menu_open: open,
                    scrolled: true,
                };
                state.navigate();
                assert!(!state.menu_open, "menu stayed open after {section:?}");
                assert!(state.scrolled);
            }
        }
    }

    #[test]
    fn scroll_past_threshold_elevates_nav() {
        let mut state = NavState::default();
        assert!(!state.observe_scroll(50.0, 50.0));
        assert_eq!(state.nav_class(), "nav");

        assert!(state.observe_scroll(51.0, 50.0));
        assert_eq!(state.nav_class(), "nav nav-scrolled");

        assert!(!state.observe_scroll(400.0, 50.0));
        assert!(state.observe_scroll(10.0, 50.0));
        assert_eq!(state.nav_class(), "nav");
    }

    #[test]
    fn scrolling_leaves_menu_alone() {
        let mut state = NavState {
            menu_open: true,
            scrolled: false,
        };
        state.observe_scroll(500.0, 50.0);
        assert!(state.menu_open);
    }
}
