use std::time::Duration;

use leptos::prelude::*;

use super::icon::IconGlyph;
use crate::{
    menu::{MenuState, NAV_LINKS},
    profile::{Icon, Profile},
};

/// Matches the `menu-leave` animation length in `input.css`.
const MENU_HIDE_DELAY: Duration = Duration::from_millis(200);

#[component]
pub fn NavBar(profile: &'static Profile, menu: RwSignal<MenuState>) -> impl IntoView {
    let is_open = move || menu.get().is_open();

    view! {
        <nav class="sticky top-0 z-50 glass px-6 py-4">
            <div class="max-w-screen-md mx-auto flex justify-between items-center">
                <div class="text-xl font-extrabold tracking-tighter italic">
                    <span class="text-primary">{profile.first_name}</span>
                    <span class="text-accent">{format!(" {}", profile.last_name)}</span>
                </div>

                <div class="hidden md:flex gap-6 text-sm font-medium">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href() class="hover:text-primary transition-colors">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="md:hidden p-2 text-slate-300 hover:text-white transition-colors"
                    aria-label="Menu"
                    aria-controls="mobile-menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| menu.update(|m| *m = m.toggled())
                >
                    {move || {
                        let icon = if is_open() { Icon::Close } else { Icon::Menu };
                        view! { <IconGlyph icon class="w-6 h-6" /> }
                    }}
                </button>
            </div>

            <AnimatedShow
                when=Signal::derive(is_open)
                show_class="menu-enter"
                hide_class="menu-leave"
                hide_delay=MENU_HIDE_DELAY
            >
                <div id="mobile-menu" class="md:hidden overflow-hidden">
                    <div class="flex flex-col gap-4 pt-4 pb-2 text-sm font-medium border-t border-white/10 mt-4">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        on:click=move |_| menu.update(|m| *m = m.navigated(link))
                                        class="hover:text-primary transition-colors"
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </AnimatedShow>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::render_html, profile::PROFILE};

    fn toggle_button(html: &str) -> &str {
        let start = html.find("<button").expect("toggle button rendered");
        let end = start + html[start..].find("</button>").expect("button closed");
        &html[start..end]
    }

    #[test]
    fn test_menu_hidden_when_closed() {
        let html = render_html(|| {
            let menu = RwSignal::new(MenuState::default());
            view! { <NavBar profile=&PROFILE menu /> }
        });
        assert!(!html.contains("id=\"mobile-menu\""));
        assert!(html.contains("aria-expanded=\"false\""));
        // desktop links are always present
        assert_eq!(html.matches("href=\"#contato\"").count(), 1);
    }

    #[test]
    fn test_menu_visible_when_open() {
        let html = render_html(|| {
            let menu = RwSignal::new(MenuState::open());
            view! { <NavBar profile=&PROFILE menu /> }
        });
        assert!(html.contains("id=\"mobile-menu\""));
        assert!(html.contains("menu-enter"));
        assert!(html.contains("aria-expanded=\"true\""));
        assert_eq!(html.matches("href=\"#contato\"").count(), 2);
    }

    #[test]
    fn test_toggle_button_draws_icon() {
        let closed = render_html(|| {
            let menu = RwSignal::new(MenuState::default());
            view! { <NavBar profile=&PROFILE menu /> }
        });
        let button = toggle_button(&closed);
        assert!(button.contains("<svg"));
        assert!(button.contains("data-icon=\"menu\""));
        assert_eq!(button.matches("<path").count(), Icon::Menu.paths().len());
        for d in Icon::Menu.paths() {
            assert!(button.contains(&format!("d=\"{d}\"")));
        }

        let open = render_html(|| {
            let menu = RwSignal::new(MenuState::open());
            view! { <NavBar profile=&PROFILE menu /> }
        });
        let button = toggle_button(&open);
        assert!(button.contains("data-icon=\"close\""));
        assert!(!button.contains("data-icon=\"menu\""));
    }
}
