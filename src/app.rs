mod about;
mod contact;
mod education;
mod experience;
mod hero;
mod icon;
mod nav;
mod skills;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{menu::MenuState, profile::PROFILE};

use about::About;
use contact::{ContactSection, FloatingContactBar};
use education::EducationSection;
use experience::ExperienceSection;
use hero::Hero;
use nav::NavBar;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/resume-site.css" />
                <MetaTags />
            </head>
            <body class="bg-obsidian">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{} - {}", PROFILE.full_name, PROFILE.title) />
        <Meta name="description" content=format!("{} - {}", PROFILE.headline, PROFILE.specialty) />
        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=path!("/") view=ResumePage />
            </Routes>
        </Router>
    }
}

/// The whole résumé. Owns the menu flag and the hero video handle.
#[component]
pub fn ResumePage() -> impl IntoView {
    let profile = &PROFILE;
    let menu = RwSignal::new(MenuState::default());
    let hero_video = NodeRef::<html::Video>::new();

    view! {
        <div class="font-sans text-slate-200 min-h-screen pb-32">
            <NavBar profile menu />
            <main class="max-w-screen-md mx-auto px-6 pt-12">
                <Hero profile video=hero_video />
                <About biography=profile.biography />
                <EducationSection entries=profile.education />
                <SkillsSection skills=profile.skills />
                <ExperienceSection entries=profile.experience />
                <ContactSection channels=profile.contacts />
            </main>
            <FloatingContactBar channels=profile.floating />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html<V, F>(f: F) -> String
where
    V: IntoView,
    F: FnOnce() -> V,
{
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| f().into_view().to_html())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_page_sections_in_order() {
        let html = render_html(|| view! { <ResumePage /> });
        let positions = ["id=\"sobre\"", "id=\"formacao\"", "id=\"competencias\"", "id=\"experiencia\"", "id=\"contato\""]
            .iter()
            .map(|id| html.find(id).unwrap_or_else(|| panic!("missing section {id}")))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_page_has_hero_media() {
        let html = render_html(|| view! { <ResumePage /> });
        assert!(html.contains("src=\"/video_small.mp4\""));
        assert!(html.contains("src=\"/Matrix3.png\""));
        assert!(html.contains("<footer"));
    }
}
