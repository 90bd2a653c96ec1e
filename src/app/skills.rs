use leptos::prelude::*;

use super::icon::IconGlyph;
use crate::profile::{Icon, SkillTag};

#[component]
pub fn SkillsSection(skills: &'static [SkillTag]) -> impl IntoView {
    view! {
        <section id="competencias" class="mb-20">
            <div class="flex items-center gap-3 mb-8">
                <div class="w-10 h-10 rounded-xl bg-emerald-900/40 border border-emerald-500/20 flex items-center justify-center">
                    <IconGlyph icon=Icon::Code class="w-5 h-5 text-emerald-400" />
                </div>
                <h2 class="text-2xl font-bold text-white tracking-tight">"Competências Técnicas"</h2>
            </div>

            <ul class="flex flex-wrap gap-3">
                {skills
                    .iter()
                    .map(|SkillTag(label)| {
                        view! {
                            <li class="px-4 py-2 rounded-xl bg-slate-800/40 border border-slate-700/50 text-slate-300 text-sm font-medium transition-all hover:scale-105 hover:bg-slate-800/80 cursor-default">
                                {*label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::render_html, profile::PROFILE};

    #[test]
    fn test_skills_render_in_order() {
        let html = render_html(|| view! { <SkillsSection skills=PROFILE.skills /> });
        assert_eq!(html.matches("<li").count(), PROFILE.skills.len());
        let first = html.find(">HTML</li>").expect("first skill");
        let last = html.find(">BPM CBOK 4.0</li>").expect("last skill");
        assert!(first < last);
    }
}
