use leptos::prelude::*;

use super::icon::IconGlyph;
use crate::profile::{EducationEntry, Icon};

#[component]
pub fn EducationSection(entries: &'static [EducationEntry]) -> impl IntoView {
    view! {
        <section id="formacao" class="mb-20">
            <div class="flex items-center justify-between mb-8">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-xl bg-accent/20 flex items-center justify-center">
                        <IconGlyph icon=Icon::GraduationCap class="w-5 h-5 text-accent" />
                    </div>
                    <h2 class="text-2xl font-bold text-white tracking-tight">"Formação Acadêmica"</h2>
                </div>
                <div class="h-px flex-1 bg-gradient-to-r from-accent/50 to-transparent ml-6"></div>
            </div>
            <EducationGrid entries />
        </section>
    }
}

#[component]
pub fn EducationGrid(entries: &'static [EducationEntry]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {entries.iter().map(|entry| view! { <EducationCard entry=*entry /> }).collect_view()}
        </div>
    }
}

#[component]
fn EducationCard(entry: EducationEntry) -> impl IntoView {
    let palette = entry.palette();

    view! {
        <article class=format!(
            "glass p-6 rounded-3xl transition-colors group animate-fade-up {}",
            palette.hover_border_class(),
        )>
            <div class="flex justify-between items-start mb-4">
                <div class=format!(
                    "w-12 h-12 bg-obsidian rounded-2xl border border-white/5 flex items-center justify-center group-hover:scale-110 transition-transform {}",
                    palette.text_class(),
                )>
                    <IconGlyph icon=entry.icon class="w-6 h-6" />
                </div>
                <span class="text-[10px] text-slate-500 font-bold uppercase tracking-widest">
                    {entry.kind}
                </span>
            </div>
            <h3 class="font-bold text-white mb-1">{entry.title}</h3>
            <p class="text-xs text-slate-400 mb-4 tracking-wide uppercase">{entry.subtitle}</p>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::render_html, profile::PROFILE};

    const fn entry(color: &'static str, kind: &'static str, title: &'static str, subtitle: &'static str) -> EducationEntry {
        EducationEntry {
            icon: Icon::BookOpen,
            color,
            kind,
            title,
            subtitle,
        }
    }

    static TEN: [EducationEntry; 10] = [
        entry("primary", "Graduação", "Course 01", "Subtitle 01"),
        entry("accent", "Técnico", "Course 02", "Subtitle 02"),
        entry("indigo", "Pós-Graduação", "Course 03", "Subtitle 03"),
        entry("amber", "Atualização", "Course 04", "Subtitle 04"),
        entry("emerald", "Graduação", "Course 05", "Subtitle 05"),
        entry("rose", "Formação", "Course 06", "Subtitle 06"),
        entry("cyan", "Tecnólogo", "Course 07", "Subtitle 07"),
        entry("violet", "Graduação", "Course 08", "Subtitle 08"),
        entry("slate", "Graduação", "Course 09", "Subtitle 09"),
        entry("mauve", "Graduação", "Course 10", "Subtitle 10"),
    ];

    #[test]
    fn test_ten_entries_in_order() {
        let html = render_html(|| view! { <EducationGrid entries=&TEN /> });
        assert_eq!(html.matches("<article").count(), 10);

        let mut last = 0;
        for e in &TEN {
            let title = html
                .find(&format!(">{}</h3>", e.title))
                .unwrap_or_else(|| panic!("missing title {}", e.title));
            let subtitle = html
                .find(&format!(">{}</p>", e.subtitle))
                .unwrap_or_else(|| panic!("missing subtitle {}", e.subtitle));
            let kind = html[last..]
                .find(&format!(">{}</span>", e.kind))
                .map(|i| i + last)
                .unwrap_or_else(|| panic!("missing kind {}", e.kind));
            assert!(last <= kind && kind < title && title < subtitle);
            last = subtitle;
        }
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let html = render_html(|| view! { <EducationGrid entries=&TEN[9..] /> });
        assert!(html.contains("hover:border-primary/50"));
        assert!(html.contains("text-primary"));
    }

    #[test]
    fn test_profile_education_section() {
        let html = render_html(|| view! { <EducationSection entries=PROFILE.education /> });
        assert!(html.contains("id=\"formacao\""));
        assert_eq!(html.matches("<article").count(), PROFILE.education.len());
        assert!(html.contains("Full Stack &amp; Cloud Computing"));
    }
}
