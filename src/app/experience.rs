use leptos::{either::Either, prelude::*};

use super::icon::IconGlyph;
use crate::profile::{ExperienceEntry, Icon};

#[component]
pub fn ExperienceSection(entries: &'static [ExperienceEntry]) -> impl IntoView {
    view! {
        <section id="experiencia" class="mb-20">
            <div class="flex items-center gap-3 mb-10">
                <div class="w-10 h-10 rounded-xl bg-emerald-400/20 flex items-center justify-center">
                    <IconGlyph icon=Icon::Rocket class="w-5 h-5 text-emerald-400" />
                </div>
                <h2 class="text-2xl font-bold text-white tracking-tight">"Histórico Profissional"</h2>
            </div>

            <ol class="space-y-6">
                {entries
                    .iter()
                    .map(|entry| view! { <ExperienceItem entry=*entry /> })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn ExperienceItem(entry: ExperienceEntry) -> impl IntoView {
    let current = entry.current;
    let period_class = "text-[10px] text-slate-500 font-bold uppercase tracking-widest";

    // current entries show an "Atual" badge where the period would be and
    // move the period to the right
    let badge = if current {
        Either::Left(view! { <span class="section-tag !text-[9px] !bg-primary/20 mb-2">"Atual"</span> })
    } else {
        Either::Right(view! { <span class=format!("{period_class} mb-2 block")>{entry.period}</span> })
    };

    let (line, dot, card, heading, role) = if current {
        (
            "relative pl-8 border-l-2 py-2 border-primary/30 animate-fade-right",
            "absolute -left-[9px] top-4 w-4 h-4 rounded-full bg-primary ring-4 ring-primary/20",
            "glass p-6 rounded-3xl",
            "font-bold text-white text-xl",
            "text-primary font-medium text-sm",
        )
    } else {
        (
            "relative pl-8 border-l-2 py-2 border-slate-700 animate-fade-right",
            "absolute -left-[9px] top-4 w-4 h-4 rounded-full bg-slate-700",
            "glass p-6 rounded-3xl opacity-80",
            "text-lg font-bold text-white",
            "text-slate-400 font-medium text-sm",
        )
    };

    view! {
        <li class=line>
            <div class=dot></div>
            <div class=card>
                <div class="flex justify-between items-start mb-2">
                    <div>
                        {badge}
                        <h3 class=heading>{entry.organization}</h3>
                        <p class=role>{entry.role}</p>
                    </div>
                    {current.then(|| view! { <span class=period_class>{entry.period}</span> })}
                </div>
                <p class="mt-3 text-slate-400 text-sm leading-relaxed">{entry.description}</p>
            </div>
        </li>
    }
}
