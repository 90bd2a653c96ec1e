use leptos::prelude::*;

use super::icon::IconGlyph;
use crate::profile::{ContactChannel, Icon, Tone};

fn link_target(channel: &ContactChannel) -> (Option<&'static str>, Option<&'static str>) {
    if channel.kind.is_external() {
        (Some("_blank"), Some("noreferrer"))
    } else {
        (None, None)
    }
}

#[component]
pub fn ContactSection(channels: &'static [ContactChannel]) -> impl IntoView {
    view! {
        <section id="contato" class="mb-20">
            <div class="flex items-center gap-3 mb-8">
                <div class="w-10 h-10 rounded-xl bg-primary/20 flex items-center justify-center">
                    <IconGlyph icon=Icon::Mail class="w-5 h-5 text-primary" />
                </div>
                <h2 class="text-2xl font-bold text-white tracking-tight">"Contato"</h2>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-5 animate-fade-up">
                {channels
                    .iter()
                    .map(|channel| view! { <ContactCard channel=*channel /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ContactCard(channel: ContactChannel) -> impl IntoView {
    let (target, rel) = link_target(&channel);
    let bubble = match channel.tone {
        Tone::Neutral => "bg-obsidian border border-white/5",
        Tone::Highlight => "bg-cyan-900/20 border border-cyan-500/20",
    };
    let icon = match channel.tone {
        Tone::Neutral => "text-slate-400",
        Tone::Highlight => "text-cyan-300/80",
    };

    view! {
        <a
            href=channel.destination
            target=target
            rel=rel
            class=format!(
                "glass rounded-3xl p-6 h-36 flex items-center gap-4 transition-colors {}",
                channel.accent.hover_border_class(),
            )
        >
            <div class=format!(
                "w-14 h-14 rounded-2xl flex items-center justify-center shrink-0 {bubble}",
            )>
                <IconGlyph icon=channel.icon class=format!("w-7 h-7 {icon}") />
            </div>
            <div>
                <h3 class="text-white font-bold text-2xl tracking-tight">{channel.label}</h3>
                <p class="text-slate-400 mt-1">{channel.caption}</p>
            </div>
        </a>
    }
}

/// Always-visible bar of outbound links pinned to the bottom of the viewport.
#[component]
pub fn FloatingContactBar(channels: &'static [ContactChannel]) -> impl IntoView {
    view! {
        <footer class="fixed bottom-6 left-1/2 -translate-x-1/2 w-[90%] max-w-md z-50">
            <div class="glass shadow-2xl rounded-2xl px-6 py-4 flex items-center justify-between border-white/10">
                {channels
                    .iter()
                    .map(|channel| {
                        let (target, rel) = link_target(channel);
                        let bubble = match channel.tone {
                            Tone::Neutral => "p-2 rounded-xl transition-all group-hover:-translate-y-1 group-hover:bg-white/10",
                            Tone::Highlight => "p-2 rounded-xl transition-all group-hover:-translate-y-1 bg-cyan-900/20 border border-cyan-500/20",
                        };
                        view! {
                            <a
                                href=channel.destination
                                target=target
                                rel=rel
                                aria-label=channel.label
                                class="flex flex-col items-center gap-1 group"
                            >
                                <div class=bubble>
                                    <IconGlyph
                                        icon=channel.icon
                                        class=format!(
                                            "w-5 h-5 text-slate-400 transition-colors group-hover:{}",
                                            channel.accent.text_class(),
                                        )
                                    />
                                </div>
                            </a>
                            <div class="w-px h-6 bg-white/10"></div>
                        }
                    })
                    .collect_view()}
                <div class="flex flex-col items-center gap-1">
                    <div class="p-2 rounded-xl bg-primary text-white shadow-lg shadow-primary/40 animate-pulse">
                        <IconGlyph icon=Icon::Zap class="w-5 h-5" />
                    </div>
                </div>
            </div>
        </footer>
    }
}
