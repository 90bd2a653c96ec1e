use leptos::{either::Either, prelude::*};

use super::icon::IconGlyph;
use crate::profile::{BioSpan, Icon};

#[component]
pub fn About(biography: &'static [BioSpan]) -> impl IntoView {
    view! {
        <section id="sobre" class="mb-20">
            <div class="glass p-8 rounded-[2.5rem] relative overflow-hidden group animate-fade-up">
                <div class="absolute -right-10 -top-10 w-40 h-40 bg-primary/10 blur-3xl rounded-full"></div>
                <div class="flex items-center gap-3 mb-6">
                    <div class="w-10 h-10 rounded-xl bg-primary/20 flex items-center justify-center">
                        <IconGlyph icon=Icon::Brain class="w-5 h-5 text-primary" />
                    </div>
                    <h2 class="text-xl font-bold text-white tracking-tight">"Sobre mim"</h2>
                </div>
                <p class="text-slate-300 leading-relaxed text-lg font-light italic">
                    {biography
                        .iter()
                        .map(|span| match *span {
                            BioSpan::Plain(text) => Either::Left(text),
                            BioSpan::Highlight(text, palette) => {
                                Either::Right(
                                    view! {
                                        <span class=format!(
                                            "{} font-semibold",
                                            palette.text_class(),
                                        )>{text}</span>
                                    },
                                )
                            }
                        })
                        .collect_view()}
                </p>
            </div>
        </section>
    }
}
