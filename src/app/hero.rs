use leptos::{html, prelude::*};

use super::icon::IconGlyph;
use crate::profile::{Icon, Profile};

#[component]
pub fn Hero(profile: &'static Profile, video: NodeRef<html::Video>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;
        use leptos_use::use_event_listener;

        use crate::hero::{HeroLoop, Subscription};

        let controller = HeroLoop::default();
        let stop = use_event_listener(video, ev::timeupdate, move |_| {
            // not attached yet, nothing to loop
            let Some(el) = video.get_untracked() else {
                return;
            };
            controller.check(&el);
        });
        let mut subscription = Subscription::new(stop);
        on_cleanup(move || subscription.cancel());
    }

    view! {
        <section class="relative mb-20">
            <div class="absolute inset-0 -z-10 overflow-hidden rounded-[2rem]">
                <video
                    node_ref=video
                    src=profile.hero_video
                    autoplay=true
                    muted=true
                    playsinline=true
                    preload="metadata"
                    class="w-full h-full object-cover opacity-30"
                />
                <div class="absolute inset-0 bg-obsidian/60"></div>
            </div>

            <div class="flex flex-col items-center text-center animate-fade-up">
                <div class="section-tag mb-6">
                    <IconGlyph icon=Icon::Sparkles class="w-3.5 h-3.5" />
                    {profile.tag_line}
                </div>

                <div class="relative mb-10 group">
                    <div class="absolute inset-0 bg-primary/20 rounded-[2rem] blur-2xl group-hover:bg-accent/20 transition-colors duration-500"></div>
                    <div class="relative w-48 h-48 rounded-[2rem] overflow-hidden neon-border">
                        <img
                            src=profile.photo
                            alt=format!("{} Profile", profile.full_name)
                            class="w-full h-full object-cover grayscale hover:grayscale-0 transition-all duration-700"
                            referrerpolicy="no-referrer"
                        />
                    </div>
                </div>

                <h2 class="text-primary font-bold tracking-widest uppercase text-xs mb-3">
                    {profile.headline}
                </h2>
                <h1 class="text-2xl md:text-3xl font-bold mb-4 leading-tight tracking-tight">
                    <span class="block text-white">{profile.title}</span>
                </h1>
                <p class="text-slate-400 font-extrabold text-lg mb-8 max-w-lg">
                    {format!("({})", profile.full_name)}
                    <span class="block text-sm text-slate-500 font-normal mt-1 italic">
                        {profile.specialty}
                    </span>
                </p>

                <div class="flex flex-wrap justify-center gap-4 text-xs font-semibold">
                    <div class="glass px-4 py-2 rounded-full flex items-center gap-2">
                        <IconGlyph icon=Icon::MapPin class="w-4 h-4 text-primary" />
                        {profile.location}
                    </div>
                </div>
            </div>
        </section>
    }
}
