/// Elapsed playback time after which the hero video jumps back to the start.
pub const HERO_LOOP_SECONDS: f64 = 5.0;

/// The slice of a media element the loop controller needs.
pub trait Playback {
    fn position(&self) -> f64;
    fn seek(&self, secs: f64);
    /// Fire-and-forget: implementations must never report failure.
    fn play(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continued,
    Rewound,
}

/// Forces an early loop of the hero video instead of letting it play to the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroLoop {
    threshold: f64,
}

impl Default for HeroLoop {
    fn default() -> Self {
        Self::new(HERO_LOOP_SECONDS)
    }
}

impl HeroLoop {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Runs on every position-check notification.
    pub fn check<P: Playback + ?Sized>(&self, media: &P) -> LoopAction {
        // NaN (no metadata yet) compares false and never rewinds
        if media.position() >= self.threshold {
            media.seek(0.0);
            media.play();
            LoopAction::Rewound
        } else {
            LoopAction::Continued
        }
    }
}

/// Handle to a live observer. Cancelling is idempotent and also happens on drop.
pub struct Subscription {
    stop: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(stop: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            stop: Some(Box::new(stop)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.stop.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(feature = "hydrate")]
impl Playback for web_sys::HtmlVideoElement {
    fn position(&self) -> f64 {
        self.current_time()
    }

    fn seek(&self, secs: f64) {
        self.set_current_time(secs);
    }

    fn play(&self) {
        match web_sys::HtmlMediaElement::play(self) {
            Ok(promise) => leptos::task::spawn_local(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::debug!("hero video play rejected: {err:?}");
                }
            }),
            Err(err) => log::debug!("hero video play failed: {err:?}"),
        }
    }
}
