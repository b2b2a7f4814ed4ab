//! # cheongeum
//!
//! An opt-in announcement engine that turns page interaction (focus, hover,
//! keystrokes) into spoken feedback.
//!
//! ## Features
//!
//! - **Mode gate**: active only when the page was launched with `type=udl`
//! - **Text resolution**: alt text, `aria-label` or text content, with Korean role prefixes
//! - **Key names**: Korean names for control keys and punctuation
//! - **Two keystroke profiles**: character echo with field readback, or key-name readback
//! - **Pluggable speech**: any host synthesizer behind [`SpeechCapability`]
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! cheongeum = "2026.2"
//! ```
//!
//! ```rust
//! use cheongeum::{
//!     backends::RecordingSpeech, AnnouncementEngine, ElementKind, ElementSnapshot,
//!     EngineConfig, InteractionEvent, Mode,
//! };
//!
//! let mode = Mode::from_query("?type=udl");
//! let mut engine = AnnouncementEngine::new(mode, EngineConfig::default(), RecordingSpeech::new());
//!
//! let button = ElementSnapshot::new(ElementKind::Button).with_text("Submit");
//! engine.handle(&InteractionEvent::Focus(&button));
//!
//! assert_eq!(engine.speech().requests()[0].text(), "버튼: Submit");
//! ```

pub mod backends;
pub mod bindings;
pub mod config;
pub mod dispatcher;
pub mod element;
pub mod engine;
pub mod error;
pub mod event;
pub mod keys;
pub mod mode;
pub mod resolver;
pub mod widgets;

pub use config::{EngineConfig, KeystrokeProfile};
pub use dispatcher::SpeechDispatcher;
pub use element::{ElementKind, ElementSnapshot};
pub use engine::AnnouncementEngine;
pub use error::EngineError;
pub use event::InteractionEvent;
pub use keys::KeyNameMap;
pub use mode::Mode;
pub use resolver::resolve;

/// A single utterance handed to the host synthesizer.
///
/// [`SpeechRequest::new`] refuses blank text, a blank language tag and any
/// rate that is not a positive finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    text: String,
    language: String,
    rate: f32,
}

impl SpeechRequest {
    /// Build a request, or `None` when `text` is empty or whitespace-only,
    /// `language` is blank, or `rate` is not positive and finite.
    pub fn new(text: impl Into<String>, language: impl Into<String>, rate: f32) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            log::debug!("Refusing speech request with blank text");
            return None;
        }

        let language = language.into();
        if let Err(e) = config::check_language(&language).and_then(|()| config::check_rate(rate)) {
            log::debug!("Refusing speech request for {text:?}: {e}");
            return None;
        }

        Some(Self {
            text,
            language,
            rate,
        })
    }

    /// Text to speak, never blank.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// BCP 47 language tag, e.g. `ko-KR`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Rate multiplier; 1.0 is the platform's baseline.
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

/// The host platform's speech synthesis capability.
///
/// Submission is fire-and-forget: implementations queue the request with the
/// platform and return immediately. Ordering and backlog handling belong to
/// the platform.
pub trait SpeechCapability {
    /// Whether the host exposes speech synthesis at all.
    fn is_available(&self) -> bool;

    /// Queue one utterance for playback.
    fn submit(&mut self, request: &SpeechRequest);
}

impl<S: SpeechCapability + ?Sized> SpeechCapability for Box<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn submit(&mut self, request: &SpeechRequest) {
        (**self).submit(request)
    }
}
