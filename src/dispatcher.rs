use crate::{EngineConfig, Mode, SpeechCapability, SpeechRequest};

/// Hands announcement text to the host speech capability.
///
/// Holds no queue of its own: every accepted call becomes exactly one
/// submission, and backlog behaviour is whatever the platform does.
pub struct SpeechDispatcher<S> {
    mode: Mode,
    language: String,
    rate: f32,
    capability: S,
}

impl<S: SpeechCapability> SpeechDispatcher<S> {
    pub fn new(mode: Mode, language: impl Into<String>, rate: f32, capability: S) -> Self {
        Self {
            mode,
            language: language.into(),
            rate,
            capability,
        }
    }

    pub fn from_config(mode: Mode, config: &EngineConfig, capability: S) -> Self {
        Self::new(mode, config.language.clone(), config.rate, capability)
    }

    /// Speak `text` with the configured language and rate.
    pub fn speak(&mut self, text: &str) {
        dispatch(self.mode, &mut self.capability, text, &self.language, self.rate);
    }

    /// Speak `text` with an explicit language and rate.
    pub fn speak_with(&mut self, text: &str, language: &str, rate: f32) {
        dispatch(self.mode, &mut self.capability, text, language, rate);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn capability(&self) -> &S {
        &self.capability
    }

    pub fn capability_mut(&mut self) -> &mut S {
        &mut self.capability
    }

    pub fn into_capability(self) -> S {
        self.capability
    }
}

/// Does nothing when the mode is inactive, the platform has no speech
/// synthesis, or [`SpeechRequest::new`] refuses the arguments.
fn dispatch<S: SpeechCapability>(
    mode: Mode,
    capability: &mut S,
    text: &str,
    language: &str,
    rate: f32,
) {
    if !mode.is_active() {
        return;
    }

    if !capability.is_available() {
        log::warn!("Speech synthesis is not available on this host; skipping {text:?}");
        return;
    }

    if let Some(request) = SpeechRequest::new(text, language, rate) {
        capability.submit(&request);
    }
}

#[cfg(test)]
mod tests {
    use super::SpeechDispatcher;
    use crate::backends::RecordingSpeech;
    use crate::{EngineConfig, Mode};

    fn dispatcher(mode: Mode, speech: RecordingSpeech) -> SpeechDispatcher<RecordingSpeech> {
        SpeechDispatcher::from_config(mode, &EngineConfig::default(), speech)
    }

    #[test]
    fn submits_with_configured_language_and_rate() {
        let mut dispatcher = dispatcher(Mode::active(), RecordingSpeech::new());
        dispatcher.speak("안녕하세요");

        let requests = dispatcher.capability().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text(), "안녕하세요");
        assert_eq!(requests[0].language(), "ko-KR");
        assert_eq!(requests[0].rate(), 1.5);
    }

    #[test]
    fn explicit_language_and_rate_override_defaults() {
        let mut dispatcher = dispatcher(Mode::active(), RecordingSpeech::new());
        dispatcher.speak_with("hello", "en-US", 1.0);
        dispatcher.speak("다음");

        let requests = dispatcher.capability().requests();
        assert_eq!(requests[0].language(), "en-US");
        assert_eq!(requests[0].rate(), 1.0);
        assert_eq!(requests[1].language(), "ko-KR");
    }

    #[test]
    fn blank_text_never_reaches_the_platform() {
        let mut dispatcher = dispatcher(Mode::active(), RecordingSpeech::new());
        dispatcher.speak("");
        dispatcher.speak("   ");
        assert!(dispatcher.capability().requests().is_empty());
    }

    #[test]
    fn invalid_language_or_rate_never_reaches_the_platform() {
        let mut dispatcher =
            SpeechDispatcher::new(Mode::active(), "  ", -2.0, RecordingSpeech::new());
        dispatcher.speak("엔터");
        dispatcher.speak_with("탭", "", f32::NAN);
        dispatcher.speak_with("탭", "ko-KR", 0.0);
        assert!(dispatcher.capability().requests().is_empty());

        dispatcher.speak_with("탭", "ko-KR", 1.5);
        assert_eq!(dispatcher.capability().spoken(), vec!["탭"]);
    }

    #[test]
    fn inactive_mode_is_a_no_op() {
        let mut dispatcher = dispatcher(Mode::inactive(), RecordingSpeech::new());
        dispatcher.speak("엔터");
        assert!(dispatcher.capability().requests().is_empty());
    }

    #[test]
    fn unavailable_capability_is_skipped_silently() {
        let mut dispatcher = dispatcher(Mode::active(), RecordingSpeech::unavailable());
        dispatcher.speak("엔터");
        assert!(dispatcher.capability().requests().is_empty());
    }

    #[test]
    fn rapid_calls_are_all_submitted_in_order() {
        let mut dispatcher = dispatcher(Mode::active(), RecordingSpeech::new());
        for text in ["ㄱ", "ㄴ", "ㄷ", "ㄹ"] {
            dispatcher.speak(text);
        }
        assert_eq!(dispatcher.capability().spoken(), vec!["ㄱ", "ㄴ", "ㄷ", "ㄹ"]);
    }
}
