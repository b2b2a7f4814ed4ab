use crate::dispatcher::SpeechDispatcher;
use crate::element::ElementSnapshot;
use crate::widgets::{relabel_carousel_controls, CarouselControl};
use crate::{
    resolve, EngineConfig, InteractionEvent, KeyNameMap, KeystrokeProfile, Mode, SpeechCapability,
};

/// Key that triggers a full field readback under [`KeystrokeProfile::CharEcho`].
const READBACK_KEY: &str = "Enter";

/// Turns interaction events into speech requests.
///
/// # Quick Start
///
/// ```rust
/// use cheongeum::{
///     backends::RecordingSpeech, AnnouncementEngine, ElementKind, ElementSnapshot,
///     EngineConfig, InteractionEvent, Mode,
/// };
///
/// let mut engine = AnnouncementEngine::new(
///     Mode::active(),
///     EngineConfig::default(),
///     RecordingSpeech::new(),
/// );
///
/// let field = ElementSnapshot::new(ElementKind::TextInput).with_aria_label("이메일");
/// engine.handle(&InteractionEvent::KeyInput { target: &field, key: "@" });
///
/// assert_eq!(engine.speech().spoken(), vec!["골뱅이"]);
/// ```
pub struct AnnouncementEngine<S> {
    mode: Mode,
    config: EngineConfig,
    keys: KeyNameMap,
    dispatcher: SpeechDispatcher<S>,
}

impl<S: SpeechCapability> AnnouncementEngine<S> {
    /// Create an engine with the built-in key names.
    pub fn new(mode: Mode, config: EngineConfig, speech: S) -> Self {
        let dispatcher = SpeechDispatcher::from_config(mode, &config, speech);
        log::debug!(
            "Announcement engine created: active={}, profile={:?}",
            mode.is_active(),
            config.profile
        );
        Self {
            mode,
            config,
            keys: KeyNameMap::builtin(),
            dispatcher,
        }
    }

    /// Replace the key name table.
    pub fn with_key_names(mut self, keys: KeyNameMap) -> Self {
        self.keys = keys;
        self
    }

    /// One-time page setup: relabels carousel controls when enabled.
    /// Returns the number of controls touched.
    pub fn initialize<'a, C, I>(&self, carousel_controls: I) -> usize
    where
        C: CarouselControl + 'a + ?Sized,
        I: IntoIterator<Item = &'a mut C>,
    {
        if !self.config.relabel_carousel {
            return 0;
        }
        relabel_carousel_controls(self.mode, carousel_controls)
    }

    /// Announce whatever `event` calls for, if anything.
    pub fn handle(&mut self, event: &InteractionEvent<'_>) {
        if let Some(text) = self.announcement(event) {
            self.dispatcher.speak(&text);
        }
    }

    pub fn on_hover(&mut self, target: &ElementSnapshot) {
        self.handle(&InteractionEvent::Hover(target));
    }

    pub fn on_focus(&mut self, target: &ElementSnapshot) {
        self.handle(&InteractionEvent::Focus(target));
    }

    pub fn on_key(&mut self, target: &ElementSnapshot, key: &str) {
        self.handle(&InteractionEvent::KeyInput { target, key });
    }

    /// Text that [`handle`](Self::handle) would speak for `event`, without
    /// speaking it. Always `None` when the mode is inactive.
    pub fn announcement(&self, event: &InteractionEvent<'_>) -> Option<String> {
        if !self.mode.is_active() {
            return None;
        }

        match *event {
            InteractionEvent::Hover(target) | InteractionEvent::Focus(target) => resolve(target),
            InteractionEvent::KeyInput { target, key } => self.keystroke_text(target, key),
        }
    }

    /// Speak arbitrary text with the configured language and rate.
    pub fn speak(&mut self, text: &str) {
        self.dispatcher.speak(text);
    }

    fn keystroke_text(&self, target: &ElementSnapshot, key: &str) -> Option<String> {
        let text = match self.config.profile {
            KeystrokeProfile::CharEcho => {
                if key.chars().count() == 1 {
                    key
                } else if key == READBACK_KEY {
                    field_readback(target)
                } else {
                    return None;
                }
            }
            KeystrokeProfile::KeyNames => self.keys.translate(key),
        };

        if text.trim().is_empty() {
            log::debug!("Nothing to announce for key {key:?}");
            return None;
        }
        Some(text.to_string())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn key_names(&self) -> &KeyNameMap {
        &self.keys
    }

    pub fn speech(&self) -> &S {
        self.dispatcher.capability()
    }

    pub fn speech_mut(&mut self) -> &mut S {
        self.dispatcher.capability_mut()
    }

    pub fn into_speech(self) -> S {
        self.dispatcher.into_capability()
    }
}

/// Current value of a field, or its text content when the value is empty.
fn field_readback(target: &ElementSnapshot) -> &str {
    target
        .current_value
        .as_deref()
        .filter(|value| !value.is_empty())
        .unwrap_or(target.text_content.as_str())
        .trim()
}

#[cfg(test)]
mod tests {
    use super::AnnouncementEngine;
    use crate::backends::RecordingSpeech;
    use crate::config::EngineConfigBuilder;
    use crate::widgets::{ControlAttributes, CAROUSEL_NEXT_LABEL};
    use crate::{
        ElementKind, ElementSnapshot, EngineConfig, InteractionEvent, KeyNameMap,
        KeystrokeProfile, Mode,
    };

    fn engine(profile: KeystrokeProfile) -> AnnouncementEngine<RecordingSpeech> {
        let config = EngineConfigBuilder::default()
            .profile(profile)
            .build()
            .expect("config should build");
        AnnouncementEngine::new(Mode::active(), config, RecordingSpeech::new())
    }

    fn text_field(value: &str) -> ElementSnapshot {
        ElementSnapshot::new(ElementKind::TextInput)
            .with_aria_label("검색어")
            .with_value(value)
    }

    #[test]
    fn focus_and_hover_go_through_the_resolver() {
        let mut engine = engine(KeystrokeProfile::KeyNames);
        let link = ElementSnapshot::new(ElementKind::Link).with_aria_label("Home");
        let logo = ElementSnapshot::new(ElementKind::Image).with_alt("청음 로고");
        let bare_image = ElementSnapshot::new(ElementKind::Image);

        engine.on_focus(&link);
        engine.on_hover(&logo);
        engine.on_hover(&bare_image);

        assert_eq!(engine.speech().spoken(), vec!["링크: Home", "청음 로고"]);
    }

    #[test]
    fn requests_carry_configured_language_and_rate() {
        let mut engine = engine(KeystrokeProfile::KeyNames);
        engine.on_key(&text_field(""), "Tab");

        let request = &engine.speech().requests()[0];
        assert_eq!(request.text(), "탭");
        assert_eq!(request.language(), "ko-KR");
        assert_eq!(request.rate(), 1.5);
    }

    #[test]
    fn key_names_profile_translates_every_key() {
        let mut engine = engine(KeystrokeProfile::KeyNames);
        let field = text_field("abc");

        for key in ["a", " ", "Enter", "@", "F2"] {
            engine.on_key(&field, key);
        }

        assert_eq!(
            engine.speech().spoken(),
            vec!["a", "스페이스", "엔터", "골뱅이", "F2"]
        );
    }

    #[test]
    fn char_echo_profile_echoes_characters_and_reads_back_on_enter() {
        let mut engine = engine(KeystrokeProfile::CharEcho);
        let field = text_field("  hello world ");

        for key in ["h", "@", " ", "Shift", "ArrowLeft", "Enter"] {
            engine.on_key(&field, key);
        }

        assert_eq!(engine.speech().spoken(), vec!["h", "@", "hello world"]);
    }

    #[test]
    fn char_echo_counts_characters_not_utf16_units() {
        let mut engine = engine(KeystrokeProfile::CharEcho);
        let field = text_field("");

        engine.on_key(&field, "한");
        engine.on_key(&field, "😀");

        assert_eq!(engine.speech().spoken(), vec!["한", "😀"]);
    }

    #[test]
    fn char_echo_readback_falls_back_to_text_content() {
        let mut engine = engine(KeystrokeProfile::CharEcho);
        let editable = ElementSnapshot::new(ElementKind::Generic)
            .with_value("")
            .with_text(" 메모 내용 ");
        let empty = ElementSnapshot::new(ElementKind::Generic);

        engine.on_key(&editable, "Enter");
        engine.on_key(&empty, "Enter");

        assert_eq!(engine.speech().spoken(), vec!["메모 내용"]);
    }

    #[test]
    fn custom_key_names_replace_the_builtin_table() {
        let keys = KeyNameMap::from_json_str(r#"{"keys": {"Enter": "return"}}"#)
            .expect("table should parse");
        let mut engine = engine(KeystrokeProfile::KeyNames).with_key_names(keys);

        engine.on_key(&text_field(""), "Enter");
        engine.on_key(&text_field(""), "@");

        assert_eq!(engine.speech().spoken(), vec!["return", "@"]);
    }

    #[test]
    fn inactive_engine_never_speaks() {
        let mut engine = AnnouncementEngine::new(
            Mode::inactive(),
            EngineConfig::default(),
            RecordingSpeech::new(),
        );
        let button = ElementSnapshot::new(ElementKind::Button).with_text("Submit");

        engine.on_focus(&button);
        engine.on_hover(&button);
        engine.on_key(&button, "Enter");
        engine.speak("직접 호출");

        assert_eq!(engine.announcement(&InteractionEvent::Focus(&button)), None);
        assert!(engine.speech().requests().is_empty());
    }

    #[test]
    fn unavailable_speech_degrades_to_silence() {
        let mut engine = AnnouncementEngine::new(
            Mode::active(),
            EngineConfig::default(),
            RecordingSpeech::unavailable(),
        );
        let button = ElementSnapshot::new(ElementKind::Button).with_text("Submit");

        engine.on_focus(&button);

        assert_eq!(
            engine.announcement(&InteractionEvent::Focus(&button)).as_deref(),
            Some("버튼: Submit")
        );
        assert!(engine.speech().requests().is_empty());
    }

    #[test]
    fn initialize_relabels_carousel_controls_when_enabled() {
        let engine = engine(KeystrokeProfile::KeyNames);
        let mut controls = vec![ControlAttributes::with_classes(["swiper-button-next"])];
        assert_eq!(engine.initialize(controls.iter_mut()), 1);
        assert_eq!(controls[0].aria_label.as_deref(), Some(CAROUSEL_NEXT_LABEL));

        let config = EngineConfigBuilder::default()
            .relabel_carousel(false)
            .build()
            .expect("config should build");
        let engine = AnnouncementEngine::new(Mode::active(), config, RecordingSpeech::new());
        let mut controls = vec![ControlAttributes::with_classes(["swiper-button-prev"])];
        assert_eq!(engine.initialize(controls.iter_mut()), 0);
        assert_eq!(controls[0].aria_label, None);
    }
}
