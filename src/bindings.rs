//! Where an integrator attaches listeners for each keystroke profile.
//!
//! The engine never queries the page itself. These selectors describe which
//! elements each profile expects events from, so the wiring stays consistent
//! with the announcement policy.

use crate::KeystrokeProfile;

/// Key event phase the keystroke listener should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    KeyDown,
    KeyUp,
}

impl KeyPhase {
    /// DOM event type name.
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::KeyUp => "keyup",
        }
    }
}

/// CSS selectors for each event kind. `None` means no listener of that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBindings {
    /// Elements announced on mouse hover.
    pub hover: Option<&'static str>,
    /// Elements announced when they gain focus.
    pub focus: &'static str,
    /// Text-entry elements whose keystrokes are announced.
    pub keystroke: &'static str,
    /// Key event the keystroke listener listens for.
    pub key_phase: KeyPhase,
}

impl EventBindings {
    pub const fn for_profile(profile: KeystrokeProfile) -> Self {
        match profile {
            KeystrokeProfile::CharEcho => Self {
                hover: Some("img, .udl-hover"),
                focus: ".udl-focus",
                keystroke: ".udl-input",
                key_phase: KeyPhase::KeyUp,
            },
            KeystrokeProfile::KeyNames => Self {
                hover: None,
                focus: "[tabindex], a, button, input, select, textarea",
                keystroke: "input, textarea",
                key_phase: KeyPhase::KeyDown,
            },
        }
    }
}

/// Whether an element with this tag receives focus announcements under the
/// key-name profile.
pub fn is_focus_target(tag: &str, has_tabindex: bool) -> bool {
    has_tabindex
        || matches!(
            tag.to_ascii_lowercase().as_str(),
            "a" | "button" | "input" | "select" | "textarea"
        )
}

/// Whether an element with this tag receives keystroke announcements under
/// the key-name profile.
pub fn is_text_entry(tag: &str) -> bool {
    matches!(tag.to_ascii_lowercase().as_str(), "input" | "textarea")
}
