use serde::{Deserialize, Serialize};

/// Accessibility-relevant category of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Image,
    Link,
    Button,
    TextInput,
    ComboBox,
    #[default]
    Generic,
}

impl ElementKind {
    /// Classify an element by its tag name (case-insensitive).
    ///
    /// `textarea` stays [`ElementKind::Generic`]: it receives keystrokes but is
    /// announced without a role prefix.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "img" => Self::Image,
            "a" => Self::Link,
            "button" => Self::Button,
            "input" => Self::TextInput,
            "select" => Self::ComboBox,
            _ => Self::Generic,
        }
    }

    /// Classify an element by an explicit ARIA `role` attribute.
    pub fn from_role(role: &str) -> Option<Self> {
        match role.trim().to_ascii_lowercase().as_str() {
            "img" => Some(Self::Image),
            "link" => Some(Self::Link),
            "button" => Some(Self::Button),
            "textbox" => Some(Self::TextInput),
            "combobox" => Some(Self::ComboBox),
            _ => None,
        }
    }

    /// Spoken prefix naming the element's role, if it has one.
    pub const fn role_prefix(self) -> Option<&'static str> {
        match self {
            Self::Link => Some("링크: "),
            Self::Button => Some("버튼: "),
            Self::TextInput => Some("입력창: "),
            Self::ComboBox => Some("콤보박스: "),
            Self::Image | Self::Generic => None,
        }
    }
}

/// Read-only view of the attributes an element exposes for announcement.
///
/// Integrators build one per event from the live node; nothing in the engine
/// keeps a reference to the node itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementSnapshot {
    /// Category derived from the tag or ARIA role.
    pub kind: ElementKind,
    /// `alt` attribute, read only for images.
    pub alt_text: Option<String>,
    /// `aria-label` attribute.
    pub aria_label: Option<String>,
    /// Text content of the element and its descendants.
    pub text_content: String,
    /// Current value of input-like elements.
    pub current_value: Option<String>,
}

impl ElementSnapshot {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt_text = Some(alt.into());
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = text.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.current_value = Some(value.into());
        self
    }
}
