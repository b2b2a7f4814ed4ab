use crate::element::ElementSnapshot;

/// A single interaction reported by the page.
///
/// Events are transient: the engine consumes them within one handling pass
/// and never stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent<'a> {
    Hover(&'a ElementSnapshot),
    Focus(&'a ElementSnapshot),
    KeyInput {
        target: &'a ElementSnapshot,
        /// Raw key identifier, e.g. `"a"`, `" "`, `"Enter"`, `"ArrowLeft"`.
        key: &'a str,
    },
}

impl<'a> InteractionEvent<'a> {
    pub fn target(&self) -> &'a ElementSnapshot {
        match *self {
            Self::Hover(target) | Self::Focus(target) => target,
            Self::KeyInput { target, .. } => target,
        }
    }
}
