//! One-shot fixes for third-party widgets whose built-in labels are not in
//! the announcement language.

use crate::Mode;

pub const CAROUSEL_PREV_CLASS: &str = "swiper-button-prev";
pub const CAROUSEL_NEXT_CLASS: &str = "swiper-button-next";

pub const CAROUSEL_PREV_LABEL: &str = "이전 슬라이드";
pub const CAROUSEL_NEXT_LABEL: &str = "다음 슬라이드";

/// Selector matching the carousel controls [`relabel_carousel_controls`]
/// handles.
pub const CAROUSEL_CONTROL_SELECTOR: &str = ".swiper-button-prev, .swiper-button-next";

/// An element whose `aria-label` can be rewritten.
pub trait CarouselControl {
    fn has_class(&self, class: &str) -> bool;

    /// Replace any existing `aria-label` with `label`.
    fn set_aria_label(&mut self, label: &str);
}

/// Plain attribute bag implementing [`CarouselControl`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlAttributes {
    pub classes: Vec<String>,
    pub aria_label: Option<String>,
}

impl ControlAttributes {
    pub fn with_classes<I, T>(classes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            aria_label: None,
        }
    }
}

impl CarouselControl for ControlAttributes {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn set_aria_label(&mut self, label: &str) {
        self.aria_label = Some(label.to_string());
    }
}

/// Overwrite the `aria-label` of carousel previous/next controls with
/// localized labels. Returns how many controls were relabelled.
pub fn relabel_carousel_controls<'a, C, I>(mode: Mode, controls: I) -> usize
where
    C: CarouselControl + 'a + ?Sized,
    I: IntoIterator<Item = &'a mut C>,
{
    if !mode.is_active() {
        return 0;
    }

    let mut relabelled = 0;
    for control in controls {
        let label = if control.has_class(CAROUSEL_PREV_CLASS) {
            CAROUSEL_PREV_LABEL
        } else if control.has_class(CAROUSEL_NEXT_CLASS) {
            CAROUSEL_NEXT_LABEL
        } else {
            continue;
        };
        control.set_aria_label(label);
        relabelled += 1;
    }

    log::debug!("Relabelled {relabelled} carousel controls");
    relabelled
}
