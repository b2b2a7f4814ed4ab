use url::Url;

use crate::EngineError;

/// Name of the launch query parameter that switches the engine on.
pub const ACTIVATION_PARAM: &str = "type";

/// Value of [`ACTIVATION_PARAM`] that activates UDL mode.
pub const ACTIVATION_VALUE: &str = "udl";

/// Whether UDL mode is on for this page.
///
/// Computed once from the launch parameters and copied into every component
/// that can produce speech. There is deliberately no way to flip it after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode {
    active: bool,
}

impl Mode {
    pub const fn active() -> Self {
        Self { active: true }
    }

    pub const fn inactive() -> Self {
        Self { active: false }
    }

    /// Read the activation parameter from a raw query string.
    ///
    /// A leading `?` is accepted. Only the first `type` pair counts, and the
    /// comparison against `udl` is exact after percent-decoding.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let value = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == ACTIVATION_PARAM)
            .map(|(_, value)| value);

        let active = matches!(value.as_deref(), Some(ACTIVATION_VALUE));
        log::debug!("UDL mode from query {query:?}: active={active}");
        Self { active }
    }

    /// Read the activation parameter from the page's absolute launch URL.
    pub fn from_launch_url(launch_url: &str) -> Result<Self, EngineError> {
        let url = Url::parse(launch_url)?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }
}
