use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Locale
///
/// The publication context a mapping call runs against. Schemas and
/// vocabulary prefixes are resolved per locale; `xpm_enabled` controls
/// whether XPath provenance is recorded on built models for in-context
/// editing.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Locale {
    pub id: String,
    pub culture: String,
    pub xpm_enabled: bool,
}

impl Locale {
    #[must_use]
    pub fn new(id: impl Into<String>, culture: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            culture: culture.into(),
            xpm_enabled: false,
        }
    }

    #[must_use]
    pub fn with_xpm(mut self) -> Self {
        self.xpm_enabled = true;
        self
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.culture)
    }
}
