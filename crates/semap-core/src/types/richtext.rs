use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

///
/// RichText
///
/// Processed rich-text markup. Construction from raw markup happens either
/// through the pluggable rich-text processor (XHTML fields) or verbatim
/// (plain-text fields mapped to a rich-text property).
///

#[derive(
    Clone, Debug, Default, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
#[repr(transparent)]
pub struct RichText(String);

impl RichText {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RichText {
    fn from(markup: &str) -> Self {
        Self::new(markup)
    }
}

///
/// TESTS
///
