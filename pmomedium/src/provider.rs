//! Provider : source d'un média

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Étiquette stable nommant la source d'un média (`youtube`, ...)
///
/// Les identifiants de médias n'ont de sens qu'à l'intérieur d'un provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Provider(Cow<'static, str>);

impl Provider {
    pub const YOUTUBE: Provider = Provider::from_static("youtube");

    /// Provider connu à la compilation
    pub const fn from_static(name: &'static str) -> Self {
        Provider(Cow::Borrowed(name))
    }

    pub fn new<S: Into<String>>(name: S) -> Self {
        Provider(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for Provider {
    fn from(name: &'static str) -> Self {
        Provider::from_static(name)
    }
}

impl From<String> for Provider {
    fn from(name: String) -> Self {
        Provider::new(name)
    }
}
