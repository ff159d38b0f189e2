use crate::error::{ExtswapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of characters every suffix must have.
pub const SUFFIX_LEN: usize = 3;

/// A 3-character filename suffix such as `.gs`.
///
/// The full suffix is what a name must end with to be selected. What gets
/// substituted is decided per pair, see [`Conversion::patterns`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Suffix(String);

impl Suffix {
    pub fn new(suffix: &str) -> Result<Self> {
        let invalid = |reason| ExtswapError::InvalidSuffix {
            suffix: suffix.to_string(),
            reason,
        };

        if suffix.chars().count() != SUFFIX_LEN {
            return Err(invalid("must be exactly 3 characters"));
        }
        if suffix.contains(['/', '\\', '\0']) {
            return Err(invalid("must not contain path separators"));
        }

        Ok(Self(suffix.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Suffix {
    type Err = ExtswapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Suffix {
    type Error = ExtswapError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Suffix> for String {
    fn from(suffix: Suffix) -> Self {
        suffix.0
    }
}

/// One direction of conversion: entries ending in `source` get every
/// occurrence of the source pattern replaced by the target pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConversion")]
pub struct Conversion {
    pub source: Suffix,
    pub target: Suffix,
}

#[derive(Deserialize)]
struct RawConversion {
    source: Suffix,
    target: Suffix,
}

impl TryFrom<RawConversion> for Conversion {
    type Error = ExtswapError;

    fn try_from(raw: RawConversion) -> Result<Self> {
        Self::new(raw.source, raw.target)
    }
}

impl Conversion {
    pub fn new(source: Suffix, target: Suffix) -> Result<Self> {
        if source == target {
            return Err(ExtswapError::SameSuffix(source.0));
        }
        Ok(Self { source, target })
    }

    /// Parse both suffixes and build the conversion in one step.
    pub fn parse(source: &str, target: &str) -> Result<Self> {
        Self::new(source.parse()?, target.parse()?)
    }

    pub fn gs_to_js() -> Self {
        Self {
            source: Suffix(".gs".to_string()),
            target: Suffix(".js".to_string()),
        }
    }

    pub fn js_to_gs() -> Self {
        Self::gs_to_js().reversed()
    }

    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    /// Whether `name` is selected: its trailing 3 characters equal the source suffix.
    pub fn matches(&self, name: &str) -> bool {
        name.ends_with(self.source.as_str())
    }

    /// The substituted texts. The leading dot is dropped only when both
    /// suffixes have one (`.gs`/`.js` gives `gs`/`js`); otherwise the full
    /// suffixes are used, so a dot is never gained or lost.
    pub fn patterns(&self) -> (&str, &str) {
        match (
            self.source.as_str().strip_prefix('.'),
            self.target.as_str().strip_prefix('.'),
        ) {
            (Some(source), Some(target)) => (source, target),
            _ => (self.source.as_str(), self.target.as_str()),
        }
    }

    /// Literal replace-all of the source pattern over the whole name, so
    /// `gsgraph.gs` becomes `jsgraph.js`, not `gsgraph.js`.
    pub fn rename(&self, name: &str) -> String {
        let (source, target) = self.patterns();
        name.replace(source, target)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// The two built-in directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToJs,
    ToGs,
}

impl Direction {
    pub fn conversion(self) -> Conversion {
        match self {
            Self::ToJs => Conversion::gs_to_js(),
            Self::ToGs => Conversion::js_to_gs(),
        }
    }
}
