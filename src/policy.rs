use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// What to do when the sum of two `i32` values is not representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Two's complement wraparound.
    #[default]
    Wrapping,
    /// Clamp to `i32::MIN` / `i32::MAX`.
    Saturating,
    /// Report [`Error::Overflow`].
    Checked,
}

impl OverflowPolicy {
    /// Lowercase name accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Saturating => "saturating",
            OverflowPolicy::Checked => "checked",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrapping" => Ok(OverflowPolicy::Wrapping),
            "saturating" => Ok(OverflowPolicy::Saturating),
            "checked" => Ok(OverflowPolicy::Checked),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
