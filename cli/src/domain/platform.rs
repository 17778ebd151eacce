//! CI provider selection and value sanitization.
//!
//! Pure functions only — no I/O, no async.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::SyncError;

/// CI backend whose variable store receives updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CiPlatform {
    #[default]
    Github,
    Gitlab,
}

impl CiPlatform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Gitlab => "Gitlab",
        }
    }
}

impl fmt::Display for CiPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CiPlatform {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("github") => Ok(Self::Github),
            v if v.eq_ignore_ascii_case("gitlab") => Ok(Self::Gitlab),
            other => Err(SyncError::UnsupportedPlatform(other.to_string())),
        }
    }
}

/// Escape `value` for the payload sent to `platform`.
///
/// `&` is escaped for every provider. GitHub embeds the value between double
/// quotes in its JSON body, so `"` is escaped there as well. Not idempotent:
/// sanitize exactly once per update.
#[must_use]
pub fn sanitize_value(platform: CiPlatform, value: &str) -> String {
    let escaped = value.replace('&', "\\&");
    match platform {
        CiPlatform::Github => escaped.replace('"', "\\\""),
        CiPlatform::Gitlab => escaped,
    }
}
