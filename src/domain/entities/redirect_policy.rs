//! Resolution policy applied to every redirect request.

use std::fmt;
use std::str::FromStr;

/// How a short hash is turned into a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectPolicy {
    /// Query the lookup service and redirect to wherever it redirects.
    ///
    /// Reports unknown hashes (404) and upstream failures (500) locally.
    #[default]
    Probe,
    /// Redirect the client straight to the lookup service without asking it first.
    ///
    /// Never fails locally; unknown hashes surface on the second hop.
    Blind,
}

impl RedirectPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Probe => "probe",
            Self::Blind => "blind",
        }
    }
}

impl fmt::Display for RedirectPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, thiserror::Error)]
#[error("unknown redirect policy '{0}', expected 'probe' or 'blind'")]
pub struct ParsePolicyError(String);

impl FromStr for RedirectPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "probe" => Ok(Self::Probe),
            "blind" => Ok(Self::Blind),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
