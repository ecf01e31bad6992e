//! Presentation review status.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Review status of a submitted presentation, stored as its uppercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationStatus {
    #[default]
    Submitted,
    Approved,
    Rejected,
}

impl PresentationStatus {
    pub const ALL: [PresentationStatus; 3] = [
        PresentationStatus::Submitted,
        PresentationStatus::Approved,
        PresentationStatus::Rejected,
    ];

    /// The stored name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            PresentationStatus::Submitted => "SUBMITTED",
            PresentationStatus::Approved => "APPROVED",
            PresentationStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for PresentationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresentationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown presentation status '{s}'; expected one of SUBMITTED, APPROVED, REJECTED"
                ))
            })
    }
}
