//! Client neurotype.

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a [`Neurotype`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("neurotype must be one of Autistic, ADHD, Both (got {0:?})")]
pub struct NeurotypeError(pub String);

/// How a client identifies, used to match them with a clinician.
///
/// The wire and database spellings are exactly `Autistic`, `ADHD` and `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(feature = "postgres", sqlx(type_name = "neurotype"))]
pub enum Neurotype {
    Autistic,
    #[serde(rename = "ADHD")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "ADHD"))]
    Adhd,
    Both,
}

impl Neurotype {
    /// All variants, in declaration order.
    pub const ALL: [Self; 3] = [Self::Autistic, Self::Adhd, Self::Both];

    /// The canonical spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Autistic => "Autistic",
            Self::Adhd => "ADHD",
            Self::Both => "Both",
        }
    }
}

impl std::fmt::Display for Neurotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Neurotype {
    type Err = NeurotypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| NeurotypeError(s.to_owned()))
    }
}
