//! Client data model and the classification policy.
//!
//! Classification is a pure, total function of the explicit [`ClientTier`]
//! carried by the client record. Every tier maps to exactly one
//! [`Classification`]; there is no error case and no string-based dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable client identifier assigned by the directory that owns the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(i64);

impl ClientId {
    /// Wrap a raw directory identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ClientId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Ordered commercial standing of a client, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Bronze,
    Silver,
    Gold,
}

/// Explicit classification tier driving the credit policy.
///
/// The directory records the tier; the policy reads it directly rather than
/// matching on client names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientTier {
    /// Default tier; base credit figure applies unchanged.
    Standard,
    /// Credit figure is doubled.
    Important,
    /// Exempt from credit checks entirely.
    VeryImportant,
}

impl ClientTier {
    /// Resolve the credit policy for this tier.
    ///
    /// Total over all tiers; unknown clients default to [`Self::Standard`]
    /// at the directory, never here.
    #[must_use]
    pub const fn classification(self) -> Classification {
        match self {
            Self::Standard => Classification {
                credit_multiplier: 1,
                credit_exempt: false,
            },
            Self::Important => Classification {
                credit_multiplier: 2,
                credit_exempt: false,
            },
            // The multiplier is irrelevant for exempt clients; keep it
            // neutral so accidental use cannot inflate a figure.
            Self::VeryImportant => Classification {
                credit_multiplier: 1,
                credit_exempt: true,
            },
        }
    }
}

/// Credit policy derived from a [`ClientTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Factor applied to the oracle's base credit figure.
    pub credit_multiplier: u32,
    /// When set, the credit oracle is never consulted and the minimum-credit
    /// rule is skipped outright.
    pub credit_exempt: bool,
}

/// Client record resolved from the directory.
///
/// Immutable within a single admission attempt; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
    status: ClientStatus,
    tier: ClientTier,
}

impl Client {
    /// Assemble a client record as the directory adapter would return it.
    #[must_use]
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        status: ClientStatus,
        tier: ClientTier,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            tier,
        }
    }

    /// Directory identifier.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Display name held by the directory.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Ordered commercial standing.
    #[must_use]
    pub const fn status(&self) -> ClientStatus {
        self.status
    }

    /// Classification tier driving the credit policy.
    #[must_use]
    pub const fn tier(&self) -> ClientTier {
        self.tier
    }
}
