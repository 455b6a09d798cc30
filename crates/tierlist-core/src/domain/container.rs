//! Item containers: the unassigned pool or a single tier.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::tier::TierId;

/// Where an item lives
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerId {
    /// The unassigned item pool
    #[default]
    Pool,
    Tier(TierId),
}

impl ContainerId {
    pub fn is_pool(&self) -> bool {
        matches!(self, ContainerId::Pool)
    }

    pub fn tier_id(&self) -> Option<&TierId> {
        match self {
            ContainerId::Pool => None,
            ContainerId::Tier(id) => Some(id),
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerId::Pool => f.write_str("pool"),
            ContainerId::Tier(id) => write!(f, "tier:{}", id),
        }
    }
}
