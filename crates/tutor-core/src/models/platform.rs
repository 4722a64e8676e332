//! Target platform tags.

use std::{collections::BTreeSet, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the hardware a step is compatible with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    /// First hardware revision
    #[serde(rename = "microbitV1")]
    MicrobitV1,

    /// Second hardware revision
    #[serde(rename = "microbitV2")]
    MicrobitV2,
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "microbitv1" | "v1" => Ok(Platform::MicrobitV1),
            "microbitv2" | "v2" => Ok(Platform::MicrobitV2),
            _ => Err(format!("Invalid platform: {s}")),
        }
    }
}

impl Platform {
    /// Tag used in storage and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MicrobitV1 => "microbitV1",
            Platform::MicrobitV2 => "microbitV2",
        }
    }

    /// Default compatibility set for new steps.
    pub fn all() -> BTreeSet<Platform> {
        BTreeSet::from([Platform::MicrobitV1, Platform::MicrobitV2])
    }

    /// Parses a comma-separated tag list, skipping blanks.
    pub fn parse_set(tags: &str) -> Result<BTreeSet<Platform>, String> {
        tags.split(',')
            .filter(|tag| !tag.trim().is_empty())
            .map(str::parse)
            .collect()
    }

    /// Joins a set back into the comma-separated form read by [`Platform::parse_set`].
    pub fn join_set(set: &BTreeSet<Platform>) -> String {
        set.iter()
            .map(Platform::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
