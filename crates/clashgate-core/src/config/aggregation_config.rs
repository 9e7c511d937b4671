//! Conflict aggregation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which records feed the conflict summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AggregationScope {
    /// Records the matrix marked reportable, before exception filtering.
    #[default]
    Reportable,
    /// Every complete record, whatever the matrix says.
    AllValid,
}

impl AggregationScope {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reportable => "reportable",
            Self::AllValid => "all_valid",
        }
    }
}

impl fmt::Display for AggregationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregationScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "reportable" => Ok(Self::Reportable),
            "all_valid" => Ok(Self::AllValid),
            other => Err(format!("unknown aggregation scope '{other}'")),
        }
    }
}

/// Configuration for the conflict aggregation step.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AggregationConfig {
    /// Records to aggregate. Default: reportable.
    pub scope: Option<AggregationScope>,
    /// Emit discipline pairs with zero conflicts. Default: false.
    pub include_empty_groups: Option<bool>,
}

impl AggregationConfig {
    pub fn effective_scope(&self) -> AggregationScope {
        self.scope.unwrap_or_default()
    }

    pub fn effective_include_empty_groups(&self) -> bool {
        self.include_empty_groups.unwrap_or(false)
    }
}
