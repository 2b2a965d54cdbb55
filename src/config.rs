//! Configuration and defaults for feature-finder.
//!
//! The defaults reproduce the reference annotation behaviour exactly:
//! single-cursor sweep with the strict overlap test.

use std::fmt;
use std::str::FromStr;

/// How the sweep walks the gene list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepStrategy {
    /// One cursor into the gene list, never rewound. A gene that reaches past
    /// the current region holds the cursor, so genes nested inside it are not
    /// seen for that region.
    #[default]
    Cursor,
    /// Keeps every gene that can still overlap a later region and retires it
    /// once it lies entirely before the current region. Reports all pairs.
    ActiveSet,
}

/// Which predicate decides that a gene overlaps a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapRule {
    /// `min(right) - max(left) > 0`: intervals sharing a single coordinate do
    /// not overlap, although their overlap length is 1.
    #[default]
    Strict,
    /// Overlap iff the inclusive overlap length is positive.
    Inclusive,
}

/// Error type for parsing a strategy from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError;

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sweep strategy: expected 'cursor' or 'active-set'")
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for SweepStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cursor" => Ok(SweepStrategy::Cursor),
            "active-set" | "active_set" => Ok(SweepStrategy::ActiveSet),
            _ => Err(ParseStrategyError),
        }
    }
}

/// Error type for parsing an overlap rule from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOverlapRuleError;

impl fmt::Display for ParseOverlapRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid overlap rule: expected 'strict' or 'inclusive'")
    }
}

impl std::error::Error for ParseOverlapRuleError {}

impl FromStr for OverlapRule {
    type Err = ParseOverlapRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(OverlapRule::Strict),
            "inclusive" => Ok(OverlapRule::Inclusive),
            _ => Err(ParseOverlapRuleError),
        }
    }
}

/// Configuration for the region-to-gene sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub strategy: SweepStrategy,
    pub overlap_rule: OverlapRule,
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: SweepStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_overlap_rule(mut self, rule: OverlapRule) -> Self {
        self.overlap_rule = rule;
        self
    }
}
