//! Matching logic for genomic regions to gene annotations.

pub mod relation;
pub mod sweep;

pub use relation::{after, before, is_sorted, overlap_length, overlaps, sort_intervals};
pub use sweep::{find_features, find_features_with_observer, FeatureMap, Hit, Sweep, SweepObserver};
