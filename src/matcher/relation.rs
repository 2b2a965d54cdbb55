//! Ordering and pairwise relations between genomic intervals.
//!
//! Coordinates are compared as closed ranges by [`overlap_length`], while
//! [`overlaps`] uses a strict test: two intervals that share exactly one
//! coordinate are not overlapping, yet have an overlap length of 1.
//! [`overlaps_inclusive`] is the consistent alternative.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::config::OverlapRule;
use crate::types::GenomicInterval;

/// Compare two intervals by `(chrom, left, right)`.
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized,
{
    a.sort_key().cmp(&b.sort_key())
}

/// Stable sort by `(chrom, left, right)`.
///
/// Intervals with equal keys keep their input order.
pub fn sort_intervals<T>(intervals: &mut [T])
where
    T: GenomicInterval + Send,
{
    intervals.par_sort_by(|a, b| compare(a, b));
}

/// Returns true if every adjacent pair is in `(chrom, left, right)` order.
pub fn is_sorted<T: GenomicInterval>(intervals: &[T]) -> bool {
    intervals
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// True if `a` lies entirely to the left of `b`.
pub fn before<A, B>(a: &A, b: &B) -> bool
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized,
{
    match a.chrom().cmp(b.chrom()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.right() < b.left(),
    }
}

/// True if `a` lies entirely to the right of `b`.
pub fn after<A, B>(a: &A, b: &B) -> bool
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized,
{
    match a.chrom().cmp(b.chrom()) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => a.left() > b.right(),
    }
}

/// Strict overlap test: same chromosome and `min(right) - max(left) > 0`.
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized,
{
    a.chrom() == b.chrom() && a.right().min(b.right()).saturating_sub(a.left().max(b.left())) > 0
}

/// Overlap test consistent with [`overlap_length`].
pub fn overlaps_inclusive<A, B>(a: &A, b: &B) -> bool
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized,
{
    overlap_length(a, b) > 0
}

/// Number of shared bases, counting both ends. Zero across chromosomes.
pub fn overlap_length<A, B>(a: &A, b: &B) -> i64
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized,
{
    if a.chrom() != b.chrom() {
        return 0;
    }
    a.right()
        .min(b.right())
        .saturating_sub(a.left().max(b.left()))
        .saturating_add(1)
        .max(0)
}

/// Bases between the end of `a` and the start of `b`, if `a` is before `b`
/// on the same chromosome.
pub fn distance_before<A, B>(a: &A, b: &B) -> Option<i64>
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized,
{
    (a.chrom() == b.chrom() && a.right() < b.left())
        .then(|| b.left().saturating_sub(a.right()) - 1)
}

/// Bases between the end of `b` and the start of `a`, if `a` is after `b`
/// on the same chromosome.
pub fn distance_after<A, B>(a: &A, b: &B) -> Option<i64>
where
    A: GenomicInterval + ?Sized,
    B: GenomicInterval + ?Sized,
{
    distance_before(b, a)
}

impl OverlapRule {
    /// Apply this rule to a pair of intervals.
    pub fn test<A, B>(self, a: &A, b: &B) -> bool
    where
        A: GenomicInterval + ?Sized,
        B: GenomicInterval + ?Sized,
    {
        match self {
            OverlapRule::Strict => overlaps(a, b),
            OverlapRule::Inclusive => overlaps_inclusive(a, b),
        }
    }
}
