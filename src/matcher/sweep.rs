//! Region-to-gene overlap sweep.
//!
//! Both inputs must be sorted by `(chrom, left, right)` (see
//! [`sort_intervals`](crate::matcher::relation::sort_intervals)). The sweep
//! walks the region list once and moves forward through the gene list
//! without ever rewinding, so the cost is linear in the input sizes plus the
//! number of reported pairs.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::config::{Config, SweepStrategy};
use crate::matcher::relation::{after, before, is_sorted, overlap_length};
use crate::types::{GenomicInterval, Interval};

/// One gene overlapping a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Index of the gene in the gene list.
    pub gene: usize,
    /// Inclusive overlap length in base pairs.
    pub overlap: i64,
}

/// Callbacks invoked at the checkpoints of a sweep. All methods default to
/// doing nothing.
pub trait SweepObserver {
    fn region_entered(&mut self, _index: usize, _region: &Interval) {}

    fn gene_skipped(&mut self, _index: usize, _gene: &Interval) {}

    /// The gene cursor moved forward to `position`.
    fn cursor_advanced(&mut self, _position: usize) {}

    fn pair_recorded(&mut self, _region: &Interval, _gene: &Interval, _overlap: i64) {}
}

impl<O: SweepObserver + ?Sized> SweepObserver for &mut O {
    fn region_entered(&mut self, index: usize, region: &Interval) {
        (**self).region_entered(index, region)
    }

    fn gene_skipped(&mut self, index: usize, gene: &Interval) {
        (**self).gene_skipped(index, gene)
    }

    fn cursor_advanced(&mut self, position: usize) {
        (**self).cursor_advanced(position)
    }

    fn pair_recorded(&mut self, region: &Interval, gene: &Interval, overlap: i64) {
        (**self).pair_recorded(region, gene, overlap)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}

/// Forwards sweep checkpoints to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SweepObserver for LogObserver {
    fn region_entered(&mut self, index: usize, region: &Interval) {
        trace!("region #{}: {}", index, region.name);
    }

    fn gene_skipped(&mut self, index: usize, gene: &Interval) {
        trace!("skipping gene #{}: {}", index, gene.name);
    }

    fn cursor_advanced(&mut self, position: usize) {
        trace!("cursor at gene #{}", position);
    }

    fn pair_recorded(&mut self, region: &Interval, gene: &Interval, overlap: i64) {
        debug!(
            "{} overlaps {} by {} base pairs",
            region.name, gene.name, overlap
        );
    }
}

/// Lazy sweep over a region list, yielding `(region_index, hits)` in region
/// order. Hits for a region are in gene-list order.
pub struct Sweep<'a, R, G, O = NoopObserver> {
    regions: &'a [R],
    genes: &'a [G],
    config: Config,
    observer: O,
    next_region: usize,
    cursor: usize,
    // gene indices still able to overlap a later region (active-set only)
    active: Vec<usize>,
}

impl<'a, R, G> Sweep<'a, R, G, NoopObserver>
where
    R: GenomicInterval,
    G: GenomicInterval,
{
    /// Start a sweep. An empty gene list gives every region an empty result.
    pub fn new(regions: &'a [R], genes: &'a [G], config: Config) -> Self {
        debug_assert!(is_sorted(regions), "region list is not sorted");
        debug_assert!(is_sorted(genes), "gene list is not sorted");

        Sweep {
            regions,
            genes,
            config,
            observer: NoopObserver,
            next_region: 0,
            cursor: 0,
            active: Vec::new(),
        }
    }
}

impl<'a, R, G, O> Sweep<'a, R, G, O>
where
    R: GenomicInterval,
    G: GenomicInterval,
    O: SweepObserver,
{
    /// Replace the observer.
    pub fn with_observer<P: SweepObserver>(self, observer: P) -> Sweep<'a, R, G, P> {
        Sweep {
            regions: self.regions,
            genes: self.genes,
            config: self.config,
            observer,
            next_region: self.next_region,
            cursor: self.cursor,
            active: self.active,
        }
    }

    fn advance(&mut self) {
        self.cursor += 1;
        self.observer.cursor_advanced(self.cursor);
    }

    fn record(&mut self, region: &R, index: usize, gene: &G) -> Hit {
        let overlap = overlap_length(region, gene);
        self.observer
            .pair_recorded(region.interval(), gene.interval(), overlap);
        Hit {
            gene: index,
            overlap,
        }
    }

    /// Single-cursor step.
    ///
    /// A gene extending past the region's right edge keeps the cursor so
    /// that the next region is tested against it too. When the last gene is
    /// recorded the cursor stays on it.
    fn sweep_cursor(&mut self, region: &R) -> Vec<Hit> {
        let genes = self.genes;
        let rule = self.config.overlap_rule;

        while self.cursor < genes.len() && before(&genes[self.cursor], region) {
            self.observer
                .gene_skipped(self.cursor, genes[self.cursor].interval());
            self.advance();
        }

        let mut hits = Vec::new();
        while let Some(gene) = genes.get(self.cursor) {
            if !rule.test(gene, region) {
                break;
            }
            let index = self.cursor;
            hits.push(self.record(region, index, gene));

            if gene.right() > region.right() || index + 1 == genes.len() {
                break;
            }
            self.advance();
        }
        hits
    }

    fn sweep_active(&mut self, region: &R) -> Vec<Hit> {
        let genes = self.genes;
        let rule = self.config.overlap_rule;

        // Regions only move right, so a gene before this one is done.
        self.active.retain(|&g| !before(&genes[g], region));

        while let Some(gene) = genes.get(self.cursor) {
            if after(gene, region) {
                break;
            }
            if before(gene, region) {
                self.observer.gene_skipped(self.cursor, gene.interval());
            } else {
                self.active.push(self.cursor);
            }
            self.advance();
        }

        let mut hits = Vec::new();
        for i in 0..self.active.len() {
            let index = self.active[i];
            let gene = &genes[index];
            if rule.test(gene, region) {
                hits.push(self.record(region, index, gene));
            }
        }
        hits
    }
}

impl<R, G, O> Iterator for Sweep<'_, R, G, O>
where
    R: GenomicInterval,
    G: GenomicInterval,
    O: SweepObserver,
{
    type Item = (usize, Vec<Hit>);

    fn next(&mut self) -> Option<Self::Item> {
        let regions = self.regions;
        let index = self.next_region;
        let region = regions.get(index)?;
        self.next_region += 1;

        self.observer.region_entered(index, region.interval());
        let hits = match self.config.strategy {
            SweepStrategy::Cursor => self.sweep_cursor(region),
            SweepStrategy::ActiveSet => self.sweep_active(region),
        };
        Some((index, hits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.regions.len() - self.next_region;
        (remaining, Some(remaining))
    }
}

impl<R, G, O> ExactSizeIterator for Sweep<'_, R, G, O>
where
    R: GenomicInterval,
    G: GenomicInterval,
    O: SweepObserver,
{
}

/// Overlapping genes per region, keyed by region index in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureMap {
    entries: IndexMap<usize, Vec<Hit>>,
}

impl FeatureMap {
    /// Hits for a region; empty if the region has none or is unknown.
    pub fn hits(&self, region_index: usize) -> &[Hit] {
        self.entries
            .get(&region_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve the hits of a region against the gene list they came from.
    pub fn genes_for<'g, G>(
        &'g self,
        region_index: usize,
        genes: &'g [G],
    ) -> impl Iterator<Item = (&'g G, i64)> + 'g {
        self.hits(region_index)
            .iter()
            .map(move |hit| (&genes[hit.gene], hit.overlap))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Hit])> {
        self.entries.iter().map(|(&i, hits)| (i, hits.as_slice()))
    }

    /// Number of regions in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (region, gene) pairs.
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl FromIterator<(usize, Vec<Hit>)> for FeatureMap {
    fn from_iter<T: IntoIterator<Item = (usize, Vec<Hit>)>>(iter: T) -> Self {
        FeatureMap {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Find the genes overlapping each region.
pub fn find_features<R, G>(regions: &[R], genes: &[G], config: Config) -> FeatureMap
where
    R: GenomicInterval,
    G: GenomicInterval,
{
    Sweep::new(regions, genes, config).collect()
}

/// Same as [`find_features`], reporting checkpoints to `observer`.
pub fn find_features_with_observer<R, G, O>(
    regions: &[R],
    genes: &[G],
    config: Config,
    observer: O,
) -> FeatureMap
where
    R: GenomicInterval,
    G: GenomicInterval,
    O: SweepObserver,
{
    Sweep::new(regions, genes, config)
        .with_observer(observer)
        .collect()
}
