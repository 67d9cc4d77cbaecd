//! Satellite geometry: satellites in view and satellites used in fix
use log::debug;

use crate::{
    constants::{MAX_SATELLITE_PRN, MIN_SATELLITES, SATELLITES_PER_GSV},
    prelude::{Constellation, Randomizer, SV},
};

/// [SatelliteGroup] describes the satellites in view: a pool of distinct
/// GPS [SV]s sampled once per session, partitioned into chunks of at
/// most 4 (one chunk per GSV sentence), and the subset of the pool
/// currently used in the fix.
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteGroup {
    /// Satellites in view
    pool: Vec<SV>,
    /// Satellites used in fix
    used: Vec<SV>,
}

impl SatelliteGroup {
    /// Samples a new [SatelliteGroup] of `total` satellites.
    /// `total` is clamped to [4, 32]: a fix requires 4 satellites and
    /// there are only 32 GPS PRNs to pick from.
    pub fn new(total: usize, rng: &mut dyn Randomizer) -> Self {
        let total = total.clamp(MIN_SATELLITES, MAX_SATELLITE_PRN as usize);

        let prns = (1..=MAX_SATELLITE_PRN)
            .map(|prn| SV::new(Constellation::GPS, prn))
            .collect::<Vec<_>>();

        let pool = rng.sample(&prns, total);
        debug!("satellites in view: {:?}", pool);

        Self {
            pool,
            used: Vec::new(),
        }
    }

    /// Total number of satellites in view
    pub fn total(&self) -> usize {
        self.pool.len()
    }

    /// Satellites in view, in sampling order
    pub fn satellites(&self) -> &[SV] {
        &self.pool
    }

    /// Satellites currently used in the fix
    pub fn used(&self) -> &[SV] {
        &self.used
    }

    /// Number of GSV sentences required to describe this group
    pub fn num_sentences(&self) -> usize {
        self.pool.len().div_ceil(SATELLITES_PER_GSV)
    }

    /// Partitions the pool into GSV chunks: sequential chunks of 4,
    /// the last one holding the remainder.
    pub fn chunks(&self) -> impl Iterator<Item = &[SV]> {
        self.pool.chunks(SATELLITES_PER_GSV)
    }

    /// Samples a new set of satellites used in fix. Its size is drawn
    /// in `min..=max`, bounded by the pool size. An inverted range
    /// collapses to `min`.
    pub fn resample_used(&mut self, min: usize, max: usize, rng: &mut dyn Randomizer) {
        let max = max.max(min);
        let amount = rng.range(min as u32, max as u32) as usize;
        let amount = amount.min(self.pool.len());
        self.used = rng.sample(&self.pool, amount);
    }
}
