//! Generation step (B3/S23).
//!
//! 1. Every stored zone is evaluated against the frozen `active` snapshot
//!    and writes its next state into `staging`.
//! 2. While scanning, live edge cells enqueue the three cells just outside
//!    each edge they touch. Those cells may belong to zones that do not exist
//!    yet, so nothing else would ever evaluate them.
//! 3. Candidates with exactly three live neighbours are born; their zone is
//!    created on demand.
//! 4. Zones whose final staging is all dead are dropped.
//! 5. The rest commit.
//!
//! Nothing is written to `active` before step 5, so every neighbour count in
//! steps 1 and 3 sees the same generation.

use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Coord, Field, Zone};

/// What one `advance` did. Feeds perf stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub zones_scanned: u32,
    pub candidates_checked: u32,
    /// Births that landed outside every zone evaluated in step 1.
    pub edge_births: u32,
    pub zones_created: u32,
    pub zones_removed: u32,
}

/// B3/S23.
#[inline(always)]
fn next_state(alive: u8, neighbors: u8) -> u8 {
    match (alive != 0, neighbors) {
        (true, 2) | (true, 3) | (false, 3) => 1,
        _ => 0,
    }
}

/// Queue the outward cells (normal + both diagonals) for every zone edge
/// `local` lies on. A corner cell touches two edges. Cells past the end of
/// the plane are never queued.
#[inline]
fn push_edge_candidates(global: Coord, local: Coord, last: i32, out: &mut HashSet<Coord>) {
    let mut push = |dx: i32, dy: i32| {
        if let Some(c) = global.checked_offset(dx, dy) {
            out.insert(c);
        }
    };
    for d in -1..=1 {
        if local.x == 0 {
            push(-1, d);
        }
        if local.x == last {
            push(1, d);
        }
        if local.y == 0 {
            push(d, -1);
        }
        if local.y == last {
            push(d, 1);
        }
    }
}

impl Field {
    /// Advance one generation.
    pub fn advance(&mut self) -> StepCounters {
        let mut counters = StepCounters {
            zones_scanned: self.zones.len() as u32,
            ..StepCounters::default()
        };

        // Detach the staging buffers so the map itself stays a read-only
        // snapshot while zones are evaluated.
        let mut staged: Vec<(Coord, Vec<u8>)> = self
            .zones
            .iter_mut()
            .map(|(&address, zone)| (address, std::mem::take(&mut zone.staging)))
            .collect();

        let candidates = self.evaluate_zones(&mut staged);

        for (address, buffer) in staged {
            if let Some(zone) = self.zones.get_mut(&address) {
                zone.staging = buffer;
            }
        }

        // Steps 2-3: every count is taken before any birth is applied.
        counters.candidates_checked = candidates.len() as u32;
        let births: Vec<Coord> = candidates
            .into_iter()
            .filter(|&c| self.neighbor_count(c) == 3)
            .collect();

        let size = self.mapper.zone_size();
        for global in births {
            let (address, local) = self.mapper.to_zone(global);
            let zone = self.zones.entry(address).or_insert_with(|| {
                counters.zones_created += 1;
                Zone::new(address, size)
            });
            let s = size.get();
            if zone.staging[(local.y * s + local.x) as usize] == 0 {
                counters.edge_births += 1;
            }
            zone.write_staging(local, 1);
        }

        // Step 4: emptiness is judged on the final staging, so a birth
        // keeps an otherwise dying zone.
        let before = self.zones.len();
        self.zones.retain(|_, zone| !zone.staging_is_empty());
        counters.zones_removed = (before - self.zones.len()) as u32;

        // Step 5.
        for zone in self.zones.values_mut() {
            zone.commit();
        }

        counters
    }

    /// Step 1 for every zone; returns the deduplicated boundary candidates.
    fn evaluate_zones(&self, staged: &mut [(Coord, Vec<u8>)]) -> HashSet<Coord> {
        #[cfg(feature = "parallel")]
        {
            self.evaluate_zones_parallel(staged)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.evaluate_zones_serial(staged)
        }
    }

    #[cfg_attr(feature = "parallel", allow(dead_code))]
    fn evaluate_zones_serial(&self, staged: &mut [(Coord, Vec<u8>)]) -> HashSet<Coord> {
        let mut candidates = HashSet::new();
        for (address, buffer) in staged.iter_mut() {
            self.evaluate_zone(*address, buffer, &mut candidates);
        }
        candidates
    }

    #[cfg(feature = "parallel")]
    fn evaluate_zones_parallel(&self, staged: &mut [(Coord, Vec<u8>)]) -> HashSet<Coord> {
        staged
            .par_iter_mut()
            .fold(HashSet::new, |mut set, (address, buffer)| {
                self.evaluate_zone(*address, buffer, &mut set);
                set
            })
            .reduce(HashSet::new, |mut a, b| {
                a.extend(b);
                a
            })
    }

    /// Write the next state of zone `address` into `buffer`.
    fn evaluate_zone(&self, address: Coord, buffer: &mut [u8], candidates: &mut HashSet<Coord>) {
        let Some(zone) = self.zones.get(&address) else {
            return;
        };
        let s = self.mapper.zone_size().get();
        let last = s - 1;

        for ly in 0..s {
            for lx in 0..s {
                let local = Coord::new(lx, ly);
                let idx = (ly * s + lx) as usize;
                // A zone on the rim of the plane may hang past i32::MIN or
                // i32::MAX. Those cells are never written and stay dead.
                let Some(global) = self.mapper.try_from_zone(address, local) else {
                    fast!(buffer, [idx] = 0);
                    continue;
                };
                let alive = zone.read(local);

                // Interior cells have all eight neighbours in this zone.
                let interior = lx > 0 && lx < last && ly > 0 && ly < last;
                let neighbors = if interior {
                    Self::interior_count(zone, local)
                } else {
                    self.neighbor_count(global)
                };

                fast!(buffer, [idx] = next_state(alive, neighbors));

                if alive != 0 && !interior {
                    push_edge_candidates(global, local, last, candidates);
                }
            }
        }
    }

    #[inline(always)]
    fn interior_count(zone: &Zone, local: Coord) -> u8 {
        super::NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| zone.read(local.offset(dx, dy)))
            .sum()
    }
}
