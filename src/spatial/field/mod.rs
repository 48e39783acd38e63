//! Field - the zone store.
//!
//! Only zones that hold (or are about to hold) a live cell are allocated.
//! A missing zone is the canonical "all dead" block: every read through the
//! store treats it as zeros, so neighbour lookups never need a bounds check.
//!
//! The generation step lives in `step.rs`.

use std::collections::HashMap;

use crate::domain::patterns::Pattern;

use super::coords::{Coord, ZoneMapper, ZoneSize, NEIGHBOR_OFFSETS};
use super::zone::Zone;

mod step;
pub use step::StepCounters;

/// Largest window [`Field::window`] will copy out, in cells.
pub const MAX_WINDOW_CELLS: usize = 1 << 24;

#[derive(Clone, Debug, Default)]
pub struct Field {
    mapper: ZoneMapper,
    zones: HashMap<Coord, Zone>,
}

impl Field {
    pub fn new(zone_size: ZoneSize) -> Self {
        Self {
            mapper: ZoneMapper::new(zone_size),
            zones: HashMap::new(),
        }
    }

    /// Validate a raw zone size and build an empty store.
    pub fn with_zone_size(zone_size: i32) -> Result<Self, String> {
        Ok(Self::new(ZoneSize::new(zone_size)?))
    }

    // === Accessors ===

    #[inline]
    pub fn mapper(&self) -> &ZoneMapper {
        &self.mapper
    }

    #[inline]
    pub fn zone_size(&self) -> ZoneSize {
        self.mapper.zone_size()
    }

    #[inline]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn zone(&self, address: Coord) -> Option<&Zone> {
        self.zones.get(&address)
    }

    /// Every stored zone, in no particular order. Read-only.
    pub fn zones(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.values()
    }

    pub fn population(&self) -> usize {
        self.zones.values().map(Zone::live_count).sum()
    }

    /// Live cells in global coordinates, sorted by (x, y).
    pub fn live_cells(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self
            .zones
            .values()
            .flat_map(|zone| {
                let address = zone.address();
                zone.iter_live()
                    .map(move |local| self.mapper.from_zone(address, local))
            })
            .collect();
        cells.sort_unstable();
        cells
    }

    /// Inclusive bounding box of the live cells, `None` when nothing lives.
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let cells = self.live_cells();
        let first = *cells.first()?;
        let (mut min, mut max) = (first, first);
        for c in &cells[1..] {
            min.x = min.x.min(c.x);
            min.y = min.y.min(c.y);
            max.x = max.x.max(c.x);
            max.y = max.y.max(c.y);
        }
        Some((min, max))
    }

    // === Cell queries ===

    /// 0 or 1. Cells in missing zones are dead.
    #[inline]
    pub fn value_at(&self, global: Coord) -> u8 {
        let (address, local) = self.mapper.to_zone(global);
        match self.zones.get(&address) {
            Some(zone) => zone.read(local),
            None => 0,
        }
    }

    /// Live Moore neighbours of `global`, in `0..=8`. Each neighbour is
    /// mapped on its own; it may sit in another (or a missing) zone.
    /// Neighbours past the end of the plane are dead.
    #[inline]
    pub fn neighbor_count(&self, global: Coord) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| global.checked_offset(dx, dy))
            .map(|c| self.value_at(c))
            .sum()
    }

    /// Row-major copy of the `width x height` window whose top-left cell is
    /// `origin`. Cells past the end of the plane read as dead. Fails when the
    /// window holds more than [`MAX_WINDOW_CELLS`] cells.
    pub fn window(&self, origin: Coord, width: u32, height: u32) -> Result<Vec<u8>, String> {
        let cells = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= MAX_WINDOW_CELLS)
            .ok_or_else(|| {
                format!("window {width}x{height} exceeds {MAX_WINDOW_CELLS} cells")
            })?;
        let mut out = Vec::with_capacity(cells);
        if cells == 0 {
            return Ok(out);
        }
        // Both sides are at most MAX_WINDOW_CELLS here, so they fit in i32.
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                let cell = origin.checked_offset(dx, dy).map_or(0, |c| self.value_at(c));
                out.push(cell);
            }
        }
        Ok(out)
    }

    // === Mutation ===

    /// Drop every zone.
    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Flip one cell, allocating its zone on demand. A zone left all-dead by
    /// the flip is released right away.
    pub fn toggle_at(&mut self, global: Coord) {
        let (address, local) = self.mapper.to_zone(global);
        let size = self.mapper.zone_size();
        let zone = self
            .zones
            .entry(address)
            .or_insert_with(|| Zone::new(address, size));
        let bit = zone.read(local);
        zone.write(local, bit ^ 1);
        if zone.is_empty() {
            self.zones.remove(&address);
        }
    }

    /// Idempotent write.
    pub fn set_alive(&mut self, global: Coord, alive: bool) {
        if self.value_at(global) != alive as u8 {
            self.toggle_at(global);
        }
    }

    /// Replace the contents with `pattern`, centred on the origin: cell
    /// `(row, col)` lands on `(col - width / 2, row - height / 2)`.
    pub fn setup(&mut self, pattern: &Pattern) {
        self.clear();
        // Pattern extents are capped well below i32::MAX at construction.
        let half_w = (pattern.width() / 2) as i32;
        let half_h = (pattern.height() / 2) as i32;
        for (row, col) in pattern.live_cells() {
            self.toggle_at(Coord::new(col as i32 - half_w, row as i32 - half_h));
        }
    }

    /// Deep copy. The two stores share no buffers.
    pub fn copy(&self) -> Field {
        self.clone()
    }

    /// Become a deep copy of `from` (zones and zone size).
    pub fn setup_copy(&mut self, from: &Field) {
        self.mapper = from.mapper;
        self.zones = from.zones.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::with_zone_size(3).unwrap()
    }

    fn pattern(rows: &[&[u8]]) -> Pattern {
        Pattern::from_rows("test", rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn even_zone_size_fails_before_any_state() {
        assert!(Field::with_zone_size(2).is_err());
        assert!(Field::with_zone_size(0).is_err());
        assert!(Field::with_zone_size(-1).is_err());
    }

    #[test]
    fn missing_zones_read_as_dead() {
        let f = field();
        assert_eq!(f.value_at(Coord::new(1_000, -1_000)), 0);
        assert_eq!(f.neighbor_count(Coord::new(-77, 12)), 0);
        assert_eq!(f.zone_count(), 0);
    }

    #[test]
    fn toggle_allocates_and_releases_zone() {
        let mut f = field();
        let c = Coord::new(4, -5);

        f.toggle_at(c);
        assert_eq!(f.value_at(c), 1);
        assert_eq!(f.zone_count(), 1);
        let (address, _) = f.mapper().to_zone(c);
        assert!(f.zone(address).is_some());

        f.toggle_at(c);
        assert_eq!(f.value_at(c), 0);
        assert_eq!(f.zone_count(), 0);
    }

    #[test]
    fn neighbor_count_crosses_zone_borders() {
        let mut f = field();
        // (1, 0) is the right edge of zone (0, 0); its east neighbours live in zone (1, 0).
        for c in [(2, -1), (2, 0), (2, 1), (0, 0)] {
            f.toggle_at(c.into());
        }
        assert_eq!(f.neighbor_count(Coord::new(1, 0)), 4);
        assert_eq!(f.zone_count(), 2);
    }

    #[test]
    fn setup_centres_pattern_on_origin() {
        let mut f = field();
        f.toggle_at(Coord::new(50, 50));
        f.setup(&pattern(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]));

        assert_eq!(
            f.live_cells(),
            vec![Coord::new(-1, 0), Coord::new(0, 0), Coord::new(1, 0)]
        );
        assert_eq!(f.zone_count(), 1);
    }

    #[test]
    fn setup_centres_a_wide_pattern_exactly() {
        let width = 1 << 20;
        let wide = Pattern::from_cells("wide", width, 1, &[(0, 0), (0, width - 1)]).unwrap();
        let mut f = field();
        f.setup(&wide);
        let half = (width / 2) as i32;
        assert_eq!(f.live_cells(), vec![Coord::new(-half, 0), Coord::new(half - 1, 0)]);
    }

    #[test]
    fn setup_of_dead_pattern_allocates_nothing() {
        let mut f = field();
        f.setup(&pattern(&[&[0, 0], &[0, 0]]));
        assert_eq!(f.zone_count(), 0);
        assert_eq!(f.bounds(), None);
    }

    #[test]
    fn set_alive_is_idempotent() {
        let mut f = field();
        f.set_alive(Coord::new(0, 0), true);
        f.set_alive(Coord::new(0, 0), true);
        assert_eq!(f.population(), 1);
        f.set_alive(Coord::new(0, 0), false);
        f.set_alive(Coord::new(9, 9), false);
        assert_eq!(f.zone_count(), 0);
    }

    #[test]
    fn window_reads_across_missing_zones() {
        let mut f = field();
        f.toggle_at(Coord::new(-2, -2));
        f.toggle_at(Coord::new(2, 2));

        let w = f.window(Coord::new(-2, -2), 5, 5).unwrap();
        assert_eq!(w.len(), 25);
        assert_eq!(w[0], 1);
        assert_eq!(w[24], 1);
        assert_eq!(w.iter().filter(|&&c| c == 1).count(), 2);
        assert_eq!(f.bounds(), Some((Coord::new(-2, -2), Coord::new(2, 2))));
    }

    #[test]
    fn oversized_window_is_refused() {
        let f = field();
        assert!(f.window(Coord::new(0, 0), u32::MAX, u32::MAX).is_err());
        assert!(f.window(Coord::new(0, 0), 1 << 13, (1 << 11) + 1).is_err());
        assert_eq!(f.window(Coord::new(0, 0), u32::MAX, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn window_over_the_plane_end_reads_dead() {
        let mut f = field();
        f.toggle_at(Coord::new(i32::MAX, 0));
        let w = f.window(Coord::new(i32::MAX - 1, 0), 4, 1).unwrap();
        assert_eq!(w, vec![0, 1, 0, 0]);
    }

    #[test]
    fn copy_shares_no_state() {
        let mut a = field();
        a.toggle_at(Coord::new(0, 0));
        let mut b = a.copy();

        a.toggle_at(Coord::new(1, 0));
        assert_eq!(b.value_at(Coord::new(1, 0)), 0);

        b.toggle_at(Coord::new(0, 0));
        assert_eq!(a.value_at(Coord::new(0, 0)), 1);
    }

    #[test]
    fn setup_copy_adopts_zone_size_and_cells() {
        let mut source = Field::with_zone_size(5).unwrap();
        source.toggle_at(Coord::new(3, 3));

        let mut target = field();
        target.toggle_at(Coord::new(-1, -1));
        target.setup_copy(&source);

        assert_eq!(target.zone_size().get(), 5);
        assert_eq!(target.live_cells(), vec![Coord::new(3, 3)]);

        source.toggle_at(Coord::new(3, 3));
        assert_eq!(target.population(), 1);
    }
}
