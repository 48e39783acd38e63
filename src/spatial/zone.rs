//! Zone - one `S x S` block of cells with a staging buffer for the next
//! generation.
//!
//! Buffers are row-major (`index = y * S + x`), one byte per cell (0/1).

use super::coords::{Coord, ZoneSize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone {
    address: Coord,
    size: ZoneSize,
    active: Vec<u8>,
    pub(crate) staging: Vec<u8>,
}

impl Zone {
    /// New all-dead zone.
    pub fn new(address: Coord, size: ZoneSize) -> Self {
        Self {
            address,
            size,
            active: vec![0; size.area()],
            staging: vec![0; size.area()],
        }
    }

    #[inline]
    pub fn address(&self) -> Coord {
        self.address
    }

    #[inline]
    pub fn size(&self) -> ZoneSize {
        self.size
    }

    /// Current generation, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.active
    }

    #[inline(always)]
    fn index(&self, local: Coord) -> usize {
        let s = self.size.get();
        debug_assert!(
            local.x >= 0 && local.x < s && local.y >= 0 && local.y < s,
            "zone {:?}: local {:?} out of range for size {}",
            self.address,
            local,
            s
        );
        (local.y * s + local.x) as usize
    }

    /// Hot-path read. `local` must come from the mapper.
    #[inline(always)]
    pub(crate) fn read(&self, local: Coord) -> u8 {
        let idx = self.index(local);
        *fast!(self.active, [idx])
    }

    #[inline(always)]
    pub(crate) fn write(&mut self, local: Coord, bit: u8) {
        let idx = self.index(local);
        fast!(self.active, [idx] = bit);
    }

    #[inline(always)]
    pub(crate) fn write_staging(&mut self, local: Coord, bit: u8) {
        let idx = self.index(local);
        fast!(self.staging, [idx] = bit);
    }

    /// Checked read for callers outside the engine.
    pub fn get(&self, local: Coord) -> Option<u8> {
        let s = self.size.get();
        if local.x < 0 || local.x >= s || local.y < 0 || local.y >= s {
            return None;
        }
        Some(self.active[(local.y * s + local.x) as usize])
    }

    /// Every cell of the current generation is dead.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.iter().all(|&c| c == 0)
    }

    #[inline]
    pub(crate) fn staging_is_empty(&self) -> bool {
        self.staging.iter().all(|&c| c == 0)
    }

    pub fn live_count(&self) -> usize {
        self.active.iter().filter(|&&c| c != 0).count()
    }

    /// Local coordinates of live cells, row by row.
    pub fn iter_live(&self) -> impl Iterator<Item = Coord> + '_ {
        let s = self.size.get();
        self.active
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(move |(i, _)| Coord::new(i as i32 % s, i as i32 / s))
    }

    /// Promote staging to active. Staging keeps the old generation and is
    /// fully overwritten by the next step.
    #[inline]
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.active, &mut self.staging);
    }
}
