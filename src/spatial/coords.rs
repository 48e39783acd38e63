//! Coordinate Mapper - global cell address <-> (zone address, local address).
//!
//! Zones are `S x S` blocks with `S` odd, and zone `(0, 0)` is centred on the
//! origin: it covers `[-S/2, S/2]` on both axes. Zone `(1, 0)` starts right
//! after it at `x = S/2 + 1`, and so on in both directions.

/// Integer cell address. Used for global cells, zone addresses and local
/// (in-zone) addresses alike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// `offset` that returns `None` past the end of the `i32` plane.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self { x: self.x.checked_add(dx)?, y: self.y.checked_add(dy)? })
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Moore neighbourhood offsets.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Zone edge length. Always odd and positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ZoneSize(i32);

impl ZoneSize {
    pub const DEFAULT: ZoneSize = ZoneSize(3);

    pub fn new(size: i32) -> Result<Self, String> {
        if size <= 0 {
            return Err(format!("zone size must be positive, got {size}"));
        }
        if size % 2 == 0 {
            return Err(format!("zone size must be odd, got {size}"));
        }
        Ok(Self(size))
    }

    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn half(self) -> i32 {
        self.0 / 2
    }

    /// Cells per zone buffer.
    #[inline]
    pub fn area(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }
}

impl Default for ZoneSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Stateless mapper parameterized by the zone size of its owning store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZoneMapper {
    size: ZoneSize,
}

impl ZoneMapper {
    pub fn new(size: ZoneSize) -> Self {
        Self { size }
    }

    #[inline]
    pub fn zone_size(&self) -> ZoneSize {
        self.size
    }

    /// Global cell -> (zone address, local address).
    #[inline]
    pub fn to_zone(&self, global: Coord) -> (Coord, Coord) {
        let (zx, lx) = self.axis_to_zone(global.x);
        let (zy, ly) = self.axis_to_zone(global.y);
        (Coord::new(zx, zy), Coord::new(lx, ly))
    }

    /// (zone address, local address) -> global cell.
    ///
    /// The pair must name a cell of the `i32` plane, as every pair produced
    /// by [`to_zone`](Self::to_zone) does. Use
    /// [`try_from_zone`](Self::try_from_zone) for zones on the plane's rim.
    #[inline]
    pub fn from_zone(&self, zone: Coord, local: Coord) -> Coord {
        let x = self.axis_from_zone(zone.x, local.x);
        let y = self.axis_from_zone(zone.y, local.y);
        debug_assert!(
            i32::try_from(x).is_ok() && i32::try_from(y).is_ok(),
            "zone {zone:?} local {local:?} is off the plane"
        );
        Coord::new(x as i32, y as i32)
    }

    /// Like [`from_zone`](Self::from_zone), but `None` for the cells of a
    /// rim zone that hang past `i32::MIN` or `i32::MAX`.
    #[inline]
    pub fn try_from_zone(&self, zone: Coord, local: Coord) -> Option<Coord> {
        let x = i32::try_from(self.axis_from_zone(zone.x, local.x)).ok()?;
        let y = i32::try_from(self.axis_from_zone(zone.y, local.y)).ok()?;
        Some(Coord::new(x, y))
    }

    /// True if `local` addresses a cell inside a zone buffer.
    #[inline]
    pub fn is_local(&self, local: Coord) -> bool {
        let s = self.size.get();
        local.x >= 0 && local.x < s && local.y >= 0 && local.y < s
    }

    // Widened to i64 so the shift cannot overflow at the ends of the plane.
    // The zone index and the local offset both fit back into i32.
    #[inline]
    fn axis_to_zone(&self, v: i32) -> (i32, i32) {
        let s = i64::from(self.size.get());
        let half = i64::from(self.size.half());
        let v = i64::from(v);
        // Shift away from zero, then truncate toward zero.
        let shifted = if v >= 0 { v + half } else { v - half };
        let zone = shifted / s;
        (zone as i32, (v - zone * s + half) as i32)
    }

    #[inline]
    fn axis_from_zone(&self, zone: i32, local: i32) -> i64 {
        i64::from(zone) * i64::from(self.size.get()) - i64::from(self.size.half()) + i64::from(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(size: i32) -> ZoneMapper {
        ZoneMapper::new(ZoneSize::new(size).unwrap())
    }

    #[test]
    fn origin_maps_to_centre_of_zone_zero() {
        let (zone, local) = mapper(3).to_zone(Coord::new(0, 0));
        assert_eq!(zone, Coord::new(0, 0));
        assert_eq!(local, Coord::new(1, 1));
    }

    #[test]
    fn positive_coords_map_to_next_zone() {
        let (zone, local) = mapper(3).to_zone(Coord::new(3, 3));
        assert_eq!(zone, Coord::new(1, 1));
        assert_eq!(local, Coord::new(1, 1));
    }

    #[test]
    fn negative_coords_map_to_negative_zones() {
        let (zone, local) = mapper(3).to_zone(Coord::new(-4, -2));
        assert_eq!(zone, Coord::new(-1, -1));
        assert_eq!(local, Coord::new(0, 2));
    }

    #[test]
    fn from_zone_reference_values() {
        let m = mapper(3);
        assert_eq!(m.from_zone(Coord::new(0, 0), Coord::new(1, 1)), Coord::new(0, 0));
        assert_eq!(m.from_zone(Coord::new(1, 1), Coord::new(0, 0)), Coord::new(2, 2));
        assert_eq!(m.from_zone(Coord::new(-1, 0), Coord::new(1, 0)), Coord::new(-3, -1));
    }

    #[test]
    fn zone_zero_spans_minus_half_to_half() {
        for size in [1, 3, 5, 7] {
            let m = mapper(size);
            let half = size / 2;
            for v in -half..=half {
                let (zone, _) = m.to_zone(Coord::new(v, -v));
                assert_eq!(zone, Coord::new(0, 0), "size {size}, v {v}");
            }
            assert_eq!(m.to_zone(Coord::new(half + 1, 0)).0, Coord::new(1, 0));
            assert_eq!(m.to_zone(Coord::new(-half - 1, 0)).0, Coord::new(-1, 0));
        }
    }

    #[test]
    fn global_round_trip_is_exact() {
        for size in [1, 3, 5, 9, 33] {
            let m = mapper(size);
            for x in -70..=70 {
                for y in [-70, -size, -1, 0, 1, size, 70] {
                    let g = Coord::new(x, y);
                    let (zone, local) = m.to_zone(g);
                    assert!(m.is_local(local), "size {size}, {g:?} -> {local:?}");
                    assert_eq!(m.from_zone(zone, local), g, "size {size}");
                }
            }
        }
    }

    #[test]
    fn zone_round_trip_is_exact() {
        let m = mapper(5);
        for zx in -4..=4 {
            for zy in -4..=4 {
                for lx in 0..5 {
                    for ly in 0..5 {
                        let zone = Coord::new(zx, zy);
                        let local = Coord::new(lx, ly);
                        assert_eq!(m.to_zone(m.from_zone(zone, local)), (zone, local));
                    }
                }
            }
        }
    }

    #[test]
    fn plane_ends_map_without_overflow() {
        for size in [1, 3, 5, 7, 9] {
            let m = mapper(size);
            for v in [i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX] {
                let g = Coord::new(v, v);
                let (zone, local) = m.to_zone(g);
                assert!(m.is_local(local), "size {size}, {g:?} -> {local:?}");
                assert_eq!(m.from_zone(zone, local), g, "size {size}");
                assert_eq!(m.try_from_zone(zone, local), Some(g));
            }
        }
    }

    #[test]
    fn rim_zone_cells_past_the_plane_have_no_global() {
        // Zone 7 * 306783378 - 3 ..= + 3 runs two cells past i32::MAX.
        let m = mapper(7);
        let (zone, local) = m.to_zone(Coord::new(i32::MAX, 0));
        assert_eq!(local.x, 4);
        assert_eq!(m.try_from_zone(zone, Coord::new(5, local.y)), None);
        assert_eq!(m.try_from_zone(zone, Coord::new(6, local.y)), None);
    }

    #[test]
    fn checked_offset_stops_at_the_plane_ends() {
        assert_eq!(Coord::new(i32::MAX, 0).checked_offset(1, 0), None);
        assert_eq!(Coord::new(0, i32::MIN).checked_offset(0, -1), None);
        assert_eq!(Coord::new(i32::MAX, 0).checked_offset(-1, 1), Some(Coord::new(i32::MAX - 1, 1)));
    }

    #[test]
    fn invalid_zone_sizes_are_rejected() {
        assert!(ZoneSize::new(0).is_err());
        assert!(ZoneSize::new(-3).is_err());
        assert!(ZoneSize::new(4).unwrap_err().contains("odd"));
        assert_eq!(ZoneSize::new(7).unwrap().half(), 3);
    }
}
