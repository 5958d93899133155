//! Table-driven object sizes.
//!
//! Each known object id carries a base footprint and a rule for how the size
//! byte stretches it. A handful of objects pack two sizes into the size byte
//! and get their own formula. This is the fallback used when a footprint
//! cannot be measured by replaying the routine.

use std::collections::HashMap;

use crate::error::RenderError;
use crate::rom::Rom;
use crate::room_object::RoomObject;
use crate::routines::somaria_direction;

/// Tile-data offset tables, one word per object id.
const SUBTYPE_1_TILE_OFFSETS: usize = 0x8000;
const SUBTYPE_2_TILE_OFFSETS: usize = 0x83F0;
const SUBTYPE_3_TILE_OFFSETS: usize = 0x84F0;

const SUBTYPE_1_TABLE_LEN: u16 = 0xF8;
const SUBTYPE_2_TABLE_LEN: u16 = 0x40;
const SUBTYPE_3_TABLE_LEN: u16 = 0x80;

/// Acute diagonal walls reach above their anchor.
const ACUTE_DIAGONALS: [u16; 12] = [
    0x09, 0x0C, 0x0D, 0x10, 0x11, 0x14, 0x15, 0x18, 0x19, 0x1C, 0x1D, 0x20,
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExtendDirection {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
    Diagonal,
    /// Width and height come from two independent 2-bit fields.
    SuperSquare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionEntry {
    pub base_width: i32,
    pub base_height: i32,
    pub extend: ExtendDirection,
    pub multiplier: i32,
    /// A zero size byte means 32 repeats.
    pub use_32_when_zero: bool,
}

impl DimensionEntry {
    const fn new(base_width: i32, base_height: i32, extend: ExtendDirection, multiplier: i32) -> Self {
        Self {
            base_width,
            base_height,
            extend,
            multiplier,
            use_32_when_zero: false,
        }
    }

    const fn fixed(width: i32, height: i32) -> Self {
        Self::new(width, height, ExtendDirection::None, 0)
    }

    const fn horizontal(width: i32, height: i32, multiplier: i32) -> Self {
        Self::new(width, height, ExtendDirection::Horizontal, multiplier)
    }

    const fn vertical(width: i32, height: i32, multiplier: i32) -> Self {
        Self::new(width, height, ExtendDirection::Vertical, multiplier)
    }

    const fn diagonal(width: i32, height: i32, multiplier: i32) -> Self {
        Self::new(width, height, ExtendDirection::Diagonal, multiplier)
    }

    const fn super_square(unit: i32) -> Self {
        Self::new(0, 0, ExtendDirection::SuperSquare, unit)
    }

    const fn or_32(mut self) -> Self {
        self.use_32_when_zero = true;
        self
    }

    /// Applies the extension rule for `steps` extra repeats.
    fn extend(&self, size: u8, steps: i32) -> (i32, i32) {
        let (w, h) = (self.base_width, self.base_height);
        let grow = steps * self.multiplier;
        match self.extend {
            ExtendDirection::None => (w, h),
            ExtendDirection::Horizontal => (w + grow, h),
            ExtendDirection::Vertical => (w, h + grow),
            ExtendDirection::Both | ExtendDirection::Diagonal => (w + grow, h + grow),
            ExtendDirection::SuperSquare => (
                (i32::from((size >> 2) & 0x03) + 1) * self.multiplier,
                (i32::from(size & 0x03) + 1) * self.multiplier,
            ),
        }
    }
}

/// Hit-test rectangle in tiles, relative to the object's anchor unless
/// translated by [`ObjectDimensionTable::hit_test_bounds`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBounds {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
}

impl SelectionBounds {
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.offset_x
            && y >= self.offset_y
            && x < self.offset_x + self.width
            && y < self.offset_y + self.height
    }
}

#[derive(Debug, Default, Clone)]
pub struct ObjectDimensionTable {
    entries: HashMap<u16, DimensionEntry>,
    tile_offsets: HashMap<u16, u16>,
    loaded: bool,
}

impl ObjectDimensionTable {
    /// An empty table; every query falls back to the size heuristic until
    /// [`Self::load_from_rom`] or [`Self::with_defaults`] fills it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table without ROM refinement.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            entries: default_entries(),
            tile_offsets: HashMap::new(),
            loaded: true,
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuilds the table and records every object's tile-data offset.
    /// Calling it again yields the same table.
    pub fn load_from_rom(&mut self, rom: &Rom) -> Result<(), RenderError> {
        if !rom.is_loaded() {
            return Err(RenderError::RomNotLoaded);
        }

        self.entries = default_entries();
        self.tile_offsets.clear();
        for (table, first_id, count) in [
            (SUBTYPE_1_TILE_OFFSETS, 0x000, SUBTYPE_1_TABLE_LEN),
            (SUBTYPE_2_TILE_OFFSETS, 0x100, SUBTYPE_2_TABLE_LEN),
            (SUBTYPE_3_TILE_OFFSETS, 0xF80, SUBTYPE_3_TABLE_LEN),
        ] {
            for index in 0..count {
                let address = table + usize::from(index) * 2;
                match rom.read_word(address) {
                    Ok(offset) => {
                        self.tile_offsets.insert(first_id + index, offset);
                    }
                    Err(err) => tracing::trace!("skipping tile offset of 0x{:03X}: {err}", first_id + index),
                }
            }
        }

        self.loaded = true;
        tracing::debug!(
            "dimension table loaded: {} entries, {} tile offsets",
            self.entries.len(),
            self.tile_offsets.len()
        );
        Ok(())
    }

    /// Offset of the object's tiles in the shared tile data, when read from ROM.
    #[must_use]
    pub fn tile_data_offset(&self, object_id: u16) -> Option<u16> {
        self.tile_offsets.get(&object_id).copied()
    }

    #[must_use]
    pub fn entry(&self, object_id: u16) -> Option<&DimensionEntry> {
        self.entries.get(&object_id)
    }

    /// Footprint of a single repeat; 2x2 for unknown ids.
    #[must_use]
    pub fn base_dimensions(&self, object_id: u16) -> (i32, i32) {
        self.entries
            .get(&object_id)
            .map_or((2, 2), |entry| (entry.base_width, entry.base_height))
    }

    /// Drawn footprint in tiles.
    #[must_use]
    pub fn dimensions(&self, object_id: u16, size: u8) -> (i32, i32) {
        if let Some(dimensions) = packed_dimensions(object_id, size) {
            return dimensions;
        }

        match self.entries.get(&object_id) {
            Some(entry) => {
                // 32 repeats: the base already holds one.
                let steps = if entry.use_32_when_zero && size == 0 {
                    31
                } else {
                    i32::from(size)
                };
                entry.extend(size, steps)
            }
            None => {
                let count = if size == 0 { 32 } else { i32::from(size) + 1 };
                (2 * count, 2)
            }
        }
    }

    /// Footprint used for selection: no 32-repeat rule and never below 2x2.
    #[must_use]
    pub fn selection_dimensions(&self, object_id: u16, size: u8) -> (i32, i32) {
        if let Some(dimensions) = packed_dimensions(object_id, size) {
            return dimensions;
        }

        match self.entries.get(&object_id) {
            Some(entry) => {
                let (w, h) = entry.extend(size, i32::from(size));
                (w.max(2), h.max(2))
            }
            None => ((2 * (i32::from(size) + 1)).min(16), 2),
        }
    }

    /// Selection rectangle, shifted for objects whose first tile is not
    /// drawn at their anchor.
    #[must_use]
    pub fn selection_bounds(&self, object_id: u16, size: u8) -> SelectionBounds {
        let (width, height) = self.selection_dimensions(object_id, size);
        let (offset_x, offset_y) = if ACUTE_DIAGONALS.contains(&object_id) {
            (0, -(height - 5))
        } else {
            anchor_offset(object_id)
        };
        SelectionBounds {
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    /// [`Self::selection_bounds`] in room tile coordinates.
    #[must_use]
    pub fn hit_test_bounds(&self, object: &RoomObject) -> SelectionBounds {
        let bounds = self.selection_bounds(object.id, object.size);
        SelectionBounds {
            offset_x: bounds.offset_x + i32::from(object.x),
            offset_y: bounds.offset_y + i32::from(object.y),
            ..bounds
        }
    }
}

/// Objects that split the size byte into two fields.
fn packed_dimensions(object_id: u16, size: u8) -> Option<(i32, i32)> {
    let low = i32::from(size & 0x0F);
    let high = i32::from((size >> 4) & 0x0F);
    let dimensions = match object_id {
        0xF83..=0xF8C | 0xF8E | 0xF8F => {
            let length = low + 1;
            match somaria_direction(object_id) {
                (0, _) => (1, length),
                (_, 0) => (length, 1),
                _ => (length, length),
            }
        }
        // Closed chest platform: width in the low nibble, side rows in the high.
        0xC1 => (low + 4, high + 3),
        0xDC => ((low + 1).min(8), (high * 2 + 5).min(8)),
        0xDD => (
            4 + 2 * i32::from((size >> 2) & 0x03),
            4 + 2 * i32::from(size & 0x03),
        ),
        // Moving walls grow downwards, not along their base.
        0xCD | 0xCE => (2, 2 * (low + 1)),
        _ => return None,
    };
    Some(dimensions)
}

/// Distance from the anchor to the first drawn tile.
const fn anchor_offset(object_id: u16) -> (i32, i32) {
    match object_id {
        0x21 | 0x23..=0x2E | 0x3F..=0x46 | 0xB3 | 0xB4 => (2, 0),
        0x22 | 0x34 => (3, 0),
        0x2F => (13, 0),
        0x30 => (13, 1),
        0x6C | 0x6D => (12, 0),
        _ => (0, 0),
    }
}

fn default_entries() -> HashMap<u16, DimensionEntry> {
    use DimensionEntry as E;

    let mut entries = HashMap::with_capacity(420);
    let mut set = |ids: &[u16], entry: DimensionEntry| {
        for &id in ids {
            entries.insert(id, entry);
        }
    };
    let range = |from: u16, to: u16| (from..=to).collect::<Vec<_>>();

    // Subtype 1: horizontal runs.
    set(&[0x00], E::horizontal(2, 2, 2).or_32());
    set(&range(0x01, 0x06), E::horizontal(2, 4, 2));
    set(&range(0x07, 0x08), E::horizontal(2, 2, 2));
    set(&range(0x09, 0x14), E::diagonal(7, 11, 1));
    set(&range(0x15, 0x20), E::diagonal(6, 10, 1));
    set(&[0x21], E::horizontal(1, 2, 2));
    set(&[0x22], E::horizontal(2, 1, 1));
    set(&range(0x23, 0x2E), E::horizontal(1, 1, 1));
    set(&[0x2F, 0x30], E::horizontal(10, 2, 1));
    set(&[0x31, 0x32], E::fixed(1, 1));
    set(&[0x33], E::horizontal(4, 4, 4));
    set(&[0x34], E::horizontal(4, 1, 1));
    set(&[0x35], E::fixed(4, 4));
    set(&[0x36, 0x37], E::horizontal(4, 4, 6));
    set(&[0x38], E::horizontal(2, 3, 4));
    set(&[0x39, 0x3D], E::horizontal(2, 4, 6));
    set(&[0x3A, 0x3B], E::horizontal(4, 3, 6));
    set(&[0x3C], E::horizontal(4, 2, 6));
    set(&[0x3E, 0x4B], E::horizontal(2, 2, 14));
    set(&range(0x3F, 0x46), E::horizontal(1, 1, 1));
    set(&[0x47], E::horizontal(4, 5, 2));
    set(&[0x48], E::horizontal(4, 3, 2));
    set(&[0x49, 0x4A], E::horizontal(4, 2, 4));
    set(&[0x4C], E::horizontal(4, 3, 6));
    set(&range(0x4D, 0x4F), E::horizontal(4, 4, 6));
    set(&[0x50], E::horizontal(2, 1, 1));
    set(&[0x51, 0x52, 0x5B, 0x5C], E::horizontal(4, 3, 4));
    set(&[0x53], E::horizontal(2, 2, 2));
    set(&range(0x54, 0x5A), E::fixed(1, 1));
    set(&[0x5D], E::horizontal(6, 3, 1));
    set(&[0x5E], E::horizontal(2, 2, 4));
    set(&[0x5F], E::horizontal(1, 1, 1));

    // Subtype 1: vertical runs.
    set(&[0x60], E::vertical(2, 2, 2).or_32());
    set(&range(0x61, 0x68), E::vertical(4, 2, 2));
    set(&[0x69], E::vertical(1, 2, 1));
    set(&[0x6A, 0x6B], E::vertical(1, 1, 1));
    set(&[0x6C, 0x6D], E::vertical(2, 1, 1));
    set(&[0x6E, 0x6F, 0x72, 0x7E], E::fixed(1, 1));
    set(&[0x70], E::vertical(4, 4, 4));
    set(&[0x71], E::vertical(1, 4, 1));
    set(&[0x73, 0x74], E::vertical(4, 4, 6));
    set(&[0x75, 0x87], E::vertical(2, 4, 6));
    set(&[0x76, 0x77], E::vertical(3, 4, 6));
    set(&[0x78, 0x7B], E::vertical(2, 2, 14));
    set(&[0x79, 0x7A], E::vertical(1, 1, 1));
    set(&[0x7C], E::vertical(1, 2, 1));
    set(&[0x7D], E::vertical(2, 2, 2));
    set(&[0x7F, 0x80], E::vertical(2, 4, 10));
    set(&range(0x81, 0x84), E::vertical(3, 4, 5));
    set(&[0x85, 0x86], E::vertical(3, 6, 6));
    set(&[0x88], E::vertical(3, 6, 1));
    set(&[0x89], E::vertical(2, 2, 4));
    set(&range(0x8A, 0x8E), E::vertical(1, 1, 1));
    set(&[0x8F], E::vertical(2, 3, 3));
    set(&range(0x90, 0x94), E::fixed(4, 4));
    set(&[0x95, 0x96], E::vertical(2, 2, 2));
    set(&range(0x97, 0x9F), E::fixed(1, 1));

    // Diagonal ceilings and the big hole.
    set(&range(0xA0, 0xA3), E::diagonal(4, 4, 4));
    set(&range(0xA5, 0xAC), E::diagonal(4, 4, 4));
    set(&[0xA4], E::new(4, 4, ExtendDirection::Both, 4).or_32());
    set(&[0xAD, 0xAE, 0xAF, 0xBE, 0xBF], E::fixed(1, 1));

    set(&[0xB0, 0xB1], E::horizontal(7, 1, 1));
    set(&[0xB2, 0xBA], E::horizontal(4, 4, 4));
    set(&[0xB3, 0xB4], E::horizontal(1, 1, 1));
    set(&[0xB5], E::vertical(2, 4, 2));
    set(&[0xB6, 0xB7], E::horizontal(2, 4, 2));
    set(&[0xB8, 0xB9], E::horizontal(2, 2, 2).or_32());
    set(&[0xBB], E::horizontal(2, 2, 4));
    set(&[0xBC, 0xBD], E::horizontal(2, 2, 2));

    // Super squares.
    set(&[0xC0, 0xC2, 0xC3, 0xC4, 0xD1, 0xD2, 0xD7, 0xD9, 0xDB], E::super_square(4));
    set(&range(0xC5, 0xCA), E::super_square(4));
    set(&range(0xDF, 0xE8), E::super_square(4));

    set(&range(0xF9, 0xFD), E::fixed(2, 2));

    // Subtype 2.
    set(&range(0x100, 0x11F), E::fixed(4, 4));
    set(&[0x122, 0x128], E::fixed(4, 5));
    set(&[0x123], E::fixed(4, 3));
    set(&[0x12C], E::fixed(3, 6));
    set(&[0x13E], E::fixed(6, 3));

    // Subtype 3: 2x2 unless listed.
    set(&range(0xF80, 0xFFF), E::fixed(2, 2));
    set(&[0xFB1, 0xFB2], E::fixed(4, 3));
    set(&[0xFF0], E::fixed(2, 4));
    set(&[0xFF1, 0xFF8], E::fixed(4, 8));

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room_object::Layer;
    use pretty_assertions::assert_eq;

    fn rom_with_offsets() -> Rom {
        let mut data = vec![0_u8; 0x8600];
        data[0x8000] = 0x34;
        data[0x8001] = 0x12;
        // Subtype 2, index 2.
        data[0x83F4] = 0xCD;
        data[0x83F5] = 0xAB;
        // Subtype 3, last index.
        data[0x84F0 + 0x7F * 2] = 0x01;
        Rom::new(data)
    }

    #[test]
    fn load_requires_a_rom() {
        let mut table = ObjectDimensionTable::new();
        assert!(matches!(
            table.load_from_rom(&Rom::default()),
            Err(RenderError::RomNotLoaded)
        ));
        assert!(!table.is_loaded());
    }

    #[test]
    fn load_records_tile_offsets() {
        let mut table = ObjectDimensionTable::new();
        table.load_from_rom(&rom_with_offsets()).unwrap();
        assert!(table.is_loaded());
        assert_eq!(table.tile_data_offset(0x000), Some(0x1234));
        assert_eq!(table.tile_data_offset(0x102), Some(0xABCD));
        assert_eq!(table.tile_data_offset(0xFFF), Some(0x0001));
        assert_eq!(table.tile_data_offset(0x0F8), None);
    }

    #[test]
    fn load_tolerates_short_roms() {
        let mut table = ObjectDimensionTable::new();
        table.load_from_rom(&Rom::new(vec![0; 0x8010])).unwrap();
        assert_eq!(table.tile_data_offset(0x07), Some(0));
        assert_eq!(table.tile_data_offset(0x08), None);
        assert_eq!(table.dimensions(0x00, 1), (4, 2));
    }

    #[test]
    fn load_is_idempotent() {
        let rom = rom_with_offsets();
        let mut table = ObjectDimensionTable::new();
        table.load_from_rom(&rom).unwrap();
        let first = (table.len(), table.dimensions(0x61, 3), table.tile_data_offset(0x102));
        table.load_from_rom(&rom).unwrap();
        assert_eq!((table.len(), table.dimensions(0x61, 3), table.tile_data_offset(0x102)), first);
    }

    #[test]
    fn horizontal_runs() {
        let table = ObjectDimensionTable::with_defaults();
        assert_eq!(table.dimensions(0x00, 0), (64, 2));
        assert_eq!(table.dimensions(0x00, 3), (8, 2));
        // 0x01 has no 32 rule.
        assert_eq!(table.dimensions(0x01, 0), (2, 4));
        assert_eq!(table.dimensions(0x36, 2), (16, 4));
    }

    #[test]
    fn vertical_runs() {
        let table = ObjectDimensionTable::with_defaults();
        assert_eq!(table.dimensions(0x60, 0), (2, 64));
        assert_eq!(table.dimensions(0x85, 2), (3, 18));
    }

    #[test]
    fn diagonals_grow_both_ways() {
        let table = ObjectDimensionTable::with_defaults();
        assert_eq!(table.dimensions(0x09, 3), (10, 14));
        assert_eq!(table.dimensions(0x15, 0), (6, 10));
        assert_eq!(table.dimensions(0xA0, 1), (8, 8));
    }

    #[test]
    fn super_squares_use_two_bit_fields() {
        let table = ObjectDimensionTable::with_defaults();
        assert_eq!(table.dimensions(0xC0, 0b0110), (8, 12));
        assert_eq!(table.dimensions(0xD9, 0), (4, 4));
    }

    #[test]
    fn packed_sizes() {
        let table = ObjectDimensionTable::with_defaults();
        assert_eq!(table.dimensions(0xF83, 3), (4, 1));
        assert_eq!(table.dimensions(0xF84, 3), (1, 4));
        assert_eq!(table.dimensions(0xF85, 3), (4, 4));
        assert_eq!(table.dimensions(0xC1, 0x10), (4, 4));
        assert_eq!(table.dimensions(0xDC, 0x02), (3, 5));
        assert_eq!(table.dimensions(0xDC, 0xFF), (8, 8));
        assert_eq!(table.dimensions(0xDD, 0b0110), (6, 8));
        assert_eq!(table.dimensions(0xCD, 1), (2, 4));
    }

    #[test]
    fn unknown_ids_use_the_heuristic() {
        let table = ObjectDimensionTable::with_defaults();
        assert_eq!(table.dimensions(0x150, 0), (64, 2));
        assert_eq!(table.dimensions(0x150, 4), (10, 2));
        assert_eq!(table.base_dimensions(0x150), (2, 2));

        let empty = ObjectDimensionTable::new();
        assert_eq!(empty.dimensions(0x61, 1), (4, 2));
    }

    #[test]
    fn selection_ignores_the_32_rule() {
        let table = ObjectDimensionTable::with_defaults();
        assert_eq!(table.selection_dimensions(0x00, 0), (2, 2));
        assert_eq!(table.selection_dimensions(0x2F, 0), (10, 2));
        assert_eq!(table.selection_dimensions(0x22, 0), (2, 2));
        assert_eq!(table.selection_dimensions(0x150, 0), (2, 2));
        assert_eq!(table.selection_dimensions(0x150, 20), (16, 2));
    }

    #[test]
    fn selection_offsets() {
        let table = ObjectDimensionTable::with_defaults();
        let corners = table.selection_bounds(0x30, 0);
        assert_eq!((corners.offset_x, corners.offset_y), (13, 1));

        let acute = table.selection_bounds(0x09, 3);
        assert_eq!(acute, SelectionBounds { offset_x: 0, offset_y: -9, width: 10, height: 14 });

        let grave = table.selection_bounds(0x0A, 3);
        assert_eq!(grave.offset_y, 0);
    }

    #[test]
    fn hit_test_is_translated_selection() {
        let table = ObjectDimensionTable::with_defaults();
        for (id, size) in [(0x09, 3), (0x2F, 2), (0x6C, 0), (0xC0, 5), (0x150, 1)] {
            let object = RoomObject::new(id, 20, 30, size, Layer::Bg1);
            let selection = table.selection_bounds(id, size);
            let hit = table.hit_test_bounds(&object);
            assert_eq!(hit.offset_x, selection.offset_x + 20);
            assert_eq!(hit.offset_y, selection.offset_y + 30);
            assert_eq!((hit.width, hit.height), (selection.width, selection.height));
        }
    }

    #[test]
    fn contains_is_half_open() {
        let bounds = SelectionBounds { offset_x: 2, offset_y: 3, width: 2, height: 1 };
        assert!(bounds.contains(2, 3));
        assert!(bounds.contains(3, 3));
        assert!(!bounds.contains(4, 3));
        assert!(!bounds.contains(2, 4));
    }
}
