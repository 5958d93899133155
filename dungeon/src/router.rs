//! Object id to routine id resolution.
//!
//! The drawer and the geometry engine both go through [`ObjectRouter`], so a
//! measured footprint always belongs to the routine that paints it.

use std::ops::RangeInclusive;

use crate::config::RenderConfig;
use crate::room_object::ObjectSubtype;
use crate::routines::ids::*;
use crate::routines::{RoutineId, RoutineInfo, RoutineRegistry};

const SUBTYPE_1_BASE: u16 = 0x000;
const SUBTYPE_2_BASE: u16 = 0x100;
const SUBTYPE_3_BASE: u16 = 0xF80;

/// One independent id to routine table per object subtype.
#[derive(Debug, Clone)]
pub struct ObjectRouter {
    subtype1: [RoutineId; 0x100],
    subtype2: [RoutineId; 0x40],
    subtype3: [RoutineId; 0x80],
}

/// Fills `table[ids - base]` with `routine`.
fn set(table: &mut [RoutineId], base: u16, ids: RangeInclusive<u16>, routine: RoutineId) {
    for id in ids {
        table[usize::from(id - base)] = routine;
    }
}

impl ObjectRouter {
    #[allow(clippy::too_many_lines)]
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        let mut router = Self {
            subtype1: [NOTHING; 0x100],
            subtype2: [NOTHING; 0x40],
            subtype3: [NOTHING; 0x80],
        };

        let t1 = &mut router.subtype1;
        let mut one = |ids: RangeInclusive<u16>, routine| set(t1, SUBTYPE_1_BASE, ids, routine);
        one(0x00..=0x00, RIGHTWARDS_2X2_1TO15_OR_32);
        one(0x01..=0x02, RIGHTWARDS_2X4_1TO15_OR_26);
        one(0x03..=0x04, RIGHTWARDS_2X4_1TO16);
        one(0x05..=0x06, RIGHTWARDS_2X4_1TO16_BOTH_BG);
        one(0x07..=0x08, RIGHTWARDS_2X2_1TO16);
        one(0x09..=0x09, DIAGONAL_ACUTE_1TO16);
        one(0x0A..=0x0B, DIAGONAL_GRAVE_1TO16);
        for id in [0x0C, 0x0D, 0x10, 0x11, 0x14] {
            one(id..=id, DIAGONAL_ACUTE_1TO16);
        }
        for id in [0x0E, 0x0F, 0x12, 0x13] {
            one(id..=id, DIAGONAL_GRAVE_1TO16);
        }
        for id in [0x15, 0x18, 0x19, 0x1C, 0x1D, 0x20] {
            one(id..=id, DIAGONAL_ACUTE_BOTH_BG);
        }
        for id in [0x16, 0x17, 0x1A, 0x1B, 0x1E, 0x1F] {
            one(id..=id, DIAGONAL_GRAVE_BOTH_BG);
        }
        one(0x21..=0x21, RIGHTWARDS_1X2_PLUS2);
        one(0x22..=0x22, RIGHTWARDS_HAS_EDGE_1X1_PLUS3);
        one(0x23..=0x2E, RIGHTWARDS_HAS_EDGE_1X1_PLUS2);
        one(0x2F..=0x2F, RIGHTWARDS_TOP_CORNERS_1X2_PLUS13);
        one(0x30..=0x30, RIGHTWARDS_BOTTOM_CORNERS_1X2_PLUS13);
        let custom = if config.enable_custom_objects {
            CUSTOM_OBJECT
        } else {
            NOTHING
        };
        one(0x31..=0x32, custom);
        one(0x33..=0x33, RIGHTWARDS_4X4_1TO16);
        one(0x34..=0x34, RIGHTWARDS_1X1_SOLID_PLUS3);
        one(0x35..=0x35, DOOR_SWITCHER);
        one(0x36..=0x37, RIGHTWARDS_DECOR_4X4_SPACED2);
        one(0x38..=0x38, RIGHTWARDS_STATUE_2X3_SPACED2);
        one(0x39..=0x39, RIGHTWARDS_PILLAR_2X4_SPACED4);
        one(0x3A..=0x3B, RIGHTWARDS_DECOR_4X3_SPACED4);
        one(0x3C..=0x3C, RIGHTWARDS_DOUBLED_2X2_SPACED2);
        one(0x3D..=0x3D, RIGHTWARDS_PILLAR_2X4_SPACED4);
        one(0x3E..=0x3E, RIGHTWARDS_DECOR_2X2_SPACED12);
        one(0x3F..=0x46, RIGHTWARDS_HAS_EDGE_1X1_PLUS2);
        one(0x47..=0x47, WATERFALL_47);
        one(0x48..=0x48, WATERFALL_48);
        one(0x49..=0x4A, RIGHTWARDS_4X2_1TO16);
        one(0x4B..=0x4B, RIGHTWARDS_DECOR_2X2_SPACED12);
        one(0x4C..=0x4C, RIGHTWARDS_BAR_4X3);
        one(0x4D..=0x4F, RIGHTWARDS_SHELF_4X4);
        one(0x50..=0x50, RIGHTWARDS_LINE_1X1_PLUS1);
        one(0x51..=0x52, RIGHTWARDS_CANNON_HOLE_4X3);
        one(0x53..=0x53, RIGHTWARDS_2X2_1TO16);
        one(0x55..=0x56, RIGHTWARDS_DECOR_4X2_SPACED8);
        one(0x5B..=0x5C, RIGHTWARDS_CANNON_HOLE_4X3);
        one(0x5D..=0x5D, RIGHTWARDS_BIG_RAIL_1X3_PLUS5);
        one(0x5E..=0x5E, RIGHTWARDS_BLOCK_2X2_SPACED2);
        one(0x5F..=0x5F, RIGHTWARDS_HAS_EDGE_1X1_PLUS23);

        one(0x60..=0x60, DOWNWARDS_2X2_1TO15_OR_32);
        one(0x61..=0x62, DOWNWARDS_4X2_1TO15_OR_26);
        one(0x63..=0x64, DOWNWARDS_4X2_1TO16_BOTH_BG);
        one(0x65..=0x66, DOWNWARDS_DECOR_4X2_SPACED4);
        one(0x67..=0x68, DOWNWARDS_2X2_1TO16);
        one(0x69..=0x69, DOWNWARDS_HAS_EDGE_1X1_PLUS3);
        one(0x6A..=0x6B, DOWNWARDS_EDGE_1X1);
        one(0x6C..=0x6C, DOWNWARDS_LEFT_CORNERS_2X1_PLUS12);
        one(0x6D..=0x6D, DOWNWARDS_RIGHT_CORNERS_2X1_PLUS12);
        one(0x70..=0x70, DOWNWARDS_FLOOR_4X4);
        one(0x71..=0x71, DOWNWARDS_1X1_SOLID_PLUS3);
        one(0x73..=0x74, DOWNWARDS_DECOR_4X4_SPACED2);
        one(0x75..=0x75, DOWNWARDS_PILLAR_2X4_SPACED2);
        one(0x76..=0x77, DOWNWARDS_DECOR_3X4_SPACED4);
        one(0x78..=0x78, DOWNWARDS_DECOR_2X2_SPACED12);
        one(0x79..=0x7A, DOWNWARDS_EDGE_1X1);
        one(0x7B..=0x7B, DOWNWARDS_DECOR_2X2_SPACED12);
        one(0x7C..=0x7C, DOWNWARDS_LINE_1X1_PLUS1);
        one(0x7D..=0x7D, DOWNWARDS_2X2_1TO16);
        one(0x7F..=0x80, DOWNWARDS_DECOR_2X4_SPACED8);
        one(0x81..=0x84, DOWNWARDS_DECOR_3X4_SPACED2);
        one(0x85..=0x86, DOWNWARDS_CANNON_HOLE_3X6);
        one(0x87..=0x87, DOWNWARDS_PILLAR_2X4_SPACED2);
        one(0x88..=0x88, DOWNWARDS_BIG_RAIL_3X1_PLUS5);
        one(0x89..=0x89, DOWNWARDS_BLOCK_2X2_SPACED2);
        one(0x8A..=0x8C, DOWNWARDS_HAS_EDGE_1X1_PLUS23);
        one(0x8D..=0x8E, DOWNWARDS_EDGE_1X1);
        one(0x8F..=0x8F, DOWNWARDS_BAR_2X3);
        one(0x90..=0x91, DOWNWARDS_4X2_1TO15_OR_26);
        one(0x92..=0x93, DOWNWARDS_2X2_1TO15_OR_32);
        one(0x94..=0x94, DOWNWARDS_FLOOR_4X4);
        one(0x95..=0x95, DOWNWARDS_POTS_2X2);
        one(0x96..=0x96, DOWNWARDS_HAMMER_PEGS_2X2);

        for id in [0xA0, 0xA5, 0xA9] {
            one(id..=id, DIAGONAL_CEILING_TOP_LEFT);
        }
        for id in [0xA1, 0xA6, 0xAA] {
            one(id..=id, DIAGONAL_CEILING_BOTTOM_LEFT);
        }
        for id in [0xA2, 0xA7, 0xAB] {
            one(id..=id, DIAGONAL_CEILING_TOP_RIGHT);
        }
        for id in [0xA3, 0xA8, 0xAC] {
            one(id..=id, DIAGONAL_CEILING_BOTTOM_RIGHT);
        }
        one(0xA4..=0xA4, BIG_HOLE_4X4);

        one(0xB0..=0xB1, RIGHTWARDS_EDGE_1X1_PLUS7);
        one(0xB2..=0xB2, RIGHTWARDS_4X4_1TO16);
        one(0xB3..=0xB4, RIGHTWARDS_HAS_EDGE_1X1_PLUS2);
        one(0xB5..=0xB5, DOWNWARDS_4X2_1TO15_OR_26);
        one(0xB6..=0xB7, RIGHTWARDS_2X4_1TO15_OR_26);
        one(0xB8..=0xB9, RIGHTWARDS_2X2_1TO15_OR_32);
        one(0xBA..=0xBA, RIGHTWARDS_4X4_1TO16);
        one(0xBB..=0xBB, RIGHTWARDS_BLOCK_2X2_SPACED2);
        one(0xBC..=0xBC, RIGHTWARDS_POTS_2X2);
        one(0xBD..=0xBD, RIGHTWARDS_HAMMER_PEGS_2X2);

        one(0xC0..=0xC0, BLOCKS_4X4_IN_SUPER_SQUARE);
        one(0xC1..=0xC1, CLOSED_CHEST_PLATFORM);
        one(0xC2..=0xC2, BLOCKS_4X4_IN_SUPER_SQUARE);
        one(0xC3..=0xC3, FLOOR_3X3_IN_SUPER_SQUARE);
        one(0xC4..=0xC4, FLOOR_4X4_ONE_IN_SUPER_SQUARE);
        one(0xC5..=0xCA, FLOOR_4X4_IN_SUPER_SQUARE);
        one(0xCD..=0xCD, MOVING_WALL_WEST);
        one(0xCE..=0xCE, MOVING_WALL_EAST);
        one(0xD1..=0xD2, FLOOR_4X4_IN_SUPER_SQUARE);
        one(0xD7..=0xD7, FLOOR_3X3_IN_SUPER_SQUARE);
        one(0xD8..=0xD8, WATER_OVERLAY_8X8);
        one(0xD9..=0xD9, FLOOR_4X4_IN_SUPER_SQUARE);
        one(0xDA..=0xDA, WATER_OVERLAY_8X8);
        one(0xDB..=0xDB, FLOOR_4X4_TWO_IN_SUPER_SQUARE);
        one(0xDC..=0xDC, OPEN_CHEST_PLATFORM);
        one(0xDD..=0xDD, TABLE_ROCK_4X4);
        one(0xDE..=0xDE, SPIKE_2X2_IN_SUPER_SQUARE);
        one(0xDF..=0xE8, FLOOR_4X4_IN_SUPER_SQUARE);
        one(0xF9..=0xFD, CHEST);

        let t2 = &mut router.subtype2;
        let mut two = |ids: RangeInclusive<u16>, routine| set(t2, SUBTYPE_2_BASE, ids, routine);
        two(0x100..=0x107, RIGHTWARDS_4X4_1TO16);
        two(0x108..=0x10F, CORNER_4X4_BOTH_BG);
        two(0x110..=0x113, WEIRD_CORNER_BOTTOM_BOTH_BG);
        two(0x114..=0x117, WEIRD_CORNER_TOP_BOTH_BG);
        two(0x118..=0x11B, RIGHTWARDS_2X2_1TO16);
        two(0x11C..=0x11C, RIGHTWARDS_4X4_1TO16);
        two(0x11D..=0x11D, RIGHTWARDS_STATUE_2X3_SPACED2);
        two(0x11E..=0x11E, RIGHTWARDS_2X2_1TO16);
        two(0x11F..=0x120, RIGHTWARDS_1X1_SOLID_PLUS3);
        two(0x121..=0x121, RIGHTWARDS_STATUE_2X3_SPACED2);
        two(0x122..=0x122, BED_4X5);
        two(0x123..=0x123, RIGHTWARDS_DECOR_4X3_SPACED4);
        two(0x124..=0x125, RIGHTWARDS_4X4_1TO16);
        two(0x126..=0x126, RIGHTWARDS_STATUE_2X3_SPACED2);
        two(0x127..=0x127, RIGHTWARDS_2X2_1TO16);
        two(0x128..=0x128, BED_4X5);
        two(0x129..=0x129, RIGHTWARDS_4X4_1TO16);
        two(0x12A..=0x12B, RIGHTWARDS_2X2_1TO16);
        two(0x12C..=0x12C, RIGHTWARDS_3X6);
        two(0x12D..=0x12D, INTER_ROOM_FAT_STAIRS_UP);
        two(0x12E..=0x12E, INTER_ROOM_FAT_STAIRS_DOWN_A);
        two(0x12F..=0x12F, INTER_ROOM_FAT_STAIRS_DOWN_B);
        two(0x130..=0x133, AUTO_STAIRS);
        two(0x134..=0x134, RIGHTWARDS_2X2_1TO16);
        two(0x135..=0x137, RIGHTWARDS_4X4_1TO16);
        two(0x138..=0x138, SPIRAL_STAIRS_GOING_UP_UPPER);
        two(0x139..=0x139, SPIRAL_STAIRS_GOING_DOWN_UPPER);
        two(0x13A..=0x13A, SPIRAL_STAIRS_GOING_UP_LOWER);
        two(0x13B..=0x13B, SPIRAL_STAIRS_GOING_DOWN_LOWER);
        two(0x13C..=0x13C, RIGHTWARDS_4X4_1TO16);
        two(0x13D..=0x13D, RIGHTWARDS_DECOR_4X3_SPACED4);
        two(0x13E..=0x13E, UTILITY_6X3);
        two(0x13F..=0x13F, RIGHTWARDS_4X4_1TO16);

        let t3 = &mut router.subtype3;
        let mut three = |ids: RangeInclusive<u16>, routine| set(t3, SUBTYPE_3_BASE, ids, routine);
        three(0xF80..=0xF80, EMPTY_WATER_FACE);
        three(0xF81..=0xF81, SPITTING_WATER_FACE);
        three(0xF82..=0xF82, DRENCHING_WATER_FACE);
        three(0xF83..=0xF8C, SOMARIA_LINE);
        three(0xF8D..=0xF8D, PRISON_CELL);
        three(0xF8E..=0xF8F, SOMARIA_LINE);
        three(0xF90..=0xF91, SINGLE_2X2);
        three(0xF92..=0xF92, RUPEE_FLOOR);
        three(0xF93..=0xF93, SINGLE_2X2);
        three(0xF94..=0xF94, RIGHTWARDS_DECOR_4X3_SPACED4);
        three(0xF95..=0xF95, BOSS_SHELL_4X4);
        three(0xF96..=0xF96, RIGHTWARDS_1X1_SOLID_PLUS3);
        three(0xF97..=0xF97, PRISON_CELL);
        three(0xF98..=0xF98, BIG_KEY_LOCK);
        three(0xF99..=0xF9A, CHEST);
        three(0xF9B..=0xF9D, AUTO_STAIRS);
        three(0xF9E..=0xFA1, STRAIGHT_INTER_ROOM_STAIRS);
        three(0xFA2..=0xFA5, SINGLE_2X2);
        three(0xFA6..=0xFA9, STRAIGHT_INTER_ROOM_STAIRS);
        three(0xFAA..=0xFAA, RIGHTWARDS_4X4_1TO16);
        three(0xFAB..=0xFAC, SINGLE_2X2);
        three(0xFAD..=0xFAE, RIGHTWARDS_4X4_1TO16);
        three(0xFAF..=0xFB0, SINGLE_2X2);
        three(0xFB1..=0xFB2, SINGLE_4X3);
        three(0xFB3..=0xFB3, AUTO_STAIRS);
        three(0xFB4..=0xFB9, RIGHTWARDS_4X4_1TO16);
        three(0xFBA..=0xFBB, VERTICAL_TURTLE_ROCK_PIPE);
        three(0xFBC..=0xFBD, HORIZONTAL_TURTLE_ROCK_PIPE);
        three(0xFBE..=0xFC6, SINGLE_2X2);
        three(0xFC7..=0xFC7, BOMBABLE_FLOOR);
        three(0xFC8..=0xFC8, RIGHTWARDS_4X4_1TO16);
        three(0xFC9..=0xFCA, SINGLE_2X2);
        three(0xFCB..=0xFCC, RIGHTWARDS_4X4_1TO16);
        three(0xFCD..=0xFCD, UTILITY_6X3);
        three(0xFCE..=0xFCE, RIGHTWARDS_DECOR_4X3_SPACED4);
        three(0xFCF..=0xFD3, SINGLE_2X2);
        three(0xFD4..=0xFD4, RIGHTWARDS_4X4_1TO16);
        three(0xFD5..=0xFD5, UTILITY_3X5);
        three(0xFD6..=0xFDA, SINGLE_2X2);
        three(0xFDB..=0xFDB, UTILITY_3X5);
        three(0xFDC..=0xFDC, HORIZONTAL_TURTLE_ROCK_PIPE);
        three(0xFDD..=0xFDD, UTILITY_6X3);
        three(0xFDE..=0xFDF, SINGLE_2X2);
        three(0xFE0..=0xFE1, ARCHERY_GAME_TARGET_DOOR);
        three(0xFE2..=0xFE2, RIGHTWARDS_4X4_1TO16);
        three(0xFE3..=0xFE5, SINGLE_2X2);
        three(0xFE6..=0xFE6, ACTUAL_4X4);
        three(0xFE7..=0xFE8, RIGHTWARDS_DECOR_4X3_SPACED4);
        three(0xFE9..=0xFEA, SOLID_WALL_DECOR_3X4);
        three(0xFEB..=0xFEB, SINGLE_4X4);
        three(0xFEC..=0xFED, SINGLE_4X3);
        three(0xFEE..=0xFEF, SOLID_WALL_DECOR_3X4);
        three(0xFF0..=0xFF0, LIGHT_BEAM);
        three(0xFF1..=0xFF1, BIG_LIGHT_BEAM);
        three(0xFF2..=0xFF2, BOSS_SHELL_4X4);
        three(0xFF4..=0xFF4, RIGHTWARDS_4X4_1TO16);
        three(0xFF5..=0xFF5, SINGLE_2X2);
        three(0xFF6..=0xFF7, RIGHTWARDS_4X4_1TO16);
        three(0xFF8..=0xFF8, GANON_TRIFORCE_FLOOR_DECOR);
        three(0xFF9..=0xFF9, RIGHTWARDS_DECOR_4X3_SPACED4);
        three(0xFFA..=0xFFA, RIGHTWARDS_4X4_1TO16);
        three(0xFFB..=0xFFB, BOSS_SHELL_4X4);
        three(0xFFC..=0xFFE, SINGLE_2X2);

        router
    }

    /// Routine drawing `object_id`; [`NOTHING`] outside the three subtype
    /// ranges.
    #[must_use]
    pub fn resolve(&self, object_id: u16) -> RoutineId {
        let routine = match ObjectSubtype::of(object_id) {
            Some(ObjectSubtype::One) => self.subtype1[usize::from(object_id - SUBTYPE_1_BASE)],
            Some(ObjectSubtype::Two) => self.subtype2[usize::from(object_id - SUBTYPE_2_BASE)],
            Some(ObjectSubtype::Three) => self.subtype3[usize::from(object_id - SUBTYPE_3_BASE)],
            None => NOTHING,
        };
        tracing::trace!("object 0x{object_id:03X} -> routine {routine}");
        routine
    }
}

/// The routine registry and the router, built together from one config.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub registry: RoutineRegistry,
    pub router: ObjectRouter,
}

impl Catalog {
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            registry: RoutineRegistry::new(),
            router: ObjectRouter::new(config),
        }
    }

    /// Registry entry for `object_id`, `None` when it draws nothing.
    #[must_use]
    pub fn routine_for(&self, object_id: u16) -> Option<&RoutineInfo> {
        match self.router.resolve(object_id) {
            NOTHING => None,
            routine => self.registry.get(routine),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}
