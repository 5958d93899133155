//! Object placement routines.
//!
//! Every routine receives a [`DrawContext`] anchored at the object's tile
//! position and writes tiles through a [`TileCanvas`]. The same function
//! draws into a real layer or into a scratch buffer when the geometry
//! engine measures it.

mod corner;
mod diagonal;
mod downwards;
mod fixtures;
pub mod registry;
mod rightwards;
mod special;

use crate::room_object::RoomObject;
use crate::state::GameState;
use crate::tile::TileDescriptor;

pub use registry::RoutineRegistry;
pub use special::somaria_direction;

pub type RoutineId = u16;

pub type RoutineFn = fn(&mut DrawContext<'_>);

/// Anything a routine can place tiles on.
pub trait TileCanvas {
    /// Writes outside the canvas are dropped.
    fn put_tile(&mut self, x: i32, y: i32, tile: TileDescriptor);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineCategory {
    Rightwards,
    Downwards,
    Diagonal,
    Corner,
    SuperSquare,
    Special,
    Fixture,
}

#[derive(Clone, Copy)]
pub struct RoutineInfo {
    pub id: RoutineId,
    pub name: &'static str,
    pub category: RoutineCategory,
    pub function: RoutineFn,
    /// Replayed once on BG1 and once on BG2.
    pub draws_to_both_bgs: bool,
    /// Drawn on BG2 it punches a transparent hole into BG1.
    pub masks_bg1: bool,
    /// Footprint of one repeat, 0 when it depends on the size byte.
    pub base_width: u8,
    pub base_height: u8,
}

impl std::fmt::Debug for RoutineInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutineInfo")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("draws_to_both_bgs", &self.draws_to_both_bgs)
            .finish_non_exhaustive()
    }
}

/// Everything a routine needs for one invocation.
pub struct DrawContext<'a> {
    pub canvas: &'a mut dyn TileCanvas,
    pub object: &'a RoomObject,
    pub tiles: &'a [TileDescriptor],
    pub state: Option<&'a dyn GameState>,
    pub room_id: u16,
    pub chest_index: usize,
}

impl DrawContext<'_> {
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.object.size
    }

    #[must_use]
    pub const fn has_tiles(&self, count: usize) -> bool {
        self.tiles.len() >= count
    }

    /// Tile `index` of the payload, a blank tile past the end.
    #[must_use]
    pub fn tile(&self, index: usize) -> TileDescriptor {
        self.tiles.get(index).copied().unwrap_or_default()
    }

    /// Writes at an offset from the object's anchor.
    pub fn put(&mut self, dx: i32, dy: i32, tile: TileDescriptor) {
        let (x, y) = (i32::from(self.object.x) + dx, i32::from(self.object.y) + dy);
        self.canvas.put_tile(x, y, tile);
    }

    /// `width` x `height` block whose payload runs top to bottom, then left
    /// to right, starting at tile `first`.
    pub fn block_column_major(&mut self, dx: i32, dy: i32, width: i32, height: i32, first: usize) {
        let mut index = first;
        for x in 0..width {
            for y in 0..height {
                let tile = self.tile(index);
                self.put(dx + x, dy + y, tile);
                index += 1;
            }
        }
    }

    /// `width` x `height` block whose payload runs left to right, then top
    /// to bottom, starting at tile `first`.
    pub fn block_row_major(&mut self, dx: i32, dy: i32, width: i32, height: i32, first: usize) {
        let mut index = first;
        for y in 0..height {
            for x in 0..width {
                let tile = self.tile(index);
                self.put(dx + x, dy + y, tile);
                index += 1;
            }
        }
    }

    /// Repeats the column-major block made of the first `width * height`
    /// tiles `count` times, each copy `step` tiles after the previous one.
    pub fn repeat_block(&mut self, count: i32, step: (i32, i32), width: i32, height: i32) {
        for s in 0..count {
            self.block_column_major(s * step.0, s * step.1, width, height, 0);
        }
    }

    /// Fills a rectangle with one tile.
    pub fn fill(&mut self, dx: i32, dy: i32, width: i32, height: i32, tile: TileDescriptor) {
        for y in 0..height {
            for x in 0..width {
                self.put(dx + x, dy + y, tile);
            }
        }
    }
}

/// Repeat count driven by the whole size byte, where 0 stands for `zero`.
#[must_use]
pub fn count_or(size: u8, zero: i32) -> i32 {
    if size == 0 { zero } else { i32::from(size) }
}

/// Repeat count taken from the low nibble: 1 to 16.
#[must_use]
pub fn count_1to16(size: u8) -> i32 {
    i32::from(size & 0x0F) + 1
}

/// Routine ids, named after the placement they perform.
pub mod ids {
    use super::RoutineId;

    pub const RIGHTWARDS_2X2_1TO15_OR_32: RoutineId = 0;
    pub const RIGHTWARDS_2X4_1TO15_OR_26: RoutineId = 1;
    pub const RIGHTWARDS_2X4_1TO16: RoutineId = 2;
    pub const RIGHTWARDS_2X4_1TO16_BOTH_BG: RoutineId = 3;
    pub const RIGHTWARDS_2X2_1TO16: RoutineId = 4;
    pub const DIAGONAL_ACUTE_1TO16: RoutineId = 5;
    pub const DIAGONAL_GRAVE_1TO16: RoutineId = 6;
    pub const DOWNWARDS_2X2_1TO15_OR_32: RoutineId = 7;
    pub const DOWNWARDS_4X2_1TO15_OR_26: RoutineId = 8;
    pub const DOWNWARDS_4X2_1TO16_BOTH_BG: RoutineId = 9;
    pub const DOWNWARDS_DECOR_4X2_SPACED4: RoutineId = 10;
    pub const DOWNWARDS_2X2_1TO16: RoutineId = 11;
    pub const DOWNWARDS_HAS_EDGE_1X1_PLUS3: RoutineId = 12;
    pub const DOWNWARDS_EDGE_1X1: RoutineId = 13;
    pub const DOWNWARDS_LEFT_CORNERS_2X1_PLUS12: RoutineId = 14;
    pub const DOWNWARDS_RIGHT_CORNERS_2X1_PLUS12: RoutineId = 15;
    pub const RIGHTWARDS_4X4_1TO16: RoutineId = 16;
    pub const DIAGONAL_ACUTE_BOTH_BG: RoutineId = 17;
    pub const DIAGONAL_GRAVE_BOTH_BG: RoutineId = 18;
    pub const RIGHTWARDS_1X2_PLUS2: RoutineId = 20;
    pub const RIGHTWARDS_HAS_EDGE_1X1_PLUS3: RoutineId = 21;
    pub const RIGHTWARDS_HAS_EDGE_1X1_PLUS2: RoutineId = 22;
    pub const RIGHTWARDS_TOP_CORNERS_1X2_PLUS13: RoutineId = 23;
    pub const RIGHTWARDS_BOTTOM_CORNERS_1X2_PLUS13: RoutineId = 24;
    pub const RIGHTWARDS_1X1_SOLID_PLUS3: RoutineId = 25;
    pub const DOOR_SWITCHER: RoutineId = 26;
    pub const RIGHTWARDS_DECOR_4X4_SPACED2: RoutineId = 27;
    pub const RIGHTWARDS_STATUE_2X3_SPACED2: RoutineId = 28;
    pub const RIGHTWARDS_PILLAR_2X4_SPACED4: RoutineId = 29;
    pub const RIGHTWARDS_DECOR_4X3_SPACED4: RoutineId = 30;
    pub const RIGHTWARDS_DOUBLED_2X2_SPACED2: RoutineId = 31;
    pub const RIGHTWARDS_DECOR_2X2_SPACED12: RoutineId = 32;
    pub const SOMARIA_LINE: RoutineId = 33;
    pub const WATER_FACE: RoutineId = 34;
    pub const CORNER_4X4_BOTH_BG: RoutineId = 35;
    pub const WEIRD_CORNER_BOTTOM_BOTH_BG: RoutineId = 36;
    pub const WEIRD_CORNER_TOP_BOTH_BG: RoutineId = 37;
    pub const NOTHING: RoutineId = 38;
    pub const CHEST: RoutineId = 39;
    pub const RIGHTWARDS_4X2_1TO16: RoutineId = 40;
    pub const RIGHTWARDS_DECOR_4X2_SPACED8: RoutineId = 41;
    pub const RIGHTWARDS_CANNON_HOLE_4X3: RoutineId = 42;
    pub const DOWNWARDS_FLOOR_4X4: RoutineId = 43;
    pub const DOWNWARDS_1X1_SOLID_PLUS3: RoutineId = 44;
    pub const DOWNWARDS_DECOR_4X4_SPACED2: RoutineId = 45;
    pub const DOWNWARDS_PILLAR_2X4_SPACED2: RoutineId = 46;
    pub const DOWNWARDS_DECOR_3X4_SPACED4: RoutineId = 47;
    pub const DOWNWARDS_DECOR_2X2_SPACED12: RoutineId = 48;
    pub const DOWNWARDS_LINE_1X1_PLUS1: RoutineId = 49;
    pub const DOWNWARDS_DECOR_2X4_SPACED8: RoutineId = 50;
    pub const RIGHTWARDS_LINE_1X1_PLUS1: RoutineId = 51;
    pub const RIGHTWARDS_BAR_4X3: RoutineId = 52;
    pub const RIGHTWARDS_SHELF_4X4: RoutineId = 53;
    pub const RIGHTWARDS_BIG_RAIL_1X3_PLUS5: RoutineId = 54;
    pub const RIGHTWARDS_BLOCK_2X2_SPACED2: RoutineId = 55;
    pub const BLOCKS_4X4_IN_SUPER_SQUARE: RoutineId = 56;
    pub const FLOOR_3X3_IN_SUPER_SQUARE: RoutineId = 57;
    pub const FLOOR_4X4_IN_SUPER_SQUARE: RoutineId = 58;
    pub const FLOOR_4X4_ONE_IN_SUPER_SQUARE: RoutineId = 59;
    pub const FLOOR_4X4_TWO_IN_SUPER_SQUARE: RoutineId = 60;
    pub const BIG_HOLE_4X4: RoutineId = 61;
    pub const SPIKE_2X2_IN_SUPER_SQUARE: RoutineId = 62;
    pub const TABLE_ROCK_4X4: RoutineId = 63;
    pub const WATER_OVERLAY_8X8: RoutineId = 64;
    pub const DOWNWARDS_DECOR_3X4_SPACED2: RoutineId = 65;
    pub const DOWNWARDS_BIG_RAIL_3X1_PLUS5: RoutineId = 66;
    pub const DOWNWARDS_BLOCK_2X2_SPACED2: RoutineId = 67;
    pub const DOWNWARDS_CANNON_HOLE_3X6: RoutineId = 68;
    pub const DOWNWARDS_BAR_2X3: RoutineId = 69;
    pub const DOWNWARDS_POTS_2X2: RoutineId = 70;
    pub const DOWNWARDS_HAMMER_PEGS_2X2: RoutineId = 71;
    pub const RIGHTWARDS_EDGE_1X1_PLUS7: RoutineId = 72;
    pub const RIGHTWARDS_POTS_2X2: RoutineId = 73;
    pub const RIGHTWARDS_HAMMER_PEGS_2X2: RoutineId = 74;
    pub const DIAGONAL_CEILING_TOP_LEFT: RoutineId = 75;
    pub const DIAGONAL_CEILING_BOTTOM_LEFT: RoutineId = 76;
    pub const DIAGONAL_CEILING_TOP_RIGHT: RoutineId = 77;
    pub const DIAGONAL_CEILING_BOTTOM_RIGHT: RoutineId = 78;
    pub const CLOSED_CHEST_PLATFORM: RoutineId = 79;
    pub const MOVING_WALL_WEST: RoutineId = 80;
    pub const MOVING_WALL_EAST: RoutineId = 81;
    pub const OPEN_CHEST_PLATFORM: RoutineId = 82;
    pub const INTER_ROOM_FAT_STAIRS_UP: RoutineId = 83;
    pub const INTER_ROOM_FAT_STAIRS_DOWN_A: RoutineId = 84;
    pub const INTER_ROOM_FAT_STAIRS_DOWN_B: RoutineId = 85;
    pub const AUTO_STAIRS: RoutineId = 86;
    pub const STRAIGHT_INTER_ROOM_STAIRS: RoutineId = 87;
    pub const SPIRAL_STAIRS_GOING_UP_UPPER: RoutineId = 88;
    pub const SPIRAL_STAIRS_GOING_DOWN_UPPER: RoutineId = 89;
    pub const SPIRAL_STAIRS_GOING_UP_LOWER: RoutineId = 90;
    pub const SPIRAL_STAIRS_GOING_DOWN_LOWER: RoutineId = 91;
    pub const BIG_KEY_LOCK: RoutineId = 92;
    pub const BOMBABLE_FLOOR: RoutineId = 93;
    pub const EMPTY_WATER_FACE: RoutineId = 94;
    pub const SPITTING_WATER_FACE: RoutineId = 95;
    pub const DRENCHING_WATER_FACE: RoutineId = 96;
    pub const PRISON_CELL: RoutineId = 97;
    pub const BED_4X5: RoutineId = 98;
    pub const RIGHTWARDS_3X6: RoutineId = 99;
    pub const UTILITY_6X3: RoutineId = 100;
    pub const UTILITY_3X5: RoutineId = 101;
    pub const VERTICAL_TURTLE_ROCK_PIPE: RoutineId = 102;
    pub const HORIZONTAL_TURTLE_ROCK_PIPE: RoutineId = 103;
    pub const LIGHT_BEAM: RoutineId = 104;
    pub const BIG_LIGHT_BEAM: RoutineId = 105;
    pub const BOSS_SHELL_4X4: RoutineId = 106;
    pub const SOLID_WALL_DECOR_3X4: RoutineId = 107;
    pub const ARCHERY_GAME_TARGET_DOOR: RoutineId = 108;
    pub const GANON_TRIFORCE_FLOOR_DECOR: RoutineId = 109;
    pub const SINGLE_2X2: RoutineId = 110;
    pub const WATERFALL_47: RoutineId = 111;
    pub const WATERFALL_48: RoutineId = 112;
    pub const SINGLE_4X4: RoutineId = 113;
    pub const SINGLE_4X3: RoutineId = 114;
    pub const RUPEE_FLOOR: RoutineId = 115;
    pub const ACTUAL_4X4: RoutineId = 116;
    pub const DOWNWARDS_HAS_EDGE_1X1_PLUS23: RoutineId = 117;
    pub const RIGHTWARDS_HAS_EDGE_1X1_PLUS23: RoutineId = 118;
    pub const CUSTOM_OBJECT: RoutineId = 130;
}
