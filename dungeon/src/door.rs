//! Doors: where a door sits on the room's walls, how big it is, and where
//! its tile words live in the ROM.
//!
//! Door records are two bytes: the first packs the position index (high
//! nibble) and the wall (low two bits), the second is the door type.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::rom::Rom;
use crate::tile::TileDescriptor;

/// Tile words per door graphic.
pub const DOOR_TILES: usize = 12;

/// Per-wall tables of offsets into the shared object data, indexed by the
/// (even) door type byte.
pub const DOOR_GFX_NORTH: usize = 0x4D9E;
pub const DOOR_GFX_SOUTH: usize = 0x4E06;
pub const DOOR_GFX_WEST: usize = 0x4E66;
pub const DOOR_GFX_EAST: usize = 0x4EC6;

/// Highest position index with a table entry.
const LAST_POSITION: usize = 11;

const NORTH_X: [i32; 12] = [14, 30, 46, 14, 30, 46, 14, 30, 46, 14, 30, 46];
const NORTH_Y: [i32; 12] = [4, 4, 4, 7, 7, 7, 36, 36, 36, 39, 39, 39];
const SOUTH_X: [i32; 12] = NORTH_X;
const SOUTH_Y: [i32; 12] = [26, 26, 26, 23, 23, 23, 58, 58, 58, 55, 55, 55];
const WEST_X: [i32; 12] = [2, 2, 2, 5, 5, 5, 34, 34, 34, 37, 37, 37];
const WEST_Y: [i32; 12] = [15, 31, 47, 15, 31, 47, 15, 31, 47, 15, 31, 47];
const EAST_X: [i32; 12] = [26, 26, 26, 23, 23, 23, 58, 58, 58, 55, 55, 55];
const EAST_Y: [i32; 12] = WEST_Y;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorDirection {
    #[default]
    North,
    South,
    West,
    East,
}

impl From<u8> for DoorDirection {
    fn from(value: u8) -> Self {
        match value & 0x03 {
            0 => Self::North,
            1 => Self::South,
            2 => Self::West,
            _ => Self::East,
        }
    }
}

impl DoorDirection {
    #[must_use]
    pub const fn is_horizontal_wall(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    const fn gfx_table(self) -> usize {
        match self {
            Self::North => DOOR_GFX_NORTH,
            Self::South => DOOR_GFX_SOUTH,
            Self::West => DOOR_GFX_WEST,
            Self::East => DOOR_GFX_EAST,
        }
    }
}

/// Door type byte as stored in the room's door list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoorType(pub u8);

impl DoorType {
    pub const NORMAL: Self = Self(0x00);
    pub const NORMAL_LOWER: Self = Self(0x02);
    pub const CAVE_EXIT: Self = Self(0x04);
    pub const WATERFALL: Self = Self(0x08);
    pub const FANCY_EXIT: Self = Self(0x0A);
    pub const FANCY_EXIT_LOWER: Self = Self(0x0C);
    pub const EXIT_MARKER: Self = Self(0x12);
    pub const DUNGEON_SWAP_MARKER: Self = Self(0x14);
    pub const LAYER_SWAP_MARKER: Self = Self(0x16);
    pub const DOUBLE_SIDED_SHUTTER: Self = Self(0x18);
    pub const EYE_WATCH: Self = Self(0x1A);
    pub const SMALL_KEY: Self = Self(0x1C);
    pub const BIG_KEY: Self = Self(0x1E);
    pub const SMALL_KEY_STAIRS_UP: Self = Self(0x20);
    pub const SMALL_KEY_STAIRS_DOWN: Self = Self(0x22);
    pub const SMALL_KEY_STAIRS_UP_LOWER: Self = Self(0x24);
    pub const SMALL_KEY_STAIRS_DOWN_LOWER: Self = Self(0x26);
    pub const DASH_WALL: Self = Self(0x28);
    pub const BOMBABLE_CAVE_EXIT: Self = Self(0x2A);
    pub const UNOPENABLE_BIG_KEY: Self = Self(0x2C);
    pub const BOMBABLE: Self = Self(0x2E);
    pub const EXPLODING_WALL: Self = Self(0x30);
    pub const CURTAIN: Self = Self(0x32);
    pub const UNUSABLE_BOTTOM_SHUTTER: Self = Self(0x34);
    pub const BOTTOM_SIDED_SHUTTER: Self = Self(0x36);
    pub const TOP_SIDED_SHUTTER: Self = Self(0x38);
    pub const NORMAL_ONE_SIDED_SHUTTER: Self = Self(0x40);
    pub const UNUSED_DOUBLE_SIDED_SHUTTER: Self = Self(0x42);
    pub const DOUBLE_SIDED_SHUTTER_LOWER: Self = Self(0x44);
    pub const BOTTOM_SHUTTER_LOWER: Self = Self(0x48);
    pub const TOP_SHUTTER_LOWER: Self = Self(0x4A);

    /// Editor markers: they carry room logic but no graphics.
    #[must_use]
    pub const fn is_marker(self) -> bool {
        matches!(self.0, 0x12 | 0x14 | 0x16)
    }

    /// Drawn on the lower layer, showing through BG1.
    #[must_use]
    pub const fn is_lower_layer(self) -> bool {
        matches!(self.0, 0x02 | 0x0C | 0x24 | 0x26 | 0x44 | 0x48 | 0x4A)
    }

    /// Shutters, locks and breakable walls: doors with a closed and an
    /// open look.
    #[must_use]
    pub const fn is_openable(self) -> bool {
        matches!(
            self.0,
            0x18 | 0x1A
                | 0x1C
                | 0x1E
                | 0x20
                | 0x22
                | 0x24
                | 0x26
                | 0x28
                | 0x2A
                | 0x2E
                | 0x30
                | 0x32
                | 0x34
                | 0x36
                | 0x38
                | 0x40
                | 0x42
                | 0x44
                | 0x48
                | 0x4A
        )
    }

    /// Graphic used once the door is open: the plain doorway on its layer.
    #[must_use]
    pub const fn opened(self) -> Self {
        if !self.is_openable() {
            self
        } else if self.is_lower_layer() {
            Self::NORMAL_LOWER
        } else {
            Self::NORMAL
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorDimensions {
    pub width_tiles: i32,
    pub height_tiles: i32,
}

impl DoorDimensions {
    #[must_use]
    pub const fn width_pixels(self) -> i32 {
        self.width_tiles * 8
    }

    #[must_use]
    pub const fn height_pixels(self) -> i32 {
        self.height_tiles * 8
    }
}

/// North and south doors lie across the wall, west and east ones along it.
#[must_use]
pub const fn door_dimensions(direction: DoorDirection) -> DoorDimensions {
    if direction.is_horizontal_wall() {
        DoorDimensions {
            width_tiles: 4,
            height_tiles: 3,
        }
    } else {
        DoorDimensions {
            width_tiles: 3,
            height_tiles: 4,
        }
    }
}

/// Top-left tile of a door. Position indices past the table clamp to the
/// last entry.
#[must_use]
pub fn position_to_tile_coords(position: u8, direction: DoorDirection) -> (i32, i32) {
    let index = usize::from(position & 0x0F).min(LAST_POSITION);
    let (xs, ys) = match direction {
        DoorDirection::North => (&NORTH_X, &NORTH_Y),
        DoorDirection::South => (&SOUTH_X, &SOUTH_Y),
        DoorDirection::West => (&WEST_X, &WEST_Y),
        DoorDirection::East => (&EAST_X, &EAST_Y),
    };
    (xs[index], ys[index])
}

#[must_use]
pub fn position_to_pixel_coords(position: u8, direction: DoorDirection) -> (i32, i32) {
    let (x, y) = position_to_tile_coords(position, direction);
    (x * 8, y * 8)
}

/// Door rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl DoorBounds {
    #[must_use]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

#[must_use]
pub fn door_bounds(position: u8, direction: DoorDirection) -> DoorBounds {
    let (x, y) = position_to_pixel_coords(position, direction);
    let dimensions = door_dimensions(direction);
    DoorBounds {
        x,
        y,
        width: dimensions.width_pixels(),
        height: dimensions.height_pixels(),
    }
}

/// One door of a room.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorDef {
    pub kind: DoorType,
    pub direction: DoorDirection,
    pub position: u8,
}

impl DoorDef {
    #[must_use]
    pub const fn new(kind: DoorType, direction: DoorDirection, position: u8) -> Self {
        Self {
            kind,
            direction,
            position,
        }
    }

    /// Decodes a two-byte door record.
    #[must_use]
    pub fn from_rom_bytes(b1: u8, b2: u8) -> Self {
        Self::new(DoorType(b2), DoorDirection::from(b1), (b1 >> 4) & 0x0F)
    }

    #[must_use]
    pub fn to_rom_bytes(self) -> (u8, u8) {
        let direction = match self.direction {
            DoorDirection::North => 0,
            DoorDirection::South => 1,
            DoorDirection::West => 2,
            DoorDirection::East => 3,
        };
        (((self.position & 0x0F) << 4) | direction, self.kind.0)
    }

    #[must_use]
    pub fn tile_coords(&self) -> (i32, i32) {
        position_to_tile_coords(self.position, self.direction)
    }

    #[must_use]
    pub const fn dimensions(&self) -> DoorDimensions {
        door_dimensions(self.direction)
    }

    #[must_use]
    pub fn bounds(&self) -> DoorBounds {
        door_bounds(self.position, self.direction)
    }

    /// Reads the door's twelve tile words for `kind` through the wall's
    /// offset table.
    pub fn read_tiles(
        &self,
        kind: DoorType,
        rom: &Rom,
        object_data: usize,
    ) -> Result<Vec<TileDescriptor>, RenderError> {
        let offset = rom.read_word(self.direction.gfx_table() + usize::from(kind.0))?;
        let base = object_data + usize::from(offset);
        (0..DOOR_TILES)
            .map(|i| rom.read_word(base + i * 2).map(TileDescriptor::from))
            .collect()
    }
}
