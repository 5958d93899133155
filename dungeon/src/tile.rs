//! Tile words, the packed graphics sheet and palettes.
//!
//! A tile word packs one 8x8 map entry:
//!
//! | Bits   | Field                     |
//! |--------|---------------------------|
//! | 0-9    | Tile index into the sheet |
//! | 10-12  | Palette                   |
//! | 13     | Priority                  |
//! | 14     | Horizontal mirror         |
//! | 15     | Vertical mirror           |

use serde::{Deserialize, Serialize};

use crate::bitwise::Bits;

/// Tile word marking an empty map cell.
pub const EMPTY_TILE_WORD: u16 = 0xFFFF;

/// Pixel value of a transparent or unwritten pixel.
pub const TRANSPARENT_PIXEL: u8 = 255;

/// Colours per palette in the bitmap index space.
pub const COLORS_PER_PALETTE: u8 = 8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub id: u16,
    pub palette: u8,
    pub priority: bool,
    pub h_mirror: bool,
    pub v_mirror: bool,
}

impl TileDescriptor {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self {
            id: id & 0x3FF,
            palette: 0,
            priority: false,
            h_mirror: false,
            v_mirror: false,
        }
    }

    #[must_use]
    pub const fn with_palette(mut self, palette: u8) -> Self {
        self.palette = palette & 0b111;
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub const fn with_mirror(mut self, h_mirror: bool, v_mirror: bool) -> Self {
        self.h_mirror = h_mirror;
        self.v_mirror = v_mirror;
        self
    }

    #[must_use]
    pub fn to_word(self) -> u16 {
        let mut word = 0_u16;
        word.set_bits(0..=9, self.id);
        word.set_bits(10..=12, u16::from(self.palette));
        word.set_bit(13, self.priority);
        word.set_bit(14, self.h_mirror);
        word.set_bit(15, self.v_mirror);
        word
    }
}

impl From<u16> for TileDescriptor {
    #[allow(clippy::cast_possible_truncation)]
    fn from(word: u16) -> Self {
        Self {
            id: word.get_bits(0..=9),
            palette: word.get_bits(10..=12) as u8,
            priority: word.get_bit(13),
            h_mirror: word.get_bit(14),
            v_mirror: word.get_bit(15),
        }
    }
}

impl From<TileDescriptor> for u16 {
    fn from(tile: TileDescriptor) -> Self {
        tile.to_word()
    }
}

/// Packed 4bpp graphics sheet.
///
/// Tiles sit 16 to a sheet row: tile `id` starts at
/// `(id / 16) * 512 + (id % 16) * 4`, each of its 8 pixel rows is 4 bytes
/// wide and rows are 64 bytes apart. The high nibble of a byte is the left
/// pixel of the pair.
#[derive(Debug, Clone, Copy)]
pub struct TileSheet<'a> {
    data: &'a [u8],
}

impl<'a> TileSheet<'a> {
    pub const ROW_STRIDE: usize = 64;
    pub const TILE_ROW_BYTES: usize = 512;

    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub const fn tile_base(tile_id: u16) -> usize {
        let id = tile_id as usize;
        (id / 16) * Self::TILE_ROW_BYTES + (id % 16) * 4
    }

    /// Colour nibble of pixel (`px`, `py`) of `tile_id`, before mirroring.
    /// Reads past the end of the sheet are transparent (0).
    #[must_use]
    pub fn nibble(&self, tile_id: u16, px: usize, py: usize) -> u8 {
        let address = Self::tile_base(tile_id) + py * Self::ROW_STRIDE + px / 2;
        self.data.get(address).map_or(0, |byte| {
            if px % 2 == 0 {
                byte.high_nibble()
            } else {
                byte.low_nibble()
            }
        })
    }

    /// Pixel of `tile` at screen offset (`px`, `py`) inside its 8x8 cell,
    /// honoring mirroring. `None` when transparent.
    #[must_use]
    pub fn pixel(&self, tile: TileDescriptor, px: usize, py: usize) -> Option<u8> {
        let sx = if tile.h_mirror { 7 - px } else { px };
        let sy = if tile.v_mirror { 7 - py } else { py };

        match self.nibble(tile.id, sx, sy) {
            0 => None,
            nibble => Some(nibble + tile.palette * COLORS_PER_PALETTE),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<u16> for Color {
    #[allow(clippy::cast_possible_truncation)]
    fn from(color: u16) -> Self {
        // red ---> 0-4 bit
        // green -> 5-9 bit
        // blue --> 10-14 bit
        let scale = |c: u16| ((c << 3) | (c >> 2)) as u8;

        Self {
            red: scale(color.get_bits(0..=4)),
            green: scale(color.get_bits(5..=9)),
            blue: scale(color.get_bits(10..=14)),
        }
    }
}

/// The room's background palettes, handed through to whoever turns the
/// indexed bitmap into colours.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PaletteGroup {
    pub colors: Vec<u16>,
}

impl PaletteGroup {
    #[must_use]
    pub const fn new(colors: Vec<u16>) -> Self {
        Self { colors }
    }

    /// Colour for a bitmap index, `None` for transparent or unknown entries.
    #[must_use]
    pub fn color(&self, index: u8) -> Option<Color> {
        if index == TRANSPARENT_PIXEL {
            return None;
        }

        self.colors.get(usize::from(index)).copied().map(Color::from)
    }
}
