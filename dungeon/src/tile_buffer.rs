//! A background layer: tile map plus the pixel planes derived from it.
//!
//! The tile plane holds one tile word per map cell. Next to it live three
//! pixel planes, all `width * 8` by `height * 8`:
//!
//! | Plane    | Unwritten | Written                                    |
//! |----------|-----------|--------------------------------------------|
//! | pixels   | 255       | colour index, or 255 for a transparent hit |
//! | priority | 0xFF      | tile priority bit, 0xFF when transparent   |
//! | coverage | 0         | 1                                          |
//!
//! Coverage tells "nothing wrote here" apart from "something wrote a
//! transparent pixel here", so a later pass can erase an earlier one.

use std::ops::RangeInclusive;

use crate::error::RenderError;
use crate::rom::Rom;
use crate::routines::TileCanvas;
use crate::tile::{EMPTY_TILE_WORD, TRANSPARENT_PIXEL, TileDescriptor, TileSheet};

/// Tiles per side of a room layer.
pub const MAP_TILES: usize = 64;

/// Pixels per side of a tile.
pub const TILE_PIXELS: usize = 8;

/// Priority plane value for "no tile priority".
pub const NO_PRIORITY: u8 = 0xFF;

/// Animated floor tiles, painted by the floor pass and left alone by
/// `draw_background`.
pub const ANIMATED_FLOOR_TILES: RangeInclusive<u16> = 0xEC..=0xFD;

/// What a transparent source pixel does to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// Leave the destination pixel as it is.
    Skip,
    /// Reset the destination to transparent and mark it covered.
    Clear,
}

#[derive(Debug, Clone)]
pub struct TileBuffer {
    width: usize,
    height: usize,
    tiles: Vec<u16>,
    pixels: Vec<u8>,
    priority: Vec<u8>,
    coverage: Vec<u8>,
}

impl Default for TileBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBuffer {
    /// A 64x64 tile layer with all pixel planes allocated.
    #[must_use]
    pub fn new() -> Self {
        let pixel_count = MAP_TILES * TILE_PIXELS * MAP_TILES * TILE_PIXELS;
        Self {
            width: MAP_TILES,
            height: MAP_TILES,
            tiles: vec![0; MAP_TILES * MAP_TILES],
            pixels: vec![TRANSPARENT_PIXEL; pixel_count],
            priority: vec![NO_PRIORITY; pixel_count],
            coverage: vec![0; pixel_count],
        }
    }

    /// A tile-plane-only buffer of arbitrary size, used to replay routines
    /// when measuring them. Pixel operations on it are no-ops.
    #[must_use]
    pub fn scratch(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![0; width * height],
            pixels: Vec::new(),
            priority: Vec::new(),
            coverage: Vec::new(),
        }
    }

    /// Whether the pixel planes exist.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        !self.pixels.is_empty()
    }

    #[must_use]
    pub const fn width_tiles(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height_tiles(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn width_pixels(&self) -> usize {
        self.width * TILE_PIXELS
    }

    #[must_use]
    pub const fn height_pixels(&self) -> usize {
        self.height * TILE_PIXELS
    }

    fn tile_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    fn pixel_index(&self, px: usize, py: usize) -> Option<usize> {
        (self.is_initialized() && px < self.width_pixels() && py < self.height_pixels())
            .then_some(py * self.width_pixels() + px)
    }

    /// Out-of-range coordinates are ignored.
    pub fn set_tile_at(&mut self, x: i32, y: i32, word: u16) {
        if let Some(index) = self.tile_index(x, y) {
            self.tiles[index] = word;
        }
    }

    /// Returns 0 for out-of-range coordinates.
    #[must_use]
    pub fn tile_at(&self, x: i32, y: i32) -> u16 {
        self.tile_index(x, y).map_or(0, |index| self.tiles[index])
    }

    /// Zeroes the tile plane. Pixel planes are kept.
    pub fn clear_buffer(&mut self) {
        self.tiles.fill(0);
    }

    #[must_use]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn priority_plane(&self) -> &[u8] {
        &self.priority
    }

    #[must_use]
    pub fn coverage_plane(&self) -> &[u8] {
        &self.coverage
    }

    #[must_use]
    pub fn pixel_at(&self, px: usize, py: usize) -> u8 {
        self.pixel_index(px, py)
            .map_or(TRANSPARENT_PIXEL, |index| self.pixels[index])
    }

    #[must_use]
    pub fn priority_at(&self, px: usize, py: usize) -> u8 {
        self.pixel_index(px, py)
            .map_or(NO_PRIORITY, |index| self.priority[index])
    }

    #[must_use]
    pub fn coverage_at(&self, px: usize, py: usize) -> u8 {
        self.pixel_index(px, py).map_or(0, |index| self.coverage[index])
    }

    pub fn set_pixel_at(&mut self, px: usize, py: usize, value: u8) {
        if let Some(index) = self.pixel_index(px, py) {
            self.pixels[index] = value;
        }
    }

    pub fn set_priority_at(&mut self, px: usize, py: usize, value: u8) {
        if let Some(index) = self.pixel_index(px, py) {
            self.priority[index] = value;
        }
    }

    pub fn fill_pixels(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    pub fn clear_priority(&mut self) {
        self.priority.fill(NO_PRIORITY);
    }

    pub fn clear_coverage(&mut self) {
        self.coverage.fill(0);
    }

    /// Cells holding a non-zero tile word, row by row.
    pub fn written_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, word)| **word != 0)
            .map(move |(index, _)| (index % width, index / width))
    }

    /// Rasterizes `tile` into the 8x8 pixel cell at (`tile_x`, `tile_y`).
    /// Opaque pixels take the tile's colour and priority bit and mark
    /// coverage; transparent ones follow `transparency`.
    pub fn draw_tile_pixels(
        &mut self,
        tile_x: i32,
        tile_y: i32,
        tile: TileDescriptor,
        sheet: TileSheet<'_>,
        transparency: Transparency,
    ) {
        if self.tile_index(tile_x, tile_y).is_none() || !self.is_initialized() {
            return;
        }

        #[allow(clippy::cast_sign_loss)]
        let (origin_x, origin_y) = (tile_x as usize * TILE_PIXELS, tile_y as usize * TILE_PIXELS);

        for py in 0..TILE_PIXELS {
            for px in 0..TILE_PIXELS {
                let Some(index) = self.pixel_index(origin_x + px, origin_y + py) else {
                    continue;
                };

                match sheet.pixel(tile, px, py) {
                    Some(color) => {
                        self.pixels[index] = color;
                        self.priority[index] = u8::from(tile.priority);
                        self.coverage[index] = 1;
                    }
                    None if transparency == Transparency::Clear => {
                        self.pixels[index] = TRANSPARENT_PIXEL;
                        self.priority[index] = NO_PRIORITY;
                        self.coverage[index] = 1;
                    }
                    None => {}
                }
            }
        }
    }

    /// Resets the 8x8 pixel cell at (`tile_x`, `tile_y`) to covered and
    /// transparent, letting the layer underneath show through.
    pub fn clear_tile_pixels(&mut self, tile_x: i32, tile_y: i32) {
        if self.tile_index(tile_x, tile_y).is_none() || !self.is_initialized() {
            return;
        }

        #[allow(clippy::cast_sign_loss)]
        let (origin_x, origin_y) = (tile_x as usize * TILE_PIXELS, tile_y as usize * TILE_PIXELS);

        for py in origin_y..origin_y + TILE_PIXELS {
            for px in origin_x..origin_x + TILE_PIXELS {
                if let Some(index) = self.pixel_index(px, py) {
                    self.pixels[index] = TRANSPARENT_PIXEL;
                    self.priority[index] = NO_PRIORITY;
                    self.coverage[index] = 1;
                }
            }
        }
    }

    /// Decodes every written tile word into the pixel planes.
    ///
    /// Words 0 and 0xFFFF are empty; animated floor tiles are skipped when
    /// `skip_animated_floor` is set so the floor pass survives.
    pub fn draw_background(&mut self, graphics: &[u8], skip_animated_floor: bool) {
        let sheet = TileSheet::new(graphics);
        let mut drawn = 0_usize;

        for index in 0..self.tiles.len() {
            let word = self.tiles[index];
            if word == 0 || word == EMPTY_TILE_WORD {
                continue;
            }

            let tile = TileDescriptor::from(word);
            if skip_animated_floor && ANIMATED_FLOOR_TILES.contains(&tile.id) {
                continue;
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let (x, y) = ((index % self.width) as i32, (index / self.width) as i32);
            self.draw_tile_pixels(x, y, tile, sheet, Transparency::Skip);
            drawn += 1;
        }

        tracing::debug!("background pass decoded {drawn} tiles");
    }

    /// Tiles the whole map with the room floor.
    ///
    /// Two groups of four tile words are read, one at each address offset by
    /// `floor_graphics << 4` (truncated to a byte). Even map rows repeat the
    /// first group, odd rows the second. Pixels are decoded straight away
    /// when a sheet is given.
    pub fn draw_floor(
        &mut self,
        rom: &Rom,
        tile_address: usize,
        tile_address_floor: usize,
        floor_graphics: u8,
        sheet: Option<TileSheet<'_>>,
    ) -> Result<(), RenderError> {
        let offset = usize::from(floor_graphics << 4);

        let mut pattern = [TileDescriptor::default(); 8];
        for (i, tile) in pattern.iter_mut().enumerate() {
            let base = if i < 4 { tile_address } else { tile_address_floor };
            *tile = TileDescriptor::from(rom.read_word(base + offset + (i % 4) * 2)?);
        }

        for yy in 0..32 {
            for xx in 0..16 {
                for k in 0..4 {
                    let x = xx * 4 + k;
                    self.put_floor_tile(x, yy * 2, pattern[k as usize], sheet);
                    self.put_floor_tile(x, yy * 2 + 1, pattern[4 + k as usize], sheet);
                }
            }
        }

        tracing::debug!(
            "floor 0x{floor_graphics:02X} seeded from 0x{tile_address:06X}/0x{tile_address_floor:06X}"
        );
        Ok(())
    }

    fn put_floor_tile(&mut self, x: i32, y: i32, tile: TileDescriptor, sheet: Option<TileSheet<'_>>) {
        self.set_tile_at(x, y, tile.to_word());
        if let Some(sheet) = sheet {
            self.draw_tile_pixels(x, y, tile, sheet, Transparency::Skip);
        }
    }
}

impl TileCanvas for TileBuffer {
    fn put_tile(&mut self, x: i32, y: i32, tile: TileDescriptor) {
        self.set_tile_at(x, y, tile.to_word());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn out_of_range_tiles_are_ignored() {
        let mut buffer = TileBuffer::new();
        buffer.set_tile_at(-1, 0, 0x1234);
        buffer.set_tile_at(64, 3, 0x1234);
        buffer.set_tile_at(3, 64, 0x1234);

        assert!(buffer.tiles().iter().all(|word| *word == 0));
        assert_eq!(buffer.tile_at(-1, 0), 0);
        assert_eq!(buffer.tile_at(64, 64), 0);
    }

    #[test]
    fn set_and_get_tile() {
        let mut buffer = TileBuffer::new();
        buffer.set_tile_at(63, 63, 0xBEEF);
        assert_eq!(buffer.tile_at(63, 63), 0xBEEF);
        assert_eq!(buffer.written_cells().collect::<Vec<_>>(), vec![(63, 63)]);
    }

    #[test]
    fn clear_buffer_zeroes_tiles_only() {
        let mut buffer = TileBuffer::new();
        buffer.set_tile_at(1, 1, 7);
        buffer.set_pixel_at(0, 0, 3);
        buffer.clear_buffer();

        assert_eq!(buffer.tile_at(1, 1), 0);
        assert_eq!(buffer.pixel_at(0, 0), 3);
    }

    #[test]
    fn fresh_planes() {
        let buffer = TileBuffer::new();
        assert!(buffer.is_initialized());
        assert_eq!(buffer.pixels().len(), 512 * 512);
        assert_eq!(buffer.pixel_at(100, 100), TRANSPARENT_PIXEL);
        assert_eq!(buffer.priority_at(100, 100), NO_PRIORITY);
        assert_eq!(buffer.coverage_at(100, 100), 0);
    }

    #[test]
    fn scratch_has_no_pixels() {
        let mut buffer = TileBuffer::scratch(128, 96);
        assert!(!buffer.is_initialized());
        buffer.set_tile_at(127, 95, 1);
        buffer.clear_tile_pixels(0, 0);
        assert_eq!(buffer.tile_at(127, 95), 1);
        assert_eq!(buffer.pixel_at(0, 0), TRANSPARENT_PIXEL);
    }

    #[test]
    fn opaque_pixels_take_colour_and_priority() {
        let graphics = vec![0x11; 0x4000];
        let mut buffer = TileBuffer::new();
        let tile = TileDescriptor::new(2).with_palette(1).with_priority(true);

        buffer.draw_tile_pixels(1, 2, tile, TileSheet::new(&graphics), Transparency::Clear);

        assert_eq!(buffer.pixel_at(8, 16), 9);
        assert_eq!(buffer.pixel_at(15, 23), 9);
        assert_eq!(buffer.priority_at(8, 16), 1);
        assert_eq!(buffer.coverage_at(8, 16), 1);
        assert_eq!(buffer.pixel_at(16, 16), TRANSPARENT_PIXEL);
        assert_eq!(buffer.coverage_at(16, 16), 0);
    }

    #[test]
    fn transparent_clear_marks_coverage_even_without_change() {
        let graphics = vec![0_u8; 0x4000];
        let mut buffer = TileBuffer::new();
        buffer.set_priority_at(0, 0, 0);

        buffer.draw_tile_pixels(0, 0, TileDescriptor::new(0), TileSheet::new(&graphics), Transparency::Clear);

        assert_eq!(buffer.pixel_at(0, 0), TRANSPARENT_PIXEL);
        assert_eq!(buffer.coverage_at(0, 0), 1);
        assert_eq!(buffer.priority_at(0, 0), NO_PRIORITY);
    }

    #[test]
    fn transparent_skip_keeps_destination() {
        let graphics = vec![0_u8; 0x4000];
        let mut buffer = TileBuffer::new();
        buffer.set_pixel_at(3, 3, 42);

        buffer.draw_tile_pixels(0, 0, TileDescriptor::new(0), TileSheet::new(&graphics), Transparency::Skip);

        assert_eq!(buffer.pixel_at(3, 3), 42);
        assert_eq!(buffer.coverage_at(3, 3), 0);
    }

    #[test]
    fn background_skips_empty_and_animated_floor() {
        let graphics = vec![0x22; 0x10000];
        let mut buffer = TileBuffer::new();
        buffer.set_tile_at(0, 0, EMPTY_TILE_WORD);
        buffer.set_tile_at(1, 0, 0xEC);
        buffer.set_tile_at(2, 0, 0x10);

        buffer.draw_background(&graphics, true);

        assert_eq!(buffer.pixel_at(0, 0), TRANSPARENT_PIXEL);
        assert_eq!(buffer.pixel_at(8, 0), TRANSPARENT_PIXEL);
        assert_eq!(buffer.pixel_at(16, 0), 2);
        assert_eq!(buffer.pixel_at(24, 0), TRANSPARENT_PIXEL);

        buffer.draw_background(&graphics, false);
        assert_eq!(buffer.pixel_at(8, 0), 2);
    }

    #[test]
    fn floor_pattern_alternates_rows() {
        let mut data = vec![0_u8; 0x200];
        // floor_graphics 1 -> offset 0x10
        for (i, word) in [1_u16, 2, 3, 4].iter().enumerate() {
            data[0x100 + 0x10 + i * 2..0x100 + 0x10 + i * 2 + 2].copy_from_slice(&word.to_le_bytes());
        }
        for (i, word) in [5_u16, 6, 7, 8].iter().enumerate() {
            data[0x180 + 0x10 + i * 2..0x180 + 0x10 + i * 2 + 2].copy_from_slice(&word.to_le_bytes());
        }
        let rom = Rom::new(data);
        let mut buffer = TileBuffer::new();

        buffer.draw_floor(&rom, 0x100, 0x180, 1, None).unwrap();

        assert_eq!(buffer.tile_at(0, 0), 1);
        assert_eq!(buffer.tile_at(3, 0), 4);
        assert_eq!(buffer.tile_at(4, 0), 1);
        assert_eq!(buffer.tile_at(1, 1), 6);
        assert_eq!(buffer.tile_at(63, 62), 4);
        assert_eq!(buffer.tile_at(63, 63), 8);
    }

    #[test]
    fn floor_offset_wraps_to_a_byte() {
        let rom = Rom::new(vec![0_u8; 0x40]);
        let mut buffer = TileBuffer::new();
        // 0x10 << 4 truncates to 0, so the reads stay inside the image.
        assert!(buffer.draw_floor(&rom, 0, 0x20, 0x10, None).is_ok());
    }

    #[test]
    fn floor_read_out_of_range_fails() {
        let rom = Rom::new(vec![0_u8; 8]);
        let mut buffer = TileBuffer::new();
        assert!(matches!(
            buffer.draw_floor(&rom, 0, 0x100, 0, None),
            Err(RenderError::RomOutOfRange { .. })
        ));
    }
}
