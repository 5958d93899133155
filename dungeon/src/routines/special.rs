//! Routines that don't follow a plain repeat: super-square floors,
//! state-dependent objects, stairs and the chest platforms.

use super::{DrawContext, count_1to16};
use crate::tile::TileDescriptor;

/// Two-bit repeat counts packed as `..xxyy` in the size byte.
fn super_square_counts(size: u8) -> (i32, i32) {
    (i32::from((size >> 2) & 0x03) + 1, i32::from(size & 0x03) + 1)
}

pub fn nothing(_ctx: &mut DrawContext<'_>) {}

/// Small or big chest; the open variant follows the closed tiles.
pub fn chest(ctx: &mut DrawContext<'_>) {
    let open = ctx
        .state
        .is_some_and(|state| state.is_chest_open(ctx.room_id, ctx.chest_index));

    if open {
        if ctx.has_tiles(32) {
            ctx.block_column_major(0, 0, 4, 4, 16);
            return;
        }
        if ctx.has_tiles(8) && !ctx.has_tiles(16) {
            ctx.block_column_major(0, 0, 2, 2, 4);
            return;
        }
    }

    if ctx.has_tiles(16) {
        ctx.block_column_major(0, 0, 4, 4, 0);
    } else if ctx.has_tiles(4) {
        ctx.block_column_major(0, 0, 2, 2, 0);
    }
}

pub fn door_switcher(ctx: &mut DrawContext<'_>) {
    if ctx.tiles.is_empty() {
        return;
    }
    let active = ctx
        .state
        .is_some_and(|state| state.is_door_switch_active(ctx.room_id));
    let tile = if active && ctx.has_tiles(2) {
        ctx.tile(1)
    } else {
        ctx.tile(0)
    };
    ctx.put(0, 0, tile);
}

/// Step of a Somaria line, picked by the low nibble of the object id.
#[must_use]
pub const fn somaria_direction(object_id: u16) -> (i32, i32) {
    match object_id & 0x0F {
        0x04 | 0x08 | 0x0B | 0x0F => (0, 1),
        0x05 | 0x09 | 0x0C => (1, 1),
        0x06 => (-1, 1),
        _ => (1, 0),
    }
}

pub fn somaria_line(ctx: &mut DrawContext<'_>) {
    if ctx.tiles.is_empty() {
        return;
    }
    let length = count_1to16(ctx.size());
    let (dx, dy) = somaria_direction(ctx.object.id);
    let payload = ctx.tiles.len();
    for i in 0..length {
        #[allow(clippy::cast_sign_loss)]
        let tile = ctx.tile(i as usize % payload);
        ctx.put(i * dx, i * dy, tile);
    }
}

/// Any of the wall water faces: one 2x2 block.
pub fn water_face(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(4) {
        ctx.block_column_major(0, 0, 2, 2, 0);
    }
}

/// Fills `(cols * unit) x (rows * unit)` tiles with the first tile.
fn solid_super_square(ctx: &mut DrawContext<'_>, unit: i32) {
    if ctx.tiles.is_empty() {
        return;
    }
    let (cols, rows) = super_square_counts(ctx.size());
    let tile = ctx.tile(0);
    ctx.fill(0, 0, cols * unit, rows * unit, tile);
}

pub fn blocks_4x4_in_super_square(ctx: &mut DrawContext<'_>) {
    solid_super_square(ctx, 4);
}

pub fn floor_3x3_in_super_square(ctx: &mut DrawContext<'_>) {
    solid_super_square(ctx, 3);
}

/// 4x4 floor cells. Each cell column `c` alternates `tiles[2c]` and
/// `tiles[2c + 1]` down its four rows. Payloads shorter than eight tiles
/// draw nothing.
pub fn floor_4x4_in_super_square(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(8) {
        return;
    }
    let (cols, rows) = super_square_counts(ctx.size());
    for sy in 0..rows {
        for sx in 0..cols {
            for c in 0..4 {
                for r in 0..4 {
                    #[allow(clippy::cast_sign_loss)]
                    let tile = ctx.tile((c * 2 + r % 2) as usize);
                    ctx.put(sx * 4 + c, sy * 4 + r, tile);
                }
            }
        }
    }
}

pub fn floor_4x4_one_in_super_square(ctx: &mut DrawContext<'_>) {
    floor_4x4_in_super_square(ctx);
}

pub fn floor_4x4_two_in_super_square(ctx: &mut DrawContext<'_>) {
    floor_4x4_in_super_square(ctx);
}

/// Square pit with a framed border. The side is `size + 4` tiles.
pub fn big_hole_4x4(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(24) {
        return;
    }
    let max = i32::from(ctx.size() & 0x0F) + 3;
    for y in 0..=max {
        for x in 0..=max {
            let index = match (x == 0, x == max, y == 0, y == max) {
                (true, _, true, _) => 8,
                (_, true, true, _) => 14,
                (true, _, _, true) => 17,
                (_, true, _, true) => 23,
                (_, _, true, _) => 10,
                (_, _, _, true) => 19,
                (true, ..) => 9,
                (_, true, ..) => 15,
                _ => 0,
            };
            let tile = ctx.tile(index);
            ctx.put(x, y, tile);
        }
    }
}

/// A 2x2 spike for every super-square cell.
pub fn spike_2x2_in_super_square(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(4) {
        return;
    }
    let (cols, rows) = super_square_counts(ctx.size());
    for sy in 0..rows {
        for sx in 0..cols {
            ctx.block_column_major(sx * 2, sy * 2, 2, 2, 0);
        }
    }
}

/// Framed rock table. Corners and edges come from the outer ring of a 4x4
/// payload, the interior repeats its middle 2x2.
pub fn table_rock_4x4(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(16) {
        return;
    }
    let size = ctx.size();
    let right = 3 + i32::from((size >> 2) & 0x03) * 2;
    let bottom = 3 + i32::from(size & 0x03) * 2;

    for y in 0..=bottom {
        for x in 0..=right {
            // Second column/row of each 2x2 repeat.
            let alt_x = usize::from(x % 2 == 0);
            let alt_y = usize::from(y % 2 == 0);
            let index = match (x == 0, x == right, y == 0, y == bottom) {
                (true, _, true, _) => 0,
                (_, true, true, _) => 3,
                (true, _, _, true) => 12,
                (_, true, _, true) => 15,
                (_, _, true, _) => 1 + alt_x,
                (_, _, _, true) => 13 + alt_x,
                (true, ..) => 4 + alt_y * 4,
                (_, true, ..) => 7 + alt_y * 4,
                _ => 5 + alt_x + alt_y * 4,
            };
            let tile = ctx.tile(index);
            ctx.put(x, y, tile);
        }
    }
}

/// Water overlay: 4x4 cells whose even rows use `tiles[0..4]` and odd rows
/// `tiles[4..8]`.
pub fn water_overlay_8x8(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(8) {
        return;
    }
    let size = ctx.size();
    let cols = i32::from((size >> 2) & 0x03) + 2;
    let rows = i32::from(size & 0x03) + 2;
    for sy in 0..rows {
        for sx in 0..cols {
            for y in 0..4 {
                for x in 0..4 {
                    #[allow(clippy::cast_sign_loss)]
                    let index = (x + (y % 2) * 4) as usize;
                    let tile = ctx.tile(index);
                    ctx.put(sx * 4 + x, sy * 4 + y, tile);
                }
            }
        }
    }
}

/// Straight, fat and automatic stairs.
pub fn stairs_4x4(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(16) {
        ctx.block_row_major(0, 0, 4, 4, 0);
    }
}

pub fn spiral_stairs(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(12) {
        ctx.block_column_major(0, 0, 4, 3, 0);
    }
}

/// 2x2 block, switched to `tiles[4..8]` once `opened` holds.
fn two_state_2x2(ctx: &mut DrawContext<'_>, opened: bool) {
    if opened && ctx.has_tiles(8) {
        ctx.block_row_major(0, 0, 2, 2, 4);
    } else if ctx.has_tiles(4) {
        ctx.block_row_major(0, 0, 2, 2, 0);
    }
}

pub fn big_key_lock(ctx: &mut DrawContext<'_>) {
    let opened = ctx
        .state
        .is_some_and(|state| state.is_door_open(ctx.room_id, 0));
    two_state_2x2(ctx, opened);
}

pub fn bombable_floor(ctx: &mut DrawContext<'_>) {
    let bombed = ctx
        .state
        .is_some_and(|state| state.is_floor_bombable(ctx.room_id));
    two_state_2x2(ctx, bombed);
}

/// Prison bars: five columns, four rows, drawn again mirrored nine
/// columns to the right.
pub fn prison_cell(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(6) {
        return;
    }
    for row in 0..4 {
        #[allow(clippy::cast_sign_loss)]
        let tile = ctx.tile(row as usize);
        let mirrored = TileDescriptor {
            h_mirror: !tile.h_mirror,
            ..tile
        };
        for col in 0..5 {
            ctx.put(col, row, tile);
            ctx.put(9 - col, row, mirrored);
        }
    }
}

/// Closed chest platform: a framed box `size_x + 4` wide with
/// `size_y + 1` side rows.
pub fn closed_chest_platform(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(16) {
        return;
    }
    let size = ctx.size();
    let width = i32::from(size & 0x0F) + 4;
    let sides = i32::from((size >> 4) & 0x0F) + 1;

    let edge_row = |ctx: &mut DrawContext<'_>, y: i32, first: usize| {
        for x in 0..width {
            let index = if x == 0 {
                first
            } else if x == width - 1 {
                first + 2
            } else {
                first + 1
            };
            let tile = ctx.tile(index);
            ctx.put(x, y, tile);
        }
    };
    edge_row(ctx, 0, 0);
    let (left, right) = (ctx.tile(3), ctx.tile(4));
    for y in 1..=sides {
        ctx.put(0, y, left);
        ctx.put(width - 1, y, right);
    }
    edge_row(ctx, sides + 1, 5);
}

/// Rows of the open platform, `width` tiles each, cycling the payload.
pub fn open_chest_platform(ctx: &mut DrawContext<'_>) {
    if ctx.tiles.is_empty() {
        return;
    }
    let size = ctx.size();
    let width = (i32::from(size & 0x0F) + 1).min(8);
    let segments = (i32::from((size >> 4) & 0x0F) * 2 + 5).min(8);
    let payload = ctx.tiles.len();
    for s in 0..segments {
        for x in 0..width {
            #[allow(clippy::cast_sign_loss)]
            let tile = ctx.tile((s * width + x) as usize % payload);
            ctx.put(x, s, tile);
        }
    }
}

/// Column of 2x2 wall blocks, shifted two tiles once the wall has moved.
pub fn moving_wall(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(4) {
        return;
    }
    let moved = ctx
        .state
        .is_some_and(|state| state.is_wall_moved(ctx.room_id));
    let offset = if moved { 2 } else { 0 };
    let count = count_1to16(ctx.size());
    for s in 0..count {
        ctx.block_row_major(offset, s * 2, 2, 2, 0);
    }
}

/// User-defined object: its first tile at the anchor.
pub fn custom_object(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(1) {
        return;
    }
    let tile = ctx.tile(0);
    ctx.put(0, 0, tile);
}
