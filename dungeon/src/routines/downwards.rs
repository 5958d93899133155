//! Routines repeating a tile cluster along the y axis.

use super::{DrawContext, count_1to16, count_or};

/// Size 0 means 32 repeats of a 2x2 block.
pub fn downwards_2x2_1to15_or_32(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(4) {
        let count = count_or(ctx.size(), 32);
        ctx.repeat_block(count, (0, 2), 2, 2);
    }
}

/// Size 0 means 26 repeats of a 4x2 block laid out row by row; with four
/// tiles only the top row is drawn.
pub fn downwards_4x2_1to15_or_26(ctx: &mut DrawContext<'_>) {
    let count = count_or(ctx.size(), 26);
    let rows = if ctx.has_tiles(8) {
        2
    } else if ctx.has_tiles(4) {
        1
    } else {
        return;
    };

    for s in 0..count {
        ctx.block_row_major(0, s * 2, 4, rows, 0);
    }
}

pub fn downwards_decor_4x2_spaced4(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 2, 6);
}

pub fn downwards_2x2_1to16(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 2);
}

/// Top edge, `size + 1` middle tiles, bottom edge.
pub fn downwards_has_edge_1x1_plus3(ctx: &mut DrawContext<'_>) {
    let count = count_1to16(ctx.size());
    edged_column(ctx, count);
}

/// Same shape as the 1x1 edge, with `size + 21` middle tiles.
pub fn downwards_has_edge_1x1_plus23(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 21;
    edged_column(ctx, count);
}

fn edged_column(ctx: &mut DrawContext<'_>, middle: i32) {
    if !ctx.has_tiles(3) {
        return;
    }
    let (top, body, bottom) = (ctx.tile(0), ctx.tile(1), ctx.tile(2));
    ctx.put(0, 0, top);
    for s in 0..middle {
        ctx.put(0, 1 + s, body);
    }
    ctx.put(0, 1 + middle, bottom);
}

/// Column of `count` copies of the first tile, `offset` tiles down.
fn run_1x1(ctx: &mut DrawContext<'_>, count: i32, offset: i32) {
    if ctx.tiles.is_empty() {
        return;
    }
    let tile = ctx.tile(0);
    for s in 0..count {
        ctx.put(0, offset + s, tile);
    }
}

pub fn downwards_edge_1x1(ctx: &mut DrawContext<'_>) {
    run_1x1(ctx, count_1to16(ctx.size()), 0);
}

pub fn downwards_1x1_solid_plus3(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 4;
    run_1x1(ctx, count, 0);
}

pub fn downwards_line_1x1_plus1(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 2;
    run_1x1(ctx, count, 0);
}

/// Two tiles side by side twelve columns right of the anchor, repeated down.
pub fn downwards_corners_2x1_plus12(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(2) {
        return;
    }
    let count = i32::from(ctx.size() & 0x0F) + 10;
    let (left, right) = (ctx.tile(0), ctx.tile(1));
    for s in 0..count {
        ctx.put(12, s, left);
        ctx.put(13, s, right);
    }
}

/// `width` x `height` column-major blocks, `stride` tiles apart vertically.
fn spaced(ctx: &mut DrawContext<'_>, width: i32, height: i32, stride: i32) {
    #[allow(clippy::cast_sign_loss)]
    let needed = (width * height) as usize;
    if ctx.has_tiles(needed) {
        let count = count_1to16(ctx.size());
        ctx.repeat_block(count, (0, stride), width, height);
    }
}

pub fn downwards_floor_4x4(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 4, 4);
}

pub fn downwards_decor_4x4_spaced2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 4, 6);
}

pub fn downwards_pillar_2x4_spaced2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 4, 6);
}

pub fn downwards_decor_3x4_spaced4(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 3, 4, 8);
}

pub fn downwards_decor_2x2_spaced12(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 14);
}

pub fn downwards_decor_2x4_spaced8(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 4, 12);
}

pub fn downwards_decor_3x4_spaced2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 3, 4, 6);
}

pub fn downwards_block_2x2_spaced2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 4);
}

pub fn downwards_bar_2x3(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 3, 3);
}

pub fn downwards_pots_2x2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 2);
}

pub fn downwards_hammer_pegs_2x2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 2);
}

/// Cap row, `size + 4` middle rows, end cap; each row 3 wide.
pub fn downwards_big_rail_3x1_plus5(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(9) {
        return;
    }
    let middle = i32::from(ctx.size() & 0x0F) + 4;
    ctx.block_row_major(0, 0, 3, 1, 0);
    for s in 0..middle {
        ctx.block_row_major(0, 1 + s, 3, 1, 3);
    }
    ctx.block_row_major(0, 1 + middle, 3, 1, 6);
}

/// Top part of the hole (3 wide, 2 tall) repeated, then the bottom edge.
pub fn downwards_cannon_hole_3x6(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(12) {
        return;
    }
    let count = count_1to16(ctx.size());
    for s in 0..count {
        ctx.block_column_major(0, s * 2, 3, 2, 0);
    }
    ctx.block_column_major(0, count * 2, 3, 2, 6);
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn size_zero_is_32_repeats() {
        let recorder = run(downwards_2x2_1to15_or_32, 0x60, 0, 0, 0, &numbered_tiles(4), None);
        assert_eq!(recorder.extent(), (0, 0, 2, 64));
    }

    #[test]
    fn four_by_two_is_row_major_and_26_long() {
        let recorder = run(downwards_4x2_1to15_or_26, 0x61, 0, 0, 0, &numbered_tiles(8), None);
        assert_eq!(recorder.extent(), (0, 0, 4, 52));
        assert_eq!(recorder.writes[..4], [(0, 0, 0), (1, 0, 1), (2, 0, 2), (3, 0, 3)]);
    }

    #[test]
    fn four_by_two_with_four_tiles_draws_top_rows() {
        let recorder = run(downwards_4x2_1to15_or_26, 0x61, 0, 0, 2, &numbered_tiles(4), None);
        assert_eq!(recorder.ys(), vec![0, 2]);
    }

    #[test]
    fn decor_4x2_is_column_major_with_stride_6() {
        let recorder = run(downwards_decor_4x2_spaced4, 0x65, 5, 5, 1, &numbered_tiles(8), None);
        assert_eq!(recorder.writes.len(), 16);
        assert_eq!(recorder.writes[..4], [(5, 5, 0), (5, 6, 1), (6, 5, 2), (6, 6, 3)]);
        assert_eq!(recorder.writes[8], (5, 11, 0));
        assert_eq!(recorder.ys(), vec![5, 6, 11, 12]);
    }

    #[test]
    fn edged_column() {
        let recorder = run(downwards_has_edge_1x1_plus3, 0x69, 0, 0, 1, &numbered_tiles(3), None);
        assert_eq!(recorder.writes, vec![(0, 0, 0), (0, 1, 1), (0, 2, 1), (0, 3, 2)]);

        let recorder = run(downwards_has_edge_1x1_plus23, 0x8A, 0, 0, 0, &numbered_tiles(3), None);
        assert_eq!(recorder.extent(), (0, 0, 1, 23));
    }

    #[test]
    fn corners_sit_twelve_right() {
        let recorder = run(downwards_corners_2x1_plus12, 0x6C, 0, 0, 0, &numbered_tiles(2), None);
        assert_eq!(recorder.extent(), (12, 0, 2, 10));
    }

    #[test]
    fn big_rail_length() {
        let recorder = run(downwards_big_rail_3x1_plus5, 0x88, 0, 0, 0, &numbered_tiles(9), None);
        assert_eq!(recorder.extent(), (0, 0, 3, 6));
    }

    #[test]
    fn cannon_hole_height() {
        let recorder = run(downwards_cannon_hole_3x6, 0x85, 0, 0, 2, &numbered_tiles(12), None);
        assert_eq!(recorder.extent(), (0, 0, 3, 8));
        assert_eq!(recorder.cells[&(2, 7)], 11);
    }
}
