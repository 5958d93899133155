//! Routines repeating a tile cluster along the x axis.

use super::{DrawContext, count_1to16, count_or};

/// Size 0 means 32 repeats of a 2x2 block.
pub fn rightwards_2x2_1to15_or_32(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(4) {
        return;
    }
    let count = count_or(ctx.size(), 32);
    ctx.repeat_block(count, (2, 0), 2, 2);
}

/// 2x4 columns; with only four tiles the left column is drawn alone.
fn columns_2x4(ctx: &mut DrawContext<'_>, count: i32) {
    if ctx.has_tiles(8) {
        ctx.repeat_block(count, (2, 0), 2, 4);
    } else if ctx.has_tiles(4) {
        ctx.repeat_block(count, (2, 0), 1, 4);
    }
}

/// Size 0 means 26 repeats.
pub fn rightwards_2x4_1to15_or_26(ctx: &mut DrawContext<'_>) {
    let count = count_or(ctx.size(), 26);
    columns_2x4(ctx, count);
}

pub fn rightwards_2x4_1to16(ctx: &mut DrawContext<'_>) {
    let count = count_1to16(ctx.size());
    columns_2x4(ctx, count);
}

pub fn rightwards_2x2_1to16(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(4) {
        let count = count_1to16(ctx.size());
        ctx.repeat_block(count, (2, 0), 2, 2);
    }
}

pub fn rightwards_1x2_plus2(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(2) {
        return;
    }
    let count = i32::from(ctx.size() & 0x0F) * 2 + 1;
    for s in 0..count {
        ctx.block_column_major(s + 2, 0, 1, 2, 0);
    }
}

/// Single row of `count` copies of the first tile, starting `offset` tiles
/// right of the anchor.
fn run_1x1(ctx: &mut DrawContext<'_>, count: i32, offset: i32) {
    if ctx.tiles.is_empty() {
        return;
    }
    let tile = ctx.tile(0);
    for s in 0..count {
        ctx.put(offset + s, 0, tile);
    }
}

pub fn rightwards_has_edge_1x1_plus3(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 2;
    run_1x1(ctx, count, 3);
}

pub fn rightwards_has_edge_1x1_plus2(ctx: &mut DrawContext<'_>) {
    run_1x1(ctx, count_1to16(ctx.size()), 2);
}

pub fn rightwards_1x1_solid_plus3(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 4;
    run_1x1(ctx, count, 3);
}

pub fn rightwards_line_1x1_plus1(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 2;
    run_1x1(ctx, count, 0);
}

pub fn rightwards_edge_1x1_plus7(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 7;
    run_1x1(ctx, count, 0);
}

/// Two-row corner strip thirteen tiles right of the anchor, `row` rows down.
fn corners_1x2_plus13(ctx: &mut DrawContext<'_>, row: i32) {
    if !ctx.has_tiles(2) {
        return;
    }
    let count = i32::from(ctx.size() & 0x0F) + 10;
    let (upper, lower) = (ctx.tile(0), ctx.tile(1));
    for s in 0..count {
        ctx.put(s + 13, row, upper);
        ctx.put(s + 13, row + 1, lower);
    }
}

pub fn rightwards_top_corners_1x2_plus13(ctx: &mut DrawContext<'_>) {
    corners_1x2_plus13(ctx, 0);
}

pub fn rightwards_bottom_corners_1x2_plus13(ctx: &mut DrawContext<'_>) {
    corners_1x2_plus13(ctx, 1);
}

/// `width` x `height` column-major blocks, `stride` tiles apart.
fn spaced(ctx: &mut DrawContext<'_>, width: i32, height: i32, stride: i32) {
    #[allow(clippy::cast_sign_loss)]
    let needed = (width * height) as usize;
    if ctx.has_tiles(needed) {
        let count = count_1to16(ctx.size());
        ctx.repeat_block(count, (stride, 0), width, height);
    }
}

pub fn rightwards_4x4_1to16(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 4, 4);
}

pub fn rightwards_decor_4x4_spaced2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 4, 6);
}

pub fn rightwards_statue_2x3_spaced2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 3, 4);
}

pub fn rightwards_pillar_2x4_spaced4(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 4, 6);
}

pub fn rightwards_decor_4x3_spaced4(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 3, 6);
}

pub fn rightwards_doubled_2x2_spaced2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 2, 6);
}

pub fn rightwards_decor_2x2_spaced12(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 14);
}

pub fn rightwards_4x2_1to16(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 2, 4);
}

pub fn rightwards_decor_4x2_spaced8(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 2, 12);
}

pub fn rightwards_bar_4x3(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 3, 6);
}

pub fn rightwards_shelf_4x4(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 4, 4, 6);
}

pub fn rightwards_block_2x2_spaced2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 4);
}

pub fn rightwards_pots_2x2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 2);
}

pub fn rightwards_hammer_pegs_2x2(ctx: &mut DrawContext<'_>) {
    spaced(ctx, 2, 2, 2);
}

/// Left part of the hole (two 3-tall columns) repeated, then the right edge.
pub fn rightwards_cannon_hole_4x3(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(12) {
        return;
    }
    let count = count_1to16(ctx.size());
    for s in 0..count {
        ctx.block_column_major(s * 2, 0, 2, 3, 0);
    }
    ctx.block_column_major(count * 2, 0, 2, 3, 6);
}

/// Cap column, `size + 4` middle columns, end cap; each column 3 tall.
pub fn rightwards_big_rail_1x3_plus5(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(9) {
        return;
    }
    let middle = i32::from(ctx.size() & 0x0F) + 4;
    ctx.block_column_major(0, 0, 1, 3, 0);
    for s in 0..middle {
        ctx.block_column_major(1 + s, 0, 1, 3, 3);
    }
    ctx.block_column_major(1 + middle, 0, 1, 3, 6);
}

/// Corner, `size + 21` middle tiles, end tile.
pub fn rightwards_has_edge_1x1_plus23(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(3) {
        return;
    }
    let count = i32::from(ctx.size() & 0x0F) + 21;
    let (corner, middle, end) = (ctx.tile(0), ctx.tile(1), ctx.tile(2));
    ctx.put(0, 0, corner);
    for s in 0..count {
        ctx.put(1 + s, 0, middle);
    }
    ctx.put(1 + count, 0, end);
}

/// Waterfall face: edge column, `(size + 1) * 2` body columns, edge column,
/// each `rows` tall.
fn waterfall(ctx: &mut DrawContext<'_>, rows: i32) {
    #[allow(clippy::cast_sign_loss)]
    let column = rows as usize;
    if !ctx.has_tiles(column * 3) {
        return;
    }
    let body = (i32::from(ctx.size()) + 1) * 2;
    ctx.block_column_major(0, 0, 1, rows, 0);
    for s in 0..body {
        ctx.block_column_major(1 + s, 0, 1, rows, column);
    }
    ctx.block_column_major(1 + body, 0, 1, rows, column * 2);
}

pub fn waterfall_47(ctx: &mut DrawContext<'_>) {
    waterfall(ctx, 5);
}

pub fn waterfall_48(ctx: &mut DrawContext<'_>) {
    waterfall(ctx, 3);
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn size_zero_is_32_repeats() {
        let recorder = run(rightwards_2x2_1to15_or_32, 0x00, 0, 0, 0, &numbered_tiles(4), None);
        assert_eq!(recorder.extent(), (0, 0, 64, 2));
    }

    #[test]
    fn size_n_is_n_repeats() {
        let recorder = run(rightwards_2x2_1to15_or_32, 0x00, 0, 0, 5, &numbered_tiles(4), None);
        assert_eq!(recorder.extent(), (0, 0, 10, 2));
    }

    #[test]
    fn size_zero_is_26_repeats() {
        let recorder = run(rightwards_2x4_1to15_or_26, 0x01, 0, 0, 0, &numbered_tiles(8), None);
        assert_eq!(recorder.extent(), (0, 0, 52, 4));
    }

    #[test]
    fn two_by_four_with_four_tiles_draws_left_columns() {
        let recorder = run(rightwards_2x4_1to16, 0x03, 0, 0, 1, &numbered_tiles(4), None);
        assert_eq!(recorder.xs(), vec![0, 2]);
        assert_eq!(recorder.ys(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn two_by_two_is_column_major() {
        let recorder = run(rightwards_2x2_1to16, 0x07, 4, 4, 0, &numbered_tiles(4), None);
        assert_eq!(recorder.writes, vec![(4, 4, 0), (4, 5, 1), (5, 4, 2), (5, 5, 3)]);
    }

    #[test]
    fn pillar_spacing() {
        let recorder = run(rightwards_pillar_2x4_spaced4, 0x3D, 10, 5, 1, &numbered_tiles(8), None);
        assert_eq!(recorder.xs(), vec![10, 11, 16, 17]);
    }

    #[test]
    fn offset_runs() {
        let recorder = run(rightwards_has_edge_1x1_plus2, 0x23, 0, 0, 2, &numbered_tiles(1), None);
        assert_eq!(recorder.xs(), vec![2, 3, 4]);

        let recorder = run(rightwards_1x1_solid_plus3, 0x34, 0, 0, 0, &numbered_tiles(1), None);
        assert_eq!(recorder.xs(), vec![3, 4, 5, 6]);

        let recorder = run(rightwards_top_corners_1x2_plus13, 0x2F, 0, 0, 0, &numbered_tiles(2), None);
        assert_eq!(recorder.extent(), (13, 0, 10, 2));

        let recorder = run(rightwards_bottom_corners_1x2_plus13, 0x30, 0, 0, 0, &numbered_tiles(2), None);
        assert_eq!(recorder.extent(), (13, 1, 10, 2));
    }

    #[test]
    fn cannon_hole_sequence() {
        let recorder = run(rightwards_cannon_hole_4x3, 0x51, 0, 0, 1, &numbered_tiles(12), None);
        assert_eq!(
            recorder.writes,
            vec![
                (0, 0, 0), (0, 1, 1), (0, 2, 2), (1, 0, 3), (1, 1, 4), (1, 2, 5),
                (2, 0, 0), (2, 1, 1), (2, 2, 2), (3, 0, 3), (3, 1, 4), (3, 2, 5),
                (4, 0, 6), (4, 1, 7), (4, 2, 8), (5, 0, 9), (5, 1, 10), (5, 2, 11),
            ]
        );
    }

    #[test]
    fn big_rail_length() {
        let recorder = run(rightwards_big_rail_1x3_plus5, 0x5D, 0, 0, 2, &numbered_tiles(9), None);
        assert_eq!(recorder.extent(), (0, 0, 8, 3));
        assert_eq!(recorder.cells[&(7, 2)], 8);
    }

    #[test]
    fn waterfall_width() {
        let recorder = run(waterfall_47, 0x47, 0, 0, 1, &numbered_tiles(15), None);
        assert_eq!(recorder.extent(), (0, 0, 6, 5));
        assert_eq!(recorder.cells[&(5, 4)], 14);
    }

    #[test]
    fn short_payload_draws_nothing() {
        let recorder = run(rightwards_4x4_1to16, 0x33, 0, 0, 0, &numbered_tiles(15), None);
        assert!(recorder.writes.is_empty());
    }
}
