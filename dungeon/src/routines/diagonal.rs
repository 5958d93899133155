//! Diagonal walls and triangular ceilings.
//!
//! A diagonal wall draws a five-tile column, then steps one tile right and
//! one tile up (acute, "/") or down (grave, "\"). Acute walls therefore
//! reach `count - 1` rows above their anchor.

use super::DrawContext;

/// Rows in each column of a diagonal wall.
pub const DIAGONAL_RUN: i32 = 5;

fn diagonal(ctx: &mut DrawContext<'_>, count: i32, step: i32) {
    if !ctx.has_tiles(4) {
        return;
    }
    // The run cycles through the first four tiles, or all five when given.
    let run = ctx.tiles.len().min(5);
    for s in 0..count {
        for i in 0..DIAGONAL_RUN {
            #[allow(clippy::cast_sign_loss)]
            let tile = ctx.tile(i as usize % run);
            ctx.put(s, i + s * step, tile);
        }
    }
}

pub fn diagonal_acute_1to16(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 7;
    diagonal(ctx, count, -1);
}

pub fn diagonal_grave_1to16(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 7;
    diagonal(ctx, count, 1);
}

pub fn diagonal_acute_both_bg(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 6;
    diagonal(ctx, count, -1);
}

pub fn diagonal_grave_both_bg(ctx: &mut DrawContext<'_>) {
    let count = i32::from(ctx.size() & 0x0F) + 6;
    diagonal(ctx, count, 1);
}

/// Side of a diagonal ceiling: four tiles per size step.
fn ceiling_side(ctx: &DrawContext<'_>) -> i32 {
    (i32::from(ctx.size() & 0x0F) + 1) * 4
}

/// Fills the right triangle whose row `r` spans the columns `columns(r, n)`.
fn ceiling(ctx: &mut DrawContext<'_>, columns: fn(i32, i32) -> std::ops::Range<i32>) {
    if ctx.tiles.is_empty() {
        return;
    }
    let n = ceiling_side(ctx);
    let tile = ctx.tile(0);
    for r in 0..n {
        for c in columns(r, n) {
            ctx.put(c, r, tile);
        }
    }
}

pub fn diagonal_ceiling_top_left(ctx: &mut DrawContext<'_>) {
    ceiling(ctx, |r, n| 0..n - r);
}

pub fn diagonal_ceiling_bottom_left(ctx: &mut DrawContext<'_>) {
    ceiling(ctx, |r, _| 0..r + 1);
}

pub fn diagonal_ceiling_top_right(ctx: &mut DrawContext<'_>) {
    ceiling(ctx, |r, n| r..n);
}

pub fn diagonal_ceiling_bottom_right(ctx: &mut DrawContext<'_>) {
    ceiling(ctx, |r, n| n - 1 - r..n);
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn acute_walks_up() {
        let recorder = run(diagonal_acute_1to16, 0x09, 0, 40, 3, &numbered_tiles(4), None);
        // count = 10: 10 wide, 14 tall, reaching 9 rows above the anchor.
        assert_eq!(recorder.extent(), (0, 31, 10, 14));
    }

    #[test]
    fn grave_walks_down() {
        let recorder = run(diagonal_grave_1to16, 0x0E, 0, 0, 0, &numbered_tiles(4), None);
        assert_eq!(recorder.extent(), (0, 0, 7, 11));
        assert_eq!(recorder.cells[&(6, 6)], 0);
    }

    #[test]
    fn both_bg_variants_are_one_shorter() {
        let recorder = run(diagonal_acute_both_bg, 0x15, 0, 40, 0, &numbered_tiles(4), None);
        assert_eq!(recorder.extent(), (0, 35, 6, 10));
    }

    #[test]
    fn run_uses_five_tiles_when_given() {
        let recorder = run(diagonal_grave_1to16, 0x0E, 0, 0, 0, &numbered_tiles(5), None);
        assert_eq!(recorder.cells[&(0, 4)], 4);

        let recorder = run(diagonal_grave_1to16, 0x0E, 0, 0, 0, &numbered_tiles(4), None);
        assert_eq!(recorder.cells[&(0, 4)], 0);
    }

    #[test]
    fn ceilings_are_triangles() {
        let tiles = numbered_tiles(1);
        let top_left = run(diagonal_ceiling_top_left, 0xA0, 0, 0, 0, &tiles, None);
        assert_eq!(top_left.cells.len(), 10);
        assert!(top_left.cells.contains_key(&(3, 0)));
        assert!(!top_left.cells.contains_key(&(3, 3)));

        let bottom_right = run(diagonal_ceiling_bottom_right, 0xA3, 0, 0, 0, &tiles, None);
        assert!(bottom_right.cells.contains_key(&(3, 0)));
        assert!(bottom_right.cells.contains_key(&(0, 3)));
        assert!(!bottom_right.cells.contains_key(&(0, 0)));

        let top_right = run(diagonal_ceiling_top_right, 0xA2, 0, 0, 1, &tiles, None);
        assert_eq!(top_right.extent(), (0, 0, 8, 8));
        assert!(!top_right.cells.contains_key(&(0, 1)));
    }
}
