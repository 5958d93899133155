//! Fixed corner pieces drawn on both layers.

use super::DrawContext;

pub fn corner_4x4_both_bg(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(16) {
        ctx.block_column_major(0, 0, 4, 4, 0);
    }
}

/// 4 wide, 3 tall, hanging off the bottom of a wall.
pub fn weird_corner_bottom_both_bg(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(12) {
        ctx.block_column_major(0, 0, 4, 3, 0);
    }
}

/// 3 wide, 4 tall, sitting on top of a wall.
pub fn weird_corner_top_both_bg(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(12) {
        ctx.block_column_major(0, 0, 3, 4, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn corner_footprints() {
        let tiles = numbered_tiles(16);
        assert_eq!(run(corner_4x4_both_bg, 0x108, 0, 0, 7, &tiles, None).extent(), (0, 0, 4, 4));
        assert_eq!(run(weird_corner_bottom_both_bg, 0x110, 0, 0, 0, &tiles, None).extent(), (0, 0, 4, 3));
        assert_eq!(run(weird_corner_top_both_bg, 0x114, 0, 0, 0, &tiles, None).extent(), (0, 0, 3, 4));
    }

    #[test]
    fn short_payload_draws_nothing() {
        assert!(run(corner_4x4_both_bg, 0x108, 0, 0, 0, &numbered_tiles(12), None).writes.is_empty());
    }
}
