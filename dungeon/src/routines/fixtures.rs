//! Fixed-footprint objects. The size byte is ignored.

use super::DrawContext;

/// Object id of the big chest, the one fixture with an open variant.
const BIG_CHEST: u16 = 0xFB1;

/// One column-major block, drawn only when the payload fills it.
fn single(ctx: &mut DrawContext<'_>, width: i32, height: i32) {
    #[allow(clippy::cast_sign_loss)]
    let needed = (width * height) as usize;
    if ctx.has_tiles(needed) {
        ctx.block_column_major(0, 0, width, height, 0);
    }
}

pub fn bed_4x5(ctx: &mut DrawContext<'_>) {
    single(ctx, 4, 5);
}

pub fn rightwards_3x6(ctx: &mut DrawContext<'_>) {
    single(ctx, 3, 6);
}

pub fn utility_6x3(ctx: &mut DrawContext<'_>) {
    single(ctx, 6, 3);
}

pub fn utility_3x5(ctx: &mut DrawContext<'_>) {
    single(ctx, 3, 5);
}

pub fn vertical_turtle_rock_pipe(ctx: &mut DrawContext<'_>) {
    single(ctx, 2, 6);
}

pub fn horizontal_turtle_rock_pipe(ctx: &mut DrawContext<'_>) {
    single(ctx, 6, 2);
}

pub fn light_beam(ctx: &mut DrawContext<'_>) {
    single(ctx, 2, 4);
}

pub fn big_light_beam(ctx: &mut DrawContext<'_>) {
    single(ctx, 4, 8);
}

pub fn boss_shell_4x4(ctx: &mut DrawContext<'_>) {
    single(ctx, 4, 4);
}

pub fn solid_wall_decor_3x4(ctx: &mut DrawContext<'_>) {
    single(ctx, 3, 4);
}

pub fn archery_game_target_door(ctx: &mut DrawContext<'_>) {
    single(ctx, 2, 3);
}

pub fn ganon_triforce_floor_decor(ctx: &mut DrawContext<'_>) {
    single(ctx, 4, 8);
}

pub fn single_2x2(ctx: &mut DrawContext<'_>) {
    single(ctx, 2, 2);
}

pub fn single_4x4(ctx: &mut DrawContext<'_>) {
    single(ctx, 4, 4);
}

/// 4x3 block. The big chest swaps to the next twelve tiles once opened.
pub fn single_4x3(ctx: &mut DrawContext<'_>) {
    let opened = ctx.object.id == BIG_CHEST
        && ctx
            .state
            .is_some_and(|state| state.is_big_chest_open(ctx.room_id));
    if opened && ctx.has_tiles(24) {
        ctx.block_column_major(0, 0, 4, 3, 12);
    } else {
        single(ctx, 4, 3);
    }
}

/// Nine 2x2 rupee clusters, three per row, one tile apart.
pub fn rupee_floor(ctx: &mut DrawContext<'_>) {
    if !ctx.has_tiles(4) {
        return;
    }
    let active = ctx
        .state
        .is_some_and(|state| state.is_rupee_floor_active(ctx.room_id));
    let first = if active && ctx.has_tiles(8) { 4 } else { 0 };
    for row in 0..3 {
        for col in 0..3 {
            ctx.block_column_major(col * 3, row * 3, 2, 2, first);
        }
    }
}

/// 4x4 block laid out row by row.
pub fn actual_4x4(ctx: &mut DrawContext<'_>) {
    if ctx.has_tiles(16) {
        ctx.block_row_major(0, 0, 4, 4, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::state::RoomState;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixtures_ignore_size() {
        let small = run(bed_4x5, 0x122, 0, 0, 0, &numbered_tiles(20), None);
        let big = run(bed_4x5, 0x122, 0, 0, 0xFF, &numbered_tiles(20), None);
        assert_eq!(small.writes, big.writes);
        assert_eq!(small.extent(), (0, 0, 4, 5));
    }

    #[test]
    fn short_payload_draws_nothing() {
        let recorder = run(utility_6x3, 0x12D, 0, 0, 0, &numbered_tiles(17), None);
        assert!(recorder.writes.is_empty());
    }

    #[test]
    fn pipes_are_transposed() {
        let vertical = run(vertical_turtle_rock_pipe, 0x12F, 0, 0, 0, &numbered_tiles(12), None);
        let horizontal = run(horizontal_turtle_rock_pipe, 0x130, 0, 0, 0, &numbered_tiles(12), None);
        assert_eq!(vertical.extent(), (0, 0, 2, 6));
        assert_eq!(horizontal.extent(), (0, 0, 6, 2));
    }

    #[test]
    fn big_chest_opens() {
        let tiles = numbered_tiles(24);
        let mut state = RoomState::new(0);
        state.big_chest_open = true;

        let opened = run(single_4x3, BIG_CHEST, 0, 0, 0, &tiles, Some(&state));
        assert_eq!(opened.writes[0].2, 12);

        // Other 4x3 fixtures ignore the flag.
        let other = run(single_4x3, 0xFB3, 0, 0, 0, &tiles, Some(&state));
        assert_eq!(other.writes[0].2, 0);
    }

    #[test]
    fn rupee_floor_grid() {
        let mut state = RoomState::new(0);
        let idle = run(rupee_floor, 0x127, 0, 0, 0, &numbered_tiles(8), Some(&state));
        assert_eq!(idle.extent(), (0, 0, 8, 8));
        assert_eq!(idle.cells.len(), 36);
        assert_eq!(idle.cells[&(0, 0)], 0);

        state.rupee_floor_active = true;
        let active = run(rupee_floor, 0x127, 0, 0, 0, &numbered_tiles(8), Some(&state));
        assert_eq!(active.cells[&(0, 0)], 4);
    }

    #[test]
    fn actual_4x4_is_row_major() {
        let recorder = run(actual_4x4, 0xFE6, 0, 0, 0, &numbered_tiles(16), None);
        assert_eq!(recorder.cells[&(1, 0)], 1);
        assert_eq!(recorder.cells[&(0, 1)], 4);
    }
}
