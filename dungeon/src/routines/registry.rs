use super::{
    RoutineCategory, RoutineFn, RoutineId, RoutineInfo, corner, diagonal, downwards, fixtures,
    ids, rightwards, special,
};

/// Highest routine id plus one.
const ROUTINE_SLOTS: usize = ids::CUSTOM_OBJECT as usize + 1;

impl RoutineInfo {
    const fn new(
        id: RoutineId,
        name: &'static str,
        category: RoutineCategory,
        function: RoutineFn,
        base_width: u8,
        base_height: u8,
    ) -> Self {
        Self {
            id,
            name,
            category,
            function,
            draws_to_both_bgs: false,
            masks_bg1: false,
            base_width,
            base_height,
        }
    }

    const fn both_bgs(mut self) -> Self {
        self.draws_to_both_bgs = true;
        self
    }

    const fn masking(mut self) -> Self {
        self.masks_bg1 = true;
        self
    }
}

/// Every placement routine, indexed by routine id.
///
/// Built once and never mutated afterwards, so the drawer and the geometry
/// engine can share one instance.
#[derive(Debug, Clone)]
pub struct RoutineRegistry {
    routines: Vec<Option<RoutineInfo>>,
}

impl Default for RoutineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutineRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut routines = vec![None; ROUTINE_SLOTS];
        for info in catalogue() {
            let slot = usize::from(info.id);
            debug_assert!(routines[slot].is_none(), "routine {} registered twice", info.id);
            routines[slot] = Some(info);
        }
        tracing::debug!("registered {} draw routines", routines.iter().flatten().count());
        Self { routines }
    }

    #[must_use]
    pub fn get(&self, id: RoutineId) -> Option<&RoutineInfo> {
        self.routines.get(usize::from(id)).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn draws_to_both_bgs(&self, id: RoutineId) -> bool {
        self.get(id).is_some_and(|info| info.draws_to_both_bgs)
    }

    #[must_use]
    pub fn masks_bg1(&self, id: RoutineId) -> bool {
        self.get(id).is_some_and(|info| info.masks_bg1)
    }

    /// Footprint of one repeat, `None` for unknown routines.
    #[must_use]
    pub fn base_dimensions(&self, id: RoutineId) -> Option<(u8, u8)> {
        self.get(id).map(|info| (info.base_width, info.base_height))
    }

    /// Number of registered routines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routines.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoutineInfo> {
        self.routines.iter().flatten()
    }
}

#[allow(clippy::too_many_lines)]
fn catalogue() -> Vec<RoutineInfo> {
    use RoutineCategory::{Corner, Diagonal, Downwards, Fixture, Rightwards, Special, SuperSquare};
    use ids::*;

    vec![
        // Rightwards
        RoutineInfo::new(RIGHTWARDS_2X2_1TO15_OR_32, "Rightwards2x2_1to15or32", Rightwards, rightwards::rightwards_2x2_1to15_or_32, 2, 2),
        RoutineInfo::new(RIGHTWARDS_2X4_1TO15_OR_26, "Rightwards2x4_1to15or26", Rightwards, rightwards::rightwards_2x4_1to15_or_26, 2, 4),
        RoutineInfo::new(RIGHTWARDS_2X4_1TO16, "Rightwards2x4_1to16", Rightwards, rightwards::rightwards_2x4_1to16, 2, 4),
        RoutineInfo::new(RIGHTWARDS_2X4_1TO16_BOTH_BG, "Rightwards2x4_1to16_BothBG", Rightwards, rightwards::rightwards_2x4_1to16, 2, 4).both_bgs(),
        RoutineInfo::new(RIGHTWARDS_2X2_1TO16, "Rightwards2x2_1to16", Rightwards, rightwards::rightwards_2x2_1to16, 2, 2),
        RoutineInfo::new(RIGHTWARDS_1X2_PLUS2, "Rightwards1x2_1to16_plus2", Rightwards, rightwards::rightwards_1x2_plus2, 1, 2),
        RoutineInfo::new(RIGHTWARDS_HAS_EDGE_1X1_PLUS3, "RightwardsHasEdge1x1_1to16_plus3", Rightwards, rightwards::rightwards_has_edge_1x1_plus3, 1, 1),
        RoutineInfo::new(RIGHTWARDS_HAS_EDGE_1X1_PLUS2, "RightwardsHasEdge1x1_1to16_plus2", Rightwards, rightwards::rightwards_has_edge_1x1_plus2, 1, 1),
        RoutineInfo::new(RIGHTWARDS_TOP_CORNERS_1X2_PLUS13, "RightwardsTopCorners1x2_1to16_plus13", Rightwards, rightwards::rightwards_top_corners_1x2_plus13, 1, 2),
        RoutineInfo::new(RIGHTWARDS_BOTTOM_CORNERS_1X2_PLUS13, "RightwardsBottomCorners1x2_1to16_plus13", Rightwards, rightwards::rightwards_bottom_corners_1x2_plus13, 1, 2),
        RoutineInfo::new(RIGHTWARDS_1X1_SOLID_PLUS3, "Rightwards1x1Solid_1to16_plus3", Rightwards, rightwards::rightwards_1x1_solid_plus3, 1, 1),
        RoutineInfo::new(RIGHTWARDS_4X4_1TO16, "Rightwards4x4_1to16", Rightwards, rightwards::rightwards_4x4_1to16, 4, 4),
        RoutineInfo::new(RIGHTWARDS_DECOR_4X4_SPACED2, "RightwardsDecor4x4spaced2_1to16", Rightwards, rightwards::rightwards_decor_4x4_spaced2, 4, 4),
        RoutineInfo::new(RIGHTWARDS_STATUE_2X3_SPACED2, "RightwardsStatue2x3spaced2_1to16", Rightwards, rightwards::rightwards_statue_2x3_spaced2, 2, 3),
        RoutineInfo::new(RIGHTWARDS_PILLAR_2X4_SPACED4, "RightwardsPillar2x4spaced4_1to16", Rightwards, rightwards::rightwards_pillar_2x4_spaced4, 2, 4),
        RoutineInfo::new(RIGHTWARDS_DECOR_4X3_SPACED4, "RightwardsDecor4x3spaced4_1to16", Rightwards, rightwards::rightwards_decor_4x3_spaced4, 4, 3),
        RoutineInfo::new(RIGHTWARDS_DOUBLED_2X2_SPACED2, "RightwardsDoubled2x2spaced2_1to16", Rightwards, rightwards::rightwards_doubled_2x2_spaced2, 2, 2),
        RoutineInfo::new(RIGHTWARDS_DECOR_2X2_SPACED12, "RightwardsDecor2x2spaced12_1to16", Rightwards, rightwards::rightwards_decor_2x2_spaced12, 2, 2),
        RoutineInfo::new(RIGHTWARDS_4X2_1TO16, "Rightwards4x2_1to16", Rightwards, rightwards::rightwards_4x2_1to16, 4, 2),
        RoutineInfo::new(RIGHTWARDS_DECOR_4X2_SPACED8, "RightwardsDecor4x2spaced8_1to16", Rightwards, rightwards::rightwards_decor_4x2_spaced8, 4, 2),
        RoutineInfo::new(RIGHTWARDS_CANNON_HOLE_4X3, "RightwardsCannonHole4x3_1to16", Rightwards, rightwards::rightwards_cannon_hole_4x3, 4, 3),
        RoutineInfo::new(RIGHTWARDS_LINE_1X1_PLUS1, "RightwardsLine1x1_1to16plus1", Rightwards, rightwards::rightwards_line_1x1_plus1, 1, 1),
        RoutineInfo::new(RIGHTWARDS_BAR_4X3, "RightwardsBar4x3_1to16", Rightwards, rightwards::rightwards_bar_4x3, 4, 3),
        RoutineInfo::new(RIGHTWARDS_SHELF_4X4, "RightwardsShelf4x4_1to16", Rightwards, rightwards::rightwards_shelf_4x4, 4, 4),
        RoutineInfo::new(RIGHTWARDS_BIG_RAIL_1X3_PLUS5, "RightwardsBigRail1x3_1to16plus5", Rightwards, rightwards::rightwards_big_rail_1x3_plus5, 1, 3),
        RoutineInfo::new(RIGHTWARDS_BLOCK_2X2_SPACED2, "RightwardsBlock2x2spaced2_1to16", Rightwards, rightwards::rightwards_block_2x2_spaced2, 2, 2),
        RoutineInfo::new(RIGHTWARDS_EDGE_1X1_PLUS7, "RightwardsEdge1x1_1to16plus7", Rightwards, rightwards::rightwards_edge_1x1_plus7, 1, 1),
        RoutineInfo::new(RIGHTWARDS_POTS_2X2, "RightwardsPots2x2_1to16", Rightwards, rightwards::rightwards_pots_2x2, 2, 2),
        RoutineInfo::new(RIGHTWARDS_HAMMER_PEGS_2X2, "RightwardsHammerPegs2x2_1to16", Rightwards, rightwards::rightwards_hammer_pegs_2x2, 2, 2),
        RoutineInfo::new(RIGHTWARDS_HAS_EDGE_1X1_PLUS23, "RightwardsHasEdge1x1_1to16_plus23", Rightwards, rightwards::rightwards_has_edge_1x1_plus23, 23, 1),
        RoutineInfo::new(WATERFALL_47, "Waterfall47", Rightwards, rightwards::waterfall_47, 0, 0),
        RoutineInfo::new(WATERFALL_48, "Waterfall48", Rightwards, rightwards::waterfall_48, 0, 0),
        // Downwards
        RoutineInfo::new(DOWNWARDS_2X2_1TO15_OR_32, "Downwards2x2_1to15or32", Downwards, downwards::downwards_2x2_1to15_or_32, 2, 2),
        RoutineInfo::new(DOWNWARDS_4X2_1TO15_OR_26, "Downwards4x2_1to15or26", Downwards, downwards::downwards_4x2_1to15_or_26, 4, 2),
        RoutineInfo::new(DOWNWARDS_4X2_1TO16_BOTH_BG, "Downwards4x2_1to16_BothBG", Downwards, downwards::downwards_4x2_1to15_or_26, 4, 2).both_bgs(),
        RoutineInfo::new(DOWNWARDS_DECOR_4X2_SPACED4, "DownwardsDecor4x2spaced4_1to16", Downwards, downwards::downwards_decor_4x2_spaced4, 4, 2),
        RoutineInfo::new(DOWNWARDS_2X2_1TO16, "Downwards2x2_1to16", Downwards, downwards::downwards_2x2_1to16, 2, 2),
        RoutineInfo::new(DOWNWARDS_HAS_EDGE_1X1_PLUS3, "DownwardsHasEdge1x1_1to16_plus3", Downwards, downwards::downwards_has_edge_1x1_plus3, 1, 1),
        RoutineInfo::new(DOWNWARDS_EDGE_1X1, "DownwardsEdge1x1_1to16", Downwards, downwards::downwards_edge_1x1, 1, 1),
        RoutineInfo::new(DOWNWARDS_LEFT_CORNERS_2X1_PLUS12, "DownwardsLeftCorners2x1_1to16_plus12", Downwards, downwards::downwards_corners_2x1_plus12, 2, 1),
        RoutineInfo::new(DOWNWARDS_RIGHT_CORNERS_2X1_PLUS12, "DownwardsRightCorners2x1_1to16_plus12", Downwards, downwards::downwards_corners_2x1_plus12, 2, 1),
        RoutineInfo::new(DOWNWARDS_FLOOR_4X4, "DownwardsFloor4x4_1to16", Downwards, downwards::downwards_floor_4x4, 4, 4),
        RoutineInfo::new(DOWNWARDS_1X1_SOLID_PLUS3, "Downwards1x1Solid_1to16_plus3", Downwards, downwards::downwards_1x1_solid_plus3, 1, 1),
        RoutineInfo::new(DOWNWARDS_DECOR_4X4_SPACED2, "DownwardsDecor4x4spaced2_1to16", Downwards, downwards::downwards_decor_4x4_spaced2, 4, 4),
        RoutineInfo::new(DOWNWARDS_PILLAR_2X4_SPACED2, "DownwardsPillar2x4spaced2_1to16", Downwards, downwards::downwards_pillar_2x4_spaced2, 2, 4),
        RoutineInfo::new(DOWNWARDS_DECOR_3X4_SPACED4, "DownwardsDecor3x4spaced4_1to16", Downwards, downwards::downwards_decor_3x4_spaced4, 3, 4),
        RoutineInfo::new(DOWNWARDS_DECOR_2X2_SPACED12, "DownwardsDecor2x2spaced12_1to16", Downwards, downwards::downwards_decor_2x2_spaced12, 2, 2),
        RoutineInfo::new(DOWNWARDS_LINE_1X1_PLUS1, "DownwardsLine1x1_1to16plus1", Downwards, downwards::downwards_line_1x1_plus1, 1, 1),
        RoutineInfo::new(DOWNWARDS_DECOR_2X4_SPACED8, "DownwardsDecor2x4spaced8_1to16", Downwards, downwards::downwards_decor_2x4_spaced8, 2, 4),
        RoutineInfo::new(DOWNWARDS_DECOR_3X4_SPACED2, "DownwardsDecor3x4spaced2_1to16", Downwards, downwards::downwards_decor_3x4_spaced2, 3, 4),
        RoutineInfo::new(DOWNWARDS_BIG_RAIL_3X1_PLUS5, "DownwardsBigRail3x1_1to16plus5", Downwards, downwards::downwards_big_rail_3x1_plus5, 3, 1),
        RoutineInfo::new(DOWNWARDS_BLOCK_2X2_SPACED2, "DownwardsBlock2x2spaced2_1to16", Downwards, downwards::downwards_block_2x2_spaced2, 2, 2),
        RoutineInfo::new(DOWNWARDS_CANNON_HOLE_3X6, "DownwardsCannonHole3x6_1to16", Downwards, downwards::downwards_cannon_hole_3x6, 3, 6),
        RoutineInfo::new(DOWNWARDS_BAR_2X3, "DownwardsBar2x3_1to16", Downwards, downwards::downwards_bar_2x3, 2, 3),
        RoutineInfo::new(DOWNWARDS_POTS_2X2, "DownwardsPots2x2_1to16", Downwards, downwards::downwards_pots_2x2, 2, 2),
        RoutineInfo::new(DOWNWARDS_HAMMER_PEGS_2X2, "DownwardsHammerPegs2x2_1to16", Downwards, downwards::downwards_hammer_pegs_2x2, 2, 2),
        RoutineInfo::new(DOWNWARDS_HAS_EDGE_1X1_PLUS23, "DownwardsHasEdge1x1_1to16_plus23", Downwards, downwards::downwards_has_edge_1x1_plus23, 1, 23),
        // Diagonals
        RoutineInfo::new(DIAGONAL_ACUTE_1TO16, "DiagonalAcute_1to16", Diagonal, diagonal::diagonal_acute_1to16, 0, 0),
        RoutineInfo::new(DIAGONAL_GRAVE_1TO16, "DiagonalGrave_1to16", Diagonal, diagonal::diagonal_grave_1to16, 0, 0),
        RoutineInfo::new(DIAGONAL_ACUTE_BOTH_BG, "DiagonalAcute_1to16_BothBG", Diagonal, diagonal::diagonal_acute_both_bg, 0, 0).both_bgs(),
        RoutineInfo::new(DIAGONAL_GRAVE_BOTH_BG, "DiagonalGrave_1to16_BothBG", Diagonal, diagonal::diagonal_grave_both_bg, 0, 0).both_bgs(),
        RoutineInfo::new(DIAGONAL_CEILING_TOP_LEFT, "DiagonalCeilingTopLeft", Diagonal, diagonal::diagonal_ceiling_top_left, 0, 0),
        RoutineInfo::new(DIAGONAL_CEILING_BOTTOM_LEFT, "DiagonalCeilingBottomLeft", Diagonal, diagonal::diagonal_ceiling_bottom_left, 0, 0),
        RoutineInfo::new(DIAGONAL_CEILING_TOP_RIGHT, "DiagonalCeilingTopRight", Diagonal, diagonal::diagonal_ceiling_top_right, 0, 0),
        RoutineInfo::new(DIAGONAL_CEILING_BOTTOM_RIGHT, "DiagonalCeilingBottomRight", Diagonal, diagonal::diagonal_ceiling_bottom_right, 0, 0),
        // Corners
        RoutineInfo::new(CORNER_4X4_BOTH_BG, "Corner4x4_BothBG", Corner, corner::corner_4x4_both_bg, 4, 4).both_bgs(),
        RoutineInfo::new(WEIRD_CORNER_BOTTOM_BOTH_BG, "WeirdCornerBottom_BothBG", Corner, corner::weird_corner_bottom_both_bg, 4, 3).both_bgs(),
        RoutineInfo::new(WEIRD_CORNER_TOP_BOTH_BG, "WeirdCornerTop_BothBG", Corner, corner::weird_corner_top_both_bg, 3, 4).both_bgs(),
        // Super squares
        RoutineInfo::new(BLOCKS_4X4_IN_SUPER_SQUARE, "4x4BlocksIn4x4SuperSquare", SuperSquare, special::blocks_4x4_in_super_square, 0, 0).masking(),
        RoutineInfo::new(FLOOR_3X3_IN_SUPER_SQUARE, "3x3FloorIn4x4SuperSquare", SuperSquare, special::floor_3x3_in_super_square, 0, 0).masking(),
        RoutineInfo::new(FLOOR_4X4_IN_SUPER_SQUARE, "4x4FloorIn4x4SuperSquare", SuperSquare, special::floor_4x4_in_super_square, 0, 0).masking(),
        RoutineInfo::new(FLOOR_4X4_ONE_IN_SUPER_SQUARE, "4x4FloorOneIn4x4SuperSquare", SuperSquare, special::floor_4x4_one_in_super_square, 0, 0).masking(),
        RoutineInfo::new(FLOOR_4X4_TWO_IN_SUPER_SQUARE, "4x4FloorTwoIn4x4SuperSquare", SuperSquare, special::floor_4x4_two_in_super_square, 0, 0).masking(),
        RoutineInfo::new(BIG_HOLE_4X4, "BigHole4x4_1to16", SuperSquare, special::big_hole_4x4, 0, 0).masking(),
        RoutineInfo::new(SPIKE_2X2_IN_SUPER_SQUARE, "Spike2x2In4x4SuperSquare", SuperSquare, special::spike_2x2_in_super_square, 0, 0),
        RoutineInfo::new(TABLE_ROCK_4X4, "TableRock4x4_1to16", SuperSquare, special::table_rock_4x4, 0, 0),
        RoutineInfo::new(WATER_OVERLAY_8X8, "WaterOverlay8x8_1to16", SuperSquare, special::water_overlay_8x8, 0, 0).masking(),
        // Special
        RoutineInfo::new(DOOR_SWITCHER, "DoorSwitcherer", Special, special::door_switcher, 1, 1),
        RoutineInfo::new(SOMARIA_LINE, "SomariaLine", Special, special::somaria_line, 0, 0),
        RoutineInfo::new(WATER_FACE, "WaterFace", Special, special::water_face, 2, 2),
        RoutineInfo::new(NOTHING, "Nothing", Special, special::nothing, 0, 0),
        RoutineInfo::new(CHEST, "Chest", Special, special::chest, 2, 2),
        RoutineInfo::new(CLOSED_CHEST_PLATFORM, "ClosedChestPlatform", Special, special::closed_chest_platform, 0, 0),
        RoutineInfo::new(MOVING_WALL_WEST, "MovingWallWest", Special, special::moving_wall, 0, 0),
        RoutineInfo::new(MOVING_WALL_EAST, "MovingWallEast", Special, special::moving_wall, 0, 0),
        RoutineInfo::new(OPEN_CHEST_PLATFORM, "OpenChestPlatform", Special, special::open_chest_platform, 0, 0),
        RoutineInfo::new(INTER_ROOM_FAT_STAIRS_UP, "InterRoomFatStairsUp", Special, special::stairs_4x4, 4, 4),
        RoutineInfo::new(INTER_ROOM_FAT_STAIRS_DOWN_A, "InterRoomFatStairsDownA", Special, special::stairs_4x4, 4, 4),
        RoutineInfo::new(INTER_ROOM_FAT_STAIRS_DOWN_B, "InterRoomFatStairsDownB", Special, special::stairs_4x4, 4, 4),
        RoutineInfo::new(AUTO_STAIRS, "AutoStairs", Special, special::stairs_4x4, 4, 4),
        RoutineInfo::new(STRAIGHT_INTER_ROOM_STAIRS, "StraightInterRoomStairs", Special, special::stairs_4x4, 4, 4),
        RoutineInfo::new(SPIRAL_STAIRS_GOING_UP_UPPER, "SpiralStairsGoingUpUpper", Special, special::spiral_stairs, 4, 3),
        RoutineInfo::new(SPIRAL_STAIRS_GOING_DOWN_UPPER, "SpiralStairsGoingDownUpper", Special, special::spiral_stairs, 4, 3),
        RoutineInfo::new(SPIRAL_STAIRS_GOING_UP_LOWER, "SpiralStairsGoingUpLower", Special, special::spiral_stairs, 4, 3),
        RoutineInfo::new(SPIRAL_STAIRS_GOING_DOWN_LOWER, "SpiralStairsGoingDownLower", Special, special::spiral_stairs, 4, 3),
        RoutineInfo::new(BIG_KEY_LOCK, "BigKeyLock", Special, special::big_key_lock, 2, 2),
        RoutineInfo::new(BOMBABLE_FLOOR, "BombableFloor", Special, special::bombable_floor, 2, 2),
        RoutineInfo::new(EMPTY_WATER_FACE, "EmptyWaterFace", Special, special::water_face, 2, 2),
        RoutineInfo::new(SPITTING_WATER_FACE, "SpittingWaterFace", Special, special::water_face, 2, 2),
        RoutineInfo::new(DRENCHING_WATER_FACE, "DrenchingWaterFace", Special, special::water_face, 2, 2),
        RoutineInfo::new(PRISON_CELL, "PrisonCell", Special, special::prison_cell, 10, 4).both_bgs(),
        RoutineInfo::new(CUSTOM_OBJECT, "CustomObject", Special, special::custom_object, 1, 1),
        // Fixtures
        RoutineInfo::new(BED_4X5, "Bed4x5", Fixture, fixtures::bed_4x5, 4, 5),
        RoutineInfo::new(RIGHTWARDS_3X6, "Rightwards3x6", Fixture, fixtures::rightwards_3x6, 3, 6),
        RoutineInfo::new(UTILITY_6X3, "Utility6x3", Fixture, fixtures::utility_6x3, 6, 3),
        RoutineInfo::new(UTILITY_3X5, "Utility3x5", Fixture, fixtures::utility_3x5, 3, 5),
        RoutineInfo::new(VERTICAL_TURTLE_ROCK_PIPE, "VerticalTurtleRockPipe", Fixture, fixtures::vertical_turtle_rock_pipe, 2, 6),
        RoutineInfo::new(HORIZONTAL_TURTLE_ROCK_PIPE, "HorizontalTurtleRockPipe", Fixture, fixtures::horizontal_turtle_rock_pipe, 6, 2),
        RoutineInfo::new(LIGHT_BEAM, "LightBeamOnFloor", Fixture, fixtures::light_beam, 2, 4),
        RoutineInfo::new(BIG_LIGHT_BEAM, "BigLightBeamOnFloor", Fixture, fixtures::big_light_beam, 4, 8),
        RoutineInfo::new(BOSS_SHELL_4X4, "BossShell4x4", Fixture, fixtures::boss_shell_4x4, 4, 4),
        RoutineInfo::new(SOLID_WALL_DECOR_3X4, "SolidWallDecor3x4", Fixture, fixtures::solid_wall_decor_3x4, 3, 4),
        RoutineInfo::new(ARCHERY_GAME_TARGET_DOOR, "ArcheryGameTargetDoor", Fixture, fixtures::archery_game_target_door, 2, 3),
        RoutineInfo::new(GANON_TRIFORCE_FLOOR_DECOR, "GanonTriforceFloorDecor", Fixture, fixtures::ganon_triforce_floor_decor, 4, 8),
        RoutineInfo::new(SINGLE_2X2, "Single2x2", Fixture, fixtures::single_2x2, 2, 2),
        RoutineInfo::new(SINGLE_4X4, "Single4x4", Fixture, fixtures::single_4x4, 4, 4),
        RoutineInfo::new(SINGLE_4X3, "Single4x3", Fixture, fixtures::single_4x3, 4, 3),
        RoutineInfo::new(RUPEE_FLOOR, "RupeeFloor", Fixture, fixtures::rupee_floor, 8, 8),
        RoutineInfo::new(ACTUAL_4X4, "Actual4x4", Fixture, fixtures::actual_4x4, 4, 4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_match_slots() {
        let registry = RoutineRegistry::new();
        for info in registry.iter() {
            assert_eq!(registry.get(info.id).map(|found| found.name), Some(info.name));
        }
        assert_eq!(registry.len(), 119);
    }

    #[test]
    fn unregistered_ids() {
        let registry = RoutineRegistry::new();
        assert!(registry.get(19).is_none());
        assert!(registry.get(119).is_none());
        assert!(registry.get(500).is_none());
        assert!(!registry.draws_to_both_bgs(500));
    }

    #[test]
    fn both_bg_routines() {
        let registry = RoutineRegistry::new();
        let mut both: Vec<RoutineId> = registry
            .iter()
            .filter(|info| info.draws_to_both_bgs)
            .map(|info| info.id)
            .collect();
        both.sort_unstable();
        assert_eq!(both, vec![3, 9, 17, 18, 35, 36, 37, 97]);
    }

    #[test]
    fn masking_routines() {
        let registry = RoutineRegistry::new();
        for id in [56, 57, 58, 59, 60, 61, 64] {
            assert!(registry.masks_bg1(id), "routine {id}");
        }
        assert!(!registry.masks_bg1(ids::CHEST));
        assert_eq!(registry.base_dimensions(ids::PRISON_CELL), Some((10, 4)));
    }
}
