use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Yes/no questions some routines ask about the running game.
///
/// Every answer defaults to the closed, untouched variant, which is also
/// what gets drawn when no state is supplied at all.
pub trait GameState {
    fn is_chest_open(&self, _room_id: u16, _chest_index: usize) -> bool {
        false
    }

    fn is_big_chest_open(&self, _room_id: u16) -> bool {
        false
    }

    fn is_door_open(&self, _room_id: u16, _door_index: usize) -> bool {
        false
    }

    fn is_door_switch_active(&self, _room_id: u16) -> bool {
        false
    }

    fn is_wall_moved(&self, _room_id: u16) -> bool {
        false
    }

    fn is_floor_bombable(&self, _room_id: u16) -> bool {
        false
    }

    fn is_rupee_floor_active(&self, _room_id: u16) -> bool {
        false
    }

    fn is_crystal_switch_blue(&self) -> bool {
        false
    }
}

/// Flags for a single room, as loaded from a scene file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomState {
    pub room_id: u16,
    pub open_chests: HashSet<usize>,
    pub big_chest_open: bool,
    pub open_doors: HashSet<usize>,
    pub door_switch_active: bool,
    pub wall_moved: bool,
    pub floor_bombable: bool,
    pub rupee_floor_active: bool,
    pub crystal_switch_blue: bool,
}

impl RoomState {
    #[must_use]
    pub fn new(room_id: u16) -> Self {
        Self {
            room_id,
            ..Self::default()
        }
    }

    fn is_room(&self, room_id: u16) -> bool {
        self.room_id == room_id
    }
}

impl GameState for RoomState {
    fn is_chest_open(&self, room_id: u16, chest_index: usize) -> bool {
        self.is_room(room_id) && self.open_chests.contains(&chest_index)
    }

    fn is_big_chest_open(&self, room_id: u16) -> bool {
        self.is_room(room_id) && self.big_chest_open
    }

    fn is_door_open(&self, room_id: u16, door_index: usize) -> bool {
        self.is_room(room_id) && self.open_doors.contains(&door_index)
    }

    fn is_door_switch_active(&self, room_id: u16) -> bool {
        self.is_room(room_id) && self.door_switch_active
    }

    fn is_wall_moved(&self, room_id: u16) -> bool {
        self.is_room(room_id) && self.wall_moved
    }

    fn is_floor_bombable(&self, room_id: u16) -> bool {
        self.is_room(room_id) && self.floor_bombable
    }

    fn is_rupee_floor_active(&self, room_id: u16) -> bool {
        self.is_room(room_id) && self.rupee_floor_active
    }

    fn is_crystal_switch_blue(&self) -> bool {
        self.crystal_switch_blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Untouched;
    impl GameState for Untouched {}

    #[test]
    fn defaults_are_closed() {
        let state = Untouched;
        assert!(!state.is_chest_open(0, 0));
        assert!(!state.is_door_open(0, 0));
        assert!(!state.is_crystal_switch_blue());
    }

    #[test]
    fn room_state_answers_only_for_its_room() {
        let mut state = RoomState::new(0x42);
        state.open_doors.insert(0);
        state.open_chests.insert(2);

        assert!(state.is_door_open(0x42, 0));
        assert!(!state.is_door_open(0x43, 0));
        assert!(!state.is_door_open(0x42, 1));
        assert!(state.is_chest_open(0x42, 2));
        assert!(!state.is_chest_open(0x42, 0));
    }
}
