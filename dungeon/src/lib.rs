#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
mod bitwise;

pub mod config;
pub mod dimension_service;
pub mod dimensions;
pub mod door;
pub mod drawer;
pub mod error;
pub mod geometry;
pub mod rom;
pub mod room_object;
pub mod router;

#[allow(clippy::module_name_repetitions)]
pub mod routines;
pub mod state;

#[allow(clippy::cast_possible_truncation)]
pub mod tile;

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
pub mod tile_buffer;

pub use config::RenderConfig;
pub use dimension_service::{DimensionService, DimensionSource, ObjectExtent};
pub use dimensions::{ObjectDimensionTable, SelectionBounds};
pub use door::{DoorBounds, DoorDef, DoorDirection, DoorType};
pub use drawer::{ObjectDrawer, TileTrace};
pub use error::RenderError;
pub use geometry::{GeometryBounds, ObjectGeometry, TileRect};
pub use rom::Rom;
pub use room_object::{Layer, RoomObject, TileSource, TileTable};
pub use router::{Catalog, ObjectRouter};
pub use state::{GameState, RoomState};
pub use tile::{PaletteGroup, TileDescriptor, TileSheet};
pub use tile_buffer::TileBuffer;
