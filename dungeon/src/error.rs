use thiserror::Error;

/// Failures that abort a whole draw, load or measurement call.
///
/// Unknown object ids, empty tile lists and writes outside the tile map are
/// not errors: they resolve to no-ops.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    #[error("no graphics sheet attached to the drawer")]
    MissingGraphics,

    #[error("{0} buffer has no pixel planes")]
    UninitializedBuffer(&'static str),

    #[error("ROM not loaded")]
    RomNotLoaded,

    #[error("ROM read out of range at 0x{address:06X} (size 0x{size:06X})")]
    RomOutOfRange { address: usize, size: usize },

    #[error("tile source failed for object 0x{object_id:03X}: {reason}")]
    TileSource { object_id: u16, reason: String },
}
