//! Paints room objects into a pair of background layers.
//!
//! Each object is resolved to its routine, the routine is replayed through a
//! [`LayerWriter`] that rasterizes every placed tile, and the result is
//! post-processed: BG2 floors and pits punch a transparent hole into BG1,
//! and routines flagged for both layers are replayed once per layer.

use crate::door::DoorDef;
use crate::error::RenderError;
use crate::rom::Rom;
use crate::room_object::{Layer, RoomObject, TileSource};
use crate::router::Catalog;
use crate::routines::{DrawContext, RoutineFn, TileCanvas, ids};
use crate::state::GameState;
use crate::tile::{PaletteGroup, TileDescriptor, TileSheet};
use crate::tile_buffer::{TileBuffer, Transparency};

/// Start of the shared 2x2 object tile data in the ROM.
pub const ROOM_DRAW_OBJECT_DATA: usize = 0x1B52;

/// Offsets into [`ROOM_DRAW_OBJECT_DATA`].
pub const PUSHABLE_BLOCK: u16 = 0x0E52;
pub const TORCH_UNLIT: u16 = 0x0EC2;
pub const TORCH_LIT: u16 = 0x0ECA;

/// One tile placed by a routine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TileTrace {
    pub object_id: u16,
    pub size: u8,
    pub layer: u8,
    pub x_tile: i16,
    pub y_tile: i16,
    pub tile_id: u16,
    pub flags: u8,
}

impl TileTrace {
    pub const H_MIRROR: u8 = 1 << 0;
    pub const V_MIRROR: u8 = 1 << 1;
    pub const PRIORITY: u8 = 1 << 2;

    #[allow(clippy::cast_possible_truncation)]
    fn new(object: &RoomObject, layer: Layer, x: i32, y: i32, tile: TileDescriptor) -> Self {
        let mut flags = 0;
        if tile.h_mirror {
            flags |= Self::H_MIRROR;
        }
        if tile.v_mirror {
            flags |= Self::V_MIRROR;
        }
        if tile.priority {
            flags |= Self::PRIORITY;
        }

        Self {
            object_id: object.id,
            size: object.size,
            layer: u8::from(layer),
            x_tile: x as i16,
            y_tile: y as i16,
            tile_id: tile.id,
            flags,
        }
    }
}

/// Canvas handed to routines while drawing for real.
struct LayerWriter<'b> {
    buffer: &'b mut TileBuffer,
    /// `None` in trace-only mode: nothing reaches the buffer.
    sheet: Option<TileSheet<'b>>,
    trace: Option<&'b mut Vec<TileTrace>>,
    object: &'b RoomObject,
    layer: Layer,
    written: Vec<(i32, i32)>,
}

impl TileCanvas for LayerWriter<'_> {
    fn put_tile(&mut self, x: i32, y: i32, tile: TileDescriptor) {
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(TileTrace::new(self.object, self.layer, x, y, tile));
        }
        if let Some(sheet) = self.sheet {
            self.buffer.set_tile_at(x, y, tile.to_word());
            self.buffer
                .draw_tile_pixels(x, y, tile, sheet, Transparency::Clear);
        }
        self.written.push((x, y));
    }
}

fn draw_2x2(ctx: &mut DrawContext<'_>) {
    ctx.block_column_major(0, 0, 2, 2, 0);
}

/// North/south door: four columns of three.
fn draw_door_across(ctx: &mut DrawContext<'_>) {
    ctx.block_column_major(0, 0, 4, 3, 0);
}

/// West/east door: three columns of four.
fn draw_door_along(ctx: &mut DrawContext<'_>) {
    ctx.block_column_major(0, 0, 3, 4, 0);
}

pub struct ObjectDrawer<'a> {
    catalog: &'a Catalog,
    graphics: Option<TileSheet<'a>>,
    room_id: u16,
    chest_index: usize,
    tile_source: Option<&'a dyn TileSource>,
    trace: Option<Vec<TileTrace>>,
    trace_only: bool,
}

impl<'a> ObjectDrawer<'a> {
    /// A drawer for one room. `graphics` is the room's packed 4bpp sheet;
    /// without it only trace-only drawing works.
    #[must_use]
    pub fn new(catalog: &'a Catalog, room_id: u16, graphics: Option<&'a [u8]>) -> Self {
        Self {
            catalog,
            graphics: graphics.map(TileSheet::new),
            room_id,
            chest_index: 0,
            tile_source: None,
            trace: None,
            trace_only: false,
        }
    }

    /// Loads tiles through `source` for objects that have none attached.
    #[must_use]
    pub fn with_tile_source(mut self, source: &'a dyn TileSource) -> Self {
        self.tile_source = Some(source);
        self
    }

    #[must_use]
    pub const fn room_id(&self) -> u16 {
        self.room_id
    }

    /// Starts recording every placed tile. In trace-only mode the buffers
    /// are left alone and no graphics sheet is needed.
    pub fn set_trace_collector(&mut self, trace_only: bool) {
        self.trace = Some(Vec::new());
        self.trace_only = trace_only;
    }

    pub fn clear_trace_collector(&mut self) {
        self.trace = None;
        self.trace_only = false;
    }

    #[must_use]
    pub const fn trace_only(&self) -> bool {
        self.trace_only
    }

    #[must_use]
    pub fn trace(&self) -> &[TileTrace] {
        self.trace.as_deref().unwrap_or_default()
    }

    /// Hands out the recorded trace and starts a fresh one.
    pub fn take_trace(&mut self) -> Vec<TileTrace> {
        self.trace.as_mut().map(std::mem::take).unwrap_or_default()
    }

    fn check_targets(&self, bg1: &TileBuffer, bg2: &TileBuffer) -> Result<(), RenderError> {
        if self.trace_only {
            return Ok(());
        }
        if self.graphics.is_none() {
            tracing::warn!("room 0x{:03X}: no graphics sheet, nothing drawn", self.room_id);
            return Err(RenderError::MissingGraphics);
        }
        if !bg1.is_initialized() {
            return Err(RenderError::UninitializedBuffer("bg1"));
        }
        if !bg2.is_initialized() {
            return Err(RenderError::UninitializedBuffer("bg2"));
        }
        Ok(())
    }

    /// Runs `function` against `buffer`, returning the cells it wrote.
    fn replay(
        &mut self,
        function: RoutineFn,
        object: &RoomObject,
        tiles: &[TileDescriptor],
        state: Option<&dyn GameState>,
        buffer: &mut TileBuffer,
        layer: Layer,
    ) -> Vec<(i32, i32)> {
        let mut writer = LayerWriter {
            buffer,
            sheet: if self.trace_only { None } else { self.graphics },
            trace: self.trace.as_mut(),
            object,
            layer,
            written: Vec::new(),
        };
        let mut ctx = DrawContext {
            canvas: &mut writer,
            object,
            tiles,
            state,
            room_id: self.room_id,
            chest_index: self.chest_index,
        };
        function(&mut ctx);
        writer.written
    }

    /// Draws one object.
    ///
    /// Objects on BG2 go to `bg2`, everything else to `bg1`. When the
    /// routine masks BG1, every cell it wrote on BG2 is cleared to
    /// transparent in `bg1` and, if given, in `layout_bg1`.
    pub fn draw_object(
        &mut self,
        object: &RoomObject,
        bg1: &mut TileBuffer,
        bg2: &mut TileBuffer,
        palette: &PaletteGroup,
        state: Option<&dyn GameState>,
        layout_bg1: Option<&mut TileBuffer>,
    ) -> Result<(), RenderError> {
        self.check_targets(bg1, bg2)?;

        let tiles = object.ensure_tiles_loaded(self.tile_source)?;
        if tiles.is_empty() {
            tracing::trace!("object 0x{:03X} has no tiles", object.id);
            return Ok(());
        }

        let catalog = self.catalog;
        let Some(info) = catalog.routine_for(object.id) else {
            tracing::debug!("object 0x{:03X} has no draw routine", object.id);
            return Ok(());
        };
        tracing::trace!(
            "object 0x{:03X} at ({}, {}) size 0x{:02X} via {} ({} palette colours)",
            object.id,
            object.x,
            object.y,
            object.size,
            info.name,
            palette.colors.len()
        );

        if info.draws_to_both_bgs {
            self.replay(info.function, object, tiles, state, bg1, Layer::Bg1);
            self.replay(info.function, object, tiles, state, bg2, Layer::Bg2);
            return Ok(());
        }

        if object.layer == Layer::Bg2 {
            let written = self.replay(info.function, object, tiles, state, bg2, Layer::Bg2);
            if info.masks_bg1 && !self.trace_only {
                mask_cells(&written, bg1, layout_bg1);
            }
        } else {
            self.replay(info.function, object, tiles, state, bg1, Layer::Bg1);
        }
        Ok(())
    }

    /// Draws `objects` in order, stopping at the first failure. Chests are
    /// numbered in the same order for the open-chest query.
    pub fn draw_object_list(
        &mut self,
        objects: &[RoomObject],
        bg1: &mut TileBuffer,
        bg2: &mut TileBuffer,
        palette: &PaletteGroup,
        state: Option<&dyn GameState>,
        mut layout_bg1: Option<&mut TileBuffer>,
    ) -> Result<(), RenderError> {
        self.chest_index = 0;
        for object in objects {
            self.draw_object(object, bg1, bg2, palette, state, layout_bg1.as_deref_mut())?;
            if self.catalog.router.resolve(object.id) == ids::CHEST {
                self.chest_index += 1;
            }
        }
        tracing::debug!("room 0x{:03X}: drew {} objects", self.room_id, objects.len());
        Ok(())
    }

    /// Draws a fixed 2x2 block whose four tile words live in the ROM's
    /// shared object data at `offset` (pushable blocks, torches).
    #[allow(clippy::too_many_arguments)]
    pub fn draw_room_draw_object_data_2x2(
        &mut self,
        object_id: u16,
        x: u8,
        y: u8,
        layer: Layer,
        offset: u16,
        rom: &Rom,
        bg1: &mut TileBuffer,
        bg2: &mut TileBuffer,
    ) -> Result<(), RenderError> {
        self.check_targets(bg1, bg2)?;

        let base = ROOM_DRAW_OBJECT_DATA + usize::from(offset);
        let tiles = (0..4)
            .map(|i| rom.read_word(base + i * 2).map(TileDescriptor::from))
            .collect::<Result<Vec<_>, _>>()?;
        let object = RoomObject::new(object_id, x, y, 0, layer).with_tiles(tiles);

        if layer == Layer::Bg2 {
            self.replay(draw_2x2, &object, object.tiles(), None, bg2, Layer::Bg2);
        } else {
            self.replay(draw_2x2, &object, object.tiles(), None, bg1, Layer::Bg1);
        }
        Ok(())
    }

    /// Draws door `door_index` of the room from its ROM tile words.
    ///
    /// Doors the state reports open switch to the plain doorway graphic.
    /// Lower-layer doors go to `bg2` and clear the cells they cover in
    /// `bg1`; the rest go to `bg1`. Markers draw nothing. Traces carry the
    /// door type as object id and the position index as size.
    pub fn draw_door(
        &mut self,
        door: &DoorDef,
        door_index: usize,
        rom: &Rom,
        bg1: &mut TileBuffer,
        bg2: &mut TileBuffer,
        state: Option<&dyn GameState>,
    ) -> Result<(), RenderError> {
        self.check_targets(bg1, bg2)?;
        if door.kind.is_marker() {
            tracing::trace!("door {door_index} is a marker, nothing to draw");
            return Ok(());
        }

        let open = state.is_some_and(|state| state.is_door_open(self.room_id, door_index));
        let kind = if open { door.kind.opened() } else { door.kind };
        let tiles = door.read_tiles(kind, rom, ROOM_DRAW_OBJECT_DATA)?;

        let (x, y) = door.tile_coords();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let object = RoomObject::new(u16::from(kind.0), x as u8, y as u8, door.position, Layer::Bg1)
            .with_tiles(tiles);
        let function: RoutineFn = if door.direction.is_horizontal_wall() {
            draw_door_across
        } else {
            draw_door_along
        };
        tracing::trace!(
            "door {door_index} type 0x{:02X} {:?} at ({x}, {y}){}",
            kind.0,
            door.direction,
            if open { " open" } else { "" }
        );

        if door.kind.is_lower_layer() {
            let written = self.replay(function, &object, object.tiles(), state, bg2, Layer::Bg2);
            if !self.trace_only {
                mask_cells(&written, bg1, None);
            }
        } else {
            self.replay(function, &object, object.tiles(), state, bg1, Layer::Bg1);
        }
        Ok(())
    }

    /// Draws the room's doors in list order.
    pub fn draw_doors(
        &mut self,
        doors: &[DoorDef],
        rom: &Rom,
        bg1: &mut TileBuffer,
        bg2: &mut TileBuffer,
        state: Option<&dyn GameState>,
    ) -> Result<(), RenderError> {
        for (index, door) in doors.iter().enumerate() {
            self.draw_door(door, index, rom, bg1, bg2, state)?;
        }
        Ok(())
    }
}

fn mask_cells(cells: &[(i32, i32)], bg1: &mut TileBuffer, mut layout_bg1: Option<&mut TileBuffer>) {
    for &(x, y) in cells {
        bg1.clear_tile_pixels(x, y);
        if let Some(layout) = layout_bg1.as_deref_mut() {
            layout.clear_tile_pixels(x, y);
        }
    }
    tracing::trace!("masked {} BG1 cells", cells.len());
}
