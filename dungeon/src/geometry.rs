//! Footprints measured by replaying routines.
//!
//! Diagonals, super squares and triangles have no closed-form size, so the
//! real routine is run against a scratch tile map filled with dummy tiles and
//! the written cells are scanned. Results are memoized per
//! (routine, object id, size).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::config::RenderConfig;
use crate::room_object::{Layer, RoomObject};
use crate::router::Catalog;
use crate::routines::{DrawContext, RoutineId, ids};
use crate::tile::TileDescriptor;
use crate::tile_buffer::TileBuffer;

/// Scratch map side, in tiles. Wide enough for the longest spaced run
/// (0x3E at size 15 reaches 212 tiles) drawn from the anchor.
const SCRATCH_TILES: usize = 256;

/// Rows reserved above the anchor for routines walking upwards.
const RAISED_ANCHOR: u8 = 64;

/// Dummy payload length; larger than any routine's payload check.
const DUMMY_TILES: u16 = 64;

/// Rectangle in tiles, relative to the object's anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeometryBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub width: i32,
    pub height: i32,
    /// Drawn on BG2, so it may need a BG1 mask when composited.
    pub is_bg2_overlay: bool,
    /// Tighter hit-test area for shapes that only fill part of their box.
    pub selection: Option<TileRect>,
}

impl GeometryBounds {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub const fn bounds(&self) -> TileRect {
        TileRect {
            x: self.min_x,
            y: self.min_y,
            width: self.width,
            height: self.height,
        }
    }

    /// The selection rectangle when present, the full bounds otherwise.
    #[must_use]
    pub fn selection_or_bounds(&self) -> TileRect {
        self.selection.unwrap_or_else(|| self.bounds())
    }
}

type CacheKey = (RoutineId, u16, u8);

pub struct ObjectGeometry<'a> {
    catalog: &'a Catalog,
    use_cache: bool,
    shrink_percent: i32,
    cache: Mutex<HashMap<CacheKey, GeometryBounds>>,
    probes: AtomicUsize,
}

impl<'a> ObjectGeometry<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &RenderConfig) -> Self {
        Self {
            catalog,
            use_cache: config.geometry_cache,
            shrink_percent: i32::from(config.selection_shrink_percent.clamp(1, 100)),
            cache: Mutex::new(HashMap::new()),
            probes: AtomicUsize::new(0),
        }
    }

    /// How many times a routine was actually replayed.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }

    pub fn clear_cache(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Measures `object` as drawn by `routine_id`. Routines that write
    /// nothing give empty bounds.
    pub fn measure_by_routine_id(&self, routine_id: RoutineId, object: &RoomObject) -> GeometryBounds {
        let key = (routine_id, object.id, object.size);
        if self.use_cache {
            let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(bounds) = cache.get(&key) {
                tracing::trace!("geometry cache hit for {key:?}");
                return *bounds;
            }
        }

        let bounds = self.apply_selection_bounds(routine_id, self.probe(routine_id, object));
        tracing::trace!("measured {key:?}: {bounds:?}");

        if self.use_cache {
            self.cache
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key, bounds);
        }
        bounds
    }

    pub fn measure_by_object_id(&self, object: &RoomObject) -> GeometryBounds {
        let routine_id = self.catalog.router.resolve(object.id);
        self.measure_by_routine_id(routine_id, object)
    }

    pub fn measure_for_layer_compositing(&self, object: &RoomObject) -> GeometryBounds {
        GeometryBounds {
            is_bg2_overlay: object.layer == Layer::Bg2,
            ..self.measure_by_object_id(object)
        }
    }

    /// Narrows the diagonal ceilings to a centered share of their box; their
    /// visible part is a right triangle.
    #[must_use]
    pub fn apply_selection_bounds(&self, routine_id: RoutineId, bounds: GeometryBounds) -> GeometryBounds {
        let is_ceiling = matches!(
            routine_id,
            ids::DIAGONAL_CEILING_TOP_LEFT
                | ids::DIAGONAL_CEILING_BOTTOM_LEFT
                | ids::DIAGONAL_CEILING_TOP_RIGHT
                | ids::DIAGONAL_CEILING_BOTTOM_RIGHT
        );
        if !is_ceiling || bounds.is_empty() {
            return bounds;
        }

        let shrink = |extent: i32| ((extent * self.shrink_percent + 50) / 100).max(1);
        let (width, height) = (shrink(bounds.width), shrink(bounds.height));
        GeometryBounds {
            selection: Some(TileRect {
                x: bounds.min_x + (bounds.width - width) / 2,
                y: bounds.min_y + (bounds.height - height) / 2,
                width,
                height,
            }),
            ..bounds
        }
    }

    fn probe(&self, routine_id: RoutineId, object: &RoomObject) -> GeometryBounds {
        let Some(info) = self.catalog.registry.get(routine_id) else {
            return GeometryBounds::default();
        };
        self.probes.fetch_add(1, Ordering::Relaxed);

        let (anchor_x, anchor_y) = anchor_for(routine_id);
        let probe = RoomObject::new(object.id, anchor_x, anchor_y, object.size, Layer::Bg1);
        let dummy: Vec<TileDescriptor> = (1..=DUMMY_TILES).map(TileDescriptor::new).collect();
        let mut scratch = TileBuffer::scratch(SCRATCH_TILES, SCRATCH_TILES);

        let mut ctx = DrawContext {
            canvas: &mut scratch,
            object: &probe,
            tiles: &dummy,
            state: None,
            room_id: 0,
            chest_index: 0,
        };
        (info.function)(&mut ctx);

        let mut cells = scratch.written_cells();
        let Some((x, y)) = cells.next() else {
            return GeometryBounds::default();
        };
        let (min_x, min_y, max_x, max_y) = cells.fold((x, y, x, y), |(x0, y0, x1, y1), (x, y)| {
            (x0.min(x), y0.min(y), x1.max(x), y1.max(y))
        });

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let (min_x, min_y, max_x, max_y) = (min_x as i32, min_y as i32, max_x as i32, max_y as i32);
        GeometryBounds {
            min_x: min_x - i32::from(anchor_x),
            min_y: min_y - i32::from(anchor_y),
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
            ..GeometryBounds::default()
        }
    }
}

/// Acute diagonals walk up and Somaria lines can walk left, so their probe
/// starts away from the scratch map's edge.
const fn anchor_for(routine_id: RoutineId) -> (u8, u8) {
    match routine_id {
        ids::DIAGONAL_ACUTE_1TO16 | ids::DIAGONAL_ACUTE_BOTH_BG => (0, RAISED_ANCHOR),
        ids::SOMARIA_LINE => (RAISED_ANCHOR, 0),
        _ => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn object(id: u16, size: u8) -> RoomObject {
        RoomObject::new(id, 10, 10, size, Layer::Bg1)
    }

    #[test]
    fn ceiling_2x2_size_zero_is_64_wide() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let bounds = geometry.measure_by_object_id(&object(0x00, 0));
        assert_eq!((bounds.min_x, bounds.min_y, bounds.width, bounds.height), (0, 0, 64, 2));
    }

    #[test]
    fn acute_diagonal_reaches_up() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let bounds = geometry.measure_by_object_id(&object(0x09, 3));
        assert_eq!(bounds.width, 10);
        assert_eq!(bounds.height, 14);
        assert_eq!(bounds.min_y, -(bounds.width - 1));
    }

    #[test]
    fn diagonal_height_is_count_plus_four() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        for (id, size) in [(0x09, 0), (0x0A, 5), (0x15, 2), (0x16, 15)] {
            let bounds = geometry.measure_by_object_id(&object(id, size));
            assert_eq!(bounds.height, bounds.width + 4, "object 0x{id:02X} size {size}");
        }

        let grave = geometry.measure_by_object_id(&object(0x0A, 5));
        assert_eq!(grave.min_y, 0);
    }

    #[test]
    fn cached_measurement_skips_the_routine() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let first = geometry.measure_by_routine_id(ids::RIGHTWARDS_2X2_1TO15_OR_32, &object(0x00, 4));
        assert_eq!(geometry.probe_count(), 1);

        let second = geometry.measure_by_routine_id(ids::RIGHTWARDS_2X2_1TO15_OR_32, &object(0x00, 4));
        assert_eq!(first, second);
        assert_eq!(geometry.probe_count(), 1);

        // Position is not part of the key.
        let moved = RoomObject::new(0x00, 40, 2, 4, Layer::Bg2);
        geometry.measure_by_routine_id(ids::RIGHTWARDS_2X2_1TO15_OR_32, &moved);
        assert_eq!(geometry.probe_count(), 1);

        geometry.clear_cache();
        geometry.measure_by_routine_id(ids::RIGHTWARDS_2X2_1TO15_OR_32, &object(0x00, 4));
        assert_eq!(geometry.probe_count(), 2);
    }

    #[test]
    fn cache_can_be_disabled() {
        let catalog = Catalog::default();
        let config = RenderConfig {
            geometry_cache: false,
            ..RenderConfig::default()
        };
        let geometry = ObjectGeometry::new(&catalog, &config);
        geometry.measure_by_object_id(&object(0x00, 1));
        geometry.measure_by_object_id(&object(0x00, 1));
        assert_eq!(geometry.probe_count(), 2);
    }

    #[test]
    fn nothing_measures_empty() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let bounds = geometry.measure_by_object_id(&object(0x54, 0));
        assert!(bounds.is_empty());
        assert_eq!(bounds, GeometryBounds::default());

        let unknown = geometry.measure_by_routine_id(500, &object(0x00, 0));
        assert!(unknown.is_empty());
    }

    #[test]
    fn ceilings_get_shrunk_selection() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        // Size 1: an 8x8 triangle.
        let bounds = geometry.measure_by_object_id(&object(0xA0, 1));
        assert_eq!(bounds.bounds(), TileRect { x: 0, y: 0, width: 8, height: 8 });
        assert_eq!(
            bounds.selection,
            Some(TileRect { x: 1, y: 1, width: 6, height: 6 })
        );
        assert_eq!(bounds.selection_or_bounds(), bounds.selection.unwrap());

        let wall = geometry.measure_by_object_id(&object(0x00, 1));
        assert_eq!(wall.selection, None);
        assert_eq!(wall.selection_or_bounds(), wall.bounds());
    }

    #[test]
    fn somaria_line_walking_left() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let bounds = geometry.measure_by_object_id(&object(0xF86, 3));
        assert_eq!(bounds.bounds(), TileRect { x: -3, y: 0, width: 4, height: 4 });
    }

    #[test]
    fn layer_compositing_flags_bg2() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let on_bg2 = RoomObject::new(0xC2, 0, 0, 0, Layer::Bg2);
        assert!(geometry.measure_for_layer_compositing(&on_bg2).is_bg2_overlay);
        assert!(!geometry.measure_for_layer_compositing(&object(0xC2, 0)).is_bg2_overlay);
    }

    #[test]
    fn super_square_sizes() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let bounds = geometry.measure_by_object_id(&object(0xD9, 0b0110));
        assert_eq!((bounds.width, bounds.height), (8, 12));
    }

    #[test]
    fn longest_spaced_run_is_not_clipped() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let table = crate::dimensions::ObjectDimensionTable::with_defaults();
        for id in [0x3E, 0x4B] {
            let bounds = geometry.measure_by_object_id(&object(id, 0x0F));
            assert_eq!((bounds.width, bounds.height), (212, 2));
            assert_eq!((bounds.width, bounds.height), table.dimensions(id, 0x0F));
        }
    }
}
