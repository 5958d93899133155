//! One entry point for object footprints.
//!
//! Measuring the routine is exact, so it wins. The dimension table covers
//! objects whose routine writes nothing measurable, and a size heuristic
//! covers everything else.

use crate::dimensions::{ObjectDimensionTable, SelectionBounds};
use crate::geometry::ObjectGeometry;
use crate::room_object::RoomObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionSource {
    Geometry,
    Table,
    Heuristic,
}

/// Footprint in tiles, relative to the object's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectExtent {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
    pub source: DimensionSource,
}

impl ObjectExtent {
    fn heuristic(size: u8) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            width: 2 * (i32::from(size) + 1),
            height: 2,
            source: DimensionSource::Heuristic,
        }
    }

    const fn from_selection(bounds: SelectionBounds, source: DimensionSource) -> Self {
        Self {
            offset_x: bounds.offset_x,
            offset_y: bounds.offset_y,
            width: bounds.width,
            height: bounds.height,
            source,
        }
    }
}

pub struct DimensionService<'a> {
    geometry: &'a ObjectGeometry<'a>,
    table: &'a ObjectDimensionTable,
}

impl<'a> DimensionService<'a> {
    #[must_use]
    pub const fn new(geometry: &'a ObjectGeometry<'a>, table: &'a ObjectDimensionTable) -> Self {
        Self { geometry, table }
    }

    /// Full drawn footprint.
    #[must_use]
    pub fn extent(&self, object: &RoomObject) -> ObjectExtent {
        self.resolve(object, false)
    }

    /// Footprint used for picking: the tighter selection rectangle where one
    /// exists.
    #[must_use]
    pub fn selection_bounds(&self, object: &RoomObject) -> ObjectExtent {
        self.resolve(object, true)
    }

    /// Whether room tile (`tile_x`, `tile_y`) falls inside the object's
    /// selection rectangle.
    #[must_use]
    pub fn hit_test(&self, object: &RoomObject, tile_x: i32, tile_y: i32) -> bool {
        let extent = self.selection_bounds(object);
        SelectionBounds {
            offset_x: extent.offset_x + i32::from(object.x),
            offset_y: extent.offset_y + i32::from(object.y),
            width: extent.width,
            height: extent.height,
        }
        .contains(tile_x, tile_y)
    }

    fn resolve(&self, object: &RoomObject, selection: bool) -> ObjectExtent {
        let measured = self.geometry.measure_by_object_id(object);
        if !measured.is_empty() {
            let rect = if selection {
                measured.selection_or_bounds()
            } else {
                measured.bounds()
            };
            return ObjectExtent {
                offset_x: rect.x,
                offset_y: rect.y,
                width: rect.width,
                height: rect.height,
                source: DimensionSource::Geometry,
            };
        }

        if self.table.is_loaded() {
            let bounds = if selection {
                self.table.selection_bounds(object.id, object.size)
            } else {
                let (width, height) = self.table.dimensions(object.id, object.size);
                SelectionBounds {
                    width,
                    height,
                    ..self.table.selection_bounds(object.id, object.size)
                }
            };
            return ObjectExtent::from_selection(bounds, DimensionSource::Table);
        }

        tracing::debug!("no dimensions for object 0x{:03X}, guessing from size", object.id);
        ObjectExtent::heuristic(object.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::room_object::Layer;
    use crate::router::Catalog;
    use pretty_assertions::assert_eq;

    fn object(id: u16, size: u8) -> RoomObject {
        RoomObject::new(id, 10, 20, size, Layer::Bg1)
    }

    #[test]
    fn geometry_comes_first() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let table = ObjectDimensionTable::with_defaults();
        let service = DimensionService::new(&geometry, &table);

        let extent = service.extent(&object(0x09, 3));
        assert_eq!(
            extent,
            ObjectExtent {
                offset_x: 0,
                offset_y: -9,
                width: 10,
                height: 14,
                source: DimensionSource::Geometry,
            }
        );
    }

    #[test]
    fn table_covers_routines_drawing_nothing() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let table = ObjectDimensionTable::with_defaults();
        let service = DimensionService::new(&geometry, &table);

        let extent = service.extent(&object(0x54, 0));
        assert_eq!(extent.source, DimensionSource::Table);
        assert_eq!((extent.width, extent.height), (1, 1));

        // Selection never drops below 2x2.
        let selection = service.selection_bounds(&object(0x54, 0));
        assert_eq!((selection.width, selection.height), (2, 2));
    }

    #[test]
    fn heuristic_without_a_table() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let table = ObjectDimensionTable::new();
        let service = DimensionService::new(&geometry, &table);

        let extent = service.extent(&object(0x54, 0x13));
        assert_eq!(
            extent,
            ObjectExtent {
                offset_x: 0,
                offset_y: 0,
                width: 40,
                height: 2,
                source: DimensionSource::Heuristic,
            }
        );
    }

    #[test]
    fn selection_prefers_shrunk_rectangle() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let table = ObjectDimensionTable::with_defaults();
        let service = DimensionService::new(&geometry, &table);

        let ceiling = object(0xA0, 1);
        let full = service.extent(&ceiling);
        let picked = service.selection_bounds(&ceiling);
        assert_eq!((full.width, full.height), (8, 8));
        assert_eq!((picked.offset_x, picked.offset_y, picked.width, picked.height), (1, 1, 6, 6));
    }

    #[test]
    fn hit_test_in_room_coordinates() {
        let catalog = Catalog::default();
        let geometry = ObjectGeometry::new(&catalog, &RenderConfig::default());
        let table = ObjectDimensionTable::with_defaults();
        let service = DimensionService::new(&geometry, &table);

        // Anchored at (10, 20), 0x09 size 3 spans x 10..20 and y 11..25.
        let diagonal = object(0x09, 3);
        assert!(service.hit_test(&diagonal, 10, 11));
        assert!(service.hit_test(&diagonal, 19, 24));
        assert!(!service.hit_test(&diagonal, 20, 20));
        assert!(!service.hit_test(&diagonal, 10, 25));
        assert!(!service.hit_test(&diagonal, 9, 20));
    }
}
