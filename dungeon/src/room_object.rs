use std::cell::OnceCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::tile::TileDescriptor;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    #[default]
    Bg1,
    Bg2,
    Bg3,
}

impl From<u8> for Layer {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Bg2,
            2 => Self::Bg3,
            _ => Self::Bg1,
        }
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        match layer {
            Layer::Bg1 => 0,
            Layer::Bg2 => 1,
            Layer::Bg3 => 2,
        }
    }
}

/// The three disjoint ranges object ids are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectSubtype {
    /// 0x000-0x0FF, size-driven repeats.
    One,
    /// 0x100-0x13F, fixed-size fixtures.
    Two,
    /// 0xF80-0xFFF, special objects.
    Three,
}

impl ObjectSubtype {
    #[must_use]
    pub const fn of(id: u16) -> Option<Self> {
        match id {
            0x000..=0x0FF => Some(Self::One),
            0x100..=0x13F => Some(Self::Two),
            0xF80..=0xFFF => Some(Self::Three),
            _ => None,
        }
    }
}

/// Provides the resolved tile words of an object on demand.
pub trait TileSource {
    fn load_tiles(&self, object_id: u16) -> Result<Vec<TileDescriptor>, RenderError>;
}

/// In-memory tile source keyed by object id. Unknown ids load as empty.
#[derive(Debug, Default, Clone)]
pub struct TileTable {
    tiles: HashMap<u16, Vec<TileDescriptor>>,
}

impl TileTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object_id: u16, tiles: Vec<TileDescriptor>) {
        self.tiles.insert(object_id, tiles);
    }
}

impl TileSource for TileTable {
    fn load_tiles(&self, object_id: u16) -> Result<Vec<TileDescriptor>, RenderError> {
        Ok(self.tiles.get(&object_id).cloned().unwrap_or_default())
    }
}

/// A placed room object.
///
/// Tiles are loaded at most once; an object with no tiles is valid and
/// draws nothing.
#[derive(Debug, Clone, Default)]
pub struct RoomObject {
    pub id: u16,
    pub x: u8,
    pub y: u8,
    pub size: u8,
    pub layer: Layer,
    tiles: OnceCell<Vec<TileDescriptor>>,
}

impl RoomObject {
    #[must_use]
    pub fn new(id: u16, x: u8, y: u8, size: u8, layer: Layer) -> Self {
        Self {
            id,
            x,
            y,
            size,
            layer,
            tiles: OnceCell::new(),
        }
    }

    /// Attaches already resolved tiles.
    #[must_use]
    pub fn with_tiles(self, tiles: Vec<TileDescriptor>) -> Self {
        Self {
            tiles: OnceCell::from(tiles),
            ..self
        }
    }

    #[must_use]
    pub fn subtype(&self) -> Option<ObjectSubtype> {
        ObjectSubtype::of(self.id)
    }

    #[must_use]
    pub fn tiles_loaded(&self) -> bool {
        self.tiles.get().is_some()
    }

    /// Tiles attached so far, empty when none were loaded.
    #[must_use]
    pub fn tiles(&self) -> &[TileDescriptor] {
        self.tiles.get().map(Vec::as_slice).unwrap_or_default()
    }

    /// Loads the tiles through `source` the first time it is called with one.
    pub fn ensure_tiles_loaded(
        &self,
        source: Option<&dyn TileSource>,
    ) -> Result<&[TileDescriptor], RenderError> {
        if let Some(tiles) = self.tiles.get() {
            return Ok(tiles.as_slice());
        }

        let Some(source) = source else {
            return Ok(Default::default());
        };

        let loaded = source.load_tiles(self.id)?;
        tracing::trace!("loaded {} tiles for object 0x{:03X}", loaded.len(), self.id);
        Ok(self.tiles.get_or_init(|| loaded).as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<usize>,
    }

    impl TileSource for CountingSource {
        fn load_tiles(&self, _object_id: u16) -> Result<Vec<TileDescriptor>, RenderError> {
            self.calls.set(self.calls.get() + 1);
            Ok(vec![TileDescriptor::new(7); 4])
        }
    }

    #[test]
    fn subtype_ranges() {
        assert_eq!(ObjectSubtype::of(0x00), Some(ObjectSubtype::One));
        assert_eq!(ObjectSubtype::of(0xFF), Some(ObjectSubtype::One));
        assert_eq!(ObjectSubtype::of(0x13F), Some(ObjectSubtype::Two));
        assert_eq!(ObjectSubtype::of(0x140), None);
        assert_eq!(ObjectSubtype::of(0xF80), Some(ObjectSubtype::Three));
        assert_eq!(ObjectSubtype::of(0x1000), None);
    }

    #[test]
    fn tiles_load_once() {
        let source = CountingSource { calls: Cell::new(0) };
        let object = RoomObject::new(0x10, 0, 0, 0, Layer::Bg1);

        assert_eq!(object.ensure_tiles_loaded(Some(&source)).unwrap().len(), 4);
        assert_eq!(object.ensure_tiles_loaded(Some(&source)).unwrap().len(), 4);
        assert_eq!(source.calls.get(), 1);
        assert!(object.tiles_loaded());
    }

    #[test]
    fn no_source_means_no_tiles() {
        let object = RoomObject::new(0x10, 0, 0, 0, Layer::Bg1);
        assert!(object.ensure_tiles_loaded(None).unwrap().is_empty());
        assert!(!object.tiles_loaded());
    }

    #[test]
    fn tile_table_unknown_id_is_empty() {
        let mut table = TileTable::new();
        table.insert(1, vec![TileDescriptor::new(1)]);
        assert_eq!(table.load_tiles(1).unwrap().len(), 1);
        assert!(table.load_tiles(2).unwrap().is_empty());
    }

    #[test]
    fn layer_from_byte() {
        assert_eq!(Layer::from(0), Layer::Bg1);
        assert_eq!(Layer::from(1), Layer::Bg2);
        assert_eq!(Layer::from(2), Layer::Bg3);
        assert_eq!(u8::from(Layer::Bg2), 1);
    }
}
