//! Scene files: one room's objects plus everything needed to draw them.
//!
//! ```toml
//! room_id = 0x12
//! graphics = "sheet.bin"
//! palette = [0x0000, 0x7FFF]
//!
//! [render]
//! enable_custom_objects = true
//!
//! [state]
//! big_chest_open = true
//!
//! [[objects]]
//! id = 0x00
//! x = 4
//! y = 4
//! size = 2
//! tiles = [0x0123, 0x4123, 0x0124, 0x4124]
//!
//! [[doors]]
//! kind = 0x1C
//! direction = "north"
//! position = 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use dungeon::{DoorDef, Layer, PaletteGroup, RenderConfig, Rom, RoomObject, RoomState, TileDescriptor};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub room_id: u16,
    /// Packed 4bpp tile sheet, relative to the scene file.
    pub graphics: Option<PathBuf>,
    /// ROM image used to refine the dimension table.
    pub rom: Option<PathBuf>,
    pub palette: Vec<u16>,
    pub render: RenderConfig,
    pub state: RoomState,
    pub objects: Vec<SceneObject>,
    /// Drawn after the objects; needs `rom` for the door graphics.
    pub doors: Vec<DoorDef>,
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SceneObject {
    pub id: u16,
    pub x: u8,
    pub y: u8,
    pub size: u8,
    /// 0 = BG1, 1 = BG2, 2 = BG3.
    pub layer: u8,
    /// Raw tile words.
    pub tiles: Vec<u16>,
}

impl SceneObject {
    #[must_use]
    pub fn to_room_object(&self) -> RoomObject {
        let tiles = self.tiles.iter().copied().map(TileDescriptor::from).collect();
        RoomObject::new(self.id, self.x, self.y, self.size, Layer::from(self.layer)).with_tiles(tiles)
    }
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path)?;
        let mut scene = Self::from_toml(&text)?;
        scene.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(scene)
    }

    pub fn from_toml(text: &str) -> Result<Self, SceneError> {
        let mut scene: Self = toml::from_str(text)?;
        scene.state.room_id = scene.room_id;
        Ok(scene)
    }

    pub fn read_graphics(&self) -> Result<Option<Vec<u8>>, SceneError> {
        self.read_relative(self.graphics.as_deref())
    }

    pub fn read_rom(&self) -> Result<Option<Rom>, SceneError> {
        Ok(self.read_relative(self.rom.as_deref())?.map(Rom::new))
    }

    #[must_use]
    pub fn palette(&self) -> PaletteGroup {
        PaletteGroup::new(self.palette.clone())
    }

    #[must_use]
    pub fn room_objects(&self) -> Vec<RoomObject> {
        self.objects.iter().map(SceneObject::to_room_object).collect()
    }

    fn read_relative(&self, path: Option<&Path>) -> Result<Option<Vec<u8>>, SceneError> {
        let Some(path) = path else {
            return Ok(None);
        };
        let bytes = fs::read(self.base_dir.join(path))?;
        tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(Some(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon::{DoorDirection, DoorType};
    use pretty_assertions::assert_eq;

    const SCENE: &str = r#"
        room_id = 0x12
        palette = [0x0000, 0x7FFF]

        [render]
        enable_custom_objects = true

        [state]
        big_chest_open = true
        open_chests = [1]

        [[objects]]
        id = 0x09
        x = 4
        y = 40
        size = 3
        tiles = [0x0001, 0x4002, 0x0003, 0x0004]

        [[objects]]
        id = 0xC0
        layer = 1

        [[doors]]
        kind = 0x1C
        direction = "west"
        position = 4
    "#;

    #[test]
    fn parses_objects_and_flags() {
        let scene = Scene::from_toml(SCENE).unwrap();
        assert_eq!(scene.room_id, 0x12);
        assert!(scene.render.enable_custom_objects);
        assert!(scene.render.geometry_cache);
        assert_eq!(scene.state.room_id, 0x12);
        assert!(scene.state.big_chest_open);
        assert!(scene.state.open_chests.contains(&1));
        assert_eq!(scene.palette().colors, vec![0x0000, 0x7FFF]);

        let objects = scene.room_objects();
        assert_eq!(objects.len(), 2);
        assert_eq!((objects[0].id, objects[0].x, objects[0].y, objects[0].size), (0x09, 4, 40, 3));
        assert_eq!(objects[0].tiles().len(), 4);
        assert!(objects[0].tiles()[1].h_mirror);
        assert_eq!(objects[1].layer, Layer::Bg2);
        assert!(objects[1].tiles().is_empty());

        assert_eq!(
            scene.doors,
            vec![DoorDef::new(DoorType::SMALL_KEY, DoorDirection::West, 4)]
        );
    }

    #[test]
    fn missing_files_are_optional() {
        let scene = Scene::from_toml("room_id = 1").unwrap();
        assert!(scene.read_graphics().unwrap().is_none());
        assert!(scene.read_rom().unwrap().is_none());
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        assert!(matches!(
            Scene::from_toml("room_id = \"twelve\""),
            Err(SceneError::Parse(_))
        ));
    }
}
