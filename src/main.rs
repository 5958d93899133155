use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use dungeon::{
    Catalog, DimensionService, GameState, ObjectDimensionTable, ObjectDrawer, ObjectGeometry, PaletteGroup,
    TileBuffer, TileTrace,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod scene;

use scene::Scene;

#[derive(Parser)]
#[command(name = "roomdraw")]
#[command(about = "Draw a dungeon room's objects into BG1/BG2 tile layers")]
#[command(version)]
struct Args {
    /// Scene file (TOML)
    scene: PathBuf,

    /// Write bg1.png and bg2.png into this directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print every tile placed by a routine
    #[arg(long)]
    trace: bool,

    /// Print each object's footprint and where it came from
    #[arg(long)]
    measure: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _guard = init_logging();
    let args = Args::parse();
    run(&args)
}

fn init_logging() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .init();
    guard
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let scene = Scene::load(&args.scene)?;
    let graphics = scene.read_graphics()?;
    let rom = scene.read_rom()?;
    tracing::info!(
        "room 0x{:03X}: {} objects from {}",
        scene.room_id,
        scene.objects.len(),
        args.scene.display()
    );

    let catalog = Catalog::new(&scene.render);
    let objects = scene.room_objects();
    let palette = scene.palette();
    let state: &dyn GameState = &scene.state;

    let mut drawer = ObjectDrawer::new(&catalog, scene.room_id, graphics.as_deref());
    if graphics.is_none() {
        tracing::warn!("scene has no graphics sheet, recording tile placement only");
        drawer.set_trace_collector(true);
    } else if args.trace {
        drawer.set_trace_collector(false);
    }

    let mut bg1 = TileBuffer::new();
    let mut bg2 = TileBuffer::new();
    drawer.draw_object_list(&objects, &mut bg1, &mut bg2, &palette, Some(state), None)?;
    match &rom {
        Some(rom) => drawer.draw_doors(&scene.doors, rom, &mut bg1, &mut bg2, Some(state))?,
        None if !scene.doors.is_empty() => {
            tracing::warn!("scene has {} doors but no ROM, skipping them", scene.doors.len());
        }
        None => {}
    }

    if args.trace {
        for trace in drawer.trace() {
            print_trace(trace);
        }
    }

    let geometry = ObjectGeometry::new(&catalog, &scene.render);
    let table = match &rom {
        Some(rom) => {
            let mut table = ObjectDimensionTable::new();
            table.load_from_rom(rom)?;
            table
        }
        None => ObjectDimensionTable::with_defaults(),
    };
    let dimensions = DimensionService::new(&geometry, &table);
    for object in &objects {
        let extent = dimensions.extent(object);
        tracing::debug!("object 0x{:03X}: {extent:?}", object.id);
        if args.measure {
            println!(
                "0x{:03X} at ({:2}, {:2}) size 0x{:02X}: offset ({}, {}) {}x{} [{:?}]",
                object.id,
                object.x,
                object.y,
                object.size,
                extent.offset_x,
                extent.offset_y,
                extent.width,
                extent.height,
                extent.source
            );
        }
    }

    if let Some(out) = &args.out {
        if drawer.trace_only() {
            tracing::warn!("nothing was rasterized, skipping PNG output");
        } else {
            std::fs::create_dir_all(out)?;
            write_layer(&bg1, &palette, &out.join("bg1.png"))?;
            write_layer(&bg2, &palette, &out.join("bg2.png"))?;
        }
    }

    Ok(())
}

fn print_trace(trace: &TileTrace) {
    let flag = |bit, c| if trace.flags & bit == 0 { '-' } else { c };
    println!(
        "0x{:03X} size 0x{:02X} bg{} ({:3}, {:3}) tile 0x{:03X} {}{}{}",
        trace.object_id,
        trace.size,
        trace.layer + 1,
        trace.x_tile,
        trace.y_tile,
        trace.tile_id,
        flag(TileTrace::H_MIRROR, 'h'),
        flag(TileTrace::V_MIRROR, 'v'),
        flag(TileTrace::PRIORITY, 'p')
    );
}

/// Bitmap through the room palette; transparent and unmapped pixels are
/// black.
fn layer_image(buffer: &TileBuffer, palette: &PaletteGroup) -> Result<image::RgbImage, Box<dyn Error>> {
    let width = u32::try_from(buffer.width_pixels())?;
    let height = u32::try_from(buffer.height_pixels())?;
    Ok(image::RgbImage::from_fn(width, height, |x, y| {
        let color = palette
            .color(buffer.pixel_at(x as usize, y as usize))
            .unwrap_or_default();
        image::Rgb([color.red, color.green, color.blue])
    }))
}

fn write_layer(buffer: &TileBuffer, palette: &PaletteGroup, path: &Path) -> Result<(), Box<dyn Error>> {
    layer_image(buffer, palette)?.save(path)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layers_are_coloured_through_the_palette() {
        let mut buffer = TileBuffer::new();
        buffer.set_pixel_at(3, 4, 1);
        buffer.set_pixel_at(5, 4, 9);
        let palette = PaletteGroup::new(vec![0x0000, 0x001F]);

        let image = layer_image(&buffer, &palette).unwrap();
        assert_eq!(image.dimensions(), (512, 512));
        assert_eq!(image.get_pixel(3, 4).0, [255, 0, 0]);
        // Outside the palette.
        assert_eq!(image.get_pixel(5, 4).0, [0, 0, 0]);
        // Transparent.
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
    }
}
