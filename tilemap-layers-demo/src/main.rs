use image::{Rgba, RgbaImage};
use std::rc::Rc;
use visual_tilemap_layers::{
    constants::{DEFAULT_TILE_SIZE, MAIN_TILEMAP_Z_INDEX, SCREEN_HEIGHT, SCREEN_WIDTH},
    Camera, ImageScreen, LayerConfig, LayerRegistry, RenderList, TileMapData, VisualTileMapLayer,
};

const TILE: u32 = DEFAULT_TILE_SIZE;
const FRAMES: i32 = 24;

type Map = TileMapData<RgbaImage>;

/// Renders a parallax-style scene: ground map, a cloud overlay drawn above
/// it and a shadow layer drawn beneath it, then writes the last frame.
///
/// Usage: `tilemap-layers-demo [OUTPUT.png] [CONFIG.json]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "frame.png".to_string());
    let config = match args.next() {
        Some(path) => LayerConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => LayerConfig::default(),
    };
    log::info!("layer config: {:?}", config);

    let ground = Rc::new(ground_map()?);
    let clouds = Rc::new(cloud_map()?);
    let shadows = Rc::new(shadow_map()?);

    let mut host: RenderList<ImageScreen> = RenderList::new();
    let mut registry = LayerRegistry::with_config(config)?;

    // Stand-in for the engine's own tilemap
    let main_map =
        VisualTileMapLayer::new(&mut host, Rc::clone(&ground), MAIN_TILEMAP_Z_INDEX, true);

    registry.add(&mut host, Rc::clone(&clouds), 0);
    registry.add(&mut host, Rc::clone(&clouds), 0);
    let mut shadow =
        registry.create_managed(&mut host, Rc::clone(&shadows), MAIN_TILEMAP_Z_INDEX - 1);

    let mut camera = Camera::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut screen = ImageScreen::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    for frame in 0..FRAMES {
        camera.pan(3, 1);

        // Blink the shadows every eight frames
        shadow.set_visible((frame / 8) % 2 == 0);
        if frame == FRAMES / 2 {
            shadow.set_z_index(&mut host, 1)?;
        }

        screen.fill(Rgba([20, 24, 40, 255]));
        let drawn = host.render_frame(&mut screen, &camera);
        log::debug!(
            "frame {}: {} layers, {} blits",
            frame,
            drawn,
            screen.blit_count()
        );
    }

    screen.save(&output)?;
    log::info!("wrote {}", output);

    let removed = registry.remove_all_at_z_index(&mut host, 0)?;
    log::info!("removed {} cloud layers", removed);
    shadow.destroy(&mut host)?;
    main_map.destroy(&mut host)?;

    Ok(())
}

fn solid(color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(TILE, TILE, Rgba(color))
}

fn transparent() -> RgbaImage {
    solid([0, 0, 0, 0])
}

/// Checkerboard of grass and dirt
fn ground_map() -> visual_tilemap_layers::Result<Map> {
    let (columns, rows) = (40, 30);
    let tiles = (0..rows)
        .flat_map(|row| (0..columns).map(move |col| 1 + ((col / 3 + row / 3) % 2) as usize))
        .collect();
    let tileset = vec![transparent(), solid([60, 140, 60, 255]), solid([120, 90, 50, 255])];
    Map::new(columns, rows, tiles, tileset)
}

/// Sparse puffs with a soft edge; index 0 stays see-through
fn cloud_map() -> visual_tilemap_layers::Result<Map> {
    let mut puff = transparent();
    for (x, y, pixel) in puff.enumerate_pixels_mut() {
        let (dx, dy) = (x as i32 - 8, y as i32 - 8);
        if dx * dx + dy * dy < 49 {
            *pixel = Rgba([240, 240, 250, 200]);
        }
    }

    let mut map = Map::filled(40, 30, 0, vec![transparent(), puff])?;
    for i in 0..30 {
        map.set_tile((i * 7) % 40, (i * 3) % 30, 1)?;
    }
    Ok(map)
}

fn shadow_map() -> visual_tilemap_layers::Result<Map> {
    let mut map = Map::filled(40, 30, 0, vec![transparent(), solid([0, 0, 0, 96])])?;
    for col in (0..40).step_by(5) {
        for row in 0..30 {
            map.set_tile(col, row, 1)?;
        }
    }
    Ok(map)
}
