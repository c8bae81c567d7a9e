use image::{Rgb, RgbImage};
use koch_core::oscillator::DEPTH_SCALE_MAX;
use koch_core::{RasterCanvas, Snowflake, Vec2};
use palette::{Gradient, LinSrgb};
use std::path::Path;

const TILE: u32 = 220;
const FRAMES: u32 = 8;

fn main() {
    // Background tint sweeps a warm-to-cool gradient across the sheet
    let gradient = Gradient::new(vec![
        LinSrgb::new(1.0, 0.97, 0.94),
        LinSrgb::new(0.92, 0.96, 1.0),
    ]);

    let mut sheet = RgbImage::from_pixel(TILE * FRAMES, TILE, Rgb([255, 255, 255]));

    for i in 0..FRAMES {
        let t = i as f32 / (FRAMES - 1) as f32;
        let depth = t * DEPTH_SCALE_MAX;

        let mut canvas = RasterCanvas::new(TILE, TILE);
        let centre = Vec2::new(TILE as f32 / 2.0, TILE as f32 / 2.0);
        let mut flake = Snowflake::new(centre, TILE as f32 * 2.0 / 5.0);
        flake.set_depth(depth);
        flake.draw(&mut canvas);

        let tint = gradient.get(t).into_format::<u8>();
        let tile = canvas.into_image();
        for (x, y, px) in tile.enumerate_pixels() {
            // Keep strokes, tint the background
            let px = if *px == Rgb([255, 255, 255]) {
                Rgb([tint.red, tint.green, tint.blue])
            } else {
                *px
            };
            sheet.put_pixel(i * TILE + x, y, px);
        }
    }

    let path = Path::new("morph_sheet.png");
    sheet.save(path).unwrap();
    println!("Saved morph sheet to {:?}", path);
}
