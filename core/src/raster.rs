use crate::Canvas;
use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const DEFAULT_STROKE: [u8; 3] = [0, 0, 0];

// Canvas over an image buffer, for tests, benches and the example programs
pub struct RasterCanvas {
    img: RgbImage,
    stroke: [u8; 3],
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            img: RgbImage::new(width, height),
            stroke: DEFAULT_STROKE,
        };
        canvas.clear();
        canvas
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    // Off-canvas pixels are clipped, not an error
    fn plot(&mut self, x: i64, y: i64) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, Rgb(self.stroke));
        }
    }
}

impl Canvas for RasterCanvas {
    fn set_stroke(&mut self, rgb: [u8; 3]) {
        self.stroke = rgb;
    }

    // DDA: step one pixel at a time along the longer axis
    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
        let (sx, sy) = (dx / steps, dy / steps);
        let (mut x, mut y) = (x0, y0);
        for _ in 0..=steps as u32 {
            self.plot(x.round() as i64, y.round() as i64);
            x += sx;
            y += sy;
        }
    }

    fn clear(&mut self) {
        for px in self.img.pixels_mut() {
            *px = BACKGROUND;
        }
    }
}
