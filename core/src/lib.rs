// core holds the segment tree, the snowflake assembly and the depth oscillator
pub mod oscillator;
pub mod raster;
pub mod segment;
pub mod snowflake;
pub mod vec2;

pub use raster::RasterCanvas;
pub use segment::Segment;
pub use snowflake::Snowflake;
pub use vec2::Vec2;

// Drawing surface the segment tree renders onto.
// The app implements this over an egui painter,
// `RasterCanvas` over an image buffer.
// Stroke color is stateful: depth-0 lines draw in whatever
// stroke is current, only the morph legs change it.
pub trait Canvas {
    // Select the stroke color for subsequent lines
    fn set_stroke(&mut self, rgb: [u8; 3]);

    // Draw a line in the current stroke
    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);

    // Wipe the surface; the driver calls this once per frame
    fn clear(&mut self);
}
