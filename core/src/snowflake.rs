use crate::Canvas;
use crate::segment::Segment;
use crate::vec2::Vec2;
use std::f32::consts::TAU;

// The three root segments of the shape: an equilateral triangle around a
// centre point, first vertex a quarter turn from (1, 0) and the others a
// third of a turn apart. One depth value fans out to all three roots.
pub struct Snowflake {
    segments: [Segment; 3],
}

impl Snowflake {
    pub fn new(centre: Vec2, radius: f32) -> Self {
        let mut offset = Vec2::new(radius, 0.0).rotate(TAU / 4.0);
        let mut vertices = [Vec2::new(0.0, 0.0); 3];
        for v in &mut vertices {
            *v = centre + offset;
            offset = offset.rotate(TAU / 3.0);
        }
        Self {
            segments: [
                Segment::new(vertices[0], vertices[1], 0.0),
                Segment::new(vertices[1], vertices[2], 0.0),
                Segment::new(vertices[2], vertices[0], 0.0),
            ],
        }
    }

    pub fn set_depth(&mut self, d: f32) {
        for seg in &mut self.segments {
            seg.set_depth(d);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for seg in &self.segments {
            seg.draw(canvas);
        }
    }

    pub fn segments(&self) -> &[Segment; 3] {
        &self.segments
    }
}
