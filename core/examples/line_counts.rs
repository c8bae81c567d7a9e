use koch_core::{Canvas, Snowflake, Vec2};
use std::f32::consts::E;

// Counts draw commands instead of painting them
#[derive(Default)]
struct Counter {
    lines: usize,
    strokes: usize,
}

impl Canvas for Counter {
    fn set_stroke(&mut self, _rgb: [u8; 3]) {
        self.strokes += 1;
    }
    fn line(&mut self, _x0: f32, _y0: f32, _x1: f32, _y1: f32) {
        self.lines += 1;
    }
    fn clear(&mut self) {
        self.lines = 0;
        self.strokes = 0;
    }
}

fn main() {
    // One snowflake across all depths, so cached children get reused
    let mut flake = Snowflake::new(Vec2::new(200.0, 200.0), 160.0);

    for depth in [0.0, 0.25, 0.5, 1.0, 1.5, 2.0, 2.5, E] {
        let mut counter = Counter::default();
        flake.set_depth(depth);
        flake.draw(&mut counter);
        println!(
            "depth {:>5.2}: {:>3} lines, {:>3} stroke changes",
            depth, counter.lines, counter.strokes
        );
    }
}
