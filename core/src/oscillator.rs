use std::f32::consts::E;

// Slider ranges exposed to the app
pub const SPEED_MIN: u32 = 100;
pub const SPEED_MAX: u32 = 865;
pub const SPEED_DEFAULT: u32 = 300;

pub const DEPTH_SCALE_MAX: f32 = E;
pub const DEPTH_SCALE_DEFAULT: f32 = 1.5;
pub const DEPTH_SCALE_STEP: f64 = 0.01;

// Depth for the current frame: a sine swing over [0, 2*scale].
// Raising `speed` shrinks the divisor, so the swing runs faster;
// at SPEED_MAX the divisor bottoms out at 136 ms per radian.
pub fn depth_at(elapsed_ms: f64, speed: u32, scale: f32) -> f32 {
    let swing = 1.0 + (elapsed_ms / (1001 - speed) as f64).sin();
    (swing * scale as f64) as f32
}
