use std::time::Instant;

use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{Color32, CornerRadius, Pos2, Rect, Sense, Stroke};
use koch_core::oscillator::{
    self, DEPTH_SCALE_DEFAULT, DEPTH_SCALE_MAX, DEPTH_SCALE_STEP, SPEED_DEFAULT, SPEED_MAX,
    SPEED_MIN,
};
use koch_core::{Canvas, Snowflake, Vec2};

// Canvas over an egui painter; the stroke starts out black each frame
struct PainterCanvas<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
    stroke: Stroke,
}

impl<'a> PainterCanvas<'a> {
    fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            stroke: Stroke::new(1.0, Color32::BLACK),
        }
    }
}

impl Canvas for PainterCanvas<'_> {
    fn set_stroke(&mut self, rgb: [u8; 3]) {
        self.stroke.color = Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
    }

    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.painter
            .line_segment([Pos2::new(x0, y0), Pos2::new(x1, y1)], self.stroke);
    }

    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, CornerRadius::ZERO, Color32::WHITE);
    }
}

struct KochApp {
    // slider state
    speed: u32,
    depth_scale: f32,

    // animation clock
    started: Instant,

    // root segments; rebuilt when the drawing region changes size
    snowflake: Option<Snowflake>,
    last_size: egui::Vec2,

    // depth currently on screen, for the status line
    current_depth: f32,
}

impl Default for KochApp {
    fn default() -> Self {
        Self {
            speed: SPEED_DEFAULT,
            depth_scale: DEPTH_SCALE_DEFAULT,
            started: Instant::now(),
            snowflake: None,
            last_size: egui::Vec2::ZERO,
            current_depth: 0.0,
        }
    }
}

impl App for KochApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Koch Morph");
            ui.separator();

            ui.label("Speed");
            ui.add(egui::Slider::new(&mut self.speed, SPEED_MIN..=SPEED_MAX));

            ui.label("Depth");
            ui.add(
                egui::Slider::new(&mut self.depth_scale, 0.0..=DEPTH_SCALE_MAX)
                    .step_by(DEPTH_SCALE_STEP),
            );

            ui.separator();
            ui.label(format!("current depth {:.2}", self.current_depth));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let rect = response.rect;

            // Rebuild the triangle when the region changes; children are
            // re-grown lazily on the next frames
            if self.snowflake.is_none() || self.last_size != rect.size() {
                let centre = Vec2::new(rect.center().x, rect.center().y);
                self.snowflake = Some(Snowflake::new(centre, rect.height() * 2.0 / 5.0));
                self.last_size = rect.size();
            }

            let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
            let d = oscillator::depth_at(elapsed_ms, self.speed, self.depth_scale);
            self.current_depth = d;

            let mut canvas = PainterCanvas::new(&painter, rect);
            canvas.clear();
            if let Some(flake) = &mut self.snowflake {
                flake.set_depth(d);
                flake.draw(&mut canvas);
            }
        });

        // Keep the animation running even without input events
        ctx.request_repaint();
    }
}

fn main() {
    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Koch Morph",
        opts,
        Box::new(|_cc| Ok(Box::new(KochApp::default()))),
    )
    .unwrap();
}
