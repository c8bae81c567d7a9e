use crate::Canvas;
use crate::vec2::Vec2;
use std::f32::consts::FRAC_PI_2;

// Stroke colors for the four morph legs, in drawing order
const LEG_COLORS: [[u8; 3]; 4] = [
    [255, 200, 200],
    [200, 255, 240],
    [255, 240, 200],
    [200, 240, 255],
];

// One edge of the fractal, able to subdivide into four self-similar legs.
// `depth` is real-valued: its integer part says how many more levels to
// expand, its fractional part blends the current level between the straight
// line and the peaked Koch shape.
pub struct Segment {
    start: Vec2,
    end: Vec2,
    // Via-points of the straight path: quarter, midpoint, third-from-end
    straight: [Vec2; 3],
    // Via-points of the peaked path: third, apex, third-from-end.
    // The last via-point is shared with the straight path; kept that way.
    peaked: [Vec2; 3],
    depth: f32,
    // Created at most once, then only re-depthed
    children: Option<Box<[Segment; 4]>>,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2, depth: f32) -> Self {
        let d = end - start;
        let quarter = start + d / 4.0;
        let third = start + d / 3.0;
        let mid = start + d / 2.0;
        // Classic Koch peak: the third vector turned a quarter turn off the line
        let apex = mid + (d / 3.0).rotate(-FRAC_PI_2);
        let third_from_end = end - d / 3.0;

        let mut seg = Self {
            start,
            end,
            straight: [quarter, mid, third_from_end],
            peaked: [third, apex, third_from_end],
            depth: 0.0,
            children: None,
        };
        seg.set_depth(depth);
        seg
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    // Clamp, then expand. The stored depth never goes below zero; children
    // are materialized the first time the depth reaches 1 and receive the
    // pre-clamp remainder, so a request of exactly 1.0 leaves them at 0.
    pub fn set_depth(&mut self, d: f32) {
        self.depth = d.max(0.0);
        if d >= 1.0 {
            if self.children.is_none() {
                self.fill_children();
            }
            if let Some(children) = &mut self.children {
                for child in children.iter_mut() {
                    child.set_depth(d - 1.0);
                }
            }
        }
    }

    // Split the peaked path into its four legs, one level shallower
    fn fill_children(&mut self) {
        let [third, apex, third_from_end] = self.peaked;
        let d = self.depth - 1.0;
        self.children = Some(Box::new([
            Segment::new(self.start, third, d),
            Segment::new(third, apex, d),
            Segment::new(apex, third_from_end, d),
            Segment::new(third_from_end, self.end, d),
        ]));
    }

    // Three-way render rule:
    //   depth == 0  -> one straight line in the current stroke
    //   0 < depth < 1 -> four legs, via-points lerped straight->peaked,
    //                    each leg in its fixed pastel stroke
    //   depth >= 1  -> the children draw themselves
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if self.depth == 0.0 {
            canvas.line(self.start.x, self.start.y, self.end.x, self.end.y);
        } else if self.depth < 1.0 {
            let vias = [
                self.straight[0].lerp(self.peaked[0], self.depth),
                self.straight[1].lerp(self.peaked[1], self.depth),
                self.straight[2].lerp(self.peaked[2], self.depth),
            ];
            let legs = [
                (self.start, vias[0]),
                (vias[0], vias[1]),
                (vias[1], vias[2]),
                (vias[2], self.end),
            ];
            for (color, (a, b)) in LEG_COLORS.iter().zip(legs) {
                canvas.set_stroke(*color);
                canvas.line(a.x, a.y, b.x, b.y);
            }
        } else if let Some(children) = &self.children {
            for child in children.iter() {
                child.draw(canvas);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LEG_COLORS, Segment};
    use crate::Canvas;
    use crate::vec2::Vec2;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Cmd {
        Stroke([u8; 3]),
        Line([f32; 4]),
    }

    // Records draw commands instead of painting them
    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Canvas for Recorder {
        fn set_stroke(&mut self, rgb: [u8; 3]) {
            self.cmds.push(Cmd::Stroke(rgb));
        }
        fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
            self.cmds.push(Cmd::Line([x0, y0, x1, y1]));
        }
        fn clear(&mut self) {
            self.cmds.clear();
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn assert_line(cmd: Cmd, expected: [f32; 4]) {
        match cmd {
            Cmd::Line(got) => {
                for i in 0..4 {
                    assert!(close(got[i], expected[i]), "line {:?} vs {:?}", got, expected);
                }
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    // A 12-unit horizontal segment keeps the anchor arithmetic readable:
    // quarter (3,0), third (4,0), mid (6,0), apex (6,-4), third-from-end (8,0)
    fn horizontal(depth: f32) -> Segment {
        Segment::new(Vec2::new(0.0, 0.0), Vec2::new(12.0, 0.0), depth)
    }

    #[test]
    fn negative_depth_clamps_to_zero() {
        let mut seg = horizontal(0.0);
        seg.set_depth(-3.5);
        assert_eq!(seg.depth(), 0.0);
        // Clamp applies at construction too
        let seg = horizontal(-1.0);
        assert_eq!(seg.depth(), 0.0);
    }

    #[test]
    fn depth_one_creates_children_at_zero() {
        let mut seg = horizontal(0.0);
        assert!(seg.children.is_none());
        seg.set_depth(1.0);
        let children = seg.children.as_ref().unwrap();
        for child in children.iter() {
            assert_eq!(child.depth(), 0.0);
        }
    }

    #[test]
    fn fractional_remainder_propagates() {
        let mut seg = horizontal(0.0);
        seg.set_depth(2.25);
        let children = seg.children.as_ref().unwrap();
        for child in children.iter() {
            assert!(close(child.depth(), 1.25));
            let grandchildren = child.children.as_ref().unwrap();
            for g in grandchildren.iter() {
                assert!(close(g.depth(), 0.25));
            }
        }
    }

    #[test]
    fn children_identity_is_stable() {
        let mut seg = horizontal(2.0);
        let first: *const Segment = &seg.children.as_ref().unwrap()[0];
        seg.set_depth(0.3);
        seg.set_depth(2.7);
        let again: *const Segment = &seg.children.as_ref().unwrap()[0];
        assert!(std::ptr::eq(first, again));
    }

    #[test]
    fn children_survive_depth_drop_untouched() {
        let mut seg = horizontal(1.5);
        seg.set_depth(0.4);
        // Still allocated, still at the depth the last propagation left them
        let children = seg.children.as_ref().unwrap();
        for child in children.iter() {
            assert!(close(child.depth(), 0.5));
        }
    }

    #[test]
    fn depth_zero_draws_one_line() {
        let seg = horizontal(0.0);
        let mut rec = Recorder::default();
        seg.draw(&mut rec);
        assert_eq!(rec.cmds.len(), 1);
        assert_line(rec.cmds[0], [0.0, 0.0, 12.0, 0.0]);
    }

    #[test]
    fn half_depth_draws_four_colored_legs() {
        let seg = horizontal(0.5);
        let mut rec = Recorder::default();
        seg.draw(&mut rec);
        // Four stroke+line pairs
        assert_eq!(rec.cmds.len(), 8);
        for (i, &color) in LEG_COLORS.iter().enumerate() {
            assert_eq!(rec.cmds[2 * i], Cmd::Stroke(color));
        }
        // Via-points halfway between straight and peaked variants:
        // (3.5,0) between quarter and third, (6,-2) between mid and apex,
        // (8,0) shared by both paths
        assert_line(rec.cmds[1], [0.0, 0.0, 3.5, 0.0]);
        assert_line(rec.cmds[3], [3.5, 0.0, 6.0, -2.0]);
        assert_line(rec.cmds[5], [6.0, -2.0, 8.0, 0.0]);
        assert_line(rec.cmds[7], [8.0, 0.0, 12.0, 0.0]);
    }

    #[test]
    fn unit_depth_delegates_to_children() {
        let seg = horizontal(1.0);
        let mut rec = Recorder::default();
        seg.draw(&mut rec);
        // Each child is at depth 0: four plain lines, no stroke changes
        assert_eq!(rec.cmds.len(), 4);
        assert_line(rec.cmds[0], [0.0, 0.0, 4.0, 0.0]);
        assert_line(rec.cmds[1], [4.0, 0.0, 6.0, -4.0]);
        assert_line(rec.cmds[2], [6.0, -4.0, 8.0, 0.0]);
        assert_line(rec.cmds[3], [8.0, 0.0, 12.0, 0.0]);
    }

    #[test]
    fn draw_is_idempotent() {
        for depth in [0.0, 0.5, 1.0, 1.7, 2.3] {
            let seg = horizontal(depth);
            let mut first = Recorder::default();
            let mut second = Recorder::default();
            seg.draw(&mut first);
            seg.draw(&mut second);
            assert_eq!(first.cmds, second.cmds, "depth {}", depth);
        }
    }

    #[test]
    fn line_count_grows_four_fold_per_level() {
        // depth 2 expands two full levels: 16 straight lines
        let seg = horizontal(2.0);
        let mut rec = Recorder::default();
        seg.draw(&mut rec);
        assert_eq!(rec.cmds.len(), 16);
        assert!(rec.cmds.iter().all(|c| matches!(c, Cmd::Line(_))));
    }
}
