//! Scene geometry in virtual pixels.

use ratatui::layout::Rect;

/// Width of one terminal cell in virtual pixels.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Height of one terminal cell in virtual pixels.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Mountain base sits at this fraction of the viewport height; the ground starts here too.
const GROUND_RATIO: f32 = 0.9;
/// Mountains overshoot the right edge by this fraction of the width.
const MOUNTAIN_SPAN_RATIO: f32 = 1.1;
/// Mountains are shifted left by this fraction of the width.
const MOUNTAIN_OFFSET_RATIO: f32 = 0.05;
/// Reference peak height for the back layer, as a fraction of the height.
const PEAK_TOP_RATIO: f32 = 0.8;

/// A circle positioned in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    /// Radius, never negative.
    pub r: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, r: f32) -> Self {
        Self { x, y, r: r.max(0.0) }
    }

    /// Lowest point of the circle.
    pub fn bottom(&self) -> f32 {
        self.y + self.r
    }

    /// Squared distance from the center to a point.
    pub fn distance_sq(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy
    }
}

/// The drawable area, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport covering a terminal area.
    pub fn from_area(area: Rect) -> Self {
        Self::new(
            area.width as f32 * CELL_WIDTH_PX,
            area.height as f32 * CELL_HEIGHT_PX,
        )
    }

    /// Number of terminal columns the viewport spans.
    pub fn columns(&self) -> u16 {
        (self.width / CELL_WIDTH_PX).round() as u16
    }

    /// Number of terminal rows the viewport spans.
    pub fn rows(&self) -> u16 {
        (self.height / CELL_HEIGHT_PX).round() as u16
    }

    /// Y coordinate of the top of the ground plane.
    pub fn ground_top_y(&self) -> f32 {
        self.height * GROUND_RATIO
    }

    /// The three mountain silhouettes, back to front.
    pub fn mountain_layers(&self) -> [MountainLayer; 3] {
        [
            MountainLayer::new(self, 2, 1.0),
            MountainLayer::new(self, 4, 0.8),
            MountainLayer::new(self, 6, 0.5),
        ]
    }
}

/// One layer of triangular peaks sharing a common base line.
#[derive(Debug, Clone, PartialEq)]
pub struct MountainLayer {
    /// Polygon vertices; the polygon closes back along the base.
    pub vertices: Vec<(f32, f32)>,
}

impl MountainLayer {
    /// Build a layer with `segments` alternating base/peak steps.
    ///
    /// The peak height is `height - (height * PEAK_TOP_RATIO) * peak_scale`, so
    /// a smaller scale gives lower, flatter peaks in front.
    fn new(viewport: &Viewport, segments: u32, peak_scale: f32) -> Self {
        let base_y = viewport.ground_top_y();
        let peak_y = viewport.height - viewport.height * PEAK_TOP_RATIO * peak_scale;
        let span = viewport.width * MOUNTAIN_SPAN_RATIO;
        let offset = viewport.width * MOUNTAIN_OFFSET_RATIO;

        let vertices = (0..=segments)
            .map(|i| {
                let x = i as f32 * (span / segments as f32) - offset;
                let y = if i % 2 == 0 { base_y } else { peak_y };
                (x, y)
            })
            .collect();

        Self { vertices }
    }

    /// Number of peaks in the layer.
    pub fn peaks(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Even-odd point-in-polygon test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = self.vertices[i];
            let (xj, yj) = self.vertices[j];
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_from_area() {
        let viewport = Viewport::from_area(Rect::new(0, 0, 100, 40));
        assert_eq!(viewport.width, 800.0);
        assert_eq!(viewport.height, 640.0);
        assert_eq!(viewport.columns(), 100);
        assert_eq!(viewport.rows(), 40);
    }

    #[test]
    fn test_ground_top() {
        let viewport = Viewport::new(1000.0, 1000.0);
        assert_eq!(viewport.ground_top_y(), 900.0);
    }

    #[test]
    fn test_mountain_layers_shape() {
        let viewport = Viewport::new(1000.0, 1000.0);
        let [back, middle, front] = viewport.mountain_layers();

        assert_eq!(back.peaks(), 1);
        assert_eq!(middle.peaks(), 2);
        assert_eq!(front.peaks(), 3);

        // Layers start left of the viewport and end past it
        assert_eq!(back.vertices[0], (-50.0, 900.0));
        assert_eq!(back.vertices[2], (1050.0, 900.0));

        // Back peak is highest, front peaks lowest
        assert!((back.vertices[1].1 - 200.0).abs() < 1e-3);
        assert!((middle.vertices[1].1 - 360.0).abs() < 1e-3);
        assert!((front.vertices[1].1 - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_mountain_contains() {
        let viewport = Viewport::new(1000.0, 1000.0);
        let [back, _, _] = viewport.mountain_layers();

        // Just under the peak
        assert!(back.contains(500.0, 250.0));
        // Above the peak
        assert!(!back.contains(500.0, 150.0));
        // Below the base
        assert!(!back.contains(500.0, 950.0));
        // Far corner, outside the slope
        assert!(!back.contains(10.0, 300.0));
    }

    #[test]
    fn test_circle_radius_not_negative() {
        let circle = Circle::new(0.0, 0.0, -3.0);
        assert_eq!(circle.r, 0.0);
        assert_eq!(circle.bottom(), 0.0);
    }
}
