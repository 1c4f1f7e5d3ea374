//! Scene renderer state.

use ratatui::{Frame, widgets::Paragraph};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use nightfall_core::Viewport;
use nightfall_sim::Scene;

use crate::color::{Rgb, palette_color};
use crate::layers::{Layer, balls, scenery, sky, stars};
use crate::raster::Raster;

/// Renderer state carried between frames.
#[derive(Debug)]
pub struct SceneRenderer {
    /// Sky gradient for the current size.
    sky: Raster,
    /// Mountains and ground for the current size.
    scenery: Layer,
    /// Frame being composed.
    canvas: Raster,
    /// Last rendered width in cells.
    last_width: u16,
    /// Last rendered height in cells.
    last_height: u16,
    /// Drives the per-frame glow colors.
    rng: Pcg32,
}

impl SceneRenderer {
    /// Create a renderer; `seed` drives the glow flicker.
    pub fn new(seed: u64) -> Self {
        Self {
            sky: Raster::new(0, 0),
            scenery: Layer::new(0, 0),
            canvas: Raster::new(0, 0),
            last_width: 0,
            last_height: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Render the scene to the frame.
    ///
    /// The scene's viewport is fixed at startup, so only the part of the
    /// terminal it covers is drawn.
    pub fn render(&mut self, frame: &mut Frame, scene: &Scene) {
        let viewport = scene.viewport();
        let mut area = frame.area();
        area.width = area.width.min(viewport.columns());
        area.height = area.height.min(viewport.rows());
        if area.is_empty() {
            return;
        }

        let canvas = self.compose(scene, area.width, area.height);
        frame.render_widget(Paragraph::new(canvas.to_lines()), area);
    }

    /// Compose a full frame for `width` by `height` cells.
    pub fn compose(&mut self, scene: &Scene, width: u16, height: u16) -> &Raster {
        // Rebuild cached layers if dimensions changed
        if width != self.last_width || height != self.last_height {
            self.rebuild(scene.viewport(), width, height);
        }

        self.canvas.copy_from(&self.sky);
        stars::paint(&mut self.canvas, scene.starfield().stars());
        self.scenery.composite_onto(&mut self.canvas);

        // Every ball shares one fill; each gets a fresh glow color per frame
        let fill = palette_color(scene.ball_lightness());
        for ball in scene.balls() {
            let glow = self.random_glow();
            balls::paint(&mut self.canvas, ball, fill, glow);
        }

        &self.canvas
    }

    fn rebuild(&mut self, viewport: &Viewport, width: u16, height: u16) {
        self.canvas = Raster::for_cells(width, height);
        self.sky = Raster::for_cells(width, height);
        sky::paint(&mut self.sky, viewport);
        self.scenery = scenery::build(viewport, self.canvas.width(), self.canvas.height());
        self.last_width = width;
        self.last_height = height;
    }

    fn random_glow(&mut self) -> Rgb {
        let lightness = (self.rng.random::<f32>() * 50.0 + 50.0).floor() as u8;
        palette_color(lightness)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use nightfall_config::SceneConfig;
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    use super::*;
    use crate::color::{GROUND_COLOR, SKY_STOPS, gradient_at};

    fn scene(columns: u16, rows: u16) -> Scene {
        Scene::new(
            SceneConfig::default(),
            Viewport::from_area(ratatui::layout::Rect::new(0, 0, columns, rows)),
            Instant::now(),
            7,
        )
    }

    #[test]
    fn test_render_fills_terminal() {
        let scene = scene(40, 20);
        let mut renderer = SceneRenderer::new(1);
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();

        terminal.draw(|frame| renderer.render(frame, &scene)).unwrap();

        let buffer = terminal.backend().buffer();
        for y in 0..20 {
            for x in 0..40 {
                assert_eq!(buffer[(x, y)].symbol(), "▀");
            }
        }
        // Bottom row is ground
        assert_eq!(buffer[(0, 19)].bg, Color::from(GROUND_COLOR));
    }

    #[test]
    fn test_larger_terminal_is_clipped_to_viewport() {
        let scene = scene(10, 5);
        let mut renderer = SceneRenderer::new(1);
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();

        terminal.draw(|frame| renderer.render(frame, &scene)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(9, 4)].symbol(), "▀");
        assert_eq!(buffer[(15, 2)].symbol(), " ");
        assert_eq!(buffer[(2, 6)].symbol(), " ");
    }

    #[test]
    fn test_sky_cache_matches_gradient() {
        let scene = scene(40, 20);
        let mut renderer = SceneRenderer::new(1);
        renderer.compose(&scene, 40, 20);

        let (_, py) = Raster::sample_center(0, 0);
        let expected = gradient_at(&SKY_STOPS, py / scene.viewport().height);
        assert_eq!(renderer.sky.get(0, 0), Some(expected));
        assert_eq!(renderer.sky.get(39, 0), Some(expected));
    }

    #[test]
    fn test_balls_are_drawn() {
        let start = Instant::now();
        let mut scene = scene(60, 30);
        let mut renderer = SceneRenderer::new(3);
        let empty = renderer.compose(&scene, 60, 30).clone();

        // Run until a ball has fallen into view
        let mut frame = 1;
        while !scene
            .balls()
            .iter()
            .any(|b| b.circle.y > 100.0 && b.circle.y < 300.0)
        {
            scene.tick(start + Duration::from_millis(16 * frame));
            frame += 1;
            assert!(frame < 2000, "no ball reached the sky");
        }

        let drawn = renderer.compose(&scene, 60, 30);
        assert_ne!(&empty, drawn);
    }
}
