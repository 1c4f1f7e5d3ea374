//! Square-sample raster shown two samples per terminal cell.

use nightfall_core::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::color::Rgb;

/// Size of one raster sample in virtual pixels.
pub const SAMPLE_PX: f32 = CELL_WIDTH_PX;

/// Character whose foreground is the upper sample and background the lower one.
const UPPER_HALF: &str = "▀";

/// A grid of colored samples, two rows per terminal row.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Columns, one per terminal column.
    width: usize,
    /// Sample rows, two per terminal row.
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// A raster covering `columns` by `rows` terminal cells.
    pub fn for_cells(columns: u16, rows: u16) -> Self {
        let per_cell = (CELL_HEIGHT_PX / SAMPLE_PX) as usize;
        Self::new(columns as usize, rows as usize * per_cell)
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Center of a sample in virtual pixels.
    pub fn sample_center(x: usize, y: usize) -> (f32, f32) {
        ((x as f32 + 0.5) * SAMPLE_PX, (y as f32 + 0.5) * SAMPLE_PX)
    }

    /// Sample containing a point, if it lies on the raster.
    pub fn sample_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let x = (px / SAMPLE_PX) as usize;
        let y = (py / SAMPLE_PX) as usize;
        (x < self.width && y < self.height).then_some((x, y))
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Blend `color` over the sample with the given opacity.
    pub fn blend(&mut self, x: usize, y: usize, color: Rgb, alpha: f32) {
        if let Some(current) = self.get(x, y) {
            self.set(x, y, current.blend(color, alpha));
        }
    }

    /// Copy another raster of the same size.
    pub fn copy_from(&mut self, other: &Raster) {
        if self.width == other.width && self.height == other.height {
            self.pixels.copy_from_slice(&other.pixels);
        }
    }

    /// Convert to half-block lines, one per terminal row.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.height / 2)
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| {
                        let top = self.pixels[(row * 2) * self.width + x];
                        let bottom = self.pixels[(row * 2 + 1) * self.width + x];
                        Span::styled(
                            UPPER_HALF,
                            Style::new().fg(Color::from(top)).bg(Color::from(bottom)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
