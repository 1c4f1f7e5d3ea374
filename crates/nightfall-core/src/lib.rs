//! Core types shared by the nightfall simulation and renderer.

mod geometry;

pub use geometry::{Circle, MountainLayer, Viewport, CELL_HEIGHT_PX, CELL_WIDTH_PX};
