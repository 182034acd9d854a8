//! Scanline work units.
//!
//! The image is split into one task per row. Rows are independent: each
//! seeds its own generator and writes only its own slice of the frame.

use lumen_core::Scene;

use crate::camera::{screen_coords, Camera};
use crate::frame::FrameBuffer;
use crate::renderer::{color_to_rgb, per_pixel};
use crate::sampling::scanline_rng;
use crate::transport::PathStats;
use crate::RenderConfig;

/// One image row to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanline {
    /// Row index, 0 at the top of the image
    pub y: u32,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Scanline {
    /// Create a new scanline.
    pub fn new(y: u32, width: u32, height: u32) -> Self {
        Self { y, width, height }
    }
}

/// Generate one scanline per image row, top to bottom.
pub fn generate_scanlines(width: u32, height: u32) -> Vec<Scanline> {
    (0..height).map(|y| Scanline::new(y, width, height)).collect()
}

/// Render every pixel of `scanline` straight into `frame`.
pub fn render_scanline(
    scanline: &Scanline,
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    frame: &FrameBuffer,
) -> PathStats {
    let mut rng = scanline_rng(config.seed, scanline.y);
    let mut stats = PathStats::default();

    for x in 0..scanline.width {
        let (screen_x, screen_y) = screen_coords(x, scanline.y, scanline.width, scanline.height);
        let color = per_pixel(screen_x, screen_y, camera, scene, config, &mut rng, &mut stats);
        frame.set_pixel(x, scanline.y, color_to_rgb(color));
    }

    stats
}
