//! Pixel sampling and the scanline render orchestrator.
//!
//! [`render`] splits the image into one task per row, runs them on a
//! [`ThreadPool`], waits for the pool to drain and hands back the finished
//! [`FrameBuffer`].

use std::sync::Arc;
use std::time::Instant;

use lumen_core::Scene;
use lumen_math::{Color, Interval};
use parking_lot::Mutex;
use rand::RngCore;

use crate::camera::Camera;
use crate::error::RenderResult;
use crate::frame::FrameBuffer;
use crate::pool::ThreadPool;
use crate::scanline::{generate_scanlines, render_scanline};
use crate::transport::{direct_light, incident_light, PathStats};
use crate::{RenderConfig, ShadingMode};

/// Estimate the color of the screen point `(screen_x, screen_y)`.
///
/// Averages `config.samples_per_pixel` estimates of the camera ray through
/// that point and clamps the mean to [0, 1].
pub fn per_pixel(
    screen_x: f32,
    screen_y: f32,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
    stats: &mut PathStats,
) -> Color {
    let ray = camera.ray(screen_x, screen_y);
    let samples = config.samples_per_pixel.max(1);

    let mut pixel_color = Color::ZERO;
    for _ in 0..samples {
        pixel_color += match config.shading {
            ShadingMode::PathTraced => incident_light(&ray, scene, 0, config, rng, stats),
            ShadingMode::Direct => direct_light(&ray, scene, config, stats),
        };
    }

    Interval::UNIT.clamp_vec3(pixel_color / samples as f32)
}

/// Convert a color to 8-bit RGB, truncating after scaling to [0, 255].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let scaled = Interval::UNIT.clamp_vec3(color) * 255.0;
    [scaled.x as u8, scaled.y as u8, scaled.z as u8]
}

/// Render the scene on a pool of `config.num_threads` workers.
pub fn render(scene: Arc<Scene>, config: &RenderConfig) -> RenderResult<FrameBuffer> {
    render_with_stats(scene, config).map(|(frame, _)| frame)
}

/// Render the scene and also return the summed path statistics.
pub fn render_with_stats(
    scene: Arc<Scene>,
    config: &RenderConfig,
) -> RenderResult<(FrameBuffer, PathStats)> {
    config.validate()?;
    scene.validate()?;

    log::info!(
        "Rendering {}x{} @ {} spp, {} bounces, {} threads",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_bounces,
        config.num_threads
    );
    let start = Instant::now();

    let frame = FrameBuffer::new(config.width, config.height);
    let camera = Camera::from_config(config);
    let totals = Arc::new(Mutex::new(PathStats::default()));

    let pool = ThreadPool::new(config.num_threads)?;
    for scanline in generate_scanlines(config.width, config.height) {
        let scene = Arc::clone(&scene);
        let frame = frame.clone();
        let totals = Arc::clone(&totals);
        let config = *config;

        pool.add_task(move || {
            let stats = render_scanline(&scanline, &scene, &camera, &config, &frame);
            *totals.lock() += stats;
        });
    }
    pool.wait_for_tasks();
    pool.destroy();

    let stats = *totals.lock();
    log::info!("Rendered in {:?}", start.elapsed());
    log::debug!(
        "{} rays, {} reflections, {} refractions, {} total internal reflections",
        stats.rays,
        stats.reflected,
        stats.transmitted,
        stats.internal_reflections
    );

    Ok((frame, stats))
}
