//! Lumen Renderer - CPU Ray Tracing
//!
//! A Monte Carlo ray tracer that renders one task per scanline on a fixed
//! worker pool and writes 24-bit RGB images.
//!
//! ```no_run
//! use std::sync::Arc;
//! use lumen_renderer::{render, Color, Material, RenderConfig, Scene, Vec3};
//!
//! let mut scene = Scene::new().with_sky_color(Color::new(0.5, 0.7, 0.9));
//! let red = scene.add_material(Material::new(Color::new(0.8, 0.2, 0.2)));
//! scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, red);
//!
//! let config = RenderConfig::default().with_resolution(320, 200);
//! let frame = render(Arc::new(scene), &config)?;
//! frame.save("output.bmp")?;
//! # Ok::<(), lumen_renderer::RenderError>(())
//! ```

mod camera;
mod config;
mod error;
mod frame;
mod intersect;
mod pool;
mod renderer;
mod sampling;
mod scanline;
mod sphere;
mod transport;
mod triangle;

pub use camera::{screen_coords, Camera};
pub use config::{RenderConfig, ShadingMode};
pub use error::{RenderError, RenderResult};
pub use frame::{FrameBuffer, CHANNELS};
pub use intersect::{trace, trace_ray, Intersect, RayHit, MISS_DISTANCE};
pub use pool::ThreadPool;
pub use renderer::{color_to_rgb, per_pixel, render, render_with_stats};
pub use sampling::{random_unit_vector, scanline_rng};
pub use scanline::{generate_scanlines, render_scanline, Scanline};
pub use transport::{direct_light, incident_light, PathStats, ROUGHNESS_SPREAD};

/// Re-export scene and math types so callers need only this crate
pub use lumen_core::{DirectionalLight, Material, Primitive, Scene, SceneError, Shape, Sphere, Triangle};
pub use lumen_math::{Color, Interval, Ray, Vec3};
