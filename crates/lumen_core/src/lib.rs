//! Lumen Core - Scene storage for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive`, `Material`, `DirectionalLight`
//! - **Storage**: `DynArray`, the doubling growable array behind scene
//!   storage and the renderer's task queue
//!
//! # Example
//!
//! ```
//! use lumen_core::{Material, Scene};
//! use lumen_math::{Color, Vec3};
//!
//! let mut scene = Scene::new().with_sky_color(Color::new(0.5, 0.7, 0.9));
//! let red = scene.add_material(Material::new(Color::new(1.0, 0.0, 0.0)));
//! scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, red);
//! assert!(scene.validate().is_ok());
//! ```

pub mod dyn_array;
pub mod scene;

// Re-export commonly used types
pub use dyn_array::DynArray;
pub use scene::{
    DirectionalLight, Material, Primitive, Scene, SceneError, SceneResult, Shape, Sphere,
    Triangle,
};
