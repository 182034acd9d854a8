//! Scene store types for Lumen.
//!
//! A [`Scene`] owns the primitives and materials a render reads from. It is
//! built up front through the `add_*` methods and is read-only while a
//! render is in flight.

use lumen_math::{Color, Interval, Vec3};
use thiserror::Error;

use crate::dyn_array::DynArray;

/// Initial primitive capacity of a new scene.
pub const INITIAL_PRIMITIVE_CAPACITY: usize = 64;

/// Initial material capacity of a new scene.
pub const INITIAL_MATERIAL_CAPACITY: usize = 16;

/// Errors reported when checking a scene before rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Primitive {primitive} references material {index}, but the scene has {count} materials")]
    MaterialOutOfRange {
        primitive: usize,
        index: usize,
        count: usize,
    },

    #[error("Scene has primitives but no materials")]
    EmptyMaterials,
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Surface appearance parameters.
///
/// Reflection and transmission are blended by `transparency`; `roughness`
/// jitters the bounce normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Surface color (RGB, 0-1)
    pub albedo: Color,

    /// Roughness factor (0=mirror, 1=rough)
    pub roughness: f32,

    /// Metallic factor (0=dielectric, 1=metal)
    pub metallicity: f32,

    /// Emitted light color
    pub emission_color: Color,

    /// Multiplier applied to `emission_color`
    pub emission_strength: f32,

    /// Fraction of light transmitted (0=opaque, 1=fully transparent)
    pub transparency: f32,

    /// Index of refraction (1.0 = air, 1.5 = glass)
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Color::splat(0.5), // Grey default
            roughness: 1.0,
            metallicity: 0.0,
            emission_color: Color::ZERO,
            emission_strength: 0.0,
            transparency: 0.0,
            refractive_index: 1.5,
        }
    }
}

impl Material {
    /// Create an opaque, fully rough material with the given albedo.
    pub fn new(albedo: Color) -> Self {
        Self {
            albedo,
            ..Default::default()
        }
    }

    /// Set roughness (clamped to 0-1).
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = Interval::UNIT.clamp(roughness);
        self
    }

    /// Set metallicity (clamped to 0-1).
    pub fn with_metallicity(mut self, metallicity: f32) -> Self {
        self.metallicity = Interval::UNIT.clamp(metallicity);
        self
    }

    /// Set emission color and strength.
    pub fn with_emission(mut self, color: Color, strength: f32) -> Self {
        self.emission_color = color;
        self.emission_strength = strength.max(0.0);
        self
    }

    /// Set transparency (clamped to 0-1) and index of refraction.
    pub fn with_transparency(mut self, transparency: f32, refractive_index: f32) -> Self {
        self.transparency = Interval::UNIT.clamp(transparency);
        self.refractive_index = refractive_index;
        self
    }

    /// Light emitted by the surface.
    pub fn emitted(&self) -> Color {
        self.emission_color * self.emission_strength
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emission_strength > 0.0 && self.emission_color.length_squared() > 0.0
    }
}

/// A sphere given by its center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }
}

/// A triangle given by its three vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self { v0, v1, v2 }
    }
}

/// Geometry of a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
}

/// A renderable shape paired with the index of its material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material_index: usize,
}

/// A single directional light, used by the direct shading mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Direction the light travels (unit length)
    pub direction: Vec3,

    /// Light color
    pub color: Color,
}

impl DirectionalLight {
    /// Create a directional light. `direction` is normalized.
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            color,
        }
    }
}

/// A complete scene: primitives, materials and global illumination.
#[derive(Clone, Debug)]
pub struct Scene {
    primitives: DynArray<Primitive>,
    materials: DynArray<Material>,

    /// Radiance returned for rays that escape the scene
    pub sky_color: Color,

    /// Optional sun for the direct shading mode
    pub sun: Option<DirectionalLight>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with a black sky.
    pub fn new() -> Self {
        Self {
            primitives: DynArray::with_capacity(INITIAL_PRIMITIVE_CAPACITY),
            materials: DynArray::with_capacity(INITIAL_MATERIAL_CAPACITY),
            sky_color: Color::ZERO,
            sun: None,
        }
    }

    /// Set the sky color.
    pub fn with_sky_color(mut self, sky_color: Color) -> Self {
        self.sky_color = sky_color;
        self
    }

    /// Set the directional light.
    pub fn with_sun(mut self, sun: DirectionalLight) -> Self {
        self.sun = Some(sun);
        self
    }

    /// Add a material to the scene and return its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material)
    }

    /// Add a sphere and return its primitive index.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material_index: usize) -> usize {
        self.add_primitive(Shape::Sphere(Sphere::new(center, radius)), material_index)
    }

    /// Add a triangle and return its primitive index.
    pub fn add_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3, material_index: usize) -> usize {
        self.add_primitive(Shape::Triangle(Triangle::new(v0, v1, v2)), material_index)
    }

    fn add_primitive(&mut self, shape: Shape, material_index: usize) -> usize {
        debug_assert!(
            material_index < self.materials.len(),
            "material {} added before it exists",
            material_index
        );
        self.primitives.push(Primitive {
            shape,
            material_index,
        })
    }

    /// All primitives in insertion order.
    pub fn primitives(&self) -> &DynArray<Primitive> {
        &self.primitives
    }

    /// Get a material by index.
    ///
    /// Panics if the index is out of range; [`Scene::validate`] rules that
    /// out for every primitive before a render starts.
    pub fn material(&self, index: usize) -> &Material {
        &self.materials[index]
    }

    /// Get primitive count.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get material count.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Check that every primitive references an existing material.
    pub fn validate(&self) -> SceneResult<()> {
        let count = self.materials.len();
        if count == 0 && !self.primitives.is_empty() {
            return Err(SceneError::EmptyMaterials);
        }

        for (primitive, p) in self.primitives.iter().enumerate() {
            if p.material_index >= count {
                return Err(SceneError::MaterialOutOfRange {
                    primitive,
                    index: p.material_index,
                    count,
                });
            }
        }

        log::debug!(
            "Scene validated: {} primitives, {} materials ({} emissive)",
            self.primitives.len(),
            count,
            self.materials.iter().filter(|m| m.is_emissive()).count()
        );
        Ok(())
    }
}
