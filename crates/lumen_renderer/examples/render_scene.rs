//! Demo scene render.
//!
//! Renders a few spheres, a mirror wall and a glass ball, then saves the
//! result to `output.bmp`. An optional JSON file overrides render settings:
//!
//! ```text
//! cargo run --release --example render_scene -- settings.json
//! ```

use std::sync::Arc;

use anyhow::Context;
use lumen_renderer::{render, Color, Material, RenderConfig, Scene, Vec3};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            serde_json::from_str::<RenderConfig>(&text)
                .with_context(|| format!("parsing config {}", path))?
        }
        None => RenderConfig::default(),
    };

    let start = std::time::Instant::now();
    let scene = build_scene();
    log::info!(
        "Scene built in {:?}: {} primitives, {} materials",
        start.elapsed(),
        scene.primitive_count(),
        scene.material_count()
    );

    let frame = render(Arc::new(scene), &config)?;

    let filename = "output.bmp";
    frame.save(filename)?;
    log::info!("Saved to {}", filename);
    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new().with_sky_color(Color::new(0.6, 0.7, 0.9));

    let gold = scene.add_material(
        Material::new(Color::new(1.0, 0.8, 0.3))
            .with_roughness(0.3)
            .with_metallicity(1.0)
            .with_emission(Color::new(1.0, 0.8, 0.3), 2.0),
    );
    let red = scene.add_material(Material::new(Color::new(0.8, 0.2, 0.2)).with_roughness(0.9));
    let ground = scene.add_material(Material::new(Color::new(0.3, 0.6, 0.3)));
    let mirror = scene.add_material(Material::new(Color::splat(0.9)).with_roughness(0.0));
    let glass = scene.add_material(
        Material::new(Color::ONE)
            .with_roughness(0.0)
            .with_transparency(0.95, 1.5),
    );

    // Ground
    scene.add_sphere(Vec3::new(0.0, -101.0, 6.0), 100.0, ground);

    scene.add_sphere(Vec3::new(0.0, 0.5, 7.0), 1.5, gold);
    scene.add_sphere(Vec3::new(-2.5, -0.3, 5.5), 0.7, red);
    scene.add_sphere(Vec3::new(2.5, -0.3, 5.5), 0.7, red);
    scene.add_sphere(Vec3::new(0.8, -0.5, 3.5), 0.5, glass);

    // Mirror wall behind the spheres
    let (bl, br) = (Vec3::new(-6.0, -1.0, 11.0), Vec3::new(6.0, -1.0, 11.0));
    let (tl, tr) = (Vec3::new(-6.0, 5.0, 11.0), Vec3::new(6.0, 5.0, 11.0));
    scene.add_triangle(bl, br, tr, mirror);
    scene.add_triangle(bl, tr, tl, mirror);

    scene
}
