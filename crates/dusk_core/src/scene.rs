//! Scene description types.
//!
//! A scene is a list of named materials and a list of spheres that refer to
//! those materials by name. Several spheres may share one material.

use std::collections::HashSet;

use dusk_math::{Color, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors found while validating a scene description.
#[derive(Error, Debug, PartialEq)]
pub enum SceneError {
    #[error("Scene contains no spheres")]
    EmptyScene,

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Material '{0}' is defined more than once")]
    DuplicateMaterial(String),

    #[error("Sphere {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },
}

/// How a material responds to light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialKind {
    /// Diffuse reflector with per-channel albedo in [0, 1].
    Lambertian { albedo: Color },

    /// Absorbs every incoming ray.
    Absorbing,
}

/// A material with a name spheres can refer to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesc {
    pub name: String,
    #[serde(flatten)]
    pub kind: MaterialKind,
}

impl MaterialDesc {
    /// Create a named Lambertian material.
    pub fn lambertian(name: impl Into<String>, albedo: Color) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Lambertian { albedo },
        }
    }

    /// Create a named absorbing material.
    pub fn absorbing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Absorbing,
        }
    }
}

/// A sphere placed in the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,
    /// Name of an entry in `SceneDesc::materials`
    pub material: String,
}

impl SphereDesc {
    pub fn new(center: Vec3, radius: f32, material: impl Into<String>) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }
}

/// A complete scene: materials first, then the spheres that use them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDesc {
    pub materials: Vec<MaterialDesc>,
    pub spheres: Vec<SphereDesc>,
}

impl Default for SceneDesc {
    /// Red diffuse sphere resting on a large green ground sphere.
    fn default() -> Self {
        Self {
            materials: vec![
                MaterialDesc::lambertian("red", Color::new(0.8, 0.3, 0.3)),
                MaterialDesc::lambertian("ground", Color::new(0.4, 0.8, 0.3)),
            ],
            spheres: vec![
                SphereDesc::new(Vec3::new(0.0, 0.0, -1.0), 0.5, "red"),
                SphereDesc::new(Vec3::new(0.0, -100.5, -1.0), 100.0, "ground"),
            ],
        }
    }
}

impl SceneDesc {
    /// Check that every sphere is usable and every reference resolves.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.spheres.is_empty() {
            return Err(SceneError::EmptyScene);
        }

        let mut seen = HashSet::new();
        for material in &self.materials {
            if !seen.insert(material.name.as_str()) {
                return Err(SceneError::DuplicateMaterial(material.name.clone()));
            }
            if let MaterialKind::Lambertian { albedo } = material.kind {
                if albedo.min_element() < 0.0 || albedo.max_element() > 1.0 {
                    log::warn!(
                        "Material '{}' albedo {:?} is outside [0, 1]; paths may gain energy",
                        material.name,
                        albedo
                    );
                }
            }
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if !seen.contains(sphere.material.as_str()) {
                return Err(SceneError::UnknownMaterial {
                    index,
                    name: sphere.material.clone(),
                });
            }
        }

        Ok(())
    }
}
