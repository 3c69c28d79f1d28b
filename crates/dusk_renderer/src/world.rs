//! Turning a scene description into something rays can hit.

use std::collections::HashMap;
use std::sync::Arc;

use dusk_core::{SceneDesc, SceneError};

use crate::{Material, Sphere, SurfaceList};

/// Build the top-level surface list for a scene.
///
/// Each named material is created once and shared by every sphere that
/// refers to it. The description is validated first.
pub fn build_world(desc: &SceneDesc) -> Result<SurfaceList, SceneError> {
    desc.validate()?;

    let materials: HashMap<&str, Arc<Material>> = desc
        .materials
        .iter()
        .map(|m| (m.name.as_str(), Arc::new(Material::from(&m.kind))))
        .collect();

    let mut world = SurfaceList::new();
    for (index, sphere) in desc.spheres.iter().enumerate() {
        let material = materials
            .get(sphere.material.as_str())
            .ok_or_else(|| SceneError::UnknownMaterial {
                index,
                name: sphere.material.clone(),
            })?;
        world.add(Sphere::new(sphere.center, sphere.radius, Arc::clone(material)));
    }

    log::info!(
        "Built scene with {} spheres and {} materials",
        world.len(),
        materials.len()
    );
    Ok(world)
}
