//! Materials describe how a surface scatters an incoming ray.

use crate::{hittable::HitRecord, random::random_in_unit_sphere, Ray};
use dusk_core::MaterialKind;
use dusk_math::Color;
use rand::RngCore;

/// Result of a successful scatter.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Per-channel fraction of the scattered radiance that survives
    pub attenuation: Color,
    /// The outgoing ray
    pub scattered: Ray,
}

/// Scattering contract shared by every material.
pub trait Scatter: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `Some` with attenuation and the scattered ray, or `None` if
    /// the ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore)
        -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Scatter for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        // Aim at a random point in the unit sphere tangent to the surface
        let target = rec.p + rec.normal + random_in_unit_sphere(rng);
        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, target - rec.p),
        })
    }
}

/// Every material a surface can carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Lambertian(Lambertian),
    /// Absorbs every ray; paths ending here contribute black.
    Absorbing,
}

impl Scatter for Material {
    #[inline]
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match self {
            Material::Lambertian(lambertian) => lambertian.scatter(ray_in, rec, rng),
            Material::Absorbing => None,
        }
    }
}

impl From<&MaterialKind> for Material {
    fn from(kind: &MaterialKind) -> Self {
        match kind {
            MaterialKind::Lambertian { albedo } => Material::Lambertian(Lambertian::new(*albedo)),
            MaterialKind::Absorbing => Material::Absorbing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;
    use dusk_math::Vec3;

    fn record(material: &Material) -> HitRecord<'_> {
        HitRecord {
            p: Vec3::new(0.0, 0.0, -0.5),
            normal: Vec3::Z,
            material,
            t: 0.5,
        }
    }

    #[test]
    fn test_lambertian_always_scatters() {
        let material = Material::Lambertian(Lambertian::new(Color::new(0.8, 0.3, 0.3)));
        let rec = record(&material);
        let ray_in = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = seeded_rng(Some(3));

        for _ in 0..1_000 {
            let result = material
                .scatter(&ray_in, &rec, &mut rng)
                .expect("lambertian never absorbs");

            assert_eq!(result.attenuation, Color::new(0.8, 0.3, 0.3));
            assert_eq!(result.scattered.origin(), rec.p);
            // Direction is normal + a point inside the unit sphere
            assert!((result.scattered.direction() - rec.normal).length() < 1.0);
            assert!(result.scattered.direction().dot(rec.normal) > 0.0);
        }
    }

    #[test]
    fn test_lambertian_favours_normal() {
        let material = Material::Lambertian(Lambertian::new(Color::ONE));
        let rec = record(&material);
        let ray_in = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = seeded_rng(Some(4));

        let mut mean = Vec3::ZERO;
        for _ in 0..10_000 {
            let result = material.scatter(&ray_in, &rec, &mut rng).unwrap();
            mean += result.scattered.direction().normalize();
        }
        mean /= 10_000.0;

        assert!(mean.z > 0.5, "mean direction {:?}", mean);
        assert!(mean.x.abs() < 0.05 && mean.y.abs() < 0.05);
    }

    #[test]
    fn test_absorbing_never_scatters() {
        let material = Material::Absorbing;
        let rec = record(&material);
        let ray_in = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let mut rng = seeded_rng(Some(5));

        assert!(material.scatter(&ray_in, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_from_kind() {
        let albedo = Color::new(0.1, 0.2, 0.3);
        let lambertian = Material::from(&MaterialKind::Lambertian { albedo });
        assert_eq!(lambertian, Material::Lambertian(Lambertian::new(albedo)));
        assert_eq!(Material::from(&MaterialKind::Absorbing), Material::Absorbing);
    }
}
