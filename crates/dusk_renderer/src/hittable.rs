//! Hittable trait, HitRecord, and the closed set of scene surfaces.

use crate::{Material, Ray, Sphere};
use dusk_math::{Interval, Vec3};

/// Material used by `HitRecord::default()`. Absorbs everything.
static NO_MATERIAL: Material = Material::Absorbing;

/// Record of a ray-object intersection.
///
/// Owned by the caller of `hit` and overwritten on every successful test.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal. Points away from the sphere centre, even when
    /// the ray starts inside.
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

impl<'a> Default for HitRecord<'a> {
    fn default() -> Self {
        Self {
            p: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: &NO_MATERIAL,
            t: 0.0,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    ///
    /// Returns true if hit, and fills in the hit record. On a miss the
    /// record is left untouched.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool;
}

/// Any surface that can appear in a scene.
pub enum Surface {
    Sphere(Sphere),
    List(SurfaceList),
}

impl Hittable for Surface {
    #[inline]
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        match self {
            Surface::Sphere(sphere) => sphere.hit(ray, ray_t, rec),
            Surface::List(list) => list.hit(ray, ray_t, rec),
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<SurfaceList> for Surface {
    fn from(list: SurfaceList) -> Self {
        Surface::List(list)
    }
}

/// An ordered list of surfaces that reports the nearest hit.
pub struct SurfaceList {
    objects: Vec<Surface>,
}

impl SurfaceList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a surface to the list.
    pub fn add(&mut self, object: impl Into<Surface>) {
        self.objects.push(object.into());
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for SurfaceList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for SurfaceList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            if object.hit(ray, ray_t.with_max(closest_so_far), rec) {
                hit_anything = true;
                closest_so_far = rec.t;
            }
        }

        hit_anything
    }
}
