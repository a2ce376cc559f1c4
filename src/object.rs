use crate::algebra::Vec3;

/// Entry/exit parameters of a ray against a closed surface.
///
/// `t0 <= t1` always holds. When `inside` is set the ray origin lies within
/// the solid and `t0` has been clamped to zero; `t1` is still the exit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub t0: f32,
    pub t1: f32,
    pub p_hit: Vec3,
    pub normal: Vec3,
    pub inside: bool,
}

/// Variant tag, only used for logging and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Sphere = 1,
}

#[derive(Clone, Debug)]
pub enum Object {
    Sphere(crate::sphere::Sphere),
}

impl Object {
    pub fn intersect(&self, ro: Vec3, rd: Vec3) -> Option<Intersection> {
        match self {
            Self::Sphere(s) => s.intersect(ro, rd),
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Sphere(_) => SurfaceKind::Sphere,
        }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            Self::Sphere(s) => s.color,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Sphere(s) => &s.name,
        }
    }
}
