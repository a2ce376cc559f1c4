//! src/sphere.rs
//! -------------
//! Solid sphere bounding a volume of participating medium.

use crate::{algebra::Vec3, object::Intersection, quadratic::solve_quadratic};

#[derive(Clone, Debug)]
pub struct Sphere {
    pub name     : String,
    pub center   : Vec3,
    pub radius   : f32,
    pub color    : Vec3,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            name: String::from("sphere"),
            center,
            radius,
            color: Vec3(1.0, 0.0, 0.0),
        }
    }

    /// Intersect a ray (ro + t·rd).
    /// A sphere lying entirely behind the origin is a miss; an origin inside
    /// the sphere clamps the entry to `t0 = 0` and sets `inside`.
    pub fn intersect(&self, ro: Vec3, rd: Vec3) -> Option<Intersection> {
        let oc = ro.sub(self.center);
        let a  = rd.dot(rd);
        let b  = 2.0 * rd.dot(oc);
        let c  = oc.dot(oc) - self.radius * self.radius;

        let (mut t0, t1) = solve_quadratic(a, b, c)?;

        let mut inside = false;
        if t0 < 0.0 {
            if t1 < 0.0 { return None; }
            inside = true;
            t0 = 0.0;
        }

        let p_hit  = ro.add(rd.scale(t0));
        let normal = p_hit.sub(self.center).normalize();
        Some(Intersection { t0, t1, p_hit, normal, inside })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud() -> Sphere {
        Sphere::new(Vec3(0.0, 0.0, -20.0), 5.0)
    }

    #[test]
    fn hit_from_outside() {
        let hit = cloud().intersect(Vec3::ZERO, Vec3(0.0, 0.0, -1.0)).unwrap();
        assert_eq!(hit.t0, 15.0);
        assert_eq!(hit.t1, 25.0);
        assert!(!hit.inside);
        assert_eq!(hit.p_hit, Vec3(0.0, 0.0, -15.0));
        assert_eq!(hit.normal, Vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn hit_from_inside_clamps_entry() {
        let s = cloud();
        for dir in [Vec3(1.0, 0.0, 0.0), Vec3(0.0, 1.0, 0.0), Vec3(0.0, -0.6, 0.8)] {
            let hit = s.intersect(s.center, dir).unwrap();
            assert!(hit.inside);
            assert_eq!(hit.t0, 0.0);
            assert!((hit.t1 - s.radius).abs() < 1e-5);
        }
    }

    #[test]
    fn sphere_behind_origin_is_missed() {
        assert!(cloud().intersect(Vec3::ZERO, Vec3(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn ray_passing_beside_is_missed() {
        assert!(cloud().intersect(Vec3::ZERO, Vec3(0.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn tangent_ray_gives_single_point() {
        let hit = cloud().intersect(Vec3(0.0, 5.0, 0.0), Vec3(0.0, 0.0, -1.0)).unwrap();
        assert_eq!(hit.t0, hit.t1);
        assert_eq!(hit.t0, 20.0);
    }
}
