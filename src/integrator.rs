//! Single-scattering raymarcher through the medium inside the hit surface.

use crate::{algebra::Vec3, medium::Medium, object::Object, scene::Scene};
use log::trace;

/// Marching direction along the segment inside the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// From the exit point back toward the camera.
    Backward,
    /// From the entry point away from the camera.
    Forward,
}

impl Strategy {
    /// Parses an interactive or textual choice. Anything unrecognised means
    /// no render was requested.
    pub fn from_choice(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "backward" | "backward_raymarching" => Some(Self::Backward),
            "2" | "forward" | "forward_raymarching" => Some(Self::Forward),
            _ => None,
        }
    }
}

/// Result of marching one primary ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct March {
    pub color: Vec3,
    /// Samples whose light ray failed to re-enter the surface from inside.
    /// They contribute nothing.
    pub missed_samples: u32,
}

/// Radiance along `rd` from `ro`, composited over the background. Unclamped.
pub fn integrate(ro: Vec3, rd: Vec3, scene: &Scene, medium: &Medium, strategy: Strategy) -> Vec3 {
    integrate_with_stats(ro, rd, scene, medium, strategy).color
}

pub fn integrate_with_stats(
    ro: Vec3,
    rd: Vec3,
    scene: &Scene,
    medium: &Medium,
    strategy: Strategy,
) -> March {
    let (surface, isect) = match scene.find_hit(ro, rd) {
        Some(v) => v,
        None => return March { color: medium.background, missed_samples: 0 },
    };

    let length = isect.t1 - isect.t0;
    if !(length > 0.0) {
        return March { color: medium.background, missed_samples: 0 };
    }
    let (ns, step) = march_steps(length, medium.step_size);

    let extinction = medium.extinction();
    let sample_atten = (-step * extinction).exp();

    let mut transparency = 1.0_f32;
    let mut result = Vec3::ZERO;
    let mut missed_samples = 0;

    for n in 0..ns {
        // midpoint of the n-th sub-interval, formed in f64 then rounded
        let offset = step as f64 * (n as f64 + 0.5);
        let t = match strategy {
            Strategy::Backward => (isect.t1 as f64 - offset) as f32,
            Strategy::Forward => (isect.t0 as f64 + offset) as f32,
        };
        let p = ro.add(rd.scale(t));

        transparency *= sample_atten;

        let weight = match strategy {
            Strategy::Backward => 1.0,
            Strategy::Forward => transparency,
        };
        match in_scattered(surface, p, medium, step, weight) {
            Some(light) => result = result.add(light),
            None => {
                missed_samples += 1;
                trace!("light ray from {:?} did not start inside '{}'", p, surface.name());
            }
        }

        if strategy == Strategy::Backward {
            result = result.scale(sample_atten);
        }
    }

    March {
        color: medium.background.scale(transparency).add(result),
        missed_samples,
    }
}

/// Number of steps and the shortened step length so that `ns * step`
/// covers `length` exactly. `length` must be positive.
fn march_steps(length: f32, nominal: f32) -> (u32, f32) {
    let ns = (length / nominal).ceil() as u32;
    (ns, length / ns as f32)
}

/// Light scattered toward the camera over one step at `p`, scaled by
/// `weight` first, or `None` when the ray toward the light does not report
/// `p` as inside the surface.
fn in_scattered(surface: &Object, p: Vec3, medium: &Medium, step: f32, weight: f32) -> Option<Vec3> {
    let to_light = surface.intersect(p, medium.light.direction).filter(|i| i.inside)?;
    let light_atten = (-medium.density * to_light.t1 * medium.extinction()).exp();
    Some(medium.light.color
        .scale(weight)
        .scale(light_atten)
        .scale(medium.scattering)
        .scale(medium.density)
        .scale(step))
}
