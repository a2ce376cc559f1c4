//! Parameters of the homogeneous medium filling every surface in the scene.

use crate::{algebra::Vec3, error::{Result, VolmarchError}, light::Light};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Medium {
    /// Nominal marching step; the integrator shortens it so that a whole
    /// number of steps covers each segment exactly.
    pub step_size: f32,
    pub absorption: f32,
    pub scattering: f32,
    pub density: f32,
    pub light: Light,
    pub background: Vec3,
}

impl Default for Medium {
    fn default() -> Self {
        Self {
            step_size: 0.2,
            absorption: 0.1,
            scattering: 0.1,
            density: 1.0,
            light: Light {
                direction: Vec3(0.0, 1.0, 0.0),
                color: Vec3(1.3, 0.3, 0.9),
            },
            background: Vec3(0.572, 0.772, 0.921),
        }
    }
}

impl Medium {
    /// Extinction coefficient, `σs + σa`.
    pub fn extinction(&self) -> f32 {
        self.scattering + self.absorption
    }

    /// Checks the coefficients and normalises the light direction.
    pub fn validated(mut self) -> Result<Self> {
        if !(self.step_size > 0.0 && self.step_size.is_finite()) {
            return Err(VolmarchError::Config(format!(
                "step_size must be positive and finite, got {}", self.step_size)));
        }
        for (name, v) in [
            ("absorption", self.absorption),
            ("scattering", self.scattering),
            ("density", self.density),
        ] {
            if !(v >= 0.0 && v.is_finite()) {
                return Err(VolmarchError::Config(format!(
                    "{name} must be non-negative and finite, got {v}")));
            }
        }
        let len = self.light.direction.norm();
        if !(len > 0.0 && len.is_finite()) {
            return Err(VolmarchError::Config(format!(
                "light_direction must be finite and non-zero, got {:?}", self.light.direction)));
        }
        self.light.direction = self.light.direction.normalize();
        Ok(self)
    }
}
