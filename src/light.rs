use crate::algebra::Vec3;

/// Light arriving from infinitely far away along `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub direction: Vec3,
    pub color: Vec3,
}
