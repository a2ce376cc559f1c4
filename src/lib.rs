//! volmarch
//!
//! Single-scattering volume raymarcher: a homogeneous medium bounded by
//! spheres, integrated front-to-back or back-to-front and composited over a
//! background color.

pub mod algebra;
pub mod quadratic;
pub mod object;
pub mod sphere;
pub mod light;
pub mod medium;
pub mod scene;
pub mod integrator;
pub mod camera;
pub mod renderer;
pub mod output;
pub mod error;
pub mod cli;

pub use error::{Result, VolmarchError};
pub use integrator::{integrate, Strategy};
