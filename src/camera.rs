use crate::{algebra::Vec3, scene::{CameraJson, RenderJson}};

/// Pinhole camera at `pos` looking down −z, field of view measured across
/// the image width.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub pos: Vec3,
    pub width: u32,
    pub height: u32,
    aspect: f32,
    scale: f32,
}

impl Camera {
    pub fn new(camera: &CameraJson, render: &RenderJson) -> Self {
        Self {
            pos: camera.pos,
            width: render.width,
            height: render.height,
            aspect: render.width as f32 / render.height as f32,
            scale: (camera.fov.to_radians() * 0.5).tan(),
        }
    }

    /// Unit direction through the centre of pixel `(x, y)`, rows top-down.
    pub fn ray_direction(&self, x: u32, y: u32) -> Vec3 {
        let u = (2.0 * (x as f32 + 0.5) / self.width as f32 - 1.0) * self.scale;
        let v = (1.0 - 2.0 * (y as f32 + 0.5) / self.height as f32) * self.scale / self.aspect;
        Vec3(u, v, -1.0).normalize()
    }
}
