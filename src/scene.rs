use crate::{
    algebra::{vec3_from_array, Vec3},
    error::{Result, VolmarchError},
    light::Light,
    medium::Medium,
    object::{Intersection, Object},
    sphere::Sphere,
};
use log::debug;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct CameraJson {
    #[serde(deserialize_with = "vec3_from_array")]
    pub pos: Vec3,
    /// Horizontal field of view in degrees.
    pub fov: f32,
}

impl Default for CameraJson {
    fn default() -> Self {
        Self { pos: Vec3::ZERO, fov: 45.0 }
    }
}

#[derive(Deserialize, Clone, Copy, Debug)]
#[serde(default)]
pub struct RenderJson {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderJson {
    fn default() -> Self {
        Self { width: 640, height: 480 }
    }
}

/// Which surface wins when several report a hit for the same ray.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HitPolicy {
    /// The last reporting surface in scene order, regardless of distance.
    #[default]
    #[serde(alias = "last_hit")]
    Last,
    /// The surface with the smallest entry parameter `t0`.
    Nearest,
}

#[derive(Deserialize)]
#[serde(default)]
struct MediumJson {
    step_size: f32,
    absorption: f32,
    scattering: f32,
    density: f32,
    #[serde(deserialize_with = "vec3_from_array")]
    light_direction: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    light_color: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    background: Vec3,
}

impl Default for MediumJson {
    fn default() -> Self {
        let m = Medium::default();
        Self {
            step_size: m.step_size,
            absorption: m.absorption,
            scattering: m.scattering,
            density: m.density,
            light_direction: m.light.direction,
            light_color: m.light.color,
            background: m.background,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ObjectJson {
    Sphere { sphere: SphereDesc },
}

#[derive(Deserialize)]
struct SphereDesc {
    #[serde(default = "default_sphere_name")]
    name: String,
    #[serde(deserialize_with = "vec3_from_array")]
    center: Vec3,
    radius: f32,
    #[serde(default = "default_sphere_rgb")]
    rgb: [f32; 3],
}

fn default_sphere_name() -> String { "sphere".into() }
fn default_sphere_rgb() -> [f32; 3] { [1.0, 0.0, 0.0] }

#[derive(Deserialize, Default)]
#[serde(default)]
struct SceneFile {
    camera: CameraJson,
    render: RenderJson,
    medium: MediumJson,
    hit_policy: HitPolicy,
    objects: Option<Vec<ObjectJson>>,
}

/// Public “loaded” scene
#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: CameraJson,
    pub render: RenderJson,
    pub medium: Medium,
    pub hit_policy: HitPolicy,
    pub objects: Vec<Object>,
}

impl Scene {
    /// One sphere of radius 5 centred 20 units in front of the camera.
    pub fn reference() -> Self {
        let mut sphere = Sphere::new(Vec3(0.0, 0.0, -20.0), 5.0);
        sphere.name = "cloud".into();
        Self {
            camera: CameraJson::default(),
            render: RenderJson::default(),
            medium: Medium::default(),
            hit_policy: HitPolicy::default(),
            objects: vec![Object::Sphere(sphere)],
        }
    }

    pub fn with_objects(objects: Vec<Object>, hit_policy: HitPolicy) -> Self {
        Self { objects, hit_policy, ..Self::reference() }
    }

    /// Surface selected for the ray according to `hit_policy`, with its
    /// intersection record.
    pub fn find_hit(&self, ro: Vec3, rd: Vec3) -> Option<(&Object, Intersection)> {
        let hits = self.objects.iter().filter_map(|o| o.intersect(ro, rd).map(|isect| (o, isect)));
        match self.hit_policy {
            HitPolicy::Last => hits.last(),
            HitPolicy::Nearest => hits.min_by(|a, b| a.1.t0.total_cmp(&b.1.t0)),
        }
    }
}

pub fn load(path: impl AsRef<Path>) -> Result<Scene> {
    let data = std::fs::read_to_string(path)?;
    parse(&data)
}

pub fn parse(data: &str) -> Result<Scene> {
    let file: SceneFile = serde_json::from_str(data)?;

    if file.render.width == 0 || file.render.height == 0 {
        return Err(VolmarchError::Config(format!(
            "image size must be non-zero, got {}x{}", file.render.width, file.render.height)));
    }
    if !(file.camera.fov > 0.0 && file.camera.fov < 180.0) {
        return Err(VolmarchError::Config(format!(
            "fov must lie in (0, 180) degrees, got {}", file.camera.fov)));
    }

    let m = file.medium;
    let medium = Medium {
        step_size: m.step_size,
        absorption: m.absorption,
        scattering: m.scattering,
        density: m.density,
        light: Light { direction: m.light_direction, color: m.light_color },
        background: m.background,
    }
    .validated()?;

    let objects = match file.objects {
        None => Scene::reference().objects,
        Some(list) => {
            let mut objects = Vec::with_capacity(list.len());
            for o in list {
                match o {
                    ObjectJson::Sphere { sphere } => {
                        if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                            return Err(VolmarchError::Config(format!(
                                "sphere '{}' needs a positive finite radius, got {}",
                                sphere.name, sphere.radius)));
                        }
                        objects.push(Object::Sphere(Sphere {
                            name: sphere.name,
                            center: sphere.center,
                            radius: sphere.radius,
                            color: sphere.rgb.into(),
                        }));
                    }
                }
            }
            objects
        }
    };

    for (i, obj) in objects.iter().enumerate() {
        match obj {
            Object::Sphere(s) => debug!(
                "[{}] {:?} '{}' {{ center: {:?}, radius: {:.4}, color: {:?} }}",
                i, obj.kind(), s.name, s.center, s.radius, s.color),
        }
    }

    Ok(Scene {
        camera: file.camera,
        render: file.render,
        medium,
        hit_policy: file.hit_policy,
        objects,
    })
}
