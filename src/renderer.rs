use crate::{
    camera::Camera,
    integrator::{integrate_with_stats, Strategy},
    output::quantize,
    scene::Scene,
};
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;

pub struct Render {
    pub image: RgbImage,
    /// Total samples across the image whose light ray failed to start inside
    /// the surface.
    pub missed_samples: u64,
}

/// Renders every pixel of `scene` independently, one image row per task.
pub fn render(scene: &Scene, strategy: Strategy, show_progress: bool) -> Render {
    let camera = Camera::new(&scene.camera, &scene.render);
    let (width, height) = (camera.width, camera.height);
    info!("Rendering {}x{} image, {:?} raymarching", width, height, strategy);

    let bar = show_progress.then(|| {
        let pb = ProgressBar::new(height as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")
        {
            pb.set_style(style);
        }
        pb
    });

    let rows: Vec<(Vec<Rgb<u8>>, u64)> = (0..height).into_par_iter().map(|y| {
        let mut row = Vec::with_capacity(width as usize);
        let mut missed = 0_u64;
        for x in 0..width {
            let rd = camera.ray_direction(x, y);
            let m = integrate_with_stats(camera.pos, rd, scene, &scene.medium, strategy);
            missed += m.missed_samples as u64;
            row.push(quantize(m.color));
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
        (row, missed)
    }).collect();

    if let Some(b) = bar {
        b.finish_with_message("Rendering complete");
    }

    let mut image = RgbImage::new(width, height);
    let mut missed_samples = 0;
    for (y, (row, missed)) in rows.into_iter().enumerate() {
        for (x, px) in row.into_iter().enumerate() {
            image.put_pixel(x as u32, y as u32, px);
        }
        missed_samples += missed;
    }

    if missed_samples > 0 {
        warn!("{} samples had a light ray that did not start inside the medium", missed_samples);
    }

    Render { image, missed_samples }
}
