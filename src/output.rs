//! Image quantisation and encoding.

use crate::{algebra::Vec3, error::Result};
use image::{
    codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding},
    ExtendedColorType, ImageEncoder, Rgb, RgbImage,
};
use std::{fs::{self, File}, io::{BufWriter, Write}, path::Path};

/// Clamps each channel to [0, 1] and scales it to 8 bits, truncating.
pub fn quantize(c: Vec3) -> Rgb<u8> {
    let c = c.map(|x| x.clamp(0.0, 1.0) * 255.0);
    Rgb([c.0 as u8, c.1 as u8, c.2 as u8])
}

/// Writes `img` to `path`; the format follows the extension (`.ppm` is
/// binary P6). Missing parent directories are created.
pub fn save_image(img: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let is_ppm = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));
    if is_ppm {
        // image's own pnm choice for RGB8 is PAM (P7)
        let mut writer = BufWriter::new(File::create(path)?);
        PnmEncoder::new(&mut writer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
            .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)?;
        writer.flush()?;
    } else {
        img.save(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_clamps_and_truncates() {
        assert_eq!(quantize(Vec3(0.0, 0.5, 1.0)), Rgb([0, 127, 255]));
        assert_eq!(quantize(Vec3(-0.3, 1.7, 0.999)), Rgb([0, 255, 254]));
    }

    #[test]
    fn quantize_background() {
        assert_eq!(quantize(Vec3(0.572, 0.772, 0.921)), Rgb([145, 196, 234]));
    }

    #[test]
    fn saves_binary_ppm() {
        let dir = std::env::temp_dir().join(format!("volmarch-out-{}", std::process::id()));
        let path = dir.join("nested").join("tiny.ppm");
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([1, 2, 3]));
        img.put_pixel(1, 0, Rgb([250, 251, 252]));
        save_image(&img, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n"), "{:?}", &bytes[..bytes.len().min(8)]);
        assert!(!bytes.windows(5).any(|w| w == b"WIDTH"));
        assert!(bytes.ends_with(&[1, 2, 3, 250, 251, 252]));
        // header "P6\n2 1\n255\n" followed by exactly the 6 payload bytes
        let header = &bytes[..bytes.len() - 6];
        let fields: Vec<&str> = std::str::from_utf8(header).unwrap().split_whitespace().collect();
        assert_eq!(fields, ["P6", "2", "1", "255"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn saves_rendered_size_ppm() {
        let dir = std::env::temp_dir().join(format!("volmarch-out-size-{}", std::process::id()));
        let path = dir.join("image.PPM");
        save_image(&RgbImage::new(640, 480), &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6"));
        assert_eq!(bytes.len(), "P6\n640 480\n255\n".len() + 640 * 480 * 3);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let path = std::env::temp_dir().join("volmarch-out.unknown-ext");
        assert!(save_image(&RgbImage::new(1, 1), &path).is_err());
    }
}
