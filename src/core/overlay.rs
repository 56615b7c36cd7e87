use crate::config::RenderConfig;
use crate::utils::error::{AppError, Result};
use image::{imageops, Rgb, RgbImage};
use rusttype::{point, Font, Scale};
use std::path::{Path, PathBuf};

/// Where the caption band is pasted onto the base image.
pub const OVERLAY_ORIGIN: (i64, i64) = (10, 10);

const TEXT_INSET: f32 = 4.0;
const BAND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Draws a caption on a white band covering the top quarter of an image.
#[derive(Debug, Clone)]
pub struct TextOverlay {
    font_path: PathBuf,
    font_size: f32,
}

impl TextOverlay {
    pub fn new(font_path: impl Into<PathBuf>, font_size: f32) -> Self {
        Self {
            font_path: font_path.into(),
            font_size,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(&config.font_path, config.font_size)
    }

    pub fn font_path(&self) -> &Path {
        &self.font_path
    }

    pub fn load_font(&self) -> Result<Font<'static>> {
        let bytes = std::fs::read(&self.font_path).map_err(|e| AppError::ResourceError {
            path: self.font_path.display().to_string(),
            reason: e.to_string(),
        })?;

        Font::try_from_vec(bytes).ok_or_else(|| AppError::ResourceError {
            path: self.font_path.display().to_string(),
            reason: "not a TrueType or OpenType font".to_string(),
        })
    }

    /// Paste the caption band over the top-left of `image`. Lines are split on `\n`.
    pub fn render(&self, mut image: RgbImage, text: &str) -> Result<RgbImage> {
        let font = self.load_font()?;
        let (width, height) = image.dimensions();

        let mut band = RgbImage::from_pixel(width, height / 4, BAND_COLOR);
        draw_lines(&mut band, &font, self.font_size, text);

        imageops::replace(&mut image, &band, OVERLAY_ORIGIN.0, OVERLAY_ORIGIN.1);
        Ok(image)
    }
}

fn draw_lines(canvas: &mut RgbImage, font: &Font<'_>, px: f32, text: &str) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let line_height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;

    for (line_index, line) in text.split('\n').enumerate() {
        let baseline = TEXT_INSET + v_metrics.ascent + line_index as f32 * line_height;
        if baseline - v_metrics.ascent >= canvas.height() as f32 {
            break;
        }

        for glyph in font.layout(line, scale, point(TEXT_INSET, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let x = gx as i32 + bb.min.x;
                let y = gy as i32 + bb.min.y;
                if x < 0 || y < 0 {
                    return;
                }
                let (x, y) = (x as u32, y as u32);
                if x >= canvas.width() || y >= canvas.height() {
                    return;
                }
                blend(canvas.get_pixel_mut(x, y), TEXT_COLOR, coverage);
            });
        }
    }
}

fn blend(dst: &mut Rgb<u8>, color: Rgb<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0);
    for (channel, source) in dst.0.iter_mut().zip(color.0) {
        *channel = (source as f32 * alpha + *channel as f32 * (1.0 - alpha)).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FONT_SIZE;
    use crate::core::testing::bundled_font;

    fn solid(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
        RgbImage::from_pixel(width, height, color)
    }

    #[test]
    fn test_missing_font_is_resource_error() {
        let overlay = TextOverlay::new("/nonexistent/Sanseriffic.otf", 55.0);
        let err = overlay
            .render(solid(100, 100, Rgb([200, 0, 0])), "hello")
            .unwrap_err();

        match err {
            AppError::ResourceError { path, .. } => {
                assert_eq!(path, "/nonexistent/Sanseriffic.otf")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_font_file_is_resource_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"definitely not a font").unwrap();

        let overlay = TextOverlay::new(file.path(), 55.0);
        assert!(matches!(
            overlay.load_font(),
            Err(AppError::ResourceError { .. })
        ));
    }

    #[test]
    fn test_default_font_ships_with_the_crate() {
        let overlay = TextOverlay::from_config(&RenderConfig::default());
        assert!(overlay.font_path().ends_with("public/DejaVuSans.ttf"));

        let overlay = TextOverlay::new(bundled_font(), DEFAULT_FONT_SIZE);
        assert!(overlay.load_font().is_ok());
    }

    #[test]
    fn test_band_placement() {
        let font_path = bundled_font();

        let red = Rgb([200, 0, 0]);
        let overlay = TextOverlay::new(font_path, 55.0);
        let result = overlay.render(solid(400, 400, red), "").unwrap();

        assert_eq!(result.dimensions(), (400, 400));
        // outside the band
        assert_eq!(*result.get_pixel(5, 5), red);
        assert_eq!(*result.get_pixel(200, 110), red);
        // band spans (10,10) to the right edge and 100 rows down
        assert_eq!(*result.get_pixel(10, 10), BAND_COLOR);
        assert_eq!(*result.get_pixel(399, 109), BAND_COLOR);
    }

    #[test]
    fn test_text_is_drawn_dark_inside_band() {
        let font_path = bundled_font();

        let overlay = TextOverlay::new(font_path, 55.0);
        let result = overlay
            .render(solid(600, 400, Rgb([0, 120, 0])), "Breaking News \nToday ")
            .unwrap();

        let band_has_ink = (10..110u32)
            .flat_map(|y| (10..600u32).map(move |x| (x, y)))
            .any(|(x, y)| result.get_pixel(x, y).0.iter().all(|c| *c < 64));
        assert!(band_has_ink);
    }
}
