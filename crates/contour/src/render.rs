//! Best-effort PNG rasterization of traced contours, for eyeballing what the
//! engine reconstructed from a drawing.

use std::path::PathBuf;

use geo_types::{Coord, Polygon};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::{error::Result, traits::ContourRenderer};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const STROKE: Rgb<u8> = Rgb([32, 32, 32]);

/// Renders all contours of a document into one square PNG, scaled to fit.
#[derive(Debug, Clone)]
pub struct PngContourRenderer {
    path: PathBuf,
    size: u32,
    margin: u32,
}

impl PngContourRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: 1024,
            margin: 16,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

impl ContourRenderer for PngContourRenderer {
    fn render(&self, polygons: &[Polygon<f64>]) -> Result<()> {
        if polygons.is_empty() {
            return Ok(());
        }

        let coords = polygons.iter().flat_map(|p| p.exterior().coords());
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for c in coords {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }

        let extent = (max_x - min_x).max(max_y - min_y).max(f64::EPSILON);
        let inner = (self.size - 2 * self.margin) as f64;
        let scale = inner / extent;
        // Drawing y is up, image y is down.
        let to_pixel = |c: &Coord<f64>| -> (f32, f32) {
            let x = self.margin as f64 + (c.x - min_x) * scale;
            let y = (self.size - self.margin) as f64 - (c.y - min_y) * scale;
            (x as f32, y as f32)
        };

        let mut canvas = RgbImage::from_pixel(self.size, self.size, BACKGROUND);
        for polygon in polygons {
            let ring: Vec<&Coord<f64>> = polygon.exterior().coords().collect();
            for pair in ring.windows(2) {
                draw_line_segment_mut(&mut canvas, to_pixel(pair[0]), to_pixel(pair[1]), STROKE);
            }
        }

        canvas.save(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use geo_types::{LineString, Polygon};

    use super::*;

    #[test]
    fn renders_a_square_to_disk() {
        let path = std::env::temp_dir().join("contour_render_test.png");
        let renderer = PngContourRenderer::new(&path).with_size(128);
        let square = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]),
            vec![],
        );
        renderer.render(&[square]).expect("render succeeds");
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_contour_list_is_a_noop() {
        let renderer = PngContourRenderer::new("/nonexistent/dir/never_written.png");
        renderer.render(&[]).expect("nothing to draw");
    }
}
