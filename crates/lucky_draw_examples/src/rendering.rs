use std::io::Cursor;
use std::path::Path;

use glam::Vec2;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use lucky_draw::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Ball layout in logical pixels; multiplied by the export scale.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub ball_radius: f32,
    pub gap: f32,
    pub padding: f32,
    pub digit_color: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ball_radius: 24.0,
            gap: 10.0,
            padding: 16.0,
            digit_color: [255, 255, 255],
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ball_radius(mut self, radius: f32) -> Self {
        self.ball_radius = radius;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_digit_color(mut self, color: [u8; 3]) -> Self {
        self.digit_color = color;
        self
    }

    fn canvas_size(&self, balls: usize, scale: f32) -> (u32, u32) {
        let n = balls.max(1) as f32;
        let w = 2.0 * self.padding + n * 2.0 * self.ball_radius + (n - 1.0) * self.gap;
        let h = 2.0 * (self.padding + self.ball_radius);
        ((w * scale).ceil() as u32, (h * scale).ceil() as u32)
    }

    fn ball_center(&self, index: usize, scale: f32) -> Vec2 {
        let step = 2.0 * self.ball_radius + self.gap;
        Vec2::new(
            self.padding + self.ball_radius + index as f32 * step,
            self.padding + self.ball_radius,
        ) * scale
    }
}

/// 3x5 bitmap glyphs for `0..=9`, one row per entry, MSB on the left.
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

fn fill_disk(img: &mut RgbImage, center: Vec2, radius: f32, color: [u8; 3]) {
    let (w, h) = img.dimensions();
    let min = (center - Vec2::splat(radius)).max(Vec2::ZERO);
    let max = (center + Vec2::splat(radius)).min(Vec2::new(w as f32 - 1.0, h as f32 - 1.0));
    for y in min.y as u32..=max.y as u32 {
        for x in min.x as u32..=max.x as u32 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance_squared(center) <= radius * radius {
                img.put_pixel(x, y, Rgb(color));
            }
        }
    }
}

fn draw_number(img: &mut RgbImage, center: Vec2, value: u32, cell: f32, color: [u8; 3]) {
    let digits: Vec<usize> = value
        .to_string()
        .bytes()
        .map(|b| (b - b'0') as usize)
        .collect();
    let glyph = Vec2::new(3.0, 5.0) * cell;
    let width = digits.len() as f32 * glyph.x + (digits.len() as f32 - 1.0) * cell;
    let origin = center - Vec2::new(width, glyph.y) * 0.5;
    let (w, h) = img.dimensions();

    for (i, &d) in digits.iter().enumerate() {
        let left = origin.x + i as f32 * (glyph.x + cell);
        for (row, bits) in DIGITS[d].iter().enumerate() {
            for col in 0..3 {
                if bits & (0b100 >> col) == 0 {
                    continue;
                }
                let top_left = Vec2::new(left + col as f32 * cell, origin.y + row as f32 * cell);
                for y in top_left.y as u32..(top_left.y + cell) as u32 {
                    for x in top_left.x as u32..(top_left.x + cell) as u32 {
                        if x < w && y < h {
                            img.put_pixel(x, y, Rgb(color));
                        }
                    }
                }
            }
        }
    }
}

/// Draws the balls of `numbers` on a `background` canvas.
pub fn render_draw(numbers: &[u32], rc: &RenderConfig, scale: f32, background: [u8; 3]) -> RgbImage {
    let (w, h) = rc.canvas_size(numbers.len(), scale);
    let mut img = RgbImage::from_pixel(w, h, Rgb(background));
    let radius = rc.ball_radius * scale;
    let cell = (radius / 6.0).max(1.0).floor();
    for (i, &n) in numbers.iter().enumerate() {
        let center = rc.ball_center(i, scale);
        fill_disk(&mut img, center, radius, BallBand::for_number(n).rgb());
        draw_number(&mut img, center, n, cell, rc.digit_color);
    }
    img
}

/// Renders export requests in memory as PNG bytes.
#[derive(Debug, Clone, Default)]
pub struct PngRasterizer {
    pub render: RenderConfig,
}

impl PngRasterizer {
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }
}

impl Rasterizer for PngRasterizer {
    fn rasterize(&mut self, request: &ExportRequest<'_>) -> Result<Vec<u8>> {
        let img = render_draw(
            request.numbers,
            &self.render,
            request.scale,
            request.background,
        );
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| Error::ExportFailure(format!("png encoding failed: {e}")))?;
        Ok(bytes)
    }
}

/// Writes an export artifact into `dir` under its own file name.
pub fn save_artifact(artifact: &ExportArtifact, dir: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = dir.as_ref().join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes)?;
    info!("Wrote {} ({} bytes).", path.display(), artifact.bytes.len());
    Ok(())
}
