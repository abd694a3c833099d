/// Value of an untouched pixel.
pub const PAPER: u8 = 255;
/// Value of a fully inked pixel.
pub const INK: u8 = 0;

/// 8-bit grayscale pixel buffer, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![PAPER; width as usize * height as usize],
        }
    }

    /// Wrap existing pixels. `None` if the length does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn fill(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| *p == PAPER)
    }

    /// Darken a pixel by `coverage` (0.0..=1.0). Ink only accumulates.
    pub fn blend_ink(&mut self, x: i64, y: i64, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = (y as usize) * self.width as usize + x as usize;
        let shade = (PAPER as f32 * (1.0 - coverage.clamp(0.0, 1.0))).round() as u8;
        self.pixels[idx] = self.pixels[idx].min(shade);
    }

    /// Stamp a segment of width `2 * radius` with round caps.
    ///
    /// Coordinates are in device pixels; edges are anti-aliased over one pixel.
    pub fn stroke_segment(&mut self, from: (f32, f32), to: (f32, f32), radius: f32) {
        let (x0, y0) = from;
        let (x1, y1) = to;

        let min_x = (x0.min(x1) - radius - 1.0).floor() as i64;
        let max_x = (x0.max(x1) + radius + 1.0).ceil() as i64;
        let min_y = (y0.min(y1) - radius - 1.0).floor() as i64;
        let max_y = (y0.max(y1) + radius + 1.0).ceil() as i64;

        let dx = x1 - x0;
        let dy = y1 - y0;
        let len_sq = dx * dx + dy * dy;

        for py in min_y.max(0)..=max_y.min(self.height as i64 - 1) {
            for px in min_x.max(0)..=max_x.min(self.width as i64 - 1) {
                let cx = px as f32 + 0.5;
                let cy = py as f32 + 0.5;

                // distance from the pixel centre to the segment
                let t = if len_sq == 0.0 {
                    0.0
                } else {
                    (((cx - x0) * dx + (cy - y0) * dy) / len_sq).clamp(0.0, 1.0)
                };
                let ex = cx - (x0 + t * dx);
                let ey = cy - (y0 + t * dy);
                let dist = (ex * ex + ey * ey).sqrt();

                let coverage = radius + 0.5 - dist;
                if coverage > 0.0 {
                    self.blend_ink(px, py, coverage);
                }
            }
        }
    }
}
