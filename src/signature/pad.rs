use crate::errors::{AppError, AppResult};
use crate::signature::png;
use crate::signature::raster::{PAPER, Raster};

/// Stroke width in CSS pixels.
pub const LINE_WIDTH: f32 = 2.0;

/// Pointer position in the pad's local (CSS pixel) coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadState {
    Idle,
    /// `last` is `None` right after a resize: the next move only sets the
    /// starting point.
    Drawing { last: Option<Point> },
}

/// Freehand signature surface.
///
/// The buffer is `css size * pixel_ratio` device pixels so strokes stay
/// crisp on dense screens. Strokes are drawn with round caps.
#[derive(Debug, Clone)]
pub struct SignaturePad {
    css_width: f32,
    css_height: f32,
    pixel_ratio: f32,
    line_width: f32,
    state: PadState,
    raster: Raster,
}

impl SignaturePad {
    pub fn new(css_width: f32, css_height: f32, pixel_ratio: f32) -> Self {
        let mut pad = Self {
            css_width,
            css_height,
            pixel_ratio,
            line_width: LINE_WIDTH,
            state: PadState::Idle,
            raster: Raster::blank(1, 1),
        };
        pad.resize(css_width, css_height, pixel_ratio);
        pad
    }

    /// Restore a pad from a saved PNG. The CSS size is derived from the
    /// image size and `pixel_ratio`.
    pub fn from_png(bytes: &[u8], pixel_ratio: f32) -> AppResult<Self> {
        let raster = png::decode(bytes)?;
        let ratio = sanitize_ratio(pixel_ratio);
        let mut pad = SignaturePad::new(
            raster.width() as f32 / ratio,
            raster.height() as f32 / ratio,
            ratio,
        );
        if pad.raster.width() != raster.width() || pad.raster.height() != raster.height() {
            return Err(AppError::Image(format!(
                "signature size {}x{} does not match pixel ratio {}",
                raster.width(),
                raster.height(),
                ratio
            )));
        }
        pad.raster = raster;
        Ok(pad)
    }

    /// Reallocate the buffer for a new displayed size.
    ///
    /// Previous strokes are lost and the stroke width is re-applied.
    pub fn resize(&mut self, css_width: f32, css_height: f32, pixel_ratio: f32) {
        self.css_width = css_width.max(1.0);
        self.css_height = css_height.max(1.0);
        self.pixel_ratio = sanitize_ratio(pixel_ratio);

        let w = (self.css_width * self.pixel_ratio).round().max(1.0) as u32;
        let h = (self.css_height * self.pixel_ratio).round().max(1.0) as u32;
        self.raster = Raster::blank(w, h);

        self.line_width = LINE_WIDTH;

        if let PadState::Drawing { .. } = self.state {
            self.state = PadState::Drawing { last: None };
        }
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match (self.state, event) {
            (_, PointerEvent::Down(p)) => {
                self.state = PadState::Drawing { last: Some(p) };
            }
            (PadState::Drawing { last }, PointerEvent::Move(p)) => {
                if let Some(from) = last {
                    self.draw_segment(from, p);
                }
                self.state = PadState::Drawing { last: Some(p) };
            }
            (PadState::Idle, PointerEvent::Move(_)) => {}
            (_, PointerEvent::Up | PointerEvent::Leave) => {
                self.state = PadState::Idle;
            }
        }
    }

    fn draw_segment(&mut self, from: Point, to: Point) {
        let r = self.pixel_ratio;
        let radius = self.line_width * r / 2.0;
        let a = (from.x * r, from.y * r);
        let b = (to.x * r, to.y * r);

        self.raster.stroke_segment(a, b, radius);
    }

    /// Erase the whole buffer.
    pub fn clear(&mut self) {
        self.raster.fill(PAPER);
    }

    pub fn is_blank(&self) -> bool {
        self.raster.is_blank()
    }

    pub fn state(&self) -> PadState {
        self.state
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn css_size(&self) -> (f32, f32) {
        (self.css_width, self.css_height)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    pub fn to_png(&self) -> AppResult<Vec<u8>> {
        png::encode(&self.raster)
    }
}

fn sanitize_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}
