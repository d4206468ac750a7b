//! Affine map from orbital-plane coordinates to screen coordinates.

use orrery_orbits::Position;

use crate::ViewError;

const DEFAULT_MIN_ZOOM: f64 = 0.01;
const DEFAULT_MAX_ZOOM: f64 = 100.0;

/// Point in screen space: pixels from the top-left corner, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// View onto the orbital plane.
///
/// `pan` is the world point shown at the viewport centre. One world unit spans
/// `scale * zoom` pixels. Screen y grows downwards, so world y is flipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pan: Position,
    zoom: f64,
    scale: f64,
    width: u32,
    height: u32,
    min_zoom: f64,
    max_zoom: f64,
}

impl Camera {
    pub fn new(scale: f64, width: u32, height: u32) -> Result<Self, ViewError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ViewError::InvalidScale(scale));
        }
        if width == 0 || height == 0 {
            return Err(ViewError::InvalidViewport { width, height });
        }
        Ok(Self {
            pan: Position::ORIGIN,
            zoom: 1.0,
            scale,
            width,
            height,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        })
    }

    /// Replace the zoom limits, clamping the current zoom into them.
    pub fn with_zoom_limits(mut self, min: f64, max: f64) -> Result<Self, ViewError> {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ViewError::InvalidZoomLimits { min, max });
        }
        self.min_zoom = min;
        self.max_zoom = max;
        self.zoom = self.zoom.clamp(min, max);
        Ok(self)
    }

    pub fn pan(&self) -> Position {
        self.pan
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Viewport centre in screen pixels.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    fn pixels_per_unit(&self) -> f64 {
        self.scale * self.zoom
    }

    /// Map a world position onto the screen, keeping sub-pixel precision.
    pub fn to_screen(&self, p: Position) -> ScreenPoint {
        let c = self.center();
        let k = self.pixels_per_unit();
        ScreenPoint::new(c.x + (p.x - self.pan.x) * k, c.y - (p.y - self.pan.y) * k)
    }

    /// Inverse of [`Camera::to_screen`].
    pub fn to_world(&self, s: ScreenPoint) -> Position {
        let c = self.center();
        let k = self.pixels_per_unit();
        Position::new(self.pan.x + (s.x - c.x) / k, self.pan.y - (s.y - c.y) / k)
    }

    /// Integer pixel holding `p` (floor of the screen coordinates).
    pub fn to_pixel(&self, p: Position) -> (i64, i64) {
        let s = self.to_screen(p);
        (s.x.floor() as i64, s.y.floor() as i64)
    }

    pub fn set_pan(&mut self, pan: Position) {
        self.pan = pan;
    }

    /// Move the view by a screen-space offset: the point that was at
    /// `center + (dx, dy)` ends up at the centre.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let k = self.pixels_per_unit();
        self.pan.x += dx / k;
        self.pan.y -= dy / k;
    }

    /// Set the zoom, clamped to the camera's limits.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), ViewError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ViewError::InvalidZoom(zoom));
        }
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        Ok(())
    }

    /// Multiply the zoom by `factor` about the viewport centre.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), ViewError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ViewError::InvalidZoom(factor));
        }
        self.set_zoom(self.zoom * factor)
    }

    /// Multiply the zoom by `factor` keeping the world point under `anchor` fixed.
    pub fn zoom_at(&mut self, factor: f64, anchor: ScreenPoint) -> Result<(), ViewError> {
        let world = self.to_world(anchor);
        self.zoom_by(factor)?;
        let c = self.center();
        let k = self.pixels_per_unit();
        self.pan = Position::new(world.x - (anchor.x - c.x) / k, world.y + (anchor.y - c.y) / k);
        Ok(())
    }
}
