use crate::constants::{BACKGROUND_AREA_PER_NODE, BACKGROUND_MAX_COUNT, BACKGROUND_MIN_COUNT};
use crate::error::BackdropError;
use glam::DVec2;

/// Logical size of a drawing surface plus the device pixel ratio it is
/// rendered at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Result<Self, BackdropError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(BackdropError::InvalidViewport { width, height });
        }
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(BackdropError::InvalidPixelRatio(pixel_ratio));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    /// Size of the backing store in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio) as u32;
        let h = (self.height * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }

    /// CSS size, e.g. `("800px", "600px")`.
    pub fn style_size(&self) -> (String, String) {
        (format!("{}px", self.width), format!("{}px", self.height))
    }

    pub fn logical_size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Number of background dust nodes for this viewport.
    pub fn background_count(&self) -> usize {
        background_count_for_area(self.area())
    }
}

pub fn background_count_for_area(area: f64) -> usize {
    let n = (area / BACKGROUND_AREA_PER_NODE).floor().max(0.0) as usize;
    n.clamp(BACKGROUND_MIN_COUNT, BACKGROUND_MAX_COUNT)
}
