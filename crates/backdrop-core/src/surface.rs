//! Drawing commands the simulation emits.
//!
//! The simulation never talks to a canvas directly. It paints through
//! [`Surface`], which the web front-end implements on a
//! `CanvasRenderingContext2d` and tests implement as a recorder.

use crate::palette::Color;
use crate::tech::Tech;
use glam::DVec2;
use smallvec::SmallVec;

/// Fill or stroke style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Radial gradient between two concentric circles.
    Radial {
        center: DVec2,
        inner_radius: f64,
        outer_radius: f64,
        inner: Color,
        outer: Color,
    },
    /// Linear gradient with offset-sorted stops in [0, 1].
    Linear {
        from: DVec2,
        to: DVec2,
        stops: SmallVec<[(f64, Color); 4]>,
    },
}

impl Paint {
    /// Radial fade from `color` at `inner_radius` to transparent at `outer_radius`.
    pub fn glow(center: DVec2, inner_radius: f64, outer_radius: f64, color: Color) -> Self {
        Paint::Radial {
            center,
            inner_radius,
            outer_radius,
            inner: color,
            outer: Color::rgba(0, 0, 0, 0.0),
        }
    }
}

pub trait Surface {
    fn clear(&mut self, size: DVec2);
    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint);
    fn stroke_circle(&mut self, center: DVec2, radius: f64, line_width: f64, paint: &Paint);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, line_width: f64, color: Color);
    /// Draw a technology logo centred at `center`, `size` wide, rotated by
    /// `rotation` radians. Implementations skip logos that are not loaded.
    fn draw_logo(&mut self, tech: Tech, center: DVec2, size: f64, rotation: f64, alpha: f64);
    fn fill_label(&mut self, text: &str, at: DVec2, color: Color);
}
