//! The profile-frame loop: ring nodes on the overlay canvas, the outline
//! around the photo and the floating transform of the photo container.

use crate::constants::*;
use crate::palette::{self, Color};
use crate::scene::Scene;
use crate::surface::{Paint, Surface};
use glam::DVec2;
use smallvec::smallvec;

/// Floating / zoom / tilt applied to the profile container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerTransform {
    pub scale: f64,
    pub offset: DVec2,
    /// Degrees.
    pub rotation: f64,
}

impl ContainerTransform {
    pub fn to_css(&self) -> String {
        format!(
            "scale({:.4}) translate({:.3}px, {:.3}px) rotate({:.3}deg)",
            self.scale, self.offset.x, self.offset.y, self.rotation
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProfileFrame {
    pub pulse_phase: f64,
    /// 0 at rest, 1 when fully hovered.
    pub hover_progress: f64,
}

impl ProfileFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the global phase and ease hover progress toward its target.
    pub fn step(&mut self, hovering: bool) {
        self.pulse_phase += FRAME_PULSE_STEP;
        self.hover_progress = if hovering {
            (self.hover_progress + HOVER_PROGRESS_STEP).min(1.0)
        } else {
            (self.hover_progress - HOVER_PROGRESS_STEP).max(0.0)
        };
    }

    pub fn outline_width(&self) -> f64 {
        1.5 + self.hover_progress
    }

    /// Three-colour diagonal gradient; every stop brightens with hover.
    pub fn outline_paint(&self) -> Paint {
        let h = self.hover_progress;
        Paint::Linear {
            from: DVec2::ZERO,
            to: DVec2::splat(OVERLAY_SIZE),
            stops: smallvec![
                (0.0, palette::FRAME_NODE.with_alpha(0.3 + h * 0.4)),
                (0.5, palette::OUTER_NODE.with_alpha(0.2 + h * 0.3)),
                (1.0, palette::ACCENT_NODE.with_alpha(0.1 + h * 0.2)),
            ],
        }
    }

    pub fn transform(&self) -> ContainerTransform {
        let (p, h) = (self.pulse_phase, self.hover_progress);
        ContainerTransform {
            scale: 1.0 + h * HOVER_ZOOM,
            offset: DVec2::new(
                (p * 0.7).sin() * (3.0 + h * 2.0),
                (p * 0.5).cos() * (2.0 + h * 1.5),
            ),
            rotation: h * (p * 0.3).sin() * 2.0,
        }
    }

    pub fn draw(&self, scene: &Scene, surface: &mut dyn Surface) {
        let center = DVec2::splat(LOCAL_CENTER);
        surface.clear(DVec2::splat(OVERLAY_SIZE));

        for ring in scene.rings() {
            ring.draw_local(surface);
        }

        surface.stroke_circle(
            center,
            OUTLINE_RADIUS,
            self.outline_width(),
            &self.outline_paint(),
        );
        let glow = Color::rgba(78, 204, 163, 0.3);
        surface.stroke_circle(
            center,
            OUTLINE_GLOW_RADIUS,
            OUTLINE_GLOW_WIDTH,
            &Paint::Radial {
                center,
                inner_radius: OUTLINE_RADIUS,
                outer_radius: OUTLINE_GLOW_OUTER,
                inner: glow,
                outer: glow.transparent(),
            },
        );
    }

    /// One frame of the profile loop. Returns the container transform to apply.
    pub fn frame(&mut self, scene: &Scene, surface: &mut dyn Surface) -> ContainerTransform {
        self.step(scene.is_hovering());
        self.draw(scene, surface);
        self.transform()
    }
}
