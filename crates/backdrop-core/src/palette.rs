//! Colours shared by the simulation and the renderers.

use std::fmt;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn transparent(self) -> Self {
        self.with_alpha(0.0)
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

pub const BACKGROUND_NODE: Color = Color::rgba(255, 255, 255, 0.6);
pub const BACKGROUND_LINK: Color = Color::rgba(255, 255, 255, 0.15);
pub const NEUTRAL_LINK: Color = Color::rgba(255, 255, 255, 0.25);

pub const FRAME_NODE: Color = Color::rgba(78, 204, 163, 0.9);
pub const FRAME_GLOW: Color = Color::rgba(78, 204, 163, 0.4);
pub const FRAME_LINK: Color = Color::rgba(78, 204, 163, 0.5);

pub const OUTER_NODE: Color = Color::rgba(0, 180, 216, 0.8);
pub const OUTER_GLOW: Color = Color::rgba(0, 180, 216, 0.3);
pub const OUTER_LINK: Color = Color::rgba(0, 180, 216, 0.4);

pub const ACCENT_NODE: Color = Color::rgba(238, 108, 77, 0.8);
pub const ACCENT_GLOW: Color = Color::rgba(238, 108, 77, 0.3);

pub const BURST: Color = Color::rgba(238, 108, 77, 1.0);
pub const LABEL: Color = Color::rgba(255, 255, 255, 1.0);

// Special dust picks one of these at creation
pub const SPECIAL_DUST: [Color; 4] = [
    Color::rgba(255, 107, 107, 0.8), // coral
    Color::rgba(255, 206, 107, 0.8), // gold
    Color::rgba(107, 255, 178, 0.8), // mint
    Color::rgba(107, 178, 255, 0.8), // sky
];
pub const SPECIAL_GLOW_ALPHA_SCALE: f64 = 0.7;

pub const TECH_GLOW_ALPHA: f64 = 0.3;
pub const TECH_LINK_ALPHA: f64 = 0.3;
