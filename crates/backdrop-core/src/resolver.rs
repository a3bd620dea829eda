//! Maps profile-local coordinates onto the page.
//!
//! Ring nodes are laid out around a fixed centre in a 300x300 reference
//! container. Every frame the front-end reports where the real container is
//! and how large it renders; offsets from the local centre are scaled per
//! axis and added to the container's on-screen centre.

use crate::constants::{LOCAL_CENTER, LOCAL_REFERENCE_SIZE};
use glam::DVec2;

/// On-screen box of the profile container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileBox {
    pub center: DVec2,
    pub width: f64,
    pub height: f64,
}

impl ProfileBox {
    /// Build from a bounding client rect.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            center: DVec2::new(left + width / 2.0, top + height / 2.0),
            width,
            height,
        }
    }

    pub fn scale(&self) -> DVec2 {
        DVec2::new(
            self.width / LOCAL_REFERENCE_SIZE,
            self.height / LOCAL_REFERENCE_SIZE,
        )
    }
}

impl Default for ProfileBox {
    fn default() -> Self {
        Self::from_rect(0.0, 0.0, LOCAL_REFERENCE_SIZE, LOCAL_REFERENCE_SIZE)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PositionResolver {
    bounds: ProfileBox,
}

impl PositionResolver {
    pub fn new(bounds: ProfileBox) -> Self {
        Self { bounds }
    }

    pub fn refresh(&mut self, bounds: ProfileBox) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> ProfileBox {
        self.bounds
    }

    pub fn center(&self) -> DVec2 {
        self.bounds.center
    }

    #[inline]
    pub fn to_global(&self, local: DVec2) -> DVec2 {
        self.bounds.center + (local - DVec2::splat(LOCAL_CENTER)) * self.bounds.scale()
    }
}
