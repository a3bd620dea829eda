//! Proximity links between every pair of entities.
//!
//! The scan is quadratic over the whole collection; the collection stays
//! in the low hundreds so that is fine at 60 fps.

use crate::entity::{Entity, EntityKind};
use crate::palette::{self, Color};
use crate::surface::Surface;
use glam::DVec2;

/// Which link rule applies to a pair, checked in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairCategory {
    BackgroundBackground,
    TechInvolved,
    FrameFrame,
    OuterOuter,
    Mixed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkPolicy {
    pub max_distance: f64,
    pub opacity: f64,
    pub line_width: f64,
}

impl PairCategory {
    pub fn classify(a: EntityKind, b: EntityKind) -> Self {
        use EntityKind::*;
        match (a, b) {
            (Background, Background) => PairCategory::BackgroundBackground,
            (Tech, _) | (_, Tech) => PairCategory::TechInvolved,
            (Frame, Frame) => PairCategory::FrameFrame,
            (Outer, Outer) => PairCategory::OuterOuter,
            _ => PairCategory::Mixed,
        }
    }

    pub fn policy(self) -> LinkPolicy {
        let (max_distance, opacity, line_width) = match self {
            PairCategory::BackgroundBackground => (120.0, 0.15, 0.3),
            PairCategory::TechInvolved => (200.0, 0.25, 1.0),
            PairCategory::FrameFrame => (100.0, 0.4, 1.2),
            PairCategory::OuterOuter => (80.0, 0.35, 1.0),
            PairCategory::Mixed => (150.0, 0.25, 0.8),
        };
        LinkPolicy {
            max_distance,
            opacity,
            line_width,
        }
    }
}

/// A straight stroke between two page-space points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub from: DVec2,
    pub to: DVec2,
    pub opacity: f64,
    pub line_width: f64,
    /// Base colour with its alpha replaced by `opacity`.
    pub color: Color,
}

/// Base colour for a pair before opacity is applied.
///
/// Tech pairs take the colour of whichever side is the badge, the first
/// side when both are. Mixed pairs that do not involve dust prefer frame
/// green, then outer blue, then white.
fn pair_color(a: &Entity, b: &Entity, category: PairCategory) -> Color {
    use EntityKind::*;
    let (ka, kb) = (a.kind(), b.kind());
    match category {
        PairCategory::BackgroundBackground => palette::BACKGROUND_LINK,
        PairCategory::TechInvolved => a
            .tech()
            .or_else(|| b.tech())
            .map(|t| t.color().with_alpha(palette::TECH_LINK_ALPHA))
            .unwrap_or(palette::NEUTRAL_LINK),
        PairCategory::FrameFrame => palette::FRAME_LINK,
        PairCategory::OuterOuter => palette::OUTER_LINK,
        PairCategory::Mixed => {
            let pairs_with = |kind: EntityKind| {
                (ka == kind && kb != Background) || (kb == kind && ka != Background)
            };
            if pairs_with(Frame) {
                palette::FRAME_LINK
            } else if pairs_with(Outer) {
                palette::OUTER_LINK
            } else {
                palette::NEUTRAL_LINK
            }
        }
    }
}

/// The link between `a` and `b`, if they are close enough.
pub fn link(a: &Entity, b: &Entity) -> Option<Connection> {
    let category = PairCategory::classify(a.kind(), b.kind());
    let policy = category.policy();
    let (from, to) = (a.global_position(), b.global_position());
    let distance = from.distance(to);
    if !(distance < policy.max_distance) {
        return None;
    }
    let opacity = (1.0 - distance / policy.max_distance) * policy.opacity;
    Some(Connection {
        from,
        to,
        opacity,
        line_width: policy.line_width,
        color: pair_color(a, b, category).with_alpha(opacity),
    })
}

/// All links for this frame, widest first.
pub fn collect(entities: &[Entity]) -> Vec<Connection> {
    let mut out = Vec::new();
    for (i, a) in entities.iter().enumerate() {
        for b in &entities[i + 1..] {
            if let Some(c) = link(a, b) {
                out.push(c);
            }
        }
    }
    out.sort_by(|x, y| y.line_width.total_cmp(&x.line_width));
    out
}

pub fn draw(connections: &[Connection], surface: &mut dyn Surface) {
    for c in connections {
        surface.stroke_line(c.from, c.to, c.line_width, c.color);
    }
}
