// Shared helpers for host-side tests of the core crate.
#![allow(dead_code)]

use backdrop_core::entity::{DustNode, Entity, EntityId, Node, RingKind, RingNode, TechNode};
use backdrop_core::{Color, Paint, PositionResolver, Surface, Tech};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Drawing call captured by [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(DVec2),
    FillCircle { center: DVec2, radius: f64 },
    StrokeCircle { center: DVec2, radius: f64, line_width: f64 },
    Line { line_width: f64, color: Color },
    Logo { tech: Tech, alpha: f64 },
    Label(String),
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, size: DVec2) {
        self.ops.push(Op::Clear(size));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, _paint: &Paint) {
        self.ops.push(Op::FillCircle { center, radius });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, line_width: f64, _paint: &Paint) {
        self.ops.push(Op::StrokeCircle {
            center,
            radius,
            line_width,
        });
    }

    fn stroke_line(&mut self, _from: DVec2, _to: DVec2, line_width: f64, color: Color) {
        self.ops.push(Op::Line { line_width, color });
    }

    fn draw_logo(&mut self, tech: Tech, _center: DVec2, _size: f64, _rotation: f64, alpha: f64) {
        self.ops.push(Op::Logo { tech, alpha });
    }

    fn fill_label(&mut self, text: &str, _at: DVec2, _color: Color) {
        self.ops.push(Op::Label(text.to_string()));
    }
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

pub const BOUNDS: DVec2 = DVec2::new(800.0, 600.0);

pub fn dust_at(id: u64, pos: DVec2) -> Entity {
    let mut n = DustNode::new(&mut rng(), BOUNDS);
    n.drift.pos = pos;
    Entity {
        id: EntityId(id),
        node: Node::Dust(n),
    }
}

pub fn special_at(id: u64, pos: DVec2) -> Entity {
    let mut n = DustNode::special(&mut rng(), BOUNDS);
    n.drift.pos = pos;
    Entity {
        id: EntityId(id),
        node: Node::Dust(n),
    }
}

pub fn tech_at(id: u64, tech: Tech, pos: DVec2) -> Entity {
    let mut n = TechNode::new(tech, &mut rng(), BOUNDS);
    n.drift.pos = pos;
    Entity {
        id: EntityId(id),
        node: Node::Tech(n),
    }
}

pub fn ring_at(id: u64, ring: RingKind, pos: DVec2) -> Entity {
    let mut n = RingNode::new(ring, &mut rng(), &PositionResolver::default());
    n.global = pos;
    Entity {
        id: EntityId(id),
        node: Node::Ring(n),
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
