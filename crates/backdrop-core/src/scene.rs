//! The shared entity collection and the page-canvas loop.
//!
//! `Scene` is the only owner of the entity list. The page loop, the
//! profile loop and the event handlers all go through its methods; nothing
//! holds on to an entity across calls.

use crate::connections;
use crate::constants::{BURST_COUNT, BURST_RADIUS};
use crate::entity::{
    BurstNode, DustNode, Entity, EntityId, EntityKind, Node, RingKind, RingNode, StepContext,
    TechNode,
};
use crate::resolver::{PositionResolver, ProfileBox};
use crate::surface::Surface;
use crate::tech::{LogoState, Tech};
use crate::viewport::Viewport;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::f64::consts::TAU;
use std::time::Duration;

/// Population knobs for a scene.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub frame_count: usize,
    pub outer_count: usize,
    pub accent_count: usize,
    pub special_count: usize,
    /// Background dust count; `None` derives it from the viewport area.
    pub background_count: Option<usize>,
    pub techs: Vec<Tech>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            frame_count: 10,
            outer_count: 14,
            accent_count: 4,
            special_count: 4,
            background_count: None,
            techs: Tech::ALL.to_vec(),
        }
    }
}

pub struct Scene {
    entities: Vec<Entity>,
    next_id: u64,
    resolver: PositionResolver,
    viewport: Viewport,
    hovering: bool,
    rng: StdRng,
}

impl Scene {
    pub fn new(params: &SceneParams, viewport: Viewport, profile: ProfileBox, seed: u64) -> Self {
        let mut scene = Self {
            entities: Vec::new(),
            next_id: 0,
            resolver: PositionResolver::new(profile),
            viewport,
            hovering: false,
            rng: StdRng::seed_from_u64(seed),
        };
        scene.populate(params);
        scene
    }

    fn populate(&mut self, params: &SceneParams) {
        let bounds = self.viewport.logical_size();
        let dust = params
            .background_count
            .unwrap_or_else(|| self.viewport.background_count());

        for _ in 0..dust {
            let n = DustNode::new(&mut self.rng, bounds);
            self.spawn(Node::Dust(n));
        }
        for &tech in &params.techs {
            let n = TechNode::new(tech, &mut self.rng, bounds);
            self.spawn(Node::Tech(n));
        }
        let rings = [
            (RingKind::Frame, params.frame_count),
            (RingKind::Outer, params.outer_count),
            (RingKind::Accent, params.accent_count),
        ];
        for (ring, count) in rings {
            for _ in 0..count {
                let n = RingNode::new(ring, &mut self.rng, &self.resolver);
                self.spawn(Node::Ring(n));
            }
        }
        for _ in 0..params.special_count {
            let n = DustNode::special(&mut self.rng, bounds);
            self.spawn(Node::Dust(n));
        }

        log::info!(
            "[scene] dust={} tech={} ring={} special={}",
            dust,
            params.techs.len(),
            params.frame_count + params.outer_count + params.accent_count,
            params.special_count
        );
    }

    pub fn spawn(&mut self, node: Node) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity { id, node });
        id
    }

    /// Remove by identity. Returns whether the entity was still present.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.entities.iter().position(|e| e.id == id) {
            Some(i) => {
                self.entities.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn rings(&self) -> impl Iterator<Item = &RingNode> {
        self.entities.iter().filter_map(Entity::as_ring)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn resolver(&self) -> &PositionResolver {
        &self.resolver
    }

    /// Track the profile container's current on-screen box. Ring nodes
    /// pick it up on their next update.
    pub fn refresh_profile(&mut self, bounds: ProfileBox) {
        self.resolver.refresh(bounds);
    }

    /// Advance every entity, then drop finished bursts.
    pub fn update(&mut self, dt: Duration) {
        let mut ctx = StepContext {
            bounds: self.viewport.logical_size(),
            resolver: &self.resolver,
            dt,
            rng: &mut self.rng,
        };
        for e in &mut self.entities {
            e.update(&mut ctx);
        }
        self.entities.retain(|e| match &e.node {
            Node::Burst(b) => !b.is_expired(),
            _ => true,
        });
    }

    pub fn connections(&self) -> Vec<connections::Connection> {
        connections::collect(&self.entities)
    }

    /// Paint links first so nodes sit on top of them.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(self.viewport.logical_size());
        connections::draw(&self.connections(), surface);
        for e in &self.entities {
            e.draw_main(surface);
        }
    }

    /// One frame of the page loop.
    pub fn frame(&mut self, dt: Duration, profile: ProfileBox, surface: &mut dyn Surface) {
        self.refresh_profile(profile);
        self.update(dt);
        self.draw(surface);
    }

    // ---------------- Interaction ----------------

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Speed up the ring. Repeated enters without a leave are ignored.
    pub fn hover_enter(&mut self) {
        if self.hovering {
            return;
        }
        self.hovering = true;
        for e in &mut self.entities {
            if let Node::Ring(r) = &mut e.node {
                r.hover_enter();
            }
        }
        log::debug!("[hover] enter");
    }

    pub fn hover_leave(&mut self) {
        if !self.hovering {
            return;
        }
        self.hovering = false;
        for e in &mut self.entities {
            if let Node::Ring(r) = &mut e.node {
                r.hover_leave();
            }
        }
        log::debug!("[hover] leave");
    }

    /// Throw a ring of burst dots around the profile centre.
    pub fn burst(&mut self) -> SmallVec<[EntityId; BURST_COUNT]> {
        let center = self.resolver.center();
        let ids: SmallVec<[EntityId; BURST_COUNT]> = (0..BURST_COUNT)
            .map(|i| {
                let angle = i as f64 / BURST_COUNT as f64 * TAU;
                let pos = center + DVec2::from_angle(angle) * BURST_RADIUS;
                self.spawn(Node::Burst(BurstNode::new(pos)))
            })
            .collect();
        log::debug!("[burst] spawned {} at ({:.0}, {:.0})", ids.len(), center.x, center.y);
        ids
    }

    pub fn set_logo(&mut self, tech: Tech, state: LogoState) {
        for e in &mut self.entities {
            if let Node::Tech(t) = &mut e.node {
                if t.tech == tech {
                    t.set_logo(state);
                }
            }
        }
    }
}
