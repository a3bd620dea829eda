//! Simulated points: background dust, tech badges, profile ring nodes and
//! click bursts.
//!
//! Each kind keeps only the state it needs. They share the [`Animate`]
//! capability so the scene can advance and draw the whole collection
//! without caring which coordinate space a node natively lives in: every
//! node reports its position in page space through
//! [`Animate::global_position`].

use crate::constants::*;
use crate::palette::{self, Color};
use crate::resolver::PositionResolver;
use crate::surface::{Paint, Surface};
use crate::tech::{LogoState, Tech};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::TAU;
use std::time::Duration;

/// Stable identity of an entity inside a [`crate::Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Background,
    Tech,
    Frame,
    Outer,
    Accent,
    Burst,
}

impl EntityKind {
    pub fn is_ring(self) -> bool {
        matches!(self, EntityKind::Frame | EntityKind::Outer | EntityKind::Accent)
    }
}

/// Per-frame inputs shared by every node update.
pub struct StepContext<'a> {
    /// Logical size of the page canvas.
    pub bounds: DVec2,
    pub resolver: &'a PositionResolver,
    pub dt: Duration,
    pub rng: &'a mut StdRng,
}

pub trait Animate {
    fn update(&mut self, ctx: &mut StepContext<'_>);
    fn global_position(&self) -> DVec2;
    /// Draw on the full-page canvas.
    fn draw_main(&self, surface: &mut dyn Surface);
}

/// Phase accumulator behind every pulsing size or alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub phase: f64,
    pub speed: f64,
}

impl Pulse {
    fn random<R: Rng + ?Sized>(rng: &mut R, min_speed: f64, speed_span: f64) -> Self {
        Self {
            phase: rng.gen::<f64>() * TAU,
            speed: min_speed + rng.gen::<f64>() * speed_span,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.phase += self.speed;
    }

    #[inline]
    pub fn wave(&self) -> f64 {
        self.phase.sin()
    }
}

/// Free linear motion in page space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Drift {
    /// Past `margin` outside an edge the velocity turns back toward the
    /// canvas at reduced magnitude. Position is held to that outer band.
    fn soft_bounce(&mut self, bounds: DVec2, margin: f64, damping: f64) {
        for axis in 0..2 {
            let (p, v, limit) = (self.pos[axis], self.vel[axis], bounds[axis]);
            if p < -margin {
                self.vel[axis] = v.abs() * damping;
            } else if p > limit + margin {
                self.vel[axis] = -v.abs() * damping;
            }
            self.pos[axis] = p.min(limit + margin).max(-margin);
        }
    }

    /// Inside `margin` from an edge the velocity reflects with
    /// `restitution` and the position is pushed back in bounds.
    fn hard_bounce(&mut self, bounds: DVec2, margin: f64, restitution: f64) {
        for axis in 0..2 {
            let (p, limit) = (self.pos[axis], bounds[axis]);
            if p < margin || p > limit - margin {
                self.vel[axis] *= -restitution;
                self.pos[axis] = p.min(limit - margin).max(margin);
            }
        }
    }
}

fn random_velocity<R: Rng + ?Sized>(rng: &mut R, max_speed: f64) -> DVec2 {
    DVec2::new(
        (rng.gen::<f64>() - 0.5) * 2.0 * max_speed,
        (rng.gen::<f64>() - 0.5) * 2.0 * max_speed,
    )
}

// ---------------- Background dust ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DustTint {
    Plain,
    Special(Color),
}

#[derive(Clone, Debug)]
pub struct DustNode {
    pub drift: Drift,
    pub radius: f64,
    pub base_alpha: f64,
    pub alpha: f64,
    pub pulse: Pulse,
    pub tint: DustTint,
}

impl DustNode {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bounds: DVec2) -> Self {
        let base_alpha = rng.gen::<f64>() * 0.3 + 0.1;
        Self {
            drift: Drift {
                pos: DVec2::new(rng.gen::<f64>() * bounds.x, rng.gen::<f64>() * bounds.y),
                vel: random_velocity(rng, BACKGROUND_MAX_SPEED),
            },
            radius: rng.gen::<f64>() * 1.5 + 0.5,
            base_alpha,
            alpha: base_alpha,
            pulse: Pulse::random(rng, 0.01, 0.02),
            tint: DustTint::Plain,
        }
    }

    /// Plain dust that is a little larger, brighter and coloured.
    pub fn special<R: Rng + ?Sized>(rng: &mut R, bounds: DVec2) -> Self {
        let mut node = Self::new(rng, bounds);
        node.radius = rng.gen::<f64>() * 2.0 + 1.0;
        node.base_alpha = rng.gen::<f64>() * 0.4 + 0.2;
        node.alpha = node.base_alpha;
        node.pulse.speed = rng.gen::<f64>() * 0.03 + 0.02;
        let pick = rng.gen_range(0..palette::SPECIAL_DUST.len());
        node.tint = DustTint::Special(palette::SPECIAL_DUST[pick]);
        node
    }

    pub fn alpha_band(&self) -> (f64, f64) {
        match self.tint {
            DustTint::Plain => (BACKGROUND_ALPHA_FLOOR, BACKGROUND_ALPHA_CEILING),
            DustTint::Special(_) => (SPECIAL_ALPHA_FLOOR, SPECIAL_ALPHA_CEILING),
        }
    }
}

impl Animate for DustNode {
    fn update(&mut self, ctx: &mut StepContext<'_>) {
        self.drift.pos += self.drift.vel;
        self.drift
            .soft_bounce(ctx.bounds, BACKGROUND_MARGIN, BACKGROUND_BOUNCE_DAMPING);

        self.pulse.advance();
        let (floor, ceiling) = self.alpha_band();
        self.alpha = (self.base_alpha + self.pulse.wave() * BACKGROUND_PULSE_AMPLITUDE)
            .clamp(floor, ceiling);
    }

    fn global_position(&self) -> DVec2 {
        self.drift.pos
    }

    fn draw_main(&self, surface: &mut dyn Surface) {
        let pos = self.drift.pos;
        let (color, glow, reach) = match self.tint {
            DustTint::Plain => (
                palette::BACKGROUND_NODE.with_alpha(self.alpha),
                palette::BACKGROUND_NODE.with_alpha(self.alpha * 0.5),
                2.0,
            ),
            DustTint::Special(c) => (
                c.with_alpha(self.alpha),
                c.with_alpha(self.alpha * palette::SPECIAL_GLOW_ALPHA_SCALE),
                3.0,
            ),
        };
        surface.fill_circle(pos, self.radius, &Paint::Solid(color));
        surface.fill_circle(
            pos,
            self.radius * reach,
            &Paint::glow(pos, self.radius, self.radius * reach, glow),
        );
    }
}

// ---------------- Tech badges ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
    In,
    Out,
}

#[derive(Clone, Debug)]
pub struct TechNode {
    pub tech: Tech,
    pub drift: Drift,
    pub size: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub pulse: Pulse,
    pub alpha: f64,
    pub fade: Fade,
    pub logo: LogoState,
}

impl TechNode {
    pub fn new<R: Rng + ?Sized>(tech: Tech, rng: &mut R, bounds: DVec2) -> Self {
        let span = (bounds - DVec2::splat(2.0 * TECH_SPAWN_INSET)).max(DVec2::ZERO);
        Self {
            tech,
            drift: Drift {
                pos: DVec2::new(
                    rng.gen::<f64>() * span.x + TECH_SPAWN_INSET,
                    rng.gen::<f64>() * span.y + TECH_SPAWN_INSET,
                ),
                vel: random_velocity(rng, TECH_MAX_SPEED),
            },
            size: TECH_BASE_SIZE,
            rotation: rng.gen::<f64>() * TAU,
            rotation_speed: (rng.gen::<f64>() - 0.5) * 2.0 * TECH_MAX_ROTATION_SPEED,
            pulse: Pulse::random(rng, 0.005, 0.01),
            alpha: 0.0,
            fade: Fade::In,
            logo: LogoState::Pending,
        }
    }

    /// Record the outcome of the logo fetch. A loaded logo appears at full
    /// alpha and starts fading; a failed one stays invisible for good.
    pub fn set_logo(&mut self, state: LogoState) {
        if self.logo == state {
            return;
        }
        self.logo = state;
        match state {
            LogoState::Ready => {
                self.alpha = TECH_ALPHA_CEILING;
                self.fade = Fade::Out;
            }
            LogoState::Pending | LogoState::Failed => self.alpha = 0.0,
        }
    }

    fn step_fade(&mut self) {
        let dir = match self.fade {
            Fade::In => 1.0,
            Fade::Out => -1.0,
        };
        self.alpha += dir * TECH_FADE_SPEED;
        if self.alpha >= TECH_ALPHA_CEILING {
            self.alpha = TECH_ALPHA_CEILING;
            self.fade = Fade::Out;
        } else if self.alpha <= TECH_ALPHA_FLOOR {
            self.alpha = TECH_ALPHA_FLOOR;
            self.fade = Fade::In;
        }
    }
}

impl Animate for TechNode {
    fn update(&mut self, ctx: &mut StepContext<'_>) {
        self.drift.pos += self.drift.vel;
        self.rotation += self.rotation_speed;
        self.pulse.advance();
        self.drift
            .hard_bounce(ctx.bounds, TECH_MARGIN, TECH_RESTITUTION);

        self.size = TECH_BASE_SIZE + self.pulse.wave() * TECH_SIZE_AMPLITUDE;
        if self.logo == LogoState::Ready {
            self.step_fade();
        }
    }

    fn global_position(&self) -> DVec2 {
        self.drift.pos
    }

    fn draw_main(&self, surface: &mut dyn Surface) {
        if self.logo != LogoState::Ready {
            return;
        }
        let pos = self.drift.pos;
        let glow = self.tech.color().with_alpha(palette::TECH_GLOW_ALPHA);
        surface.fill_circle(
            pos,
            self.size * 1.2,
            &Paint::glow(pos, self.size * 0.5, self.size * 1.5, glow),
        );
        surface.draw_logo(self.tech, pos, self.size, self.rotation, self.alpha);
        surface.fill_label(
            self.tech.label(),
            pos + DVec2::new(0.0, self.size + TECH_LABEL_OFFSET),
            palette::LABEL.with_alpha(self.alpha * 0.8),
        );
    }
}

// ---------------- Profile ring ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingKind {
    Frame,
    Outer,
    Accent,
}

impl RingKind {
    pub fn kind(self) -> EntityKind {
        match self {
            RingKind::Frame => EntityKind::Frame,
            RingKind::Outer => EntityKind::Outer,
            RingKind::Accent => EntityKind::Accent,
        }
    }

    /// Angular speed multiplier while the profile is hovered.
    pub fn hover_factor(self) -> f64 {
        match self {
            RingKind::Frame => FRAME_HOVER_FACTOR,
            RingKind::Outer => OUTER_HOVER_FACTOR,
            RingKind::Accent => ACCENT_HOVER_FACTOR,
        }
    }

    /// `(min, span)` of the radius band, `None` for the fixed frame ring.
    pub fn radius_band(self) -> Option<(f64, f64)> {
        match self {
            RingKind::Frame => None,
            RingKind::Outer => Some((OUTER_RADIUS_MIN, OUTER_RADIUS_SPAN)),
            RingKind::Accent => Some((ACCENT_RADIUS_MIN, ACCENT_RADIUS_SPAN)),
        }
    }

    pub fn colors(self) -> (Color, Color) {
        match self {
            RingKind::Frame => (palette::FRAME_NODE, palette::FRAME_GLOW),
            RingKind::Outer => (palette::OUTER_NODE, palette::OUTER_GLOW),
            RingKind::Accent => (palette::ACCENT_NODE, palette::ACCENT_GLOW),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RingNode {
    pub ring: RingKind,
    pub angle: f64,
    pub radius: f64,
    pub target_radius: f64,
    pub speed: f64,
    pub base_speed: f64,
    pub pulse: Pulse,
    pub size: f64,
    /// Position on the 400x400 overlay canvas.
    pub local: DVec2,
    /// Position on the page canvas.
    pub global: DVec2,
}

impl RingNode {
    pub fn new<R: Rng + ?Sized>(ring: RingKind, rng: &mut R, resolver: &PositionResolver) -> Self {
        let radius = match ring.radius_band() {
            None => FRAME_RADIUS,
            Some((min, span)) => min + rng.gen::<f64>() * span,
        };
        let (speed_min, speed_span, size_min, size_span) = match ring {
            RingKind::Frame => (0.005, 0.01, 1.0, 1.2),
            RingKind::Outer => (0.01, 0.02, 0.7, 0.8),
            RingKind::Accent => (0.008, 0.015, 0.5, 0.6),
        };
        let angle = rng.gen::<f64>() * TAU;
        let pulse = Pulse::random(rng, 0.02, 0.03);
        let base_speed = speed_min + rng.gen::<f64>() * speed_span;
        let size = size_min + rng.gen::<f64>() * size_span;
        let mut node = Self {
            ring,
            angle,
            radius,
            target_radius: radius,
            speed: base_speed,
            base_speed,
            pulse,
            size,
            local: DVec2::ZERO,
            global: DVec2::ZERO,
        };
        node.reposition(resolver);
        node
    }

    pub fn reposition(&mut self, resolver: &PositionResolver) {
        self.local = DVec2::splat(LOCAL_CENTER) + DVec2::from_angle(self.angle) * self.radius;
        self.global = resolver.to_global(self.local);
    }

    pub fn pulse_size(&self) -> f64 {
        self.size + self.pulse.wave() * RING_PULSE_AMPLITUDE
    }

    pub fn hover_enter(&mut self) {
        self.speed = self.base_speed * self.ring.hover_factor();
        self.pulse.speed *= HOVER_PULSE_FACTOR;
    }

    pub fn hover_leave(&mut self) {
        self.speed = self.base_speed;
        self.pulse.speed /= HOVER_PULSE_FACTOR;
    }

    /// Draw on the overlay canvas around the photo.
    pub fn draw_local(&self, surface: &mut dyn Surface) {
        self.draw_at(surface, self.local, 2.5);
    }

    fn draw_at(&self, surface: &mut dyn Surface, pos: DVec2, glow_reach: f64) {
        let (color, glow) = self.ring.colors();
        let r = self.pulse_size();
        surface.fill_circle(pos, r, &Paint::Solid(color));
        surface.fill_circle(pos, r * glow_reach, &Paint::glow(pos, r, r * glow_reach, glow));
    }
}

impl Animate for RingNode {
    fn update(&mut self, ctx: &mut StepContext<'_>) {
        self.pulse.advance();
        self.angle += self.speed;

        if let Some((min, span)) = self.ring.radius_band() {
            if (self.radius - self.target_radius).abs() > RADIUS_SETTLE_EPSILON {
                self.radius += (self.target_radius - self.radius) * RADIUS_EASE;
            } else if ctx.rng.gen_bool(RADIUS_RETARGET_CHANCE) {
                self.target_radius = min + ctx.rng.gen::<f64>() * span;
            }
        }

        self.reposition(ctx.resolver);
    }

    fn global_position(&self) -> DVec2 {
        self.global
    }

    fn draw_main(&self, surface: &mut dyn Surface) {
        self.draw_at(surface, self.global, 2.0);
    }
}

// ---------------- Click burst ----------------

/// Short-lived dot thrown out when the profile is clicked. Decay is driven
/// by the age it accumulates in the regular update pass.
#[derive(Clone, Debug)]
pub struct BurstNode {
    pub position: DVec2,
    pub size: f64,
    pub alpha: f64,
    pub age: Duration,
    pub decay_steps: u32,
}

impl BurstNode {
    pub fn new(position: DVec2) -> Self {
        Self {
            position,
            size: BURST_START_SIZE,
            alpha: 1.0,
            age: Duration::ZERO,
            decay_steps: 0,
        }
    }

    /// One tick of the fade: dimmer and larger. No-op once fully faded.
    pub fn decay_step(&mut self) {
        if self.alpha <= 0.0 {
            return;
        }
        self.decay_steps += 1;
        self.alpha = (1.0 - self.decay_steps as f64 * BURST_ALPHA_STEP).max(0.0);
        self.size += BURST_SIZE_STEP;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.age += dt;
        let due = (self.age.as_nanos() / BURST_DECAY_INTERVAL.as_nanos()) as u32;
        while self.decay_steps < due && self.alpha > 0.0 {
            self.decay_step();
        }
    }

    pub fn is_expired(&self) -> bool {
        self.alpha <= 0.0 || self.age >= BURST_LIFETIME
    }
}

impl Animate for BurstNode {
    fn update(&mut self, ctx: &mut StepContext<'_>) {
        self.advance(ctx.dt);
    }

    fn global_position(&self) -> DVec2 {
        self.position
    }

    fn draw_main(&self, surface: &mut dyn Surface) {
        surface.fill_circle(
            self.position,
            self.size,
            &Paint::Solid(palette::BURST.with_alpha(self.alpha)),
        );
    }
}

// ---------------- Collection entry ----------------

#[derive(Clone, Debug)]
pub enum Node {
    Dust(DustNode),
    Tech(TechNode),
    Ring(RingNode),
    Burst(BurstNode),
}

/// A node plus its identity in the scene.
#[derive(Clone, Debug)]
pub struct Entity {
    pub id: EntityId,
    pub node: Node,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match &self.node {
            Node::Dust(_) => EntityKind::Background,
            Node::Tech(_) => EntityKind::Tech,
            Node::Ring(r) => r.ring.kind(),
            Node::Burst(_) => EntityKind::Burst,
        }
    }

    fn animate(&self) -> &dyn Animate {
        match &self.node {
            Node::Dust(n) => n,
            Node::Tech(n) => n,
            Node::Ring(n) => n,
            Node::Burst(n) => n,
        }
    }

    pub fn update(&mut self, ctx: &mut StepContext<'_>) {
        match &mut self.node {
            Node::Dust(n) => n.update(ctx),
            Node::Tech(n) => n.update(ctx),
            Node::Ring(n) => n.update(ctx),
            Node::Burst(n) => n.update(ctx),
        }
    }

    pub fn global_position(&self) -> DVec2 {
        self.animate().global_position()
    }

    pub fn draw_main(&self, surface: &mut dyn Surface) {
        self.animate().draw_main(surface)
    }

    /// Current opacity of the node's fill.
    pub fn alpha(&self) -> f64 {
        match &self.node {
            Node::Dust(n) => n.alpha,
            Node::Tech(n) => n.alpha,
            Node::Ring(n) => n.ring.colors().0.a,
            Node::Burst(n) => n.alpha,
        }
    }

    pub fn tech(&self) -> Option<Tech> {
        match &self.node {
            Node::Tech(n) => Some(n.tech),
            _ => None,
        }
    }

    pub fn as_ring(&self) -> Option<&RingNode> {
        match &self.node {
            Node::Ring(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_burst(&self) -> Option<&BurstNode> {
        match &self.node {
            Node::Burst(n) => Some(n),
            _ => None,
        }
    }
}
