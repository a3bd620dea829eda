// Host-side tests for proximity links between entities.

mod common;

use backdrop_core::connections::{collect, link, PairCategory};
use backdrop_core::entity::{BurstNode, Entity, EntityId, EntityKind, Node, RingKind};
use backdrop_core::{palette, Tech};
use common::{approx, dust_at, ring_at, special_at, tech_at};
use glam::DVec2;

fn at(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

#[test]
fn pair_categories_follow_precedence() {
    use EntityKind::*;
    assert_eq!(PairCategory::classify(Background, Background), PairCategory::BackgroundBackground);
    assert_eq!(PairCategory::classify(Tech, Background), PairCategory::TechInvolved);
    assert_eq!(PairCategory::classify(Frame, Tech), PairCategory::TechInvolved);
    assert_eq!(PairCategory::classify(Tech, Tech), PairCategory::TechInvolved);
    assert_eq!(PairCategory::classify(Frame, Frame), PairCategory::FrameFrame);
    assert_eq!(PairCategory::classify(Outer, Outer), PairCategory::OuterOuter);
    assert_eq!(PairCategory::classify(Frame, Outer), PairCategory::Mixed);
    assert_eq!(PairCategory::classify(Accent, Accent), PairCategory::Mixed);
    assert_eq!(PairCategory::classify(Background, Frame), PairCategory::Mixed);
    assert_eq!(PairCategory::classify(Burst, Outer), PairCategory::Mixed);
}

#[test]
fn link_exists_only_below_threshold() {
    let cases = [
        (PairCategory::BackgroundBackground, dust_at(0, at(0.0, 0.0)), dust_at(1, at(0.0, 0.0))),
        (PairCategory::FrameFrame, ring_at(0, RingKind::Frame, at(0.0, 0.0)), ring_at(1, RingKind::Frame, at(0.0, 0.0))),
        (PairCategory::OuterOuter, ring_at(0, RingKind::Outer, at(0.0, 0.0)), ring_at(1, RingKind::Outer, at(0.0, 0.0))),
        (PairCategory::TechInvolved, tech_at(0, Tech::Cpp, at(0.0, 0.0)), dust_at(1, at(0.0, 0.0))),
        (PairCategory::Mixed, ring_at(0, RingKind::Accent, at(0.0, 0.0)), dust_at(1, at(0.0, 0.0))),
    ];
    for (category, a, b) in cases {
        let max = category.policy().max_distance;
        for (d, expect) in [(0.0, true), (max * 0.5, true), (max - 1e-6, true), (max, false), (max + 1.0, false)] {
            let b = moved(&b, at(d, 0.0));
            assert_eq!(link(&a, &b).is_some(), expect, "{category:?} at distance {d}");
        }
    }
}

fn moved(e: &Entity, pos: DVec2) -> Entity {
    let mut e = e.clone();
    match &mut e.node {
        Node::Dust(n) => n.drift.pos = pos,
        Node::Tech(n) => n.drift.pos = pos,
        Node::Ring(n) => n.global = pos,
        Node::Burst(n) => n.position = pos,
    }
    e
}

#[test]
fn opacity_fades_linearly_with_distance() {
    let a = dust_at(0, at(100.0, 100.0));
    let b = dust_at(1, at(100.0, 160.0));
    let c = link(&a, &b).expect("within 120px");
    assert!(approx(c.opacity, (1.0 - 60.0 / 120.0) * 0.15));
    assert!(approx(c.color.a, c.opacity));
    assert_eq!(c.line_width, 0.3);

    let f1 = ring_at(2, RingKind::Frame, at(0.0, 0.0));
    let f2 = ring_at(3, RingKind::Frame, at(30.0, 40.0));
    let c = link(&f1, &f2).expect("within 100px");
    assert!(approx(c.opacity, (1.0 - 50.0 / 100.0) * 0.4));
    assert_eq!((c.color.r, c.color.g, c.color.b), (78, 204, 163));
}

#[test]
fn ring_links_use_projected_positions() {
    let mut a = ring_at(0, RingKind::Outer, at(500.0, 500.0));
    if let Node::Ring(n) = &mut a.node {
        n.local = at(0.0, 0.0);
    }
    let b = ring_at(1, RingKind::Outer, at(540.0, 500.0));
    let c = link(&a, &b).expect("40px apart in page space");
    assert_eq!(c.from, at(500.0, 500.0));
    assert_eq!(c.to, at(540.0, 500.0));
}

#[test]
fn tech_pairs_take_the_badge_colour_first_side_wins() {
    let js = tech_at(0, Tech::JavaScript, at(0.0, 0.0));
    let py = tech_at(1, Tech::Python, at(10.0, 0.0));
    let dust = dust_at(2, at(20.0, 0.0));

    let c = link(&js, &py).expect("close");
    assert_eq!((c.color.r, c.color.g, c.color.b), (247, 223, 30));
    let c = link(&py, &js).expect("close");
    assert_eq!((c.color.r, c.color.g, c.color.b), (53, 114, 165));
    let c = link(&dust, &py).expect("close");
    assert_eq!((c.color.r, c.color.g, c.color.b), (53, 114, 165));
}

#[test]
fn mixed_pairs_prefer_frame_then_outer_then_white() {
    let rgb = |c: backdrop_core::Color| (c.r, c.g, c.b);
    let frame = ring_at(0, RingKind::Frame, at(0.0, 0.0));
    let outer = ring_at(1, RingKind::Outer, at(10.0, 0.0));
    let accent = ring_at(2, RingKind::Accent, at(20.0, 0.0));
    let dust = dust_at(3, at(30.0, 0.0));
    let burst = Entity {
        id: EntityId(4),
        node: Node::Burst(BurstNode::new(at(40.0, 0.0))),
    };
    let accent2 = ring_at(5, RingKind::Accent, at(50.0, 0.0));

    let color = |a: &Entity, b: &Entity| rgb(link(a, b).expect("close").color);
    assert_eq!(color(&frame, &outer), rgb(palette::FRAME_LINK));
    assert_eq!(color(&outer, &frame), rgb(palette::FRAME_LINK));
    assert_eq!(color(&accent, &frame), rgb(palette::FRAME_LINK));
    assert_eq!(color(&outer, &accent), rgb(palette::OUTER_LINK));
    assert_eq!(color(&burst, &outer), rgb(palette::OUTER_LINK));
    assert_eq!(color(&frame, &dust), rgb(palette::NEUTRAL_LINK));
    assert_eq!(color(&dust, &outer), rgb(palette::NEUTRAL_LINK));
    assert_eq!(color(&accent, &accent2), rgb(palette::NEUTRAL_LINK));
}

#[test]
fn special_dust_links_like_plain_dust() {
    let a = special_at(0, at(0.0, 0.0));
    let b = dust_at(1, at(50.0, 0.0));
    let c = link(&a, &b).expect("close");
    assert_eq!(c.line_width, PairCategory::BackgroundBackground.policy().line_width);
}

#[test]
fn collect_covers_every_pair_widest_first() {
    let entities = vec![
        dust_at(0, at(0.0, 0.0)),
        dust_at(1, at(30.0, 0.0)),
        ring_at(2, RingKind::Frame, at(60.0, 0.0)),
        ring_at(3, RingKind::Frame, at(90.0, 0.0)),
        ring_at(4, RingKind::Outer, at(120.0, 0.0)),
        tech_at(5, Tech::React, at(150.0, 0.0)),
        dust_at(6, at(5_000.0, 5_000.0)),
    ];
    let mut expected = 0;
    for i in 0..entities.len() {
        for j in i + 1..entities.len() {
            if link(&entities[i], &entities[j]).is_some() {
                expected += 1;
            }
        }
    }
    let links = collect(&entities);
    assert_eq!(links.len(), expected);
    assert!(links.len() > 10);
    assert!(links.windows(2).all(|w| w[0].line_width >= w[1].line_width));
    assert_eq!(links[0].line_width, 1.2);
}
