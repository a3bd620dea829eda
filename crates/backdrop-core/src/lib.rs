//! Platform-agnostic core of the neural backdrop.
//!
//! Nothing in here touches the DOM: the web front-end feeds in viewport and
//! profile geometry, calls [`Scene::frame`] and [`ProfileFrame::frame`] once
//! per animation frame, and implements [`Surface`] on top of a 2D canvas.

pub mod connections;
pub mod constants;
pub mod entity;
pub mod error;
pub mod palette;
pub mod profile;
pub mod resolver;
pub mod scene;
pub mod surface;
pub mod tech;
pub mod viewport;

pub use connections::{Connection, LinkPolicy, PairCategory};
pub use entity::{
    Animate, BurstNode, DustNode, DustTint, Entity, EntityId, EntityKind, Node, RingKind, RingNode,
    StepContext, TechNode,
};
pub use error::BackdropError;
pub use palette::Color;
pub use profile::{ContainerTransform, ProfileFrame};
pub use resolver::{PositionResolver, ProfileBox};
pub use scene::{Scene, SceneParams};
pub use surface::{Paint, Surface};
pub use tech::{LogoState, Tech};
pub use viewport::Viewport;
