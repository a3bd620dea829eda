mod pointer;
mod window;

pub use pointer::wire_profile_pointer;
pub use window::{wire_resize, wire_visibility};
