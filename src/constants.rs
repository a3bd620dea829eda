// DOM collaborators and overlay styling used by the web front-end. The page
// must provide the background canvas and the profile container with its
// photo; everything else is created at startup.

// Page elements
pub const BACKGROUND_CANVAS_ID: &str = "neuralNetwork";
pub const PROFILE_CONTAINER_SELECTOR: &str = ".image-container";
pub const PROFILE_IMAGE_SELECTOR: &str = ".profile-img";

// Profile container (CSS px)
pub const CONTAINER_SIZE_PX: f64 = 300.0;

// Overlay canvas drawn over the container (CSS px)
pub const OVERLAY_SIZE_PX: f64 = 400.0;
pub const OVERLAY_OFFSET_PX: f64 = -50.0; // (container - overlay) / 2
pub const OVERLAY_Z_INDEX: &str = "2";

// Tech badge captions
pub const LABEL_FONT: &str = "10px Arial";

// Frame deltas longer than this are treated as a resume after suspension
pub const MAX_FRAME_DT_MS: u64 = 250;
