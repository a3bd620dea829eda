use std::time::Duration;

// Tuning constants for the simulation. Distances are in CSS pixels, speeds
// are per animation frame unless the name says otherwise.

// Background population (scaled to viewport area)
pub const BACKGROUND_AREA_PER_NODE: f64 = 20_000.0;
pub const BACKGROUND_MIN_COUNT: usize = 40;
pub const BACKGROUND_MAX_COUNT: usize = 100;

// Background dust motion
pub const BACKGROUND_MARGIN: f64 = 50.0; // outside the canvas edge
pub const BACKGROUND_MAX_SPEED: f64 = 0.15;
pub const BACKGROUND_BOUNCE_DAMPING: f64 = 0.5;
pub const BACKGROUND_PULSE_AMPLITUDE: f64 = 0.1;
pub const BACKGROUND_ALPHA_FLOOR: f64 = 0.0;
pub const BACKGROUND_ALPHA_CEILING: f64 = 0.5;
pub const SPECIAL_ALPHA_FLOOR: f64 = 0.1;
pub const SPECIAL_ALPHA_CEILING: f64 = 0.7;

// Tech badges
pub const TECH_MARGIN: f64 = 50.0; // inside the canvas edge
pub const TECH_SPAWN_INSET: f64 = 100.0;
pub const TECH_MAX_SPEED: f64 = 0.2;
pub const TECH_RESTITUTION: f64 = 0.8;
pub const TECH_BASE_SIZE: f64 = 24.0;
pub const TECH_SIZE_AMPLITUDE: f64 = 3.0;
pub const TECH_MAX_ROTATION_SPEED: f64 = 0.01;
pub const TECH_ALPHA_FLOOR: f64 = 0.3;
pub const TECH_ALPHA_CEILING: f64 = 0.8;
pub const TECH_FADE_SPEED: f64 = 0.02;
pub const TECH_LABEL_OFFSET: f64 = 15.0;

// Profile local space: ring nodes orbit LOCAL_CENTER inside a
// LOCAL_REFERENCE_SIZE container drawn on an OVERLAY_SIZE canvas.
pub const LOCAL_CENTER: f64 = 200.0;
pub const LOCAL_REFERENCE_SIZE: f64 = 300.0;
pub const OVERLAY_SIZE: f64 = 400.0;

// Ring geometry
pub const FRAME_RADIUS: f64 = 145.0;
pub const OUTER_RADIUS_MIN: f64 = 160.0;
pub const OUTER_RADIUS_SPAN: f64 = 40.0;
pub const ACCENT_RADIUS_MIN: f64 = 130.0;
pub const ACCENT_RADIUS_SPAN: f64 = 30.0;
pub const RADIUS_EASE: f64 = 0.03;
pub const RADIUS_SETTLE_EPSILON: f64 = 0.1;
pub const RADIUS_RETARGET_CHANCE: f64 = 0.005;
pub const RING_PULSE_AMPLITUDE: f64 = 0.3;

// Hover speed-up
pub const FRAME_HOVER_FACTOR: f64 = 2.5;
pub const OUTER_HOVER_FACTOR: f64 = 3.0;
pub const ACCENT_HOVER_FACTOR: f64 = 2.0;
pub const HOVER_PULSE_FACTOR: f64 = 1.5;

// Click burst
pub const BURST_COUNT: usize = 8;
pub const BURST_RADIUS: f64 = 130.0;
pub const BURST_START_SIZE: f64 = 2.0;
pub const BURST_ALPHA_STEP: f64 = 0.05;
pub const BURST_SIZE_STEP: f64 = 0.1;
pub const BURST_DECAY_INTERVAL: Duration = Duration::from_millis(30);
pub const BURST_LIFETIME: Duration = Duration::from_millis(600);

// Profile frame loop
pub const FRAME_PULSE_STEP: f64 = 0.02;
pub const HOVER_PROGRESS_STEP: f64 = 0.05;
pub const OUTLINE_RADIUS: f64 = 145.0;
pub const OUTLINE_GLOW_RADIUS: f64 = 148.0;
pub const OUTLINE_GLOW_OUTER: f64 = 160.0;
pub const OUTLINE_GLOW_WIDTH: f64 = 3.0;
pub const HOVER_ZOOM: f64 = 0.05;
