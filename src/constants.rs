/// Interaction tuning constants and DOM hooks.
///
/// These constants express intended behavior (snap radius, timings, scale
/// factors) and keep magic numbers and selector strings out of the wiring code.
// Magnetic snap: distance (layout px) from a target center under which the
// portrait jumps onto that center.
pub const SNAP_THRESHOLD: f32 = 50.0;

// Advisory ("drag me") message visibility after a plain click
pub const ADVISORY_VISIBLE_MS: u32 = 2000;

// Visual scale factors
pub const DRAG_SCALE: f32 = 0.93; // portrait while grabbed
pub const REST_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.02; // nav links under the mouse

// Element hooks in the page markup
pub const ENTITY_ID: &str = "portrait";
pub const ADVISORY_ID: &str = "drag-hint";
pub const TARGET_A_SELECTOR: &str = ".nav-dev";
pub const TARGET_B_SELECTOR: &str = ".nav-music";

// Image variants are read from these attributes on the portrait
pub const SRC_DEFAULT_ATTR: &str = "data-src-default";
pub const SRC_A_ATTR: &str = "data-src-a";
pub const SRC_B_ATTR: &str = "data-src-b";

// Class names toggled on the portrait, the targets and the advisory text
pub const GRABBING_CLASS: &str = "grabbing";
pub const ARMED_CLASS: &str = "drop-target";
pub const HIDDEN_CLASS: &str = "hidden";

// CSS custom property kept equal to 1% of the inner window height
pub const VH_PROPERTY: &str = "--vh";
