//! Simulation constants and runtime configuration defaults

// Survey defaults follow the batch experiment the lattice was built for
/// Fixed seed for reproducible surveys and random walks
pub const DEFAULT_SEED: u64 = 42;

/// Number of independent trials in a survey
pub const DEFAULT_TRIALS: usize = 1000;

/// Random-walk steps used to seed each trial (yields at most 11 tiles)
pub const DEFAULT_WALK_LENGTH: usize = 10;

/// Random robot actions performed per trial
pub const DEFAULT_ACTIONS: usize = 100;

// Shape defaults for `run`
/// Default rectangle width
pub const DEFAULT_WIDTH: u32 = 2;
/// Default rectangle height
pub const DEFAULT_HEIGHT: u32 = 2;
/// Default hexagon radius
pub const DEFAULT_RADIUS: u32 = 2;

// Limits against runaway allocation from command-line input
/// Maximum tiles a setup shape may request
pub const MAX_SETUP_TILES: u64 = 1_000_000;
/// Maximum raster positions a text render may allocate
pub const MAX_RASTER_CELLS: u64 = 4_000_000;
/// Maximum pixels a PNG export may allocate
pub const MAX_IMAGE_PIXELS: u64 = 64_000_000;

// Relative weights of the random actions in a survey trial
/// Weight of a random move
pub const MOVE_WEIGHT: u32 = 4;
/// Weight of a pick-up attempt
pub const PICK_UP_WEIGHT: u32 = 1;
/// Weight of a place attempt
pub const PLACE_WEIGHT: u32 = 1;

// Logging
/// Filter used when `RUST_LOG` is unset and no `-v` flag is given
pub const DEFAULT_LOG_FILTER: &str = "hexlattice=warn";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Trials between progress bar redraws
pub const PROGRESS_REDRAW_INTERVAL: usize = 10;

// PNG export settings
/// Width of one cell column in pixels
pub const CELL_WIDTH_PX: u32 = 12;
/// Height of one half-row in pixels (a cell spans two)
pub const HALF_ROW_HEIGHT_PX: u32 = 6;
/// Border around the drawing in pixels
pub const IMAGE_MARGIN_PX: u32 = 4;
/// Background color
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Occupied tile color
pub const OCCUPIED_COLOR: [u8; 4] = [64, 96, 160, 255];
/// Present but unoccupied tile color
pub const EMPTY_TILE_COLOR: [u8; 4] = [200, 200, 200, 255];
/// Robot marker color
pub const ROBOT_COLOR: [u8; 4] = [220, 60, 40, 255];
