//! Simulation constants and tuning parameters.

/// Host loop tick rate (Hz) when the game loop is paced.
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Default playfield width in pixels.
pub const DISPLAY_WIDTH: f64 = 800.0;

/// Default playfield height in pixels. Terrain never rises above it.
pub const DISPLAY_HEIGHT: f64 = 600.0;

/// Smallest playfield accepted by a session (either dimension).
pub const MIN_PLAYFIELD_SIZE: f64 = 100.0;

// --- Terrain ---

/// Horizontal distance between terrain samples (pixels).
pub const TERRAIN_STEP: f64 = 4.0;

/// Lowest generated ground level as a fraction of the playfield height.
pub const MIN_GROUND_FRACTION: f64 = 0.15;

/// Highest generated ground level as a fraction of the playfield height.
pub const MAX_GROUND_FRACTION: f64 = 0.65;

/// Number of sine harmonics summed by the terrain generator.
pub const TERRAIN_HARMONICS: usize = 4;

/// Steepest rise (height per horizontal pixel) that survives sloughing
/// around a crater. Steeper columns settle down to this slope.
pub const TERRAIN_MAX_SLOPE: f64 = 2.0;

// --- Shell ballistics ---

/// Shell speed at power 0.
pub const MIN_SHELL_SPEED: f64 = 5.0;

/// Additional shell speed per point of power.
pub const SHELL_SPEED_STEP: f64 = 0.12;

/// Gravity term of the arcade trajectory. Vertical speed loses
/// `GRAVITY * elapsed / 2` as the shell flies.
pub const GRAVITY: f64 = 10.0;

/// Elapsed time at the first trajectory step.
pub const SHELL_INITIAL_ELAPSED: f64 = 0.1;

/// Elapsed time added after every trajectory step.
pub const SHELL_TIME_STEP: f64 = 0.1;

/// Blast radius of a fired shell.
pub const SHELL_EXPLOSION_RADIUS: f64 = 30.0;

/// Damage dealt by a fired shell at point blank.
pub const SHELL_EXPLOSION_POWER: f64 = 50.0;

// --- Tanks ---

/// Starting (and maximum) tank health.
pub const TANK_MAX_HEALTH: i32 = 100;

/// Blast radius of a destroyed tank.
pub const TANK_EXPLOSION_RADIUS: f64 = 40.0;

/// Damage dealt by a destroyed tank's own blast at point blank.
pub const TANK_EXPLOSION_POWER: f64 = 40.0;

/// Height of the turret pivot above the tank's ground contact point.
pub const TURRET_PIVOT_HEIGHT: f64 = 10.0;

/// Barrel length from the turret pivot to the muzzle.
pub const GUN_LENGTH: f64 = 16.0;

/// Height of the hit circle centre above the ground contact point.
pub const TANK_HITBOX_OFFSET: f64 = 5.0;

/// Radius of the tank hit circle.
pub const TANK_HITBOX_RADIUS: f64 = 12.0;

/// Starting turret angle (radians, 0 = straight up).
pub const DEFAULT_TURRET_ANGLE: f64 = 0.0;

/// Starting turret power.
pub const DEFAULT_TURRET_POWER: u32 = 50;

/// Lowest turret angle in degrees.
pub const MIN_ANGLE_DEGREES: f64 = -90.0;

/// Highest turret angle in degrees.
pub const MAX_ANGLE_DEGREES: f64 = 90.0;

/// Highest turret power.
pub const MAX_POWER: u32 = 100;

/// Turret rotation per animation tick (radians, ~1°).
pub const ANGLE_STEP: f64 = std::f64::consts::PI / 180.0;

/// Minimum horizontal distance between freshly placed tanks.
pub const TANK_MIN_SPACING: f64 = 40.0;

/// Keep-out margin between placed tanks and the playfield edges.
pub const TANK_EDGE_MARGIN: f64 = 20.0;

/// Placement attempts per tank before falling back to even spacing.
pub const TANK_PLACEMENT_ATTEMPTS: u32 = 64;

// --- Players ---

/// Fallback colours handed out from the end when a preferred colour is
/// invalid or already taken. Also caps the number of players.
pub const FALLBACK_PALETTE: [&str; 8] = [
    "red", "green", "blue", "purple", "yellow", "orange", "cyan", "magenta",
];

/// Maximum number of players in one session.
pub const MAX_PLAYERS: usize = FALLBACK_PALETTE.len();
