// Persistence
pub const FORMAT_VERSION: u32 = 2;
pub const SAVE_FILE_NAME: &str = "glupo.json";
pub const LOG_FILE_NAME: &str = "glupo.log";

// Economy
pub const RESET_COST: u64 = 25_000_000;
pub const TRINKET_ROLL_COST: u32 = 3;
pub const RESET_SHARDS_PER_ROLL: u32 = 3;
pub const RESET_SHARD_ROLL_MIN: u32 = 1;
pub const RESET_SHARD_ROLL_MAX: u32 = 5;
pub const CHEAT_BALANCE_BONUS: u64 = 1_000_000;
pub const CHEAT_LIGHT_SHARDS: u32 = 90;

/// Cost of raising a base stat from level `i` to `i + 1`.
pub const STAT_LEVEL_COSTS: [u64; 10] = [
    0, 100, 300, 1_500, 10_000, 30_000, 100_000, 250_000, 1_000_000, 2_500_000,
];

// Derived stats
pub const BASE_MAX_SANITY: f64 = 60.0;
pub const MAX_SANITY_PER_PRUDENCE: f64 = 20.0;
pub const BASE_REGENERATION_DELAY_MS: f64 = 2500.0;
pub const REGENERATION_PER_PRUDENCE: f64 = 0.3;
pub const BASE_PANIC_RESTORE_DELAY_MS: f64 = 300.0;
pub const CRIT_STEP_PERCENT: f64 = 5.0;
pub const CRIT_CAP_PERCENT: f64 = 95.0;
pub const COOLDOWN_PER_JUSTICE: f64 = 0.1;

// Sanity
pub const PANIC_RESTORE_STEP: f64 = 1.0;

// Gacha
pub const REEL_SAMPLES: usize = 100;
pub const REEL_REPEATS: usize = 3;
pub const COMMON_WEIGHT: f64 = 0.5;
pub const RARE_WEIGHT: f64 = 0.3;
pub const SPECIAL_WEIGHT: f64 = 0.2;

// Hit detection
pub const HIT_SPEED_THRESHOLD: f64 = 20.0;
pub const CHARACTER_WIDTH: f64 = 150.0;
pub const CHARACTER_HEIGHT: f64 = 200.0;
pub const CHARACTER_Y_FRACTION: f64 = 0.4;
pub const CHARACTER_SPRITE_SCALE: f64 = 0.15;
pub const HIT_WOBBLE_IMPULSE: f64 = 0.1;

// Box tiers: boxes-per-second thresholds and particle count divisors
pub const BOX_TIER_BLUE_BPS: u64 = 32;
pub const BOX_TIER_RED_BPS: u64 = 64;
pub const BOX_TIER_WHITE_BPS: u64 = 128;

// Character wobble
pub const WOBBLE_DAMPING: f64 = 0.95;
pub const WOBBLE_SPRING: f64 = 0.01;
pub const WOBBLE_MAX_ROTATION_DEG: f64 = 10.0;
pub const WOBBLE_BOUNCE: f64 = 0.5;

// Weapon pose
pub const WEAPON_SCALE: f64 = 0.5;
pub const WEAPON_HITBOX_SCALE: f64 = 0.9;
pub const WEAPON_MAX_TILT_DEG: f64 = 15.0;
pub const WEAPON_TILT_SPEED_FRACTION: f64 = 0.05;
pub const PANIC_WEAPON_JITTER: f64 = 3.0;
pub const PANIC_GAUGE_JITTER: f64 = 2.0;

// Particles
pub const WALL_DAMPING: f64 = 0.7;
pub const BOX_BASE_SIZE: f64 = 32.0;
pub const BOX_CRIT_SIZE: f64 = 48.0;
pub const BOX_OPACITY_DECAY: f64 = 0.005;
pub const BOX_GRAVITY: f64 = 0.4;
pub const BOX_MIN_SPEED: f64 = 8.0;
pub const BOX_SPEED_SPREAD: f64 = 15.0;
pub const BOX_LAUNCH_LIFT: f64 = 10.0;
pub const HIT_FLASH_TIME_MS: f64 = 1000.0;
pub const HIT_FLASH_SIZE: f64 = 24.0;
pub const HIT_FLASH_CRIT_SIZE: f64 = 64.0;
pub const CHARACTER_HIT_RADIUS_FRACTION: f64 = 0.25;

// Pendant chain
pub const CHAIN_POINTS: usize = 10;
pub const CHAIN_SEGMENT_LENGTH: f64 = 10.0;
pub const CHAIN_ITERATIONS: usize = 5;
pub const CHAIN_FRICTION: f64 = 0.99;
pub const CHAIN_GRAVITY: f64 = 0.5;
pub const CHAIN_TAIL_MASS: f64 = 10.0;
pub const TRINKET_DRAW_SIZE: f64 = 48.0;

// Audio
pub const IDLE_QUIET_MS: f64 = 5000.0;
pub const IDLE_JITTER_MS: f64 = 5000.0;
pub const HURT_SANITY_FRACTION: f64 = 0.5;
pub const HURT_BASE_CHANCE: f64 = 0.25;
pub const HURT_CHANCE_SPAN: f64 = 0.5;
pub const BOX_PICKUP_VOLUME: f64 = 0.2;

// Sanity gauge
pub const GAUGE_EASING: f64 = 0.1;
pub const GAUGE_SNAP: f64 = 0.1;
