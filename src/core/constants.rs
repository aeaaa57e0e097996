// Shape constants for generated usage series

/// Upper bound of the very first draw; the walk starts near the floor.
pub const INITIAL_HIGH: u8 = 40;

/// Usage is a percentage.
pub const USAGE_MAX: u8 = 100;

// Hour window: one sample every 10 s
pub const HOUR_DURATION_SECS: u32 = 60 * 60;
pub const HOUR_INTERVAL_SECS: u32 = 10;

// Week window: one sample every 10 min
pub const WEEK_DURATION_SECS: u32 = 7 * 24 * 60 * 60;
pub const WEEK_INTERVAL_SECS: u32 = 10 * 60;

// Step bounds as (down, up)
pub const SYMMETRIC_STEP: (u8, u8) = (10, 10);
pub const UPWARD_STEP_HOUR: (u8, u8) = (2, 4);
pub const UPWARD_STEP_WEEK: (u8, u8) = (3, 5);
