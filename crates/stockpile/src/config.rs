/// Drinking water ration per person per day (litres). Applies to every risk
/// tier under [`crate::hazard::RationPolicy::Fixed`].
pub const DRINKING_WATER_PER_PERSON_PER_DAY: u64 = 3;

/// Meals per person per day.
pub const MEALS_PER_PERSON_PER_DAY: u64 = 3;

/// Drinking water is 7/10 of the total water stock; the remaining 3/10 is
/// life/emergency water. Kept as an integer ratio so the total is exact.
pub const DRINKING_SHARE_NUMERATOR: u64 = 7;
pub const DRINKING_SHARE_DENOMINATOR: u64 = 10;

pub const PERSONS_PER_KIT: u64 = 10;
pub const PERSONS_PER_LIGHT: u64 = 20;
pub const PERSONS_PER_BLANKET: u64 = 2;

/// Upper bound for headcount input.
pub const MAX_HEADCOUNT: u32 = 100_000;

/// Largest severity multiplier a location table may carry.
pub const MAX_LOCATION_MULTIPLIER: f64 = 10.0;

/// Subtracted before taking the ceiling of `days * multiplier`, so that
/// `10 * 1.1 = 11.000000000000002` stays at 11 days.
pub const DAYS_ROUNDING_EPSILON: f64 = 1e-9;

/// Slack allowed when comparing remaining stock against a day's consumption.
pub const STOCK_SHORTFALL_EPSILON: f64 = 1e-6;

// Procurement cost estimate (yen).
pub const WATER_UNIT_COST: u64 = 100;
pub const MEAL_UNIT_COST: u64 = 500;
pub const KIT_UNIT_COST: u64 = 10_000;
pub const COST_ROUNDING_STEP: u64 = 1_000;
