//! Physical constants used in trajectory calculations
//!
//! The default parameter set describes the Paris Gun (Paris-Geschütz), the
//! long-range siege gun of 1918 whose shells climbed into the stratosphere.

/// Gravitational acceleration in m/s²
///
/// Value: 9.81 (rounded standard gravity, matching the reference tables
/// the default scenario was calibrated against)
pub const G_ACCEL_MPS2: f64 = 9.81;

/// Exponent of the adiabatic air density model
///
/// Density scales as `(1 - a * y / T0)^alpha`. For dry air with
/// gamma = 1.4 the adiabatic exponent is 1 / (gamma - 1) = 2.5.
pub const DENSITY_EXPONENT: f64 = 2.5;

/// Temperature lapse rate of the adiabatic model in K/m
///
/// Value: 6.5e-3 (ICAO troposphere, -6.5 K/km)
pub const LAPSE_RATE_K_PER_M: f64 = 6.5e-3;

/// Sea-level reference temperature in K
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.0;

/// Projectile mass in kg
pub const PROJECTILE_MASS_KG: f64 = 50.0;

/// Drag constant B in kg/m
///
/// Lumps 0.5 * rho0 * Cd * A for the Paris Gun shell so that the
/// sea-level drag deceleration is `B / m * |v| * v`.
pub const DRAG_COEFFICIENT: f64 = 2e-3;

/// Muzzle velocity in m/s
pub const MUZZLE_VELOCITY_MPS: f64 = 1640.0;

// Integration defaults

/// Default fixed integration step in seconds
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;

/// Upper bound on integration steps for a single trajectory
///
/// A 1640 m/s vacuum shot at 90° stays aloft ~335 s, so ten million steps
/// only trip for step sizes far below any useful resolution.
pub const DEFAULT_MAX_STEPS: usize = 10_000_000;

/// Largest trajectory buffer reserved up front (samples)
pub const MAX_PREALLOCATED_SAMPLES: usize = 1_000_000;

// Angle sweep defaults (degrees)

/// First angle of the coarse pass
pub const COARSE_START_DEG: u32 = 1;

/// Last angle considered by the coarse pass (inclusive)
pub const COARSE_END_DEG: u32 = 89;

/// Increment between coarse-pass angles
pub const COARSE_STEP_DEG: u32 = 2;

/// Half-width of the refine window around the coarse optimum
pub const REFINE_HALF_WIDTH_DEG: f64 = 2.0;

/// Number of evenly spaced candidates in the refine window
///
/// 41 points across ±2° gives a 0.1° resolution.
pub const REFINE_POINTS: usize = 41;

/// Angles of the trajectory fan used for overlay charts: 30°, 35°, ... 70°
pub const FAN_START_DEG: f64 = 30.0;
pub const FAN_END_DEG: f64 = 70.0;
pub const FAN_STEP_DEG: f64 = 5.0;
