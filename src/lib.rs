//! # Artillery Engine
//!
//! Trajectory integration and launch-angle optimization for long-range
//! guns firing through an adiabatic atmosphere.
//!
//! A point-mass projectile is integrated with a fixed-step classical RK4
//! scheme until it falls below ground; the landing point is interpolated
//! from the last two samples, and a coarse-then-refined sweep over launch
//! angle finds the angle of maximum range. The default parameters describe
//! the Paris Gun of 1918.
//!
//! ```no_run
//! use artillery_engine::{find_optimal_angle, PhysicalParams, TrajectorySolver};
//!
//! let solver = TrajectorySolver::new(PhysicalParams::default()).with_time_step(0.1);
//! let sweep = find_optimal_angle(&solver)?;
//! println!("optimal angle: {:.1}°", sweep.best_angle());
//! # Ok::<(), artillery_engine::BallisticsError>(())
//! ```

// Re-export the main types and functions
pub use angle_calculations::{
    default_fan_angles, evaluate_angle, find_optimal_angle, find_optimal_angle_with,
    trajectory_fan, AngleSample, AngleSweep, SweepConfig,
};
pub use derivatives::{launch_state, ProjectileDynamics, State};
pub use drag_law::DragLaw;
pub use error::BallisticsError;
pub use landing::estimate_landing_range;
pub use params::PhysicalParams;
pub use rk4::{rk4_step, OdeSystem};
pub use trajectory::{FlightSummary, Trajectory};
pub use trajectory_solver::TrajectorySolver;
pub use wind::Wind;

// Module declarations
pub mod angle_calculations;
pub mod atmosphere;
pub mod constants;
mod derivatives;
mod drag_law;
mod error;
mod landing;
mod params;
pub mod rk4;
mod trajectory;
mod trajectory_solver;
mod wind;
