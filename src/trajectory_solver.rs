use log::{debug, trace};
use rayon::prelude::*;

use crate::constants::{DEFAULT_MAX_STEPS, DEFAULT_TIME_STEP_S, MAX_PREALLOCATED_SAMPLES};
use crate::derivatives::{launch_state, ProjectileDynamics};
use crate::error::BallisticsError;
use crate::params::PhysicalParams;
use crate::rk4::rk4_step;
use crate::trajectory::Trajectory;

/// Fixed-step RK4 trajectory solver
#[derive(Debug, Clone)]
pub struct TrajectorySolver {
    params: PhysicalParams,
    time_step: f64,
    max_steps: usize,
}

impl TrajectorySolver {
    pub fn new(params: PhysicalParams) -> Self {
        Self {
            params,
            time_step: DEFAULT_TIME_STEP_S,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_time_step(mut self, step: f64) -> Self {
        self.time_step = step;
        self
    }

    pub fn set_time_step(&mut self, step: f64) {
        self.time_step = step;
    }

    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = max_steps;
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn params(&self) -> &PhysicalParams {
        &self.params
    }

    /// Check the step size and parameter set before integrating.
    pub fn validate(&self) -> Result<(), BallisticsError> {
        let h = self.time_step;
        if !h.is_finite() || h <= 0.0 {
            return Err(BallisticsError::invalid(
                "time_step",
                h,
                "must be a finite positive number of seconds",
            ));
        }
        self.params.validate()
    }

    fn estimated_samples(&self, angle_deg: f64) -> usize {
        let steps = self.params.vacuum_flight_time(angle_deg) / self.time_step;
        // Saturating float-to-int cast keeps huge estimates bounded
        (steps.ceil() as usize)
            .saturating_add(2)
            .min(MAX_PREALLOCATED_SAMPLES)
    }

    /// Integrate a launch at `angle_deg` until the projectile is below ground.
    ///
    /// Every post-step position is recorded; the last sample is the first
    /// with negative altitude. A state that turns NaN also ends the flight,
    /// since its altitude no longer compares as above ground.
    pub fn solve(&self, angle_deg: f64) -> Result<Trajectory, BallisticsError> {
        self.validate()?;
        if !angle_deg.is_finite() {
            return Err(BallisticsError::invalid("angle_deg", angle_deg, "must be finite"));
        }

        let h = self.time_step;
        let dynamics = ProjectileDynamics::new(&self.params);
        let mut state = launch_state(self.params.muzzle_velocity, angle_deg);
        let mut trajectory = Trajectory::with_capacity(self.estimated_samples(angle_deg), h);
        let mut steps = 0usize;

        while state[1] >= 0.0 {
            if steps >= self.max_steps {
                return Err(BallisticsError::StepLimitExceeded {
                    limit: self.max_steps,
                    angle_deg,
                });
            }
            state = rk4_step(&dynamics, &state, h);
            trajectory.push(state[0], state[1]);
            steps += 1;
            trace!("step {}: x = {:.3}, y = {:.3}", steps, state[0], state[1]);
        }

        debug!(
            "angle {:.4}°: {} steps, last sample ({:.2}, {:.2})",
            angle_deg, steps, state[0], state[1]
        );
        Ok(trajectory)
    }

    /// Solve several launches in parallel, results in input order.
    pub fn solve_many(&self, angles_deg: &[f64]) -> Result<Vec<Trajectory>, BallisticsError> {
        self.validate()?;
        angles_deg
            .par_iter()
            .map(|&angle| self.solve(angle))
            .collect()
    }
}
