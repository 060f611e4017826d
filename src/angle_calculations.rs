use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::BallisticsError;
use crate::trajectory::Trajectory;
use crate::trajectory_solver::TrajectorySolver;

/// Launch angle paired with the range it reaches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSample {
    pub angle_deg: f64,
    pub range_m: f64,
}

/// Angle grid of the two-pass sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub coarse_start_deg: u32,
    pub coarse_end_deg: u32,
    pub coarse_step_deg: u32,
    pub refine_half_width_deg: f64,
    pub refine_points: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            coarse_start_deg: COARSE_START_DEG,
            coarse_end_deg: COARSE_END_DEG,
            coarse_step_deg: COARSE_STEP_DEG,
            refine_half_width_deg: REFINE_HALF_WIDTH_DEG,
            refine_points: REFINE_POINTS,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), BallisticsError> {
        if self.coarse_step_deg == 0 {
            return Err(BallisticsError::invalid(
                "coarse_step_deg",
                0.0,
                "must be at least one degree",
            ));
        }
        if self.coarse_start_deg > self.coarse_end_deg {
            return Err(BallisticsError::invalid(
                "coarse_end_deg",
                self.coarse_end_deg as f64,
                "must not be below coarse_start_deg",
            ));
        }
        if !self.refine_half_width_deg.is_finite() || self.refine_half_width_deg < 0.0 {
            return Err(BallisticsError::invalid(
                "refine_half_width_deg",
                self.refine_half_width_deg,
                "must be a finite non-negative angle",
            ));
        }
        Ok(())
    }

    /// Whole-degree angles start, start + step, ... up to end inclusive.
    pub fn coarse_angles(&self) -> Vec<f64> {
        (self.coarse_start_deg..=self.coarse_end_deg)
            .step_by(self.coarse_step_deg.max(1) as usize)
            .map(f64::from)
            .collect()
    }

    /// Evenly spaced candidates across `center ± refine_half_width_deg`.
    pub fn refine_angles(&self, center_deg: f64) -> Vec<f64> {
        linspace(
            center_deg - self.refine_half_width_deg,
            center_deg + self.refine_half_width_deg,
            self.refine_points,
        )
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Running maximum of the sweep.
///
/// Ties go to the sample offered last, so the merge order decides them.
#[derive(Debug, Clone, Copy)]
struct RangeRecord {
    best: AngleSample,
}

impl RangeRecord {
    fn new() -> Self {
        Self {
            best: AngleSample {
                angle_deg: 0.0,
                range_m: 0.0,
            },
        }
    }

    /// A NaN range never compares `>=` and so never wins.
    fn offer(&mut self, sample: AngleSample) -> bool {
        if sample.range_m >= self.best.range_m {
            self.best = sample;
            true
        } else {
            false
        }
    }
}

/// Outcome of the coarse and refined angle sweeps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleSweep {
    /// Every coarse-pass angle with its range, in sweep order
    pub coarse: Vec<AngleSample>,
    /// Best sample after the coarse pass
    pub coarse_best: AngleSample,
    /// Refine-pass candidates with their ranges
    pub refined: Vec<AngleSample>,
    /// Best sample after both passes
    pub best: AngleSample,
}

impl AngleSweep {
    pub fn angles(&self) -> Vec<f64> {
        self.coarse.iter().map(|s| s.angle_deg).collect()
    }

    pub fn ranges(&self) -> Vec<f64> {
        self.coarse.iter().map(|s| s.range_m).collect()
    }

    pub fn best_angle(&self) -> f64 {
        self.best.angle_deg
    }

    pub fn best_range(&self) -> f64 {
        self.best.range_m
    }
}

/// Simulate one launch and estimate where it lands.
pub fn evaluate_angle(
    solver: &TrajectorySolver,
    angle_deg: f64,
) -> Result<AngleSample, BallisticsError> {
    let range_m = solver.solve(angle_deg)?.landing_range()?;
    if !range_m.is_finite() {
        warn!("angle {:.4}°: range is not finite ({}), skipping", angle_deg, range_m);
    }
    Ok(AngleSample { angle_deg, range_m })
}

fn evaluate_all(
    solver: &TrajectorySolver,
    angles: &[f64],
) -> Result<Vec<AngleSample>, BallisticsError> {
    angles
        .par_iter()
        .map(|&angle| evaluate_angle(solver, angle))
        .collect()
}

/// Find the launch angle of maximum range with the default angle grid.
pub fn find_optimal_angle(solver: &TrajectorySolver) -> Result<AngleSweep, BallisticsError> {
    find_optimal_angle_with(solver, &SweepConfig::default())
}

/// Two-pass search for the launch angle of maximum range.
///
/// The coarse pass scans whole-degree angles; the refine pass scans an
/// evenly spaced window around the coarse optimum. Trajectories of a pass
/// are computed in parallel, then merged into the record in sweep order.
pub fn find_optimal_angle_with(
    solver: &TrajectorySolver,
    config: &SweepConfig,
) -> Result<AngleSweep, BallisticsError> {
    solver.validate()?;
    config.validate()?;

    let mut record = RangeRecord::new();

    let coarse = evaluate_all(solver, &config.coarse_angles())?;
    for sample in &coarse {
        debug!("coarse {:>5.1}°: {:.1} m", sample.angle_deg, sample.range_m);
        record.offer(*sample);
    }
    let coarse_best = record.best;
    info!(
        "coarse pass: best {:.1}° at {:.1} m",
        coarse_best.angle_deg, coarse_best.range_m
    );

    let refined = evaluate_all(solver, &config.refine_angles(coarse_best.angle_deg))?;
    for sample in &refined {
        if record.offer(*sample) {
            debug!("refine {:.2}°: new best {:.1} m", sample.angle_deg, sample.range_m);
        }
    }
    info!(
        "optimal angle {:.2}° reaches {:.1} m",
        record.best.angle_deg, record.best.range_m
    );

    Ok(AngleSweep {
        coarse,
        coarse_best,
        refined,
        best: record.best,
    })
}

/// Angles of the default overlay chart: 30° to 70° in 5° steps.
pub fn default_fan_angles() -> Vec<f64> {
    let count = ((FAN_END_DEG - FAN_START_DEG) / FAN_STEP_DEG).round() as usize + 1;
    (0..count)
        .map(|i| FAN_START_DEG + i as f64 * FAN_STEP_DEG)
        .collect()
}

/// Full trajectories for a set of launch angles, in the given order.
pub fn trajectory_fan(
    solver: &TrajectorySolver,
    angles_deg: &[f64],
) -> Result<Vec<(f64, Trajectory)>, BallisticsError> {
    let trajectories = solver.solve_many(angles_deg)?;
    Ok(angles_deg.iter().copied().zip(trajectories).collect())
}
