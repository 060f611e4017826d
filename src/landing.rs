use crate::error::BallisticsError;
use crate::trajectory::Trajectory;

/// Estimate where the projectile crosses `y = 0`.
///
/// The final two samples straddle the ground (the last one is the first
/// below it), so the crossing is found by linear interpolation along that
/// segment: `range = x_n - y_n / slope`.
///
/// Non-finite samples yield a non-finite range rather than an error; the
/// angle sweep skips such ranges.
pub fn estimate_landing_range(trajectory: &Trajectory) -> Result<f64, BallisticsError> {
    let n = trajectory.len();
    if n < 2 {
        return Err(BallisticsError::InsufficientTrajectory { samples: n });
    }

    let (x_prev, y_prev) = (trajectory.x[n - 2], trajectory.y[n - 2]);
    let (x_last, y_last) = (trajectory.x[n - 1], trajectory.y[n - 1]);

    let dx = x_last - x_prev;
    if dx == 0.0 {
        return Err(BallisticsError::VerticalLandingSegment { x: x_last });
    }

    let slope = (y_last - y_prev) / dx;
    Ok(x_last - y_last / slope)
}
