use crate::atmosphere::{density_factor, density_ratio};
use crate::params::PhysicalParams;
use crate::rk4::OdeSystem;

/// Projectile state `[x, y, vx, vy]` in m and m/s.
pub type State = [f64; 4];

/// Initial state for a launch from the origin at `angle_deg` above horizontal.
pub fn launch_state(muzzle_velocity: f64, angle_deg: f64) -> State {
    let angle_rad = angle_deg.to_radians();
    [
        0.0,
        0.0,
        muzzle_velocity * angle_rad.cos(),
        muzzle_velocity * angle_rad.sin(),
    ]
}

/// Equations of motion of a point-mass projectile in an adiabatic
/// atmosphere with constant wind.
///
/// ```text
/// dx/dt  = vx
/// dy/dt  = vy
/// dvx/dt = -(B/m) k^alpha (vx - wx) s
/// dvy/dt = -(B/m) k^alpha (vy - wy) s - g
/// ```
///
/// with `k = 1 - a y / T0` and `s` given by the configured [`DragLaw`].
/// Above the modeled atmosphere (`k <= 0`) drag vanishes.
///
/// [`DragLaw`]: crate::drag_law::DragLaw
#[derive(Debug, Clone, Copy)]
pub struct ProjectileDynamics<'a> {
    params: &'a PhysicalParams,
    drag_per_mass: f64,
}

impl<'a> ProjectileDynamics<'a> {
    pub fn new(params: &'a PhysicalParams) -> Self {
        Self {
            params,
            drag_per_mass: params.drag_per_mass(),
        }
    }

    /// Accelerations `(ax, ay)` at altitude `y` with velocity `(vx, vy)`.
    #[inline]
    pub fn acceleration(&self, y: f64, vx: f64, vy: f64) -> (f64, f64) {
        let p = self.params;
        let k = density_factor(y, p.lapse_rate, p.sea_level_temperature);
        let rel = p.wind.relative_velocity(vx, vy);
        let s = p.drag_law.speed_term(rel.x, rel.y);

        match density_ratio(k, p.density_exponent) {
            Some(ratio) => {
                let scale = -self.drag_per_mass * ratio;
                (scale * rel.x * s, scale * rel.y * s - p.gravity)
            }
            None => (0.0, -p.gravity),
        }
    }
}

impl OdeSystem<4> for ProjectileDynamics<'_> {
    #[inline]
    fn rhs(&self, w: &State) -> State {
        let (ax, ay) = self.acceleration(w[1], w[2], w[3]);
        [w[2], w[3], ax, ay]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag_law::DragLaw;
    use crate::wind::Wind;

    #[test]
    fn test_position_derivative_is_velocity() {
        let params = PhysicalParams::default();
        let dynamics = ProjectileDynamics::new(&params);
        let d = dynamics.rhs(&[120.0, 340.0, 812.5, -33.0]);
        assert_eq!(d[0], 812.5);
        assert_eq!(d[1], -33.0);
    }

    // Pinned outputs for the two speed formulas. A change to either law
    // shows up here first.
    #[test]
    fn test_quadratic_law_pinned_output() {
        let params = PhysicalParams::default();
        let d = ProjectileDynamics::new(&params).rhs(&[0.0, 0.0, 3.0, 4.0]);
        assert!((d[2] - (-6.0e-4)).abs() < 1e-15);
        assert!((d[3] - (-9.8108)).abs() < 1e-12);
    }

    #[test]
    fn test_doubled_law_pinned_output() {
        let params = PhysicalParams {
            drag_law: DragLaw::Doubled,
            ..Default::default()
        };
        let d = ProjectileDynamics::new(&params).rhs(&[0.0, 0.0, 3.0, 4.0]);
        assert!((d[2] - (-4.4899888641287305e-4)).abs() < 1e-15);
        assert!((d[3] - (-9.810598665181884)).abs() < 1e-12);
    }

    #[test]
    fn test_density_scaling_at_altitude() {
        let params = PhysicalParams::default();
        let d = ProjectileDynamics::new(&params).rhs(&[0.0, 10000.0, 300.0, -400.0]);
        assert!((d[2] - (-3.1654261704370947)).abs() < 1e-9);
        assert!((d[3] - (-5.589431772750541)).abs() < 1e-9);
    }

    #[test]
    fn test_vacuum_fallback_above_atmosphere() {
        let params = PhysicalParams::default();
        let d = ProjectileDynamics::new(&params).rhs(&[1000.0, 50000.0, 900.0, 200.0]);
        assert_eq!(d, [900.0, 200.0, 0.0, -9.81]);
    }

    #[test]
    fn test_no_drag_is_pure_gravity() {
        let params = PhysicalParams::vacuum();
        let d = ProjectileDynamics::new(&params).rhs(&[0.0, 100.0, 1200.0, 800.0]);
        assert_eq!(d[2], 0.0);
        assert_eq!(d[3], -9.81);
    }

    #[test]
    fn test_drag_opposes_motion() {
        let params = PhysicalParams::default();
        let (ax, ay) = ProjectileDynamics::new(&params).acceleration(500.0, 700.0, 300.0);
        assert!(ax < 0.0);
        assert!(ay < -params.gravity);
    }

    #[test]
    fn test_matching_wind_removes_drag() {
        let params = PhysicalParams {
            wind: Wind::new(50.0, 0.0),
            ..Default::default()
        };
        let (ax, ay) = ProjectileDynamics::new(&params).acceleration(0.0, 50.0, 0.0);
        assert_eq!(ax, 0.0);
        assert_eq!(ay, -params.gravity);
    }

    #[test]
    fn test_doubled_law_propagates_nan_on_steep_descent() {
        let params = PhysicalParams {
            drag_law: DragLaw::Doubled,
            ..Default::default()
        };
        let d = ProjectileDynamics::new(&params).rhs(&[0.0, 1000.0, 100.0, -400.0]);
        assert!(d[2].is_nan());
        assert!(d[3].is_nan());
    }

    #[test]
    fn test_launch_state() {
        let w = launch_state(1640.0, 90.0);
        assert_eq!(w[0], 0.0);
        assert_eq!(w[1], 0.0);
        assert!(w[2].abs() < 1e-9);
        assert_eq!(w[3], 1640.0);

        let w = launch_state(100.0, 0.0);
        assert_eq!(w, [0.0, 0.0, 100.0, 0.0]);
    }
}
