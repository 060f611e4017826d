//! Classical fixed-step fourth-order Runge-Kutta integration.

/// Autonomous system of ordinary differential equations: dy/dt = f(y)
pub trait OdeSystem<const N: usize> {
    /// Evaluate the right-hand side of the ODE system at state `y`.
    fn rhs(&self, y: &[f64; N]) -> [f64; N];
}

impl<F, const N: usize> OdeSystem<N> for F
where
    F: Fn(&[f64; N]) -> [f64; N],
{
    #[inline]
    fn rhs(&self, y: &[f64; N]) -> [f64; N] {
        self(y)
    }
}

#[inline]
fn nudge<const N: usize>(y: &[f64; N], k: &[f64; N], scale: f64) -> [f64; N] {
    let mut out = *y;
    for (o, ki) in out.iter_mut().zip(k) {
        *o += scale * ki;
    }
    out
}

/// Advance `y` by one step of size `h`.
///
/// k1 = f(y), k2 = f(y + h/2 k1), k3 = f(y + h/2 k2), k4 = f(y + h k3),
/// y' = y + h/6 (k1 + 2 k2 + 2 k3 + k4).
pub fn rk4_step<S, const N: usize>(system: &S, y: &[f64; N], h: f64) -> [f64; N]
where
    S: OdeSystem<N> + ?Sized,
{
    let half = h / 2.0;
    let k1 = system.rhs(y);
    let k2 = system.rhs(&nudge(y, &k1, half));
    let k3 = system.rhs(&nudge(y, &k2, half));
    let k4 = system.rhs(&nudge(y, &k3, h));

    let sixth = h / 6.0;
    let mut out = *y;
    for i in 0..N {
        out[i] += sixth * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Harmonic oscillator (2-state)
    struct HarmonicOscillator {
        omega: f64,
    }

    impl OdeSystem<2> for HarmonicOscillator {
        fn rhs(&self, y: &[f64; 2]) -> [f64; 2] {
            [y[1], -self.omega * self.omega * y[0]]
        }
    }

    fn oscillator_error(h: f64) -> f64 {
        let sys = HarmonicOscillator { omega: 1.0 };
        let steps = (1.0 / h).round() as usize;
        let mut y = [1.0, 0.0];
        for _ in 0..steps {
            y = rk4_step(&sys, &y, h);
        }
        (y[0] - 1.0_f64.cos()).abs()
    }

    #[test]
    fn test_zero_step_returns_input() {
        let sys = HarmonicOscillator { omega: 3.0 };
        let y = [0.25, -7.5];
        assert_eq!(rk4_step(&sys, &y, 0.0), y);
    }

    #[test]
    fn test_closure_rhs() {
        // dy/dt = y
        let growth = |y: &[f64; 1]| [y[0]];
        let y = rk4_step(&growth, &[1.0], 0.1);
        // Taylor series of e^h truncated after h^4
        let expected = 1.0 + 0.1 + 0.01 / 2.0 + 0.001 / 6.0 + 0.0001 / 24.0;
        assert!((y[0] - expected).abs() < 1e-15);
    }

    #[test]
    fn test_constant_acceleration_is_exact() {
        // [x, v] with dv/dt = -g
        let fall = |y: &[f64; 2]| [y[1], -9.81];
        let mut y = [0.0, 100.0];
        for _ in 0..10 {
            y = rk4_step(&fall, &y, 0.5);
        }
        let t = 5.0;
        assert!((y[0] - (100.0 * t - 0.5 * 9.81 * t * t)).abs() < 1e-9);
        assert!((y[1] - (100.0 - 9.81 * t)).abs() < 1e-12);
    }

    #[test]
    fn test_fourth_order_convergence() {
        let coarse = oscillator_error(0.1);
        let fine = oscillator_error(0.05);
        let ratio = coarse / fine;
        assert!(ratio > 10.0 && ratio < 20.0, "ratio = {ratio}");
    }
}
