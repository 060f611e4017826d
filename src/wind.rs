use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Constant wind acting on the projectile for a whole run.
///
/// Components are in the launch plane: `horizontal` along the firing
/// direction, `vertical` positive upwards, both in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Wind {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Wind { horizontal, vertical }
    }

    /// Still air.
    pub fn calm() -> Self {
        Wind::default()
    }

    pub fn vector(&self) -> Vector2<f64> {
        Vector2::new(self.horizontal, self.vertical)
    }

    /// Projectile velocity relative to the air mass.
    #[inline]
    pub fn relative_velocity(&self, vx: f64, vy: f64) -> Vector2<f64> {
        Vector2::new(vx, vy) - self.vector()
    }

    pub fn is_calm(&self) -> bool {
        self.horizontal == 0.0 && self.vertical == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calm_wind_leaves_velocity_unchanged() {
        let wind = Wind::calm();
        assert!(wind.is_calm());
        assert_eq!(wind.relative_velocity(300.0, -20.0), Vector2::new(300.0, -20.0));
    }

    #[test]
    fn test_tailwind_reduces_relative_speed() {
        let wind = Wind::new(10.0, 0.0);
        let rel = wind.relative_velocity(100.0, 0.0);
        assert_eq!(rel.x, 90.0);
        assert_eq!(rel.y, 0.0);
        assert!(!wind.is_calm());
    }

    #[test]
    fn test_updraft_subtracts_from_vertical() {
        let wind = Wind::new(0.0, 5.0);
        let rel = wind.relative_velocity(0.0, -50.0);
        assert_eq!(rel.y, -55.0);
    }
}
