use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;
use crate::drag_law::DragLaw;
use crate::error::BallisticsError;
use crate::wind::Wind;

/// Physical parameters of one simulation run.
///
/// Built once and shared read-only by every trajectory of a sweep, so two
/// sweeps with different parameter sets can run side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalParams {
    pub gravity: f64,               // m/s²
    pub drag_coefficient: f64,      // B, kg/m
    pub density_exponent: f64,      // alpha
    pub lapse_rate: f64,            // a, K/m
    pub sea_level_temperature: f64, // T0, K
    pub mass: f64,                  // kg
    pub muzzle_velocity: f64,       // m/s
    pub wind: Wind,
    pub drag_law: DragLaw,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        Self {
            gravity: G_ACCEL_MPS2,
            drag_coefficient: DRAG_COEFFICIENT,
            density_exponent: DENSITY_EXPONENT,
            lapse_rate: LAPSE_RATE_K_PER_M,
            sea_level_temperature: SEA_LEVEL_TEMPERATURE_K,
            mass: PROJECTILE_MASS_KG,
            muzzle_velocity: MUZZLE_VELOCITY_MPS,
            wind: Wind::calm(),
            drag_law: DragLaw::Quadratic,
        }
    }
}

impl PhysicalParams {
    /// Default parameters with drag switched off.
    pub fn vacuum() -> Self {
        Self {
            drag_coefficient: 0.0,
            ..Default::default()
        }
    }

    /// Drag constant per unit mass, `B / m`.
    pub fn drag_per_mass(&self) -> f64 {
        self.drag_coefficient / self.mass
    }

    /// Flight time of the same launch without drag (s).
    ///
    /// Drag only shortens the flight, so this bounds the number of samples
    /// a trajectory needs.
    pub fn vacuum_flight_time(&self, angle_deg: f64) -> f64 {
        let vy = self.muzzle_velocity * angle_deg.to_radians().sin();
        (2.0 * vy / self.gravity).max(0.0)
    }

    /// Check that the parameter set describes a computable model.
    pub fn validate(&self) -> Result<(), BallisticsError> {
        let finite = [
            ("gravity", self.gravity),
            ("drag_coefficient", self.drag_coefficient),
            ("density_exponent", self.density_exponent),
            ("lapse_rate", self.lapse_rate),
            ("sea_level_temperature", self.sea_level_temperature),
            ("mass", self.mass),
            ("muzzle_velocity", self.muzzle_velocity),
            ("wind.horizontal", self.wind.horizontal),
            ("wind.vertical", self.wind.vertical),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(BallisticsError::invalid(name, value, "must be finite"));
            }
        }
        if self.gravity <= 0.0 {
            return Err(BallisticsError::invalid(
                "gravity",
                self.gravity,
                "must be positive for the projectile to land",
            ));
        }
        if self.mass <= 0.0 {
            return Err(BallisticsError::invalid("mass", self.mass, "must be positive"));
        }
        if self.sea_level_temperature <= 0.0 {
            return Err(BallisticsError::invalid(
                "sea_level_temperature",
                self.sea_level_temperature,
                "must be positive",
            ));
        }
        if self.drag_coefficient < 0.0 {
            return Err(BallisticsError::invalid(
                "drag_coefficient",
                self.drag_coefficient,
                "must not be negative",
            ));
        }
        if self.muzzle_velocity < 0.0 {
            return Err(BallisticsError::invalid(
                "muzzle_velocity",
                self.muzzle_velocity,
                "must not be negative",
            ));
        }
        Ok(())
    }

    /// Parse a JSON parameter set; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, BallisticsError> {
        let params: PhysicalParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BallisticsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }
}
