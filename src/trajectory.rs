use serde::{Deserialize, Serialize};

use crate::error::BallisticsError;
use crate::landing::estimate_landing_range;

/// Positions visited by one simulated flight.
///
/// Holds the position after every integration step, launch point excluded,
/// so sample `i` is the position at `t = (i + 1) * time_step`. The final
/// sample is the first one below ground.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub time_step: f64,
}

/// Headline numbers of one flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub range_m: f64,
    pub max_height_m: f64,
    pub max_height_x_m: f64,
    pub time_of_flight_s: f64,
    pub samples: usize,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize, time_step: f64) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
            time_step,
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.x.last()?, *self.y.last()?))
    }

    /// Highest finite sample as `(x, y)`.
    pub fn apex(&self) -> Option<(f64, f64)> {
        self.points()
            .filter(|p| p.0.is_finite() && p.1.is_finite())
            .fold(None, |best: Option<(f64, f64)>, p| match best {
                Some(b) if b.1 >= p.1 => Some(b),
                _ => Some(p),
            })
    }

    /// Landing range interpolated from the last two samples.
    pub fn landing_range(&self) -> Result<f64, BallisticsError> {
        estimate_landing_range(self)
    }

    /// Time of flight up to the interpolated ground crossing.
    ///
    /// x is close to linear in t over one step, so the fraction of the last
    /// step spent above ground is read off the x interpolation.
    pub fn time_of_flight(&self) -> Result<f64, BallisticsError> {
        let range = self.landing_range()?;
        let n = self.len();
        let (x_prev, x_last) = (self.x[n - 2], self.x[n - 1]);
        let fraction = (range - x_prev) / (x_last - x_prev);
        Ok(((n - 1) as f64 + fraction) * self.time_step)
    }

    pub fn summary(&self) -> Result<FlightSummary, BallisticsError> {
        let range_m = self.landing_range()?;
        let time_of_flight_s = self.time_of_flight()?;
        let (max_height_x_m, max_height_m) = self.apex().unwrap_or((0.0, 0.0));
        Ok(FlightSummary {
            range_m,
            max_height_m: max_height_m.max(0.0),
            max_height_x_m,
            time_of_flight_s,
            samples: self.len(),
        })
    }
}
