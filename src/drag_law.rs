use serde::{Deserialize, Serialize};

/// Formula for the relative-speed term `s` in the drag deceleration
/// `-(B/m) k^alpha * v_rel * s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragLaw {
    /// `s = |v_rel|`, true quadratic drag.
    #[default]
    Quadratic,
    /// `s = sqrt(2 dx + 2 dy)`, the formula of the reference Paris Gun
    /// tables. Not physical: the radicand goes negative on steep descents
    /// and the result is NaN.
    Doubled,
}

impl DragLaw {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quadratic" => Some(DragLaw::Quadratic),
            "doubled" | "reference" => Some(DragLaw::Doubled),
            _ => None,
        }
    }

    /// Speed term for the wind-relative velocity `(dx, dy)`.
    #[inline]
    pub fn speed_term(self, dx: f64, dy: f64) -> f64 {
        match self {
            DragLaw::Quadratic => (dx * dx + dy * dy).sqrt(),
            DragLaw::Doubled => (dx * 2.0 + dy * 2.0).sqrt(),
        }
    }
}

impl std::fmt::Display for DragLaw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            DragLaw::Quadratic => "quadratic",
            DragLaw::Doubled => "doubled",
        })
    }
}
