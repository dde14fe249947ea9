// File: crates/loss-plots/src/losses/classification.rs
// Summary: Binary classification losses as functions of the edge (target * output).
// See Masnadi-Shirazi & Vasconcelos (2008, 2010) for the savage and tangent losses.

use super::sign;

/// (1 - sign(x)) / 2, so exactly 0.5 at x == 0.
pub fn zero_one(x: f64) -> f64 {
    (1.0 - sign(x)) / 2.0
}

pub fn zero_one_grad(_x: f64) -> f64 {
    0.0
}

pub fn hinge(x: f64) -> f64 {
    (1.0 - x).max(0.0)
}

/// Subgradient; the kink at x == 1 takes the right-hand value.
pub fn hinge_grad(x: f64) -> f64 {
    if x < 1.0 { -1.0 } else { 0.0 }
}

pub fn savage(x: f64) -> f64 {
    1.0 / (1.0 + x.exp()).powi(2)
}

pub fn savage_grad(x: f64) -> f64 {
    let e = x.exp();
    -2.0 * e / (1.0 + e).powi(3)
}

pub fn tangent(x: f64) -> f64 {
    (2.0 * x.atan() - 1.0).powi(2)
}

pub fn tangent_grad(x: f64) -> f64 {
    4.0 * (2.0 * x.atan() - 1.0) / (1.0 + x * x)
}

pub fn logistic(x: f64) -> f64 {
    (1.0 + (-x).exp()).ln()
}

pub fn logistic_grad(x: f64) -> f64 {
    let e = (-x).exp();
    -e / (1.0 + e)
}

pub fn exponential(x: f64) -> f64 {
    (-x).exp()
}

pub fn exponential_grad(x: f64) -> f64 {
    -(-x).exp()
}
