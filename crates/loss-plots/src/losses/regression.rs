// File: crates/loss-plots/src/losses/regression.rs
// Summary: Regression losses as functions of the diff (target - output).

use super::sign;

pub fn absolute(x: f64) -> f64 {
    x.abs()
}

pub fn absolute_grad(x: f64) -> f64 {
    sign(x)
}

pub fn squared(x: f64) -> f64 {
    x * x / 2.0
}

pub fn squared_grad(x: f64) -> f64 {
    x
}

/// Robust to outliers: grows only logarithmically.
pub fn cauchy(x: f64) -> f64 {
    (1.0 + x * x).ln() / 2.0
}

pub fn cauchy_grad(x: f64) -> f64 {
    x / (1.0 + x * x)
}
