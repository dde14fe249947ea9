// File: crates/loss-plots/src/losses/mod.rs
// Summary: The nine plotted losses, their derivatives, attributes and line styles.

pub mod classification;
pub mod regression;

use chart_core::{LineColor, LineStyle};

/// Three-valued sign: -1, 0 or +1. Both zeros map to 0.
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Functions of the edge, `target * output`.
    Classification,
    /// Functions of the diff, `target - output`.
    Regression,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Loss {
    ZeroOne,
    Hinge,
    Savage,
    Tangent,
    Logistic,
    Exponential,
    Absolute,
    Squared,
    Cauchy,
}

impl Loss {
    /// Classification losses in paint (and legend) order.
    pub const CLASSIFICATION: [Loss; 6] = [
        Loss::ZeroOne,
        Loss::Hinge,
        Loss::Savage,
        Loss::Tangent,
        Loss::Logistic,
        Loss::Exponential,
    ];

    /// Regression losses in paint (and legend) order.
    pub const REGRESSION: [Loss; 3] = [Loss::Absolute, Loss::Squared, Loss::Cauchy];

    pub fn label(self) -> &'static str {
        match self {
            Loss::ZeroOne => "0-1 loss",
            Loss::Hinge => "hinge",
            Loss::Savage => "savage",
            Loss::Tangent => "tangent",
            Loss::Logistic => "logistic",
            Loss::Exponential => "exponential",
            Loss::Absolute => "absolute",
            Loss::Squared => "squared",
            Loss::Cauchy => "cauchy",
        }
    }

    pub fn family(self) -> Family {
        match self {
            Loss::Absolute | Loss::Squared | Loss::Cauchy => Family::Regression,
            _ => Family::Classification,
        }
    }

    pub fn value(self, x: f64) -> f64 {
        use self::classification as c;
        use self::regression as r;
        match self {
            Loss::ZeroOne => c::zero_one(x),
            Loss::Hinge => c::hinge(x),
            Loss::Savage => c::savage(x),
            Loss::Tangent => c::tangent(x),
            Loss::Logistic => c::logistic(x),
            Loss::Exponential => c::exponential(x),
            Loss::Absolute => r::absolute(x),
            Loss::Squared => r::squared(x),
            Loss::Cauchy => r::cauchy(x),
        }
    }

    /// Derivative with respect to the edge (or diff); a subgradient at kinks.
    pub fn derivative(self, x: f64) -> f64 {
        use self::classification as c;
        use self::regression as r;
        match self {
            Loss::ZeroOne => c::zero_one_grad(x),
            Loss::Hinge => c::hinge_grad(x),
            Loss::Savage => c::savage_grad(x),
            Loss::Tangent => c::tangent_grad(x),
            Loss::Logistic => c::logistic_grad(x),
            Loss::Exponential => c::exponential_grad(x),
            Loss::Absolute => r::absolute_grad(x),
            Loss::Squared => r::squared_grad(x),
            Loss::Cauchy => r::cauchy_grad(x),
        }
    }

    pub fn is_convex(self) -> bool {
        matches!(
            self,
            Loss::Hinge | Loss::Logistic | Loss::Exponential | Loss::Absolute | Loss::Squared
        )
    }

    pub fn is_smooth(self) -> bool {
        !matches!(self, Loss::ZeroOne | Loss::Hinge | Loss::Absolute)
    }

    pub fn color(self) -> LineColor {
        match self {
            Loss::ZeroOne => LineColor::Black,
            Loss::Hinge | Loss::Absolute => LineColor::Red,
            Loss::Savage => LineColor::Magenta,
            Loss::Tangent => LineColor::Cyan,
            Loss::Logistic | Loss::Squared => LineColor::Green,
            Loss::Exponential | Loss::Cauchy => LineColor::Blue,
        }
    }

    pub fn style(self) -> LineStyle {
        match self {
            Loss::ZeroOne => LineStyle::Dashed,
            _ => LineStyle::Solid,
        }
    }

    pub fn width(self) -> f32 {
        2.0
    }
}
