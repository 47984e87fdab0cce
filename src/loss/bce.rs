use tracing::warn;

use crate::error::{NnError, Result};
use crate::math::matrix::Matrix;

/// Binary cross-entropy over a `(1, m)` batch of sigmoid outputs.
pub struct BceLoss;

/// Activations are clamped into `[EPS, 1 - EPS]` before any log or division.
pub const EPS: f64 = 1e-12;

impl BceLoss {
    /// Scalar BCE: -sum(y·log(a) + (1-y)·log(1-a)) / m, with `m = Y.cols`.
    pub fn cost(al: &Matrix, y: &Matrix) -> Result<f64> {
        check_inputs("compute_cost", al, y)?;
        let m = y.cols as f64;

        let saturated = al.iter().filter(|&&p| p < EPS || p > 1.0 - EPS).count();
        if saturated > 0 {
            warn!(saturated, "clamping saturated activations in cost");
        }

        let total: f64 = al.iter().zip(y.iter())
            .map(|(&p, &y)| {
                let p = clamp(p);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum();
        Ok(-total / m)
    }

    /// dAL = -(Y/AL - (1-Y)/(1-AL)), the gradient seeding backpropagation.
    pub fn derivative(al: &Matrix, y: &Matrix) -> Result<Matrix> {
        check_inputs("cost derivative", al, y)?;
        al.zip_map(y, "cost derivative", |p, y| {
            let p = clamp(p);
            -(y / p - (1.0 - y) / (1.0 - p))
        })
    }
}

/// [`BceLoss::cost`] under its conventional name.
pub fn compute_cost(al: &Matrix, y: &Matrix) -> Result<f64> {
    BceLoss::cost(al, y)
}

fn clamp(p: f64) -> f64 {
    p.clamp(EPS, 1.0 - EPS)
}

fn check_inputs(op: &'static str, al: &Matrix, y: &Matrix) -> Result<()> {
    y.expect_shape(op, al.shape())?;
    if al.cols == 0 {
        return Err(NnError::ShapeMismatch { op, expected: (al.rows, 1), got: al.shape() });
    }
    if let Some(&value) = al.iter().chain(y.iter()).find(|v| !(0.0..=1.0).contains(*v)) {
        return Err(NnError::NumericDomain { op, value });
    }
    Ok(())
}
