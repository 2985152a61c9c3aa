//! Direct-summation discrete Fourier transform
//!
//! Evaluates every output bin from the defining sum, costing exactly N²
//! complex multiply-adds. No fast transform is substituted.

use num_complex::Complex64;
use num_traits::Zero;
use std::f64::consts::PI;

/// Direction of a discrete transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Time to frequency domain, `exp(-i·2π·k·n/N)` kernel
    Forward,
    /// Frequency to time domain, `exp(+i·2π·k·n/N)` kernel scaled by `1/N`
    Inverse,
}

impl Direction {
    /// Map a `forward` flag onto a direction
    pub const fn from_forward(forward: bool) -> Self {
        if forward { Self::Forward } else { Self::Inverse }
    }

    const fn sign(self) -> f64 {
        match self {
            Self::Forward => -1.0,
            Self::Inverse => 1.0,
        }
    }
}

/// Transform a complex sequence in the given direction
///
/// Computes `X[k] = Σ x[n]·exp(i·sign·2π·k·n/N)` for every `k`, dividing by
/// `N` when inverting. The angle is evaluated as `(2π/N)·k·n` without reducing
/// `k·n` modulo `N`, so precision degrades slowly for very long inputs.
/// An empty input yields an empty output.
pub fn transform(input: &[Complex64], direction: Direction) -> Vec<Complex64> {
    let len = input.len();
    if len == 0 {
        return Vec::new();
    }

    let two_pi_over_n = 2.0 * PI / len as f64;
    let sign = direction.sign();
    let scale = len as f64;

    (0..len)
        .map(|k| {
            let mut sum = Complex64::zero();
            for (n, &sample) in input.iter().enumerate() {
                let angle = two_pi_over_n * k as f64 * n as f64;
                let twiddle = Complex64::new(angle.cos(), sign * angle.sin());
                sum += sample * twiddle;
            }

            match direction {
                Direction::Forward => sum,
                Direction::Inverse => sum / scale,
            }
        })
        .collect()
}

/// Forward transform shorthand
pub fn forward(input: &[Complex64]) -> Vec<Complex64> {
    transform(input, Direction::Forward)
}

/// Inverse transform shorthand
pub fn inverse(input: &[Complex64]) -> Vec<Complex64> {
    transform(input, Direction::Inverse)
}
