use alloc::vec::Vec;

use num_traits::AsPrimitive;

use super::CoefficientSet;

/// Second-order recursive (biquad) filter over a whole series.
///
/// The filter carries no state between calls; every call starts from rest, so
/// the same instance can be applied to each axis independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biquad {
    coefficients: CoefficientSet,
}

impl Biquad {
    pub const fn new(coefficients: CoefficientSet) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coefficients
    }

    /// Filter `input`, returning a series of the same length.
    ///
    /// The first two outputs are always zero. From the third sample on:
    ///
    /// `y[i] = a0 * (b0*x[i] + b1*x[i-1] + b2*x[i-2] - a1*y[i-1] - a2*y[i-2])`
    pub fn apply<T>(&self, input: &[T]) -> Vec<f64>
    where
        T: AsPrimitive<f64>,
    {
        let [a0, a1, a2] = self.coefficients.alpha;
        let [b0, b1, b2] = self.coefficients.beta;

        let mut output = Vec::with_capacity(input.len());
        for i in 0..input.len() {
            if i < 2 {
                output.push(0.0);
                continue;
            }

            let feed_forward =
                b0 * input[i].as_() + b1 * input[i - 1].as_() + b2 * input[i - 2].as_();
            let feedback = a1 * output[i - 1] + a2 * output[i - 2];
            output.push(a0 * (feed_forward - feedback));
        }

        if input.len() < 3 {
            log::warn!("series of {} samples is too short to filter", input.len());
        }

        output
    }
}
