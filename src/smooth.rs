use alloc::vec::Vec;

use crate::filters::{Biquad, CoefficientSet};

/// Low-pass the projected series into the signal handed to step detection.
pub fn smooth(series: &[f64], smoothing_coefficients: &CoefficientSet) -> Vec<f64> {
    Biquad::new(*smoothing_coefficients).apply(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SMOOTHING;

    #[test]
    fn zero_series_stays_zero() {
        assert_eq!(smooth(&[0.0; 5], &SMOOTHING), vec![0.0; 5]);
    }

    #[test]
    fn attenuates_alternating_signal() {
        // Nyquist-rate alternation sits far above the 5 Hz stopband edge
        let input: Vec<f64> = (0..200).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let output = smooth(&input, &SMOOTHING);

        let peak = output[100..].iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        assert!(peak < 0.5, "peak {} not attenuated", peak);
    }
}
