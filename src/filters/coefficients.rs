/// Coefficients of a second-order recursive filter.
///
/// `alpha` holds the feedback side and `beta` the feed-forward side. Unlike the
/// usual normalized form, `alpha[0]` is not a divisor: it scales the whole
/// update (see [`Biquad`](super::Biquad)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    pub alpha: [f64; 3],
    pub beta: [f64; 3],
}

/// Low-pass used to pull gravity out of total acceleration (Fs = 100 Hz).
pub const GRAVITY: CoefficientSet = CoefficientSet {
    alpha: [1.0, -1.979133761292768, 0.979521463540373],
    beta: [0.000086384997973502, 0.000172769995947004, 0.000086384997973502],
};

/// Chebyshev II low-pass, Astop = 2, Fstop = 5, Fs = 100.
pub const SMOOTHING: CoefficientSet = CoefficientSet {
    alpha: [1.0, -1.80898117793047, 0.827224480562408],
    beta: [0.095465967120306, -0.172688631608676, 0.095465967120306],
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoefficientError {
    NonFinite,
    ZeroGain,
    Unstable,
}

impl core::fmt::Display for CoefficientError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoefficientError::NonFinite => write!(f, "coefficients must be finite"),
            CoefficientError::ZeroGain => write!(f, "alpha[0] must not be zero"),
            CoefficientError::Unstable => {
                write!(f, "filter poles must lie strictly inside the unit circle")
            }
        }
    }
}

impl core::error::Error for CoefficientError {}

impl CoefficientSet {
    pub const fn new(alpha: [f64; 3], beta: [f64; 3]) -> Self {
        Self { alpha, beta }
    }

    pub fn validate(&self) -> Result<(), CoefficientError> {
        if !self.alpha.iter().chain(self.beta.iter()).all(|c| c.is_finite()) {
            return Err(CoefficientError::NonFinite);
        }

        let [a0, a1, a2] = self.alpha;
        if a0 == 0.0 {
            return Err(CoefficientError::ZeroGain);
        }

        // Jury criterion on 1 + a0*a1 z^-1 + a0*a2 z^-2
        let p1 = a0 * a1;
        let p2 = a0 * a2;
        if libm::fabs(p2) >= 1.0 || libm::fabs(p1) >= 1.0 + p2 {
            return Err(CoefficientError::Unstable);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_sets_are_valid() {
        assert_eq!(GRAVITY.validate(), Ok(()));
        assert_eq!(SMOOTHING.validate(), Ok(()));
    }

    #[test]
    fn nan_is_rejected() {
        let set = CoefficientSet::new([1.0, f64::NAN, 0.5], [1.0, 0.0, 0.0]);
        assert_eq!(set.validate(), Err(CoefficientError::NonFinite));
    }

    #[test]
    fn zero_leading_alpha_is_rejected() {
        let set = CoefficientSet::new([0.0, -0.5, 0.1], [1.0, 0.0, 0.0]);
        assert_eq!(set.validate(), Err(CoefficientError::ZeroGain));
    }

    #[test]
    fn pole_on_unit_circle_is_rejected() {
        // 1 - z^-2 has poles at +-1
        let set = CoefficientSet::new([1.0, 0.0, -1.0], [1.0, 0.0, 0.0]);
        assert_eq!(set.validate(), Err(CoefficientError::Unstable));
    }

    #[test]
    fn leading_alpha_scales_poles() {
        // Stable at a0 = 1, pushed outside the unit circle at a0 = 2
        let stable = CoefficientSet::new([1.0, -1.2, 0.5], [1.0, 0.0, 0.0]);
        let scaled = CoefficientSet::new([2.0, -1.2, 0.5], [1.0, 0.0, 0.0]);
        assert_eq!(stable.validate(), Ok(()));
        assert_eq!(scaled.validate(), Err(CoefficientError::Unstable));
    }
}
