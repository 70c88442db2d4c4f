use alloc::vec::Vec;

use crate::sample::Sample;

/// Acceleration along the gravity axis for every sample.
///
/// `dot = x*xg + y*yg + z*zg`, one value per sample, in sample order.
pub fn project(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(Sample::gravity_projection).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector3;

    #[test]
    fn orthogonal_vectors_project_to_zero() {
        let sample = Sample::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(project(&[sample]), vec![0.0]);
    }

    #[test]
    fn keeps_sample_order() {
        let down = Vector3::new(0.0, 0.0, 1.0);
        let samples = [
            Sample::new(Vector3::new(0.0, 0.0, 1.0), down),
            Sample::new(Vector3::new(0.0, 0.0, -2.0), down),
            Sample::new(Vector3::new(5.0, 0.0, 3.0), down),
        ];
        assert_eq!(project(&samples), vec![1.0, -2.0, 3.0]);
    }

    #[test]
    fn empty_input_gives_empty_series() {
        assert!(project(&[]).is_empty());
    }
}
