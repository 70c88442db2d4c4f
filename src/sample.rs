use alloc::vec::Vec;

use crate::vector::Vector3;

/// One time step after parsing or decomposition: user acceleration and the
/// gravity vector it is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub xg: f64,
    pub yg: f64,
    pub zg: f64,
}

impl Sample {
    pub const fn new(user: Vector3, gravity: Vector3) -> Self {
        Self {
            x: user.x,
            y: user.y,
            z: user.z,
            xg: gravity.x,
            yg: gravity.y,
            zg: gravity.z,
        }
    }

    pub const fn user(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub const fn gravity(&self) -> Vector3 {
        Vector3::new(self.xg, self.yg, self.zg)
    }

    /// User acceleration projected onto the gravity vector.
    #[inline]
    pub fn gravity_projection(&self) -> f64 {
        self.user().dot(&self.gravity())
    }
}

/// Per-axis layout of a vector sequence.
///
/// `AxisSeries` and `[Vector3]` hold the same data: one is indexed by time then
/// axis, the other by axis then time. Recursive filters run along an axis, so
/// stages that filter convert with [`AxisSeries::from_vectors`] and back with
/// [`AxisSeries::to_vectors`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl AxisSeries {
    pub fn from_vectors(vectors: &[Vector3]) -> Self {
        let mut series = Self {
            x: Vec::with_capacity(vectors.len()),
            y: Vec::with_capacity(vectors.len()),
            z: Vec::with_capacity(vectors.len()),
        };
        for v in vectors {
            series.x.push(v.x);
            series.y.push(v.y);
            series.z.push(v.z);
        }
        series
    }

    /// Inverse of [`from_vectors`](Self::from_vectors).
    ///
    /// All three axes must have the same length.
    pub fn to_vectors(&self) -> Vec<Vector3> {
        debug_assert!(self.x.len() == self.y.len() && self.y.len() == self.z.len());

        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| Vector3::new(x, y, z))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Apply `f` to each axis independently, in x, y, z order.
    pub fn map<F>(&self, mut f: F) -> AxisSeries
    where
        F: FnMut(&[f64]) -> Vec<f64>,
    {
        AxisSeries {
            x: f(&self.x),
            y: f(&self.y),
            z: f(&self.z),
        }
    }

    /// Element-wise `self - other` on every axis.
    pub fn difference(&self, other: &AxisSeries) -> AxisSeries {
        fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
            a.iter().zip(b).map(|(a, b)| a - b).collect()
        }

        AxisSeries {
            x: sub(&self.x, &other.x),
            y: sub(&self.y, &other.y),
            z: sub(&self.z, &other.z),
        }
    }
}

/// Split samples into their user and gravity axis views.
pub fn samples_to_axes(samples: &[Sample]) -> (AxisSeries, AxisSeries) {
    let user: Vec<Vector3> = samples.iter().map(Sample::user).collect();
    let gravity: Vec<Vector3> = samples.iter().map(Sample::gravity).collect();
    (
        AxisSeries::from_vectors(&user),
        AxisSeries::from_vectors(&gravity),
    )
}

/// Reassemble samples from user and gravity axis views of equal length.
pub fn axes_to_samples(user: &AxisSeries, gravity: &AxisSeries) -> Vec<Sample> {
    user.to_vectors()
        .into_iter()
        .zip(gravity.to_vectors())
        .map(|(user, gravity)| Sample::new(user, gravity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectors() -> Vec<Vector3> {
        vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
        ]
    }

    #[test]
    fn axis_view_groups_by_axis() {
        let series = AxisSeries::from_vectors(&vectors());
        assert_eq!(series.x, vec![1.0, 4.0]);
        assert_eq!(series.y, vec![2.0, 5.0]);
        assert_eq!(series.z, vec![3.0, 6.0]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn axis_view_converts_back() {
        let series = AxisSeries::from_vectors(&vectors());
        assert_eq!(series.to_vectors(), vectors());
    }

    #[test]
    fn map_visits_axes_in_order() {
        let series = AxisSeries::from_vectors(&vectors());
        let mut seen = Vec::new();
        series.map(|axis| {
            seen.push(axis[0]);
            axis.to_vec()
        });
        assert_eq!(seen, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn samples_split_and_rejoin() {
        let samples = vec![
            Sample::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 9.8)),
            Sample::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.5, 9.7)),
        ];
        let (user, gravity) = samples_to_axes(&samples);
        assert_eq!(user.y, vec![0.0, 1.0]);
        assert_eq!(gravity.z, vec![9.8, 9.7]);
        assert_eq!(axes_to_samples(&user, &gravity), samples);
    }

    #[test]
    fn gravity_projection_is_dot_product() {
        let sample = Sample::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(sample.gravity_projection(), 14.0);
    }
}
