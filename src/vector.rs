use core::ops::{Add, Sub};

/// A single triaxial reading, in whatever unit the input used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<[f64; 3]> for Vector3 {
    fn from(values: [f64; 3]) -> Self {
        Self {
            x: values[0],
            y: values[1],
            z: values[2],
        }
    }
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Dot product, summed in x, y, z order.
    #[inline]
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector3, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_orthogonal_vectors_is_zero() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn dot_with_itself_is_squared_length() {
        let a = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(a.dot(&a), 14.0);
    }

    #[test]
    fn sub_then_add_restores_value() {
        let total = Vector3::new(0.25, -9.5, 3.0);
        let gravity = Vector3::new(0.125, -9.75, 2.5);
        let user = total - gravity;
        assert!((user + gravity).approx_eq(&total, 1e-12));
    }
}
