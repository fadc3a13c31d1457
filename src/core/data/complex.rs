use std::ops::{Add, Mul, Sub};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Linear interpolation from `self` towards `other`; `t == 0` yields `self`,
    /// `t == 1` yields `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            real: self.real + (other.real - self.real) * t,
            imag: self.imag + (other.imag - self.imag) * t,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.imag * other.real + self.real * other.imag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_parts() {
        assert_eq!(Complex::new(-3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude_squared_zero() {
        assert_eq!(Complex::new(0.0, 0.0).magnitude_squared(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(3.0, -5.0);

        assert_eq!(result, Complex::new(4.0, -3.0));
    }

    #[test]
    fn test_sub() {
        let result = Complex::new(1.0, 2.0) - Complex::new(3.0, -5.0);

        assert_eq!(result, Complex::new(-2.0, 7.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_mul_i_squared_is_minus_one() {
        let i = Complex::new(0.0, 1.0);

        assert_eq!(i * i, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Complex::new(-2.0, 1.0);
        let b = Complex::new(2.0, -1.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }
}
