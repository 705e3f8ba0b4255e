use num::{Complex, Float};
use std::fmt::{self, Debug, Display};

/// Floating-point component type of a complex value under test.
pub trait Scalar: Float + Debug + Display + 'static {
    /// Raw IEEE-754 encoding, widened to 64 bits.
    fn bits(self) -> u64;
}

macro_rules! scalar_impl {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                fn bits(self) -> u64 {
                    self.to_bits() as u64
                }
            }
        )+
    };
}

scalar_impl! {
    half::f16,
    f32,
    f64
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Component {
    Real,
    Imaginary,
}

impl Component {
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Real => "real",
            Component::Imaginary => "imaginary",
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mismatch {
    /// Exactly one of the two values is NaN.
    NotANumber,
    Value,
    /// Equal values, different sign bit; only reachable for zeros.
    SignOfZero,
}

impl Mismatch {
    pub fn as_str(self) -> &'static str {
        match self {
            Mismatch::NotANumber => "NaN mismatch",
            Mismatch::Value => "value mismatch",
            Mismatch::SignOfZero => "sign of zero mismatch",
        }
    }
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a complex input, used to describe which corner a vector exercises.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Classification {
    Zero,
    NonZero,
    Inf,
    NaN,
    NonZeroNaN,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Zero => "zero",
            Classification::NonZero => "non-zero",
            Classification::Inf => "infinite",
            Classification::NaN => "NaN",
            Classification::NonZeroNaN => "non-zero NaN",
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify<T: Scalar>(z: Complex<T>) -> Classification {
    if z.re == T::zero() && z.im == T::zero() {
        return Classification::Zero;
    }
    if z.re.is_infinite() || z.im.is_infinite() {
        return Classification::Inf;
    }
    if z.re.is_nan() && z.im.is_nan() {
        return Classification::NaN;
    }
    if z.re.is_nan() {
        return if z.im == T::zero() {
            Classification::NaN
        } else {
            Classification::NonZeroNaN
        };
    }
    if z.im.is_nan() {
        return if z.re == T::zero() {
            Classification::NaN
        } else {
            Classification::NonZeroNaN
        };
    }
    Classification::NonZero
}

/// Multiplication by the imaginary unit: `a + bi` becomes `-b + ai`.
pub fn rotate<T: Scalar>(z: Complex<T>) -> Complex<T> {
    Complex::new(-z.im, z.re)
}

/// NaN-aware, sign-aware equality of a single component.
pub fn compare_component<T: Scalar>(output: T, expected: T) -> Result<(), Mismatch> {
    if output.is_nan() || expected.is_nan() {
        return if output.is_nan() && expected.is_nan() {
            Ok(())
        } else {
            Err(Mismatch::NotANumber)
        };
    }
    if output != expected {
        return Err(Mismatch::Value);
    }
    if output.is_sign_negative() != expected.is_sign_negative() {
        return Err(Mismatch::SignOfZero);
    }
    Ok(())
}

/// Applies [`compare_component`] to the real part, then to the imaginary part.
pub fn compare_complex<T: Scalar>(
    output: Complex<T>,
    expected: Complex<T>,
) -> Result<(), (Component, Mismatch)> {
    compare_component(output.re, expected.re).map_err(|kind| (Component::Real, kind))?;
    compare_component(output.im, expected.im).map_err(|kind| (Component::Imaginary, kind))
}

pub fn fmt_complex<T: Scalar>(z: Complex<T>) -> String {
    format!(
        "({}, {}) [{:#x}, {:#x}]",
        z.re,
        z.im,
        z.re.bits(),
        z.im.bits()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rotate_multiplies_by_i() {
        let z = rotate(Complex::new(1.0f64, -0.0));
        assert_eq!(z.re.to_bits(), 0.0f64.to_bits());
        assert_eq!(z.im, 1.0);

        let z = rotate(Complex::new(f64::INFINITY, f64::INFINITY));
        assert_eq!(z.re, f64::NEG_INFINITY);
        assert_eq!(z.im, f64::INFINITY);
    }

    #[test]
    fn signed_zeros_are_distinguished() {
        assert_eq!(compare_component(0.0f64, -0.0), Err(Mismatch::SignOfZero));
        assert_eq!(compare_component(-0.0f32, 0.0), Err(Mismatch::SignOfZero));
        assert_eq!(compare_component(-0.0f64, -0.0), Ok(()));
    }

    #[test]
    fn nan_only_needs_nan() {
        assert_eq!(compare_component(f64::NAN, -f64::NAN), Ok(()));
        assert_eq!(compare_component(f64::NAN, 1.0), Err(Mismatch::NotANumber));
        assert_eq!(compare_component(1.0, f64::NAN), Err(Mismatch::NotANumber));
    }

    #[test]
    fn different_values_mismatch() {
        assert_eq!(compare_component(1.0f64, 2.0), Err(Mismatch::Value));
        assert_eq!(
            compare_component(f64::INFINITY, f64::NEG_INFINITY),
            Err(Mismatch::Value)
        );
    }

    #[test]
    fn real_part_is_reported_first() {
        let output = Complex::new(f64::NAN, -0.0);
        let expected = Complex::new(1.0, 0.0);
        assert_eq!(
            compare_complex(output, expected),
            Err((Component::Real, Mismatch::NotANumber))
        );
        let output = Complex::new(1.0, -0.0);
        assert_eq!(
            compare_complex(output, expected),
            Err((Component::Imaginary, Mismatch::SignOfZero))
        );
    }

    #[test]
    fn classify_corners() {
        assert_eq!(classify(Complex::new(-0.0f64, 0.0)), Classification::Zero);
        assert_eq!(classify(Complex::new(2.0f64, 0.0)), Classification::NonZero);
        assert_eq!(classify(Complex::new(f64::NAN, f64::INFINITY)), Classification::Inf);
        assert_eq!(classify(Complex::new(f64::NAN, f64::NAN)), Classification::NaN);
        assert_eq!(classify(Complex::new(f64::NAN, -0.0)), Classification::NaN);
        assert_eq!(classify(Complex::new(0.5f64, f64::NAN)), Classification::NonZeroNaN);
    }

    #[test]
    fn half_precision_bits() {
        assert_eq!(half::f16::NEG_ZERO.bits(), 0x8000);
        assert_eq!(1.0f32.bits(), 0x3f80_0000);
    }

    proptest! {
        #[test]
        fn comparison_is_reflexive_on_bits(re in any::<u64>(), im in any::<u64>()) {
            let z = Complex::new(f64::from_bits(re), f64::from_bits(im));
            prop_assert_eq!(compare_complex(z, z), Ok(()));
        }

        #[test]
        fn comparison_is_symmetric(a in any::<u32>(), b in any::<u32>()) {
            let (a, b) = (f32::from_bits(a), f32::from_bits(b));
            prop_assert_eq!(compare_component(a, b).is_ok(), compare_component(b, a).is_ok());
        }
    }
}
