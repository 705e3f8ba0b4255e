//! Edge-case catalog for complex transcendentals.
//!
//! Every component value below is paired with every other one, so each sign,
//! zero, subnormal, huge, infinite and NaN combination appears in both the
//! real and the imaginary position.

use num::Complex;

const MIN_POSITIVE_SUBNORMAL: f64 = f64::from_bits(0x0000_0000_0000_0001);

pub const COMPONENTS: [f64; 17] = [
    0.0,
    -0.0,
    1.0e-6,
    -1.0e-6,
    0.5,
    -0.5,
    2.0,
    -2.0,
    1.0e6,
    -1.0e6,
    f64::MAX,
    -f64::MAX,
    MIN_POSITIVE_SUBNORMAL,
    -MIN_POSITIVE_SUBNORMAL,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NAN,
];

pub const SIZE: usize = COMPONENTS.len() * COMPONENTS.len();

const fn cartesian() -> [Complex<f64>; SIZE] {
    let mut table = [Complex { re: 0.0, im: 0.0 }; SIZE];
    let mut i = 0;
    while i < COMPONENTS.len() {
        let mut j = 0;
        while j < COMPONENTS.len() {
            table[i * COMPONENTS.len() + j] = Complex {
                re: COMPONENTS[i],
                im: COMPONENTS[j],
            };
            j += 1;
        }
        i += 1;
    }
    table
}

pub static TESTCASES: [Complex<f64>; SIZE] = cartesian();
