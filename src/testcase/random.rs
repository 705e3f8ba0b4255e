use num::Complex;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::edges::verify_identity;
use super::{functions, TestContext};
use crate::test::{Precision, TestCase, TestError};

const SEED: u64 = 0x761194f3027874ef;
pub const RANDOM_SAMPLES: usize = 4096;

pub fn all_tests() -> Vec<TestCase> {
    vec![random()]
}

fn random() -> TestCase {
    let test = |ctx: &dyn TestContext| -> Result<(), TestError> {
        let functions = functions(ctx, Precision::Double, |ctx| ctx.double())?;
        verify_identity(functions, &generate(SEED, RANDOM_SAMPLES))
    };
    TestCase::new("cos_identity_random_double".to_string(), Box::new(test))
}

/// Finite vectors drawn from uniformly random bit patterns, so every exponent is equally likely.
pub fn generate(seed: u64, count: usize) -> Vec<Complex<f64>> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Complex::new(finite(&mut rng), finite(&mut rng)))
        .collect()
}

fn finite<R: Rng>(rng: &mut R) -> f64 {
    loop {
        let value = f64::from_bits(rng.gen());
        if value.is_finite() {
            return value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::Reference;
    use crate::testcase::TestFixture;

    #[test]
    fn generation_is_reproducible() {
        let first = generate(SEED, 64);
        let second = generate(SEED, 64);
        assert_eq!(first.len(), 64);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.re.to_bits(), b.re.to_bits());
            assert_eq!(a.im.to_bits(), b.im.to_bits());
        }
    }

    #[test]
    fn generated_vectors_are_finite() {
        assert!(generate(1, 1024)
            .iter()
            .all(|z| z.re.is_finite() && z.im.is_finite()));
    }

    #[test]
    fn reference_passes_random_sweep() {
        let ctx = TestFixture { libs: (Reference,) };
        for t in all_tests() {
            assert_eq!((t.test)(&ctx), Ok(()));
        }
    }
}
