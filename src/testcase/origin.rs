use half::f16;
use num::{Complex, One, Zero};

use super::{functions, Select, TestContext};
use crate::common::{fmt_complex, Scalar};
use crate::test::{ComplexFunctions, Precision, TestCase, TestError};

pub fn all_tests() -> Vec<TestCase> {
    vec![
        origin::<f32>(Precision::Single, |ctx| ctx.single()),
        origin::<f64>(Precision::Double, |ctx| ctx.double()),
        origin::<f64>(Precision::Extended, |ctx| ctx.extended()),
        origin::<f16>(Precision::Half, |ctx| ctx.half()),
    ]
}

fn origin<T: Scalar>(precision: Precision, select: Select<T>) -> TestCase {
    let test = move |ctx: &dyn TestContext| -> Result<(), TestError> {
        let functions = functions(ctx, precision, select)?;
        verify_origin(functions)
    };
    TestCase::new(format!("cos_origin_{}", precision), Box::new(test))
}

/// `cos(0 + 0i)` must be exactly `1 + 0i`; the sign of the zero is not checked.
pub fn verify_origin<T: Scalar>(functions: &dyn ComplexFunctions<T>) -> Result<(), TestError> {
    let input = Complex::<T>::zero();
    let expected = Complex::<T>::one();
    let output = functions.cos(input);
    tracing::debug!(output = %fmt_complex(output), "cos at origin");
    if output == expected {
        Ok(())
    } else {
        Err(TestError::ValueMismatch {
            input: fmt_complex(input),
            output: fmt_complex(output),
            expected: fmt_complex(expected),
        })
    }
}
