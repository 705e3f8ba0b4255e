use num::Complex;

use super::{functions, TestContext};
use crate::cases::TESTCASES;
use crate::common::{classify, compare_complex, fmt_complex, rotate, Scalar};
use crate::test::{ComplexFunctions, Precision, TestCase, TestError};

pub fn all_tests() -> Vec<TestCase> {
    vec![edges()]
}

fn edges() -> TestCase {
    let test = |ctx: &dyn TestContext| -> Result<(), TestError> {
        let functions = functions(ctx, Precision::Double, |ctx| ctx.double())?;
        verify_identity(functions, &TESTCASES)
    };
    TestCase::new("cos_edges_double".to_string(), Box::new(test))
}

/// Checks `cos(z) == cosh(i * z)` component by component for every vector, stopping at
/// the first one that disagrees.
pub fn verify_identity<T: Scalar>(
    functions: &dyn ComplexFunctions<T>,
    vectors: &[Complex<T>],
) -> Result<(), TestError> {
    if vectors.is_empty() {
        return Err(TestError::EmptyFixture);
    }
    for (index, &input) in vectors.iter().enumerate() {
        verify_vector(functions, index, input)?;
    }
    Ok(())
}

pub(crate) fn verify_vector<T: Scalar>(
    functions: &dyn ComplexFunctions<T>,
    index: usize,
    input: Complex<T>,
) -> Result<(), TestError> {
    let output = functions.cos(input);
    let expected = functions.cosh(rotate(input));
    tracing::trace!(
        index,
        input = %fmt_complex(input),
        output = %fmt_complex(output),
        expected = %fmt_complex(expected),
        "checked vector"
    );
    compare_complex(output, expected).map_err(|(component, kind)| TestError::IdentityMismatch {
        index,
        input: fmt_complex(input),
        class: classify(input),
        component,
        kind,
        output: fmt_complex(output),
        expected: fmt_complex(expected),
    })
}
