use half::f16;

use crate::{
    libm::Libm,
    test::{ComplexFunctions, Precision, Reference, TestCase, TestError},
};

mod edges;
mod origin;
mod random;

pub trait TestContext {
    /// Name of the implementation under test, used in diagnostics.
    fn subject(&self) -> String;
    fn half(&self) -> Option<&dyn ComplexFunctions<f16>>;
    fn single(&self) -> Option<&dyn ComplexFunctions<f32>>;
    fn double(&self) -> Option<&dyn ComplexFunctions<f64>>;
    fn extended(&self) -> Option<&dyn ComplexFunctions<f64>>;
}

pub struct TestFixture<L> {
    pub libs: L,
}

impl TestContext for TestFixture<(Reference,)> {
    fn subject(&self) -> String {
        "num::Complex".to_string()
    }

    fn half(&self) -> Option<&dyn ComplexFunctions<f16>> {
        Some(&self.libs.0)
    }

    fn single(&self) -> Option<&dyn ComplexFunctions<f32>> {
        Some(&self.libs.0)
    }

    fn double(&self) -> Option<&dyn ComplexFunctions<f64>> {
        Some(&self.libs.0)
    }

    // no type wider than `f64`
    fn extended(&self) -> Option<&dyn ComplexFunctions<f64>> {
        None
    }
}

impl TestContext for TestFixture<(Libm,)> {
    fn subject(&self) -> String {
        self.libs.0.path().to_string()
    }

    fn half(&self) -> Option<&dyn ComplexFunctions<f16>> {
        None
    }

    fn single(&self) -> Option<&dyn ComplexFunctions<f32>> {
        Some(&self.libs.0)
    }

    fn double(&self) -> Option<&dyn ComplexFunctions<f64>> {
        Some(&self.libs.0)
    }

    // `long double _Complex` has no Rust counterpart
    fn extended(&self) -> Option<&dyn ComplexFunctions<f64>> {
        None
    }
}

/// Picks the functions of one precision out of a context.
pub type Select<T> = for<'a> fn(&'a dyn TestContext) -> Option<&'a dyn ComplexFunctions<T>>;

pub(crate) fn functions<'a, T>(
    ctx: &'a dyn TestContext,
    precision: Precision,
    select: Select<T>,
) -> Result<&'a dyn ComplexFunctions<T>, TestError> {
    select(ctx).ok_or_else(|| TestError::Unsupported {
        precision,
        subject: ctx.subject(),
    })
}

pub fn tests() -> Vec<TestCase> {
    let mut tests = vec![];
    tests.extend(origin::all_tests());
    tests.extend(edges::all_tests());
    tests.extend(random::all_tests());
    tests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_checks_run_before_edges() {
        let names: Vec<_> = tests().into_iter().map(|t| t.name).collect();
        let edges = names
            .iter()
            .position(|name| name == "cos_edges_double")
            .unwrap();
        let origins: Vec<_> = names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.starts_with("cos_origin_"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(origins.len(), 4);
        assert!(origins.iter().all(|&i| i < edges));
        assert_eq!(names.last().map(String::as_str), Some("cos_identity_random_double"));
    }

    #[test]
    fn reference_has_no_extended_precision() {
        let ctx = TestFixture { libs: (Reference,) };
        assert!(ctx.extended().is_none());
        assert!(ctx.half().is_some());
        assert!(ctx.double().is_some());
        assert!(matches!(
            functions(&ctx, Precision::Extended, |ctx| ctx.extended()),
            Err(TestError::Unsupported {
                precision: Precision::Extended,
                ..
            })
        ));
    }
}
