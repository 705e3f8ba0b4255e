use libloading::Library;
use num::Complex;
use thiserror::Error;

use crate::test::ComplexFunctions;

// C99 `float _Complex` and `double _Complex` have the layout of two adjacent components,
// which is what `Complex<T>` (`#[repr(C)]`) gives us.
static_assertions::assert_eq_size!(Complex<f32>, [f32; 2]);
static_assertions::assert_eq_size!(Complex<f64>, [f64; 2]);
static_assertions::assert_eq_align!(Complex<f64>, f64);

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("could not load {path}: {source}")]
    Load {
        path: String,
        source: libloading::Error,
    },
    #[error("symbol {name} not found: {source}")]
    Symbol {
        name: &'static str,
        source: libloading::Error,
    },
}

type ComplexF32Fn = unsafe extern "C" fn(Complex<f32>) -> Complex<f32>;
type ComplexF64Fn = unsafe extern "C" fn(Complex<f64>) -> Complex<f64>;

/// A C math library loaded at runtime, for example libm.so.6 or ucrtbase.dll.
pub struct Libm {
    path: String,
    ccosf: ComplexF32Fn,
    ccoshf: ComplexF32Fn,
    ccos: ComplexF64Fn,
    ccosh: ComplexF64Fn,
    // Keeps the function pointers above valid.
    _library: Library,
}

macro_rules! libm_symbols {
    ($library:ident: $($fn_name:ident: $fn_type:ty),* $(,)*) => {
        $(
            let $fn_name: $fn_type = unsafe {
                *$library
                    .get::<$fn_type>(concat!(stringify!($fn_name), "\0").as_bytes())
                    .map_err(|source| LibraryError::Symbol {
                        name: stringify!($fn_name),
                        source,
                    })?
            };
        )*
    };
}

impl Libm {
    pub fn new(path: String) -> Result<Self, LibraryError> {
        let library = unsafe { Library::new(&path) }.map_err(|source| LibraryError::Load {
            path: path.clone(),
            source,
        })?;
        libm_symbols! {
            library:
            ccosf: ComplexF32Fn,
            ccoshf: ComplexF32Fn,
            ccos: ComplexF64Fn,
            ccosh: ComplexF64Fn,
        }
        tracing::debug!(%path, "resolved complex cosine symbols");
        Ok(Self {
            path,
            ccosf,
            ccoshf,
            ccos,
            ccosh,
            _library: library,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl ComplexFunctions<f32> for Libm {
    fn cos(&self, z: Complex<f32>) -> Complex<f32> {
        unsafe { (self.ccosf)(z) }
    }

    fn cosh(&self, z: Complex<f32>) -> Complex<f32> {
        unsafe { (self.ccoshf)(z) }
    }
}

impl ComplexFunctions<f64> for Libm {
    fn cos(&self, z: Complex<f64>) -> Complex<f64> {
        unsafe { (self.ccos)(z) }
    }

    fn cosh(&self, z: Complex<f64>) -> Complex<f64> {
        unsafe { (self.ccosh)(z) }
    }
}
