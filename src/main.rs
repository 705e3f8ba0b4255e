use bpaf::Bpaf;
use regex::Regex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use libm::{Libm, LibraryError};
use test::{Reference, TestCase, TestError};
use testcase::*;

mod cases;
mod common;
mod libm;
mod testcase;

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options)]
pub enum Arguments {
    List {
        /// list all available tests, execute no tests
        #[bpaf(short, long)]
        list: (),
    },
    Run {
        /// only tests matching this regex will be executed
        #[bpaf(short, long)]
        filter: Option<String>,

        /// keep executing tests after one fails instead of stopping at the first failure
        #[bpaf(short, long)]
        keep_going: bool,

        /// path to C math library under testing, for example /lib/x86_64-linux-gnu/libm.so.6, built-in num::Complex functions are tested when omitted
        #[bpaf(long)]
        libm: Option<String>,
    },
}

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("invalid test filter: {0}")]
    Filter(#[from] regex::Error),
    #[error(transparent)]
    Library(#[from] LibraryError),
}

#[derive(Debug, Default)]
pub struct Report {
    pub passed: usize,
    pub skipped: usize,
    pub failed: Vec<(String, TestError)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("complex_cos_tests=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = arguments().run();

    let code = match execute(args) {
        Ok(report) if report.is_success() => 0,
        Ok(_) => 1,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(code);
}

fn execute(args: Arguments) -> Result<Report, HarnessError> {
    let tests = tests();

    match args {
        Arguments::List { .. } => {
            for test in tests {
                println!("{}", test.name);
            }
            Ok(Report::default())
        }
        Arguments::Run {
            filter,
            keep_going,
            libm,
        } => {
            let tests = filter_tests(tests, filter.as_deref())?;

            let report = if let Some(libm) = libm {
                let libs = (Libm::new(libm)?,);
                run(tests, TestFixture { libs }, keep_going)
            } else {
                let libs = (Reference,);
                run(tests, TestFixture { libs }, keep_going)
            };

            println!(
                "{} passed, {} skipped, {} failed",
                report.passed,
                report.skipped,
                report.failed.len()
            );
            Ok(report)
        }
    }
}

fn filter_tests(tests: Vec<TestCase>, filter: Option<&str>) -> Result<Vec<TestCase>, HarnessError> {
    match filter {
        Some(filter) => {
            let re = Regex::new(filter)?;
            Ok(tests.into_iter().filter(|t| re.is_match(&t.name)).collect())
        }
        None => Ok(tests),
    }
}

fn run(tests: Vec<TestCase>, ctx: impl TestContext, keep_going: bool) -> Report {
    let mut report = Report::default();

    tracing::info!(subject = %ctx.subject(), tests = tests.len(), "starting run");

    for t in tests {
        tracing::debug!(name = %t.name, "running test");

        let result = (t.test)(&ctx);

        print!("{}: ", t.name);
        match result {
            Ok(()) => {
                println!("OK");
                report.passed += 1;
            }
            Err(error @ TestError::Unsupported { .. }) => {
                tracing::warn!(name = %t.name, "{error}");
                println!("SKIP - {error}");
                report.skipped += 1;
            }
            Err(error) => {
                println!("FAIL - {error}");
                report.failed.push((t.name, error));
                if !keep_going {
                    break;
                }
            }
        }
    }

    tracing::info!(
        passed = report.passed,
        skipped = report.skipped,
        failed = report.failed.len(),
        "run finished"
    );

    report
}
