//! Regression test parameters and operations

use crate::regout_dir;
use pixmat_core::IMat;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results and fail on mismatch (default)
    #[default]
    Compare,
    /// Display mode - run without failing comparisons
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current check
/// index, mode, and recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "pnmio")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Ensures the scratch output directory exists and reads the mode
    /// from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if the values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            if !self.display() {
                self.success = false;
            }
            return false;
        }

        true
    }

    /// Compare two integer matrices element-wise
    ///
    /// Returns `true` if dimensions and every element match.
    pub fn compare_imat(&mut self, expected: &IMat, actual: &IMat) -> bool {
        self.index += 1;

        let mismatch = if expected.dimensions() != actual.dimensions() {
            Some(format!(
                "dimensions {:?} vs {:?}",
                expected.dimensions(),
                actual.dimensions()
            ))
        } else {
            expected
                .data()
                .iter()
                .zip(actual.data())
                .position(|(a, b)| a != b)
                .map(|pos| {
                    let (r, c) = (pos / expected.cols(), pos % expected.cols());
                    format!(
                        "element ({}, {}): expected {}, actual {}",
                        r,
                        c,
                        expected.get_unchecked(r, c),
                        actual.get_unchecked(r, c)
                    )
                })
        };

        if let Some(detail) = mismatch {
            let msg = format!(
                "Failure in {}_reg: matrix comparison for index {}\n{}",
                self.test_name, self.index, detail
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            if !self.display() {
                self.success = false;
            }
            return false;
        }

        true
    }

    /// Finish the test, reporting the overall result
    ///
    /// Returns `false` if any comparison failed in `Compare` mode.
    pub fn cleanup(&self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} checks failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
        }
        self.success
    }
}
