//! pixmat-test - Regression test support for pixmat
//!
//! Provides a small harness for the integration ("regression") tests:
//! per-check indexing, value and matrix comparison with recorded
//! failures, and a scratch output directory under the workspace.
//!
//! # Usage
//!
//! ```ignore
//! use pixmat_test::{RegParams, regout_dir};
//!
//! let mut rp = RegParams::new("pnmio");
//! rp.compare_values(255.0, max as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to run without failing comparisons

mod params;

pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixmat-test is at crates/pixmat-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
