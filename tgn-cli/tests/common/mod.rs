#![allow(dead_code)]

use std::path::PathBuf;

/// The tgn-babel fixture canon (Gen, Exo 1-2, Rom 1-9, Jude)
pub fn canon() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("tgn-babel")
        .join("tests")
        .join("fixtures")
        .join("canon.dat")
}
