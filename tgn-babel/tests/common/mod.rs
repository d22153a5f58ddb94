//! Shared fixtures for the integration tests

use once_cell::sync::Lazy;
use std::path::PathBuf;
use tgn_babel::{VerseDatabase, VerseRef};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Gen (all 50 chapters), Exo 1-2, Rom 1-9 and Jude, with KJV verse counts
pub static CANON: Lazy<VerseDatabase> = Lazy::new(|| {
    VerseDatabase::from_file(fixture_path("canon.dat")).expect("fixture canon to load")
});

pub fn r(book: &str, chapter: u32, verse: u32) -> VerseRef {
    VerseRef::new(book, chapter, verse)
}

/// Every verse of `book` `chapter` from `first` to `last`, inclusive
pub fn span(book: &str, chapter: u32, first: u32, last: u32) -> Vec<VerseRef> {
    (first..=last).map(|verse| r(book, chapter, verse)).collect()
}
