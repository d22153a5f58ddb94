//! Static book metadata
//!
//!     The canonical abbreviations are the fixed-width codes used by the verse source file
//!     (`Gen`, `Sa1`, `Jde`, ...). The table order is the canonical book order and drives
//!     [`VerseRef`](crate::data::VerseRef) ordering. Display names are what every typesetter
//!     prints in its headers.

/// `(abbreviation, display name)` in canonical order.
pub const BOOKS: &[(&str, &str)] = &[
    ("Gen", "Genesis"),
    ("Exo", "Exodus"),
    ("Lev", "Leviticus"),
    ("Num", "Numbers"),
    ("Deu", "Deuteronomy"),
    ("Jos", "Joshua"),
    ("Jdg", "Judges"),
    ("Rut", "Ruth"),
    ("Sa1", "I Samuel"),
    ("Sa2", "II Samuel"),
    ("Kg1", "I Kings"),
    ("Kg2", "II Kings"),
    ("Ch1", "I Chronicles"),
    ("Ch2", "II Chronicles"),
    ("Ezr", "Ezra"),
    ("Neh", "Nehemiah"),
    ("Est", "Esther"),
    ("Job", "Job"),
    ("Psa", "Psalms"),
    ("Pro", "Proverbs"),
    ("Ecc", "Ecclesiastes"),
    ("Sol", "Song of Solomon"),
    ("Isa", "Isaiah"),
    ("Jer", "Jeremiah"),
    ("Lam", "Lamentations"),
    ("Eze", "Ezekiel"),
    ("Dan", "Daniel"),
    ("Hos", "Hosea"),
    ("Joe", "Joel"),
    ("Amo", "Amos"),
    ("Oba", "Obadiah"),
    ("Jon", "Jonah"),
    ("Mic", "Micah"),
    ("Nah", "Nahum"),
    ("Hab", "Habakkuk"),
    ("Zep", "Zephaniah"),
    ("Hag", "Haggai"),
    ("Zac", "Zechariah"),
    ("Mal", "Malachi"),
    ("Mat", "Matthew"),
    ("Mar", "Mark"),
    ("Luk", "Luke"),
    ("Joh", "John"),
    ("Act", "Acts"),
    ("Rom", "Romans"),
    ("Co1", "I Corinthians"),
    ("Co2", "II Corinthians"),
    ("Gal", "Galatians"),
    ("Eph", "Ephesians"),
    ("Phi", "Philippians"),
    ("Col", "Colossians"),
    ("Th1", "I Thessalonians"),
    ("Th2", "II Thessalonians"),
    ("Ti1", "I Timothy"),
    ("Ti2", "II Timothy"),
    ("Tit", "Titus"),
    ("Phm", "Philemon"),
    ("Heb", "Hebrews"),
    ("Jam", "James"),
    ("Pe1", "I Peter"),
    ("Pe2", "II Peter"),
    ("Jo1", "I John"),
    ("Jo2", "II John"),
    ("Jo3", "III John"),
    ("Jde", "Jude"),
    ("Rev", "Revelation"),
];

/// Position of `code` in the canonical order
pub fn canonical_position(code: &str) -> Option<usize> {
    BOOKS.iter().position(|(abbrev, _)| *abbrev == code)
}

/// Display name registered for `code`
pub fn display_name(code: &str) -> Option<&'static str> {
    BOOKS
        .iter()
        .find(|(abbrev, _)| *abbrev == code)
        .map(|(_, name)| *name)
}
