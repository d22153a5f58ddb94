//! Scripture references in, typeset verses out
//!
//!     This crate turns human-written reference expressions ("Gen 1:1-10; Rom 8:26-39") into
//!     ordered verse sequences checked against the boundaries of a loaded canon, and streams those
//!     verses through interchangeable typesetting backends (plain text, HTML, TeX, SILE).
//!
//!     This is a pure lib, that is, it powers tgn-cli but is shell agnostic: no code here prints
//!     to stdout/stderr or reads env vars. The only file access is the explicit
//!     [`VerseDatabase::from_file`] helper, which takes its path from the caller.
//!
//! Architecture
//!
//!     Three pieces carry all the logic, leaves first:
//!
//!     - VerseDatabase (./data.rs): loads the verse source and derives per-chapter verse limits.
//!       It is the boundary oracle for everything else: validity, `next()` and contiguity.
//!     - Reference parsing (./refs): a logos lexer, a syntax pass producing items with optional
//!       book/chapter, and a resolution pass that threads a `ParseContext` through the items and
//!       expands ranges by walking `next()`.
//!     - The typesetter contract (./typesetter.rs): the lifecycle and the per-verse decisions
//!       (discontinuity, chapter header, paragraph break) shared by every format. Backends only
//!       decide which tokens to write.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── books.rs                # Static book metadata (canonical order, display names)
//!     ├── data.rs                 # VerseRef, VerseDatabase
//!     ├── refs
//!     │   ├── lexer.rs            # Token definitions
//!     │   └── mod.rs              # Syntax, context resolution, range expansion
//!     ├── typesetter.rs           # Backend trait, Typesetter lifecycle, RenderCursor
//!     ├── registry.rs             # TypesetterRegistry for discovery and selection
//!     ├── formats
//!     │   ├── common              # Option parsing and escaping tables
//!     │   └── <format>/mod.rs     # One backend per format
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── fixtures/canon.dat      # Gen, Exo 1-2, Rom 1-9 and Jude with real verse counts
//!     ├── common                  # Shared database loaded once
//!     ├── refs                    # Expression expansion against the fixture canon
//!     └── typesetters             # Rendered output per backend (insta snapshots)
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Usage
//!
//!     let db = VerseDatabase::from_file("data/kjvdat.txt")?;
//!     let registry = TypesetterRegistry::with_defaults()?;
//!     let mut ts = registry.create("plain", &BackendOptions::new(), &db)?;
//!     ts.start(std::io::stdout())?;
//!     ts.feed_refs(&parse_ref("Gen 1:1-3", &db)?)?;
//!     ts.finish()?;
//!
pub mod books;
pub mod data;
pub mod error;
pub mod formats;
pub mod refs;
pub mod registry;
pub mod typesetter;

pub use data::{Verse, VerseDatabase, VerseRef};
pub use error::{Result, TgnError};
pub use refs::{parse_ref, ReferenceParser};
pub use registry::{BackendOptions, TypesetterRegistry};
pub use typesetter::{Backend, Typesetter};
