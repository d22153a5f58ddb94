//! Typesetting backends
//!
//! Each format implements [`Backend`](crate::typesetter::Backend) and owns its escaping rules
//! and layout policy. The shared transition logic lives in [`crate::typesetter`].

pub mod common;
pub mod html;
pub mod plain;
pub mod sile;
pub mod tex;

pub use html::{get_default_css, HtmlBackend, Stylesheet};
pub use plain::PlainTextBackend;
pub use sile::SileBackend;
pub use tex::PlainTexBackend;
