//! HTML5 typesetter
//!
//! Produces a single, self-contained HTML document, one box per verse:
//!
//! | Event              | HTML                                                          |
//! |--------------------|---------------------------------------------------------------|
//! | start              | `<html>`, `<head>` with title and stylesheet, `<body>`, `<div class="{p}-content">` |
//! | verse              | `<div class="{p}-verse-box">` holding `{p}-verse-text` and `{p}-verse-number` |
//! | chapter/book change| `{p}-verse-chapter` and `{p}-verse-book` divs inside the verse box |
//! | discontinuity      | `<hr class="{p}-skip" />` before the verse box                 |
//! | debug              | `<pre class="{p}-debug">`                                     |
//! | finish             | closes every open tag                                         |
//!
//! `{p}` is the class prefix (`tgn` by default). Verse text is inserted verbatim into element
//! content. The layout (reference columns, skip rule) lives entirely in the stylesheet.
//!
//! Options:
//!     - `class-prefix`: CSS class prefix
//!     - `css`: stylesheet text to inline, replacing the embedded default
//!     - `style-sheet`: stylesheet href, linked when `inline-styles` is false
//!     - `inline-styles`: inline the stylesheet into `<style>` (default true)

use crate::error::{Result, TgnError};
use crate::formats::common::{bool_option, string_option};
use crate::registry::BackendOptions;
use crate::typesetter::{Backend, VerseEvent};
use std::io::{self, Write};

pub const NAME: &str = "html5";
pub const CLASS_PREFIX: &str = "class-prefix";
pub const CSS: &str = "css";
pub const STYLE_SHEET: &str = "style-sheet";
pub const INLINE_STYLES: &str = "inline-styles";

pub const DEFAULT_CLASS_PREFIX: &str = "tgn";
pub const DOCUMENT_TITLE: &str = "The Gospel Narrative";

/// Default stylesheet inlined into every document
pub fn get_default_css() -> &'static str {
    include_str!("../../../assets/html5-styles.css")
}

/// Where the document gets its styles from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    /// CSS text pasted into a `<style>` element
    Inline(String),
    /// `<link rel="stylesheet">` to an external sheet
    Link(String),
}

impl Default for Stylesheet {
    fn default() -> Self {
        Stylesheet::Inline(get_default_css().to_string())
    }
}

const INDENT: usize = 4;

#[derive(Debug, Clone)]
pub struct HtmlBackend {
    prefix: String,
    stylesheet: Stylesheet,
    open_tags: Vec<&'static str>,
}

impl Default for HtmlBackend {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_PREFIX, Stylesheet::default())
    }
}

impl HtmlBackend {
    pub fn new(prefix: impl Into<String>, stylesheet: Stylesheet) -> Self {
        Self {
            prefix: prefix.into(),
            stylesheet,
            open_tags: Vec::new(),
        }
    }

    pub fn from_options(options: &BackendOptions) -> Result<Self> {
        let prefix = string_option(options, CLASS_PREFIX).unwrap_or(DEFAULT_CLASS_PREFIX);
        let inline = bool_option(options, NAME, INLINE_STYLES)?.unwrap_or(true);
        let stylesheet = match (inline, string_option(options, STYLE_SHEET)) {
            (true, _) => Stylesheet::Inline(
                string_option(options, CSS)
                    .unwrap_or(get_default_css())
                    .to_string(),
            ),
            (false, Some(href)) => Stylesheet::Link(href.to_string()),
            (false, None) => {
                return Err(TgnError::InvalidOption {
                    typesetter: NAME.to_string(),
                    key: INLINE_STYLES.to_string(),
                    value: format!("false (requires '{STYLE_SHEET}')"),
                })
            }
        };
        Ok(Self::new(prefix, stylesheet))
    }

    fn emit(&self, out: &mut dyn Write, line: &str) -> io::Result<()> {
        if line.is_empty() {
            return writeln!(out);
        }
        let indent = self.open_tags.len() * INDENT;
        writeln!(out, "{:indent$}{line}", "")
    }

    fn class(&self, klass: Option<&str>) -> String {
        match klass {
            Some(klass) => format!(" class=\"{}-{klass}\"", self.prefix),
            None => String::new(),
        }
    }

    /// `<tag class="..">contents</tag>`, or a void `<tag class=".." />` without contents
    fn tag(
        &self,
        out: &mut dyn Write,
        tag: &str,
        contents: Option<&str>,
        klass: Option<&str>,
    ) -> io::Result<()> {
        let class = self.class(klass);
        match contents {
            Some(contents) => self.emit(out, &format!("<{tag}{class}>{contents}</{tag}>")),
            None => self.emit(out, &format!("<{tag}{class} />")),
        }
    }

    fn open(
        &mut self,
        out: &mut dyn Write,
        tag: &'static str,
        klass: Option<&str>,
    ) -> io::Result<()> {
        let class = self.class(klass);
        self.emit(out, &format!("<{tag}{class}>"))?;
        self.open_tags.push(tag);
        Ok(())
    }

    fn close(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if let Some(tag) = self.open_tags.pop() {
            self.emit(out, &format!("</{tag}>"))?;
        }
        Ok(())
    }
}

impl Backend for HtmlBackend {
    fn prelude(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.open_tags.clear();
        self.emit(out, "<!DOCTYPE html>")?;
        self.open(out, "html", None)?;
        self.open(out, "head", None)?;
        self.emit(out, "<meta charset=\"utf-8\">")?;
        self.tag(out, "title", Some(DOCUMENT_TITLE), None)?;
        match self.stylesheet.clone() {
            Stylesheet::Inline(css) => {
                self.open(out, "style", None)?;
                for line in css.lines() {
                    self.emit(out, line.trim_end())?;
                }
                self.close(out)?;
            }
            Stylesheet::Link(href) => {
                self.emit(out, &format!("<link rel=\"stylesheet\" href=\"{href}\">"))?;
            }
        }
        self.close(out)?;
        self.open(out, "body", None)?;
        self.open(out, "div", Some("content"))
    }

    fn discontinuity(&mut self, out: &mut dyn Write, _after_paragraph: bool) -> io::Result<()> {
        self.tag(out, "hr", None, Some("skip"))
    }

    fn verse(&mut self, out: &mut dyn Write, event: &VerseEvent<'_>) -> io::Result<()> {
        let reference = event.reference;
        self.open(out, "div", Some("verse-box"))?;
        self.tag(out, "div", Some(event.text), Some("verse-text"))?;
        self.tag(
            out,
            "div",
            Some(&reference.verse.to_string()),
            Some("verse-number"),
        )?;
        if event.new_chapter {
            self.tag(
                out,
                "div",
                Some(&reference.chapter.to_string()),
                Some("verse-chapter"),
            )?;
            self.tag(out, "div", Some(event.book_name), Some("verse-book"))?;
        }
        self.close(out)
    }

    fn debug(&mut self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        self.tag(out, "pre", Some(message), Some("debug"))
    }

    fn postlude(&mut self, out: &mut dyn Write) -> io::Result<()> {
        while !self.open_tags.is_empty() {
            self.close(out)?;
        }
        Ok(())
    }
}
