#![deny(missing_docs)]
//! A crate for writing HTML one tag at a time to any [`std::io::Write`] sink.
//!
//! An [`HtmlWriter`] tracks indentation, buffers attributes for the next
//! opening tag, and keeps the stack of open tags. On top of it sit:
//!
//! * [`HtmlTag`], a scope that writes the opening tag when created and the
//!   closing tag exactly once when it is closed or dropped;
//! * typed helpers such as [`HtmlWriter::render_a`] and
//!   [`HtmlWriter::render_img`] that turn a few optional values into an
//!   ordered attribute list (see [`elements`]);
//! * a dynamic calling convention, [`HtmlWriter::invoke`] and the
//!   [`dynamic!`] macro, where the method name is the tag and the named
//!   arguments are the attributes (see [`dynamic`]).
//!
//! # Example
//!
//! ```
//! use htmltag::{AnchorAttrs, CoreAttrs, HtmlWriter, ImgAttrs};
//!
//! let mut w = HtmlWriter::buffer();
//! {
//!     let mut nav = w.render_nav(CoreAttrs::default().with_class("top"))?;
//!     let mut a = nav.render_a(AnchorAttrs::new("/"))?;
//!     a.render_img(ImgAttrs { alt: Some("Home"), ..ImgAttrs::new("/logo.png") })?;
//! }
//! assert_eq!(
//!     w.into_string()?,
//!     r#"<nav class="top"><a href="/"><img src="/logo.png" alt="Home"/></a></nav>"#
//! );
//! # Ok::<(), htmltag::HtmlError>(())
//! ```

pub mod dynamic;
pub mod elements;

mod attribute;
pub use attribute::{attr, Attribute, IntoAttribute};

mod error;
pub use error::{HtmlError, Result};

mod known;
pub use known::{is_self_closing, KnownAttribute, KnownTag, SELF_CLOSING_TAGS};

mod tag;
pub use tag::{HtmlTag, LayoutStyle};

mod value;
pub use value::{format_composite, Value};

mod writer;
pub use writer::{HtmlWriter, WriterOptions};

pub use elements::{AnchorAttrs, CoreAttrs, ImgAttrs, LinkAttrs, MenuItemAttrs};

#[cfg(feature = "macros")]
pub use htmltag_macro::dynamic;
