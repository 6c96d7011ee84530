//! # yogi-yaml
//!
//! Plain-data YAML loading and block-style emission.
//!
//! This crate wraps `yaml-rust2` behind two operations: [`load_document`],
//! which decodes text into a single [`Yaml`] value, and [`emit_block`], which
//! renders a value back out in block style with two-space indentation.
//!
//! Loading is safe in the same sense as a safe-load entry point: the engine
//! only ever constructs plain data (mappings, sequences, strings, numbers,
//! booleans, null), so document tags can never instantiate arbitrary types.
//!
//! ## Example
//!
//! ```rust
//! use yogi_yaml::{emit_block, load_document};
//!
//! let doc = load_document("greeting: [hello, world]").unwrap();
//! let text = emit_block(&doc).unwrap();
//! assert_eq!(text, "greeting:\n  - hello\n  - world\n");
//! ```

mod emit;
mod error;
mod load;

pub use emit::emit_block;
pub use error::{Error, Result};
pub use load::load_document;
pub use yaml_rust2::Yaml;
