//! Rendering `Yaml` values in canonical block style.

use crate::{Error, Result};
use yaml_rust2::{Yaml, YamlEmitter};

/// Render `doc` in block style with two-space indentation.
///
/// Collections are always written in multi-line indented form; the inline
/// `{}`/`[]` notation only appears for empty collections, which have no
/// block form. The document-start marker the emitter writes is stripped so
/// the result is just the document body, and the body always ends with a
/// newline.
///
/// # Errors
///
/// Returns [`Error::Emit`] if the underlying emitter fails.
pub fn emit_block(doc: &Yaml) -> Result<String> {
    let mut out = String::new();
    {
        let mut emitter = YamlEmitter::new(&mut out);
        emitter.dump(doc).map_err(Error::from)?;
    }

    // The first `---` is always the document-start marker, followed either
    // by a newline (collections) or a space (scalars).
    let body = out
        .strip_prefix("---")
        .map(|rest| rest.trim_start_matches([' ', '\n']))
        .unwrap_or(&out);

    let mut text = body.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
