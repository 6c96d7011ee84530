//! Decoding YAML text into plain `Yaml` values.

use crate::{Error, Result};
use yaml_rust2::{Yaml, YamlLoader};

/// Decode `content` as one YAML document.
///
/// Only plain data comes out of this: mappings, sequences, strings, numbers,
/// booleans, null. An empty or all-comment input decodes to `Yaml::Null`.
/// If the input holds multiple documents, only the first one is kept.
///
/// # Example
///
/// ```rust
/// use yogi_yaml::load_document;
///
/// let doc = load_document("title: My Document").unwrap();
/// assert_eq!(doc["title"].as_str(), Some("My Document"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] with the scanner's position when the input is
/// not valid YAML.
pub fn load_document(content: &str) -> Result<Yaml> {
    let docs = YamlLoader::load_from_str(content).map_err(Error::from)?;
    Ok(docs.into_iter().next().unwrap_or(Yaml::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_scalar() {
        let doc = load_document("hello").unwrap();
        assert_eq!(doc.as_str(), Some("hello"));
    }

    #[test]
    fn load_mapping() {
        let doc = load_document("title: My Document\ncount: 42").unwrap();
        assert_eq!(doc["title"].as_str(), Some("My Document"));
        assert_eq!(doc["count"].as_i64(), Some(42));
    }

    #[test]
    fn load_sequence() {
        let doc = load_document("[1, 2, 3]").unwrap();
        let items = doc.as_vec().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_i64(), Some(1));
    }

    #[test]
    fn empty_input_is_null() {
        assert_eq!(load_document("").unwrap(), Yaml::Null);
    }

    #[test]
    fn comment_only_input_is_null() {
        assert_eq!(load_document("# nothing here\n").unwrap(), Yaml::Null);
    }

    #[test]
    fn first_document_wins() {
        let doc = load_document("a: 1\n---\na: 2\n").unwrap();
        assert_eq!(doc["a"].as_i64(), Some(1));
    }

    #[test]
    fn unterminated_flow_sequence_is_a_parse_error() {
        let err = load_document("key: [1, 2").unwrap_err();
        match err {
            Error::Parse { line, problem, .. } => {
                assert!(line >= 1);
                assert!(!problem.is_empty());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn tab_indentation_is_a_parse_error() {
        let err = load_document("a:\n\tb: 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line, .. } if line >= 1));
    }
}
