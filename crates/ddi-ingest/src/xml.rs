//! Reading `var` elements from DDI codebook documents.
//!
//! The reader only extracts what the converter needs and keeps every value as raw
//! text; trimming, number parsing and defaults are applied by the record builder.

use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::{IngestError, Result};

/// One `catgry` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCategory {
    /// Text of `catValu`, `None` when the child is missing.
    pub value: Option<String>,
    /// Text of `labl`, `None` when the child is missing.
    pub label: Option<String>,
    /// Text of `catStat`.
    pub frequency: Option<String>,
    /// The `missing` attribute.
    pub missing: Option<String>,
}

/// One `sumStat` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStatistic {
    pub kind: Option<String>,
    pub value: Option<String>,
}

/// One `var` element with its relevant children, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawVariable {
    /// The `files` attribute (dataset name).
    pub dataset: Option<String>,
    /// The `ID` attribute.
    pub id: Option<String>,
    /// The `intrvl` attribute.
    pub interval: Option<String>,
    pub label: Option<String>,
    pub categories: Vec<RawCategory>,
    pub statistics: Vec<RawStatistic>,
}

/// Reads and parses all variables of the document at `path`.
pub fn read_variables(path: &Path) -> Result<Vec<RawVariable>> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_variables(&text, path)
}

/// Parses all `var` elements of `text`, wherever they are nested.
///
/// `path` is only used for error reporting.
pub fn parse_variables(text: &str, path: &Path) -> Result<Vec<RawVariable>> {
    let document = Document::parse(text).map_err(|source| IngestError::XmlParse {
        path: path.to_path_buf(),
        source,
    })?;
    let variables = document
        .descendants()
        .filter(|node| is_element(*node, "var"))
        .map(read_variable)
        .collect();
    Ok(variables)
}

fn read_variable(node: Node<'_, '_>) -> RawVariable {
    let mut variable = RawVariable {
        dataset: attribute(node, "files"),
        id: attribute(node, "ID"),
        interval: attribute(node, "intrvl"),
        label: child_text(node, "labl"),
        ..RawVariable::default()
    };
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "catgry" => variable.categories.push(RawCategory {
                value: child_text(child, "catValu"),
                label: child_text(child, "labl"),
                frequency: child_text(child, "catStat"),
                missing: attribute(child, "missing"),
            }),
            "sumStat" => variable.statistics.push(RawStatistic {
                kind: attribute(child, "type"),
                value: child.text().map(str::to_string),
            }),
            _ => {}
        }
    }
    variable
}

fn is_element(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn attribute(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(str::to_string)
}

/// Text of the first direct child named `name`.
///
/// An existing child without text yields `Some("")`; a missing child yields `None`.
fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|child| is_element(*child, name))
        .map(|child| child.text().unwrap_or_default().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<codeBook>
  <dataDscr>
    <var ID="AGE" files="persons" intrvl="labeled_numeric">
      <labl>Age</labl>
      <sumStat type="min">1</sumStat>
      <sumStat type="max"> 2 </sumStat>
      <catgry missing="true">
        <catValu>-1</catValu>
        <labl>No answer</labl>
        <catStat>3</catStat>
      </catgry>
      <catgry>
        <catValu>1</catValu>
        <labl/>
      </catgry>
    </var>
    <var ID="hid" files="households"/>
  </dataDscr>
</codeBook>"#;

    #[test]
    fn reads_nested_variables() {
        let variables = parse_variables(DOCUMENT, Path::new("test.xml")).unwrap();
        assert_eq!(variables.len(), 2);

        let age = &variables[0];
        assert_eq!(age.id.as_deref(), Some("AGE"));
        assert_eq!(age.dataset.as_deref(), Some("persons"));
        assert_eq!(age.interval.as_deref(), Some("labeled_numeric"));
        assert_eq!(age.label.as_deref(), Some("Age"));
        assert_eq!(age.statistics.len(), 2);
        assert_eq!(age.statistics[1].value.as_deref(), Some(" 2 "));
        assert_eq!(age.categories.len(), 2);
        assert_eq!(age.categories[0].missing.as_deref(), Some("true"));
        assert_eq!(age.categories[0].frequency.as_deref(), Some("3"));
        assert_eq!(age.categories[1].label.as_deref(), Some(""));
        assert_eq!(age.categories[1].frequency, None);

        let hid = &variables[1];
        assert_eq!(hid.label, None);
        assert!(hid.categories.is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = parse_variables("<codeBook><var>", Path::new("broken.xml")).unwrap_err();
        assert!(matches!(err, IngestError::XmlParse { .. }));
        assert!(err.to_string().contains("broken.xml"));
    }
}
