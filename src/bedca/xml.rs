//! Lookups over BEDCA response documents.
//!
//! Searches are over descendants in document order, so `<food>` is found
//! whether it sits directly under `<foodresponse>` or deeper.

use roxmltree::{Document, Node, ParsingOptions};

use super::error::BedcaError;

pub fn parse(text: &str) -> Result<Document<'_>, BedcaError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Ok(Document::parse_with_options(text, options)?)
}

/// First descendant element of `node` (excluding `node` itself) named `name`.
pub fn find<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.has_tag_name(name))
}

/// All descendant elements of `node` named `name`, in document order.
pub fn find_all<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.has_tag_name(name))
}

/// Trimmed text of the first `name` descendant; `None` if absent or empty.
pub fn find_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    find(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// The first `<foodresponse>` element in the document.
pub fn food_response<'a, 'input>(
    doc: &'a Document<'input>,
) -> Result<Node<'a, 'input>, BedcaError> {
    doc.descendants()
        .find(|n| n.is_element() && n.has_tag_name("foodresponse"))
        .ok_or(BedcaError::MissingElement("foodresponse"))
}

pub fn parse_number<T: std::str::FromStr>(field: &'static str, text: &str) -> Result<T, BedcaError> {
    text.trim()
        .parse()
        .map_err(|_| BedcaError::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<foodresponse>
  <food>
    <f_id>1</f_id>
    <f_ori_name>  Manzana  </f_ori_name>
    <empty></empty>
  </food>
  <food>
    <f_id>2</f_id>
  </food>
</foodresponse>"#;

    #[test]
    fn test_food_response_and_find_all() {
        let doc = parse(SAMPLE).unwrap();
        let response = food_response(&doc).unwrap();
        assert_eq!(find_all(response, "food").count(), 2);
    }

    #[test]
    fn test_find_text_trims_and_filters_empty() {
        let doc = parse(SAMPLE).unwrap();
        let response = food_response(&doc).unwrap();
        let food = find(response, "food").unwrap();
        assert_eq!(find_text(food, "f_ori_name"), Some("Manzana"));
        assert_eq!(find_text(food, "empty"), None);
        assert_eq!(find_text(food, "missing"), None);
    }

    #[test]
    fn test_missing_food_response() {
        let doc = parse("<other/>").unwrap();
        let err = food_response(&doc).unwrap_err();
        assert!(matches!(err, BedcaError::MissingElement("foodresponse")));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(parse("<foodresponse>"), Err(BedcaError::Xml(_))));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i64>("f_id", " 17 ").unwrap(), 17);
        assert_eq!(parse_number::<f64>("best_location", "12.6").unwrap(), 12.6);
        assert!(matches!(
            parse_number::<i64>("f_id", "x"),
            Err(BedcaError::InvalidNumber { field: "f_id", .. })
        ));
    }
}
