//! XML codec used by the classic API.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// Serialize `value` as an XML document whose root element is `root`.
pub fn to_string_with_root<T: Serialize>(root: &str, value: &T) -> Result<String> {
    quick_xml::se::to_string_with_root(root, value)
        .map_err(|e| Error::new(ErrorKind::Xml(e.to_string())))
}

/// Deserialize an XML document. The root element name is not checked.
pub fn from_str<T: DeserializeOwned>(xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).map_err(Into::into)
}

/// Deserialize an XML document from UTF-8 bytes.
pub fn from_slice<T: DeserializeOwned>(xml: &[u8]) -> Result<T> {
    let text = std::str::from_utf8(xml)
        .map_err(|e| Error::with_source(ErrorKind::Xml("response is not UTF-8".to_string()), e))?;
    from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Widget {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_smart: Option<bool>,
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let widget = Widget {
            id: None,
            name: Some("Test Widget".to_string()),
            is_smart: Some(true),
        };
        assert_eq!(
            to_string_with_root("widget", &widget).unwrap(),
            "<widget><name>Test Widget</name><is_smart>true</is_smart></widget>"
        );
    }

    #[test]
    fn test_deserialize_with_declaration() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<widget>\n  <id>1</id>\n</widget>";
        let widget: Widget = from_slice(xml.as_bytes()).unwrap();
        assert_eq!(widget.id, Some(1));
        assert_eq!(widget.name, None);
    }

    #[test]
    fn test_escaping() {
        let widget = Widget {
            id: Some(2),
            name: Some("R&D <Macs>".to_string()),
            is_smart: None,
        };
        let xml = to_string_with_root("widget", &widget).unwrap();
        assert!(xml.contains("R&amp;D &lt;Macs&gt;"));
        let back: Widget = from_str(&xml).unwrap();
        assert_eq!(back, widget);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = from_slice::<Widget>(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Xml(_)));
    }
}
