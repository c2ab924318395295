use crate::embedding::Embedding;
use serde::Serialize;

/// A row of the `elements` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord {
    pub id: i64,
    pub name: String,
    pub is_base_element: bool,
    pub image_url: Option<String>,
    pub embedding: Embedding,
}

impl ElementRecord {
    /// Builds a base element: no image, flagged as base. The name is stored as given.
    pub fn base(id: i64, name: &str, embedding: Embedding) -> Self {
        ElementRecord {
            id,
            name: name.to_string(),
            is_base_element: true,
            image_url: None,
            embedding,
        }
    }
}

/// Element names are stored lower-cased with a leading capital.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Fire"), "Fire");
        assert_eq!(normalize_name("fIRE"), "Fire");
        assert_eq!(normalize_name("steam engine"), "Steam engine");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_base_record_serializes_null_image() {
        let record = ElementRecord::base(1, "Fire", vec![1.0, 0.0]);
        assert!(record.is_base_element);
        assert_eq!(ElementRecord::base(2, "wATER", vec![]).name, "wATER");
        assert_eq!(record.image_url, None);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Fire",
                "is_base_element": true,
                "image_url": null,
                "embedding": [1.0, 0.0],
            })
        );
    }
}
