use serde::{Deserialize, Serialize};

/// Catalog item as returned by `/search` and `/popular-products`.
///
/// The backend serializes its database id as `_id`; `id` is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub likes: Option<u64>,
}

impl Product {
    /// Like count, treating a missing or zero count as "no likes".
    pub fn like_count(&self) -> Option<u64> {
        self.likes.filter(|n| *n > 0)
    }

    /// Description, treating an empty string like a missing one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_document() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "name": "Trail Shoe",
            "description": "Light and grippy",
            "price": 89.9,
            "image": "/static/img/shoe.png",
            "likes": 12,
            "category": "footwear"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "65f1c0ffee");
        assert_eq!(product.like_count(), Some(12));
        assert_eq!(product.description(), Some("Light and grippy"));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id": "p1", "name": "Mug", "price": 4, "image": "mug.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.price, 4.0);
        assert!(product.description().is_none());
        assert!(product.like_count().is_none());
    }

    #[test]
    fn test_zero_likes_is_no_likes() {
        let json = r#"{"_id": "p2", "name": "Cap", "price": 10, "image": "c.png", "likes": 0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.likes, Some(0));
        assert!(product.like_count().is_none());
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let json = r#"{"_id": "p3", "name": "Cap", "image": "c.png"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
