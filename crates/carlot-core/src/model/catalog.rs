use serde::{Deserialize, Serialize};

/// Brand - a vehicle manufacturer
///
/// Reference data: brands are fixed when the Store is constructed and have no
/// create/update/delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Unique identifier within the Brands relation
    pub id: String,

    /// Display title (e.g. "Toyota")
    pub title: String,
}

impl Brand {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Model - a vehicle model belonging to one Brand
///
/// `brand_id` is not checked at construction time and may dangle; joins
/// substitute a sentinel label for a missing brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Unique identifier within the Models relation
    pub id: String,

    /// Owning Brand ID
    #[serde(rename = "brandId", alias = "brand_id")]
    pub brand_id: String,

    /// Display title (e.g. "Corolla")
    pub title: String,
}

impl Model {
    pub fn new(id: impl Into<String>, brand_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            brand_id: brand_id.into(),
            title: title.into(),
        }
    }

    /// Check if this Model belongs to the given Brand
    pub fn belongs_to(&self, brand_id: &str) -> bool {
        self.brand_id == brand_id
    }
}
