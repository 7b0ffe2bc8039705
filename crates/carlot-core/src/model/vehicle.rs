use serde::{Deserialize, Serialize};

/// Vehicle - a sellable unit referencing one Model
///
/// The only mutable relation. The brand is never stored here; it is reached
/// through `model_id -> Model.brand_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,

    /// Referenced Model ID
    #[serde(rename = "modelId", alias = "model_id")]
    pub model_id: String,

    /// Asking price in whole currency units
    pub price: u64,

    /// Model year
    pub year: u32,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, model_id: impl Into<String>, price: u64, year: u32) -> Self {
        Self {
            id: id.into(),
            model_id: model_id.into(),
            price,
            year,
        }
    }
}

/// Input for `add` and `update`
///
/// `brand_id` is a validation signal only: it must name an existing Brand but
/// it is not stored on the Vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProps {
    #[serde(rename = "brandId", alias = "brand_id")]
    pub brand_id: String,

    #[serde(rename = "modelId", alias = "model_id")]
    pub model_id: String,

    pub price: u64,

    pub year: u32,
}

impl VehicleProps {
    pub fn new(
        brand_id: impl Into<String>,
        model_id: impl Into<String>,
        price: u64,
        year: u32,
    ) -> Self {
        Self {
            brand_id: brand_id.into(),
            model_id: model_id.into(),
            price,
            year,
        }
    }
}

/// A Vehicle with its Model and Brand resolved to display titles
///
/// Derived on demand from current store state; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedVehicle {
    pub id: String,
    pub price: u64,
    pub year: u32,
    pub brand: String,
    pub model: String,
}

impl JoinedVehicle {
    /// Stringified cells in display column order: id, brand, model, price, year
    pub fn to_row(&self) -> [String; 5] {
        [
            self.id.clone(),
            self.brand.clone(),
            self.model.clone(),
            self.price.to_string(),
            self.year.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_vehicle_row_order() {
        let joined = JoinedVehicle {
            id: "v1".to_string(),
            price: 20000,
            year: 2020,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
        };

        assert_eq!(
            joined.to_row(),
            ["v1", "Toyota", "Corolla", "20000", "2020"].map(String::from)
        );
    }

    #[test]
    fn test_vehicle_props_accept_camel_case() {
        let props: VehicleProps =
            serde_json::from_str(r#"{"brandId":"b1","modelId":"m1","price":15000,"year":2018}"#)
                .unwrap();
        assert_eq!(props, VehicleProps::new("b1", "m1", 15000, 2018));
    }
}
