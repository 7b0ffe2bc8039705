use serde::Serialize;

use crate::collection::CarCollection;
use crate::errors::{CarLotError, Result};
use crate::model::JoinedVehicle;
use crate::queries::ALL_BRANDS;

/// Column headers, in row cell order
pub const COLUMNS: [&str; 5] = ["Identification", "Brand", "Model", "Price", "Year"];

/// Table title when no brand filter is applied
pub const UNFILTERED_TITLE: &str = "List of vehicles";

/// Selector label for the "no filter" option
pub const ALL_BRANDS_TITLE: &str = "All brands";

/// A titled set of joined rows, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub title: String,
    pub rows: Vec<JoinedVehicle>,
}

/// One entry of the brand selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandOption {
    pub value: String,
    pub title: String,
}

/// Build the inventory view for an optional brand filter
///
/// No filter, or the `"0"` sentinel, lists every vehicle under
/// [`UNFILTERED_TITLE`]. Otherwise the title is `"<Brand> brand vehicles"`.
///
/// # Errors
/// * `UnknownBrandFilter` - If the filter names a brand that is not in the store
pub fn inventory_view(cars: &CarCollection, brand_filter: Option<&str>) -> Result<InventoryView> {
    match brand_filter {
        None => Ok(InventoryView {
            title: UNFILTERED_TITLE.to_string(),
            rows: cars.list_all(),
        }),
        Some(ALL_BRANDS) => Ok(InventoryView {
            title: UNFILTERED_TITLE.to_string(),
            rows: cars.list_by_brand(ALL_BRANDS),
        }),
        Some(brand_id) => {
            let brand_title =
                cars.brand_title(brand_id)
                    .ok_or_else(|| CarLotError::UnknownBrandFilter {
                        brand_id: brand_id.to_string(),
                    })?;

            Ok(InventoryView {
                title: format!("{} brand vehicles", brand_title),
                rows: cars.list_by_brand(brand_id),
            })
        }
    }
}

/// Render the inventory to a Markdown table
///
/// Generates:
/// - The view title as H2
/// - A header row from [`COLUMNS`]
/// - One row per vehicle, cells stringified in column order
///
/// # Errors
/// * `UnknownBrandFilter` - If the filter names a brand that is not in the store
pub fn render_inventory(cars: &CarCollection, brand_filter: Option<&str>) -> Result<String> {
    let view = inventory_view(cars, brand_filter)?;

    let mut output = String::new();
    output.push_str(&format!("## {}\n\n", view.title));

    output.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    output.push_str(&format!("|{}\n", " --- |".repeat(COLUMNS.len())));

    for row in &view.rows {
        let cells: Vec<String> = row.to_row().iter().map(|cell| escape_cell(cell)).collect();
        output.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    if view.rows.is_empty() {
        output.push_str("\n_No vehicles._\n");
    }

    Ok(output)
}

/// Options for a brand selector: the "all" sentinel followed by every brand
pub fn brand_options(cars: &CarCollection) -> Vec<BrandOption> {
    std::iter::once(BrandOption {
        value: ALL_BRANDS.to_string(),
        title: ALL_BRANDS_TITLE.to_string(),
    })
    .chain(cars.brands().iter().map(|brand| BrandOption {
        value: brand.id.clone(),
        title: brand.title.clone(),
    }))
    .collect()
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}
