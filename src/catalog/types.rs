use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CODE_COLUMN: &str = "Código";
pub const DESCRIPTION_COLUMN: &str = "Descripción";
pub const BRAND_COLUMN: &str = "Marca";
pub const MODEL_COLUMN: &str = "Modelo";
pub const PRICE_COLUMN: &str = "Precio USD";
pub const REFERENCE_COLUMN: &str = "Referencia";
pub const SUPPLIER_COLUMN: &str = "Proveedor";
pub const IMAGE_COLUMN: &str = "Imagen";

/// Columns every supplier list must carry
pub const REQUIRED_INPUT_COLUMNS: [&str; 5] = [
    CODE_COLUMN,
    DESCRIPTION_COLUMN,
    BRAND_COLUMN,
    PRICE_COLUMN,
    REFERENCE_COLUMN,
];

/// Header of the web-ready catalog, in output order
pub const OUTPUT_COLUMNS: [&str; 8] = [
    CODE_COLUMN,
    DESCRIPTION_COLUMN,
    BRAND_COLUMN,
    MODEL_COLUMN,
    PRICE_COLUMN,
    REFERENCE_COLUMN,
    SUPPLIER_COLUMN,
    IMAGE_COLUMN,
];

/// The fields taken from one row of a supplier list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierRow {
    pub code: String,
    pub description: String,
    pub brand: String,
    pub price_usd: String,
    pub reference: String,
}

/// One line of the web-ready catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Código")]
    pub code: String,
    #[serde(rename = "Descripción")]
    pub description: String,
    #[serde(rename = "Marca")]
    pub brand: String,
    /// Always empty for this supplier
    #[serde(rename = "Modelo")]
    pub model: String,
    /// Kept exactly as the supplier wrote it
    #[serde(rename = "Precio USD")]
    pub price_usd: String,
    #[serde(rename = "Referencia")]
    pub reference: String,
    #[serde(rename = "Proveedor")]
    pub supplier: String,
    #[serde(rename = "Imagen")]
    pub image_path: String,
}

impl ProductRecord {
    /// Field values in [`OUTPUT_COLUMNS`] order
    pub fn to_fields(&self) -> [&str; 8] {
        [
            &self.code,
            &self.description,
            &self.brand,
            &self.model,
            &self.price_usd,
            &self.reference,
            &self.supplier,
            &self.image_path,
        ]
    }
}

/// Options for a reshape run
#[derive(Debug, Clone)]
pub struct ReshapeOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub supplier_id: String,
    /// Overrides the supplier's own image folder
    pub image_base_path: Option<String>,
}

/// Result of a reshape run
#[derive(Debug, Clone)]
pub struct ReshapeResult {
    pub output: PathBuf,
    pub row_count: usize,
}
