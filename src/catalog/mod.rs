mod reshape;
mod types;

pub use reshape::{read_supplier_csv, reshape_catalog, reshape_rows, write_catalog_csv};
pub use types::{
    ProductRecord, ReshapeOptions, ReshapeResult, SupplierRow, OUTPUT_COLUMNS,
    REQUIRED_INPUT_COLUMNS,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Supplier error: {0}")]
    Supplier(#[from] crate::supplier::SupplierError),
}
