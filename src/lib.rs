pub mod catalog;
pub mod config;
pub mod images;
pub mod supplier;
pub mod utils;

// Re-export commonly used types
pub use catalog::{
    read_supplier_csv, reshape_catalog, reshape_rows, write_catalog_csv, CatalogError,
    ProductRecord, ReshapeOptions, ReshapeResult, SupplierRow, OUTPUT_COLUMNS,
};
pub use config::{read_config, write_config, ConfigError, ImportConfig};
pub use images::{
    default_mapping, new_file_name, rename_images, ImageError, MappingEntry, RenameOutcome,
    RenameSummary,
};
pub use supplier::{
    find_supplier, resolve_image_base_path, Supplier, SupplierError, DEFAULT_SUPPLIER_ID,
    KNOWN_SUPPLIERS,
};
