mod types;

pub use types::Supplier;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupplierError {
    #[error("Unknown supplier: {0}")]
    UnknownSupplier(String),
}

/// Supplier used when nothing else is configured (Sanchez Import)
pub const DEFAULT_SUPPLIER_ID: &str = "PS-00001";

pub const KNOWN_SUPPLIERS: &[Supplier] = &[
    Supplier {
        id: "PS-00001",
        name: "Sanchez Import",
        folder: "Sanchez Import",
        images: "Fotos_Sanchez_Import",
    },
    Supplier {
        id: "MAS-i002",
        name: "Mastro Import",
        folder: "Mastro",
        images: "Fotos_Mastro",
    },
    Supplier {
        id: "ARG-C003",
        name: "ARG Import",
        folder: "ARG_importaciones",
        images: "Fotos_ARG",
    },
    Supplier {
        id: "Mcc-i004",
        name: "MultiOcc",
        folder: "MultiOcc",
        images: "Fotos_MultiOcc",
    },
    Supplier {
        id: "Wic-A1",
        name: "WillCars Import",
        folder: "WillCars Import",
        images: "Fotos_WillCars",
    },
    Supplier {
        id: "kod-Sc001",
        name: "Kode Import",
        folder: "Kode import",
        images: "Fotos_Kode",
    },
];

/// Find a known supplier by its code
pub fn find_supplier(id: &str) -> Option<&'static Supplier> {
    KNOWN_SUPPLIERS.iter().find(|s| s.id == id)
}

/// Pick the image base path for a supplier.
///
/// An explicit override wins and lets unknown supplier codes through;
/// otherwise the supplier must be known.
pub fn resolve_image_base_path(
    supplier_id: &str,
    base_path_override: Option<&str>,
) -> Result<String, SupplierError> {
    if let Some(base_path) = base_path_override {
        return Ok(base_path.to_string());
    }

    find_supplier(supplier_id)
        .map(Supplier::image_base_path)
        .ok_or_else(|| SupplierError::UnknownSupplier(supplier_id.to_string()))
}
