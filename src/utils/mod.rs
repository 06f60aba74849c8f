use std::path::{Path, PathBuf};

/// Supplier list read by the reshaper when no other input is given
pub const DEFAULT_INPUT_CSV: &str = "lista_proveedor.csv";

/// Web-ready catalog written by the reshaper
pub const DEFAULT_OUTPUT_CSV: &str = "productos_listos.csv";

/// Directory holding the images to rename
pub const DEFAULT_IMAGE_DIR: &str = ".";

/// Configuration file looked up by the binary
pub const DEFAULT_CONFIG_FILE: &str = "catalog-import.json";

/// Extension given to every product image
pub const IMAGE_EXTENSION: &str = "jpg";

/// Sibling path used while a file is being written
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
