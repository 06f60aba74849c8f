#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

pub const SUPPLIER_HEADER: &str = "Código,Descripción,Marca,Precio USD,Referencia";

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write a supplier list with the standard header and the given data lines
pub async fn write_supplier_csv(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("lista_proveedor.csv");
    let mut content = String::from(SUPPLIER_HEADER);
    content.push('\n');
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&path, content)
        .await
        .expect("Should write supplier csv");
    path
}

/// Create an image file with dummy content
pub async fn touch_image(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"\xff\xd8\xff\xe0")
        .await
        .expect("Should write image");
}
