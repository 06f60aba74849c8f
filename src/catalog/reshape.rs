use super::types::{
    ProductRecord, ReshapeOptions, ReshapeResult, SupplierRow, BRAND_COLUMN, CODE_COLUMN,
    DESCRIPTION_COLUMN, OUTPUT_COLUMNS, PRICE_COLUMN, REFERENCE_COLUMN, REQUIRED_INPUT_COLUMNS,
};
use super::CatalogError;
use crate::supplier::resolve_image_base_path;
use crate::images::new_file_name;
use crate::utils::temp_path_for;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

const UTF8_BOM: char = '\u{feff}';

/// Read a supplier list, keeping only the columns the catalog needs
pub async fn read_supplier_csv(path: &Path) -> Result<Vec<SupplierRow>, CatalogError> {
    if !fs::try_exists(path).await? {
        return Err(CatalogError::InputNotFound(path.display().to_string()));
    }

    let content = fs::read(path).await?;
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_slice());

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::locate(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(columns.extract(&record));
    }

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Turn supplier rows into catalog records for `supplier_id`
pub fn reshape_rows(
    rows: Vec<SupplierRow>,
    supplier_id: &str,
    image_base_path: &str,
) -> Vec<ProductRecord> {
    rows.into_iter()
        .map(|row| {
            let image_path = format!("{}{}", image_base_path, new_file_name(&row.code));
            ProductRecord {
                code: row.code,
                description: row.description,
                brand: row.brand,
                model: String::new(),
                price_usd: row.price_usd,
                reference: row.reference,
                supplier: supplier_id.to_string(),
                image_path,
            }
        })
        .collect()
}

/// Write the catalog, header included, replacing `path` in one step
pub async fn write_catalog_csv(path: &Path, records: &[ProductRecord]) -> Result<(), CatalogError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.write_record(record.to_fields())?;
    }
    let content = writer.into_inner().map_err(|e| e.into_error())?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    // Write atomically using temp file + rename
    let temp_path = temp_path_for(path);
    if let Err(err) = replace_file(&temp_path, path, &content).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(err.into());
    }

    Ok(())
}

async fn replace_file(temp_path: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    fs::write(temp_path, content).await?;
    fs::rename(temp_path, path).await
}

/// Read, reshape and write a supplier list in one pass
pub async fn reshape_catalog(options: ReshapeOptions) -> Result<ReshapeResult, CatalogError> {
    let image_base_path =
        resolve_image_base_path(&options.supplier_id, options.image_base_path.as_deref())?;

    let rows = read_supplier_csv(&options.input).await?;
    let records = reshape_rows(rows, &options.supplier_id, &image_base_path);
    write_catalog_csv(&options.output, &records).await?;

    info!(
        "Reshaped {} rows from {} into {}",
        records.len(),
        options.input.display(),
        options.output.display()
    );

    Ok(ReshapeResult {
        output: options.output,
        row_count: records.len(),
    })
}

/// Positions of the required columns in a supplier header
struct ColumnIndex {
    code: usize,
    description: usize,
    brand: usize,
    price_usd: usize,
    reference: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, CatalogError> {
        let names: Vec<&str> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches(UTF8_BOM) } else { h })
            .collect();
        let position = |column: &str| names.iter().position(|h| *h == column);

        let missing: Vec<String> = REQUIRED_INPUT_COLUMNS
            .iter()
            .filter(|column| position(**column).is_none())
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CatalogError::MissingColumns(missing));
        }

        let index = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            code: index(CODE_COLUMN),
            description: index(DESCRIPTION_COLUMN),
            brand: index(BRAND_COLUMN),
            price_usd: index(PRICE_COLUMN),
            reference: index(REFERENCE_COLUMN),
        })
    }

    fn extract(&self, record: &StringRecord) -> SupplierRow {
        let cell = |i: usize| record.get(i).unwrap_or_default().to_string();
        SupplierRow {
            code: cell(self.code),
            description: cell(self.description),
            brand: cell(self.brand),
            price_usd: cell(self.price_usd),
            reference: cell(self.reference),
        }
    }
}
