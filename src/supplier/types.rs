/// A supplier whose catalogs and photos are imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    /// Supplier code written to the `Proveedor` column
    pub id: &'static str,

    /// Display name
    pub name: &'static str,

    /// Folder under `/Uploads` holding the supplier's files
    pub folder: &'static str,

    /// Photo folder inside `folder`
    pub images: &'static str,
}

impl Supplier {
    /// Public path prefix of the supplier's product photos, with trailing slash
    pub fn image_base_path(&self) -> String {
        format!("/Uploads/{}/{}/", self.folder, self.images)
    }
}
