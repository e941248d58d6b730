pub mod linux;

pub use linux::ProcFs;

use std::io;
use std::path::{Path, PathBuf};

/// Access to the ACPI file tree
pub trait AcpiSource {
    /// Path of an entry relative to the tree root, such as a category
    /// directory (`battery`, `fan`) or the top-level `info` file
    fn resolve(&self, relative: &str) -> PathBuf;

    /// Names of the entries under a category directory, hidden ones left out
    fn list_dir(&self, category: &str) -> io::Result<Vec<String>>;

    /// Whole content of a data file
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Fallback file holding the bare ACPICA version number
    fn version_file(&self) -> &Path;
}
