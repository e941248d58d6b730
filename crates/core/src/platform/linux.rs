use super::AcpiSource;
use crate::config::Config;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Reads the legacy `/proc/acpi` tree, or any directory laid out like it.
pub struct ProcFs {
    root: PathBuf,
    version_file: PathBuf,
}

impl ProcFs {
    pub fn new(root: impl Into<PathBuf>, version_file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            version_file: version_file.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.acpi_root, &config.acpica_version_file)
    }
}

impl AcpiSource for ProcFs {
    fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    fn list_dir(&self, category: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(self.resolve(category))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }

        Ok(names)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn version_file(&self) -> &Path {
        &self.version_file
    }
}
