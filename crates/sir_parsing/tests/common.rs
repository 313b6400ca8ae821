use std::path::{Path, PathBuf};

/// A file in this crate's `sir_files` directory
pub fn sir_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("sir_files")
        .join(name)
}
