//! tests/api/helpers.rs
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use wordcount::telemetry::init_tracing;

static TRACING: LazyLock<()> = LazyLock::new(|| {
    // Quiet unless RUST_LOG asks for more.
    init_tracing("off").expect("Failed to setup tracing");
});

pub fn setup_tracing() {
    LazyLock::force(&TRACING);
}

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn test_file(name: &str) -> PathBuf {
    test_data_dir().join(name)
}

/// A uuid-named directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir()
            .join("wordcount")
            .join(uuid::Uuid::new_v4().to_string());
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
