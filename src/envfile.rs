//! Ordered `.env` file templating and writing.
//!
//! An [`EnvFile`] is a list of key–value pairs that renders as `KEY=value`
//! lines in insertion order. Writing creates parent directories as needed
//! and holds the file handle only for the duration of the write.
//!
//! # Examples
//!
//! ```rust
//! use stagehand::envfile::EnvFile;
//!
//! let env = EnvFile::new()
//!     .set("PORT", "5000")
//!     .set("APP_ENV", "development");
//! assert_eq!(env.render(), "PORT=5000\nAPP_ENV=development\n");
//! ```

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// An ordered `.env` template.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    pairs: Vec<(String, String)>,
}

impl EnvFile {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key–value pair (builder pattern). Keys are not deduplicated;
    /// values render exactly as given.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Returns the pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Renders the template as `KEY=value` lines with a trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.pairs {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    /// Writes the rendered template to `path`, creating parent directories
    /// as needed. The file handle is released when this returns.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("stagehand-envfile-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_render_preserves_order() {
        let env = EnvFile::new()
            .set("B", "2")
            .set("A", "1")
            .set("C", "3");
        assert_eq!(env.render(), "B=2\nA=1\nC=3\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(EnvFile::new().render(), "");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = temp_path("nested");
        let path = dir.join("deep").join(".env");

        let env = EnvFile::new().set("PORT", "5000");
        env.write_to(&path).expect("write");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "PORT=5000\n");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_overwrites_existing() {
        let path = temp_path("overwrite.env");

        EnvFile::new().set("A", "old").write_to(&path).expect("first write");
        EnvFile::new().set("A", "new").write_to(&path).expect("second write");

        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "A=new\n");

        fs::remove_file(&path).ok();
    }
}
