//! Saving exported images to disk.

use super::types::ExportError;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename template used when none (or an invalid one) is configured.
pub const DEFAULT_FILENAME_TEMPLATE: &str = "sketch_%Y-%m-%d_%H%M%S";

/// Where exported sketches are written.
#[derive(Debug, Clone)]
pub struct ExportFileConfig {
    /// Directory to save sketches to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for ExportFileConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Scribblepad"),
            filename_template: DEFAULT_FILENAME_TEMPLATE.to_string(),
        }
    }
}

/// Returns `true` if every chrono specifier in `template` is recognized.
pub fn is_valid_template(template: &str) -> bool {
    !StrftimeItems::new(template).any(|item| matches!(item, Item::Error))
}

/// Generate a PNG filename from the template and the current local time.
///
/// An invalid template falls back to [`DEFAULT_FILENAME_TEMPLATE`].
pub fn generate_filename(template: &str) -> String {
    let template = if is_valid_template(template) {
        template
    } else {
        log::warn!("Invalid filename template '{template}', using default");
        DEFAULT_FILENAME_TEMPLATE
    };
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Saves PNG bytes under a generated name in the configured directory.
///
/// # Returns
/// Path to the saved file
pub fn save_image(image_data: &[u8], config: &ExportFileConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.save_directory)?;
    let file_path = directory.join(generate_filename(&config.filename_template));
    save_image_to(image_data, &file_path)?;
    Ok(file_path)
}

/// Saves PNG bytes to an explicit path, creating parent directories.
pub fn save_image_to(image_data: &[u8], path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Saving sketch to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );
    fs::write(path, image_data)?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("test_%Y%m%d");
        assert!(filename.starts_with("test_"));
        assert!(filename.ends_with(".png"));
        assert_eq!(filename.len(), "test_YYYYMMDD.png".len());
    }

    #[test]
    fn invalid_template_falls_back_to_default() {
        assert!(!is_valid_template("sketch_%Q"));
        assert!(is_valid_template(DEFAULT_FILENAME_TEMPLATE));

        let filename = generate_filename("sketch_%Q");
        assert!(filename.starts_with("sketch_"));
        assert!(filename.ends_with(".png"));
        assert!(!filename.contains('%'));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn save_image_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let config = ExportFileConfig {
            save_directory: temp.path().join("nested").join("out"),
            filename_template: "sketch".to_string(),
        };

        let path = save_image(b"png-bytes", &config).unwrap();
        assert!(path.ends_with("sketch.png"));
        assert_eq!(fs::read(&path).unwrap(), b"png-bytes");
    }

    #[test]
    fn save_image_to_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b.png");
        save_image_to(b"x", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_default_config() {
        let config = ExportFileConfig::default();
        assert!(
            config
                .save_directory
                .to_string_lossy()
                .contains("Scribblepad")
        );
    }
}
