//! File saving for exported images.

use super::types::ExportError;
use crate::config::ExportConfig;
use crate::draw::Canvas;
use chrono::Utc;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Generate a timestamped filename: `<prefix>-<unix-epoch-millis>.<format>`.
///
/// The millisecond timestamp keeps successive saves unique. Two saves within
/// the same millisecond produce the same name and the later write wins; that
/// collision window is accepted rather than guarded.
pub fn generate_filename(prefix: &str, format: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{}-{}.{}", prefix, millis, format)
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

    // Canonicalize to resolve relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Encode the canvas as PNG and save it under a timestamped name.
///
/// # Returns
/// Path to the saved file
pub fn save_canvas(canvas: &mut Canvas, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.directory)?;

    let filename = generate_filename(&config.prefix, &config.format);
    let file_path = directory.join(&filename);

    log::info!("Saving image to: {}", file_path.display());

    let file = fs::File::create(&file_path)?;
    let mut writer = BufWriter::new(file);
    canvas.write_png(&mut writer)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}
