//! PNG export of rendered frames

use crate::io::error::{GridError, Result};
use crate::render::canvas::FrameCanvas;
use std::path::Path;

/// Write a rendered frame to disk as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_canvas_as_png<P: AsRef<Path>>(canvas: &FrameCanvas, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    let parent = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .image()
        .save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(
        path = %output_path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "frame exported"
    );
    Ok(())
}
