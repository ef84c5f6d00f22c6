use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ic_render::render_image;

use crate::error::ExportError;
use crate::png::encode_png;

/// Identicon encodé en PNG.
///
/// # Errors
/// Returns an error if `cell_size` is out of range or if encoding fails.
///
/// # Example
/// ```
/// use ic_export::render_bytes;
/// let png = render_bytes(b"", 10).unwrap();
/// assert!(!png.is_empty());
/// ```
pub fn render_bytes(data: &[u8], cell_size: u32) -> Result<Vec<u8>, ExportError> {
    let canvas = render_image(data, cell_size)?;
    encode_png(&canvas)
}

/// PNG encodé en base64 standard, avec padding, sans retour à la ligne.
///
/// # Errors
/// Returns an error if `cell_size` is out of range or if encoding fails.
///
/// # Example
/// ```
/// use ic_export::render_base64;
/// let b64 = render_base64(b"", 10).unwrap();
/// assert!(b64.starts_with("iVBORw0KGgo"));
/// ```
pub fn render_base64(data: &[u8], cell_size: u32) -> Result<String, ExportError> {
    let png = render_bytes(data, cell_size)?;
    Ok(STANDARD.encode(png))
}

/// Écrit le PNG dans `path`, en créant ou tronquant le fichier.
///
/// Encoding completes before the file is opened: a failed render never
/// leaves a file behind.
///
/// # Errors
/// Returns an error if rendering or encoding fails, or if the destination
/// cannot be written.
///
/// # Example
/// ```no_run
/// use ic_export::render_file;
/// use std::path::Path;
/// render_file(b"alice", 16, Path::new("alice.png")).unwrap();
/// ```
pub fn render_file(data: &[u8], cell_size: u32, path: &Path) -> Result<(), ExportError> {
    let png = render_bytes(data, cell_size)?;
    std::fs::write(path, &png).map_err(|source| ExportError::Storage {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("{} octets écrits dans {}", png.len(), path.display());
    Ok(())
}
