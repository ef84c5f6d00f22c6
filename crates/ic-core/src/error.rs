use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Cell size of zero, or so large the canvas buffer would overflow.
    #[error("Taille de cellule invalide : {size}")]
    InvalidCellSize {
        /// Requested cell size in pixels.
        size: u32,
    },
}
