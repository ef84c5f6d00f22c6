use std::path::PathBuf;

use ic_core::CoreError;
use thiserror::Error;

/// Errors originating from the export module.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Paramètres de rendu refusés par le pipeline.
    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    /// Canvas whose buffer does not match its dimensions.
    #[error("Canvas malformé : {width}×{height} pour {len} octets")]
    MalformedCanvas {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
        /// Actual buffer length.
        len: usize,
    },

    /// PNG encoder failure.
    #[error("Erreur d'encodage PNG : {0}")]
    Encoding(#[source] image::ImageError),

    /// PNG decoder failure.
    #[error("Erreur de décodage PNG : {0}")]
    Decoding(#[source] image::ImageError),

    /// Destination could not be written.
    #[error("Écriture impossible dans {}: {source}", .path.display())]
    Storage {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
