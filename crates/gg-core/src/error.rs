use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the glyphgrid pipeline.
///
/// Every variant is terminal: the binary reports it and exits with status 1.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Input image missing, unreadable or in an unrecognized format.
    #[error("Impossible de décoder {path} : {source}")]
    Decode {
        /// Path of the input image.
        path: PathBuf,
        /// Underlying decoder or I/O error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Destination file cannot be created or written.
    #[error("Écriture impossible vers {path} : {source}")]
    Write {
        /// Destination path, `-` for standard output.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Image serialization failure.
    #[error("Encodage impossible de {path} : {message}")]
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Encoder message.
        message: String,
    },
}
