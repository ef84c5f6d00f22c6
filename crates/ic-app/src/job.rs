use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ic_core::config::{IconConfig, OutputFormat};
use ic_core::{Digest, Identicon, Rgba};
use serde::Serialize;

/// Résumé d'un rendu, sérialisé par `--json`.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub input: String,
    pub digest: Digest,
    pub color: String,
    pub rgba: Rgba,
    pub matrix: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
}

/// Chemin automatique `<dir>/<digest>.png`.
#[must_use]
pub fn default_output(dir: &Path, digest: &Digest) -> PathBuf {
    dir.join(format!("{digest}.png"))
}

/// Rend une entrée selon la configuration : fichier PNG ou base64.
///
/// # Errors
/// Returns an error if rendering, encoding or writing fails.
pub fn render(input: &str, out: Option<&Path>, config: &IconConfig) -> Result<Summary> {
    let icon = Identicon::from_data(input.as_bytes());

    let (output, base64) = match config.format {
        OutputFormat::Base64 => {
            let b64 = ic_export::render_base64(input.as_bytes(), config.cell_size)
                .with_context(|| format!("Rendu base64 impossible pour {input:?}"))?;
            (None, Some(b64))
        }
        OutputFormat::Png => {
            let path = out.map_or_else(
                || default_output(&config.output_dir, &icon.digest),
                Path::to_path_buf,
            );
            ic_export::render_file(input.as_bytes(), config.cell_size, &path)
                .with_context(|| format!("Rendu PNG impossible pour {input:?}"))?;
            (Some(path), None)
        }
    };

    Ok(Summary {
        input: input.to_owned(),
        digest: icon.digest,
        color: icon.color.to_hex(),
        rgba: icon.color,
        matrix: icon
            .matrix
            .to_ascii('#', '.')
            .lines()
            .map(str::to_owned)
            .collect(),
        output,
        base64,
    })
}
