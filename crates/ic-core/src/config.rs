use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Plus petite taille de cellule lue depuis un fichier de configuration.
pub const MIN_CELL_SIZE: u32 = 1;
/// Plus grande taille de cellule lue depuis un fichier de configuration
/// (canvas de 3072×3072). `--size` n'est pas borné par cette valeur.
pub const MAX_CELL_SIZE: u32 = 512;

/// Format de sortie par défaut de la CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum OutputFormat {
    /// Fichier PNG.
    #[default]
    Png,
    /// PNG encodé en base64 sur stdout.
    Base64,
}

/// Configuration de la CLI. Le pipeline lui-même n'en dépend pas.
///
/// # Example
/// ```
/// use ic_core::config::IconConfig;
/// let config = IconConfig::default();
/// assert_eq!(config.cell_size, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IconConfig {
    /// Côté d'une cellule en pixels.
    pub cell_size: u32,
    pub format: OutputFormat,
    /// Dossier de sortie des PNG sans chemin explicite.
    pub output_dir: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            cell_size: 10,
            format: OutputFormat::Png,
            output_dir: PathBuf::from("."),
        }
    }
}

impl IconConfig {
    /// Clamp numeric fields to their valid ranges.
    pub fn clamp_all(&mut self) {
        let clamped = self.cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        if clamped != self.cell_size {
            log::warn!(
                "cell_size {} hors limites, ramené à {clamped}",
                self.cell_size
            );
            self.cell_size = clamped;
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    icon: Option<IconSection>,
}

#[derive(Deserialize)]
struct IconSection {
    cell_size: Option<u32>,
    format: Option<OutputFormat>,
    output_dir: Option<PathBuf>,
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns an error if the document is not valid TOML for this schema.
///
/// # Example
/// ```
/// use ic_core::config::{parse_config, OutputFormat};
/// let config = parse_config("[icon]\nformat = \"Base64\"").unwrap();
/// assert_eq!(config.format, OutputFormat::Base64);
/// assert_eq!(config.cell_size, 10);
/// ```
pub fn parse_config(content: &str) -> Result<IconConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = IconConfig::default();
    if let Some(section) = file.icon {
        if let Some(v) = section.cell_size {
            config.cell_size = v;
        }
        if let Some(v) = section.format {
            config.format = v;
        }
        if let Some(v) = section.output_dir {
            config.output_dir = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use ic_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("identicon.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<IconConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Configuration invalide dans {}", path.display()))
}
