use std::path::PathBuf;

use clap::Parser;

/// identicon — empreintes visuelles 5×5 dérivées d'un hash MD5.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Textes à transformer en identicon (un fichier par entrée).
    pub inputs: Vec<String>,

    /// Fichier d'entrées, une par ligne, rendues en parallèle.
    #[arg(long)]
    pub batch: Option<PathBuf>,

    /// Taille d'une cellule en pixels (canvas = 6 × taille).
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Chemin du PNG de sortie. Une seule entrée uniquement.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Dossier de sortie pour les noms automatiques `<digest>.png`.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Afficher le PNG en base64 au lieu d'écrire un fichier.
    #[arg(long, default_value_t = false)]
    pub base64: bool,

    /// Fichier de configuration TOML.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Résumé JSON par entrée sur stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Afficher la grille en texte.
    #[arg(long, default_value_t = false)]
    pub preview: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate the combination of inputs and output flags.
    ///
    /// # Errors
    /// Returns an error if no input is given, or if `--out` is used with
    /// several inputs.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.inputs.is_empty() && self.batch.is_none() {
            anyhow::bail!("Aucune entrée. Passez un texte ou --batch <fichier>.");
        }
        if self.out.is_some() && (self.inputs.len() != 1 || self.batch.is_some()) {
            anyhow::bail!("--out n'accepte qu'une seule entrée, sans --batch.");
        }
        if self.out.is_some() && self.base64 {
            anyhow::bail!("--out et --base64 sont exclusifs.");
        }
        Ok(())
    }
}
