use std::path::Path;

use anyhow::{Context, Result};
use ic_core::config::IconConfig;
use rayon::prelude::*;

use crate::job::{self, Summary};

/// Lit un fichier d'entrées, une par ligne. Lignes vides ignorées.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_inputs(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    Ok(parse_inputs(&content))
}

fn parse_inputs(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Rend toutes les entrées en parallèle. Chaque rendu est indépendant.
///
/// Les résultats gardent l'ordre des entrées. Échoue si au moins une entrée a
/// échoué, après avoir journalisé chaque erreur.
///
/// # Errors
/// Returns an error naming the number of failed inputs.
pub fn run_batch(inputs: &[String], config: &IconConfig) -> Result<Vec<Summary>> {
    log::info!("Rendu par lots de {} entrées", inputs.len());

    let results: Vec<Result<Summary>> = inputs
        .par_iter()
        .map(|input| job::render(input, None, config))
        .collect();

    let mut summaries = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                failures += 1;
                log::error!("{input:?} : {e:#}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} entrée(s) sur {} en échec", inputs.len());
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines() {
        assert_eq!(parse_inputs("alice\r\n\nbob\n"), ["alice", "bob"]);
    }

    #[test]
    fn renders_every_line_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("names.txt");
        std::fs::write(&list, "alice\nbob\ncarol\n").unwrap();
        let config = IconConfig {
            cell_size: 2,
            output_dir: dir.path().to_path_buf(),
            ..IconConfig::default()
        };

        let inputs = read_inputs(&list).unwrap();
        let summaries = run_batch(&inputs, &config).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.input.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
        for s in &summaries {
            assert!(s.output.as_ref().is_some_and(|p| p.exists()));
        }
    }

    #[test]
    fn failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconConfig {
            output_dir: dir.path().join("absent"),
            ..IconConfig::default()
        };
        assert!(run_batch(&["x".to_owned()], &config).is_err());
    }
}
