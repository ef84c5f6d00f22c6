use anyhow::Result;
use clap::Parser;
use ic_core::config::{IconConfig, OutputFormat, load_config};

pub mod batch;
pub mod cli;
pub mod job;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider les entrées
    cli.validate()?;

    // 4. Charger la config, puis appliquer les overrides CLI
    let config = resolve_config(&cli)?;
    log::debug!("Configuration effective : {config:?}");

    // 5. Rendu
    let summaries = if let Some(list) = cli.batch.as_deref() {
        let mut inputs = batch::read_inputs(list)?;
        inputs.extend(cli.inputs.iter().cloned());
        batch::run_batch(&inputs, &config)?
    } else {
        cli.inputs
            .iter()
            .map(|input| job::render(input, cli.out.as_deref(), &config))
            .collect::<Result<Vec<_>>>()?
    };

    // 6. Sortie
    for summary in &summaries {
        report(&cli, summary)?;
    }
    Ok(())
}

fn resolve_config(cli: &cli::Cli) -> Result<IconConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => IconConfig::default(),
    };

    if let Some(size) = cli.size {
        config.cell_size = ic_render::validate_cell_size(size)?;
    }
    if cli.base64 {
        config.format = OutputFormat::Base64;
    }
    if let Some(dir) = &cli.out_dir {
        config.output_dir.clone_from(dir);
    }
    if cli.out.is_some() && config.format == OutputFormat::Base64 {
        anyhow::bail!("--out est incompatible avec le format Base64 de la configuration.");
    }
    Ok(config)
}

fn report(cli: &cli::Cli, summary: &job::Summary) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string(summary)?);
        return Ok(());
    }

    if cli.preview {
        println!("{} {}", summary.digest, summary.color);
        for line in &summary.matrix {
            println!("  {line}");
        }
    }
    if let Some(b64) = &summary.base64 {
        println!("{b64}");
    }
    if let Some(path) = &summary.output {
        log::info!("{} → {}", summary.input, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> cli::Cli {
        cli::Cli::try_parse_from(std::iter::once("identicon").chain(args.iter().copied())).unwrap()
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn out_conflicts_with_base64_from_config() {
        let file = config_file("[icon]\nformat = \"Base64\"");
        let path = file.path().to_str().unwrap();
        let cli = parse(&["alice", "--out", "alice.png", "--config", path]);
        assert!(cli.validate().is_ok());
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn out_with_png_config_is_accepted() {
        let file = config_file("[icon]\nformat = \"Png\"");
        let path = file.path().to_str().unwrap();
        let cli = parse(&["alice", "--out", "alice.png", "--config", path]);
        assert_eq!(resolve_config(&cli).unwrap().format, OutputFormat::Png);
    }

    #[test]
    fn size_flag_overrides_config() {
        let file = config_file("[icon]\ncell_size = 4");
        let path = file.path().to_str().unwrap();
        let cli = parse(&["alice", "--size", "600", "--config", path]);
        assert_eq!(resolve_config(&cli).unwrap().cell_size, 600);
        assert!(resolve_config(&parse(&["alice", "--size", "0"])).is_err());
    }
}
