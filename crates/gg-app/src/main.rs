use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        // --help et --version sortent en 0 ; toute autre erreur de syntaxe en 1.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // 2. Initialiser le logging (stderr, la sortie standard reste au rendu)
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre la config : flags > fichier > défauts
    let config = cli.resolve_config()?;
    log::debug!("Config résolue : {config:?}");

    // 4. Pipeline
    if let Some(path) = pipeline::run(&config)? {
        log::info!("Sortie : {}", path.display());
    }
    Ok(())
}
