use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use gg_core::config::{RunConfig, load_config};

/// glyphgrid — convertit une image en art ASCII.
///
/// `-h` is the grid height; help is only available as `--help`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// Chemin vers l'image source (PNG, JPEG, BMP, GIF).
    #[arg(short = 'i', value_name = "IMAGE")]
    pub input: Option<PathBuf>,

    /// Sortie : stdout, png ou txt [défaut : stdout].
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Largeur de la grille en caractères [défaut : 64].
    #[arg(short = 'w', value_name = "WIDTH")]
    pub width: Option<u32>,

    /// Hauteur de la grille en caractères [défaut : 32].
    #[arg(short = 'h', value_name = "HEIGHT")]
    pub height: Option<u32>,

    /// Fichier de configuration TOML (section [run]).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Répertoire recevant output.txt / output.png [défaut : .].
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Afficher l'aide.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Resolve the run configuration: CLI flags override the config file,
    /// which overrides the built-in defaults.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be parsed or `-o` names an
    /// unknown sink.
    pub fn resolve_config(&self) -> Result<RunConfig> {
        let mut config = match self.config {
            Some(ref path) if path.exists() => load_config(path)?,
            Some(ref path) => {
                log::warn!(
                    "Config introuvable : {}. Utilisation des défauts.",
                    path.display()
                );
                RunConfig::default()
            }
            None => RunConfig::default(),
        };

        if let Some(ref input) = self.input {
            config.input = Some(input.clone());
        }
        if let Some(ref output) = self.output {
            config.output = output.parse()?;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(ref dir) = self.out_dir {
            config.output_dir = dir.clone();
        }
        Ok(config)
    }
}
