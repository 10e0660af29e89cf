use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largeur de grille par défaut, en caractères.
pub const DEFAULT_WIDTH: u32 = 64;
/// Hauteur de grille par défaut, en caractères.
pub const DEFAULT_HEIGHT: u32 = 32;

/// Destination du rendu.
///
/// # Example
/// ```
/// use gg_core::config::OutputKind;
/// let kind: OutputKind = "png".parse().unwrap();
/// assert_eq!(kind, OutputKind::Png);
/// assert_eq!(kind.file_name(), Some("output.png"));
/// assert!("jpg".parse::<OutputKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Texte brut sur la sortie standard.
    #[default]
    Stdout,
    /// Rendu bitmap encodé en PNG.
    Png,
    /// Texte brut dans un fichier.
    Txt,
}

impl OutputKind {
    /// Nom du fichier produit, `None` pour la console.
    #[must_use]
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            Self::Stdout => None,
            Self::Png => Some("output.png"),
            Self::Txt => Some("output.txt"),
        }
    }

    /// Chemin du fichier produit dans `dir`, `None` pour la console.
    #[must_use]
    pub fn output_path(self, dir: &Path) -> Option<PathBuf> {
        self.file_name().map(|name| dir.join(name))
    }
}

impl FromStr for OutputKind {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(Self::Stdout),
            "png" => Ok(Self::Png),
            "txt" => Ok(Self::Txt),
            other => Err(CoreError::Config(format!(
                "sortie inconnue '{other}' (attendu : stdout, png, txt)"
            ))),
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stdout => "stdout",
            Self::Png => "png",
            Self::Txt => "txt",
        })
    }
}

/// Configuration complète d'une exécution.
///
/// # Example
/// ```
/// use gg_core::config::{OutputKind, RunConfig};
/// let config = RunConfig::default();
/// assert_eq!((config.width, config.height), (64, 32));
/// assert_eq!(config.output, OutputKind::Stdout);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Image source. Obligatoire avant l'exécution.
    pub input: Option<PathBuf>,
    /// Largeur de la grille de caractères.
    pub width: u32,
    /// Hauteur de la grille de caractères.
    pub height: u32,
    /// Destination du rendu.
    pub output: OutputKind,
    /// Répertoire recevant `output.txt` / `output.png`.
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output: OutputKind::Stdout,
            output_dir: PathBuf::from("."),
        }
    }
}

impl RunConfig {
    /// Vérifie que la configuration est exécutable et retourne le chemin d'entrée.
    ///
    /// # Errors
    /// `CoreError::Config` if no input is set, `CoreError::InvalidDimensions`
    /// if either grid dimension is zero.
    ///
    /// # Example
    /// ```
    /// use gg_core::config::RunConfig;
    /// let mut config = RunConfig::default();
    /// assert!(config.validate().is_err());
    /// config.input = Some("photo.jpg".into());
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> std::result::Result<&Path, CoreError> {
        let input = self
            .input
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| CoreError::Config("aucune image fournie (-i)".into()))?;
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(input)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    run: Option<RunSection>,
}

/// Run section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RunSection {
    input: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
    output: Option<String>,
    output_dir: Option<PathBuf>,
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the document is not valid TOML or names an unknown output.
///
/// # Example
/// ```
/// use gg_core::config::{parse_config, OutputKind};
/// let config = parse_config("[run]\nwidth = 80\noutput = \"txt\"\n").unwrap();
/// assert_eq!(config.width, 80);
/// assert_eq!(config.height, 32);
/// assert_eq!(config.output, OutputKind::Txt);
/// ```
pub fn parse_config(content: &str) -> Result<RunConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let mut config = RunConfig::default();

    let Some(r) = file.run else {
        return Ok(config);
    };
    if let Some(v) = r.input {
        config.input = Some(v);
    }
    if let Some(v) = r.width {
        config.width = v;
    }
    if let Some(v) = r.height {
        config.height = v;
    }
    if let Some(v) = r.output {
        config.output = v.parse()?;
    }
    if let Some(v) = r.output_dir {
        config.output_dir = v;
    }
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use gg_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("glyphgrid.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), RunConfig::default());
    }

    #[test]
    fn partial_section_overrides_only_given_fields() {
        let config = parse_config("[run]\nheight = 10\noutput_dir = \"out\"\n").unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, 10);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.output, OutputKind::Stdout);
    }

    #[test]
    fn unknown_output_is_rejected() {
        let err = parse_config("[run]\noutput = \"jpg\"\n").unwrap_err();
        assert!(err.to_string().contains("jpg"), "{err}");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(parse_config("[run]\ncolour = true\n").is_err());
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let config = RunConfig {
            input: Some("a.png".into()),
            width: 0,
            ..RunConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidDimensions { width: 0, height: 32 })
        ));
    }

    #[test]
    fn validate_rejects_empty_input() {
        let config = RunConfig {
            input: Some(PathBuf::new()),
            ..RunConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[run]\nwidth = 120\noutput = \"png\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.width, 120);
        assert_eq!(config.output, OutputKind::Png);
    }

    #[test]
    fn load_config_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn output_path_joins_dir() {
        let dir = Path::new("/tmp/x");
        assert_eq!(OutputKind::Stdout.output_path(dir), None);
        assert_eq!(
            OutputKind::Txt.output_path(dir),
            Some(PathBuf::from("/tmp/x/output.txt"))
        );
    }
}
