use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::generator::{AdjacencyRule, GeneratorOptions, NumberingScheme, DEFAULT_GRID_SIZE};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub grid_size: usize,
    pub adjacency: AdjacencyRule,
    pub numbering: NumberingScheme,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Write `<name>.crossword.json` files here instead of printing to stdout
    pub dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let generator = GeneratorConfig {
            grid_size: lookup("CROSSWORD_GRID_SIZE")
                .unwrap_or_else(|| DEFAULT_GRID_SIZE.to_string())
                .parse()
                .context("CROSSWORD_GRID_SIZE must be a number")?,
            adjacency: lookup("CROSSWORD_ADJACENCY")
                .map(|value| value.parse::<AdjacencyRule>().map_err(|e: String| anyhow!(e)))
                .transpose()
                .context("CROSSWORD_ADJACENCY must be `strict` or `allow-crossings`")?
                .unwrap_or_default(),
            numbering: lookup("CROSSWORD_NUMBERING")
                .map(|value| value.parse::<NumberingScheme>().map_err(|e: String| anyhow!(e)))
                .transpose()
                .context("CROSSWORD_NUMBERING must be `placement` or `grid`")?
                .unwrap_or_default(),
        };

        let output = OutputConfig {
            dir: lookup("CROSSWORD_OUTPUT_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        };

        Ok(Config { generator, output })
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            grid_size: self.generator.grid_size,
            adjacency: self.generator.adjacency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.generator.grid_size, 15);
        assert_eq!(config.generator.adjacency, AdjacencyRule::Strict);
        assert_eq!(config.generator.numbering, NumberingScheme::Placement);
        assert!(config.output.dir.is_none());
        assert_eq!(config.generator_options(), GeneratorOptions::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CROSSWORD_GRID_SIZE", "21"),
            ("CROSSWORD_ADJACENCY", "allow-crossings"),
            ("CROSSWORD_NUMBERING", "grid"),
            ("CROSSWORD_OUTPUT_DIR", "out"),
        ])
        .unwrap();

        assert_eq!(config.generator.grid_size, 21);
        assert_eq!(config.generator.adjacency, AdjacencyRule::AllowCrossings);
        assert_eq!(config.generator.numbering, NumberingScheme::Grid);
        assert_eq!(config.output.dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("CROSSWORD_GRID_SIZE", "large")]).is_err());
        assert!(config_from(&[("CROSSWORD_ADJACENCY", "loose")]).is_err());
        assert!(config_from(&[("CROSSWORD_NUMBERING", "random")]).is_err());
    }
}
