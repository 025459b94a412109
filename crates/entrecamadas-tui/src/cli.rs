use clap::Parser;
use std::path::PathBuf;

use entrecamadas_core::AppConfig;

/// Write invisible messages, let one become visible against the cosmos
#[derive(Debug, Parser)]
#[command(name = "entrecamadas", version)]
pub struct Args {
    /// Directory holding messages, config.json and the log
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Cosmos frames per second (1-60)
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Disable narration
    #[arg(long)]
    pub no_speech: bool,

    /// Seed for the starfield layout
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl Args {
    /// Flags win over the config file
    pub fn apply(&self, config: AppConfig) -> AppConfig {
        AppConfig {
            fps: self.fps.unwrap_or(config.fps),
            ..config
        }
        .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["entrecamadas"]).unwrap();
        assert!(args.data_dir.is_none());
        assert!(!args.no_speech);
        assert_eq!(args.apply(AppConfig::default()).fps, 20);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "entrecamadas",
            "--data-dir",
            "/tmp/journal",
            "--fps",
            "90",
            "--no-speech",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/journal")));
        assert_eq!(args.seed, Some(42));
        assert!(args.no_speech);
        // Clamped to the supported range
        assert_eq!(args.apply(AppConfig::default()).fps, 60);
    }
}
