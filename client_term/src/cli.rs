//! Command line, config file and logging setup shared by both binaries

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, GameRng};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// TOML file overriding the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Seed for the serve angle RNG; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
    /// Write logs here instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Load the config file (if any) and apply command line overrides
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::new(),
        };
        if self.fps.is_some() {
            config.target_fps = self.fps;
        }
        Ok(config)
    }

    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Initialize env_logger. Logs to stderr would garble the alternate screen,
/// so without `--log-file` only warnings and worse are useful.
pub fn init_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    );
    builder.format_timestamp_millis();
    if let Some(path) = &args.log_file {
        let file =
            File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("initializing logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let args = Args::parse_from(["pong"]);
        assert_eq!(args.log_level, "warn");
        assert!(args.config.is_none());
        assert_eq!(args.config().unwrap().fps(), 60);
    }

    #[test]
    fn fps_flag_overrides_config() {
        let args = Args::parse_from(["pong", "--fps", "30", "--seed", "7"]);
        assert_eq!(args.config().unwrap().fps(), 30);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let err = load_config(Path::new("/nonexistent/pong.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/pong.toml"));
    }

    #[test]
    fn config_file_is_parsed() {
        let path = std::env::temp_dir().join(format!("pong-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "[pong]\nspeed_step = 50.0\n").unwrap();
        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.pong.speed_step, 50.0);
    }

    #[test]
    fn infinite_ball_spread_is_rejected_on_load() {
        let path = std::env::temp_dir().join(format!("pong-spread-{}.toml", std::process::id()));
        std::fs::write(&path, "[pong]\nball_spread = inf\n").unwrap();
        let result = load_config(&path);
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid config"), "{message}");
        assert!(message.contains("ball_spread"), "{message}");
    }
}
