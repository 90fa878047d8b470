use crate::error::Result;
use crate::io::config::Config;
use clap::Parser;
use log::info;

/// Shades a mesh with the viewer's vertex stage.
#[derive(Parser, Debug, Default)]
#[command(name = "vertex-stage")]
#[command(about = "Per-vertex shading for a 3D geometry viewer")]
pub struct Cli {
    /// Config file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// OBJ file to shade (overrides [object].path)
    #[arg(long, value_name = "FILE")]
    pub obj: Option<String>,

    /// Write a point-splat preview image (overrides [output].image)
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<String>,

    /// Print every shaded vertex
    #[arg(long)]
    pub dump: bool,

    /// Force the highlight overlay on
    #[arg(long)]
    pub highlight: bool,

    /// Force lighting on
    #[arg(long)]
    pub lighting: bool,
}

impl Cli {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => {
                info!("No config file given, using defaults");
                Config::default()
            }
        };

        if let Some(obj) = &self.obj {
            config.object.path = Some(obj.clone());
        }
        if let Some(output) = &self.output {
            config.output.image = Some(output.clone());
        }
        config.output.dump |= self.dump;
        config.draw.highlight |= self.highlight;
        config.draw.lighting |= self.lighting;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "vertex-stage",
            "--obj",
            "bunny.obj",
            "--output",
            "bunny.png",
            "--highlight",
            "--lighting",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.object.path.as_deref(), Some("bunny.obj"));
        assert_eq!(config.output.image.as_deref(), Some("bunny.png"));
        assert!(config.draw.highlight);
        assert!(config.draw.lighting);
        assert!(!config.output.dump);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["vertex-stage", "--config", "no/such/file.toml"]);
        assert!(cli.resolve_config().is_err());
    }
}
