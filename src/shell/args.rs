use std::path::PathBuf;

use clap::Parser;

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(
    name = "bst-shell",
    version,
    about = "An interactive binary search tree",
    long_about = "bst-shell keeps a binary search tree of whole numbers and lets you insert, delete,\nupdate, list and draw its values from a menu."
)]
pub struct CliArgs {
    /// Settings file path
    #[arg(short, long, default_value = "bst.toml")]
    pub config: PathBuf,

    /// Write the default settings to the settings path and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Log level (overrides the settings file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also save an SVG drawing here whenever the tree is shown
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Values to insert before the menu starts
    #[arg(value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Lets command line flags override loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(level) = &self.log_level {
            settings.logging.level = level.to_lowercase();
        }
        if self.no_color {
            settings.shell.color = false;
        }
        if let Some(svg) = &self.svg {
            settings.visualizer.svg_path = Some(svg.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_command() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn values_accept_commas_and_negatives() {
        let args = CliArgs::try_parse_from(["bst-shell", "5,3,8", "-1", "4"]).unwrap();

        assert_eq!(args.values, [5, 3, 8, -1, 4]);
        assert_eq!(args.config, PathBuf::from("bst.toml"));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert!(CliArgs::try_parse_from(["bst-shell", "five"]).is_err());
    }

    #[test]
    fn flags_override_settings() {
        let args = CliArgs::try_parse_from([
            "bst-shell",
            "--no-color",
            "--log-level",
            "DEBUG",
            "--svg",
            "tree.svg",
        ])
        .unwrap();
        let mut settings = Settings::default();
        args.apply(&mut settings);

        assert!(!settings.shell.color);
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.visualizer.svg_path, Some(PathBuf::from("tree.svg")));
    }
}
