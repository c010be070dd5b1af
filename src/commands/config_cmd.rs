use clap::{Args, Subcommand, ValueEnum};

use crate::config::Config;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
                    OutputFormat::Text => print!("{}", render_text(config)),
                }
                Ok(())
            }
        }
    }
}

fn render_text(config: &Config) -> String {
    let mut out = String::from("Configuration\n=============\n\n");

    match &config.config_file {
        Some(path) => out.push_str(&format!("Config file: {}\n\n", path.display())),
        None => out.push_str(&format!(
            "Config file: {} (not found)\n\n",
            Config::default_config_path().display()
        )),
    }

    let entries = [
        ("base_url", config.base_url.value.clone(), &config.base_url.source),
        (
            "list_template",
            config.list_template.value.display().to_string(),
            &config.list_template.source,
        ),
        (
            "detail_template",
            config.detail_template.value.display().to_string(),
            &config.detail_template.source,
        ),
        (
            "json_output",
            config.json_output.value.display().to_string(),
            &config.json_output.source,
        ),
        (
            "csv_output",
            config.csv_output.value.display().to_string(),
            &config.csv_output.source,
        ),
        (
            "delimiter",
            format!("'{}'", config.delimiter.value),
            &config.delimiter.source,
        ),
    ];

    for (key, value, source) in entries {
        out.push_str(&format!("{}: {}\n  source: {}\n\n", key, value, source));
    }

    out
}
