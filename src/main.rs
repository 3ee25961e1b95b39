/// Render the initialization script for a widget configuration file
///
/// Usage: widget-script <WIDGET_JSON> [--localization FILE] [--jquery kendoUpload]

use clap::Parser;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use widget_script::config::{ScriptOptions, WidgetConfig};
use widget_script::serializer::traits::{
    DefaultLocalization, LocalizationProvider, PatternUrlResolver, StaticLocalization,
};
use widget_script::{ScriptError, Serializer};

#[derive(Debug, Parser)]
#[command(name = "widget-script", version, about = "Render widget initialization scripts")]
struct Cli {
    /// Widget configuration (JSON)
    widget: PathBuf,

    /// Localized messages: {"isDefault": false, "messages": {...}}
    #[arg(short, long)]
    localization: Option<PathBuf>,

    /// URL pattern for save/remove actions
    #[arg(long, default_value = "{controller}/{action}")]
    url_pattern: String,

    /// Function called with the element selector
    #[arg(long, default_value = "initialize", conflicts_with = "jquery")]
    function: String,

    /// Emit a jQuery plugin call instead, e.g. --jquery kendoUpload
    #[arg(long, value_name = "PLUGIN")]
    jquery: Option<String>,

    /// Write the script here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn script_options(&self) -> ScriptOptions {
        match &self.jquery {
            Some(plugin) => ScriptOptions::jquery_plugin(plugin.clone()),
            None => ScriptOptions::function(self.function.clone()),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ScriptError> {
    let text = fs::read_to_string(path).map_err(|e| {
        ScriptError::config(format!("Failed to read '{}'", path.display()), vec![e.to_string()])
    })?;
    serde_json::from_str(&text).map_err(|e| {
        ScriptError::config(format!("Failed to parse '{}'", path.display()), vec![e.to_string()])
    })
}

fn render(cli: &Cli) -> Result<String, ScriptError> {
    let widget: WidgetConfig = read_json(&cli.widget)?;
    debug!("Loaded widget '{}' from {}", widget.name, cli.widget.display());

    let static_localization = cli
        .localization
        .as_deref()
        .map(read_json::<StaticLocalization>)
        .transpose()?;
    let localization: &dyn LocalizationProvider = match &static_localization {
        Some(provider) => provider,
        None => &DefaultLocalization,
    };

    let urls = PatternUrlResolver::new(cli.url_pattern.clone());
    Serializer::new(&urls, localization)
        .with_options(cli.script_options())
        .render(&widget)
}

fn run(cli: &Cli) -> Result<(), ScriptError> {
    let script = render(cli)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", script))?;
            info!("Wrote initialization script to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", script)?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}
