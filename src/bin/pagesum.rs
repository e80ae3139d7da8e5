use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use pagesum::adapters::extractor::TextSource;
use pagesum::adapters::{CommandClipboard, FileSettingsStore, FileTextExtractor};
use pagesum::ai::GeminiClient;
use pagesum::core::config::AppConfig;
use pagesum::core::models::Theme;
use pagesum::popup::{CopyOutcome, PopupController, ResultView};

#[derive(Parser, Debug)]
#[command(name = "pagesum", version, about = "Summarize article text with Gemini")]
struct Cli {
    /// Settings file holding the API key and theme preference
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a saved page (HTML or plain text); reads stdin without --input
    Summarize {
        /// brief, detailed or bullets; anything else means brief
        #[arg(long, short, default_value = "brief")]
        style: String,

        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Store the Gemini API key
    SetKey { key: String },
    /// Show or toggle the dark mode preference
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Dark Mode On",
        Theme::Light => "Light Mode On",
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    pagesum::setup_logging();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
    if let Some(path) = cli.settings {
        config.settings_path = path;
    }

    let source = match &cli.command {
        Command::Summarize {
            input: Some(path), ..
        } => TextSource::File(path.clone()),
        _ => TextSource::Stdin,
    };

    let mut popup = PopupController::new(
        Box::new(GeminiClient::from_config(&config)),
        Box::new(FileSettingsStore::new(config.settings_path.clone())),
        Box::new(FileSettingsStore::new(config.settings_path.clone())),
        Box::new(FileTextExtractor::new(source)),
        Box::new(CommandClipboard::from_optional(
            config.clipboard_command.as_deref(),
        )),
    );

    match cli.command {
        Command::Summarize { style, copy, .. } => {
            info!("Summarizing with style {}", style);
            match popup.handle_summarize(Some(&style)).await {
                ResultView::Summary(summary) => println!("{summary}"),
                ResultView::Error(message) => {
                    eprintln!("Error: {message}");
                    return Ok(ExitCode::FAILURE);
                }
                ResultView::Empty | ResultView::Loading => {}
            }

            if copy {
                match popup.handle_copy().await {
                    CopyOutcome::Copied => eprintln!("Copied!"),
                    CopyOutcome::NothingToCopy => {}
                    CopyOutcome::Failed(message) => {
                        eprintln!("Error: {message}");
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
        Command::SetKey { key } => {
            popup
                .save_api_key(&key)
                .await
                .context("could not save API key")?;
            println!("API key saved to {}", config.settings_path.display());
        }
        Command::Theme { action } => {
            let theme = match action {
                ThemeAction::Show => popup.load_theme().await,
                ThemeAction::Toggle => {
                    popup.load_theme().await;
                    popup.toggle_theme().await?
                }
            };
            println!("{}", theme_label(theme));
        }
    }

    Ok(ExitCode::SUCCESS)
}
