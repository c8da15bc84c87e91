use std::fs::File;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use fakereal::classifier::{Classifier, HttpClassifier};
use fakereal::core::config;
use fakereal::core::state::App;
use fakereal::{oneshot, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "fakereal", about = "Fake news detector client")]
struct Args {
    /// Classification service root, e.g. http://localhost:8000
    #[arg(short, long)]
    base_url: Option<String>,

    /// Classify this text once, print the result and exit
    #[arg(short, long)]
    text: Option<String>,

    /// Log level for the log file (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config file: {e}");
        config::FakeRealConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        config::env_base_url(),
        args.base_url.as_deref(),
        args.log_level.as_deref(),
    );

    // File logger: stdout belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("FakeReal starting up against {}", resolved.base_url);

    let classifier: Arc<dyn Classifier> = Arc::new(HttpClassifier::new(resolved.base_url));

    match args.text {
        Some(text) => {
            let mut app = App::new(classifier);
            match oneshot::run_once(&mut app, text).await {
                Some(result) => {
                    for line in oneshot::summary_lines(result) {
                        println!("{line}");
                    }
                }
                None => eprintln!("Nothing to classify: --text was empty"),
            }
            Ok(())
        }
        None => tui::run(classifier),
    }
}
