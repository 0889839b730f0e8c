use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use ocr_upload::{cli, client, config, error, report, scanner};
use ocr_upload_common::{select_images, BatchOutcome, ResultsPanel, UploadSession};
use cli::{Cli, Commands};
use client::UploadClient;
use config::Config;
use error::{UploadCliError, Result};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let config = Config::load()?;

    match cli.command {
        Commands::Upload { paths, endpoint, recursive, save_dir, json } => {
            let endpoint = endpoint.unwrap_or_else(|| config.effective_endpoint());
            run_upload(&paths, endpoint, config.timeout(), recursive, save_dir, json).await?;
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = config;
            let changed = set_endpoint.is_some() || set_timeout.is_some();

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  実際の送信先: {}", config.effective_endpoint());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

async fn run_upload(
    paths: &[PathBuf],
    endpoint: String,
    timeout: Duration,
    recursive: bool,
    save_dir: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let files = scanner::collect_files(paths, recursive)?;
    let selection = select_images(files);
    for name in &selection.skipped {
        warn!("画像ではないためスキップ: {}", name);
    }

    let mut session = UploadSession::new();
    let batch = session.begin(selection)?;
    let client = UploadClient::new(endpoint, timeout)?;
    let form = UploadClient::build_form(&batch).await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{}枚を送信中... ({})", batch.len(), client.endpoint()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.send(form).await;
    spinner.finish_and_clear();

    if json {
        if let Ok(BatchOutcome::Results(results)) = &outcome {
            println!("{}", serde_json::to_string_pretty(results)?);
        }
    }

    session.finish(outcome);

    if !json || !matches!(session.panel(), ResultsPanel::Items(_)) {
        report::render_panel(session.panel(), &mut std::io::stdout())?;
    }

    match session.panel() {
        ResultsPanel::Items(views) => {
            if let Some(dir) = save_dir {
                let saved = report::save_texts(views, &dir)?;
                println!("✔ {}件のテキストを保存: {}", saved.len(), dir.display());
            }
            Ok(())
        }
        ResultsPanel::Failed(message) => Err(UploadCliError::BatchFailed(message.clone())),
        ResultsPanel::NoResults | ResultsPanel::Hidden => Ok(()),
    }
}
