mod collect;
mod config;
mod export;
mod sentiment;
mod youtube;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{info, warn};

use sentiment::{SentimentLabel, Stats};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubepulse=info".into()),
        )
        .init();

    info!("Loading configuration...");
    let config = config::AppConfig::load()?;

    let playlist_url = std::env::args().nth(1).unwrap_or_default();

    let client = youtube::YouTubeClient::new(&config.youtube);

    // Progress reporter
    let (progress_tx, mut progress_rx) = mpsc::channel::<collect::Progress>(32);
    let reporter = tokio::spawn(async move {
        while let Some(update) = progress_rx.recv().await {
            info!(
                "Collected {}/{} videos ({:.0}%)",
                update.completed,
                update.total,
                update.fraction() * 100.0
            );
        }
    });

    let collection = collect::collect_playlist(
        &client,
        &playlist_url,
        config.collect.on_video_error,
        Some(progress_tx),
    )
    .await?;
    let _ = reporter.await;

    let Some(collection) = collection else {
        warn!(
            "No playlist id found in {:?}, nothing to do",
            playlist_url
        );
        return Ok(());
    };

    info!(
        "Playlist \"{}\": {} comments collected",
        collection.title,
        collection.records.len()
    );

    info!("Loading sentiment lexicon...");
    let classifier = sentiment::SentimentClassifier::with_vader();
    let scored = classifier.enrich(collection.records);

    let stats = Stats::of(&scored);
    info!(
        "Scored {} comments: {} positive, {} negative, {} neutral",
        stats.total,
        stats.count(SentimentLabel::Positive),
        stats.count(SentimentLabel::Negative),
        stats.count(SentimentLabel::Neutral)
    );

    let rows: Vec<export::ReportRow> = scored.iter().map(export::ReportRow::from).collect();
    let csv = export::render_csv(&rows);
    std::fs::write(&config.export.output_path, csv).with_context(|| {
        format!("Failed to write {}", config.export.output_path.display())
    })?;
    info!("Wrote {}", config.export.output_path.display());

    Ok(())
}
