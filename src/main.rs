use clap::{Parser, Subcommand};
use tracing::{error, warn};

use vitrine_sync::config::Config;
use vitrine_sync::logging;
use vitrine_sync::normalize::normalize;
use vitrine_sync::pipeline::{Pipeline, PipelineResult};
use vitrine_sync::sources::JsonFileSource;
use vitrine_sync::sync::SyncClient;
use vitrine_sync::types::ProductSource;

#[derive(Parser)]
#[command(name = "vitrine_sync")]
#[command(about = "Vitrine catalog product sync")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize products from an input file and sync them to the catalog
    Sync {
        /// Path to a JSON file with extracted product items
        #[arg(long)]
        input: String,
        /// Normalize and report without POSTing to the catalog
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the canonical payloads for an input file without syncing
    Preview {
        /// Path to a JSON file with extracted product items
        #[arg(long)]
        input: String,
    },
}

fn print_report(result: &PipelineResult) {
    println!("\n📊 Sync results for {}:", result.source_name);
    println!("   Total items: {}", result.total_items);
    println!("   Succeeded: {}", result.succeeded);
    println!("   Failed: {}", result.failed);
    println!(
        "   Finished: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
    );

    let failures: Vec<_> = result
        .outcomes
        .iter()
        .filter(|o| o.error.is_some())
        .collect();
    if !failures.is_empty() {
        warn!("{} items failed during sync run", failures.len());
        println!("\n⚠️  Failures:");
        for outcome in failures {
            println!(
                "   - item {}: {}",
                outcome.index,
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Sync { input, dry_run } => {
            let source = JsonFileSource::new(&input);
            let client = SyncClient::new(&config.sync)?;

            if dry_run {
                println!("🔍 Dry run: nothing will be sent to {}", config.sync.base_url);
            }

            match Pipeline::run(&source, &client, config.sync.delay_ms, dry_run).await {
                Ok(result) => print_report(&result),
                Err(e) => {
                    error!("Pipeline failed: {}", e);
                    println!("❌ Pipeline failed: {}", e);
                }
            }
        }
        Commands::Preview { input } => {
            let source = JsonFileSource::new(&input);
            let raw_items = source.fetch_items().await?;
            println!("📦 {} items in {}", raw_items.len(), input);

            for (i, raw_item) in raw_items.iter().enumerate() {
                let preview = source.get_product(raw_item).and_then(|product| {
                    let link = source.get_affiliate_link(raw_item)?;
                    Ok(normalize(&product, &link))
                });

                println!("\n--- item {} ---", i);
                match preview {
                    Ok(canonical) => println!("{}", serde_json::to_string_pretty(&canonical)?),
                    Err(e) => {
                        warn!("Skipping malformed item {}: {}", i, e);
                        println!("❌ {}", e);
                    }
                }
            }
        }
    }
    Ok(())
}
