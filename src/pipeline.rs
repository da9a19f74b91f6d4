use crate::error::Result;
use crate::normalize::normalize;
use crate::sync::SyncClient;
use crate::types::{CanonicalProduct, ProductSource, RawItemData};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// What happened to one item on its way through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemStatus {
    Synced,
    Previewed,
    Failed,
}

/// Outcome of a single item, in input order
#[derive(Debug, Clone, Serialize)]
pub struct ItemOutcome {
    pub index: usize,
    pub title: Option<String>,
    pub affiliate_link: Option<String>,
    pub status: ItemStatus,
    pub error: Option<String>,
}

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub source_name: String,
    pub total_items: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<ItemOutcome>,
}

pub struct Pipeline;

impl Pipeline {
    /// Extract and normalize one raw item
    fn normalize_item(
        source: &dyn ProductSource,
        raw_item: &RawItemData,
    ) -> Result<(CanonicalProduct, String)> {
        let product = source.get_product(raw_item)?;
        let affiliate_link = source.get_affiliate_link(raw_item)?;
        let canonical = normalize(&product, &affiliate_link);

        debug!("Normalized product: {}", canonical.title);
        Ok((canonical, affiliate_link))
    }

    /// Process one item end to end. Failures are captured in the outcome,
    /// never propagated; one bad item must not stop the run.
    async fn process_item(
        source: &dyn ProductSource,
        client: &SyncClient,
        index: usize,
        raw_item: &RawItemData,
        dry_run: bool,
    ) -> ItemOutcome {
        let (canonical, affiliate_link) = match Self::normalize_item(source, raw_item) {
            Ok(pair) => pair,
            Err(e) => {
                return ItemOutcome {
                    index,
                    title: raw_item
                        .get("title")
                        .and_then(|v| v.as_str())
                        .map(String::from),
                    affiliate_link: None,
                    status: ItemStatus::Failed,
                    error: Some(format!("failed to normalize item {index}: {e}")),
                };
            }
        };

        if dry_run {
            return ItemOutcome {
                index,
                title: Some(canonical.title),
                affiliate_link: Some(affiliate_link),
                status: ItemStatus::Previewed,
                error: None,
            };
        }

        match client.sync_product(&canonical).await {
            Ok(_) => ItemOutcome {
                index,
                title: Some(canonical.title),
                affiliate_link: Some(affiliate_link),
                status: ItemStatus::Synced,
                error: None,
            },
            Err(e) => ItemOutcome {
                index,
                title: Some(canonical.title),
                affiliate_link: Some(affiliate_link),
                status: ItemStatus::Failed,
                error: Some(format!("failed to sync item {index}: {e}")),
            },
        }
    }

    /// Run the pipeline for one source: fetch the items, then normalize and
    /// sync each one sequentially, in input order. Each item is attempted
    /// exactly once.
    #[instrument(skip(source, client), fields(source = %source.source_name()))]
    pub async fn run(
        source: &dyn ProductSource,
        client: &SyncClient,
        delay_ms: u64,
        dry_run: bool,
    ) -> Result<PipelineResult> {
        let source_name = source.source_name().to_string();
        info!("🚀 Starting sync pipeline for {}", source_name);
        println!("🚀 Starting sync pipeline for {}", source_name);

        info!("📡 Fetching items from {}...", source_name);
        let raw_items = source.fetch_items().await?;
        info!("✅ Fetched {} raw items", raw_items.len());
        println!("📦 {} items to process", raw_items.len());

        let mut outcomes = Vec::with_capacity(raw_items.len());

        for (i, raw_item) in raw_items.iter().enumerate() {
            let outcome = Self::process_item(source, client, i, raw_item, dry_run).await;

            match &outcome.error {
                None => {
                    let title = outcome.title.as_deref().unwrap_or("(untitled)");
                    info!("Processed item {}: {}", i, title);
                    println!("   ✅ {}", title);
                }
                Some(e) => {
                    error!("Item {} failed: {}", i, e);
                    println!("   ❌ item {}: {}", i, e);
                }
            }
            outcomes.push(outcome);

            if delay_ms > 0 && i + 1 < raw_items.len() {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }

        let succeeded = outcomes
            .iter()
            .filter(|o| o.status != ItemStatus::Failed)
            .count();
        let failed = outcomes.len() - succeeded;

        info!(
            "✅ Processed {} items ({} succeeded, {} failed)",
            outcomes.len(),
            succeeded,
            failed
        );

        Ok(PipelineResult {
            source_name,
            total_items: raw_items.len(),
            succeeded,
            failed,
            outcomes,
        })
    }
}
