//! # consilium-demo
//!
//! Boots the engine over the demo dataset and plays a short session
//! against it:
//! - likes and comments on a feed case
//! - a chat opened twice with the same colleague
//! - an image and a document sent through the active thread
//!
//! The merged feed and thread list are printed as JSON at the end.

use tracing::info;

use consilium_client::{init_tracing, ClientConfig, Engine, PendingAttachment};
use consilium_shared::constants::APP_NAME;
use consilium_shared::{CaseId, UserId};
use consilium_store::seed::demo_base_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    init_tracing();
    info!("Starting {APP_NAME} demo v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration and base data
    // -----------------------------------------------------------------------
    let config = ClientConfig::from_env();
    info!(?config, "Loaded configuration");
    let max_bytes = config.max_attachment_bytes;

    let mut engine = Engine::new(demo_base_store(), config);
    let mut events = engine.subscribe();

    // -----------------------------------------------------------------------
    // 3. Feed activity
    // -----------------------------------------------------------------------
    let case_id = CaseId(1);
    for _ in 0..3 {
        engine.record_like(case_id)?;
    }
    engine.open_case_detail(case_id);
    engine.comment_on_active_case("Agree, anti-CCP first.")?;
    engine.close_case_detail();

    // -----------------------------------------------------------------------
    // 4. Chat activity
    // -----------------------------------------------------------------------
    let surgeon = UserId(6);
    let thread = engine
        .open_thread_with_user(surgeon)
        .ok_or_else(|| anyhow::anyhow!("user {surgeon} is not in the directory"))?;
    engine.send_to_active("Hello, could you review a case?")?;

    let reopened = engine
        .open_thread_with_user(surgeon)
        .ok_or_else(|| anyhow::anyhow!("user {surgeon} is not in the directory"))?;
    anyhow::ensure!(thread == reopened, "reopening a chat must reuse the thread");
    engine.send_to_active("Sending the imaging now.")?;

    let scan = PendingAttachment::read_from(&b"demo-image"[..], "ct-scan.png", "image/png", max_bytes).await?;
    engine.send_attachment_to_active(scan)?;
    let report =
        PendingAttachment::read_from(&b"demo-report"[..], "discharge.pdf", "application/pdf", max_bytes)
            .await?;
    engine.send_attachment_to_active(report)?;

    // -----------------------------------------------------------------------
    // 5. Render
    // -----------------------------------------------------------------------
    let mut published = 0usize;
    while events.try_recv().is_ok() {
        published += 1;
    }
    info!(published, "Engine events published");

    println!("{}", serde_json::to_string_pretty(&engine.feed())?);
    println!("{}", serde_json::to_string_pretty(&engine.thread_summaries())?);
    println!("{}", serde_json::to_string_pretty(&engine.active_message_views())?);

    Ok(())
}
