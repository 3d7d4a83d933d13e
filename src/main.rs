//! Diagnostic binary playing the hosting layer for manual checks

use anyhow::Result;
use tracing::{debug, info, Level};

use chart_embed::config::{validate_settings, SettingsLoader};
use chart_embed::core::types::{EmbedResult, HostContext, HostName};
use chart_embed::embed::plan_render;
use chart_embed::host::resolve;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting chart-embed diagnostics v{}", env!("CARGO_PKG_VERSION"));

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "embed.toml".to_string());
    let settings = SettingsLoader::new(&settings_path).load_or_default();
    info!("Settings source: {}", settings_path);

    // The hosting shell answers the environment query asynchronously
    let context = detect_host_context().await;
    let label = resolve(&context);
    info!("Environment: {} ({})", label, label.description());

    let verdict = validate_settings(&settings);
    debug!(
        "Verdict: valid={} empty={} messages={}",
        verdict.is_valid,
        verdict.is_empty,
        verdict.messages.len()
    );

    let redirect_uri = std::env::var("EMBED_REDIRECT_URI")
        .unwrap_or_else(|_| "http://localhost:4321/workbench.html".to_string());
    let plan = plan_render(&settings, &redirect_uri);
    info!(
        "Render branch: {}",
        if plan.is_chart() { "embed" } else { "notice" }
    );

    report_plan(&plan)?;
    Ok(())
}

/// Obtains the host context the way the hosting shell would
///
/// Stands in for the host SDK query: host name and localhost flag come from
/// the `EMBED_HOST` / `EMBED_LOCALHOST` environment variables.
async fn detect_host_context() -> HostContext {
    let host = std::env::var("EMBED_HOST").ok().map(HostName::from);
    let is_localhost = std::env::var("EMBED_LOCALHOST")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    HostContext { host, is_localhost }
}

/// Prints the render plan as JSON for inspection
fn report_plan(plan: &chart_embed::embed::RenderPlan) -> EmbedResult<()> {
    let rendered = serde_json::to_string_pretty(plan)?;
    println!("{rendered}");
    Ok(())
}
