use anyhow::anyhow;
use itemboard_api_models::HealthResponse;

use crate::cli::OutputFormat;
use crate::client::{AppContext, CliError, CliResult, classify_problem};
use crate::output::render_health;

const HEALTH_PATH: &str = "/api/health";

pub(crate) async fn handle_health(ctx: &AppContext, output: OutputFormat) -> CliResult<()> {
    let url = ctx.endpoint(HEALTH_PATH);
    tracing::debug!(%url, "probing health");

    let response = ctx
        .client
        .get(url)
        .send()
        .await
        .map_err(|err| CliError::failure(anyhow!("request to {HEALTH_PATH} failed: {err}")))?;

    if response.status().is_success() {
        let bytes = response
            .bytes()
            .await
            .map_err(|err| CliError::failure(anyhow!("failed to read health response: {err}")))?;
        let health = serde_json::from_slice::<HealthResponse>(&bytes).unwrap_or_default();
        render_health(&health, output)
    } else {
        Err(classify_problem(response).await)
    }
}
