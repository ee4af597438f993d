//! REST calls against the push report endpoints.

use std::time::Duration;

use once_cell::sync::Lazy;
use tracing::debug;

use super::endpoints as ep;
use super::*;
use crate::config::GeTuiConfig;

pub use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum RestError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("http: {0}")]
    Http(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("serde: {0}")]
    Serde(String),
}

/// Upstream allows 10 seconds per report call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
});

async fn handle_json<T: for<'de> serde::Deserialize<'de>>(
    res: reqwest::Response,
) -> Result<T, RestError> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(RestError::Status {
            status: status.as_u16(),
            body,
        });
    }
    res.json::<T>()
        .await
        .map_err(|e| RestError::Serde(e.to_string()))
}

/// All three report endpoints share one shape: GET with the caller's token
/// in the `token` header, then decode the JSON envelope.
async fn get_json<T: for<'de> serde::Deserialize<'de>>(
    url: String,
    token: &str,
) -> Result<T, RestError> {
    debug!(%url, "push report request");
    let res = HTTP_CLIENT
        .get(url)
        .header("token", token)
        .send()
        .await
        .map_err(|e| RestError::Http(e.to_string()))?;
    handle_json(res).await
}

/// Fetches per-task push statistics, optionally filtered by custom action
/// ids. The envelope is returned as-is; callers inspect `code`/`msg`.
pub async fn get_task_result(
    config: &GeTuiConfig,
    token: &str,
    param: &TaskResultParam,
) -> Result<PushReportResponse, RestError> {
    if param.task_id.is_empty() {
        return Err(RestError::MissingField("taskId"));
    }
    let url = ep::task_result(&config.base_url, &config.app_id, &param.task_id, &param.actions);
    get_json(url, token).await
}

/// Fetches push statistics for a single day (`YYYY-MM-DD`).
pub async fn get_push_daily_stats(
    config: &GeTuiConfig,
    token: &str,
    param: &PushDailyStatsParam,
) -> Result<PushDailyStatsResp, RestError> {
    if param.date.is_empty() {
        return Err(RestError::MissingField("date"));
    }
    let url = ep::daily_stats(
        &config.base_url,
        &config.app_id,
        &param.date,
        param.need_getui_by_brand,
    );
    get_json(url, token).await
}

/// Fetches the per-vendor UniPush quota balance for the application.
pub async fn get_uni_push_balance(
    config: &GeTuiConfig,
    token: &str,
) -> Result<UniPushBalanceResp, RestError> {
    let url = ep::push_count(&config.base_url, &config.app_id);
    get_json(url, token).await
}
