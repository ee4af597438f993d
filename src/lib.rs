//! Client for the Getui (个推) RestAPI v2 push report endpoints.
//!
//! Covers the reporting family only: per-task push results, daily push
//! statistics and the UniPush quota balance. Each operation is a single
//! authenticated GET; there are no retries and no shared state between
//! calls.
//!
//! Token acquisition is out of scope. Callers obtain an auth token through
//! the Getui auth API themselves and pass it to every call; this crate sends
//! it verbatim in the `token` header.

pub mod api;
pub mod config;

pub use api::rest::{RestError, get_push_daily_stats, get_task_result, get_uni_push_balance};
pub use api::{
    PushChannelStats, PushCountChannels, PushCountLimit, PushDailyStatsParam, PushDailyStatsResp,
    PushReportResponse, PushTaskStatisticsData, TaskResultParam, UniPushBalanceResp,
};
pub use config::{API_URL, GeTuiConfig};
