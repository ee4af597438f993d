use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod endpoints;
pub mod rest;

/// Parameters for a per-task report lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResultParam {
    pub task_id: String,
    /// Custom action ids; when non-empty, joined by comma into the
    /// `actionIdList` query parameter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}

/// Parameters for a daily statistics lookup. `date` is caller-formatted
/// (`YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushDailyStatsParam {
    pub date: String,
    /// Adds `?needGetuiByBrand=true`, splitting Getui-channel numbers by
    /// vendor brand.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub need_getui_by_brand: bool,
}

/// Envelope for task result responses. `data` is keyed by task id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushReportResponse {
    pub code: i32,
    pub msg: String,
    #[serde(default)]
    pub data: HashMap<String, PushTaskStatisticsData>,
}

/// Envelope for daily statistics responses. `data` is keyed per day/task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushDailyStatsResp {
    pub code: i32,
    pub msg: String,
    #[serde(default)]
    pub data: HashMap<String, PushTaskStatisticsData>,
}

/// Per-task statistics broken down by delivery channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushTaskStatisticsData {
    #[serde(default)]
    pub total: PushChannelStats,
    /// Getui's own channel.
    #[serde(default)]
    pub gt: PushChannelStats,
    /// APNs numbers; absent for Android-only tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apn: Option<PushChannelStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushChannelStats {
    /// Dispatchable count; upstream only fills this under `total`.
    #[serde(default)]
    pub msg_num: i64,
    #[serde(default)]
    pub target_num: i64,
    #[serde(default)]
    pub receive_num: i64,
    #[serde(default)]
    pub display_num: i64,
    #[serde(default)]
    pub click_num: i64,
}

/// Envelope for the UniPush balance. `data` is keyed by an upstream-assigned
/// identifier, one entry per application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniPushBalanceResp {
    pub code: i32,
    pub msg: String,
    #[serde(default)]
    pub data: HashMap<String, PushCountChannels>,
}

/// Quota status per vendor channel, keyed by channel name (`xm`, `hw`, ...).
pub type PushCountChannels = HashMap<String, PushCountLimit>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushCountLimit {
    /// Request volume; only some vendors report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_num: Option<i64>,
    /// Total push volume. Upstream mixes string and number encodings across
    /// channels, so the raw string is kept for callers to parse.
    pub total_num: String,
    /// Remaining volume; only some vendors report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remain_num: Option<i64>,
    /// Whether sends on this channel are currently limited.
    pub limit: bool,
}
