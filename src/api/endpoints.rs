use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

fn base_join(base: &str, path: &str) -> String {
    let b = base.trim_end_matches('/');
    let p = path.trim_start_matches('/');
    format!("{}/{}", b, p)
}

fn enc(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

/// `{base}/{app_id}/report/push/task/{task_id}`, with an `actionIdList`
/// query (comma-joined, percent-encoded) when `actions` is non-empty.
/// Path segments are interpolated verbatim, matching what upstream expects.
pub fn task_result(base: &str, app_id: &str, task_id: &str, actions: &[String]) -> String {
    let mut url = base_join(base, &format!("{}/report/push/task/{}", app_id, task_id));
    if !actions.is_empty() {
        url.push_str("?actionIdList=");
        url.push_str(&enc(&actions.join(",")));
    }
    url
}

/// `{base}/{app_id}/report/push/date/{date}`, with the literal
/// `needGetuiByBrand=true` query when requested (upstream ignores `false`).
pub fn daily_stats(base: &str, app_id: &str, date: &str, need_getui_by_brand: bool) -> String {
    let mut url = base_join(base, &format!("{}/report/push/date/{}", app_id, date));
    if need_getui_by_brand {
        url.push_str("?needGetuiByBrand=true");
    }
    url
}

/// `{base}/{app_id}/report/push/count`.
pub fn push_count(base: &str, app_id: &str) -> String {
    base_join(base, &format!("{}/report/push/count", app_id))
}
