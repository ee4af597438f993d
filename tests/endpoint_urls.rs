use getui_report::api::endpoints;

#[test]
fn task_result_without_actions_has_no_query() {
    let url = endpoints::task_result("https://restapi.getui.com/v2/", "app1", "task1", &[]);
    assert_eq!(url, "https://restapi.getui.com/v2/app1/report/push/task/task1");
}

#[test]
fn task_result_escapes_comma_joined_actions() {
    let actions = vec!["12312312".to_string(), "1312312".to_string()];
    let url = endpoints::task_result("https://restapi.getui.com/v2", "app1", "task1", &actions);
    assert_eq!(
        url,
        "https://restapi.getui.com/v2/app1/report/push/task/task1?actionIdList=12312312%2C1312312"
    );
}

#[test]
fn daily_stats_brand_flag_controls_query() {
    let with = endpoints::daily_stats("http://localhost:8080", "app1", "2025-07-23", true);
    assert_eq!(
        with,
        "http://localhost:8080/app1/report/push/date/2025-07-23?needGetuiByBrand=true"
    );

    let without = endpoints::daily_stats("http://localhost:8080", "app1", "2025-07-23", false);
    assert_eq!(
        without,
        "http://localhost:8080/app1/report/push/date/2025-07-23"
    );
}

#[test]
fn push_count_url() {
    let url = endpoints::push_count("https://restapi.getui.com/v2/", "app1");
    assert_eq!(url, "https://restapi.getui.com/v2/app1/report/push/count");
}

#[test]
fn base_with_and_without_trailing_slash_join_the_same() {
    let a = endpoints::push_count("http://127.0.0.1:9000", "app1");
    let b = endpoints::push_count("http://127.0.0.1:9000/", "app1");
    assert_eq!(a, b);
}
