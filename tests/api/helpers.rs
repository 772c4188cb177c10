use campus_tools_hub::telemetry::{get_subscriber, init_subscriber};
use std::sync::LazyLock;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
pub static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // We cannot assign the output of `get_subscriber` to a variable based on the
    // value TEST_LOG` because the sink is part of the type returned by
    // `get_subscriber`, therefore they are not the same type.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// Assert the response carries a JSON body and decode it.
pub async fn assert_json_response<T>(response: reqwest::Response) -> T
where
    T: serde::de::DeserializeOwned,
{
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(
        content_type.starts_with("application/json"),
        "Expected a JSON response, got content type `{}`",
        content_type
    );
    response.json().await.expect("Failed to parse JSON body")
}

/// Assert the status code and the `{ success: false, error }` error shape.
pub async fn assert_json_error(response: reqwest::Response, status: u16) -> String {
    assert_eq!(response.status().as_u16(), status);
    let body: serde_json::Value = assert_json_response(response).await;
    assert_eq!(body["success"], serde_json::Value::Bool(false));
    body["error"]
        .as_str()
        .expect("Error body has no `error` message")
        .to_owned()
}

pub fn post_body(title: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "content": "Start early, review often, sleep well.",
        "excerpt": "Three habits",
        "author": "Ada",
        "category": "study",
        "tags": ["study", "habits"],
        "status": status
    })
}
