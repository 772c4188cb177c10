use crate::helpers::{assert_json_response, post_body};
use crate::test_app::spawn_app;

fn tagged_post(title: &str, status: &str, category: &str, tags: &[&str]) -> serde_json::Value {
    let mut body = post_body(title, status);
    body["category"] = serde_json::json!(category);
    body["tags"] = serde_json::json!(tags);
    body
}

#[tokio::test]
async fn analytics_on_an_empty_store_are_all_zero() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_blog_analytics().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let analytics: serde_json::Value = assert_json_response(response).await;
    assert_eq!(
        analytics,
        serde_json::json!({
            "totalPosts": 0,
            "publishedPosts": 0,
            "draftPosts": 0,
            "totalViews": 0,
            "categories": [],
            "topTags": []
        })
    );
}

#[tokio::test]
async fn analytics_count_posts_views_categories_and_tags() {
    // Arrange
    let app = spawn_app().await;
    app.create_blog_post(&tagged_post("First", "published", "study", &["study", "gpa"]))
        .await;
    app.create_blog_post(&tagged_post("Second", "published", "tips", &["gpa", "gpa"]))
        .await;
    app.create_blog_post(&tagged_post("Third", "draft", "study", &["study"]))
        .await;
    app.get_post_by_slug("first").await;
    app.get_post_by_slug("first").await;
    app.get_post_by_slug("second").await;

    // Act
    let response = app.get_blog_analytics().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let analytics: serde_json::Value = assert_json_response(response).await;
    assert_eq!(analytics["totalPosts"], 3);
    assert_eq!(analytics["publishedPosts"], 2);
    assert_eq!(analytics["draftPosts"], 1);
    assert_eq!(analytics["totalViews"], 3);
    assert_eq!(
        analytics["categories"],
        serde_json::json!([
            {"category": "study", "count": 2},
            {"category": "tips", "count": 1}
        ])
    );
    assert_eq!(
        analytics["topTags"],
        serde_json::json!([
            {"tag": "gpa", "count": 3},
            {"tag": "study", "count": 2}
        ])
    );
}

#[tokio::test]
async fn top_tags_are_capped_at_ten_with_ties_broken_by_name() {
    // Arrange
    let app = spawn_app().await;
    let tags: Vec<String> = ('a'..='l').map(|c| format!("tag-{}", c)).collect();
    let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
    app.create_blog_post(&tagged_post("Many Tags", "published", "misc", &tag_refs))
        .await;
    app.create_blog_post(&tagged_post("Popular Tag", "published", "misc", &["tag-l"]))
        .await;

    // Act
    let response = app.get_blog_analytics().await;

    // Assert
    let analytics: serde_json::Value = assert_json_response(response).await;
    let top_tags = analytics["topTags"].as_array().unwrap();
    assert_eq!(top_tags.len(), 10);
    assert_eq!(top_tags[0], serde_json::json!({"tag": "tag-l", "count": 2}));
    let names: Vec<&str> = top_tags[1..]
        .iter()
        .filter_map(|t| t["tag"].as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "tag-a", "tag-b", "tag-c", "tag-d", "tag-e", "tag-f", "tag-g", "tag-h", "tag-i"
        ]
    );
}

#[tokio::test]
async fn analytics_over_a_corrupt_store_are_empty() {
    // Arrange
    let app = spawn_app().await;
    app.write_posts_file("{\"not\": \"an array\"}");

    // Act
    let response = app.get_blog_analytics().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let analytics: serde_json::Value = assert_json_response(response).await;
    assert_eq!(analytics["totalPosts"], 0);
}
