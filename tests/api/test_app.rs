use campus_tools_hub::blog_store::FailurePolicy;
use campus_tools_hub::configuration::get_configuration;
use campus_tools_hub::startup::Application;
use std::path::PathBuf;
use std::sync::LazyLock;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    /// Isolated data directory of this test's blog store.
    pub data_dir: PathBuf,
    pub posts_file: PathBuf,
    pub api_client: reqwest::Client,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

impl TestApp {
    /// Overwrite the posts file directly, bypassing the API.
    pub fn write_posts_file(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir.");
        std::fs::write(&self.posts_file, contents).expect("Failed to write posts file.");
    }

    /// Make every later save fail by occupying the store's staging file
    /// with a directory. Reads keep working.
    pub fn block_saves(&self) {
        let mut staging = self.posts_file.clone().into_os_string();
        staging.push(".tmp");
        std::fs::create_dir_all(staging).expect("Failed to block the staging path.");
    }

    pub fn read_posts_file(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(&self.posts_file).expect("Failed to read posts file.");
        serde_json::from_str(&raw).expect("Posts file is not valid JSON.")
    }

    // Blog public endpoints
    pub async fn get_published_posts(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/blog/posts", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_post_by_slug(&self, slug: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/blog/posts/{}", &self.address, slug))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_blog_analytics(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/blog/analytics", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    // Blog admin endpoints
    pub async fn admin_get_all_posts(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/admin/blog/posts", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_get_post_by_id(&self, post_id: &str) -> reqwest::Response {
        self.api_client
            .get(format!(
                "{}/api/admin/blog/posts/{}",
                &self.address, post_id
            ))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_create_post<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/api/admin/blog/posts", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_update_post<Body>(&self, post_id: &str, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .put(format!(
                "{}/api/admin/blog/posts/{}",
                &self.address, post_id
            ))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn admin_delete_post(&self, post_id: &str) -> reqwest::Response {
        self.api_client
            .delete(format!(
                "{}/api/admin/blog/posts/{}",
                &self.address, post_id
            ))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_gpa<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(format!("{}/api/tools/gpa", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Create a post through the admin API and return its JSON.
    pub async fn create_blog_post(&self, body: &serde_json::Value) -> serde_json::Value {
        let response = self.admin_create_post(body).await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.expect("Failed to parse created post.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_policy(FailurePolicy::BestEffort).await
}

#[tracing::instrument(name = "Spawning test application", skip_all)]
pub async fn spawn_app_with_policy(failure_policy: FailurePolicy) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    LazyLock::force(&crate::helpers::TRACING);

    let data_dir = std::env::temp_dir().join(format!("campus-tools-hub-test-{}", Uuid::new_v4()));

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a different data directory for each test case
        c.blog_store.data_dir = data_dir.clone();
        c.blog_store.failure_policy = failure_policy;
        // Use a random OS port
        c.application.port = 0;
        c
    };
    let posts_file = configuration.blog_store.file_path();

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let address = format!("http://127.0.0.1:{}", port);

    #[allow(clippy::let_underscore_future)]
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address,
        data_dir,
        posts_file,
        api_client,
    }
}
