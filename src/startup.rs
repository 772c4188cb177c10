use crate::blog_store::BlogStore;
use crate::configuration::Settings;
use crate::routes::{
    admin_create_post, admin_delete_post, admin_get_all_posts, admin_get_post_by_id,
    admin_update_post, calculate_gpa_endpoint, get_blog_analytics, get_post_by_slug,
    get_published_posts, health_check,
};
use axum::Router;
use axum::routing::{get, post};
use std::net::TcpListener;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health_check::health_check,
        crate::routes::blog::get_published_posts,
        crate::routes::blog::get_post_by_slug,
        crate::routes::analytics::get_blog_analytics,
        crate::routes::admin::blog::admin_get_all_posts,
        crate::routes::admin::blog::admin_get_post_by_id,
        crate::routes::admin::blog::admin_create_post,
        crate::routes::admin::blog::admin_update_post,
        crate::routes::admin::blog::admin_delete_post,
        crate::routes::tools::calculate_gpa_endpoint,
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "blog", description = "Public blog listing and analytics"),
        (name = "admin-blog", description = "Blog post management"),
        (name = "tools", description = "Student productivity calculators"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BlogStore>,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    store: Arc<BlogStore>,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let store = Arc::new(BlogStore::from_settings(&configuration.blog_store));
        tracing::info!(
            path = %store.path().display(),
            policy = ?store.policy(),
            "Using blog store"
        );
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        listener.set_nonblocking(true)?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            store,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let app = router(AppState { store: self.store });
        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error.cause_chain = ?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health_check", get(health_check))
        .nest(
            "/api",
            Router::new()
                .route("/blog/posts", get(get_published_posts))
                .route("/blog/posts/{slug}", get(get_post_by_slug))
                .route("/blog/analytics", get(get_blog_analytics))
                .route(
                    "/admin/blog/posts",
                    get(admin_get_all_posts).post(admin_create_post),
                )
                .route(
                    "/admin/blog/posts/{id}",
                    get(admin_get_post_by_id)
                        .put(admin_update_post)
                        .delete(admin_delete_post),
                )
                .route("/tools/gpa", post(calculate_gpa_endpoint)),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
