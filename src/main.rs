use campus_tools_hub::configuration::get_configuration;
use campus_tools_hub::startup::Application;
use campus_tools_hub::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("campus_tools_hub".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Listening");
    application.run_until_stopped().await?;
    Ok(())
}
