use railway_status::configuration::get_configuration;
use railway_status::startup::Application;
use railway_status::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()?;

    let subscriber = get_subscriber(
        "railway_status".into(),
        configuration.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
