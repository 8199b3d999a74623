use subscribe_form::configuration;
use subscribe_form::error::SubscribeError;
use subscribe_form::form::SubmissionPhase;
use subscribe_form::startup::Application;
use subscribe_form::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber =
        telemetry::get_subscriber("subscribe-form".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    // Panic if we can't read configuration
    let config = configuration::get_configuration().expect("Failed to read configuration");
    if !config.application.show_subscribe {
        println!("Subscriptions are currently closed.");
        return Ok(());
    }
    tracing::info!(
        site = %config.application.site_url,
        title = %config.application.title,
        "Subscribing to the mailing list"
    );

    let email = std::env::args().nth(1).unwrap_or_default();
    let mut application = Application::build(config);
    match application.subscribe(&email).await {
        Ok(SubmissionPhase::Succeeded) => println!("Your submission has been received."),
        Ok(phase) => println!("Subscription did not complete ({:?}), please try again.", phase),
        Err(SubscribeError::ValidationError(reason)) => println!("{}", reason.ui_message()),
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
