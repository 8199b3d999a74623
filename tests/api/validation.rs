use crate::helpers::TestApp;
use claims::{assert_err, assert_none, assert_some_eq};
use subscribe_form::error::SubscribeError;
use subscribe_form::form::SubmissionPhase;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn an_empty_email_never_reaches_the_provider() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        // We assert that no request is fired at the provider!
        .expect(0)
        .mount(&app.mailchimp_server)
        .await;

    // Act
    let outcome = app.submit("").await;

    // Assert
    assert!(matches!(outcome, Err(SubscribeError::ValidationError(_))));
    assert_some_eq!(
        app.controller.inputs().error_message("email"),
        "Please enter an email."
    );
    assert_eq!(SubmissionPhase::Idle, app.controller.phase());
}

#[tokio::test]
async fn a_malformed_email_never_reaches_the_provider() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.mailchimp_server)
        .await;

    // Act
    let outcome = app.submit("definitely-not-an-email").await;

    // Assert
    assert_err!(outcome);
    assert_some_eq!(
        app.controller.inputs().error_message("email"),
        "Email is not valid!"
    );
}

#[tokio::test]
async fn an_invalid_submit_emits_an_invalid_event() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    // Act
    let _ = app.submit("definitely-not-an-email").await;

    // Assert
    assert_eq!(vec!["invalid"], app.events.actions());
}

#[tokio::test]
async fn editing_the_field_clears_the_inline_error() {
    // Arrange
    let mut app = TestApp::spawn_app().await;
    let _ = app.submit("definitely-not-an-email").await;
    assert_some_eq!(
        app.controller.inputs().error_message("email"),
        "Email is not valid!"
    );

    // Act
    app.controller.on_change("email", "ursula@domain.com");

    // Assert
    assert_none!(app.controller.inputs().error_message("email"));
    assert_some_eq!(app.controller.inputs().value("email"), "ursula@domain.com");
}
