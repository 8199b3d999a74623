use crate::helpers::{self, TestApp};
use claims::{assert_err, assert_ok};
use subscribe_form::form::SubmissionPhase;
use wiremock::matchers::{any, body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_valid_email_is_posted_to_the_provider_exactly_once() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    Mock::given(path("/subscribe/post-json"))
        .and(method("POST"))
        .and(body_string_contains("EMAIL=ursula.le.guin%40domain.com"))
        .respond_with(helpers::success_response())
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    // Act
    let phase = assert_ok!(app.submit("ursula.le.guin@domain.com").await);

    // Assert
    assert_eq!(SubmissionPhase::Succeeded, phase);
}

#[tokio::test]
async fn a_provider_error_verdict_parks_the_form_in_failed() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(helpers::error_response(
            "ursula@domain.com is already subscribed to list Full-Stack HQ.",
        ))
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    // Act
    let phase = assert_ok!(app.submit("ursula@domain.com").await);

    // Assert
    assert_eq!(SubmissionPhase::Failed, phase);
    // Field state is untouched by the provider's verdict.
    assert_eq!(Some("ursula@domain.com"), app.controller.inputs().value("email"));
}

#[tokio::test]
async fn a_provider_outage_surfaces_as_a_submission_error() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    // Act
    let outcome = app.submit("ursula@domain.com").await;

    // Assert
    assert_err!(outcome);
    assert_eq!(SubmissionPhase::Failed, app.controller.phase());
}

#[tokio::test]
async fn a_second_submit_does_not_reach_the_provider_again() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(helpers::success_response())
        // One accepted pass, one provider call. The second trigger must die
        // at the gate.
        .expect(1)
        .mount(&app.mailchimp_server)
        .await;

    // Act
    let first = assert_ok!(app.submit("ursula@domain.com").await);
    let second = assert_ok!(app.resubmit().await);

    // Assert
    assert_eq!(SubmissionPhase::Succeeded, first);
    assert_eq!(SubmissionPhase::Succeeded, second);
}

#[tokio::test]
async fn reset_allows_a_fresh_submission_after_a_dead_end() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(helpers::success_response())
        .expect(2)
        .mount(&app.mailchimp_server)
        .await;

    // Act
    assert_ok!(app.submit("ursula@domain.com").await);
    app.controller.reset();
    let phase = assert_ok!(app.submit("ursula@domain.com").await);

    // Assert
    assert_eq!(SubmissionPhase::Succeeded, phase);
}

#[tokio::test]
async fn submit_and_success_events_are_emitted() {
    // Arrange
    let mut app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(helpers::success_response())
        .mount(&app.mailchimp_server)
        .await;

    // Act
    assert_ok!(app.submit("ursula@domain.com").await);

    // Assert
    assert_eq!(vec!["submit", "success"], app.events.actions());
}
