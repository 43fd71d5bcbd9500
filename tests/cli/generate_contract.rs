use crate::harness::TestContext;
use crate::harness::gemini_server::{self, API_KEY};
use predicates::prelude::*;
use std::fs;

const EMAIL: &str = "Subject: Congrats on the Series B\n\nHi Jane,\n\nBest,\nSam";

#[test]
fn generate_prints_model_text_and_saves_output() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = gemini_server::mock_reply(&mut server, EMAIL);
    ctx.use_api_url(&server.url());

    ctx.cli_with_key(API_KEY)
        .args(["generate", "Jane Doe", "-i", "Congratulate them.", "-o", "drafts/jane.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(EMAIL))
        .stderr(predicate::str::contains("Saved email to"));

    mock.assert();
    let saved = fs::read_to_string(ctx.work_dir().join("drafts/jane.txt")).unwrap();
    assert_eq!(saved, EMAIL);
}

#[test]
fn service_failure_is_shown_as_text_and_exits_zero() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = gemini_server::mock_failure(&mut server, 500, "backend unavailable");
    ctx.use_api_url(&server.url());

    ctx.cli_with_key(API_KEY)
        .args(["generate", "Jane Doe", "-i", "Hi", "-o", "jane.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error generating email:"))
        .stdout(predicate::str::contains("backend unavailable"));

    assert!(!ctx.work_dir().join("jane.txt").exists());
}

#[test]
fn rejected_key_is_folded_into_text() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = gemini_server::mock_failure(&mut server, 403, "API key not valid");
    ctx.use_api_url(&server.url());

    ctx.cli_with_key("wrong-key")
        .args(["generate", "Jane Doe", "-i", "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error generating email:"));
}

#[test]
fn blank_instructions_fail_before_any_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", gemini_server::GENERATE_PATH).expect(0).create();
    ctx.use_api_url(&server.url());

    ctx.cli_with_key(API_KEY)
        .args(["generate", "Jane Doe", "-i", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a prompt for email generation."));

    mock.assert();
}

#[test]
fn unknown_person_fails_before_any_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", gemini_server::GENERATE_PATH).expect(0).create();
    ctx.use_api_url(&server.url());

    ctx.cli_with_key(API_KEY)
        .args(["generate", "Nobody", "-i", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile record found for 'Nobody'"));

    mock.assert();
}

#[test]
fn google_api_key_variable_is_accepted() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = gemini_server::mock_reply(&mut server, EMAIL);
    ctx.use_api_url(&server.url());

    ctx.cli()
        .env("GOOGLE_API_KEY", API_KEY)
        .args(["generate", "Jane Doe", "-i", "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Congrats on the Series B"));

    mock.assert();
}

#[test]
fn lookup_failure_is_reported_before_asking_for_a_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "Lena Ortiz", "-i", "Hi"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No company record found for 'Initech'"))
        .stderr(predicate::str::contains("API key").not());
}

#[test]
fn lookup_failure_is_reported_before_asking_for_instructions() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "Ravi Patel"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No news record found for 'Globex'"))
        .stderr(predicate::str::contains("Failed to read instructions").not());
}
