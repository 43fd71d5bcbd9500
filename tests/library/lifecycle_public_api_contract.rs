use crate::harness::TestContext;
use crate::harness::gemini_server::{self, API_KEY};
use outreach::{
    AppError, Credentials, ERROR_MARKER, OpenOptions, export_email, generate_email, list_people,
    open_at, preview_prompt, show_person,
};

#[test]
fn public_api_lifecycle_happy_path_contract() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = gemini_server::mock_reply(&mut server, "Subject: Hello\n\nHi Jane");
    ctx.use_api_url(&server.url());

    let ws = open_at(ctx.work_dir(), &OpenOptions::default()).expect("open failed");
    assert_eq!(list_people(&ws).unwrap(), vec!["Jane Doe", "Ravi Patel", "Lena Ortiz"]);

    let view = show_person(&ws, "Jane Doe").expect("show failed");
    assert_eq!(view.summary.company, "Acme");
    assert_eq!(view.record.matches().companies, 2);

    let prompt = preview_prompt(&ws, "Jane Doe", "Keep it short.").expect("prompt failed");
    assert!(prompt.contains("Keep it short."));

    let credentials = Credentials::from_key(API_KEY).unwrap();
    let email = generate_email(&ws, credentials, "Jane Doe", "Keep it short.").expect("generate");
    assert!(!email.is_error());
    assert_eq!(email.as_str(), "Subject: Hello\n\nHi Jane");
    mock.assert();

    let path = ctx.work_dir().join("generated_email.txt");
    export_email(&email, &path).expect("export failed");
    assert_eq!(std::fs::read_to_string(path).unwrap(), "Subject: Hello\n\nHi Jane");
}

#[test]
fn public_api_folds_service_errors() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = gemini_server::mock_failure(&mut server, 429, "Resource has been exhausted");
    ctx.use_api_url(&server.url());

    let ws = open_at(ctx.work_dir(), &OpenOptions::default()).unwrap();
    let credentials = Credentials::from_key(API_KEY).unwrap();
    let email = generate_email(&ws, credentials, "Jane Doe", "Hi").unwrap();

    assert!(email.is_error());
    assert!(email.as_str().starts_with(ERROR_MARKER));
}

#[test]
fn public_api_rejects_blank_instructions() {
    let ctx = TestContext::new();
    let ws = open_at(ctx.work_dir(), &OpenOptions::default()).unwrap();
    let credentials = Credentials::from_key(API_KEY).unwrap();

    let err = generate_email(&ws, credentials, "Jane Doe", "").unwrap_err();
    assert!(matches!(err, AppError::EmptyInstructions));
}
