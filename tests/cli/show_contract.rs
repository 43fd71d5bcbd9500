use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn show_prints_summary_and_joined_sections() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "Jane Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:    VP Engineering"))
        .stdout(predicate::str::contains("Location: Berlin, Germany"))
        .stdout(predicate::str::contains("\"summary\": \"Widgets for every workshop\""))
        .stdout(predicate::str::contains("\"headline\": \"Acme raises funding\""))
        .stderr(predicate::str::contains("Multiple rows matched"));
}

#[test]
fn show_json_emits_record_sections() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["show", "Jane Doe", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["person"]["name"], "Jane Doe");
    assert_eq!(value["company"]["company_name"], "Acme");
    assert_eq!(value["news"]["headline"], "Acme raises funding");
}

#[test]
fn show_unknown_person_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile record found for 'Nobody'"));
}

#[test]
fn show_reports_missing_company_stage() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "Lena Ortiz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No company record found for 'Initech'"));
}

#[test]
fn show_reports_missing_news_stage() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["show", "Ravi Patel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No news record found for 'Globex'"));
}
