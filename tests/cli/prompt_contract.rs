use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn prompt_renders_data_and_instructions_without_network() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["prompt", "Jane Doe", "-i", "Congratulate them on the raise."])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Based on the following data:"))
        .stdout(predicate::str::contains("--- PERSON INFORMATION ---\nname: Jane Doe\n"))
        .stdout(predicate::str::contains("--- COMPANY INFORMATION ---\ncompany_name: Acme\n"))
        .stdout(predicate::str::contains("--- NEWS INFORMATION ---\nrelated_company: Acme\n"))
        .stdout(predicate::str::contains("Congratulate them on the raise."));
}

#[test]
fn prompt_reads_instructions_from_file() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("notes.txt"), "Ask for a short call next week.").unwrap();

    ctx.cli()
        .args(["prompt", "Jane Doe", "--instructions-file", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ask for a short call next week."));
}

#[test]
fn prompt_uses_configured_template() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("short.j2"), "To {{ person.name }} at {{ company.company_name }}: {{ instructions }}")
        .unwrap();
    ctx.write_config("[prompt]\ntemplate = \"short.j2\"\n");

    ctx.cli()
        .args(["prompt", "Jane Doe", "-i", "hello"])
        .assert()
        .success()
        .stdout(predicate::eq("To Jane Doe at Acme: hello\n"));
}
