use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn people_lists_profile_names_in_file_order() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("people")
        .assert()
        .success()
        .stdout(predicate::eq("Jane Doe\nRavi Patel\nLena Ortiz\n"));
}

#[test]
fn people_does_not_need_credentials() {
    let ctx = TestContext::new();

    ctx.cli().arg("ls").assert().success();
}

#[test]
fn missing_data_directory_fails_with_load_error() {
    let ctx = TestContext::empty();

    ctx.cli()
        .arg("people")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Could not load data"))
        .stderr(predicate::str::contains("linkedin_data.csv"));
}

#[test]
fn data_dir_flag_overrides_default_location() {
    let ctx = TestContext::new();
    let moved = ctx.work_dir().join("tables");
    std::fs::rename(ctx.data_dir(), &moved).unwrap();

    ctx.cli()
        .args(["people", "--data-dir", "tables"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"));
}

#[test]
fn missing_key_column_is_reported() {
    let ctx = TestContext::new();
    ctx.write_table("linkedin_data.csv", "full_name,company\nJane Doe,Acme\n");

    ctx.cli()
        .arg("people")
        .assert()
        .failure()
        .stderr(predicate::str::contains("name"));
}

#[test]
fn configured_file_names_are_used() {
    let ctx = TestContext::new();
    std::fs::rename(ctx.data_dir().join("linkedin_data.csv"), ctx.data_dir().join("people.csv"))
        .unwrap();
    ctx.write_config("[data.profiles]\nfile = \"people.csv\"\n");

    ctx.cli().arg("people").assert().success().stdout(predicate::str::contains("Ravi Patel"));
}

#[test]
fn invalid_config_fails() {
    let ctx = TestContext::new();
    ctx.write_config("[generation]\nmodel = \"\"\n");

    ctx.cli().arg("people").assert().failure().stderr(predicate::str::starts_with("Error:"));
}
