use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn export_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stripe-export").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("STRIPE_SECRET_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_api_key_takes_configuration_path() {
    let dir = TempDir::new().unwrap();

    export_cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Configuration error: STRIPE_SECRET_KEY environment variable not set",
        ))
        .stderr(predicate::str::contains("export STRIPE_SECRET_KEY='sk_test_...'"));

    assert!(!dir.path().join("stripe_transactions.csv").exists());
}

#[test]
fn test_missing_api_key_strict_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    export_cmd(&dir)
        .arg("--strict")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_limit_exits_one() {
    let dir = TempDir::new().unwrap();

    export_cmd(&dir)
        .env("STRIPE_SECRET_KEY", "sk_test_cli")
        .args(["--limit", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_config_file_exits_one() {
    let dir = TempDir::new().unwrap();

    export_cmd(&dir)
        .env("STRIPE_SECRET_KEY", "sk_test_cli")
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Configuration error: Cannot read config file does-not-exist.toml",
        ));
}

#[test]
fn test_malformed_config_file_exits_one() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("export.toml"), "[source\nlimit = ").unwrap();

    export_cmd(&dir)
        .env("STRIPE_SECRET_KEY", "sk_test_cli")
        .args(["--config", "export.toml"])
        .assert()
        .code(1);
}

#[test]
fn test_unwritable_output_exits_one() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("taken")).unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/charges");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": [{"id": "ch_1", "amount": 100}]}));
    });

    export_cmd(&dir)
        .env("STRIPE_SECRET_KEY", "sk_test_cli")
        .args(["--api-endpoint", server.url("/v1/charges").as_str(), "--output", "taken"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error"));

    api_mock.assert();
    assert!(dir.path().join("taken").is_dir());
}

#[test]
fn test_export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/charges")
            .header("Authorization", "Bearer sk_test_cli")
            .query_param("limit", "100");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": [{"id": "ch_1", "amount": 1500, "currency": "usd", "status": "succeeded", "created": 1700000000}]
            }));
    });

    export_cmd(&dir)
        .env("STRIPE_SECRET_KEY", "sk_test_cli")
        .args(["--api-endpoint", server.url("/v1/charges").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Export completed successfully"));

    api_mock.assert();
    let content = std::fs::read_to_string(dir.path().join("stripe_transactions.csv")).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.starts_with("id,amount,currency,status,customer,description,created,receipt_email,payment_method"));
}

#[test]
fn test_network_error_exits_one() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/charges");
        then.status(500);
    });

    export_cmd(&dir)
        .env("STRIPE_SECRET_KEY", "sk_test_cli")
        .args(["--api-endpoint", server.url("/v1/charges").as_str()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Stripe API returned 500"));

    assert!(!dir.path().join("stripe_transactions.csv").exists());
}

#[test]
fn test_config_file_overrides_flags() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/charges")
            .query_param("limit", "5");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": [{"id": "ch_1"}, {"id": "ch_2"}]}));
    });

    std::fs::write(
        dir.path().join("export.toml"),
        format!(
            "[source]\nendpoint = \"{}\"\nlimit = 5\n\n[load]\noutput_path = \"out/charges.csv\"\n",
            server.url("/v1/charges")
        ),
    )
    .unwrap();

    export_cmd(&dir)
        .env("STRIPE_SECRET_KEY", "sk_test_cli")
        .args(["--config", "export.toml"])
        .assert()
        .success();

    api_mock.assert();
    let content = std::fs::read_to_string(dir.path().join("out/charges.csv")).unwrap();
    assert_eq!(content.lines().count(), 3);
}
