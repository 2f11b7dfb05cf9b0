mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::*;
use ipay88_opsg::MessageKind;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn command() -> Command {
    let mut cmd = Command::new(cargo_bin!());
    cmd.env_remove("IPAY88_MERCHANT_CODE")
        .env_remove("IPAY88_MERCHANT_KEY")
        .env_remove("IPAY88_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_sign_prints_signed_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let params = dir.path().join("request.json");
    fs::write(
        &params,
        r#"{
            "RefNo": "REF1",
            "Amount": "100.00",
            "Currency": "MYR",
            "PaymentId": 2,
            "ProdDesc": "Photo print",
            "UserName": "Jane Doe",
            "UserEmail": "jane@example.com",
            "UserContact": "0126500100",
            "Lang": "UTF-8",
            "SignatureType": "SHA256",
            "ResponseURL": "https://shop.example.com/return",
            "BackendURL": "https://shop.example.com/notify"
        }"#,
    )?;

    command()
        .args([
            "--merchant-code",
            MERCHANT_CODE,
            "--merchant-key",
            SECRET,
            "sign",
        ])
        .arg(&params)
        .assert()
        .success()
        .stdout(predicate::str::contains(sha256_hex("secret123M001REF110000MYR")))
        .stdout(predicate::str::contains("\"PaymentRequest\""))
        .stdout(predicate::str::contains("\"violations\": []"));

    Ok(())
}

#[test]
fn test_cli_sign_reads_credentials_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let params = dir.path().join("request.json");
    fs::write(
        &params,
        r#"{"RefNo": "REF1", "Amount": "100.00", "Currency": "MYR", "SignatureType": "SHA256"}"#,
    )?;

    // Incomplete request: signed, but reported invalid.
    command()
        .env("IPAY88_MERCHANT_CODE", MERCHANT_CODE)
        .env("IPAY88_MERCHANT_KEY", SECRET)
        .arg("sign")
        .arg(&params)
        .assert()
        .failure()
        .stdout(predicate::str::contains(sha256_hex("secret123M001REF110000MYR")))
        .stdout(predicate::str::contains("UserEmail"));

    Ok(())
}

#[test]
fn test_cli_sign_requires_the_merchant_key() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let params = dir.path().join("request.json");
    fs::write(&params, r#"{"RefNo": "REF1"}"#)?;

    command()
        .arg("sign")
        .arg(&params)
        .assert()
        .failure()
        .stderr(predicate::str::contains("shared secret"));

    Ok(())
}

#[test]
fn test_cli_verify_accepts_a_genuine_notification() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let body = dir.path().join("notify.txt");
    let parameters = signed_payment_response_parameters(MessageKind::PaymentNotifyResponse);
    fs::write(&body, parameters.to_form_body())?;

    command()
        .args(["--merchant-key", SECRET, "verify"])
        .arg(&body)
        .assert()
        .success()
        .stdout(predicate::str::contains("T0012345600"));

    Ok(())
}

#[test]
fn test_cli_verify_rejects_a_tampered_notification() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let body = dir.path().join("notify.txt");
    let mut parameters = signed_payment_response_parameters(MessageKind::PaymentNotifyResponse);
    parameters.insert("Amount", "1.00");
    fs::write(&body, parameters.to_form_body())?;

    command()
        .args(["--merchant-key", SECRET, "verify"])
        .arg(&body)
        .assert()
        .failure()
        .stdout(predicate::str::contains("signature_mismatch"));

    Ok(())
}

#[test]
fn test_cli_verify_rejects_non_form_bodies() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let body = dir.path().join("notify.txt");
    fs::write(&body, "hello")?;

    command()
        .args(["--merchant-key", SECRET, "verify"])
        .arg(&body)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameters"));

    Ok(())
}
