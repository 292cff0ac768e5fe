use crate::common::{run_launcher, stderr_text, CLIENT_BIN, SERVER_BIN};

#[test]
fn secure_without_key_material_exits_with_credential_code() {
    for binary in [CLIENT_BIN, SERVER_BIN] {
        let output = run_launcher(binary, &["--secure"]);
        assert_eq!(
            output.status.code(),
            Some(2),
            "missing-credential exit code (2) expected for {binary}"
        );
        let stderr = stderr_text(&output);
        assert!(
            stderr.contains("--key"),
            "diagnostic should point at --key: {stderr}"
        );
        assert!(
            stderr.contains("--key-file"),
            "diagnostic should point at --key-file: {stderr}"
        );
    }
}

#[test]
fn credential_failure_is_distinct_from_usage_failure() {
    let credential = run_launcher(CLIENT_BIN, &["--secure"]);
    let usage = run_launcher(CLIENT_BIN, &["--bogus"]);
    assert_ne!(
        credential.status.code(),
        usage.status.code(),
        "scripts must be able to tell the two failures apart"
    );
}
