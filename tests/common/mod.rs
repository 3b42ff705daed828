#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use siteconf::Env;

pub const REQUIRED_VARS: &[(&str, &str)] = &[
    ("EMAIL_HOST_USER", "mailer@example.com"),
    ("EMAIL_HOST_PASSWORD", "test-email-password"),
    ("GITHUB_CLIENT_ID", "test-github-id"),
    ("GITHUB_CLIENT_SECRET", "test-github-secret"),
    ("GOOGLE_CLIENT_ID", "test-google-id"),
    ("GOOGLE_CLIENT_SECRET", "test-google-secret"),
];

/// Secret values from [`REQUIRED_VARS`] that must never appear in output.
pub const SECRET_VALUES: &[&str] = &[
    "test-email-password",
    "test-github-secret",
    "test-google-secret",
];

pub fn required_env() -> Env {
    REQUIRED_VARS.iter().copied().collect()
}

pub fn write_env_file(dir: &Path, lines: &[(&str, &str)]) {
    let mut file = std::fs::File::create(dir.join(".env")).expect("create .env");
    for (key, value) in lines {
        writeln!(file, "{key}={value}").expect("write .env");
    }
}
