//! Test support utilities for cordova-build-config integration tests.
//!
//! Provides an isolated test environment: a temp working directory, a fake
//! `envman` on PATH that captures exported outputs, and a one-shot HTTP
//! responder for keystore-download tests.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

/// All input names the step reads from the environment.
pub const INPUT_NAMES: &[&str] = &[
    "configuration",
    "development_team",
    "code_sign_identity",
    "provisioning_profile",
    "package_type",
    "keystore_url",
    "keystore_password",
    "keystore_alias",
    "private_key_password",
];

/// Test environment with isolated temp directories.
///
/// No process-global state is mutated — child processes get their own
/// working directory and PATH, so tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory for the child process
    pub dir: TempDir,
    /// Directory the fake envman captures exported key/value pairs into
    pub capture: TempDir,
    /// Directory holding the fake envman binary
    bin: TempDir,
}

impl Test {
    /// Create a new test environment with a fake `envman` installed.
    ///
    /// The fake script writes stdin to `<capture>/<key>`, mirroring how the
    /// real envman stores the exported value.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let capture = TempDir::new().expect("failed to create capture dir");
        let bin = TempDir::new().expect("failed to create bin dir");

        let script = "#!/bin/sh\n# envman add --key KEY (value on stdin)\nkey=\"$3\"\ncat > \"$ENVMAN_CAPTURE_DIR/$key\"\n";
        let envman_path = bin.path().join("envman");
        fs::write(&envman_path, script).expect("failed to write fake envman");

        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&envman_path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake envman");

        Self { dir, capture, bin }
    }

    /// Create the step command with an isolated environment.
    pub fn cmd(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("cordova-build-config").expect("failed to find step binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env("ENVMAN_CAPTURE_DIR", self.capture.path());

        // Prepend the fake envman to PATH
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut paths = vec![self.bin.path().to_path_buf()];
        paths.extend(std::env::split_paths(&path));
        cmd.env("PATH", std::env::join_paths(paths).expect("failed to join PATH"));

        // Ambient pipeline variables must never leak into a test run
        for name in INPUT_NAMES {
            cmd.env_remove(name);
        }

        cmd
    }

    /// Build the step command with the given input environment variables,
    /// ready for `.assert()` or `.output()`.
    pub fn generate_cmd(&self, envs: &[(&str, &str)]) -> Command {
        let mut cmd = self.cmd();
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run the step with the given input environment variables.
    pub fn generate(&self, envs: &[(&str, &str)]) -> Output {
        self.generate_cmd(envs)
            .output()
            .expect("failed to run cordova-build-config")
    }

    /// Replace the fake envman with one that always fails, so the handoff
    /// step cannot succeed.
    pub fn break_envman(&self) {
        let script = "#!/bin/sh\nexit 1\n";
        let envman_path = self.bin.path().join("envman");
        fs::write(&envman_path, script).expect("failed to overwrite fake envman");

        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&envman_path, fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake envman");
    }

    /// Path the step exported under BITRISE_CORDOVA_BUILD_CONFIGURATION,
    /// if any export happened.
    pub fn published_path(&self) -> Option<PathBuf> {
        let capture_file = self
            .capture
            .path()
            .join("BITRISE_CORDOVA_BUILD_CONFIGURATION");
        fs::read_to_string(capture_file).ok().map(PathBuf::from)
    }

    /// Read the published build.json as parsed JSON.
    pub fn published_document(&self) -> serde_json::Value {
        let path = self.published_path().expect("no build.json was published");
        let contents = fs::read_to_string(&path).expect("failed to read build.json");
        serde_json::from_str(&contents).expect("build.json is not valid JSON")
    }
}

/// Spin up a one-shot HTTP responder on a random local port.
///
/// Answers the first connection with the given status line and body, then
/// shuts down. Returns the base URL.
pub fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test listener");
    let addr = listener.local_addr().expect("failed to read listener addr");

    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);

            let header = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
    });

    format!("http://{}", addr)
}
