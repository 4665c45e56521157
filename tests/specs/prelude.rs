//! Test helpers for behavioral specifications.
//!
//! Provides a fluent CLI builder and a scripted fake `gcloud` executable.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// Keep retry backoff short so failing specs finish quickly.
const GCX_BACKOFF_BASE_MS: &str = "10";

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself when
/// CARGO_MANIFEST_DIR is stale.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>, so its
    // grandparent is target/debug/ where gcx is built.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

pub fn gcx_binary() -> PathBuf {
    binary_path("gcx")
}

/// Create a CLI builder for gcx commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: vec![
                ("GCX_BACKOFF_BASE_MS".into(), GCX_BACKOFF_BASE_MS.into()),
                ("GCX_STATE_DIR".into(), "/nonexistent/gcx-specs-state".into()),
                ("NO_COLOR".into(), "1".into()),
            ],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = Command::new(gcx_binary());
        cmd.args(&self.args);

        // Keep the caller's gcloud setup and log filter out of the specs.
        for var in [
            "GCX_GCLOUD_PATH",
            "GCX_PROJECT",
            "GCX_RECENT_PROJECTS",
            "RUST_LOG",
            "COLOR",
        ] {
            cmd.env_remove(var);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stdout parses as JSON equal to `expected`.
    pub fn stdout_json(self, expected: serde_json::Value) -> Self {
        let actual: serde_json::Value = serde_json::from_str(&self.stdout())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout()));
        similar_asserts::assert_eq!(actual, expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert the process exited with `code`.
    pub fn code(self, code: i32) -> Self {
        assert_eq!(
            self.output.status.code(),
            Some(code),
            "unexpected exit code\nstderr: {}",
            self.stderr()
        );
        self
    }
}

// =============================================================================
// Fake gcloud
// =============================================================================

/// Scripted reply of the fake gcloud for one exact argument list
pub struct Reply {
    stdout: String,
    stderr: String,
    code: i32,
}

impl Reply {
    pub fn json(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            stderr: String::new(),
            code: 0,
        }
    }

    pub fn fail(code: i32, stderr: &str) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.to_string(),
            code,
        }
    }

    /// Add stderr to a reply.
    pub fn with_stderr(mut self, stderr: &str) -> Self {
        self.stderr = stderr.to_string();
        self
    }
}

/// A shell script standing in for gcloud.
///
/// Every invocation appends its arguments to `calls.log` and its argument
/// count to `argc.log`. Argument lists
/// with no scripted reply exit 1 with `unexpected invocation` on stderr.
pub struct FakeGcloud {
    dir: tempfile::TempDir,
    replies: Vec<(String, Reply)>,
}

impl FakeGcloud {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            replies: Vec::new(),
        }
    }

    /// Reply to the exact argument list `args` (everything after the executable).
    pub fn on(mut self, args: &str, reply: Reply) -> Self {
        self.replies.push((args.to_string(), reply));
        self
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("gcloud")
    }

    /// Write the script; must be called before running gcx.
    pub fn install(self) -> Self {
        let dir = self.dir.path();
        let mut script = String::from("#!/bin/sh\n");
        script.push_str(&format!(
            "printf '%s\\n' \"$*\" >> '{}'\n",
            dir.join("calls.log").display()
        ));
        script.push_str(&format!(
            "printf '%s\\n' \"$#\" >> '{}'\n",
            dir.join("argc.log").display()
        ));
        script.push_str("case \"$*\" in\n");
        for (i, (args, reply)) in self.replies.iter().enumerate() {
            let out = dir.join(format!("reply-{i}.out"));
            let err = dir.join(format!("reply-{i}.err"));
            std::fs::write(&out, &reply.stdout).unwrap();
            std::fs::write(&err, &reply.stderr).unwrap();
            script.push_str(&format!(
                "  '{}')\n    cat '{}'\n    cat '{}' >&2\n    exit {}\n    ;;\n",
                args,
                out.display(),
                err.display(),
                reply.code
            ));
        }
        script.push_str("  *)\n    echo \"unexpected invocation: $*\" >&2\n    exit 1\n    ;;\nesac\n");

        let path = self.path();
        std::fs::write(&path, script).unwrap();
        make_executable(&path);
        self
    }

    /// Argument lists gcloud was invoked with, in order.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Number of arguments gcloud received on each invocation, in order.
    pub fn arg_counts(&self) -> Vec<usize> {
        std::fs::read_to_string(self.dir.path().join("argc.log"))
            .unwrap_or_default()
            .lines()
            .map(|line| line.parse().unwrap())
            .collect()
    }

    /// Directory gcx keeps its preferences in for this fake.
    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    /// gcx builder wired to this fake gcloud.
    pub fn gcx(&self) -> CliBuilder {
        cli()
            .env("GCX_GCLOUD_PATH", self.path())
            .env("GCX_STATE_DIR", self.state_dir())
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).unwrap();
}
