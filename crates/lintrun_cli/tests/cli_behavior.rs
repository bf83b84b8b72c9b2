//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool,
//! following behavior-driven testing principles. The linter is a small
//! shell script that fails any file containing the word `bad`.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a command for the lintrun CLI
fn lintrun_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lintrun"))
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        lintrun_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        lintrun_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_zero_workers() {
        lintrun_cmd()
            .args(["run", "--max-workers", "0", "src/**/*.js"])
            .assert()
            .code(2);
    }
}

#[cfg(unix)]
mod run_command {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    const FAKE_LINTER: &str = r#"for f; do :; done
if grep -q bad "$f"; then
  echo "$f: Unexpected token"
  exit 1
fi
exit 0
"#;

    /// A project whose config runs the fake linter through `sh`.
    fn project(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let script = temp.child("fake-lint.sh");
        script.write_str(FAKE_LINTER).unwrap();

        let config = serde_json::json!({
            "maxWorkers": 2,
            "linter": {
                "command": "sh",
                "args": [script.path().to_string_lossy()],
            },
        });
        temp.child(".lintrun.json")
            .write_str(&config.to_string())
            .unwrap();

        for (name, content) in files {
            temp.child(name).write_str(content).unwrap();
        }
        temp
    }

    #[test]
    fn passes_clean_files() {
        let temp = project(&[("src/a.js", "ok"), ("src/b.js", "ok")]);

        lintrun_cmd()
            .current_dir(temp.path())
            .args(["run", "src/**/*.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("PASS"))
            .stdout(predicate::str::contains("Files: 2 passed, 2 total"));
    }

    #[test]
    fn fails_files_with_lint_errors() {
        let temp = project(&[("src/a.js", "ok"), ("src/bad.js", "bad code")]);

        lintrun_cmd()
            .current_dir(temp.path())
            .args(["run", "src/**/*.js"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("FAIL"))
            .stdout(predicate::str::contains("Unexpected token"))
            .stdout(predicate::str::contains("Files: 1 passed, 1 failed, 2 total"));
    }

    #[test]
    fn prints_json_records() {
        let temp = project(&[("src/bad.js", "bad code")]);

        let output = lintrun_cmd()
            .current_dir(temp.path())
            .args(["run", "--format", "json", "src/**/*.js"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["numFailedTestSuites"], 1);
        let record = &json["testResults"][0];
        assert_eq!(record["numFailingTests"], 1);
        assert_eq!(record["testResults"][0]["status"], "failed");
        let message = record["failureMessage"].as_str().unwrap();
        assert!(message.contains("Unexpected token"), "{}", message);
    }

    #[test]
    fn lints_file_named_twice_once() {
        let temp = project(&[("src/a.js", "ok")]);

        lintrun_cmd()
            .current_dir(temp.path())
            .args(["run", "src/a.js", "./src/a.js", "src/*.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Files: 1 passed, 1 total"));
    }

    #[test]
    fn skips_node_modules_by_default() {
        let temp = project(&[("src/a.js", "ok"), ("node_modules/dep/index.js", "bad code")]);

        lintrun_cmd()
            .current_dir(temp.path())
            .args(["run", "**/*.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Files: 1 passed, 1 total"));
    }

    #[test]
    fn reports_missing_linter_as_error() {
        let temp = project(&[("src/a.js", "ok")]);

        lintrun_cmd()
            .current_dir(temp.path())
            .args(["run", "--linter", "/nonexistent/eslint", "src/**/*.js"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to run linter"))
            .stdout(predicate::str::contains("1 errored"));
    }

    #[test]
    fn rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        temp.child(".lintrun.json")
            .write_str(r#"{ "maxWorkers": 0 }"#)
            .unwrap();

        lintrun_cmd()
            .current_dir(temp.path())
            .args(["run", "src/**/*.js"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("maxWorkers must be at least 1"));
    }

    #[test]
    fn reports_zero_files_for_unmatched_pattern() {
        let temp = project(&[]);

        lintrun_cmd()
            .current_dir(temp.path())
            .args(["run", "nothing/**/*.js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Files: 0 passed, 0 total"));
    }
}
