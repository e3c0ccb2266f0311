//! Post-generation verifier — bounded retries around an external
//! formatting/linting command.
//!
//! The external tool (by default `pre-commit run --all-files`) may rewrite
//! files in place on a failing run, so a failed attempt is re-run: the loop
//! is a fixed-point iteration capped at `max_attempts`. A tool that
//! oscillates between two states simply exhausts the cap and reports
//! failure; there is no oscillation detection and no timeout — a hung tool
//! hangs the run.

use std::fmt;
use std::process::Command;

use crate::error::SiteError;

/// Default number of attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// How much of the failing tool's output to keep in the error.
const OUTPUT_TAIL_BYTES: usize = 2000;

/// The external command to invoke, one invocation per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl VerifyCommand {
    /// Parse a whitespace-separated command line, e.g. `"pre-commit run
    /// --all-files"`. Returns `None` for an empty string.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(VerifyCommand {
            program,
            args: parts.collect(),
        })
    }
}

impl Default for VerifyCommand {
    fn default() -> Self {
        VerifyCommand {
            program: "pre-commit".to_string(),
            args: vec!["run".to_string(), "--all-files".to_string()],
        }
    }
}

impl fmt::Display for VerifyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run the verification command until it succeeds or `max_attempts` is
/// exhausted.
///
/// Each attempt is a blocking subprocess invocation whose exit status is the
/// sole success signal. Returns the number of attempts made (1-based) on
/// success. On final failure, [`SiteError::VerifierExhausted`] carries a
/// tail of the last attempt's combined stdout/stderr.
pub fn verify_and_fix(cmd: &VerifyCommand, max_attempts: u32) -> Result<u32, SiteError> {
    // A zero cap would mean no invocations at all; the tool always runs at
    // least once. The CLI additionally rejects 0 at argument parsing.
    let max_attempts = max_attempts.max(1);

    let mut last_output = String::new();
    for attempt in 1..=max_attempts {
        let output = Command::new(&cmd.program)
            .args(&cmd.args)
            .output()
            .map_err(|e| SiteError::VerifierSpawn {
                command: cmd.to_string(),
                source: e,
            })?;

        if output.status.success() {
            tracing::info!("verification passed on attempt {attempt}");
            return Ok(attempt);
        }

        tracing::warn!(
            "verification attempt {attempt}/{max_attempts} failed (status {})",
            output.status
        );
        last_output = combined_tail(&output.stdout, &output.stderr);
    }

    Err(SiteError::VerifierExhausted {
        command: cmd.to_string(),
        attempts: max_attempts,
        output: last_output,
    })
}

fn combined_tail(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::new();
    combined.push_str(String::from_utf8_lossy(stdout).trim());
    let err = String::from_utf8_lossy(stderr);
    if !err.trim().is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(err.trim());
    }
    // Keep only the tail; pre-commit output can run long.
    if combined.len() > OUTPUT_TAIL_BYTES {
        let cut = combined.len() - OUTPUT_TAIL_BYTES;
        let cut = combined
            .char_indices()
            .map(|(i, _)| i)
            .find(|&i| i >= cut)
            .unwrap_or(0);
        combined = combined[cut..].to_string();
    }
    combined
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_program_and_args() {
        let cmd = VerifyCommand::parse("pre-commit run --all-files").unwrap();
        assert_eq!(cmd.program, "pre-commit");
        assert_eq!(cmd.args, vec!["run", "--all-files"]);
    }

    #[test]
    fn parse_empty_line_is_none() {
        assert!(VerifyCommand::parse("   ").is_none());
    }

    #[test]
    fn display_reconstructs_the_command_line() {
        assert_eq!(VerifyCommand::default().to_string(), "pre-commit run --all-files");
    }

    #[test]
    fn tail_is_bounded_and_merges_streams() {
        let long = "x".repeat(OUTPUT_TAIL_BYTES * 2);
        let tail = combined_tail(long.as_bytes(), b"the actual error");
        assert!(tail.len() <= OUTPUT_TAIL_BYTES);
        assert!(tail.ends_with("the actual error"));
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use tempfile::TempDir;

        /// A command that fails until its counter file reaches
        /// `succeed_after`, recording one line per invocation.
        fn flaky_command(dir: &TempDir, succeed_after: u32) -> VerifyCommand {
            let counter = dir.path().join("attempts");
            let script = format!(
                "echo run >> {c}; test $(wc -l < {c}) -ge {n}",
                c = counter.display(),
                n = succeed_after
            );
            VerifyCommand {
                program: "sh".to_string(),
                args: vec!["-c".to_string(), script],
            }
        }

        fn invocations(dir: &TempDir) -> u32 {
            std::fs::read_to_string(dir.path().join("attempts"))
                .map(|s| s.lines().count() as u32)
                .unwrap_or(0)
        }

        #[test]
        fn immediate_success_makes_one_invocation() {
            let dir = TempDir::new().unwrap();
            let cmd = flaky_command(&dir, 1);
            let attempts = verify_and_fix(&cmd, 3).unwrap();
            assert_eq!(attempts, 1);
            assert_eq!(invocations(&dir), 1);
        }

        #[test]
        fn success_on_third_attempt_makes_exactly_three_invocations() {
            let dir = TempDir::new().unwrap();
            let cmd = flaky_command(&dir, 3);
            let attempts = verify_and_fix(&cmd, 3).unwrap();
            assert_eq!(attempts, 3);
            assert_eq!(invocations(&dir), 3);
        }

        #[test]
        fn exhaustion_makes_exactly_max_attempts_invocations() {
            let dir = TempDir::new().unwrap();
            let cmd = flaky_command(&dir, 10);
            let err = verify_and_fix(&cmd, 3).expect_err("never converges");
            match err {
                SiteError::VerifierExhausted { attempts, .. } => assert_eq!(attempts, 3),
                other => panic!("expected VerifierExhausted, got {other:?}"),
            }
            assert_eq!(invocations(&dir), 3);
        }

        #[test]
        fn zero_attempt_cap_still_invokes_once() {
            let dir = TempDir::new().unwrap();
            let cmd = flaky_command(&dir, 1);
            let attempts = verify_and_fix(&cmd, 0).unwrap();
            assert_eq!(attempts, 1);
            assert_eq!(invocations(&dir), 1);
        }

        #[test]
        fn zero_attempt_cap_on_a_failing_tool_reports_one_attempt() {
            let cmd = VerifyCommand::parse("false").unwrap();
            let err = verify_and_fix(&cmd, 0).expect_err("tool fails");
            match err {
                SiteError::VerifierExhausted { attempts, .. } => assert_eq!(attempts, 1),
                other => panic!("expected VerifierExhausted, got {other:?}"),
            }
        }

        #[test]
        fn exhaustion_surfaces_the_tools_output() {
            let cmd = VerifyCommand {
                program: "sh".to_string(),
                args: vec![
                    "-c".to_string(),
                    "echo tool-complaint; echo on-stderr >&2; exit 1".to_string(),
                ],
            };
            let err = verify_and_fix(&cmd, 2).expect_err("always fails");
            match err {
                SiteError::VerifierExhausted { output, .. } => {
                    assert!(output.contains("tool-complaint"));
                    assert!(output.contains("on-stderr"));
                }
                other => panic!("expected VerifierExhausted, got {other:?}"),
            }
        }

        #[test]
        fn unspawnable_command_is_a_spawn_error() {
            let cmd = VerifyCommand {
                program: "definitely-not-a-real-tool-9b3f".to_string(),
                args: vec![],
            };
            let err = verify_and_fix(&cmd, 3).expect_err("cannot spawn");
            assert!(matches!(err, SiteError::VerifierSpawn { .. }));
        }
    }
}
