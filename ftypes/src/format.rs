//! Optional formatting of generated declarations with Prettier.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use eyre::{Result, WrapErr, bail};
use tracing::debug;

/// Runs `npx prettier --parser typescript`, feeding source through stdin.
#[derive(Debug, Clone)]
pub struct Prettier {
    program: String,
    args: Vec<String>,
}

impl Default for Prettier {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: ["--yes", "prettier", "--parser", "typescript"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl Prettier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `source`; `name` only labels log lines and errors.
    pub fn format(&self, name: &str, source: &str) -> Result<String> {
        debug!(file = name, "formatting with prettier");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .wrap_err_with(|| format!("failed to run '{}'; is Node.js installed?", self.program))?;

        // Prettier reads all of stdin before writing anything. The child is
        // always reaped; its exit status outranks a broken pipe.
        let sent = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .wrap_err("failed to wait for prettier")?;
        if !output.status.success() {
            bail!(
                "prettier failed on {} ({}): {}",
                name,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        sent.wrap_err_with(|| format!("failed to send {} to prettier", name))?;

        String::from_utf8(output.stdout).wrap_err("prettier printed invalid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake(program: &str, args: &[&str]) -> Prettier {
        Prettier {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_output_is_returned() {
        let formatted = fake("cat", &[]).format("Account.d.ts", "type A = {};\n").unwrap();
        assert_eq!(formatted, "type A = {};\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_carries_stderr() {
        let err = fake("sh", &["-c", "cat >/dev/null; echo boom >&2; exit 2"])
            .format("Account.d.ts", "type A = {};")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Account.d.ts"));
        assert!(message.contains("boom"));
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_reports_stderr_not_broken_pipe() {
        let source = "type A = {};\n".repeat(100_000);
        let err = fake("sh", &["-c", "echo boom >&2; exit 2"])
            .format("Big.d.ts", &source)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Big.d.ts"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_missing_program() {
        let err = fake("ftypes-no-such-program", &[])
            .format("Account.d.ts", "")
            .unwrap_err();
        assert!(err.to_string().contains("ftypes-no-such-program"));
    }
}
