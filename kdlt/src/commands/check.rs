//! Check command implementation.
//!
//! This module lexes every sample document found under the given paths and
//! reports each character the lexer could not recognise.

use std::io::Write;
use std::path::PathBuf;

use kdl_lex::{lex, TokenKind};

use crate::commands::common::{collect_documents, output_messages, read_document};
use crate::commands::traits::Command;
use crate::config::{CheckConfig, Config};
use crate::error::{KdltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files and directories to check.
    pub paths: Vec<PathBuf>,
    /// Extensions to look for, replacing the configured ones when non-empty.
    pub extensions: Vec<String>,
    /// Do not descend into subdirectories.
    pub no_recursive: bool,
    /// Report unknown tokens without failing.
    pub allow_unknown: bool,
}

/// Totals gathered by a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Documents lexed.
    pub files: usize,
    /// Tokens produced across all documents.
    pub tokens: usize,
    /// `Unknown` tokens across all documents.
    pub unknown: usize,
    /// Documents with at least one `Unknown` token.
    pub files_with_unknown: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Get the effective check configuration.
    pub fn get_check_config(&self) -> CheckConfig {
        let mut config = self.config.check.clone();

        if !self.args.extensions.is_empty() {
            config.extensions = self.args.extensions.clone();
        }

        if self.args.no_recursive {
            config.recursive = false;
        }

        if self.args.allow_unknown {
            config.fail_on_unknown = false;
        }

        config
    }

    fn run(&self, out: &mut dyn Write) -> Result<CheckReport> {
        let config = self.get_check_config();
        let documents = collect_documents(&self.args.paths, &config.extensions, config.recursive)?;

        let mut report = CheckReport::default();
        for path in &documents {
            let buffer = lex(read_document(path)?);
            report.files += 1;
            report.tokens += buffer.len();

            let unknown = buffer.unknown_count();
            tracing::debug!(file = %path.display(), tokens = buffer.len(), unknown, "checked");
            if unknown == 0 {
                continue;
            }

            report.unknown += unknown;
            report.files_with_unknown += 1;
            for (token, (line, column)) in buffer
                .iter_located()
                .filter(|(token, _)| token.kind == TokenKind::Unknown)
            {
                writeln!(
                    out,
                    "{}:{}:{}: unknown character {:?}",
                    path.display(),
                    line,
                    column,
                    token.text
                )?;
            }
        }

        writeln!(
            out,
            "{} {} file(s), {} token(s), {} unknown",
            output_messages::CHECKED,
            report.files,
            report.tokens,
            report.unknown
        )?;

        if report.unknown > 0 {
            if config.fail_on_unknown {
                return Err(KdltError::UnknownTokens {
                    count: report.unknown,
                    files: report.files_with_unknown,
                });
            }
            tracing::warn!(unknown = report.unknown, "unknown tokens allowed");
        }

        Ok(report)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        self.run(out)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command against standard output.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    let command = CheckCommand::new(args, config);
    let stdout = std::io::stdout();
    let report = command.execute(&mut stdout.lock())?;
    tracing::info!(files = report.files, tokens = report.tokens, "check complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("good.kdl"), "node 1 key=\"value\" { child #null }\n").unwrap();
        std::fs::create_dir(root.join("nested")).unwrap();
        std::fs::write(root.join("nested").join("bad.kdl"), "node\n  [1]\n").unwrap();
        std::fs::write(root.join("ignored.txt"), "[[[").unwrap();
        temp_dir
    }

    fn run_check_to_string(args: CheckArgs, config: Config) -> (Result<CheckReport>, String) {
        let mut out = Vec::new();
        let result = CheckCommand::new(args, config).execute(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check_command_name() {
        assert_eq!(<CheckCommand as Command>::name(), "check");
    }

    #[test]
    fn test_check_clean_document() {
        let temp_dir = sample_tree();
        let args = CheckArgs {
            paths: vec![temp_dir.path().join("good.kdl")],
            ..CheckArgs::default()
        };

        let (result, output) = run_check_to_string(args, Config::default());
        let report = result.unwrap();
        assert_eq!(report.files, 1);
        assert_eq!(report.unknown, 0);
        assert!(output.starts_with("Checked 1 file(s), "));
    }

    #[test]
    fn test_check_reports_unknown_locations() {
        let temp_dir = sample_tree();
        let args = CheckArgs {
            paths: vec![temp_dir.path().to_path_buf()],
            ..CheckArgs::default()
        };

        let (result, output) = run_check_to_string(args, Config::default());
        assert!(matches!(
            result,
            Err(KdltError::UnknownTokens { count: 2, files: 1 })
        ));

        let bad = temp_dir.path().join("nested").join("bad.kdl");
        assert!(output.contains(&format!("{}:2:3: unknown character \"[\"", bad.display())));
        assert!(output.contains(&format!("{}:2:5: unknown character \"]\"", bad.display())));
        assert!(output.contains("Checked 2 file(s)"));
        assert!(!output.contains("ignored.txt"));
    }

    #[test]
    fn test_check_allow_unknown() {
        let temp_dir = sample_tree();
        let args = CheckArgs {
            paths: vec![temp_dir.path().to_path_buf()],
            allow_unknown: true,
            ..CheckArgs::default()
        };

        let (result, _) = run_check_to_string(args, Config::default());
        let report = result.unwrap();
        assert_eq!(report.unknown, 2);
        assert_eq!(report.files_with_unknown, 1);
    }

    #[test]
    fn test_check_no_recursive() {
        let temp_dir = sample_tree();
        let args = CheckArgs {
            paths: vec![temp_dir.path().to_path_buf()],
            no_recursive: true,
            ..CheckArgs::default()
        };

        let (result, _) = run_check_to_string(args, Config::default());
        assert_eq!(result.unwrap().files, 1);
    }

    #[test]
    fn test_check_config_overrides() {
        let mut config = Config::default();
        config.check.fail_on_unknown = false;
        config.check.extensions = vec!["txt".to_string()];

        let command = CheckCommand::new(CheckArgs::default(), config.clone());
        let check_config = command.get_check_config();
        assert_eq!(check_config.extensions, ["txt"]);
        assert!(!check_config.fail_on_unknown);

        let args = CheckArgs {
            extensions: vec!["kdl".to_string()],
            no_recursive: true,
            ..CheckArgs::default()
        };
        let check_config = CheckCommand::new(args, config).get_check_config();
        assert_eq!(check_config.extensions, ["kdl"]);
        assert!(!check_config.recursive);
    }

    #[test]
    fn test_check_large_unknown_run() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("garbage.kdl");
        std::fs::write(&file, format!("node\n{}", "[".repeat(50_000))).unwrap();
        let args = CheckArgs {
            paths: vec![file.clone()],
            allow_unknown: true,
            ..CheckArgs::default()
        };

        let (result, output) = run_check_to_string(args, Config::default());
        assert_eq!(result.unwrap().unknown, 50_000);
        assert!(output.contains(&format!("{}:2:1: unknown character", file.display())));
        assert!(output.contains(&format!("{}:2:50000: unknown character", file.display())));
    }

    #[test]
    fn test_check_missing_path() {
        let args = CheckArgs {
            paths: vec![PathBuf::from("/nonexistent/dir")],
            ..CheckArgs::default()
        };
        let (result, _) = run_check_to_string(args, Config::default());
        assert!(matches!(result, Err(KdltError::Validation(_))));
    }
}
