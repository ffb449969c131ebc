//! Lex command implementation.
//!
//! This module lexes KDL documents and prints their tokens, either as a
//! plain-text listing or as JSON.

use std::io::Write;
use std::path::{Path, PathBuf};

use kdl_lex::{lex, TokenBuffer};
use serde::Serialize;

use crate::commands::common::{output_messages, read_document, OutputFormat};
use crate::commands::traits::Command;
use crate::config::{Config, LexConfig};
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Documents to lex.
    pub files: Vec<PathBuf>,
    /// Output format, overriding the configuration.
    pub format: Option<OutputFormat>,
    /// Also print skipped whitespace and comments.
    pub show_skipped: bool,
}

/// Tokens of one document, as serialized in JSON output.
#[derive(Debug, Serialize)]
struct DocumentTokens {
    file: String,
    tokens: Vec<TokenRecord>,
}

#[derive(Debug, Serialize)]
struct TokenRecord {
    kind: &'static str,
    start: usize,
    end: usize,
    text: String,
}

impl DocumentTokens {
    fn new(path: &Path, buffer: &TokenBuffer) -> Self {
        Self {
            file: path.display().to_string(),
            tokens: buffer
                .iter()
                .map(|token| TokenRecord {
                    kind: token.kind.name(),
                    start: token.span.start,
                    end: token.span.end,
                    text: token.text.to_string(),
                })
                .collect(),
        }
    }
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Get the effective lex configuration.
    pub fn get_lex_config(&self) -> LexConfig {
        let mut config = self.config.lex.clone();

        if let Some(format) = self.args.format {
            config.format = format;
        }

        config.show_skipped |= self.args.show_skipped;

        config
    }

    /// Lex every document and write the listing. Returns the token count.
    fn run(&self, out: &mut dyn Write) -> Result<usize> {
        let config = self.get_lex_config();
        tracing::debug!(format = config.format.name(), files = self.args.files.len(), "lexing");

        let mut documents = Vec::with_capacity(self.args.files.len());
        for path in &self.args.files {
            let buffer = lex(read_document(path)?);
            tracing::info!(file = %path.display(), tokens = buffer.len(), "lexed");
            if buffer.has_unknown() {
                tracing::warn!(
                    file = %path.display(),
                    unknown = buffer.unknown_count(),
                    "document contains unknown tokens"
                );
            }
            documents.push((path.as_path(), buffer));
        }

        match config.format {
            OutputFormat::Text => {
                let with_headers = documents.len() > 1;
                for (path, buffer) in &documents {
                    if with_headers {
                        writeln!(out, "# {}", path.display())?;
                    }
                    write_text_listing(out, buffer, config.show_skipped)?;
                }
            },
            OutputFormat::Json => {
                let records: Vec<_> = documents
                    .iter()
                    .map(|(path, buffer)| DocumentTokens::new(path, buffer))
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            },
        }

        Ok(documents.iter().map(|(_, buffer)| buffer.len()).sum())
    }
}

/// Write one line per token: `index kind start..end "text"`.
///
/// With `show_skipped`, each gap between tokens gets its own line with
/// `-` in place of the index.
fn write_text_listing(out: &mut dyn Write, buffer: &TokenBuffer, show_skipped: bool) -> Result<()> {
    let mut previous_end = 0;
    for (index, token) in buffer.iter().enumerate() {
        if show_skipped && token.span.start > previous_end {
            let gap = &buffer.source()[previous_end..token.span.start];
            writeln!(
                out,
                "- {} {}..{} {:?}",
                output_messages::SKIPPED,
                previous_end,
                token.span.start,
                gap
            )?;
        }
        writeln!(out, "{} {} {} {:?}", index, token.kind, token.span, token.text)?;
        previous_end = token.span.end;
    }
    Ok(())
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = usize;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        self.run(out)
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Run the lex command against standard output.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    let command = LexCommand::new(args, config);
    let stdout = std::io::stdout();
    command.execute(&mut stdout.lock())?;
    Ok(())
}
