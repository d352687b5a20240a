//! mathc-drv - Tokenizer Driver
//!
//! Reads source files, runs the lexer over each one and prints the token
//! stream. A lexing failure is rendered as a diagnostic against the file it
//! came from.

pub mod config;
pub mod error;

use std::io::Write;
use std::path::PathBuf;

use indexmap::IndexMap;
use mathc_lex::{Lexer, Token, TokenKind};
use mathc_util::SourceFile;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

pub use config::{Config, OutputConfig, OutputFormat};
pub use error::{DriverError, Result};

/// Per-run options, merged from the command line and the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// Source files, tokenized in order.
    pub files: Vec<PathBuf>,
    /// Token stream format.
    pub format: OutputFormat,
    /// Print per-kind counts after each stream.
    pub summary: bool,
}

impl Options {
    /// Options for `files` with output settings taken from `config`.
    pub fn from_config(config: &Config, files: Vec<PathBuf>) -> Self {
        Self {
            files,
            format: config.output.format,
            summary: config.output.summary,
        }
    }
}

/// The tokens of one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTokens {
    /// Display name of the file.
    pub name: String,
    /// Tokens in source order.
    pub tokens: Vec<Token>,
}

/// One driver run over a set of loaded source files.
pub struct Session {
    options: Options,
    sources: Vec<SourceFile>,
}

impl Session {
    /// Reads every input file.
    pub fn new(options: Options) -> Result<Self> {
        if options.files.is_empty() {
            return Err(DriverError::NoInputFiles);
        }

        let sources = options
            .files
            .iter()
            .map(|path| -> Result<SourceFile> {
                let content = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
                    path: path.clone(),
                    source,
                })?;
                Ok(SourceFile::new(path.display().to_string(), content))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { options, sources })
    }

    /// Tokenizes every file, stopping at the first failure.
    pub fn lex(&self) -> Result<Vec<FileTokens>> {
        self.options
            .files
            .iter()
            .zip(&self.sources)
            .map(|(path, file)| -> Result<FileTokens> {
                let tokens = lex_source(file).map_err(|source| DriverError::Lex {
                    path: path.clone(),
                    rendered: source.to_diagnostic().render(file),
                    source,
                })?;
                info!(file = file.name(), tokens = tokens.len(), "tokenized");
                Ok(FileTokens {
                    name: file.name().to_string(),
                    tokens,
                })
            })
            .collect()
    }

    /// Tokenizes every file and writes the streams to `out`.
    ///
    /// Nothing is written unless every file tokenizes.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let files = self.lex()?;
        let headers = files.len() > 1;

        for file in &files {
            match self.options.format {
                OutputFormat::Text => {
                    if headers {
                        writeln!(out, "==> {} <==", file.name)?;
                    }
                    write_text(out, &file.tokens, self.options.summary)?;
                }
                OutputFormat::Json => write_json(out, &file.tokens, self.options.summary)?,
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// Tokenizes one source file.
///
/// One trailing `\n` ends the last statement; it is dropped before lexing.
pub fn lex_source(file: &SourceFile) -> std::result::Result<Vec<Token>, mathc_lex::LexError> {
    let content = file.content();
    let lexer = Lexer::new(content.strip_suffix('\n').unwrap_or(content))?;
    debug!(file = file.name(), lexemes = lexer.remaining(), "lexing");
    lexer.collect()
}

/// Counts tokens per kind, in order of first appearance.
pub fn summarize(tokens: &[Token]) -> IndexMap<TokenKind, usize> {
    let mut counts = IndexMap::new();
    for token in tokens {
        *counts.entry(token.kind()).or_insert(0) += 1;
    }
    counts
}

/// `Kind(value)` listing form of a token, e.g. `Number(3.0)`.
pub fn describe(token: &Token) -> String {
    match token {
        Token::Name(name) => format!("Name({})", name),
        Token::Number(value) => format!("Number({:?})", value),
        Token::StringLiteral(text) => format!("StringLiteral({})", text),
        Token::Symbol(c) => format!("Symbol({})", c),
    }
}

#[derive(Serialize)]
struct TokenRecord {
    kind: &'static str,
    value: Value,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        let value = match token {
            Token::Name(name) => json!(name),
            Token::Number(value) => json!(value),
            Token::StringLiteral(text) => json!(text),
            Token::Symbol(c) => json!(c.to_string()),
        };
        Self {
            kind: token.kind().as_str(),
            value,
        }
    }
}

fn write_text<W: Write>(out: &mut W, tokens: &[Token], summary: bool) -> Result<()> {
    for token in tokens {
        writeln!(out, "{}", describe(token))?;
    }
    if summary {
        writeln!(out, "-- {} tokens", tokens.len())?;
        for (kind, count) in summarize(tokens) {
            writeln!(out, "{}: {}", kind, count)?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, tokens: &[Token], summary: bool) -> Result<()> {
    let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();

    if summary {
        let counts: IndexMap<&'static str, usize> = summarize(tokens)
            .into_iter()
            .map(|(kind, count)| (kind.as_str(), count))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &json!({ "tokens": records, "summary": counts }))?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &records)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PROGRAM: &str = "let x = 5;\nlet y = x + -3;\nprint y;";

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run_to_string(options: Options) -> Result<String> {
        let session = Session::new(options)?;
        let mut out = Vec::new();
        session.run(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Token::Name("let".into())), "Name(let)");
        assert_eq!(describe(&Token::Number(3.0)), "Number(3.0)");
        assert_eq!(describe(&Token::Number(2.5)), "Number(2.5)");
        assert_eq!(describe(&Token::StringLiteral("a b".into())), "StringLiteral(a b)");
        assert_eq!(describe(&Token::Symbol(';')), "Symbol(;)");
    }

    #[test]
    fn test_lex_source_accepts_final_newline() {
        let file = SourceFile::new("main.math", "x;\ny;\n");
        assert_eq!(
            lex_source(&file).unwrap(),
            mathc_lex::tokenize("x;\ny;").unwrap()
        );
    }

    #[test]
    fn test_lex_source_rejects_trailing_blank_line() {
        let file = SourceFile::new("main.math", "x;\n\n");
        let err = lex_source(&file).unwrap_err();
        assert_eq!(err.kind(), mathc_lex::ErrorKind::MissingTerminator);
        assert_eq!(err.span().line, 2);
    }

    #[test]
    fn test_summarize_keeps_first_seen_order() {
        let tokens = mathc_lex::tokenize("x = 1;").unwrap();
        let counts: Vec<_> = summarize(&tokens).into_iter().collect();
        assert_eq!(
            counts,
            vec![(TokenKind::Name, 1), (TokenKind::Symbol, 2), (TokenKind::Number, 1)]
        );
    }

    #[test]
    fn test_session_requires_files() {
        assert!(matches!(
            Session::new(Options::default()),
            Err(DriverError::NoInputFiles)
        ));
    }

    #[test]
    fn test_session_reports_unreadable_file() {
        let options = Options {
            files: vec![PathBuf::from("/nonexistent/main.math")],
            ..Options::default()
        };
        assert!(matches!(Session::new(options), Err(DriverError::Read { .. })));
    }

    #[test]
    fn test_run_text() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "main.math", PROGRAM);

        let output = run_to_string(Options {
            files: vec![path],
            ..Options::default()
        })
        .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "Name(let)");
        assert_eq!(lines[3], "Number(5.0)");
        assert_eq!(lines[15], "Symbol(;)");
    }

    #[test]
    fn test_run_text_summary() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "main.math", PROGRAM);

        let output = run_to_string(Options {
            files: vec![path],
            format: OutputFormat::Text,
            summary: true,
        })
        .unwrap();

        assert!(output.contains("-- 16 tokens\nName: 7\nSymbol: 7\nNumber: 2\n"));
    }

    #[test]
    fn test_run_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "main.math", "print \"hi\" - 2;");

        let output = run_to_string(Options {
            files: vec![path],
            format: OutputFormat::Json,
            summary: false,
        })
        .unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!([
                { "kind": "Name", "value": "print" },
                { "kind": "StringLiteral", "value": "hi" },
                { "kind": "Symbol", "value": "-" },
                { "kind": "Number", "value": 2.0 },
                { "kind": "Symbol", "value": ";" },
            ])
        );
    }

    #[test]
    fn test_run_json_summary() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "main.math", "x = 1;");

        let output = run_to_string(Options {
            files: vec![path],
            format: OutputFormat::Json,
            summary: true,
        })
        .unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["tokens"].as_array().unwrap().len(), 4);
        assert_eq!(value["summary"], json!({ "Name": 1, "Symbol": 2, "Number": 1 }));
    }

    #[test]
    fn test_run_multiple_files_have_headers() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.math", "a;");
        let b = write_file(&dir, "b.math", "b;");

        let output = run_to_string(Options {
            files: vec![a.clone(), b.clone()],
            ..Options::default()
        })
        .unwrap();

        let expected = format!(
            "==> {} <==\nName(a)\nSymbol(;)\n==> {} <==\nName(b)\nSymbol(;)\n",
            a.display(),
            b.display()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_lex_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let good = write_file(&dir, "good.math", "a;");
        let bad = write_file(&dir, "bad.math", "let x = 5;\nprint y");

        let session = Session::new(Options {
            files: vec![good, bad],
            ..Options::default()
        })
        .unwrap();

        let mut out = Vec::new();
        let err = session.run(&mut out).unwrap_err();
        assert!(out.is_empty());

        match err {
            DriverError::Lex { rendered, .. } => {
                assert!(rendered.starts_with("error[E1001]: Invalid end of statement"));
                assert!(rendered.contains("bad.math:2:7"));
                assert!(rendered.contains("2 | print y"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
