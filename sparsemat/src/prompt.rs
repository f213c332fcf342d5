//! Interactive prompt session
//!
//! Asks for an operation and two file paths, runs the operation and prints
//! the result. Input and output are generic so the session can be driven
//! from a terminal or from memory.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use sparsemat_core::{Operation, SparseMatrix};
use tracing::debug;

use crate::command::{apply_logged, load_operands};
use crate::config::{OutputFormat, ReaderConfig};
use crate::error::Result;
use crate::render::render_result;

const OPERATION_PROMPT: &str = "Choose operation (add, subtract, multiply): ";
const LHS_PROMPT: &str = "Enter path to first matrix file: ";
const RHS_PROMPT: &str = "Enter path to second matrix file: ";

/// Raw answers to the three prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub op: String,
    pub lhs: PathBuf,
    pub rhs: PathBuf,
}

pub struct PromptSession<R, W> {
    input: R,
    output: W,
    config: ReaderConfig,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            config: ReaderConfig::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Ask the three questions
    pub fn read_answers(&mut self) -> Result<Answers> {
        let op = self.ask(OPERATION_PROMPT)?;
        let lhs = self.ask(LHS_PROMPT)?;
        let rhs = self.ask(RHS_PROMPT)?;

        Ok(Answers {
            op,
            lhs: lhs.into(),
            rhs: rhs.into(),
        })
    }

    /// Run one full session and print the result
    ///
    /// Both files are loaded before the operation name is checked, so a
    /// file error wins over an unknown operation.
    pub fn run(&mut self) -> Result<SparseMatrix> {
        let answers = self.read_answers()?;
        debug!(?answers, "prompt answered");

        let (lhs, rhs) = load_operands(&answers.lhs, &answers.rhs, &self.config)?;
        let op: Operation = answers.op.parse()?;

        let result = apply_logged(op, &lhs, &rhs)?;
        render_result(&mut self.output, &result, self.format)?;
        Ok(result)
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input closed at prompt {:?}", prompt.trim_end()),
            )
            .into());
        }
        Ok(answer.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, MalformedKind};
    use sparsemat_core::{MatrixError, Shape};
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    fn session(answers: String) -> PromptSession<Cursor<Vec<u8>>, Vec<u8>> {
        PromptSession::new(Cursor::new(answers.into_bytes()), Vec::new())
    }

    fn answers(op: &str, a: &Path, b: &Path) -> String {
        format!("{op}\n{}\n{}\n", a.display(), b.display())
    }

    #[test]
    fn test_add_session() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "rows=3\ncols=3\n(0, 1, 5)\n(2, 0, -2)\n").unwrap();
        fs::write(&b, "rows=3\ncols=3\n(0, 1, -5)\n(1, 1, 7)\n").unwrap();

        let mut s = session(answers("Add", &a, &b));
        let result = s.run().unwrap();
        assert_eq!(result.nnz(), 2);

        let printed = String::from_utf8(s.into_output()).unwrap();
        assert_eq!(
            printed,
            format!(
                "{OPERATION_PROMPT}{LHS_PROMPT}{RHS_PROMPT}\
                 Result matrix (3 x 3):\n(1, 1, 7)\n(2, 0, -2)\n"
            )
        );
    }

    #[test]
    fn test_unknown_operation() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "rows=1\ncols=1\n(0, 0, 1)\n").unwrap();

        let err = session(answers("divide", &a, &a)).run().unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
        assert_eq!(
            err.to_string(),
            "Invalid operation. Choose add, subtract, or multiply."
        );
    }

    #[test]
    fn test_file_error_before_unknown_operation() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "rows=1\ncols=1\n").unwrap();
        fs::write(&b, "rows=1\ncols=1\n(0 0 1)\n").unwrap();

        let err = session(answers("divide", &a, &b)).run().unwrap_err();
        assert_eq!(err.malformed_kind(), Some(MalformedKind::InvalidFormat));

        let missing = dir.path().join("missing.txt");
        let err = session(answers("divide", &missing, &a)).run().unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "rows=2\ncols=3\n(0, 0, 1)\n").unwrap();
        fs::write(&b, "rows=2\ncols=2\n(0, 0, 1)\n").unwrap();

        let err = session(answers("multiply", &a, &b)).run().unwrap_err();
        assert!(matches!(
            err,
            Error::Matrix(MatrixError::DimensionMismatch { lhs, rhs, .. })
                if lhs == Shape::new(2, 3) && rhs == Shape::new(2, 2)
        ));
    }

    #[test]
    fn test_closed_input() {
        let err = session("add\n".to_string()).read_answers().unwrap_err();
        assert!(matches!(err, Error::Stream(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
