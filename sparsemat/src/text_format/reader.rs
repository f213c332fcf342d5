//! Parsing of entry-list text into a matrix

use std::str::FromStr;

use sparsemat_core::validation::check_coord;
use sparsemat_core::{Coord, Entry, MatrixElement, MatrixError, Operation, Shape, SparseMatrix};
use tracing::trace;

use super::{COLS_KEY, ROWS_KEY};
use crate::config::{DuplicatePolicy, ReaderConfig};
use crate::error::{Error, MalformedKind, Result};

/// Parse a `key=<N>` header line
///
/// Whitespace around the key, `=` and value is tolerated; the key must match
/// exactly.
pub fn parse_header_line(line_no: usize, line: &str, key: &str) -> Result<usize> {
    let invalid = || Error::malformed(line_no, MalformedKind::InvalidHeader, line);

    let (found_key, value) = line.split_once('=').ok_or_else(invalid)?;
    if found_key.trim() != key {
        return Err(invalid());
    }
    value.trim().parse::<usize>().map_err(|_| invalid())
}

/// Parse a `(row, col, value)` entry line
pub fn parse_entry_line<T>(line_no: usize, line: &str) -> Result<Entry<T>>
where
    T: MatrixElement + FromStr,
{
    let content = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| Error::malformed(line_no, MalformedKind::InvalidFormat, line))?;

    let fields: Vec<&str> = content.split(',').map(str::trim).collect();
    let [row, col, value] = fields.as_slice() else {
        return Err(Error::malformed(line_no, MalformedKind::InvalidFormat, line));
    };

    let invalid_number = || Error::malformed(line_no, MalformedKind::InvalidNumber, line);
    let row = row.parse::<usize>().map_err(|_| invalid_number())?;
    let col = col.parse::<usize>().map_err(|_| invalid_number())?;
    let value = value.parse::<T>().map_err(|_| invalid_number())?;

    Ok(Entry::new(row, col, value))
}

/// Parse a whole entry-list document
pub fn parse_matrix<T>(input: &str, config: &ReaderConfig) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + FromStr,
{
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut header = |key: &str| -> Result<usize> {
        match lines.next() {
            Some((line_no, line)) => parse_header_line(line_no, line, key),
            None => Err(Error::malformed(
                input.lines().count() + 1,
                MalformedKind::MissingHeader,
                format!("expected {key}=<N>"),
            )),
        }
    };
    let shape = Shape::new(header(ROWS_KEY)?, header(COLS_KEY)?);

    let mut matrix = SparseMatrix::zeros(shape);
    for (line_no, line) in lines {
        let entry: Entry<T> = parse_entry_line(line_no, line)?;

        if config.bounds_check {
            check_coord(shape, entry.coord()).map_err(|_| {
                Error::malformed(
                    line_no,
                    MalformedKind::OutOfBounds,
                    format!("{line} outside {shape}"),
                )
            })?;
        }

        let value = match config.duplicates {
            DuplicatePolicy::Overwrite => entry.value,
            DuplicatePolicy::Sum => accumulate(&matrix, entry)?,
        };
        matrix.set_element(entry.row, entry.col, value);
    }

    trace!(%shape, nnz = matrix.nnz(), "parsed matrix");
    Ok(matrix)
}

fn accumulate<T: MatrixElement>(matrix: &SparseMatrix<T>, entry: Entry<T>) -> Result<T> {
    let existing = matrix.get_element(entry.row, entry.col);
    existing.checked_add(entry.value).ok_or_else(|| {
        Error::Matrix(MatrixError::Overflow {
            op: Operation::Add,
            coord: Coord::new(entry.row, entry.col),
        })
    })
}
