//! Loading and saving entry-list files
//!
//! Files are memory-mapped when the `mmap` feature is enabled and the reader
//! configuration asks for it; otherwise they are read into a buffer.

use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;
use std::str::FromStr;

#[cfg(feature = "mmap")]
use memmap2::MmapOptions;
use sparsemat_core::{MatrixElement, SparseAccess, SparseMatrix};
use tracing::debug;

use crate::config::ReaderConfig;
use crate::error::{Error, MalformedKind, Result};
use crate::text_format::{parse_matrix, write_matrix};

/// Load a matrix from an entry-list file
pub fn load_matrix<T, P>(path: P, config: &ReaderConfig) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let len = file.metadata().map_err(|e| Error::io(path, e))?.len();

    debug!(path = %path.display(), bytes = len, mmap = config.use_mmap, "loading matrix");

    if config.use_mmap && len > 0 {
        load_mapped(path, &file, config)
    } else {
        load_buffered(path, file, len, config)
    }
}

#[cfg(feature = "mmap")]
fn load_mapped<T>(path: &Path, file: &File, config: &ReaderConfig) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + FromStr,
{
    // SAFETY: The mapping is read-only and dropped before this function
    // returns. The text is validated as UTF-8 and copied into the matrix
    // while the mapping is alive. Truncation of the file by another process
    // while it is being read is outside the contract of this loader.
    let mmap = unsafe { MmapOptions::new().map(file) }.map_err(|e| Error::io(path, e))?;
    parse_bytes(&mmap, config)
}

#[cfg(not(feature = "mmap"))]
fn load_mapped<T>(path: &Path, file: &File, config: &ReaderConfig) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + FromStr,
{
    let file = file.try_clone().map_err(|e| Error::io(path, e))?;
    load_buffered(path, file, 0, config)
}

fn load_buffered<T>(
    path: &Path,
    mut file: File,
    len: u64,
    config: &ReaderConfig,
) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + FromStr,
{
    let mut bytes = Vec::with_capacity(usize::try_from(len).unwrap_or(0));
    file.read_to_end(&mut bytes)
        .map_err(|e| Error::io(path, e))?;
    parse_bytes(&bytes, config)
}

fn parse_bytes<T>(bytes: &[u8], config: &ReaderConfig) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + FromStr,
{
    let text = std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        Error::malformed(
            line,
            MalformedKind::InvalidUtf8,
            format!("invalid byte at offset {}", e.valid_up_to()),
        )
    })?;
    parse_matrix(text, config)
}

/// Save a matrix to an entry-list file, replacing any existing file
pub fn save_matrix<M, P>(path: P, matrix: &M) -> Result<()>
where
    M: SparseAccess + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_matrix(BufWriter::new(file), matrix).map_err(|e| Error::io(path, e))?;

    debug!(
        path = %path.display(),
        shape = %matrix.shape(),
        nnz = matrix.nnz(),
        "saved matrix"
    );
    Ok(())
}
