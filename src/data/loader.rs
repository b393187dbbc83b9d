use std::ffi::OsString;
use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Element data type
// ---------------------------------------------------------------------------

/// How the raw capture file is decoded into a flat sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DataType {
    /// Signed 8-bit integers, native byte order.
    #[value(name = "int8")]
    Int8,
    /// Signed 16-bit integers, native byte order.
    #[value(name = "int16")]
    Int16,
    /// Signed 32-bit integers, native byte order.
    #[value(name = "int32")]
    Int32,
    /// One decimal integer per line.
    #[default]
    #[value(name = "str")]
    Text,
}

impl DataType {
    /// Width of one element in bytes, or `None` for line-based text.
    pub fn element_size(self) -> Option<usize> {
        match self {
            DataType::Int8 => Some(1),
            DataType::Int16 => Some(2),
            DataType::Int32 => Some(4),
            DataType::Text => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Int8 => "int8",
            DataType::Int16 => "int16",
            DataType::Int32 => "int32",
            DataType::Text => "str",
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No such file or directory {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{}:{line}: '{text}' is not an integer in the signed 64-bit range [{}, {}]",
        path.display(),
        i64::MIN,
        i64::MAX
    )]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the raw, still interleaved sample sequence from `path`.
///
/// The file is checked for existence first so the error can name the
/// absolute path even when the user passed a relative one.
pub fn load_samples(path: &Path, data_type: DataType) -> Result<Vec<i64>, LoadError> {
    let resolved = resolve(path);
    if !path.exists() {
        return Err(LoadError::NotFound { path: resolved });
    }

    let samples = match data_type.element_size() {
        None => load_text(&resolved)?,
        Some(width) => load_binary(&resolved, width)?,
    };

    log::info!(
        "Loaded {} {} elements from {}",
        samples.len(),
        data_type.name(),
        resolved.display()
    );
    Ok(samples)
}

/// Absolute form of `path` with symlinks resolved as far as the path
/// exists and `.`/`..` folded out of the part that does not.
fn resolve(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut existing = absolute.as_path();
    let mut rest = Vec::new();
    let mut resolved = loop {
        if let Ok(real) = fs::canonicalize(existing) {
            break real;
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            // `..` as the last component or a bare root: fold lexically.
            (Some(parent), None) => {
                rest.push(OsString::from(".."));
                existing = parent;
            }
            (None, _) => break existing.to_path_buf(),
        }
    };

    for name in rest.iter().rev() {
        match name.to_str() {
            Some("..") => {
                resolved.pop();
            }
            Some(".") => {}
            _ => resolved.push(name),
        }
    }
    resolved
}

// ---------------------------------------------------------------------------
// Text loader
// ---------------------------------------------------------------------------

/// One integer literal per line. Surrounding whitespace is ignored, a blank
/// line is rejected.
fn load_text(path: &Path) -> Result<Vec<i64>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lines(path, &text)
}

fn parse_lines(path: &Path, text: &str) -> Result<Vec<i64>, LoadError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            let tok = line.trim();
            tok.parse::<i64>().map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                text: tok.to_string(),
                source,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Binary loader
// ---------------------------------------------------------------------------

fn load_binary(path: &Path, width: usize) -> Result<Vec<i64>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_native(&bytes, width))
}

/// Decode fixed-width signed integers in native byte order. A trailing
/// partial element is ignored.
fn decode_native(bytes: &[u8], width: usize) -> Vec<i64> {
    let chunks = bytes.chunks_exact(width);
    if !chunks.remainder().is_empty() {
        log::debug!(
            "Ignoring {} trailing byte(s) that do not form a whole {width}-byte element",
            chunks.remainder().len()
        );
    }

    match width {
        1 => chunks.map(|c| i64::from(i8::from_ne_bytes([c[0]]))).collect(),
        2 => chunks
            .map(|c| i64::from(i16::from_ne_bytes([c[0], c[1]])))
            .collect(),
        4 => chunks
            .map(|c| i64::from(i32::from_ne_bytes([c[0], c[1], c[2], c[3]])))
            .collect(),
        other => unreachable!("unsupported element width {other}"),
    }
}
