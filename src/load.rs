use log::*;
use std::fmt;
use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

/// The things which stop us before we've even started predicting.
#[derive(Debug)]
pub enum Error {
    /// The data file's name doesn't end in ".txt"
    NotTxt(PathBuf),
    Read { path: PathBuf, source: io::Error },
    /// The data file had no numbers in it
    Empty(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotTxt(path) => {
                write!(f, "Filename should be a txt file: {}", path.display())
            }
            // The io::Error is reported as the source
            Error::Read { path, .. } => write!(f, "Error reading data from {}", path.display()),
            Error::Empty(path) => write!(f, "Empty data file: {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Why a line of text didn't give us a number.
#[derive(Debug, Clone, PartialEq)]
pub enum LineError {
    Utf8(Utf8Error),
    Number(ParseFloatError),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineError::Utf8(e) => write!(f, "{}", e),
            LineError::Number(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineError::Utf8(e) => Some(e),
            LineError::Number(e) => Some(e),
        }
    }
}

impl From<Utf8Error> for LineError {
    fn from(e: Utf8Error) -> LineError {
        LineError::Utf8(e)
    }
}

impl From<ParseFloatError> for LineError {
    fn from(e: ParseFloatError) -> LineError {
        LineError::Number(e)
    }
}

/// Parse `line` exactly as given: no whitespace is stripped.
pub fn parse_number(line: &[u8]) -> Result<f64, LineError> {
    Ok(std::str::from_utf8(line)?.parse::<f64>()?)
}

/// A line of the data file which wasn't a number.  These get skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct BadLine {
    /// Counting from 1
    pub line: usize,
    pub err: LineError,
}

impl fmt::Display for BadLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "error: invalid number at line {}: {}", self.line, self.err)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loaded {
    pub values: Vec<f64>,
    pub bad_lines: Vec<BadLine>,
}

pub fn check_suffix(path: &Path) -> Result<(), Error> {
    if path.as_os_str().to_string_lossy().ends_with(".txt") {
        Ok(())
    } else {
        Err(Error::NotTxt(path.to_owned()))
    }
}

pub fn load(path: &Path) -> Result<Loaded, Error> {
    let text = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    let loaded = parse(&text);
    debug!(
        "{}: {} values, {} bad lines",
        path.display(),
        loaded.values.len(),
        loaded.bad_lines.len()
    );
    Ok(loaded)
}

/// One number per line, surrounding whitespace allowed.  Blank lines are
/// ignored; anything else which doesn't parse (including lines which
/// aren't UTF-8) ends up in `bad_lines`.
pub fn parse(text: &[u8]) -> Loaded {
    let mut loaded = Loaded::default();
    for (idx, line) in text.split(|b| *b == b'\n').enumerate() {
        match parse_line(line) {
            Ok(Some(x)) => loaded.values.push(x),
            Ok(None) => (),
            Err(err) => loaded.bad_lines.push(BadLine {
                line: idx + 1,
                err,
            }),
        }
    }
    loaded
}

fn parse_line(line: &[u8]) -> Result<Option<f64>, LineError> {
    let line = std::str::from_utf8(line)?.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(line.parse::<f64>()?))
}
