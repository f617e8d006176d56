use crate::load::{parse_number, LineError};
use anyhow::{Context, Result};
use guess_stats::{average, standard_deviation};
use log::*;
use std::fmt;
use std::io::{BufRead, Write};

/// Where we expect the next value to land: one standard deviation either
/// side of the mean.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub lower: f64,
    pub upper: f64,
}

impl Range {
    pub fn around(data: &[f64]) -> Range {
        let mean = average(data);
        let std_dev = standard_deviation(data);
        Range {
            lower: mean - std_dev,
            upper: mean + std_dev,
        }
    }
}

// Bounds are shown rounded to whole numbers
impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.0} {:.0}", self.lower, self.upper)
    }
}

pub struct Predictor {
    /// Never empty
    data: Vec<f64>,
}

impl Predictor {
    /// Returns `None` if there's nothing to predict from.
    pub fn new(data: Vec<f64>) -> Option<Predictor> {
        if data.is_empty() {
            None
        } else {
            Some(Predictor { data })
        }
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn range(&self) -> Range {
        Range::around(&self.data)
    }

    /// Add a value to the dataset and predict the next one.  If `line`
    /// isn't a number then the dataset is left unchanged.
    pub fn observe(&mut self, line: &[u8]) -> Result<Range, LineError> {
        let x = parse_number(line)?;
        self.data.push(x);
        Ok(self.range())
    }

    /// Read values from `input` until it runs out, printing a new range
    /// after each one.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        writeln!(out, "Enter numbers (one per line):")?;
        for line in input.split(b'\n') {
            let mut line = line.context("Error reading standard input")?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            match self.observe(&line) {
                Ok(range) => {
                    debug!(
                        "Accepted {:?}; n={}",
                        String::from_utf8_lossy(&line),
                        self.data.len()
                    );
                    writeln!(out, "{}", range)?;
                }
                Err(e) => {
                    debug!("Rejected {:?}", String::from_utf8_lossy(&line));
                    writeln!(out, "Invalid input: {}", e)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::{self, BufReader, Read};

    fn run(data: &[f64], input: &[u8]) -> (Predictor, String) {
        let mut predictor = Predictor::new(data.to_vec()).unwrap();
        let mut out = Vec::new();
        predictor.run(input, &mut out).unwrap();
        (predictor, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_dataset() {
        assert!(Predictor::new(vec![]).is_none());
    }

    #[test]
    fn singleton_range() {
        let predictor = Predictor::new(vec![3.]).unwrap();
        assert_eq!(
            predictor.range(),
            Range {
                lower: 3.,
                upper: 3.
            }
        );
    }

    #[test]
    fn observe() {
        let mut predictor = Predictor::new(vec![10., 20., 30.]).unwrap();
        let range = predictor.observe(b"40").unwrap();
        assert_eq!(predictor.data(), [10., 20., 30., 40.]);
        assert_relative_eq!(range.lower, 25. - 125_f64.sqrt());
        assert_relative_eq!(range.upper, 25. + 125_f64.sqrt());
        assert_eq!(range.to_string(), "14 36");
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let mut predictor = Predictor::new(vec![10., 20., 30.]).unwrap();
        let before = predictor.range();
        assert!(predictor.observe(b"abc").is_err());
        assert!(predictor.observe(b"").is_err());
        assert_eq!(predictor.data(), [10., 20., 30.]);
        assert_eq!(predictor.range(), before);
    }

    #[test]
    fn session() {
        let (predictor, out) = run(&[10., 20., 30.], b"40\nabc\n 50 \n50\r\n");
        assert_eq!(predictor.data(), [10., 20., 30., 40., 50.]);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            [
                "Enter numbers (one per line):",
                "14 36",
                "Invalid input: invalid float literal",
                "Invalid input: invalid float literal",
                "16 44",
            ]
        );
    }

    #[test]
    fn no_input() {
        let (predictor, out) = run(&[1.], b"");
        assert_eq!(predictor.data(), [1.]);
        assert_eq!(out, "Enter numbers (one per line):\n");
    }

    #[test]
    fn surrounding_whitespace_is_invalid() {
        let mut predictor = Predictor::new(vec![10., 20., 30.]).unwrap();
        assert!(matches!(predictor.observe(b" 40 "), Err(LineError::Number(_))));
        assert_eq!(predictor.data(), [10., 20., 30.]);
    }

    #[test]
    fn non_utf8_input_is_skipped() {
        let (predictor, out) = run(&[10., 20., 30.], b"\xff\xfe\n40\n");
        assert_eq!(predictor.data(), [10., 20., 30., 40.]);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Invalid input: invalid utf-8"));
        assert_eq!(lines[2], "14 36");
    }

    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "the pipe fell off"))
        }
    }

    #[test]
    fn read_error_is_fatal() {
        let mut predictor = Predictor::new(vec![1.]).unwrap();
        let mut out = Vec::new();
        let err = predictor
            .run(BufReader::new(Broken), &mut out)
            .unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Error reading standard input: the pipe fell off"
        );
        assert!(err.downcast_ref::<io::Error>().is_some());
    }
}
