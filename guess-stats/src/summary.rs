use crate::*;
use std::fmt;

/// The headline numbers for a dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// The number of values
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// The population standard deviation
    pub std_dev: f64,
}

impl Summary {
    pub fn of(data: &[f64]) -> Summary {
        Summary {
            count: data.len(),
            mean: average(data),
            median: median(data),
            std_dev: standard_deviation(data),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "n={} mean={} median={} σ={}",
            self.count, self.mean, self.median, self.std_dev
        )
    }
}
