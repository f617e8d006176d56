/*! Descriptive statistics over a slice of `f64`s.

## Example

```
# use guess_stats::*;
let data = [2., 4., 4., 4., 5., 5., 7., 9.];
assert_eq!(average(&data), 5.);
assert_eq!(median(&data), 4.5);
assert_eq!(variance(&data), 4.);
assert_eq!(standard_deviation(&data), 2.);
```

All of these expect a non-empty slice.  Given an empty one they return
`NaN` rather than panicking; it's up to the caller to check first.

The functions don't keep any state, so they're safe to call from several
threads.  A dataset which is being extended on one thread while another
computes its stats needs a lock around it, though: that's the caller's
job.

*/

mod summary;

pub use summary::*;

/// The arithmetic mean.
pub fn average(data: &[f64]) -> f64 {
    // 0/0 is NaN, which is what we want for the empty case
    data.iter().sum::<f64>() / data.len() as f64
}

/// The middle value of `data`, or the mean of the two middle values if
/// `data` has an even length.
///
/// This sorts a copy; `data` is left as it was.  See `median_in_place` if
/// you don't mind it being reordered.
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    median_in_place(&mut sorted)
}

/// Like `median`, but sorts `data` itself instead of a copy.
pub fn median_in_place(data: &mut [f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.sort_by(f64::total_cmp);
    let n = data.len();
    if n % 2 == 0 {
        (data[(n - 1) / 2] + data[n / 2]) / 2.
    } else {
        data[n / 2]
    }
}

/// The population variance (ie. the divisor is `n`, not `n - 1`).
pub fn variance(data: &[f64]) -> f64 {
    let mean = average(data);
    let sum_sq = data
        .iter()
        .map(|x| {
            let diff = x - mean;
            diff * diff
        })
        .sum::<f64>();
    sum_sq / data.len() as f64
}

/// The square root of the population variance.
pub fn standard_deviation(data: &[f64]) -> f64 {
    variance(data).sqrt()
}
