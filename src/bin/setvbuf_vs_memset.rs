//! Buffered fwrite loop (setvbuf, default buffer size) vs plain memset,
//! five timed runs each. Prints the p-value and the significance answer.

use anyhow::Result;
use significa::significance::{assess, compare_samples, DEFAULT_ALPHA};

// Wall-clock seconds per run
const SETVBUF_SECS: [f64; 5] = [0.09, 0.12, 0.12, 0.10, 0.09];
const MEMSET_SECS: [f64; 5] = [0.03, 0.03, 0.03, 0.03, 0.03];

fn main() -> Result<()> {
    let test = compare_samples(&SETVBUF_SECS, &MEMSET_SECS)?;
    print!("{}", assess(test, DEFAULT_ALPHA).to_report_string());
    Ok(())
}
