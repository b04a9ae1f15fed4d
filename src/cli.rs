//! CLI argument parsing for Significa

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for comparison results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable two-line report (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "significa")]
#[command(version)]
#[command(about = "Welch's t-test significance checking for benchmark timings", long_about = None)]
pub struct Cli {
    /// Significance level (alpha) the p-value is judged against
    #[arg(
        long = "alpha",
        value_name = "ALPHA",
        default_value = "0.05",
        global = true
    )]
    pub alpha: f64,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// How the two measurement groups are supplied
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two groups of raw timing measurements
    Samples {
        /// Comma-separated measurements for group A
        #[arg(
            short = 'a',
            long = "group-a",
            value_name = "LIST",
            value_delimiter = ',',
            required = true
        )]
        group_a: Vec<f64>,

        /// Comma-separated measurements for group B
        #[arg(
            short = 'b',
            long = "group-b",
            value_name = "LIST",
            value_delimiter = ',',
            required = true
        )]
        group_b: Vec<f64>,
    },

    /// Compare two groups from summary statistics
    Stats {
        /// Mean of group A
        #[arg(long, value_name = "MEAN")]
        mean_a: f64,

        /// Sample standard deviation of group A
        #[arg(long, value_name = "STDEV")]
        stdev_a: f64,

        /// Number of measurements in group A
        #[arg(long, value_name = "COUNT")]
        count_a: u64,

        /// Mean of group B
        #[arg(long, value_name = "MEAN")]
        mean_b: f64,

        /// Sample standard deviation of group B
        #[arg(long, value_name = "STDEV")]
        stdev_b: f64,

        /// Number of measurements in group B
        #[arg(long, value_name = "COUNT")]
        count_b: u64,
    },
}
