use anyhow::Result;
use clap::Parser;
use significa::cli::{Cli, Command, OutputFormat};
use significa::json_output::JsonComparison;
use significa::significance::{assess, compare_summaries, GroupSummary};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Build the two group summaries from whichever input form was given
fn load_groups(command: &Command) -> Result<(GroupSummary, GroupSummary)> {
    match command {
        Command::Samples { group_a, group_b } => Ok((
            GroupSummary::from_samples(group_a)?,
            GroupSummary::from_samples(group_b)?,
        )),
        Command::Stats {
            mean_a,
            stdev_a,
            count_a,
            mean_b,
            stdev_b,
            count_b,
        } => Ok((
            GroupSummary::new(*mean_a, *stdev_a, *count_a),
            GroupSummary::new(*mean_b, *stdev_b, *count_b),
        )),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Validate alpha range (must be strictly between 0 and 1)
    if args.alpha <= 0.0 || args.alpha >= 1.0 {
        anyhow::bail!(
            "Invalid value for --alpha: {} (must be in (0, 1))",
            args.alpha
        );
    }

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let (group_a, group_b) = load_groups(&args.command)?;
    tracing::debug!(?group_a, ?group_b, alpha = args.alpha, "comparing groups");

    let test = compare_summaries(&group_a, &group_b)?;
    tracing::debug!(
        t = test.statistic,
        df = test.df,
        p = test.pvalue,
        "welch t-test"
    );

    let assessment = assess(test, args.alpha);
    match args.format {
        OutputFormat::Text => print!("{}", assessment.to_report_string()),
        OutputFormat::Json => println!(
            "{}",
            JsonComparison::new(&assessment, &group_a, &group_b).to_json_string()?
        ),
    }

    Ok(())
}
