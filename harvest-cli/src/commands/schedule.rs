//! Schedule command - calculate harvest dates and print the report

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use harvest_core::{
    demo_plantings, load_plantings, write_report, Config, OutputFormat, RawPlanting,
    ScheduleCalculator,
};

/// Report format selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Arguments for the schedule command
#[derive(Args, Debug, Default)]
pub struct ScheduleArgs {
    /// Planting file (.json or .toml); defaults to the built-in demo list
    #[arg(short, long, env = "HARVEST_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Reject plantings with negative days to maturity
    #[arg(long)]
    pub strict_dtm: bool,
}

impl ScheduleArgs {
    /// Execute the schedule command
    pub fn execute(&self, verbose: bool, config: Config) -> anyhow::Result<()> {
        let config = config.with_cli_overrides(
            self.input.clone(),
            self.format.map(OutputFormat::from),
            self.strict_dtm,
        );

        if verbose {
            tracing::info!(
                input = ?config.input.path,
                format = ?config.output.format,
                allow_negative_dtm = config.schedule.allow_negative_dtm,
                "Configuration loaded"
            );
        }

        let entries: Vec<RawPlanting> = match &config.input.path {
            Some(path) => load_plantings(path).map_err(|e| {
                anyhow::anyhow!("Failed to load plantings from {}: {}", path.display(), e)
            })?,
            None => demo_plantings().into_iter().map(RawPlanting::from).collect(),
        };

        let calculator = ScheduleCalculator::new(config.schedule.allow_negative_dtm);
        let schedule = calculator.calculate_raw(entries);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, &schedule, config.output.format)?;
        out.flush()?;

        Ok(())
    }
}
