//! CLI definition using clap

use clap::{Parser, Subcommand};
use haulcalc_types::{MethodMode, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haulcalc")]
#[command(version)]
#[command(about = "Transport logistics calculators: routes, fleet schedules, topographic plans")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available calculation methods
    List {
        /// Only single-vehicle or only fleet methods
        #[arg(long, short = 'm')]
        mode: Option<MethodMode>,
    },

    /// Show the inputs of a method
    Describe {
        /// Method id (see `list`)
        method: String,
    },

    /// Run a calculation method
    Calc {
        /// Method id. Uses the configured default method if not specified.
        method: Option<String>,

        /// TOML or JSON file with input values
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Set an input value (NAME=VALUE, repeatable; "12,5" and "12.5" both work)
        #[arg(long = "set", short = 's', value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Also write the report to an Excel file
        #[arg(long, short = 'e')]
        export: Option<PathBuf>,
    },

    /// Plan vehicle counts for transport requests (topographic method)
    Plan {
        /// Planning fixture (TOML or JSON). Uses the fixtures directory if not specified.
        #[arg(long)]
        fixture: Option<PathBuf>,

        /// CSV file with transport requests replacing those of the fixture
        #[arg(long, short = 'r')]
        requests: Option<PathBuf>,

        /// Only plan requests from this shipper
        #[arg(long)]
        shipper: Option<String>,

        /// Also write the plan to an Excel file
        #[arg(long, short = 'e')]
        export: Option<PathBuf>,
    },

    /// Export a JSON report (from `calc --format json`) to Excel
    Export {
        /// Path to JSON report file
        report: PathBuf,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the method `calc` runs when none is given
        #[arg(long)]
        set_default_method: Option<String>,

        /// Set the directory for exported workbooks
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// Set the directory holding planning fixtures
        #[arg(long)]
        set_fixtures_dir: Option<PathBuf>,

        /// Reset to default configuration
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc_with_assignments() {
        let cli = Cli::try_parse_from([
            "haulcalc",
            "calc",
            "pendulum-empty-return",
            "--set",
            "payloadCapacity=8",
            "-s",
            "loadFactor=0,9",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Calc {
                method,
                set,
                input,
                export,
            } => {
                assert_eq!(method.as_deref(), Some("pendulum-empty-return"));
                assert_eq!(set, vec!["payloadCapacity=8", "loadFactor=0,9"]);
                assert!(input.is_none());
                assert!(export.is_none());
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_parse_list_mode() {
        let cli = Cli::try_parse_from(["haulcalc", "list", "--mode", "fleet", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::List {
                mode: Some(MethodMode::Fleet),
            }
        ));
    }

    #[test]
    fn test_parse_plan_options() {
        let cli = Cli::try_parse_from([
            "haulcalc",
            "plan",
            "--requests",
            "requests.csv",
            "--shipper",
            "E4",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan {
                fixture,
                requests,
                shipper,
                ..
            } => {
                assert!(fixture.is_none());
                assert_eq!(requests, Some(PathBuf::from("requests.csv")));
                assert_eq!(shipper.as_deref(), Some("E4"));
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["haulcalc", "--format", "xml", "list"]).is_err());
    }
}
