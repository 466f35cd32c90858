//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_method, output_methods, output_plan, output_report};
use haulcalc_app::app::{self, PlanOptions};
use haulcalc_app::catalogue::{self, MethodSpec};
use haulcalc_app::config::Config;
use haulcalc_app::export::export_to_excel;
use haulcalc_app::reports::plan::plan_report;
use haulcalc_app::repository::{open_plan_repo, open_plan_repo_at, open_request_repo};
use haulcalc_domain::model::InputValues;
use haulcalc_domain::repository::RequestRepository;
use haulcalc_infra::input_file::{apply_assignments, load_input_values};
use haulcalc_types::{Error, InputError, MethodMode, OutputFormat, Report, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;

    // Override from CLI args
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::List { mode } => cmd_list(output_format, mode),

        Commands::Describe { method } => cmd_describe(output_format, &method),

        Commands::Calc {
            method,
            input,
            set,
            export,
        } => {
            // Use CLI method if specified, otherwise config value
            let method = method
                .or_else(|| config.default_method.clone())
                .ok_or(InputError::MissingMethod)?;
            cmd_calc(output_format, &method, input, &set, export)
        }

        Commands::Plan {
            fixture,
            requests,
            shipper,
            export,
        } => cmd_plan(&config, output_format, fixture, requests, shipper, export),

        Commands::Export { report, output } => cmd_export(&config, report, output),

        Commands::Config {
            show,
            set_output,
            set_default_method,
            set_export_dir,
            set_fixtures_dir,
            reset,
        } => cmd_config(
            show,
            set_output,
            set_default_method,
            set_export_dir,
            set_fixtures_dir,
            reset,
        ),
    }
}

fn cmd_list(output_format: OutputFormat, mode: Option<MethodMode>) -> Result<()> {
    let methods: Vec<&MethodSpec> = match mode {
        Some(mode) => catalogue::methods_by_mode(mode).collect(),
        None => catalogue::methods().collect(),
    };
    output_methods(output_format, &methods)
}

fn cmd_describe(output_format: OutputFormat, method_id: &str) -> Result<()> {
    let method = catalogue::find_method(method_id)?;
    output_method(output_format, method)
}

fn cmd_calc(
    output_format: OutputFormat,
    method_id: &str,
    input: Option<PathBuf>,
    assignments: &[String],
    export: Option<PathBuf>,
) -> Result<()> {
    let mut values = match input {
        Some(path) => load_input_values(&path)?,
        None => InputValues::new(),
    };
    apply_assignments(&mut values, assignments.iter().map(String::as_str))?;
    debug!(method = method_id, inputs = values.len(), "collected inputs");

    let report = catalogue::run(method_id, &values)?;
    output_report(output_format, &report)?;

    if let Some(path) = export {
        export_to_excel(&report, &path)?;
        eprintln!("Exported to: {}", path.display());
    }
    Ok(())
}

fn cmd_plan(
    config: &Config,
    output_format: OutputFormat,
    fixture: Option<PathBuf>,
    requests: Option<PathBuf>,
    shipper: Option<String>,
    export: Option<PathBuf>,
) -> Result<()> {
    let repo = match fixture {
        Some(path) => open_plan_repo_at(path)?,
        None => open_plan_repo(config)?,
    };
    debug!(path = %repo.path().display(), "planning fixture");

    let request_repo = match requests {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound(path.display().to_string()));
            }
            Some(open_request_repo(path))
        }
        None => None,
    };

    let mut options = PlanOptions::new();
    if let Some(shipper) = shipper {
        options = options.with_shipper(shipper);
    }

    let plan = app::plan(
        &repo,
        request_repo.as_ref().map(|r| r as &dyn RequestRepository),
        &options,
    )
    .map_err(|e: app::PlanningServiceError| Error::PlanningFailed(e.to_string()))?;

    output_plan(output_format, &plan)?;

    if let Some(path) = export {
        export_to_excel(&plan_report(&plan), &path)?;
        eprintln!("Exported to: {}", path.display());
    }
    Ok(())
}

/// Where a workbook goes when no output path is given
fn default_export_path(config: &Config, report_path: &Path) -> PathBuf {
    let stem = report_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let file_name = format!("{}.xlsx", stem);
    match config.export_dir {
        Some(ref dir) => dir.join(file_name),
        None => report_path.with_file_name(file_name),
    }
}

fn cmd_export(config: &Config, report_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !report_path.exists() {
        return Err(Error::FileNotFound(report_path.display().to_string()));
    }

    // Load report
    let content = std::fs::read_to_string(&report_path)?;
    let report: Report = serde_json::from_str(&content)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| default_export_path(config, &report_path));

    // Export to Excel
    export_to_excel(&report, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_default_method: Option<String>,
    set_export_dir: Option<PathBuf>,
    set_fixtures_dir: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(method) = set_default_method {
        // reject typos before they land in the config file
        catalogue::find_method(&method)?;
        config.default_method = Some(method);
        modified = true;
    }

    if let Some(dir) = set_export_dir {
        config.export_dir = Some(dir);
        modified = true;
    }

    if let Some(dir) = set_fixtures_dir {
        config.fixtures_dir = Some(dir);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
