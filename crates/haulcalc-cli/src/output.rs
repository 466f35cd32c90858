//! Output formatting module

use haulcalc_app::catalogue::{FieldKind, MethodSpec};
use haulcalc_app::reports::plan::plan_report;
use haulcalc_domain::model::Plan;
use haulcalc_domain::numeric::format_number;
use haulcalc_types::{OutputFormat, Report, ReportTable, ReportValue, Result};

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Render a table with columns padded to their widest cell
pub fn render_table(table: &ReportTable) -> String {
    let rows: Vec<Vec<&str>> = (0..table.rows.len()).map(|i| table.row_cells(i)).collect();

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(col) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(table.headers.iter().map(String::as_str).collect()));
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", report.method));
    out.push_str(&format!("{}\n", "=".repeat(report.method.chars().count())));

    for entry in &report.entries {
        match &entry.value {
            ReportValue::Scalar { value } => {
                out.push_str(&format!("{}: {}\n", entry.label, value));
            }
            ReportValue::Table(table) => {
                out.push_str(&format!("\n{}\n", entry.label));
                out.push_str(&render_table(table));
                out.push('\n');
            }
        }
    }
    out
}

pub fn output_report(output_format: OutputFormat, report: &Report) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

pub fn output_plan(output_format: OutputFormat, plan: &Plan) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(plan)?;
        println!("{}", content);
    } else {
        print!("{}", render_report(&plan_report(plan)));
    }
    Ok(())
}

pub fn output_methods(output_format: OutputFormat, methods: &[&MethodSpec]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(methods)?;
        println!("{}", content);
        return Ok(());
    }

    let width = methods
        .iter()
        .map(|m| m.id.chars().count())
        .max()
        .unwrap_or(0);
    println!("\nMethods ({})", methods.len());
    println!("=======");
    for method in methods {
        println!("{}  {:<6}  {}", pad(method.id, width), method.mode.to_string(), method.name);
    }
    Ok(())
}

fn describe_field_limits(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{} … {}", format_number(min, 2), format_number(max, 2)),
        (Some(min), None) => format!("≥ {}", format_number(min, 2)),
        (None, Some(max)) => format!("≤ {}", format_number(max, 2)),
        (None, None) => String::new(),
    }
}

pub fn render_method(method: &MethodSpec) -> String {
    let mut table = ReportTable::new(&[
        ("name", "Name"),
        ("default", "Default"),
        ("range", "Range"),
        ("label", "Label"),
    ]);
    for field in method.inputs {
        let default = match (field.kind, field.default, field.placeholder) {
            (_, Some(value), _) => format_number(value, 2),
            (FieldKind::Text, None, Some(placeholder)) => placeholder.to_string(),
            _ => String::new(),
        };
        table.push_row([
            field.name.to_string(),
            default,
            describe_field_limits(field.min, field.max),
            field.label.to_string(),
        ]);
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", method.name));
    out.push_str("========\n");
    out.push_str(&format!("Id:    {}\n", method.id));
    out.push_str(&format!("Mode:  {}\n", method.mode));
    out.push_str(&format!("{}\n\n", method.description));
    out.push_str(&render_table(&table));
    out
}

pub fn output_method(output_format: OutputFormat, method: &MethodSpec) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(method)?;
        println!("{}", content);
    } else {
        print!("{}", render_method(method));
    }
    Ok(())
}
