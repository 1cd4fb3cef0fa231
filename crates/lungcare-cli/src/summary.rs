use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use lungcare_model::{Diagnosis, RiskLevel};

use crate::types::{AnalyzeOutcome, AssessOutcome};

const DISCLAIMER: &str =
    "Simulated demo output - not medical advice. Consult a healthcare professional.";

pub fn print_assessment(outcome: &AssessOutcome, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Assessment"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Risk level"), risk_cell(outcome.result.risk_level)]);
    table.add_row(vec![
        Cell::new("Probability"),
        Cell::new(format!("{}%", outcome.result.probability)),
    ]);
    table.add_row(vec![
        Cell::new("Confidence"),
        Cell::new(format!("{}%", outcome.result.confidence)),
    ]);
    println!("{table}");
    print_list("Risk factors", &outcome.result.risk_factors);
    print_list("Recommendations", &outcome.result.recommendations);
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }
    println!("{DISCLAIMER}");
    Ok(())
}

pub fn print_analysis(outcome: &AnalyzeOutcome, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        return Ok(());
    }
    let technical = &outcome.result.technical_details;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Analysis"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("File"), Cell::new(&outcome.file_name)]);
    table.add_row(vec![
        Cell::new("Size"),
        Cell::new(format!("{} bytes", outcome.byte_size)),
    ]);
    table.add_row(vec![
        Cell::new("Diagnosis"),
        diagnosis_cell(outcome.result.diagnosis),
    ]);
    table.add_row(vec![
        Cell::new("Cancer detected"),
        Cell::new(if outcome.result.cancer_detected {
            "yes"
        } else {
            "no"
        }),
    ]);
    table.add_row(vec![
        Cell::new("Confidence"),
        Cell::new(format!("{}%", outcome.result.confidence)),
    ]);
    table.add_row(vec![
        Cell::new("Suspicious areas"),
        match outcome.result.suspicious_areas {
            Some(count) => Cell::new(count),
            None => Cell::new("-").fg(comfy_table::Color::DarkGrey),
        },
    ]);
    table.add_row(vec![
        Cell::new("Image quality"),
        Cell::new(technical.image_quality.as_str()),
    ]);
    table.add_row(vec![
        Cell::new("Processing time"),
        Cell::new(format!("{} ms", technical.processing_time_ms)),
    ]);
    table.add_row(vec![
        Cell::new("Model version"),
        Cell::new(&technical.model_version),
    ]);
    println!("{table}");
    print_list("Findings", &outcome.result.findings);
    print_list("Recommendations", &outcome.result.recommendations);
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }
    println!("{DISCLAIMER}");
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    println!();
    if items.is_empty() {
        println!("{title}: none");
    } else {
        println!("{title}:");
        for item in items {
            println!("  - {item}");
        }
    }
    println!();
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn risk_cell(level: RiskLevel) -> Cell {
    let cell = Cell::new(level.as_str());
    match level {
        RiskLevel::Low => cell.fg(comfy_table::Color::Green),
        RiskLevel::Moderate => cell.fg(comfy_table::Color::Yellow),
        RiskLevel::High => cell.fg(comfy_table::Color::Red),
        RiskLevel::VeryHigh => cell
            .fg(comfy_table::Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn diagnosis_cell(diagnosis: Diagnosis) -> Cell {
    let cell = Cell::new(diagnosis.as_str());
    match diagnosis {
        Diagnosis::Normal => cell.fg(comfy_table::Color::Green),
        Diagnosis::Pneumonia | Diagnosis::OtherAbnormality => {
            cell.fg(comfy_table::Color::Yellow)
        }
        Diagnosis::Covid19 => cell.fg(comfy_table::Color::Magenta),
        Diagnosis::Tuberculosis | Diagnosis::LungCancer => cell
            .fg(comfy_table::Color::Red)
            .add_attribute(Attribute::Bold),
    }
}
