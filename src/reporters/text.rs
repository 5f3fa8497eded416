//! Text (terminal) reporter with colors and formatting

use super::PageReport;
use crate::audit::ECOINDEX_HEADINGS;
use crate::models::Grade;
use anyhow::Result;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "\x1b[32m", // Green
        Grade::B => "\x1b[92m", // Light green
        Grade::C => "\x1b[93m", // Light yellow
        Grade::D => "\x1b[33m", // Yellow
        Grade::E => "\x1b[91m", // Light red
        Grade::F => "\x1b[31m", // Red
        Grade::G => "\x1b[35m", // Magenta
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render reports as formatted terminal output
pub fn render(pages: &[PageReport]) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}EcoIndex Audit{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));

    if pages.is_empty() {
        out.push_str(&format!("{DIM}No pages audited.{RESET}\n"));
        return Ok(out);
    }

    for page in pages {
        let result = &page.product.result;
        let grade_c = grade_color(result.grade);

        out.push_str(&format!("\n{BOLD}{}{RESET}\n", page.source));
        out.push_str(&format!(
            "EcoIndex: {BOLD}{:.1}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  ",
            result.index, result.grade
        ));
        let status = if page.passed { "\x1b[32m" } else { "\x1b[31m" };
        out.push_str(&format!("{status}{}{RESET}\n\n", page.title));

        let values = [
            result.grade.to_string(),
            format!("{:.2}", result.greenhouse_gas_emission),
            format!("{:.2}", result.water_consumption),
            result.dom_size.to_string(),
            result.request_count.to_string(),
            format_bytes(result.transferred_size_bytes),
        ];
        for (heading, value) in ECOINDEX_HEADINGS.iter().zip(values) {
            out.push_str(&format!("  {DIM}{:<16}{RESET}{}\n", heading.text, value));
        }
    }

    if pages.len() > 1 {
        let mean = pages.iter().map(|p| p.product.result.index).sum::<f64>() / pages.len() as f64;
        let passed = pages.iter().filter(|p| p.passed).count();
        out.push_str(&format!(
            "\n{BOLD}SUMMARY{RESET}  {} pages  {} passed  mean EcoIndex {:.1}\n",
            pages.len(),
            passed,
            mean
        ));
    }

    Ok(out)
}

/// Human-readable byte count (decimal units)
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1_000 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = "B";
    for next in UNITS {
        if value < 1_000.0 {
            break;
        }
        value /= 1_000.0;
        unit = next;
    }
    format!("{:.1} {}", value, unit)
}
