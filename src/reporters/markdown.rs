//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for pull request comments and CI summaries.

use super::PageReport;
use crate::audit::ECOINDEX_HEADINGS;
use crate::models::Grade;
use anyhow::Result;
use chrono::Local;

/// Render reports as GitHub-flavored Markdown
pub fn render(pages: &[PageReport]) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(pages));
    md.push('\n');

    md.push_str(&render_results_table(pages));
    md.push('\n');

    md.push_str(&render_grade_scale());
    md.push('\n');

    md.push_str(&render_footer());

    Ok(md)
}

fn grade_emoji(grade: Grade) -> &'static str {
    match grade {
        Grade::A | Grade::B => "🟢",
        Grade::C | Grade::D => "🟡",
        Grade::E | Grade::F => "🟠",
        Grade::G => "🔴",
    }
}

fn render_header(pages: &[PageReport]) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let passed = pages.iter().filter(|p| p.passed).count();

    format!(
        r#"# EcoIndex Report

**Pages: {}** | **Passed: {}**

Generated: {}
"#,
        pages.len(),
        passed,
        timestamp
    )
}

fn render_results_table(pages: &[PageReport]) -> String {
    let mut md = String::from("## Results\n\n");

    if pages.is_empty() {
        md.push_str("No pages audited.\n");
        return md;
    }

    let headings: Vec<&str> = ECOINDEX_HEADINGS.iter().map(|h| h.text).collect();
    md.push_str(&format!("| Page | EcoIndex | {} |\n", headings.join(" | ")));
    md.push_str(&format!("|------|----------|{}\n", "------|".repeat(headings.len())));

    for page in pages {
        let r = &page.product.result;
        md.push_str(&format!(
            "| {} | {:.1} | {} {} | {:.2} | {:.2} | {} | {} | {} |\n",
            page.source.replace('|', "\\|"),
            r.index,
            grade_emoji(r.grade),
            r.grade,
            r.greenhouse_gas_emission,
            r.water_consumption,
            r.dom_size,
            r.request_count,
            r.transferred_size_bytes
        ));
    }

    md
}

fn render_grade_scale() -> String {
    r#"## Grade Scale

| Grade | EcoIndex |
|-------|----------|
| A | > 80 |
| B | > 70 |
| C | > 55 |
| D | > 40 |
| E | > 25 |
| F | > 10 |
| G | ≤ 10 |
"#
    .to_string()
}

fn render_footer() -> String {
    "---\n\n*GHG in gCO2e, water in centilitres, requests size in bytes. Scores follow ecoindex.fr.*\n"
        .to_string()
}
