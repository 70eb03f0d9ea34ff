use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keycraft::difficulty::{BuildDifficulty, CommonMistake, Severity};
use keycraft::geometry::KeyboardLayout;
use keycraft::personalization::Recommendation;
use keycraft::steps::{BuildMetrics, BuildStep, RiskLevel};
use keycraft::validator::ValidationResult;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn layout_catalog(layouts: &[KeyboardLayout]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Category"),
        Cell::new("Keys").fg(Color::Cyan),
        Cell::new("Size (u)"),
        Cell::new("Description"),
    ]);

    for layout in layouts {
        table.add_row(vec![
            Cell::new(&layout.id).add_attribute(Attribute::Bold),
            Cell::new(layout.category.to_string()),
            Cell::new(layout.key_count())
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
            Cell::new(format!(
                "{} x {}",
                layout.dimensions.width, layout.dimensions.height
            )),
            Cell::new(&layout.description),
        ]);
    }
    println!("{}", table);
}

pub fn validation(name: &str, result: &ValidationResult) {
    let status = if result.is_valid { "VALID" } else { "INVALID" };
    println!(
        "\n📋 {}: {} ({} errors, {} warnings)",
        name,
        status,
        result.errors.len(),
        result.warnings.len()
    );

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Level").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Layer"),
        Cell::new("Key"),
        Cell::new("Message"),
    ]);

    for e in &result.errors {
        table.add_row(vec![
            Cell::new("error").fg(Color::Red),
            Cell::new(format!("{:?}", e.kind)),
            Cell::new(e.layer_id.as_deref().unwrap_or("-")),
            Cell::new(e.key_id.as_deref().unwrap_or("-")),
            Cell::new(&e.message),
        ]);
    }
    for w in &result.warnings {
        table.add_row(vec![
            Cell::new("warning").fg(Color::Yellow),
            Cell::new(format!("{:?}", w.kind)),
            Cell::new(w.layer_id.as_deref().unwrap_or("-")),
            Cell::new(w.key_id.as_deref().unwrap_or("-")),
            Cell::new(&w.message),
        ]);
    }
    println!("{}", table);
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    }
}

pub fn difficulty(difficulty: &BuildDifficulty, metrics: &BuildMetrics) {
    println!(
        "\n🛠️  Level {}: {} - {}",
        difficulty.level, difficulty.name, difficulty.description
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Estimated time (h)").add_attribute(Attribute::Bold),
        Cell::new(difficulty.estimated_time),
    ]);
    table.add_row(vec![
        Cell::new("Step time (min)").add_attribute(Attribute::Bold),
        Cell::new(metrics.total_time),
    ]);
    table.add_row(vec![
        Cell::new("Tool cost ($)").add_attribute(Attribute::Bold),
        Cell::new(metrics.tool_cost),
    ]);
    table.add_row(vec![
        Cell::new("Risk").add_attribute(Attribute::Bold),
        Cell::new(metrics.risk_level.to_string()).fg(risk_color(metrics.risk_level)),
    ]);
    table.add_row(vec![
        Cell::new("Skills").add_attribute(Attribute::Bold),
        Cell::new(metrics.skills_needed.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("Requirements").add_attribute(Attribute::Bold),
        Cell::new(difficulty.requirements.join(", ")),
    ]);
    println!("{}", table);
}

pub fn build_steps(steps: &[BuildStep]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Step"),
        Cell::new("Min").fg(Color::Cyan),
        Cell::new("Tools"),
    ]);

    for step in steps {
        table.add_row(vec![
            Cell::new(step.order).set_alignment(CellAlignment::Right),
            Cell::new(&step.title).add_attribute(Attribute::Bold),
            Cell::new(step.estimated_time)
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
            Cell::new(step.tools.join(", ")),
        ]);
    }
    println!("{}", table);
}

pub fn mistakes(mistakes: &[CommonMistake]) {
    if mistakes.is_empty() {
        return;
    }
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Common mistake").add_attribute(Attribute::Bold),
        Cell::new("Severity"),
        Cell::new("Prevention"),
    ]);

    for m in mistakes {
        let severity = match m.severity {
            Severity::Minor => Cell::new("minor").fg(Color::Green),
            Severity::Moderate => Cell::new("moderate").fg(Color::Yellow),
            Severity::Major => Cell::new("major").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(m.title).add_attribute(Attribute::Bold),
            severity,
            Cell::new(m.prevention),
        ]);
    }
    println!("{}", table);
}

pub fn recommendation(recommendation: &Recommendation) {
    println!(
        "\n🎯 Recommended level: {}",
        recommendation.recommended_level
    );
    for reason in &recommendation.reasoning {
        println!("   - {}", reason);
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Level").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Hours").fg(Color::Cyan),
        Cell::new("Description"),
    ]);
    for d in &recommendation.alternatives {
        let level = if d.level == recommendation.recommended_level {
            Cell::new(d.level).fg(Color::Green)
        } else {
            Cell::new(d.level)
        };
        table.add_row(vec![
            level,
            Cell::new(d.name),
            Cell::new(d.estimated_time).fg(Color::Cyan),
            Cell::new(d.description),
        ]);
    }
    println!("{}", table);
}
