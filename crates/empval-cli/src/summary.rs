//! Human-readable table output for the three commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use empval_model::{AppliedRules, BatchReport, RecordResult};

use crate::commands::RuleOptions;

pub fn print_batch_summary(report: &BatchReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Construtora"),
        header_cell("Cidade"),
        header_cell("Status"),
        header_cell("Erros"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for result in &report.results {
        table.add_row(vec![
            Cell::new(result.construtora.as_deref().unwrap_or("-")),
            Cell::new(result.cidade.as_deref().unwrap_or("-")),
            status_cell(result),
            Cell::new(errors_text(result)),
        ]);
    }
    println!("{table}");
    println!(
        "{} registro(s): {} válido(s), {} inválido(s), {} com erro estrutural",
        report.results.len(),
        report.valid_count(),
        report.invalid_count(),
        report.structural_count(),
    );
}

pub fn print_applied_rules(applied: &AppliedRules) {
    match &applied.cidade {
        Some(cidade) if applied.default_city_rules => {
            println!("Cidade: {cidade} (sem conjunto próprio, usando o padrão)");
        }
        Some(cidade) => println!("Cidade: {cidade}"),
        None => println!("Cidade: - (usando o conjunto padrão)"),
    }
    match &applied.construtora {
        Some(construtora) if applied.builder_rules.is_empty() => {
            println!("Construtora: {construtora} (sem regras próprias)");
        }
        Some(construtora) => println!("Construtora: {construtora}"),
        None => println!("Construtora: -"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Regra"),
        header_cell("Descrição"),
        header_cell("Origem"),
    ]);
    apply_table_style(&mut table);
    for rule in &applied.merged_rules {
        let origem = if applied.city_rules.contains(rule) {
            "cidade"
        } else {
            "construtora"
        };
        table.add_row(vec![
            Cell::new(rule.key),
            Cell::new(rule.description),
            Cell::new(origem),
        ]);
    }
    println!("{table}");
}

pub fn print_rule_options(options: &RuleOptions) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Tipo"), header_cell("Chave")]);
    apply_table_style(&mut table);
    for cidade in &options.cidades {
        table.add_row(vec![Cell::new("cidade"), Cell::new(cidade)]);
    }
    for construtora in &options.construtoras {
        table.add_row(vec![Cell::new("construtora"), Cell::new(construtora)]);
    }
    println!("{table}");
}

fn errors_text(result: &RecordResult) -> String {
    if let Some(estrutural) = &result.erro_estrutural {
        return format!("[estrutural] {estrutural}");
    }
    if result.erros.is_empty() {
        "-".to_string()
    } else {
        result.erros.join("\n")
    }
}

fn status_cell(result: &RecordResult) -> Cell {
    if result.is_valid() {
        Cell::new("Válido")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("Inválido")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
