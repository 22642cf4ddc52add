use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lesson_cli::pipeline::{Explanation, RunResult};
use lesson_map::ReviewHint;

pub fn print_summary(result: &RunResult) {
    let language = result.language.map_or("custom", |l| l.name());
    println!("Language: {language}");
    println!("Mode: {}", result.mode);
    println!("Chapters in catalog: {}", result.chapter_count);
    for path in &result.written {
        println!("Wrote: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Entries"),
        header_cell("Matched"),
        header_cell("Unmatched"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let structure = &result.reconciliation.structure;
    for group in &structure.major_lessons {
        let unmatched = group.unmatched_count();
        table.add_row(vec![
            Cell::new(&group.name),
            Cell::new(group.sublessons.len()),
            Cell::new(group.sublessons.len() - unmatched),
            count_cell(unmatched, Color::Yellow),
        ]);
    }
    let total = structure.total_count();
    let unmatched = structure.unmatched_count();
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
        Cell::new(total - unmatched).add_attribute(Attribute::Bold),
        count_cell(unmatched, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_strategy_table(result);
    print_unmatched_table(&result.review.unmatched);
}

fn print_strategy_table(result: &RunResult) {
    let by_strategy = &result.reconciliation.report.by_strategy;
    if by_strategy.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Strategy"), header_cell("Matches")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (strategy, count) in by_strategy {
        let label = if strategy.is_textual() {
            Cell::new(strategy.label())
        } else {
            Cell::new(format!("{} (no textual evidence)", strategy.label())).fg(Color::Yellow)
        };
        table.add_row(vec![label, Cell::new(count)]);
    }
    println!("{table}");
}

fn print_unmatched_table(hints: &[ReviewHint]) {
    if hints.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Unmatched title"),
        header_cell("Closest unclaimed chapter"),
        header_cell("Similarity"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for hint in hints {
        let (chapter, similarity) = match &hint.suggestion {
            Some(s) => (
                Cell::new(format!("#{} {}", s.chapter_id, s.chapter_title)),
                Cell::new(format!("{:.2}", s.similarity)),
            ),
            None => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            dim_cell(&hint.group),
            Cell::new(&hint.title).fg(Color::Yellow),
            chapter,
            similarity,
        ]);
    }
    println!("{table}");
}

pub fn print_explanation(explanation: &Explanation) {
    println!("Title: {}", explanation.title);
    println!("Normalized: {}", explanation.normalized);
    println!("Keywords: {}", explanation.keywords.join(", "));
    println!("Later part: {}", explanation.later_part);
    println!("Mode: {}", explanation.mode);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Strategy"),
        header_cell("Chapter"),
        header_cell("Chapter title"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let winner = explanation.rows.iter().position(|r| r.chapter_id.is_some());
    for (index, row) in explanation.rows.iter().enumerate() {
        let strategy = if Some(index) == winner {
            Cell::new(row.strategy.label())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(row.strategy.label())
        };
        table.add_row(vec![
            strategy,
            row.chapter_id.map_or_else(|| dim_cell("-"), Cell::new),
            row.chapter_title
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
