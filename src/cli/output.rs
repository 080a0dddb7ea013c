//! Output formatting for CLI

use crate::{engine::Board, rote::Mistake};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, String)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Render a board as a bordered grid, one cell per box.
pub fn render_board(board: &Board) -> String {
    let separator = format!("+{}", "---+".repeat(board.cols()));
    let mut out = separator.clone();
    for row in 0..board.rows() {
        out.push_str("\n|");
        for cell in board.row(row) {
            out.push(' ');
            out.push(cell.to_char());
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(&separator);
    }
    out
}

/// List every remembered mistake under the board it was made on
pub fn flaws_listing(mistakes: &[Mistake]) -> String {
    let mut out = String::from("The incorrect moves are:");
    for mistake in mistakes {
        out.push('\n');
        out.push_str(&render_board(mistake.configuration()));
        out.push('\n');
        out.push_str(&mistake.action().to_string());
    }
    out
}

/// Print every remembered mistake with the board it was made on
pub fn print_flaws(mistakes: &[Mistake]) {
    println!("{}", flaws_listing(mistakes));
}
