use colored::*;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 10;

const PRIMARY: Color = Color::BrightGreen;
const SEPARATOR: Color = Color::BrightBlack;
const TEXT_DEFAULT: Color = Color::White;

pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).color(SEPARATOR),
        formatted.to_uppercase().color(PRIMARY),
        "─".repeat(right).color(SEPARATOR),
    );
    print(&line);
}

pub fn aligned_line(key: &str, value: ColoredString) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(SEPARATOR),
        key.color(PRIMARY),
        dots.color(SEPARATOR),
        ":".color(SEPARATOR),
        value
    ));
}

/// Prints captured program output indented under the current block.
pub fn raw_block(label: &str, text: &str) {
    if text.is_empty() {
        aligned_line(label, "(empty)".dimmed());
        return;
    }
    aligned_line(label, "".normal());
    for line in text.lines() {
        print(&format!("    {}", line.color(TEXT_DEFAULT)));
    }
}

pub fn end_of_program() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(SEPARATOR)));
}
