//! Terminal colorization for generated declarations
//!
//! Applies ANSI escape codes to Java keywords using crossterm.

use crossterm::style::{Color, Stylize};

/// Colorize generated Java using ANSI escape codes
///
/// - Access modifiers: Cyan
/// - Declaration keywords (`class`, `enum`, `abstract`, `extends`): Magenta
/// - Braces: Yellow
/// - Everything else: Default (terminal color)
pub fn colorize_output(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);

    for line in input.lines() {
        let mut word = String::new();
        for c in line.chars() {
            if c.is_ascii_alphanumeric() || c == '_' {
                word.push(c);
                continue;
            }
            push_word(&mut result, &word);
            word.clear();

            match c {
                '{' | '}' => result.push_str(&format!("{}", c.to_string().with(Color::Yellow))),
                _ => result.push(c),
            }
        }
        push_word(&mut result, &word);
        result.push('\n');
    }

    // Remove trailing newline to match input format
    if !input.ends_with('\n') && result.ends_with('\n') {
        result.pop();
    }

    result
}

fn push_word(result: &mut String, word: &str) {
    let color = match word {
        "public" | "private" | "protected" => Some(Color::Cyan),
        "class" | "enum" | "abstract" | "extends" => Some(Color::Magenta),
        _ => None,
    };
    match color {
        Some(color) => result.push_str(&format!("{}", word.with(color))),
        None => result.push_str(word),
    }
}
