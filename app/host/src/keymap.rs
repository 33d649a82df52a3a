//! FILENAME: app/host/src/keymap.rs
// PURPOSE: Keyboard to keypad command mapping.
// CONTEXT: Key names follow browser `KeyboardEvent.key` values ("5", "+",
// "Enter", "Escape"), which is also what the numeric keypad reports.
// Console input uses the same table, with named keys written as `<name>`.

use engine::{KeypadCommand, Operator};

/// Map one key to a keypad command. Unmapped keys return `None`.
pub fn map_key(key: &str) -> Option<KeypadCommand> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return map_char(c);
    }

    match key.to_ascii_lowercase().as_str() {
        "enter" => Some(KeypadCommand::Equals),
        "backspace" | "bs" => Some(KeypadCommand::Backspace),
        "delete" | "del" => Some(KeypadCommand::ClearEntry),
        "escape" | "esc" => Some(KeypadCommand::ClearAll),
        "mc" => Some(KeypadCommand::MemoryClear),
        "mr" => Some(KeypadCommand::MemoryRecall),
        "ms" => Some(KeypadCommand::MemoryStore),
        "m+" => Some(KeypadCommand::MemoryAdd),
        "m-" => Some(KeypadCommand::MemorySubtract),
        "sqrt" => Some(KeypadCommand::Sqrt),
        _ => None,
    }
}

fn map_char(c: char) -> Option<KeypadCommand> {
    match c {
        '0'..='9' => Some(KeypadCommand::Digit(c)),
        '.' => Some(KeypadCommand::DecimalPoint),
        '=' => Some(KeypadCommand::Equals),
        '%' | 'p' | 'P' => Some(KeypadCommand::Percent),
        'r' | 'R' => Some(KeypadCommand::Reciprocal),
        '@' => Some(KeypadCommand::Sqrt),
        'n' | 'N' => Some(KeypadCommand::Negate),
        _ => Operator::from_symbol(c).map(KeypadCommand::Operator),
    }
}

/// Split a console line into commands. Whitespace is skipped, `<name>`
/// selects a named key, every other character is a key of its own.
pub fn parse_keystrokes(line: &str) -> Result<Vec<KeypadCommand>, String> {
    let mut commands = Vec::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let key = if c == '<' {
            let mut name = String::new();
            let mut closed = false;
            for ch in chars.by_ref() {
                if ch == '>' {
                    closed = true;
                    break;
                }
                name.push(ch);
            }
            if !closed {
                return Err(format!("unterminated key <{}", name));
            }
            map_key(&name).ok_or_else(|| format!("unknown key <{}>", name))?
        } else {
            map_char(c).ok_or_else(|| format!("unknown key {:?}", c))?
        };
        commands.push(key);
    }

    Ok(commands)
}
