use log::debug;
use std::collections::HashMap;

use crate::config::DataError;

// Width of the position column at the end of each variable line.
const POSITION_WIDTH: usize = 8;

/// Parses the output of the PSPP command `DISPLAY LABELS.` into a mapping
/// from variable code to question text.
///
/// ```text
/// Variable            Label                                              Position
/// ═══════════════════════════════════════════════════════════════════════════════
///                  S5 What field do you work in?                                7
///                  S6 Which of the following better describes your              8
///                     current employment status?
/// ```
///
/// A variable starts on a line ending with its position. Lines without a
/// position continue the question of the previous variable.
pub fn parse_variable_labels(text: &str) -> Result<HashMap<String, String>, DataError> {
    let mut coding: HashMap<String, String> = HashMap::new();
    let mut current: Option<(String, String)> = None;
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with("Variable") || line.contains('═') {
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        let split = chars.len().saturating_sub(POSITION_WIDTH);
        let tail: String = chars[split..].iter().collect();
        let tail = tail.trim();
        if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
            // PSPP pads the code with spaces, never tabs.
            let code_len = chars.iter().position(|c| *c == ' ').unwrap_or(chars.len());
            let code: String = chars[..code_len].iter().collect();
            let description: String = if code_len < split {
                chars[code_len..split].iter().collect()
            } else {
                String::new()
            };
            let description = description.trim().to_string();
            debug!("parse_variable_labels: {} -> {:?}", code, description);
            coding.insert(code.clone(), description.clone());
            current = Some((code, description));
        } else {
            match current.as_mut() {
                Some((code, description)) => {
                    description.push(' ');
                    description.push_str(line);
                    coding.insert(code.clone(), description.clone());
                }
                None => {
                    return Err(DataError::OrphanContinuation {
                        lineno: idx + 1,
                        line: line.to_string(),
                    });
                }
            }
        }
    }
    Ok(coding)
}
