//! Terminal output sanitization.
//!
//! # Security: Terminal Injection Prevention
//!
//! Remote data (raw file contents fetched from repositories, oracle answers)
//! is attacker-influenced and must be sanitized before it enters the
//! transcript. Embedded ANSI escape sequences could otherwise:
//! - Clear the screen or move the cursor
//! - Change terminal colors or styles
//! - Trigger unexpected terminal behavior
//!
//! Both remote clients pass their text through [`strip_ansi_codes`] before
//! returning it to the shell.

/// Strips ANSI escape codes from a string
///
/// Removes ANSI CSI (Control Sequence Introducer) escape codes that could
/// affect terminal display, along with other control characters like bell
/// (`\x07`) and backspace (`\x08`). Tab, newline and carriage return are
/// preserved.
///
/// # Examples
///
/// ```
/// use portfolio_terminal::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    // Remove ANSI CSI sequences: ESC [ ... (letter)
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // Check for CSI sequence: ESC [
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we find a letter (end of CSI sequence)
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_remote_file_renders_as_plain_text() {
        // A fetched README carrying its own color codes
        let body = "\x1b[32m# VOID_ENGINE\x1b[0m\nBare \x1b[1mmetal\x1b[22m WebGL.";
        assert_eq!(strip_ansi_codes(body), "# VOID_ENGINE\nBare metal WebGL.");
    }

    #[test]
    fn test_oracle_answer_cannot_clear_the_screen() {
        let answer = "\x1b[2J\x1b[HCHAOS IS SIGNAL";
        assert_eq!(strip_ansi_codes(answer), "CHAOS IS SIGNAL");
    }

    #[test]
    fn test_bell_and_backspace_are_dropped() {
        assert_eq!(strip_ansi_codes("ping\x07"), "ping");
        assert_eq!(strip_ansi_codes("oops\x08!"), "oops!");
    }

    #[test]
    fn test_file_layout_whitespace_survives() {
        let source = "fn main() {\n\tprintln!(\"hi\");\r\n}";
        assert_eq!(strip_ansi_codes(source), source);
    }

    #[test]
    fn test_multibyte_content_untouched() {
        assert_eq!(strip_ansi_codes("héllo \x1b[31mwörld\x1b[0m ✓"), "héllo wörld ✓");
    }

    #[test]
    fn test_sequence_only_input_collapses_to_empty() {
        assert_eq!(strip_ansi_codes(""), "");
        assert_eq!(strip_ansi_codes("\x1b[31m\x1b[0m\x1b[2J"), "");
    }
}
