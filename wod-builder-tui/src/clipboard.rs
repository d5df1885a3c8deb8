// wod-builder-tui/src/clipboard.rs
// Clipboard sink: OSC 52 asks the terminal to put the text on the system clipboard.
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crossterm::{execute, style::Print};
use std::io;

pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text)))
}

fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_wraps_base64_payload() {
        assert_eq!(osc52_sequence("Squat\n"), "\x1b]52;c;U3F1YXQK\x1b\\");
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x1b\\");
    }
}
