//! OSC 52 clipboard backend for remote sessions

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const BEL: &str = "\x07";

/// Write the OSC 52 sequence for `text` to stdout
pub fn copy(text: &str) -> ClipboardResult {
    let mut stdout = io::stdout();
    stdout
        .write_all(encode_osc52(text).as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_osc52(text: &str) -> String {
    format!("{}{}{}", OSC52_PREFIX, STANDARD.encode(text), BEL)
}
