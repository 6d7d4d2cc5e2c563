use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|e| {
        log::debug!("arboard init failed: {}", e);
        ClipboardError::SystemUnavailable
    })?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_returns_result() {
        let result = copy("Mode characters per comic: 5");
        assert!(
            result.is_ok()
                || matches!(
                    result,
                    Err(ClipboardError::SystemUnavailable) | Err(ClipboardError::WriteError)
                )
        );
    }
}
