use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    #[error("failed to write to clipboard")]
    WriteError,
}

/// Copy `text` with the configured backend
///
/// `Auto` tries the system clipboard and falls back to OSC 52.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    let result = match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("System clipboard failed ({}), falling back to OSC 52", e);
            osc52::copy(text)
        }),
    };

    if let Err(e) = &result {
        log::warn!("Clipboard copy via {:?} failed: {}", backend, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_backend_succeeds() {
        let result = copy_to_clipboard("Total Comics: 4", ClipboardBackend::Osc52);
        assert!(result.is_ok());
    }

    #[test]
    fn test_system_backend_reports_unavailable_headless() {
        let result = copy_to_clipboard("Spider-Man #1", ClipboardBackend::System);
        assert!(
            result.is_ok()
                || matches!(
                    result,
                    Err(ClipboardError::SystemUnavailable) | Err(ClipboardError::WriteError)
                )
        );
    }

    #[test]
    fn test_auto_backend_falls_back() {
        let result = copy_to_clipboard("Avengers: Infinity", ClipboardBackend::Auto);
        assert!(result.is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClipboardError::SystemUnavailable.to_string(),
            "system clipboard unavailable"
        );
        assert_eq!(ClipboardError::WriteError.to_string(), "failed to write to clipboard");
    }
}
