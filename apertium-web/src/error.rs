use thiserror::Error;

/// Failures raised by the DOM helpers backing the footer.
///
/// None of these reach the user: callers log them and carry on, leaving the
/// layout as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FooterError {
    #[error("browser global `{0}` is unavailable")]
    MissingGlobal(&'static str),
    #[error("failed to subscribe to window resize: {0}")]
    Listener(String),
    #[error("failed to set style `{property}`: {message}")]
    StyleWrite {
        property: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::FooterError;

    #[test]
    fn messages_name_the_failing_piece() {
        assert_eq!(
            FooterError::MissingGlobal("window").to_string(),
            "browser global `window` is unavailable"
        );
        let err = FooterError::StyleWrite {
            property: "height",
            message: "read-only".into(),
        };
        assert_eq!(err.to_string(), "failed to set style `height`: read-only");
    }
}
