use thiserror::Error;

/// Why a parse did not produce a value
///
/// Produced by [`Outcome::into_result`](crate::Outcome::into_result). The
/// engine itself reports failures as [`Outcome::Failed`](crate::Outcome::Failed)
/// values and never constructs this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The parser rejected its input
    #[error("{}", render_failure(.context, .message))]
    Failed {
        context: Vec<String>,
        message: String,
    },
    /// The parser was still waiting for input when the caller gave up on it
    #[error("incomplete input")]
    Incomplete,
}

fn render_failure(context: &[String], message: &str) -> String {
    if context.is_empty() {
        message.to_owned()
    } else {
        format!("{}: {}", context.join(" > "), message)
    }
}
