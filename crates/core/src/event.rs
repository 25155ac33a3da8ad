/// Everything the input loop can hand to the coordinator.
///
/// Sources:
/// - stdin reader      → `Line`, `Eof`
/// - idle timer        → `IdleTimeout`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// One raw input line, newline already stripped.
    Line(String),
    /// The idle timeout elapsed with no new input while the bar was shown.
    IdleTimeout,
    /// Standard input was closed.
    Eof,
}
