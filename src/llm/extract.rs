//! Strips the reasoning trace some models prepend to their answer.
//!
//! Reasoning-capable models emit an internal "thinking" block terminated by
//! a fixed sentinel before the user-facing text. Only the text after the
//! sentinel is the payload.

/// Delimiter between a model's reasoning trace and its final answer.
const THINK_SENTINEL: &str = "</think>";

/// Return the user-facing payload of a raw model response.
///
/// If the sentinel occurs, returns the trimmed text after its first
/// occurrence; otherwise the trimmed input. Total over all inputs and
/// idempotent under repeated application.
pub fn extract_payload(raw: &str) -> &str {
    match raw.find(THINK_SENTINEL) {
        Some(pos) => raw[pos + THINK_SENTINEL.len()..].trim(),
        None => raw.trim(),
    }
}
