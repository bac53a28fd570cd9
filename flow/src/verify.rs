use crate::types::FlowOutcome;

/// Decide the outcome from the final page body
///
/// The marker may appear anywhere in the body. On failure the outcome
/// carries the first `preview_chars` characters of the body.
pub fn verify(body: &str, marker: &str, preview_chars: usize) -> FlowOutcome {
    if body.contains(marker) {
        FlowOutcome::Success
    } else {
        FlowOutcome::Failure {
            preview: preview(body, preview_chars),
        }
    }
}

/// First `max_chars` characters of `body`, whole code points only
pub fn preview(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((end, _)) => body[..end].to_owned(),
        None => body.to_owned(),
    }
}
