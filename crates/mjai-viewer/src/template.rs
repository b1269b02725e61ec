use crate::error::ViewerError;

/// Opening of the embedded log literal.
pub const START_MARKER: &str = "allActions = `";
/// Closing of the embedded log literal.
pub const END_MARKER: &str = "`.trim().split('\\n')";

/// Replaces the body of the `allActions` literal with `log_text`.
///
/// The log is trimmed and placed on its own lines between the markers; the
/// rest of the template is copied unchanged.
pub fn splice(template: &str, log_text: &str) -> Result<String, ViewerError> {
    let start = template
        .find(START_MARKER)
        .ok_or(ViewerError::MarkerNotFound {
            marker: START_MARKER,
        })?
        + START_MARKER.len();
    let end = match template[start..].find(END_MARKER) {
        Some(offset) => start + offset,
        None if template.contains(END_MARKER) => return Err(ViewerError::MarkersOutOfOrder),
        None => {
            return Err(ViewerError::MarkerNotFound {
                marker: END_MARKER,
            })
        }
    };

    let log_text = log_text.trim();
    let mut html = String::with_capacity(template.len() + log_text.len() + 2);
    html.push_str(&template[..start]);
    html.push('\n');
    html.push_str(log_text);
    html.push('\n');
    html.push_str(&template[end..]);
    Ok(html)
}
