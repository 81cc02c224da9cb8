use anyhow::Error;

/// Format an error for display in the browser
///
/// Joins the whole context chain so both what failed and the underlying
/// OS error are visible, e.g. `failed to run 'xclip': No such file or directory`.
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
