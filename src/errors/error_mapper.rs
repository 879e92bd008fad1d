use dropac_core::LoadError;
use std::io::ErrorKind;
use std::path::Path;

/// Map collection loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &LoadError, path: &Path) -> (String, String, String) {
    match error {
        LoadError::Io { source, .. } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        LoadError::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        LoadError::Json(err) => (
            "Invalid JSON".to_string(),
            "The file is not valid JSON.".to_string(),
            format!("Line {}, column {}: {}", err.line(), err.column(), err),
        ),
        LoadError::Schema(problems) => (
            "Unexpected Document Shape".to_string(),
            "The file is not an item collection document.".to_string(),
            numbered(problems),
        ),
        LoadError::Validation(problems) => (
            "Validation Error".to_string(),
            "The item collection has validation errors.".to_string(),
            numbered(problems),
        ),
        other => (
            "Error Loading File".to_string(),
            "Failed to load item collection.".to_string(),
            other.to_string(),
        ),
    }
}

/// Print a load error to stderr in the mapped form
pub fn report_load_error(error: &LoadError, path: &Path) {
    let (title, message, details) = map_load_error(error, path);
    eprintln!("{}: {}\n", title, message);
    eprintln!("{}", details);
}

fn numbered(problems: &[String]) -> String {
    problems
        .iter()
        .enumerate()
        .map(|(i, problem)| format!("  {}. {}", i + 1, problem))
        .collect::<Vec<_>>()
        .join("\n")
}
