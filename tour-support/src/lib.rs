use std::borrow::Cow;

fn escape_single_quotes(input: &str) -> Cow<'_, str> {
    if input.contains('\'') {
        Cow::Owned(input.replace('\'', "\\'"))
    } else {
        Cow::Borrowed(input)
    }
}

/// `module.operation('target') failed`; the cause is attached by the caller.
fn format_operation_context(module: &str, operation: &str, target: Option<&str>) -> String {
    match target {
        Some(target) => {
            let escaped = escape_single_quotes(target);
            format!("{module}.{operation}('{}') failed", escaped)
        }
        None => format!("{module}.{operation} failed"),
    }
}

pub fn docs_context(operation: &str, path: &str) -> String {
    format_operation_context("tour.docs", operation, Some(path))
}

pub fn lesson_context(lesson: &str) -> String {
    format_operation_context("tour.lessons", "run", Some(lesson))
}

pub fn io_context(operation: &str) -> String {
    format_operation_context("tour.io", operation, None)
}
