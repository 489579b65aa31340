//! HTTP span helpers.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Replaces numeric path segments with `{id}` so span names and metric labels
/// stay low-cardinality.
fn normalise_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if is_numeric_id(segment) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

fn is_numeric_id(segment: &str) -> bool {
    let digits = segment.strip_prefix('-').unwrap_or(segment);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
