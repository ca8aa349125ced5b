//! Style composition module
//!
//! Wraps text in `<fg=..;bg=..;options=..>text</>` markup for the
//! terminal renderer.

mod types;

pub use types::{Color, StyleOptions, StyleSpec};

/// Wrap `text` in style markup.
///
/// The closing tag is always appended. With no attributes set no opening
/// tag is emitted, so the result is `text</>`.
pub fn compose(text: &str, spec: &StyleSpec) -> String {
    let attributes = spec.attributes();

    if attributes.is_empty() {
        format!("{}</>", text)
    } else {
        format!("<{}>{}</>", attributes.join(";"), text)
    }
}

/// Compose every entry in order and concatenate the results
pub fn compose_all<S: AsRef<str>>(entries: &[(S, StyleSpec)]) -> String {
    entries
        .iter()
        .map(|(text, spec)| compose(text.as_ref(), spec))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_without_attributes() {
        assert_eq!(compose("hello", &StyleSpec::new()), "hello</>");
    }

    #[test]
    fn test_compose_foreground_only() {
        let spec = StyleSpec::new().fg(Color::Red);
        assert_eq!(compose("hello", &spec), "<fg=Red>hello</>");
    }

    #[test]
    fn test_compose_background_only() {
        let spec = StyleSpec::new().bg("cyan");
        assert_eq!(compose("hello", &spec), "<bg=cyan>hello</>");
    }

    #[test]
    fn test_compose_all_attributes() {
        let spec = StyleSpec::new()
            .fg("F")
            .bg("B")
            .options(["O1", "O2"]);
        assert_eq!(compose("text", &spec), "<fg=F;bg=B;options=O1,O2>text</>");
    }

    #[test]
    fn test_compose_options_only() {
        let spec = StyleSpec::new().options(["bold"]);
        assert_eq!(compose("x", &spec), "<options=bold>x</>");
    }

    #[test]
    fn test_compose_all_keeps_order() {
        let entries = vec![
            ("b", StyleSpec::new().fg(Color::Green)),
            ("a", StyleSpec::new()),
            ("c", StyleSpec::new().bg(Color::Black)),
        ];
        assert_eq!(
            compose_all(&entries),
            "<fg=Green>b</>a</><bg=Black>c</>"
        );
    }

    #[test]
    fn test_compose_all_empty() {
        let entries: Vec<(&str, StyleSpec)> = Vec::new();
        assert_eq!(compose_all(&entries), "");
    }
}
