/// Named terminal colors understood by the markup renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Magenta => "Magenta",
            Color::Cyan => "Cyan",
            Color::White => "White",
            Color::Default => "Default",
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.as_str().to_string()
    }
}

/// Display options attached to a style
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOptions {
    /// Option names, comma-joined when composed
    List(Vec<String>),
    /// Pre-formatted option string, used verbatim
    Raw(String),
}

impl StyleOptions {
    pub fn is_empty(&self) -> bool {
        match self {
            StyleOptions::List(list) => list.is_empty(),
            StyleOptions::Raw(raw) => raw.is_empty(),
        }
    }

    /// Value placed after `options=`
    pub fn joined(&self) -> String {
        match self {
            StyleOptions::List(list) => list.join(","),
            StyleOptions::Raw(raw) => raw.clone(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for StyleOptions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StyleOptions::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Foreground, background and display options for a span of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSpec {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub options: Option<StyleOptions>,
}

impl StyleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: impl Into<String>) -> Self {
        self.fg = Some(color.into());
        self
    }

    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().collect());
        self
    }

    pub fn raw_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(StyleOptions::Raw(options.into()));
        self
    }

    /// Attribute list in fixed order: fg, bg, options
    pub(crate) fn attributes(&self) -> Vec<String> {
        let mut attributes = Vec::new();

        if let Some(fg) = &self.fg {
            attributes.push(format!("fg={}", fg));
        }

        if let Some(bg) = &self.bg {
            attributes.push(format!("bg={}", bg));
        }

        if let Some(options) = self.options.as_ref().filter(|o| !o.is_empty()) {
            attributes.push(format!("options={}", options.joined()));
        }

        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names() {
        assert_eq!(Color::Yellow.as_str(), "Yellow");
        assert_eq!(String::from(Color::Default), "Default");
    }

    #[test]
    fn test_attributes_order() {
        let spec = StyleSpec::new()
            .options(["bold"])
            .bg(Color::Blue)
            .fg(Color::White);
        assert_eq!(
            spec.attributes(),
            vec!["fg=White", "bg=Blue", "options=bold"]
        );
    }

    #[test]
    fn test_empty_options_are_absent() {
        let spec = StyleSpec::new().options(Vec::<String>::new());
        assert!(spec.attributes().is_empty());

        let spec = StyleSpec::new().raw_options("");
        assert!(spec.attributes().is_empty());
    }

    #[test]
    fn test_raw_options_verbatim() {
        let spec = StyleSpec::new().raw_options("bold,underscore");
        assert_eq!(spec.attributes(), vec!["options=bold,underscore"]);
    }
}
