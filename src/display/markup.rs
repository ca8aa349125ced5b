//! Style markup rendering
//!
//! Turns `<fg=..;bg=..;options=..>text</>` and the named tags (`info`,
//! `comment`, `question`, `error`) into ANSI styled text, or strips them
//! when colors are disabled. Tags that do not describe a valid style are
//! kept as literal text.

use std::sync::LazyLock;

use regex::Regex;
use termimad::crossterm::style::{Attribute, Color, ContentStyle};

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/)?([a-z][^<>]*)?>").expect("markup tag pattern is valid")
});

/// Render markup to a printable string
pub fn render(markup: &str, colors: bool) -> String {
    let mut output = String::with_capacity(markup.len());
    let mut stack: Vec<ContentStyle> = Vec::new();
    let mut last = 0;

    for caps in TAG.captures_iter(markup) {
        let Some(tag) = caps.get(0) else {
            continue;
        };

        push_text(&mut output, &markup[last..tag.start()], stack.last(), colors);
        last = tag.end();

        let closing = caps.get(1).is_some();
        let style = caps.get(2).map(|m| parse_style(m.as_str()));

        match (closing, style) {
            // `</>` and `</name>` close the innermost style; nothing open is fine
            (true, None) | (true, Some(Some(_))) => {
                stack.pop();
            }
            (false, Some(Some(style))) => stack.push(style),
            _ => push_text(&mut output, tag.as_str(), stack.last(), colors),
        }
    }

    push_text(&mut output, &markup[last..], stack.last(), colors);
    output
}

fn push_text(output: &mut String, text: &str, style: Option<&ContentStyle>, colors: bool) {
    if text.is_empty() {
        return;
    }

    match style {
        Some(style) if colors => output.push_str(&(*style).apply(text).to_string()),
        _ => output.push_str(text),
    }
}

/// Parse a tag body such as `info` or `fg=red;options=bold`
fn parse_style(body: &str) -> Option<ContentStyle> {
    let mut style = ContentStyle::new();

    match body.to_ascii_lowercase().as_str() {
        "info" => {
            style.foreground_color = Some(Color::DarkGreen);
            return Some(style);
        }
        "comment" => {
            style.foreground_color = Some(Color::DarkYellow);
            return Some(style);
        }
        "question" => {
            style.foreground_color = Some(Color::Black);
            style.background_color = Some(Color::DarkCyan);
            return Some(style);
        }
        "error" => {
            style.foreground_color = Some(Color::Grey);
            style.background_color = Some(Color::DarkRed);
            return Some(style);
        }
        _ => {}
    }

    for attribute in body.split(';') {
        let (key, value) = attribute.split_once('=')?;
        match key.trim().to_ascii_lowercase().as_str() {
            "fg" => style.foreground_color = Some(parse_color(value)?),
            "bg" => style.background_color = Some(parse_color(value)?),
            "options" => {
                for option in value.split(',') {
                    style.attributes.set(parse_option(option)?);
                }
            }
            _ => return None,
        }
    }

    Some(style)
}

fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();

    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel =
            |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        return Some(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        });
    }

    let color = match name.as_str() {
        "default" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::DarkRed,
        "green" => Color::DarkGreen,
        "yellow" => Color::DarkYellow,
        "blue" => Color::DarkBlue,
        "magenta" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        "white" => Color::Grey,
        "gray" | "grey" | "bright-black" => Color::DarkGrey,
        "bright-red" => Color::Red,
        "bright-green" => Color::Green,
        "bright-yellow" => Color::Yellow,
        "bright-blue" => Color::Blue,
        "bright-magenta" => Color::Magenta,
        "bright-cyan" => Color::Cyan,
        "bright-white" => Color::White,
        _ => return None,
    };

    Some(color)
}

fn parse_option(name: &str) -> Option<Attribute> {
    let attribute = match name.trim().to_ascii_lowercase().as_str() {
        "bold" => Attribute::Bold,
        "underscore" | "underline" => Attribute::Underlined,
        "italic" => Attribute::Italic,
        "blink" => Attribute::SlowBlink,
        "reverse" => Attribute::Reverse,
        "conceal" => Attribute::Hidden,
        _ => return None,
    };

    Some(attribute)
}
