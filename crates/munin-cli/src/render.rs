// Terminal rendering of formatted results
use colored::Colorize;
use munin_commands::ResultFormatter;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COLOR_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<color=#([0-9A-Fa-f]{6})>(.*?)</color>").expect("color span pattern is valid")
});

/// Turns color markers into ANSI sequences, or drops them in plain mode
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    plain: bool,
}

impl Renderer {
    pub fn new(plain: bool) -> Self {
        Self { plain }
    }

    /// Plain when asked for or when stdout is not a terminal
    pub fn detect(force_plain: bool) -> Self {
        Self::new(force_plain || !atty::is(atty::Stream::Stdout))
    }

    pub fn is_plain(&self) -> bool {
        self.plain
    }

    pub fn render(&self, text: &str) -> String {
        if self.plain {
            return ResultFormatter::strip_markup(text);
        }

        let painted = COLOR_SPAN.replace_all(text, |caps: &Captures| match parse_hex(&caps[1]) {
            Some((r, g, b)) => caps[2].truecolor(r, g, b).to_string(),
            None => caps[2].to_string(),
        });
        // Nested or unbalanced markers are left over; drop them
        ResultFormatter::strip_markup(&painted)
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
