//! Result formatting
//!
//! Messages are wrapped in `<color=#RRGGBB>...</color>` markers chosen by
//! the outcome kind's [`ColorCategory`]. Tables are rendered as aligned
//! columns with a highlighted header row. Display surfaces that cannot show
//! markers use [`ResultFormatter::strip_markup`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::result::{CommandResult, ResultKind, TableData};

static MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?color(=[^>]*)?>").expect("markup pattern is valid"));

/// Semantic color category of displayed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    Success,
    Error,
    Warning,
    Info,
    Header,
}

impl ResultKind {
    /// Color category used for this outcome's message
    ///
    /// Tables have no single category; their header uses
    /// [`ColorCategory::Header`].
    pub fn color_category(&self) -> Option<ColorCategory> {
        match self {
            ResultKind::Success => Some(ColorCategory::Success),
            ResultKind::Error | ResultKind::NoPermission => Some(ColorCategory::Error),
            ResultKind::NotFound => Some(ColorCategory::Warning),
            ResultKind::Info => Some(ColorCategory::Info),
            ResultKind::Table => None,
        }
    }
}

/// Hex colors per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub success: String,
    pub error: String,
    pub warning: String,
    pub info: String,
    pub header: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: "#7CFC00".to_string(),
            error: "#FF5555".to_string(),
            warning: "#FFB000".to_string(),
            info: "#87CEEB".to_string(),
            header: "#FFD700".to_string(),
        }
    }
}

impl Theme {
    pub fn color(&self, category: ColorCategory) -> &str {
        match category {
            ColorCategory::Success => &self.success,
            ColorCategory::Error => &self.error,
            ColorCategory::Warning => &self.warning,
            ColorCategory::Info => &self.info,
            ColorCategory::Header => &self.header,
        }
    }

    /// Each color must be `#RRGGBB`
    pub fn validate(&self) -> std::result::Result<(), String> {
        for color in [
            &self.success,
            &self.error,
            &self.warning,
            &self.info,
            &self.header,
        ] {
            let valid = color.len() == 7
                && color.starts_with('#')
                && color[1..].chars().all(|c| c.is_ascii_hexdigit());
            if !valid {
                return Err(format!("Invalid theme color: {}", color));
            }
        }
        Ok(())
    }
}

/// Renders results to display strings
#[derive(Debug, Clone)]
pub struct ResultFormatter {
    theme: Theme,
    separator: String,
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ResultFormatter {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            separator: "  ".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Format a result; `None` for silent successes and empty tables
    pub fn format(&self, result: &CommandResult) -> Option<String> {
        match result {
            CommandResult::Success(None) => None,
            CommandResult::Table(table) => {
                if table.is_empty() {
                    None
                } else {
                    Some(self.format_table(table))
                }
            }
            other => {
                let category = other.kind().color_category()?;
                let message = other.message()?;
                Some(self.colorize(category, message))
            }
        }
    }

    /// Wrap text in the color marker of `category`
    pub fn colorize(&self, category: ColorCategory, text: &str) -> String {
        format!("<color={}>{}</color>", self.theme.color(category), text)
    }

    /// Render rows as aligned, left-justified columns
    ///
    /// Every cell is padded to the widest cell of its column across all rows,
    /// header included. Missing cells in short rows count as empty.
    pub fn format_table(&self, table: &TableData) -> String {
        let columns = table.column_count();
        let mut widths = vec![0usize; columns];
        for row in table.rows() {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let lines: Vec<String> = table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let line = widths
                    .iter()
                    .enumerate()
                    .map(|(i, width)| {
                        let cell = row.get(i).map(String::as_str).unwrap_or("");
                        format!("{}{}", cell, " ".repeat(width - cell.width()))
                    })
                    .collect::<Vec<_>>()
                    .join(&self.separator);
                if index == 0 {
                    self.colorize(ColorCategory::Header, &line)
                } else {
                    line
                }
            })
            .collect();

        lines.join("\n")
    }

    /// Remove color markers
    pub fn strip_markup(text: &str) -> String {
        MARKUP.replace_all(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_success_formats_to_none() {
        let formatter = ResultFormatter::default();
        assert_eq!(formatter.format(&CommandResult::silent()), None);
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(ResultKind::Success.color_category(), Some(ColorCategory::Success));
        assert_eq!(ResultKind::Error.color_category(), Some(ColorCategory::Error));
        assert_eq!(ResultKind::NoPermission.color_category(), Some(ColorCategory::Error));
        assert_eq!(ResultKind::NotFound.color_category(), Some(ColorCategory::Warning));
        assert_eq!(ResultKind::Info.color_category(), Some(ColorCategory::Info));
        assert_eq!(ResultKind::Table.color_category(), None);
    }

    #[test]
    fn test_message_is_wrapped() {
        let formatter = ResultFormatter::default();
        let theme = Theme::default();
        let out = formatter.format(&CommandResult::error("boom")).unwrap();
        assert_eq!(out, format!("<color={}>boom</color>", theme.error));
    }

    #[test]
    fn test_table_alignment() {
        let formatter = ResultFormatter::default();
        let table = TableData::new(["Name", "HP"])
            .with_row(["Viking", "100"])
            .with_row(["Warrior", "80"]);
        let out = formatter.format(&CommandResult::table(table)).unwrap();
        let plain = ResultFormatter::strip_markup(&out);
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines, vec!["Name     HP ", "Viking   100", "Warrior  80 "]);
        assert!(out.starts_with(&format!("<color={}>", Theme::default().header)));
        assert!(!out.lines().nth(1).unwrap().contains("<color"));
    }

    #[test]
    fn test_ragged_rows() {
        let formatter = ResultFormatter::default().with_separator(" | ");
        let table = TableData::new(["A", "B"]).with_row(["long"]);
        let plain = ResultFormatter::strip_markup(&formatter.format_table(&table));
        assert_eq!(plain, "A    | B\nlong |  ");
    }

    #[test]
    fn test_empty_table_is_silent() {
        let formatter = ResultFormatter::default();
        assert_eq!(
            formatter.format(&CommandResult::table(TableData::default())),
            None
        );
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            ResultFormatter::strip_markup("<color=#FFFFFF>a</color> b <color=red>c</color>"),
            "a b c"
        );
    }

    #[test]
    fn test_theme_validation() {
        assert!(Theme::default().validate().is_ok());
        let theme = Theme {
            error: "red".to_string(),
            ..Theme::default()
        };
        assert!(theme.validate().is_err());
    }
}
