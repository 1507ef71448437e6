use std::fmt;

/// Outcome kind of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Success,
    Error,
    NotFound,
    NoPermission,
    Info,
    Table,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultKind::Success => "success",
            ResultKind::Error => "error",
            ResultKind::NotFound => "not-found",
            ResultKind::NoPermission => "no-permission",
            ResultKind::Info => "info",
            ResultKind::Table => "table",
        };
        f.write_str(name)
    }
}

/// Tabular payload; row 0 is the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    rows: Vec<Vec<String>>,
}

impl TableData {
    /// Create a table with a header row
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![header.into_iter().map(Into::into).collect()],
        }
    }

    /// Create a table from rows, the first of which is the header
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Append a data row
    pub fn with_row<I, S>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(row);
        self
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Data rows, header excluded
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// All rows, header included
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Result of one dispatch
///
/// A `Success` without a message is silent and formats to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Success(Option<String>),
    Error(String),
    NotFound(String),
    NoPermission(String),
    Info(String),
    Table(TableData),
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        CommandResult::Success(Some(message.into()))
    }

    /// A success that produces no output
    pub fn silent() -> Self {
        CommandResult::Success(None)
    }

    pub fn error(message: impl Into<String>) -> Self {
        CommandResult::Error(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CommandResult::NotFound(message.into())
    }

    pub fn no_permission(message: impl Into<String>) -> Self {
        CommandResult::NoPermission(message.into())
    }

    pub fn info(message: impl Into<String>) -> Self {
        CommandResult::Info(message.into())
    }

    pub fn table(table: TableData) -> Self {
        CommandResult::Table(table)
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            CommandResult::Success(_) => ResultKind::Success,
            CommandResult::Error(_) => ResultKind::Error,
            CommandResult::NotFound(_) => ResultKind::NotFound,
            CommandResult::NoPermission(_) => ResultKind::NoPermission,
            CommandResult::Info(_) => ResultKind::Info,
            CommandResult::Table(_) => ResultKind::Table,
        }
    }

    /// The message carried by non-table results
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(message) => message.as_deref(),
            CommandResult::Error(message)
            | CommandResult::NotFound(message)
            | CommandResult::NoPermission(message)
            | CommandResult::Info(message) => Some(message),
            CommandResult::Table(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandResult::Success(_))
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, CommandResult::Success(None))
    }
}
