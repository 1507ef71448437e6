/// Completion context derived from the live input line
///
/// The position is the number of whitespace runs after leading whitespace is
/// skipped, so a trailing space moves the cursor on to the next argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    pub position: usize,
    pub tokens: Vec<String>,
}

impl CompletionContext {
    pub fn analyze(text: &str) -> Self {
        let text = text.trim_start();

        let mut position = 0;
        let mut in_whitespace = false;
        for c in text.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    position += 1;
                }
                in_whitespace = true;
            } else {
                in_whitespace = false;
            }
        }

        Self {
            position,
            tokens: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// The command word following the root word, if typed
    pub fn command(&self) -> Option<&str> {
        self.tokens.get(1).map(String::as_str)
    }
}
