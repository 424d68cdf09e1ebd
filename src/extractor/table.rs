use crate::extractor::block::COMMENT_MARKER;

/// Ordered token names extracted from an enum body, plus their serialized
/// string-table form.
///
/// Order and duplicates are preserved exactly as written in the header;
/// uniqueness is the upstream enum's business, not this tool's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    names: Vec<String>,
}

impl TokenTable {
    /// Build a table from the raw lines of an enum body.
    ///
    /// Each line is truncated at the first `//`, trimmed, and skipped if
    /// empty; survivors are concatenated with no separator. That is safe
    /// because every enum item ends with a comma, which acts as the line
    /// boundary during the split below.
    pub fn from_block_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut body = String::new();

        for line in lines {
            let line = match line.find(COMMENT_MARKER) {
                Some(pos) => &line[..pos],
                None => line,
            };
            let line = line.trim();
            if !line.is_empty() {
                body.push_str(line);
            }
        }

        Self::from_body(&body)
    }

    /// Split a normalized body on commas into token names. Empty fragments
    /// (a trailing comma, doubled commas) are dropped.
    fn from_body(body: &str) -> Self {
        let names = body
            .split(',')
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(String::from)
            .collect();

        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Serialize as the string-table initializer: `{"A", "B", "C"}`.
    /// An empty table renders as `{}`.
    pub fn render(&self) -> String {
        let quoted: Vec<String> = self
            .names
            .iter()
            .map(|name| format!("\"{}\"", name))
            .collect();

        format!("{{{}}}", quoted.join(", "))
    }
}

impl std::fmt::Display for TokenTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
