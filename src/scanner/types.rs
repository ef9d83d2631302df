//! Scanner Types
//!
//! Shared types describing scanners and the rows they produce.

/// Static description of a scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerInfo {
    /// Unique name, also the output table's base name
    pub name: String,
    /// One-line description shown by `--list-scanners`
    pub description: String,
    /// External binary this scanner needs on PATH, if any
    pub command: Option<String>,
    /// Ordered column names; the table header is `Domain` followed by these
    pub headers: Vec<String>,
}

impl ScannerInfo {
    pub fn new(name: &str, description: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            command: None,
            headers: headers.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// Declare the external command this scanner depends on
    pub fn with_command(mut self, command: &str) -> Self {
        self.command = Some(command.to_string()).filter(|c| !c.trim().is_empty());
        self
    }

    /// File name of this scanner's output table
    pub fn table_file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

/// One scanner's finding for one domain
///
/// Values line up with the scanner's headers. An empty row means "no result"
/// and is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    values: Vec<String>,
}

impl ResultRow {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// A row signalling "no result for this domain"
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> From<Vec<S>> for ResultRow {
    fn from(values: Vec<S>) -> Self {
        Self::new(values.into_iter().map(Into::into).collect())
    }
}
