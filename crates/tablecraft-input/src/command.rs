//! Top-level session commands.

/// One command entered at the page prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `q`: leave the session.
    Quit,
    /// `n`: next page.
    Next,
    /// `p`: previous page.
    Previous,
    /// A positive page number.
    Page(usize),
    /// `e`: edit a row.
    Edit,
    /// `a`: add a row.
    Add,
    /// `d`: delete a row.
    Delete,
    /// `s`: sort by a column.
    Sort,
    /// `x`: export to a file.
    Export,
    /// Anything else; ignored by the session.
    Unknown(String),
}

impl Command {
    /// Parses one line of input. Surrounding whitespace and letter case are
    /// ignored.
    pub fn parse(input: &str) -> Command {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "q" => Command::Quit,
            "n" => Command::Next,
            "p" => Command::Previous,
            "e" => Command::Edit,
            "a" => Command::Add,
            "d" => Command::Delete,
            "s" => Command::Sort,
            "x" => Command::Export,
            _ => match input.parse::<usize>() {
                Ok(page) if page > 0 => Command::Page(page),
                _ => Command::Unknown(input.to_string()),
            },
        }
    }
}
