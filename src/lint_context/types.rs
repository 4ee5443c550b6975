use serde::Serialize;

/// The mutually exclusive scan mode a line falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineMode {
    /// Leading `---` metadata block, delimiters included
    FrontMatter,
    /// Fenced code block, delimiters included
    CodeFence,
    /// `$$` display math block, delimiters included
    MathBlock,
    /// Everything else; the only mode rules run in
    Normal,
}

/// What a line is, resolved once per line in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineRole {
    Blank,
    FrontMatterDelimiter,
    FenceOpen,
    FenceClose,
    MathDelimiter,
    AdmonitionHeader,
    TabHeader,
    Heading,
    HorizontalRule,
    Blockquote,
    TableSeparator,
    TableRow,
    ListItem,
    Plain,
}

/// Pre-computed information about one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    pub mode: LineMode,
    pub role: LineRole,
    /// Leading whitespace width (spaces 1, tabs 4)
    pub indent: usize,
    pub is_blank: bool,
    /// Properly spaced list marker (never an abbreviation or snippet line)
    pub is_list: bool,
    /// Participates in a pipe table, judged on the raw text and its neighbors
    pub is_table: bool,
}

impl LineInfo {
    #[inline]
    pub fn is_normal(&self) -> bool {
        self.mode == LineMode::Normal
    }
}
