//! Rich text: styled runs from shared strings and inline strings

/// A contiguous piece of text sharing one set of inline style flags
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledRun {
    pub text: String,
    pub superscript: bool,
    pub subscript: bool,
}

impl StyledRun {
    /// Create an unstyled run
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a run with explicit flags
    pub fn styled<S: Into<String>>(text: S, superscript: bool, subscript: bool) -> Self {
        Self {
            text: text.into(),
            superscript,
            subscript,
        }
    }
}

/// One shared-string entry or inline string: an ordered list of runs
///
/// Built once by the parsers and never mutated afterwards. The plain text of
/// the entry is the concatenation of its run texts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    runs: Vec<StyledRun>,
}

impl RichText {
    /// Create rich text from its runs
    pub fn new(runs: Vec<StyledRun>) -> Self {
        Self { runs }
    }

    /// Create rich text holding a single unstyled run
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new(vec![StyledRun::plain(text)])
    }

    /// The runs in source order
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// True when no run carries any text
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        Self::plain(s)
    }
}

impl From<String> for RichText {
    fn from(s: String) -> Self {
        Self::plain(s)
    }
}
