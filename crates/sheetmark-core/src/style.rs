//! Resolved cell style descriptors
//!
//! Only the formatting that survives into the Markdown output is kept:
//! vertical alignment of the font (superscript/subscript) and the
//! alignment indent level.

/// The rendering-relevant part of one `cellXfs` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleDescriptor {
    pub indent_level: u32,
    pub superscript: bool,
    pub subscript: bool,
}

impl StyleDescriptor {
    /// The default style: no indent, no vertical alignment
    pub const DEFAULT: StyleDescriptor = StyleDescriptor {
        indent_level: 0,
        superscript: false,
        subscript: false,
    };

    /// Check if this descriptor changes anything compared to [`Self::DEFAULT`]
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

/// Style index to descriptor lookup
///
/// Style indices are positions in the workbook's `cellXfs` list. Position 0
/// always exists and holds [`StyleDescriptor::DEFAULT`] when the workbook
/// does not define it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: Vec<StyleDescriptor>,
}

impl StyleTable {
    /// Build a table from descriptors in `cellXfs` order
    pub fn new(styles: Vec<StyleDescriptor>) -> Self {
        if styles.is_empty() {
            return Self::default();
        }
        Self { styles }
    }

    /// Look up a style, falling back to the default for unknown indices
    pub fn lookup(&self, index: u32) -> StyleDescriptor {
        match self.styles.get(index as usize) {
            Some(style) => *style,
            None => {
                log::debug!("Style index {} not defined, using default style", index);
                StyleDescriptor::DEFAULT
            }
        }
    }

    /// Number of defined styles (always at least 1)
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Always false: the default style is guaranteed to exist
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            styles: vec![StyleDescriptor::DEFAULT],
        }
    }
}
