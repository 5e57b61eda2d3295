/// Indentation used by pretty serialization.
///
/// # Examples
/// ```
/// use rjson::Indent;
///
/// let indent = Indent::Spaces(4);
/// assert_eq!(indent.get_spaces(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    pub fn get_spaces(&self) -> usize {
        match self {
            Indent::Spaces(count) => *count,
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

/// What to do when an object in the input repeats a key.
///
/// Members are unique within an object either way; the default keeps the
/// first occurrence, matching first-match lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    #[default]
    KeepFirst,
    KeepLast,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub duplicate_keys: DuplicateKeys,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_keys(mut self, duplicate_keys: DuplicateKeys) -> Self {
        self.duplicate_keys = duplicate_keys;
        self
    }
}

/// Output settings. The default is compact JSON with no whitespace.
///
/// # Examples
/// ```
/// use rjson::{Indent, SerializeOptions};
///
/// let opts = SerializeOptions::new().with_indent(Indent::Spaces(2));
/// assert!(opts.indent.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    pub indent: Option<Indent>,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self::new().with_indent(Indent::default())
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }
}
