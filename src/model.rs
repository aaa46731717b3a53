//! Data model for extracted function metadata — format-agnostic.

/// Default capacity of a [`FunctionSet`].
pub const DEFAULT_MAX_FUNCTIONS: usize = 512;

/// A single function definition found in a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// Raw text between the parentheses, trimmed. Not parsed.
    pub params: String,
    /// Comment lines immediately preceding the definition, space-joined.
    pub description: String,
    /// Source path as handed to the scanner.
    pub file: String,
    /// 1-based line number of the definition line.
    pub line: usize,
}

/// Ordered collection of functions with a fixed capacity.
///
/// Records keep insertion order, which is file-scan order and, within a
/// file, ascending line order. Pushing into a full set is refused rather
/// than reported as an error; callers stop scanning when [`is_full`] holds.
///
/// [`is_full`]: FunctionSet::is_full
#[derive(Debug)]
pub struct FunctionSet {
    functions: Vec<Function>,
    capacity: usize,
}

impl FunctionSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            functions: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.functions.len() >= self.capacity
    }

    /// Append a record. Returns `false` (and drops the record) when full.
    pub fn push(&mut self, function: Function) -> bool {
        if self.is_full() {
            return false;
        }
        self.functions.push(function);
        true
    }

    pub fn as_slice(&self) -> &[Function] {
        &self.functions
    }
}

impl Default for FunctionSet {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_FUNCTIONS)
    }
}

/// Split an ordered function list into runs of consecutive records that
/// share the same `file`. A file whose records are not contiguous shows up
/// as several runs.
pub fn file_groups(functions: &[Function]) -> impl Iterator<Item = &[Function]> {
    functions.chunk_by(|a, b| a.file == b.file)
}
