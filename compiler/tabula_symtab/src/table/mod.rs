//! Per-scope symbol tables.

use std::fmt;

use rustc_hash::FxHashMap;
use tabula_ir::Span;

use crate::TypeDesc;

/// One declared name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub ty: TypeDesc,
    /// Byte offset within the enclosing scope.
    pub offset: u32,
    /// Where the name was declared.
    pub span: Span,
}

/// Names declared in one scope, in declaration order.
///
/// Names are unique per table. The total width is set once, when the
/// owning scope closes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: FxHashMap<String, usize>,
    width: Option<u32>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `entry`, handing it back if its name is already taken.
    pub fn enter(&mut self, entry: SymbolEntry) -> Result<(), SymbolEntry> {
        if self.index.contains_key(&entry.name) {
            return Err(entry);
        }
        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.index.get(name).and_then(|&i| self.entries.get(i))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total width, once the scope has closed.
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Record the total width. Later calls keep the first value.
    pub(crate) fn finalize(&mut self, width: u32) {
        self.width.get_or_insert(width);
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<String> = self.entries.iter().map(|e| e.ty.to_string()).collect();
        let name_w = self
            .entries
            .iter()
            .map(|e| e.name.len())
            .chain(std::iter::once("name".len()))
            .max()
            .unwrap_or(0);
        let type_w = types
            .iter()
            .map(|t| t.len())
            .chain(std::iter::once("type".len()))
            .max()
            .unwrap_or(0);

        writeln!(f, "{:name_w$}  {:type_w$}  offset", "name", "type")?;
        for (entry, ty) in self.entries.iter().zip(&types) {
            writeln!(f, "{:name_w$}  {ty:type_w$}  {}", entry.name, entry.offset)?;
        }
        match self.width {
            Some(width) => writeln!(f, "width {width}"),
            None => writeln!(f, "width (open)"),
        }
    }
}
