use crate::constants::OPC_UA_NAMESPACE_URI;

/// The ordered list of namespace uris known to a server.
///
/// A namespace index is a position in this table. Index 0 is always the OPC UA namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceTable {
    uris: Vec<String>,
}

impl NamespaceTable {
    pub fn new() -> Self {
        Self {
            uris: vec![OPC_UA_NAMESPACE_URI.to_owned()],
        }
    }

    /// Appends a uri and returns its index.
    ///
    /// Returns `None` if the table already holds `u16::MAX + 1` entries.
    pub fn push<S: Into<String>>(&mut self, uri: S) -> Option<u16> {
        let index = u16::try_from(self.uris.len()).ok()?;
        self.uris.push(uri.into());
        Some(index)
    }

    /// Returns the index of `uri`, appending it if it is not present.
    pub fn get_or_insert(&mut self, uri: &str) -> Option<u16> {
        match self.index_of(uri) {
            Some(index) => Some(index),
            None => self.push(uri),
        }
    }

    pub fn uri(&self, index: u16) -> Option<&str> {
        self.uris.get(index as usize).map(String::as_str)
    }

    pub fn index_of(&self, uri: &str) -> Option<u16> {
        let position = self.uris.iter().position(|x| x == uri)?;
        u16::try_from(position).ok()
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<S> for NamespaceTable {
    /// Builds a table from the uris following the OPC UA namespace
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut table = Self::new();
        for uri in iter {
            table.push(uri);
        }
        table
    }
}
