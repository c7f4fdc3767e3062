use alloc::string::String;
use alloc::vec::Vec;

use rp_utils::hash::{FixedHashState, HashMap};

use crate::definition::Definition;
use crate::error::DefinitionError;
use crate::options::Options;

// -----------------------------------------------------------------------------
// Definitions

/// The ordered property schema of a represented type.
///
/// Properties are kept in declaration order. Declaring a property again
/// replaces the previous definition in place, so subclass schemas built from
/// a cloned parent schema keep the parent's order.
///
/// # Examples
///
/// ```
/// use rp_property::{Definitions, Options};
///
/// let mut album = Definitions::new();
/// album.property("name", Options::new()).unwrap();
/// album.property("songs", Options::new().collection(true)).unwrap();
///
/// let mut live_album = album.clone();
/// live_album.property("name", Options::new().tag("title")).unwrap();
///
/// assert_eq!(live_album.names().collect::<Vec<_>>(), ["name", "songs"]);
/// assert_eq!(live_album.get("name").unwrap().wire_name(), "title");
/// assert_eq!(album.get("name").unwrap().wire_name(), "name");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    definitions: Vec<Definition>,
    indices: HashMap<String, usize>,
}

impl Definitions {
    /// Creates an empty schema.
    #[inline]
    pub const fn new() -> Self {
        Self {
            definitions: Vec::new(),
            indices: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Adds `definition`, replacing a definition of the same name.
    ///
    /// Returns the replaced definition, if any.
    pub fn push(&mut self, definition: Definition) -> Option<Definition> {
        if let Some(&index) = self.indices.get(definition.name()) {
            log::debug!("redefining property `{}`", definition.name());
            return Some(core::mem::replace(&mut self.definitions[index], definition));
        }
        self.indices
            .insert(String::from(definition.name()), self.definitions.len());
        self.definitions.push(definition);
        None
    }

    /// Declares a property and returns its definition for further tweaks.
    pub fn property(
        &mut self,
        name: impl Into<String>,
        options: Options,
    ) -> Result<&mut Definition, DefinitionError> {
        let definition = Definition::new(name, options)?;
        let index = match self.indices.get(definition.name()) {
            Some(&index) => index,
            None => self.definitions.len(),
        };
        self.push(definition);
        Ok(&mut self.definitions[index])
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.indices.get(name).map(|&index| &self.definitions[index])
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Definition> {
        self.indices
            .get(name)
            .map(|&index| &mut self.definitions[index])
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Removes the property `name`, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Definition> {
        let removed = self.indices.remove(name)?;
        for index in self.indices.values_mut() {
            if *index > removed {
                *index -= 1;
            }
        }
        Some(self.definitions.remove(removed))
    }

    /// Returns an iterator over the definitions in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Definition> {
        self.definitions.iter()
    }

    /// Returns an iterator over the property names in declaration order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.definitions.iter().map(Definition::name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Definitions {
    type Item = &'a Definition;
    type IntoIter = core::slice::Iter<'a, Definition>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Definition> for Definitions {
    fn extend<T: IntoIterator<Item = Definition>>(&mut self, iter: T) {
        for definition in iter {
            self.push(definition);
        }
    }
}

impl FromIterator<Definition> for Definitions {
    fn from_iter<T: IntoIterator<Item = Definition>>(iter: T) -> Self {
        let mut definitions = Self::new();
        definitions.extend(iter);
        definitions
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::Definitions;
    use crate::{Definition, DefinitionError, Options};

    fn album() -> Definitions {
        [
            Definition::named("name"),
            Definition::new("songs", Options::new().collection(true)).unwrap(),
            Definition::named("label"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn keeps_declaration_order() {
        let mut definitions = album();
        let previous = definitions.push(Definition::new("name", Options::new().tag("title")).unwrap());

        assert_eq!(previous.unwrap().wire_name(), "name");
        assert_eq!(definitions.names().collect::<Vec<_>>(), ["name", "songs", "label"]);
        assert_eq!(definitions.get("name").unwrap().wire_name(), "title");
        assert_eq!(definitions.len(), 3);
    }

    #[test]
    fn remove_reindexes() {
        let mut definitions = album();
        assert!(definitions.remove("name").is_some());
        assert!(definitions.remove("name").is_none());

        assert!(!definitions.contains("name"));
        assert!(definitions.get("songs").unwrap().is_array());
        assert_eq!(definitions.get("label").unwrap().name(), "label");
        assert_eq!(
            (&definitions).into_iter().map(Definition::name).collect::<Vec<_>>(),
            ["songs", "label"]
        );
    }

    #[test]
    fn property_returns_stored_definition() {
        let mut definitions = Definitions::new();
        definitions
            .property("songs", Options::new())
            .unwrap()
            .options_mut()
            .insert("volume", 9);
        definitions.property("name", Options::new()).unwrap();
        let songs = definitions.property("songs", Options::new().collection(true)).unwrap();
        assert!(songs.is_array());
        assert!(!songs.options().contains_key("volume"));

        assert_eq!(definitions.names().collect::<Vec<_>>(), ["songs", "name"]);
    }

    #[test]
    fn invalid_property_is_not_stored() {
        let mut definitions = album();
        let err = definitions
            .property("label", Options::new().collection(true).hash(true))
            .unwrap_err();
        assert!(matches!(err, DefinitionError::ConflictingShape { .. }));
        assert!(!definitions.get("label").unwrap().is_array());
    }

    #[test]
    fn clones_are_independent() {
        let parent = album();
        let mut child = parent.clone();
        child
            .get_mut("label")
            .unwrap()
            .merge(Options::new().render_nil(true))
            .unwrap();

        assert!(child.get("label").unwrap().renders_nil());
        assert!(!parent.get("label").unwrap().renders_nil());
        assert!(!parent.is_empty());
    }
}
