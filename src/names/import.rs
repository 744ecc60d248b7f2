//! Copying a grid's names onto another object.

use std::collections::{BTreeMap, HashMap};

use crate::control::ControlId;
use crate::error::{GridError, Result};

use super::registry::NameRegistry;

/// Something that can receive named control handles as attributes.
pub trait AttributeTarget {
    /// Whether the target already owns an attribute called `name`.
    fn has_attribute(&self, name: &str) -> bool;

    /// Store `control` under `name`.
    fn set_attribute(&mut self, name: &str, control: ControlId);
}

impl AttributeTarget for HashMap<String, ControlId> {
    fn has_attribute(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn set_attribute(&mut self, name: &str, control: ControlId) {
        self.insert(name.to_owned(), control);
    }
}

impl AttributeTarget for BTreeMap<String, ControlId> {
    fn has_attribute(&self, name: &str) -> bool {
        self.contains_key(name)
    }

    fn set_attribute(&mut self, name: &str, control: ControlId) {
        self.insert(name.to_owned(), control);
    }
}

/// Add every identifier and alias of `registry` to `target`.
///
/// All names are checked before any is set: if one collides with an existing
/// attribute, the target is left untouched. Returns the number of names added.
pub fn import_into<T: AttributeTarget + ?Sized>(registry: &NameRegistry, target: &mut T) -> Result<usize> {
    let names = registry.all_names();
    if let Some(name) = names.keys().find(|name| target.has_attribute(name)) {
        return Err(GridError::DuplicateAttribute(name.to_string()));
    }
    for (name, &control) in &names {
        target.set_attribute(name, control);
    }
    tracing::debug!(target: "guigrid::names", count = names.len(), "imported names");
    Ok(names.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlSpec, Controls};

    fn registry() -> (Controls, NameRegistry, ControlId, ControlId) {
        let mut controls = Controls::new();
        let a = controls.insert(ControlSpec::label("A"));
        let b = controls.insert(ControlSpec::button("B"));
        let mut reg = NameRegistry::new();
        reg.register(a, "A");
        reg.register(b, "B");
        (controls, reg, a, b)
    }

    #[test]
    fn imports_identifiers_and_aliases() {
        let (_c, mut reg, a, b) = registry();
        reg.alias("first", "A").unwrap();
        let mut target = HashMap::new();
        assert_eq!(import_into(&reg, &mut target), Ok(3));
        assert_eq!(target["A"], a);
        assert_eq!(target["B"], b);
        assert_eq!(target["first"], a);
    }

    #[test]
    fn collision_imports_nothing() {
        let (_c, reg, a, _b) = registry();
        let mut target = BTreeMap::new();
        target.insert("B".to_owned(), a);
        assert_eq!(
            import_into(&reg, &mut target),
            Err(GridError::DuplicateAttribute("B".into()))
        );
        assert_eq!(target.len(), 1);
        assert!(!target.contains_key("A"));
    }

    #[test]
    fn alias_collision_is_detected() {
        let (_c, mut reg, a, _b) = registry();
        reg.alias("taken", "B").unwrap();
        let mut target = HashMap::new();
        target.insert("taken".to_owned(), a);
        assert_eq!(
            import_into(&reg, &mut target),
            Err(GridError::DuplicateAttribute("taken".into()))
        );
        assert_eq!(target.len(), 1);
    }
}
