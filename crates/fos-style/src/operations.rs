//! Chainable style and class operations
//!
//! Bulk helpers over an element collection: inline style writes, computed
//! style reads and class-name manipulation. Every operation visits elements
//! in collection order and, apart from the value-returning reads, hands the
//! collection back for chaining.

use crate::{ClassNameRegexCache, StyleError};
use fos_css::ComputedStyleSource;
use fos_dom::{ElementCollection, ElementData, NodeId};

/// Style capability set for element collections
pub trait StyleOperations {
    /// Set an inline style property on every element
    ///
    /// Property names may be camel-case or hyphenated. Values are not
    /// validated; an empty value removes the declaration.
    fn set_style(&mut self, property: &str, value: &str) -> &mut Self;

    /// Computed value of `property` for the first element only
    fn get_style(&self, property: &str) -> Result<String, StyleError>;

    /// Call `f` with each element's computed value of `property`, in order
    fn each_style<F>(&mut self, property: &str, f: F) -> &mut Self
    where
        F: FnMut(&str);

    /// Append `class_name` to every element that lacks it
    fn add_class(&mut self, class_name: &str) -> Result<&mut Self, StyleError>;

    /// Membership test for a single-element collection
    fn has_class(&self, class_name: &str) -> Result<bool, StyleError>;

    /// Call `f` for each element that carries `class_name`, in order
    fn each_with_class<F>(&mut self, class_name: &str, f: F) -> Result<&mut Self, StyleError>
    where
        F: FnMut(NodeId, &ElementData);

    /// Remove one class token, or every class when `class_name` is `None`
    fn remove_class(&mut self, class_name: Option<&str>) -> Result<&mut Self, StyleError>;

    /// Apply `set_style` for each property/value pair
    fn css<I, K, V>(&mut self, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>;
}

/// An element collection with the style capability attached
///
/// Created by [`StyleMixin::attach`](crate::StyleMixin::attach).
pub struct Styled<'a> {
    elements: ElementCollection<'a>,
    computed: &'a dyn ComputedStyleSource,
    class_names: &'a ClassNameRegexCache,
}

impl<'a> Styled<'a> {
    pub(crate) fn new(
        elements: ElementCollection<'a>,
        computed: &'a dyn ComputedStyleSource,
        class_names: &'a ClassNameRegexCache,
    ) -> Self {
        Self {
            elements,
            computed,
            class_names,
        }
    }

    /// The wrapped collection
    pub fn elements(&self) -> &ElementCollection<'a> {
        &self.elements
    }

    /// The wrapped collection, mutably
    pub fn elements_mut(&mut self) -> &mut ElementCollection<'a> {
        &mut self.elements
    }

    /// Detach the capability and return the collection
    pub fn into_inner(self) -> ElementCollection<'a> {
        self.elements
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl std::fmt::Debug for Styled<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Styled")
            .field("elements", &self.elements.ids())
            .field("class_names", &self.class_names.len())
            .finish()
    }
}

impl StyleOperations for Styled<'_> {
    fn set_style(&mut self, property: &str, value: &str) -> &mut Self {
        tracing::trace!("set_style {}={:?} on {} elements", property, value, self.elements.len());
        self.elements.each(|_, elem| elem.style.set(property, value));
        self
    }

    fn get_style(&self, property: &str) -> Result<String, StyleError> {
        let first = self.elements.first().ok_or_else(|| StyleError::EmptyCollection {
            property: property.to_string(),
        })?;
        Ok(self.computed.computed_value(self.elements.tree(), first, property))
    }

    fn each_style<F>(&mut self, property: &str, mut f: F) -> &mut Self
    where
        F: FnMut(&str),
    {
        tracing::trace!("each_style {} on {} elements", property, self.elements.len());
        for &id in self.elements.ids() {
            let value = self.computed.computed_value(self.elements.tree(), id, property);
            f(&value);
        }
        self
    }

    fn add_class(&mut self, class_name: &str) -> Result<&mut Self, StyleError> {
        let pattern = self.class_names.get(class_name)?;
        let mut added = 0_usize;

        self.elements.each(|_, elem| {
            if pattern.is_match(&elem.class_name) {
                return;
            }
            let joined = format!("{} {}", elem.class_name, class_name);
            elem.class_name = trim_class_name(&joined).to_string();
            added += 1;
        });

        tracing::trace!("add_class {:?}: added to {} of {}", class_name, added, self.elements.len());
        Ok(self)
    }

    fn has_class(&self, class_name: &str) -> Result<bool, StyleError> {
        if self.elements.len() != 1 {
            return Err(StyleError::NotSingleton {
                len: self.elements.len(),
            });
        }
        let pattern = self.class_names.get(class_name)?;
        Ok(self
            .elements
            .element(0)
            .is_some_and(|elem| pattern.is_match(&elem.class_name)))
    }

    fn each_with_class<F>(&mut self, class_name: &str, mut f: F) -> Result<&mut Self, StyleError>
    where
        F: FnMut(NodeId, &ElementData),
    {
        let pattern = self.class_names.get(class_name)?;
        for (id, elem) in self.elements.iter() {
            if pattern.is_match(&elem.class_name) {
                f(id, elem);
            }
        }
        Ok(self)
    }

    fn remove_class(&mut self, class_name: Option<&str>) -> Result<&mut Self, StyleError> {
        let Some(class_name) = class_name else {
            tracing::trace!("remove_class: clearing {} elements", self.elements.len());
            self.elements.each(|_, elem| elem.class_name.clear());
            return Ok(self);
        };

        let pattern = self.class_names.get(class_name)?;
        self.elements.each(|_, elem| {
            // Only the first occurrence is replaced; the leftover spacing is kept.
            let replaced = pattern.replace(&elem.class_name, " ").into_owned();
            elem.class_name = replaced;
        });
        tracing::trace!("remove_class {:?} on {} elements", class_name, self.elements.len());
        Ok(self)
    }

    fn css<I, K, V>(&mut self, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (property, value) in properties {
            self.set_style(property.as_ref(), value.as_ref());
        }
        self
    }
}

/// Trim surrounding whitespace, including no-break spaces
fn trim_class_name(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{a0}' || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_class_name() {
        assert_eq!(trim_class_name("  a b "), "a b");
        assert_eq!(trim_class_name("\u{a0}a\u{a0}"), "a");
        assert_eq!(trim_class_name("\u{feff} a"), "a");
        assert_eq!(trim_class_name(" "), "");
    }
}
