//! Inline Style Declarations
//!
//! The element's `style` map (CSSStyleDeclaration). Values are opaque
//! strings; nothing here validates property names or values.

/// Inline style declarations in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Get a declared value. Accepts camel-case or hyphenated names.
    pub fn get(&self, property: &str) -> Option<&str> {
        let name = property_name(property);
        self.declarations
            .iter()
            .find(|(p, _)| *p == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a declaration
    ///
    /// An empty value removes the declaration. Re-setting a property keeps
    /// its original position.
    pub fn set(&mut self, property: &str, value: &str) {
        let name = property_name(property);
        if name.is_empty() {
            return;
        }

        let value = value.trim();
        if value.is_empty() {
            self.declarations.retain(|(p, _)| *p != name);
            return;
        }

        match self.declarations.iter_mut().find(|(p, _)| *p == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.declarations.push((name, value.to_string())),
        }
    }

    /// Remove a declaration, returning its old value
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let name = property_name(property);
        let index = self.declarations.iter().position(|(p, _)| *p == name)?;
        Some(self.declarations.remove(index).1)
    }

    /// Serialize as `prop: value; prop: value;`
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace all declarations from a `prop: value; ...` list
    ///
    /// Splits on `;` only, so values containing semicolons inside `url()`
    /// or strings are not supported.
    pub fn set_css_text(&mut self, text: &str) {
        self.declarations.clear();
        for declaration in text.split(';') {
            if let Some((property, value)) = declaration.split_once(':') {
                self.set(property.trim(), value);
            }
        }
    }

    /// Iterate over `(property, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

/// Normalize a property name to its hyphenated form
///
/// `backgroundColor` becomes `background-color`, `WebkitTransform` becomes
/// `-webkit-transform` and `cssFloat` becomes `float`. Custom properties
/// (`--name`) are case-sensitive and returned unchanged.
pub fn property_name(property: &str) -> String {
    let property = property.trim();
    if property.starts_with("--") {
        return property.to_string();
    }
    if property == "cssFloat" {
        return "float".to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("color"), "color");
        assert_eq!(property_name("backgroundColor"), "background-color");
        assert_eq!(property_name("border-top-width"), "border-top-width");
        assert_eq!(property_name("WebkitTransform"), "-webkit-transform");
        assert_eq!(property_name("cssFloat"), "float");
        assert_eq!(property_name("--mainColor"), "--mainColor");
    }

    #[test]
    fn test_set_get() {
        let mut style = InlineStyle::new();
        style.set("backgroundColor", "red");
        assert_eq!(style.get("background-color"), Some("red"));
        assert_eq!(style.get("backgroundColor"), Some("red"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut style = InlineStyle::new();
        style.set("color", "red");
        style.set("width", "10px");
        style.set("color", "blue");
        assert_eq!(style.css_text(), "color: blue; width: 10px;");
    }

    #[test]
    fn test_empty_value_removes() {
        let mut style = InlineStyle::new();
        style.set("color", "red");
        style.set("color", "");
        assert!(style.is_empty());
        assert_eq!(style.get("color"), None);
    }

    #[test]
    fn test_css_text() {
        let mut style = InlineStyle::new();
        style.set_css_text(" color : red ; border: 1px solid blue;; junk ");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("border"), Some("1px solid blue"));
        assert_eq!(style.remove("color").as_deref(), Some("red"));
        assert_eq!(style.css_text(), "border: 1px solid blue;");
    }
}
