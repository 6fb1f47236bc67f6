//! fOS CSS Style System
//!
//! Computed-style resolution for the fOS DOM: programmatic stylesheets,
//! a cascade over user-agent, author and inline declarations, inheritance
//! and initial values. CSS source text is not parsed here; rules are built
//! from selector strings and declaration pairs.

mod cascade;
pub mod properties;

pub use cascade::StyleResolver;
pub use properties::{Keyword, PropertyId};

use fos_dom::{DomTree, ElementData, NodeId, property_name};

/// Platform accessor for computed style values
///
/// `property` may be hyphenated or camel-case. Properties the source knows
/// nothing about resolve to an empty string, like `getPropertyValue`.
pub trait ComputedStyleSource {
    fn computed_value(&self, tree: &DomTree, node: NodeId, property: &str) -> String;
}

/// Stylesheet (ordered rules)
#[derive(Debug, Default, Clone)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule
    pub fn push(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Parse a selector list and append a rule built from `declarations`
    pub fn add_rule<I, P, V>(&mut self, selectors: &str, declarations: I) -> Result<&mut Self, CssError>
    where
        I: IntoIterator<Item = (P, V)>,
        P: AsRef<str>,
        V: AsRef<str>,
    {
        let declarations = declarations
            .into_iter()
            .map(|(p, v)| Declaration::new(p.as_ref(), v.as_ref()))
            .collect();
        self.rules.push(Rule::new(selectors, declarations)?);
        Ok(self)
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// CSS rule (selector list + declarations)
#[derive(Debug, Clone)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Build a rule from a comma-separated selector list
    pub fn new(selectors: &str, declarations: Vec<Declaration>) -> Result<Self, CssError> {
        let selectors = selectors
            .split(',')
            .map(Selector::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { selectors, declarations })
    }
}

/// Compound selector (`div.card#main`)
#[derive(Debug, Clone)]
pub struct Selector {
    /// Original selector text
    pub text: String,
    /// Specificity (id, class, type)
    pub specificity: Specificity,
    /// Parsed selector parts
    pub parts: Vec<SelectorPart>,
}

/// Part of a compound selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorPart {
    /// Type selector (div, span, etc)
    Type(String),
    /// Class selector (.class)
    Class(String),
    /// ID selector (#id)
    Id(String),
    /// Universal selector (*)
    Universal,
}

impl Selector {
    /// Parse a compound selector
    ///
    /// Only type, universal, class and id parts are understood. Combinators,
    /// attributes and pseudo-classes are rejected rather than half-matched.
    pub fn parse(text: &str) -> Result<Self, CssError> {
        let text = text.trim();
        let invalid = || CssError::InvalidSelector(text.to_string());
        if text.is_empty() {
            return Err(invalid());
        }

        let mut parts = Vec::new();
        let mut specificity = Specificity::default();
        let mut rest = text;

        if let Some(tail) = rest.strip_prefix('*') {
            parts.push(SelectorPart::Universal);
            rest = tail;
        } else {
            let end = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
            if end > 0 {
                parts.push(SelectorPart::Type(rest[..end].to_ascii_lowercase()));
                specificity.add(Specificity::new(0, 0, 1));
                rest = &rest[end..];
            }
        }

        while let Some(marker) = rest.chars().next() {
            let tail = &rest[marker.len_utf8()..];
            let end = tail.find(|c: char| !is_ident_char(c)).unwrap_or(tail.len());
            if end == 0 {
                return Err(invalid());
            }
            let name = tail[..end].to_string();
            match marker {
                '.' => {
                    parts.push(SelectorPart::Class(name));
                    specificity.add(Specificity::new(0, 1, 0));
                }
                '#' => {
                    parts.push(SelectorPart::Id(name));
                    specificity.add(Specificity::new(1, 0, 0));
                }
                _ => return Err(invalid()),
            }
            rest = &tail[end..];
        }

        Ok(Self {
            text: text.to_string(),
            specificity,
            parts,
        })
    }

    /// Check if the selector matches an element
    pub fn matches(&self, elem: &ElementData) -> bool {
        self.parts.iter().all(|part| match part {
            SelectorPart::Type(tag) => elem.tag_name.eq_ignore_ascii_case(tag),
            SelectorPart::Class(class) => elem.class_list().contains(class),
            SelectorPart::Id(id) => elem.id.as_deref() == Some(id.as_str()),
            SelectorPart::Universal => true,
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// Selector specificity (a, b, c) where:
/// a = ID selectors
/// b = class selectors
/// c = type selectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    pub fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self(ids, classes, types)
    }

    /// Add another specificity to this one
    pub fn add(&mut self, other: Specificity) {
        self.0 += other.0;
        self.1 += other.1;
        self.2 += other.2;
    }
}

/// CSS declaration (property: value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Hyphenated property name
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: property_name(property),
            value: value.trim().to_string(),
            important: false,
        }
    }

    /// `property: value !important`
    pub fn important(property: &str, value: &str) -> Self {
        Self {
            important: true,
            ..Self::new(property, value)
        }
    }
}

/// CSS error
#[derive(Debug, thiserror::Error)]
pub enum CssError {
    #[error("Invalid selector: {0:?}")]
    InvalidSelector(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parse() {
        let sel = Selector::parse("div.card.wide#main").unwrap();
        assert_eq!(
            sel.parts,
            vec![
                SelectorPart::Type("div".to_string()),
                SelectorPart::Class("card".to_string()),
                SelectorPart::Class("wide".to_string()),
                SelectorPart::Id("main".to_string()),
            ]
        );
        assert_eq!(sel.specificity, Specificity(1, 2, 1));

        let sel = Selector::parse("*").unwrap();
        assert_eq!(sel.parts, vec![SelectorPart::Universal]);
        assert_eq!(sel.specificity, Specificity::default());
    }

    #[test]
    fn test_selector_rejects_unsupported() {
        for text in ["", "  ", "div > p", "a:hover", "input[type]", ".", "div..x", "#"] {
            assert!(Selector::parse(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_selector_matches() {
        let mut elem = ElementData::new("div");
        elem.class_name = "card active".to_string();
        elem.id = Some("main".to_string());

        assert!(Selector::parse("div").unwrap().matches(&elem));
        assert!(Selector::parse(".card.active").unwrap().matches(&elem));
        assert!(Selector::parse("#main").unwrap().matches(&elem));
        assert!(!Selector::parse(".car").unwrap().matches(&elem));
        assert!(!Selector::parse("span.card").unwrap().matches(&elem));
    }

    #[test]
    fn test_rule_selector_list() {
        let rule = Rule::new("h1, h2 ,.title", vec![Declaration::new("fontWeight", "700")]).unwrap();
        assert_eq!(rule.selectors.len(), 3);
        assert_eq!(rule.declarations[0].property, "font-weight");
        assert!(Rule::new("h1,", Vec::new()).is_err());
    }

    #[test]
    fn test_stylesheet_builder() {
        let mut sheet = Stylesheet::new();
        sheet
            .add_rule(".a", [("color", "red")])
            .unwrap()
            .add_rule(".b", [("color", "blue"), ("width", "10px")])
            .unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rules[1].declarations.len(), 2);
    }
}
