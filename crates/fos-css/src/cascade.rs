//! Style Cascade & Resolver
//!
//! Computes a property value for a DOM element by:
//! 1. Matching selectors against the element
//! 2. Ranking declarations by cascade level, specificity and source order
//! 3. Resolving CSS-wide keywords, inheritance and initial values

use crate::properties::{Keyword, PropertyId};
use crate::{ComputedStyleSource, Declaration, Rule, Specificity, Stylesheet};
use fos_dom::{DomTree, ElementData, NodeId, property_name};

/// Cascade level, lowest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CascadeLevel {
    UserAgent,
    Author,
    Inline,
    AuthorImportant,
}

/// Style resolver - computes styles for DOM elements
#[derive(Debug, Clone)]
pub struct StyleResolver {
    /// User agent stylesheet (browser defaults)
    ua_styles: Stylesheet,
    /// Author stylesheets (page CSS)
    author_styles: Vec<Stylesheet>,
}

impl StyleResolver {
    /// Resolver with the default user-agent stylesheet
    pub fn new() -> Self {
        Self {
            ua_styles: Self::default_ua_styles(),
            author_styles: Vec::new(),
        }
    }

    /// Resolver without any user-agent rules
    pub fn without_ua_styles() -> Self {
        Self {
            ua_styles: Stylesheet::new(),
            author_styles: Vec::new(),
        }
    }

    /// Add an author stylesheet
    pub fn add_stylesheet(&mut self, stylesheet: Stylesheet) {
        self.author_styles.push(stylesheet);
    }

    /// Number of author stylesheets
    pub fn stylesheet_count(&self) -> usize {
        self.author_styles.len()
    }

    /// Winning declared value for an element, before inheritance
    pub fn cascaded_value(&self, elem: &ElementData, property: &str) -> Option<String> {
        let name = property_name(property);
        let mut best: Option<((CascadeLevel, Specificity, usize), &str)> = None;
        let mut order = 0_usize;

        let sheets = std::iter::once((CascadeLevel::UserAgent, &self.ua_styles))
            .chain(self.author_styles.iter().map(|s| (CascadeLevel::Author, s)));

        for (level, sheet) in sheets {
            for rule in &sheet.rules {
                let Some(specificity) = matching_specificity(rule, elem) else {
                    order += 1;
                    continue;
                };
                for decl in rule.declarations.iter().filter(|d| d.property == name) {
                    let level = if decl.important && level == CascadeLevel::Author {
                        CascadeLevel::AuthorImportant
                    } else {
                        level
                    };
                    let key = (level, specificity, order);
                    if best.as_ref().is_none_or(|(k, _)| key >= *k) {
                        best = Some((key, decl.value.as_str()));
                    }
                }
                order += 1;
            }
        }

        if let Some(inline) = elem.style.get(&name) {
            let key = (CascadeLevel::Inline, Specificity::default(), order);
            if best.as_ref().is_none_or(|(k, _)| key >= *k) {
                best = Some((key, inline));
            }
        }

        best.map(|(_, value)| value.to_string())
    }

    fn resolve(&self, tree: &DomTree, node: NodeId, name: &str, id: Option<PropertyId>) -> Option<String> {
        let inherits = id.map_or(name.starts_with("--"), PropertyId::inherited);
        let mut node = node;

        // Walk up while the value is inherited
        loop {
            let elem = tree.element(node)?;
            let inherit = match self.cascaded_value(elem, name) {
                Some(value) => match Keyword::parse(&value) {
                    None => return Some(value),
                    Some(Keyword::Inherit) => true,
                    Some(Keyword::Initial) => false,
                    Some(Keyword::Unset) => inherits,
                },
                None => inherits,
            };
            if !inherit {
                return initial(id);
            }
            match tree.parent_element(node) {
                Some(parent) => node = parent,
                None => return initial(id),
            }
        }
    }

    /// Default user-agent styles
    fn default_ua_styles() -> Stylesheet {
        let rules: [(&str, &[(&str, &str)]); 8] = [
            (
                "html, body, div, p, section, article, header, footer, nav, main, aside, form, ul, ol, h1, h2, h3, h4, h5, h6",
                &[("display", "block")],
            ),
            ("li", &[("display", "list-item")]),
            ("head, script, style, title, meta, link", &[("display", "none")]),
            (
                "body",
                &[
                    ("margin-top", "8px"),
                    ("margin-right", "8px"),
                    ("margin-bottom", "8px"),
                    ("margin-left", "8px"),
                ],
            ),
            ("h1", &[("font-size", "32px"), ("font-weight", "700")]),
            ("h2", &[("font-size", "24px"), ("font-weight", "700")]),
            ("b, strong", &[("font-weight", "700")]),
            ("em, i", &[("font-style", "italic")]),
        ];

        let mut sheet = Stylesheet::new();
        for (selectors, declarations) in rules {
            let declarations = declarations
                .iter()
                .map(|(p, v)| Declaration::new(p, v))
                .collect();
            match Rule::new(selectors, declarations) {
                Ok(rule) => {
                    sheet.push(rule);
                }
                Err(err) => tracing::warn!("Skipping UA rule: {}", err),
            }
        }
        sheet
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputedStyleSource for StyleResolver {
    fn computed_value(&self, tree: &DomTree, node: NodeId, property: &str) -> String {
        let name = property_name(property);
        let id = PropertyId::from_name(&name);
        match self.resolve(tree, node, &name, id) {
            Some(value) => value,
            None => {
                tracing::debug!("No computed value for {} on {:?}", name, node);
                String::new()
            }
        }
    }
}

fn matching_specificity(rule: &Rule, elem: &ElementData) -> Option<Specificity> {
    rule.selectors
        .iter()
        .filter(|s| s.matches(elem))
        .map(|s| s.specificity)
        .max()
}

fn initial(id: Option<PropertyId>) -> Option<String> {
    id.map(|p| p.initial_value().to_string())
}
