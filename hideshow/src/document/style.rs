//! Inline style strings and a minimal author stylesheet.

use crate::element::Element;

/// Parse `prop: value; prop: value` into ordered pairs. Property names are lowercased.
pub fn parse_declarations(declarations: &str) -> Vec<(String, String)> {
    declarations
        .split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim();
            (!property.is_empty() && !value.is_empty())
                .then(|| (property, value.to_string()))
        })
        .collect()
}

fn serialize(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last value of `property` in an inline style string.
pub fn get_property(declarations: &str, property: &str) -> Option<String> {
    parse_declarations(declarations)
        .into_iter()
        .rev()
        .find(|(name, _)| name == property)
        .map(|(_, value)| value)
}

/// Set `property` in an inline style string, keeping other declarations.
pub fn set_property(declarations: Option<&str>, property: &str, value: &str) -> String {
    let mut parsed = declarations.map(parse_declarations).unwrap_or_default();
    parsed.retain(|(name, _)| name != property);
    parsed.push((property.to_string(), value.to_string()));
    serialize(&parsed)
}

/// A simple selector: `tag`, `.class` or `#id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Selector {
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        if let Some(class) = selector.strip_prefix('.') {
            Self::Class(class.to_string())
        } else if let Some(id) = selector.strip_prefix('#') {
            Self::Id(id.to_string())
        } else {
            Self::Tag(selector.to_ascii_lowercase())
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Tag(tag) => element.tag == *tag,
            Self::Class(class) => element.has_class(class),
            Self::Id(id) => element.id == *id,
        }
    }

    fn specificity(&self) -> u8 {
        match self {
            Self::Tag(_) => 1,
            Self::Class(_) => 2,
            Self::Id(_) => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: Selector,
    pub declarations: Vec<(String, String)>,
}

/// Author rules, cascaded by specificity then source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, e.g. `.rule(".is-hidden", "display: none")`.
    pub fn rule(mut self, selector: &str, declarations: &str) -> Self {
        self.rules.push(Rule {
            selector: Selector::parse(selector),
            declarations: parse_declarations(declarations),
        });
        self
    }

    /// Winning value of `property` for `element`, if any rule sets it.
    pub fn resolve(&self, element: &Element, property: &str) -> Option<String> {
        self.rules
            .iter()
            .filter(|rule| rule.selector.matches(element))
            .filter_map(|rule| {
                let value = rule
                    .declarations
                    .iter()
                    .rev()
                    .find(|(name, _)| name == property)?;
                Some((rule.selector.specificity(), value.1.clone()))
            })
            // max_by_key keeps the last of equal keys, so later rules win ties.
            .max_by_key(|(specificity, _)| *specificity)
            .map(|(_, value)| value)
    }
}
