//! Predicate-based element search over a parsed document.
//!
//! Dictionary markup varies class suffixes between pages (`entry-body__el`,
//! `pr dsense dsense-noh`, ...), so queries match attribute values by
//! pattern rather than through CSS selectors.

use regex::Regex;
use scraper::ElementRef;

#[derive(Debug, Clone)]
pub enum AttrPattern {
    Exact(String),
    /// Regex searched anywhere in the value
    Matches(Regex),
}

impl AttrPattern {
    /// `class` is checked per token and against the whole
    /// whitespace-normalized value; other attributes as written.
    fn is_match(&self, name: &str, value: &str) -> bool {
        if name != "class" {
            return match self {
                AttrPattern::Exact(expected) => value == expected,
                AttrPattern::Matches(re) => re.is_match(value),
            };
        }

        let joined = value.split_whitespace().collect::<Vec<_>>().join(" ");
        match self {
            AttrPattern::Exact(expected) => {
                value.split_whitespace().any(|t| t == expected) || joined == *expected
            }
            AttrPattern::Matches(re) => {
                value.split_whitespace().any(|t| re.is_match(t)) || re.is_match(&joined)
            }
        }
    }
}

/// Element name plus attribute predicates, all of which must hold
#[derive(Debug, Clone)]
pub struct Query {
    tag: &'static str,
    attrs: Vec<(&'static str, AttrPattern)>,
}

impl Query {
    pub fn tag(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn class_matching(mut self, pattern: &Regex) -> Self {
        self.attrs.push(("class", AttrPattern::Matches(pattern.clone())));
        self
    }

    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, AttrPattern::Exact(value.to_string())));
        self
    }

    pub fn matches(&self, element: ElementRef) -> bool {
        let el = element.value();
        el.name() == self.tag
            && self.attrs.iter().all(|(name, pattern)| {
                el.attr(name)
                    .is_some_and(|value| pattern.is_match(name, value))
            })
    }
}

/// All matching descendants of `scope` in document order, `scope` excluded
pub fn find_all<'a>(scope: ElementRef<'a>, query: &Query) -> Vec<ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| query.matches(*el))
        .collect()
}

pub fn find<'a>(scope: ElementRef<'a>, query: &Query) -> Option<ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| query.matches(*el))
}

/// Nearest preceding sibling that matches
pub fn find_prev_sibling<'a>(element: ElementRef<'a>, query: &Query) -> Option<ElementRef<'a>> {
    element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| query.matches(*el))
}

pub fn text(element: ElementRef) -> String {
    element.text().collect()
}

/// Text of the first match, or `""` when nothing matches
pub fn find_text(scope: ElementRef, query: &Query) -> String {
    find(scope, query).map(text).unwrap_or_default()
}
