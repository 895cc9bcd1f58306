//! Translation between Marquee's camelCase wire names and snake_case accessor names.
//!
//! Conversions are memoized process-wide: the same few hundred property names are
//! translated over and over while (de)serializing records, so every distinct input is
//! converted once and served from a concurrent cache afterwards.

use std::sync::LazyLock;

use dashmap::DashMap;

/// Cache of camelCase (or otherwise cased) input to snake_case output.
static SNAKE_CASE_CACHE: LazyLock<DashMap<String, String>> = LazyLock::new(DashMap::new);

/// Cache of snake_case (or otherwise cased) input to camelCase output.
static CAMEL_CASE_CACHE: LazyLock<DashMap<String, String>> = LazyLock::new(DashMap::new);

/// Entries either cache holds, give or take concurrent inserts. Names from server payloads
/// are unbounded, so once full further conversions are computed but not remembered.
pub const MAX_CACHE_ENTRIES: usize = 4096;

/// Longest name that is cached.
pub const MAX_CACHED_NAME_LEN: usize = 64;

/// Strict and reserved Rust keywords. A snake_case name colliding with one of them is
/// escaped with a trailing underscore (`type` becomes `type_`), matching how such fields
/// are spelled on the typed records of this crate.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// A naming convention for property names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum Case {
    /// The wire convention, e.g. `regionCode`.
    #[default]
    Camel,
    /// The accessor convention, e.g. `region_code`.
    Snake,
}

impl Case {
    /// Converts `name` into this convention.
    #[must_use]
    pub fn convert(self, name: &str) -> String {
        match self {
            Case::Camel => to_camel_case(name),
            Case::Snake => to_snake_case(name),
        }
    }
}

/// Returns `true` if `name` is a Rust keyword and needs escaping as an accessor name.
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Converts a wire name into its snake_case accessor name.
///
/// ```
/// use marquee_client_sdk::base::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("subRegionCode"), "sub_region_code");
/// assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
/// assert_eq!(to_snake_case("type"), "type_");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    if let Some(cached) = SNAKE_CASE_CACHE.get(name) {
        return cached.value().clone();
    }

    let converted = underscore(name);
    remember(&SNAKE_CASE_CACHE, name, &converted);
    converted
}

/// Converts an accessor name into its camelCase wire name.
///
/// Names without underscores are assumed to be in wire form already and are returned as is.
///
/// ```
/// use marquee_client_sdk::base::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("sub_region_code"), "subRegionCode");
/// assert_eq!(to_camel_case("type_"), "type");
/// assert_eq!(to_camel_case("ownerId"), "ownerId");
/// ```
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    if let Some(cached) = CAMEL_CASE_CACHE.get(name) {
        return cached.value().clone();
    }

    let converted = camelize(name);
    remember(&CAMEL_CASE_CACHE, name, &converted);
    converted
}

fn remember(cache: &DashMap<String, String>, name: &str, converted: &str) {
    if name.len() <= MAX_CACHED_NAME_LEN && cache.len() < MAX_CACHE_ENTRIES {
        cache.insert(name.to_owned(), converted.to_owned());
    }
}

fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }

        if c.is_uppercase() {
            let prev = i.checked_sub(1).and_then(|p| chars.get(p)).copied();
            let next = chars.get(i + 1).copied();
            // A word starts after a lowercase letter or digit (`assetClass`), or at the last
            // capital of an acronym that is followed by a lowercase letter (`XMLHttp`).
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    if is_keyword(&out) {
        out.push('_');
    }
    out
}

fn camelize(name: &str) -> String {
    let name = name
        .strip_suffix('_')
        .filter(|stem| is_keyword(stem))
        .unwrap_or(name);

    if !name.contains('_') {
        return name.to_owned();
    }

    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            // leading underscores are dropped rather than capitalizing the first word
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else if out.is_empty() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
