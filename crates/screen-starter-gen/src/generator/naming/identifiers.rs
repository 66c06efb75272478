use std::{collections::BTreeSet, sync::LazyLock};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

pub(crate) static FORBIDDEN_IDENTIFIERS: LazyLock<BTreeSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen",
  ]
  .into_iter()
  .collect()
});

// Identifiers that cannot be raw identifiers.
static NON_RAW_KEYWORDS: [&str; 5] = ["self", "Self", "super", "crate", "_"];

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Transliterates to ASCII, replaces invalid characters with underscores, collapses
/// consecutive underscores, and trims any leading or trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Spells a declared field name as a Rust identifier without changing its case.
///
/// Field names come from real struct fields, so only keywords need escaping:
/// `type` becomes `r#type`, `self` becomes `self_`.
pub(crate) fn escape_field_name(name: &str) -> String {
  let bare = name.strip_prefix("r#").unwrap_or(name);

  if NON_RAW_KEYWORDS.contains(&bare) {
    return format!("{bare}_");
  }

  if FORBIDDEN_IDENTIFIERS.contains(bare) {
    return format!("r#{bare}");
  }

  bare.to_string()
}

/// Strips a raw identifier prefix, yielding the name as it appears in payload keys.
pub(crate) fn unraw(name: &str) -> &str {
  name.strip_prefix("r#").unwrap_or(name)
}

/// Derives the payload-key constant name: `userId` and `user_id` both become `USER_ID`.
pub(crate) fn to_rust_const_name(input: &str) -> String {
  let sanitized = sanitize(input);
  if sanitized.is_empty() {
    return "UNNAMED".to_string();
  }

  let mut ident = sanitized.to_constant_case();
  prefix_if_digit_start(&mut ident, '_');
  ident
}

pub(crate) fn to_setter_name(field_name: &str) -> String {
  format!("set_{}", unraw(field_name))
}

/// Converts a type name into a module name: `DetailBuilder` becomes `detail_builder`.
pub(crate) fn to_rust_module_name(type_name: &str) -> String {
  let mut ident = sanitize(type_name).to_snake_case();

  if ident.is_empty() {
    return "unnamed".to_string();
  }

  if FORBIDDEN_IDENTIFIERS.contains(ident.as_str()) || NON_RAW_KEYWORDS.contains(&ident.as_str()) {
    ident.push('_');
  }

  prefix_if_digit_start(&mut ident, '_');
  ident
}

/// Last segment of a `::`-separated path, with generic arguments removed.
pub(crate) fn simple_name(path: &str) -> &str {
  let without_generics = path.split('<').next().unwrap_or(path);
  without_generics
    .rsplit("::")
    .next()
    .unwrap_or(without_generics)
    .trim()
}

/// Ensures a name is unique within a set of used names, appending a numeric suffix if needed.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

fn prefix_if_digit_start(ident: &mut String, prefix: char) {
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, prefix);
  }
}
