use std::collections::BTreeSet;

use crate::generator::naming::identifiers::{
  ensure_unique, escape_field_name, sanitize, simple_name, to_rust_const_name, to_rust_module_name, to_setter_name,
  unraw,
};

#[test]
fn test_const_names() {
  let cases = [
    ("id", "ID"),
    ("tag", "TAG"),
    ("userId", "USER_ID"),
    ("user_id", "USER_ID"),
    ("2fa", "_2FA"),
    ("", "UNNAMED"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_rust_const_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_escape_field_names() {
  let cases = [
    ("count", "count"),
    ("type", "r#type"),
    ("r#type", "r#type"),
    ("match", "r#match"),
    ("self", "self_"),
    ("crate", "crate_"),
    ("userId", "userId"),
  ];
  for (input, expected) in cases {
    assert_eq!(escape_field_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_setter_names() {
  assert_eq!(to_setter_name("count"), "set_count");
  assert_eq!(to_setter_name("user_id"), "set_user_id");
  assert_eq!(to_setter_name("r#type"), "set_type");
  assert_eq!(unraw("r#loop"), "loop");
  assert_eq!(unraw("plain"), "plain");
}

#[test]
fn test_module_names() {
  let cases = [
    ("DetailBuilder", "detail_builder"),
    ("SettingsBuilder", "settings_builder"),
    ("Builder", "builder"),
    ("", "unnamed"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_rust_module_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_simple_name() {
  assert_eq!(simple_name("crate::screens::Detail"), "Detail");
  assert_eq!(simple_name("Detail"), "Detail");
  assert_eq!(simple_name("crate::model::Page<T>"), "Page");
}

#[test]
fn test_sanitize() {
  assert_eq!(sanitize("foo-bar baz"), "foo_bar_baz");
  assert_eq!(sanitize("__x__"), "x");
  assert_eq!(sanitize(""), "");
}

#[test]
fn test_ensure_unique() {
  let used: BTreeSet<String> = ["detail_builder", "detail_builder2"].into_iter().map(String::from).collect();
  assert_eq!(ensure_unique("detail_builder", &used), "detail_builder3");
  assert_eq!(ensure_unique("home_builder", &used), "home_builder");
}
