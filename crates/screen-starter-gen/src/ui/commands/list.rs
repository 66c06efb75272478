use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{
    ast::{AnnotatedClass, Field},
    discovery::{ManifestSupertypes, discover},
  },
  ui::{Colors, term_width},
  utils::ManifestLoader,
};

pub async fn list_screens(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let manifest = ManifestLoader::open(input).await?.parse()?;
  let subtypes = ManifestSupertypes::from_classes(&manifest.classes);
  let discovered = discover(&manifest, &subtypes);

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["SCREEN", "FIELD", "TYPE", "KIND", "DEFAULT", "STATUS"] {
    header.add_cell(Cell::new(title).fg(Colors::cell(colors.label())));
  }
  table.set_header(header);

  for class in &discovered.classes {
    let status = class_status(class);
    if class.field_count() == 0 {
      table.add_row(screen_row(class, None, status, colors));
      continue;
    }
    for field in class.fields() {
      table.add_row(screen_row(class, Some(field), status, colors));
    }
  }

  println!("{table}");

  Ok(())
}

fn class_status(class: &AnnotatedClass) -> &'static str {
  if class.is_abstract { "abstract" } else { "emitted" }
}

fn screen_row(class: &AnnotatedClass, field: Option<&Field>, status: &str, colors: &Colors) -> Row {
  let mut row = Row::new();
  row.add_cell(
    Cell::new(class.identity.as_str())
      .fg(Colors::cell(colors.value()))
      .add_attribute(Attribute::Bold),
  );

  let (name, declared, kind, default) = field.map_or_else(
    || ("-".to_string(), String::new(), String::new(), String::new()),
    |field| {
      let kind = if field.is_required() { "required" } else { "optional" };
      (
        field.key().to_string(),
        field.declared_type.to_string(),
        kind.to_string(),
        marker_text(field),
      )
    },
  );

  row.add_cell(Cell::new(name).fg(Colors::cell(colors.primary())));
  row.add_cell(Cell::new(declared).fg(Colors::cell(colors.primary())));
  row.add_cell(Cell::new(kind).fg(Colors::cell(colors.accent())));
  row.add_cell(Cell::new(default).fg(Colors::cell(colors.value())));
  row.add_cell(
    Cell::new(status)
      .fg(Colors::cell(colors.timestamp()))
      .set_alignment(CellAlignment::Right),
  );
  row
}

/// The marker literal as written, shown even when it equals the type's zero.
fn marker_text(field: &Field) -> String {
  if field.has_default_marker() {
    field.default_value_literal().to_string()
  } else {
    String::new()
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::generator::ast::{DeclaredType, PrimitiveKind};

  #[test]
  fn test_marker_text_shows_zero_markers() {
    let zero = Field::builder()
      .name("count")
      .declared_type(DeclaredType::primitive(PrimitiveKind::I32))
      .raw_default(json!(0))
      .build();
    let absent = Field::builder()
      .name("id")
      .declared_type(DeclaredType::primitive(PrimitiveKind::I32))
      .build();
    let text = Field::builder()
      .name("tag")
      .declared_type(DeclaredType::String)
      .raw_default(json!("none"))
      .build();

    assert_eq!(marker_text(&zero), "0");
    assert_eq!(marker_text(&absent), "");
    assert_eq!(marker_text(&text), "\"none\"");
  }

  #[tokio::test]
  async fn test_list_screens_reads_fixture() {
    let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/screens.json");
    let colors = Colors::new(false, crate::ui::colors::Theme::Dark);
    assert!(list_screens(&input, &colors).await.is_ok());
  }
}
