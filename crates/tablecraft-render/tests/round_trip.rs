use std::collections::HashMap;

use serial_test::serial;
use tablecraft_render::formats::{self, Format};
use tablecraft_render::style::{self, BorderLine, Style};
use tablecraft_render::{Align, Table, TableError};

fn people() -> Table {
    let mut table = Table::with_alignments(["Name", "Age", "City"], [("Age", "r")]);
    table.add_row(["Alice", "30", "New York"]);
    table.add_row(["Bob", "25", "Los Angeles"]);
    table.add_row(["Charlie", "35", "Chicago"]);
    table
}

#[test]
fn every_importable_format_preserves_cells() {
    let table = people();
    for format in Format::ALL {
        let Ok(importer) = format.importer() else {
            continue;
        };
        let text = format.exporter().export(&table).unwrap();
        let back = importer.import(&text).unwrap();
        assert_eq!(back.headers(), table.headers(), "{format}");
        assert_eq!(back.to_rows(), table.to_rows(), "{format}");
    }
}

#[test]
fn markdown_keeps_alignment() {
    let table = people();
    let md = formats::export(&table, "markdown").unwrap();
    let back = formats::import(&md, "md").unwrap();
    assert_eq!(back.alignments(), [Align::Left, Align::Right, Align::Left]);
    assert_eq!(back.render(), table.render());
}

#[test]
fn special_characters_survive_text_formats() {
    let mut table = Table::new(["Expr", "Note"]);
    table.add_row(["a|b", "x, \"y\""]);
    table.add_row(["<tag>", "Tom & Jerry"]);

    for name in ["csv", "json", "xml", "markdown"] {
        let text = formats::export(&table, name).unwrap();
        let back = formats::import(&text, name).unwrap();
        assert_eq!(back.to_rows(), table.to_rows(), "{name}");
    }
}

#[test]
fn html_is_export_only() {
    let html = formats::export(&people(), "HTML").unwrap();
    assert!(html.starts_with("<table border=\"1\"><thead><tr><th>Name</th>"));
    assert!(matches!(
        formats::import(&html, "html"),
        Err(TableError::UnsupportedFormat(_))
    ));
}

#[test]
fn unknown_format_names() {
    let err = formats::export(&people(), "yaml").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported format: yaml");
    assert!(matches!(
        formats::import("", "toml"),
        Err(TableError::UnsupportedFormat(_))
    ));
}

#[test]
fn imported_table_renders() {
    let table = formats::import("Name,Age\nAlice,30\nBob,25\n", "csv").unwrap();
    assert_eq!(
        table.render(),
        "+-------+-----+\n\
         | Name  | Age |\n\
         +-------+-----+\n\
         | Alice | 30  |\n\
         | Bob   | 25  |\n\
         +-------+-----+\n"
    );
}

#[test]
fn sorted_page_with_dividers() {
    let mut table = Table::new(["Name", "Age"]);
    let dividers = HashMap::from([(0, true)]);
    table.add_rows_with_dividers(
        [["Charlie", "35"], ["Alice", "30"], ["Bob", "25"]],
        &dividers,
    );
    table.sort_table("Age", "asc").unwrap();

    // Charlie's divider travels with the row to the end.
    assert!(table.has_divider(2));

    let page = table.page(2, 2);
    assert_eq!(
        page.render(),
        "+---------+-----+\n\
         |  Name   | Age |\n\
         +---------+-----+\n\
         | Charlie | 35  |\n\
         +---------+-----+\n\
         +---------+-----+\n"
    );
}

#[test]
#[serial]
fn registered_style_is_usable_by_name() {
    let pipes = Style::new("!", BorderLine::new("!", "=", "!", "!"))
        .top(BorderLine::uniform("!", "="))
        .bottom(BorderLine::uniform("!", "="));
    style::register("pipes-test", pipes);

    let mut table = Table::new(["A"]);
    table.add_row(["1"]);
    table.set_style("pipes-test").unwrap();
    assert_eq!(table.render(), "!===!\n! A !\n!===!\n! 1 !\n!===!\n");
    assert!(style::names().contains(&"pipes-test".to_string()));
}

#[test]
fn unregistered_style_reports_name() {
    let err = Table::new(["A"]).set_style("nope").unwrap_err();
    assert_eq!(err.to_string(), "Style \"nope\" is not registered.");
}
