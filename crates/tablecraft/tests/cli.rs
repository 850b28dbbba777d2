//! Tests for the `tablecraft` command helpers, driven through parsed
//! command lines.

use std::fs;
use std::path::Path;

use clap::Parser;
use tablecraft::cli::{self, convert_table, load_table, render_table, style_gallery, Cli, Commands};
use tablecraft::{formats, Align, Format};
use tempfile::TempDir;

const PEOPLE_CSV: &str = "Name,Age\nAlice,30\nBob,25\nCharlie,35\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn parse(args: &[&str]) -> Commands {
    let mut argv = vec!["tablecraft"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

#[test]
fn load_table_guesses_format_from_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", PEOPLE_CSV);

    let table = load_table(Path::new(&path), None).unwrap();
    assert_eq!(table.headers(), ["Name", "Age"]);
    assert_eq!(table.row_count(), 3);
}

#[test]
fn load_table_explicit_format_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.txt", "| A | B |\n|:-:|--:|\n| 1 | 2 |\n");

    let table = load_table(Path::new(&path), Some(Format::Markdown)).unwrap();
    assert_eq!(table.alignments(), [Align::Center, Align::Right]);
}

#[test]
fn load_table_unknown_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.txt", PEOPLE_CSV);

    let err = load_table(Path::new(&path), None).unwrap_err();
    assert!(err.to_string().contains("pass --format"));
}

#[test]
fn load_table_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.json", "{ nope");

    let err = load_table(Path::new(&path), None).unwrap_err();
    assert!(err.to_string().starts_with("failed to load"));
    assert!(format!("{:#}", err).contains("serialization error"));
}

#[test]
fn load_table_html_is_not_importable() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.html", "<table></table>");
    assert!(load_table(Path::new(&path), None).is_err());
}

#[test]
fn load_table_missing_file() {
    let err = load_table(Path::new("/definitely/not/here.csv"), None).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn render_with_style_alignment_and_sort() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", PEOPLE_CSV);

    let Commands::Render(args) = parse(&[
        "render",
        &path,
        "--style",
        "github-markdown",
        "--align",
        "Age=r",
        "--sort",
        "Age",
        "--desc",
    ]) else {
        panic!("expected render");
    };

    assert_eq!(
        render_table(&args).unwrap(),
        "|  Name   | Age |\n\
         |---------|-----|\n\
         | Charlie |  35 |\n\
         | Alice   |  30 |\n\
         | Bob     |  25 |\n"
    );
}

#[test]
fn render_single_page() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", PEOPLE_CSV);

    let Commands::Render(args) = parse(&["render", &path, "--page", "2", "--rows-per-page", "2"])
    else {
        panic!("expected render");
    };

    assert_eq!(
        render_table(&args).unwrap(),
        "+---------+-----+\n\
         |  Name   | Age |\n\
         +---------+-----+\n\
         | Charlie | 35  |\n\
         +---------+-----+\n"
    );
}

#[test]
fn render_unknown_style_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", PEOPLE_CSV);

    let Commands::Render(args) = parse(&["render", &path, "--style", "sparkles"]) else {
        panic!("expected render");
    };
    let err = render_table(&args).unwrap_err();
    assert_eq!(err.to_string(), "Style \"sparkles\" is not registered.");
}

#[test]
fn convert_csv_to_json() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "people.csv", PEOPLE_CSV);

    let Commands::Convert(args) = parse(&["convert", &path, "--to", "json"]) else {
        panic!("expected convert");
    };
    assert_eq!(
        convert_table(&args).unwrap(),
        r#"{"headers":["Name","Age"],"rows":[["Alice","30"],["Bob","25"],["Charlie","35"]]}"#
    );
}

#[test]
fn convert_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "people.csv", PEOPLE_CSV);
    let output = dir.path().join("people.xml");

    let cli = Cli::try_parse_from([
        "tablecraft",
        "convert",
        input.as_str(),
        "--to",
        "xml",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    cli::run(cli).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let back = formats::import(&written, "xml").unwrap();
    assert_eq!(back.to_rows(), load_table(Path::new(&input), None).unwrap().to_rows());
}

#[test]
fn style_gallery_lists_builtins() {
    let listing = style_gallery(false);
    let names: Vec<&str> = listing.lines().collect();
    assert!(names.contains(&"default"));
    assert!(names.contains(&"unicode-double-line"));
    assert!(names.contains(&"restructured-text-simple"));
}

#[test]
fn style_gallery_preview_draws_samples() {
    let listing = style_gallery(true);
    assert!(listing.contains("╔═══════╦═════╗"));
    assert!(listing.contains("| Alice | 30  |"));
}
