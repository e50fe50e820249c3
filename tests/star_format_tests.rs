//! Byte-level checks of rendered STAR output.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde_star::{
    render, star, Delimiter, Document, FixedProvenance, FloatFormat, Scalar, StarOptions,
    StarWriter, Table, Value,
};

fn provenance() -> FixedProvenance {
    let at = NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap();
    FixedProvenance::new("serde_star Rust crate", "0.1.0", at)
}

fn render_string(input: impl Into<Value>, options: StarOptions) -> String {
    let writer = StarWriter::new(input)
        .unwrap()
        .with_options(options)
        .with_provenance(provenance());
    let mut buffer = Vec::new();
    writer.write_to(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

const HEADER: &str = "# Created by the serde_star Rust crate (version 0.1.0) at 09:30:00 on 18/10/2026\n\n\n";

#[test]
fn test_loop_block_example() {
    let table = Table::new()
        .with_column("x", [1.0, 2.5])
        .unwrap()
        .with_column("y", ["a b", ""])
        .unwrap();
    let options = StarOptions::new().with_float_format(FloatFormat::Fixed(2));
    let star = render_string(table, options);
    assert_eq!(
        star,
        format!(
            "{}data_\n\nloop_\n_x #1\n_y #2\n1.00\t\"a b\"\n2.50\t\"\"\n\n\n",
            HEADER
        )
    );
}

#[test]
fn test_key_value_block_example() {
    let star = render_string(star!({ "alpha": 1, "beta": "hi" }), StarOptions::new());
    assert_eq!(
        star,
        format!("{}data_\n\n_alpha\t\t\t1\n_beta\t\t\thi\n\n\n", HEADER)
    );
}

#[test]
fn test_blocks_follow_each_other_without_extra_gap() {
    let mut document = Document::new();
    let mut optics = IndexMap::new();
    optics.insert("rlnVoltage".to_string(), Scalar::Float(300.0));
    document.insert("optics", optics);
    document.insert(
        "particles",
        Table::new().with_column("rlnClassNumber", [1, 2]).unwrap(),
    );

    let star = StarWriter::from_document(document)
        .with_provenance(provenance())
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
        .join("\n");
    assert_eq!(
        star,
        [
            "# Created by the serde_star Rust crate (version 0.1.0) at 09:30:00 on 18/10/2026",
            "",
            "",
            "data_optics",
            "",
            "_rlnVoltage\t\t\t300.0",
            "",
            "",
            "data_particles",
            "",
            "loop_",
            "_rlnClassNumber #1",
            "1",
            "2",
            "",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn test_missing_values_keep_row_width() {
    let table = Table::new()
        .with_column("a", [Some(1), None])
        .unwrap()
        .with_column("b", [None, Some("x")])
        .unwrap();
    let star = render_string(table, StarOptions::new().with_na_rep("nan"));
    assert!(star.ends_with("1\tnan\nnan\tx\n\n\n"));
}

#[test]
fn test_float_pattern_is_uniform() {
    let table = Table::new()
        .with_column("v", [0.000_012_3, 123_456.0, -1.0])
        .unwrap();
    let options = StarOptions::new().with_float_format(FloatFormat::Exponent {
        precision: 2,
        upper: false,
    });
    let star = render_string(table, options);
    assert!(star.ends_with("_v #1\n1.23e-05\n1.23e+05\n-1.00e+00\n\n\n"));
}

#[test]
fn test_custom_quote_character_and_separator() {
    let table = Table::new()
        .with_column("name", ["mic 1", "mic2"])
        .unwrap()
        .with_column("n", [1, 2])
        .unwrap();
    let options = StarOptions::new()
        .with_quote_character('\'')
        .with_delimiter(Delimiter::Space);
    let star = render_string(table, options);
    assert!(star.ends_with("'mic 1' 1\nmic2 2\n\n\n"));
}

#[test]
fn test_quote_all_strings_in_both_block_kinds() {
    let options = StarOptions::new().with_quote_all_strings(true);
    let star = render_string(star!({ "name": "group1", "size": 256 }), options.clone());
    assert!(star.contains("_name\t\t\t\"group1\"\n_size\t\t\t256\n"));

    let table = Table::new().with_column("name", ["group1"]).unwrap();
    let star = render_string(table, options);
    assert!(star.contains("_name #1\n\"group1\"\n"));
}

#[test]
fn test_sequence_blocks_are_numbered() {
    let input = Value::Array(vec![
        Value::Table(Table::new().with_column("a", [1]).unwrap()),
        star!({ "k": "v" }),
    ]);
    let star = render_string(input, StarOptions::new());
    let data_lines: Vec<_> = star.lines().filter(|l| l.starts_with("data_")).collect();
    assert_eq!(data_lines, vec!["data_0", "data_1"]);
}

#[test]
fn test_render_function_matches_writer() {
    let mut document = Document::new();
    document.insert("t", Table::new().with_column("a", ["x"]).unwrap());
    let options = StarOptions::new();

    let from_render: Vec<String> = render(&document, &options, &provenance())
        .collect::<Result<_, _>>()
        .unwrap();
    let from_writer: Vec<String> = StarWriter::from_document(document.clone())
        .with_provenance(provenance())
        .lines()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(from_render, from_writer);
}

#[test]
fn test_names_cannot_inject_lines() {
    let table = Table::new()
        .with_column("rlnX\n_injected #9", [1])
        .unwrap();
    assert!(matches!(
        serde_star::to_string(table),
        Err(serde_star::Error::InvalidName { .. })
    ));

    let mut document = Document::new();
    let mut entries = IndexMap::new();
    entries.insert("k\ndata_evil".to_string(), Scalar::Integer(2));
    document.insert("blk", entries);
    let lines: Vec<_> = StarWriter::from_document(document)
        .with_provenance(provenance())
        .lines()
        .collect();
    assert!(lines.iter().all(|line| match line {
        Ok(text) => !text.contains("data_evil"),
        Err(_) => true,
    }));
    assert!(matches!(lines.last(), Some(Err(serde_star::Error::InvalidName { .. }))));

    let mut document = Document::new();
    document.insert("blk\nloop_", Table::new().with_column("x", [1]).unwrap());
    let err = StarWriter::from_document(document)
        .with_provenance(provenance())
        .write_to(Vec::new())
        .unwrap_err();
    assert!(err.to_string().contains("line break"));
}

#[test]
fn test_key_value_floats_use_signed_exponents() {
    let star = render_string(
        star!({ "rlnSmall": 0.00001, "rlnLarge": 1e16, "rlnPlain": 0.0001 }),
        StarOptions::new(),
    );
    assert!(star.ends_with(
        "_rlnSmall\t\t\t1e-05\n_rlnLarge\t\t\t1e+16\n_rlnPlain\t\t\t0.0001\n\n\n"
    ));
}

#[test]
fn test_general_float_pattern_matches_printf() {
    let table = Table::new()
        .with_column("v", [0.1 + 0.2, 1_234_567.0, 1e-7, 100_000.0])
        .unwrap();
    let options = StarOptions::new().with_float_format("%g".parse::<FloatFormat>().unwrap());
    let star = render_string(table, options);
    assert!(star.ends_with("_v #1\n0.3\n1.23457e+06\n1e-07\n100000\n\n\n"));
}
