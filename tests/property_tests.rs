//! Property-based tests for quoting, block naming and row layout.
//!
//! These complement the byte-level layout tests by checking invariants across a
//! wide range of generated tables and strings.

use proptest::prelude::*;
use serde_star::{
    coerce, loop_block, quote, render, FixedProvenance, Scalar, StarOptions, Table, Value,
};

fn provenance() -> FixedProvenance {
    let at = chrono::NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    FixedProvenance::new("proptest", "0", at)
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (1usize..5, 0usize..12).prop_flat_map(|(n_columns, n_rows)| {
        prop::collection::vec(prop::collection::vec(any::<i32>(), n_rows), n_columns).prop_map(
            |columns| {
                let mut table = Table::new();
                for (i, values) in columns.into_iter().enumerate() {
                    let values = values.into_iter().map(Scalar::from).collect();
                    table.push_column(format!("c{}", i), values).unwrap();
                }
                table
            },
        )
    })
}

proptest! {
    #[test]
    fn prop_quote_is_pure(s in ".*", quote_all in any::<bool>()) {
        prop_assert_eq!(quote(&s, '"', quote_all), quote(&s, '"', quote_all));
    }

    #[test]
    fn prop_quote_wraps_spaced_strings(a in "[a-z]{0,8}", b in "[a-z]{0,8}") {
        let s = format!("{} {}", a, b);
        prop_assert_eq!(quote(&s, '"', false).into_owned(), format!("\"{}\"", s));
    }

    #[test]
    fn prop_quote_leaves_plain_strings(s in "[A-Za-z0-9_.]{1,16}") {
        prop_assert_eq!(quote(&s, '"', false).into_owned(), s.clone());
        prop_assert_eq!(quote(&s, '\'', true).into_owned(), format!("'{}'", s));
    }

    #[test]
    fn prop_empty_string_is_quoted(c in prop::char::range('!', '~'), quote_all in any::<bool>()) {
        prop_assert_eq!(quote("", c, quote_all).into_owned(), format!("{}{}", c, c));
    }

    #[test]
    fn prop_sequence_names_blocks_by_index(n in 0usize..20) {
        let blocks = (0..n)
            .map(|i| Value::Table(Table::new().with_column("x", [i as i64]).unwrap()))
            .collect::<Vec<_>>();
        let document = coerce(Value::Array(blocks)).unwrap();
        let expected: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        prop_assert_eq!(document.names().map(str::to_string).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_loop_block_layout(table in table_strategy()) {
        let options = StarOptions::new();
        let lines = loop_block("t", &table, &options)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let n_columns = table.n_columns();
        prop_assert_eq!(lines.len(), 3 + n_columns + table.n_rows() + 2);

        for (i, name) in table.column_names().enumerate() {
            prop_assert_eq!(&lines[3 + i], &format!("_{} #{}", name, i + 1));
        }
        for (row, line) in table.rows().zip(&lines[3 + n_columns..]) {
            let expected: Vec<String> = row.cells().map(Scalar::to_string).collect();
            prop_assert_eq!(line, &expected.join("\t"));
        }
    }

    #[test]
    fn prop_document_preserves_block_order(names in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let mut document = serde_star::Document::new();
        for name in &names {
            document.insert(name.clone(), Table::new().with_column("v", [1]).unwrap());
        }
        let data_lines: Vec<String> = render(&document, &StarOptions::new(), &provenance())
            .map(Result::unwrap)
            .filter(|line| line.starts_with("data_"))
            .collect();

        let mut unique = Vec::new();
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        let expected: Vec<String> = unique.iter().map(|n| format!("data_{}", n)).collect();
        prop_assert_eq!(data_lines, expected);
    }
}
