//! Tests for tree flattening and column layout selection

mod common;

use std::collections::HashSet;

use xpnav::navigator::{ColumnKey, ColumnLayout, Flattened, RowColor, count_nodes, flatten};

#[test]
fn test_rows_in_pre_order() {
    let root = common::claim_trace();
    let flattened = flatten(&root, false);

    let labels: Vec<String> = flattened.rows.iter().map(|r| r.display_label()).collect();
    assert_eq!(
        labels,
        vec![
            "PostgreSQLInstance/my-db",
            "├─ XPostgreSQLInstance/my-db-x7k2p",
            "│  ├─ RDSInstance/my-db-x7k2p-rds (paused)",
            "│  └─ Secret/my-db-conn",
            "└─ Usage/my-db-usage",
        ]
    );
    assert_eq!(flattened.rows.len(), count_nodes(&root));
    let depths: Vec<usize> = flattened.rows.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 2, 1]);
}

#[test]
fn test_row_ids_are_unique() {
    let flattened = flatten(&common::claim_trace(), false);
    let ids: HashSet<&str> = flattened.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), flattened.rows.len());
    assert_eq!(
        flattened.rows[2].id,
        "RDSInstance.rds.aws.upbound.io/my-db-x7k2p-rds"
    );
}

#[test]
fn test_row_ids_stable_across_flattenings() {
    let ids = |flattened: Flattened| -> Vec<String> {
        flattened.rows.into_iter().map(|r| r.id).collect()
    };
    let root = common::claim_trace();
    let first = ids(flatten(&root, false));
    assert_eq!(first, ids(flatten(&root, false)));
    // A fresh parse of the same document and a different column mode
    assert_eq!(first, ids(flatten(&common::claim_trace(), true)));
}

/// Cells of `flattened` with the last-transition columns removed
fn without_transition_columns(flattened: &Flattened) -> Vec<Vec<String>> {
    let keep: Vec<bool> = flattened
        .layout
        .columns()
        .iter()
        .map(|c| {
            !matches!(
                c.key,
                ColumnKey::SyncedLast
                    | ColumnKey::ReadyLast
                    | ColumnKey::InstalledLast
                    | ColumnKey::HealthyLast
            )
        })
        .collect();
    flattened
        .rows
        .iter()
        .map(|row| {
            row.columns
                .iter()
                .zip(&keep)
                .filter(|(_, keep)| **keep)
                .map(|(cell, _)| cell.clone())
                .collect()
        })
        .collect()
}

#[test]
fn test_wide_differs_from_short_only_by_transitions() {
    for root in [common::claim_trace(), common::package_trace()] {
        let wide = flatten(&root, false);
        let short = flatten(&root, true);
        assert_eq!(wide.layout.columns().len(), short.layout.columns().len() + 2);
        assert_eq!(without_transition_columns(&wide), without_transition_columns(&short));
        for (wide_row, short_row) in wide.rows.iter().zip(&short.rows) {
            assert_eq!(wide_row.id, short_row.id);
            assert_eq!(wide_row.color, short_row.color);
        }
    }
}

#[test]
fn test_breadcrumb_paths() {
    let flattened = flatten(&common::claim_trace(), false);
    assert_eq!(
        flattened.rows[3].path,
        vec![
            "PostgreSQLInstance/my-db",
            "XPostgreSQLInstance/my-db-x7k2p",
            "Secret/my-db-conn",
        ]
    );
}

#[test]
fn test_row_colors() {
    let flattened = flatten(&common::claim_trace(), false);
    let colors: Vec<RowColor> = flattened.rows.iter().map(|r| r.color).collect();
    assert_eq!(
        colors,
        vec![
            RowColor::Neutral,
            RowColor::Error,
            // Paused wins over the unready error color
            RowColor::Warning,
            RowColor::Error,
            RowColor::Neutral,
        ]
    );
}

#[test]
fn test_short_and_wide_object_layouts() {
    let root = common::claim_trace();

    let wide = flatten(&root, false);
    assert_eq!(wide.layout, ColumnLayout::WideObject);
    assert_eq!(
        wide.rows[0].columns,
        vec![
            "PostgreSQLInstance/my-db",
            "database.example.org",
            "True",
            "01 Mar 24 09:05 UTC",
            "True",
            "01 Mar 24 09:12 UTC",
            "",
        ]
    );

    let short = flatten(&root, true);
    assert_eq!(short.layout, ColumnLayout::ShortObject);
    assert_eq!(
        short.rows[1].columns,
        vec![
            "├─ XPostgreSQLInstance/my-db-x7k2p",
            "database.example.org",
            "True",
            "False",
            "Creating",
        ]
    );
    for row in &short.rows {
        assert_eq!(row.columns.len(), short.layout.columns().len());
    }
}

#[test]
fn test_package_layout_from_root() {
    let root = common::package_trace();
    let flattened = flatten(&root, true);
    assert_eq!(flattened.layout, ColumnLayout::ShortPackage);
    assert_eq!(
        flattened.rows[0].columns,
        vec![
            "Configuration/platform-ref-aws",
            "v0.9.0",
            "True",
            "False",
            "-",
            "dependency provider-aws is not healthy",
        ]
    );
    assert_eq!(flattened.rows[0].color, RowColor::Error);
    assert_eq!(flattened.rows[2].color, RowColor::Neutral);
    assert_eq!(flattened.rows[2].columns[1], "sha256:1f3c");
}

#[test]
fn test_single_node_trace() {
    let root = common::flat_trace(&["only"]);
    let flattened = flatten(&root, false);
    assert_eq!(flattened.rows.len(), 1);
    assert_eq!(flattened.rows[0].prefix, "");
    assert_eq!(flattened.rows[0].path, vec!["XR/only"]);
}
