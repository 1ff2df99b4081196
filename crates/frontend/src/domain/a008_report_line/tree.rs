//! Report lines as a tree.
//!
//! Lines are ordered depth-first by `parent_id`, siblings by `(sequence, id)`.
//! A line whose parent is missing from the set starts a root. Lines caught in
//! a parent cycle are never reached from a root; they are emitted afterwards,
//! each unvisited one starting its own subtree, so nothing is dropped.

use contracts::domain::common::RecordId;
use leptos::prelude::*;
use std::collections::{BTreeSet, HashMap};

use crate::shared::crud::Row;

const INDENT_PX: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine {
    pub depth: usize,
    pub row: Row,
}

fn sort_key(row: &Row) -> (i64, RecordId) {
    (row.number("sequence") as i64, row.id)
}

pub fn tree_order(rows: &[Row]) -> Vec<TreeLine> {
    let ids: BTreeSet<RecordId> = rows.iter().map(|r| r.id).collect();
    let mut children: HashMap<RecordId, Vec<&Row>> = HashMap::new();
    let mut roots: Vec<&Row> = Vec::new();

    for row in rows {
        match row.id_of("parent_id") {
            Some(parent) if parent != row.id && ids.contains(&parent) => {
                children.entry(parent).or_default().push(row)
            }
            _ => roots.push(row),
        }
    }
    for siblings in children.values_mut() {
        siblings.sort_by_key(|r| sort_key(r));
    }
    roots.sort_by_key(|r| sort_key(r));

    let mut visited = BTreeSet::new();
    let mut out = Vec::with_capacity(rows.len());
    for root in roots {
        walk(root, 0, &children, &mut visited, &mut out);
    }

    let mut stranded: Vec<&Row> = rows.iter().filter(|r| !visited.contains(&r.id)).collect();
    stranded.sort_by_key(|r| sort_key(r));
    for row in stranded {
        walk(row, 0, &children, &mut visited, &mut out);
    }
    out
}

fn walk(
    row: &Row,
    depth: usize,
    children: &HashMap<RecordId, Vec<&Row>>,
    visited: &mut BTreeSet<RecordId>,
    out: &mut Vec<TreeLine>,
) {
    if !visited.insert(row.id) {
        return;
    }
    out.push(TreeLine {
        depth,
        row: row.clone(),
    });
    for child in children.get(&row.id).into_iter().flatten() {
        walk(child, depth + 1, children, visited, out);
    }
}

/// Alternate view of the report-lines page
pub fn render_tree(rows: Vec<Row>) -> AnyView {
    let lines = tree_order(&rows);
    if lines.is_empty() {
        return view! { <div class="tree-view tree-view--empty">"Нет строк"</div> }.into_any();
    }

    view! {
        <div class="tree-view">
            {lines
                .into_iter()
                .map(|line| {
                    let indent = format!("padding-left: {}px;", line.depth * INDENT_PX);
                    view! {
                        <div class="tree-view__line" style=indent>
                            <span class="tree-view__code">{line.row.display("code").to_string()}</span>
                            <span class="tree-view__name">{line.row.display("name").to_string()}</span>
                            <span class="tree-view__type">{line.row.display("line_type").to_string()}</span>
                            <span class="tree-view__sign">{line.row.display("sign").to_string()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::references::ReferenceData;
    use contracts::domain::a008_report_line::ReportLine;

    fn line(id: RecordId, parent: Option<RecordId>, sequence: i64) -> Row {
        let record = ReportLine {
            id: Some(id),
            report_id: Some(1),
            parent_id: parent,
            sequence,
            name: format!("line {id}"),
            ..Default::default()
        };
        Row::project(&record, &ReferenceData::default()).unwrap()
    }

    fn shape(lines: &[TreeLine]) -> Vec<(RecordId, usize)> {
        lines.iter().map(|l| (l.row.id, l.depth)).collect()
    }

    #[test]
    fn test_depth_first_with_sibling_order() {
        let rows = vec![
            line(5, Some(1), 20),
            line(1, None, 10),
            line(4, Some(1), 10),
            line(2, None, 5),
            line(6, Some(4), 10),
        ];
        assert_eq!(
            shape(&tree_order(&rows)),
            vec![(2, 0), (1, 0), (4, 1), (6, 2), (5, 1)]
        );
    }

    #[test]
    fn test_equal_sequence_orders_by_id() {
        let rows = vec![line(9, None, 10), line(3, None, 10)];
        assert_eq!(shape(&tree_order(&rows)), vec![(3, 0), (9, 0)]);
    }

    #[test]
    fn test_orphan_becomes_root() {
        let rows = vec![line(1, None, 10), line(2, Some(99), 5)];
        assert_eq!(shape(&tree_order(&rows)), vec![(2, 0), (1, 0)]);
    }

    #[test]
    fn test_cycle_is_kept() {
        let rows = vec![
            line(1, None, 10),
            line(2, Some(3), 10),
            line(3, Some(2), 20),
            line(4, Some(4), 30),
        ];
        let lines = tree_order(&rows);
        assert_eq!(lines.len(), 4);
        assert_eq!(shape(&lines), vec![(1, 0), (4, 0), (2, 0), (3, 1)]);
    }
}
