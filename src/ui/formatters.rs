//! Shared formatting utilities for listings and pages.

use crate::data::{AttributeMap, Child, Node, Rows};
use ndarray::Axis;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a shape the way Python prints tuples: `()`, `(3,)`, `(25, 3)`.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [only] => format!("({},)", only),
        dims => {
            let parts: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Attribute lines with keys padded to a common display width.
pub fn format_attributes(attrs: &AttributeMap, max_value_width: usize) -> Vec<String> {
    let key_width = attrs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);

    attrs
        .iter()
        .map(|(key, value)| {
            let pad = " ".repeat(key_width - key.width());
            let value = truncate_to_width(&value.to_string(), max_value_width);
            format!("{}{}: {}", key, pad, value)
        })
        .collect()
}

/// One numbered entry of a group listing.
pub fn format_child(index: usize, child: &Child) -> String {
    let kind = child.node.kind();
    match &child.node {
        Node::Group(_) => format!("{}. {}: {}/", index, kind, child.name),
        Node::Dataset(info) => format!(
            "{}. {}: {} (shape: {}, dtype: {})",
            index,
            kind,
            child.name,
            format_shape(&info.shape),
            info.dtype
        ),
    }
}

/// Paging footer after rows up to `end` have been shown.
pub fn format_footer(end: usize, total_rows: usize) -> String {
    if end < total_rows {
        format!(
            "{} of {} shown, more remain",
            format_number(end),
            format_number(total_rows)
        )
    } else {
        format!(
            "{} of {} shown",
            format_number(end),
            format_number(total_rows)
        )
    }
}

/// Display lines for a page of rows: one per row when rows are themselves
/// arrays, one per element otherwise.
pub fn format_rows(rows: &Rows) -> Vec<String> {
    if rows.ndim() > 1 {
        rows.axis_iter(Axis(0)).map(|row| row.to_string()).collect()
    } else {
        rows.iter().map(|cell| cell.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AttrValue, Cell, DType, DatasetInfo};
    use ndarray::IxDyn;

    #[test]
    fn shapes_print_like_tuples() {
        assert_eq!(format_shape(&[]), "()");
        assert_eq!(format_shape(&[3]), "(3,)");
        assert_eq!(format_shape(&[25, 3]), "(25, 3)");
    }

    #[test]
    fn footer_says_whether_more_remain() {
        assert_eq!(format_footer(10, 25), "10 of 25 shown, more remain");
        assert_eq!(format_footer(25, 25), "25 of 25 shown");
        assert_eq!(format_footer(1000, 12000), "1,000 of 12,000 shown, more remain");
    }

    #[test]
    fn children_show_kind_and_shape() {
        let group = Child {
            name: "weather".into(),
            node: Node::Group("/weather".into()),
        };
        let dataset = Child {
            name: "meta".into(),
            node: Node::Dataset(DatasetInfo::new("/meta", vec![3], DType::Int { bits: 64, signed: true })),
        };
        assert_eq!(format_child(1, &group), "1. Group: weather/");
        assert_eq!(
            format_child(2, &dataset),
            "2. Dataset: meta (shape: (3,), dtype: int64)"
        );
    }

    #[test]
    fn attribute_keys_align_by_display_width() {
        let attrs: AttributeMap = [
            ("a", AttrValue::Int(1)),
            ("名前", AttrValue::Text("x".into())),
        ]
        .into_iter()
        .collect();

        let lines = format_attributes(&attrs, 80);
        assert_eq!(lines, vec!["a   : 1", "名前: x"]);
    }

    #[test]
    fn long_values_are_truncated() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
    }

    #[test]
    fn rows_print_per_row_or_per_element() {
        let flat = Rows::from_shape_vec(IxDyn(&[2]), vec![Cell::Int(1), Cell::Int(2)]).unwrap();
        assert_eq!(format_rows(&flat), vec!["1", "2"]);

        let table = Rows::from_shape_vec(
            IxDyn(&[2, 2]),
            vec![Cell::Int(1), Cell::Int(2), Cell::Int(3), Cell::Int(4)],
        )
        .unwrap();
        assert_eq!(format_rows(&table), vec!["[1, 2]", "[3, 4]"]);
    }
}
