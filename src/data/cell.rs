//! Element values read from datasets.

use ndarray::ArrayD;
use std::fmt;

/// One dataset element.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point.
    Float(f64),
    /// Raw fixed-width bytes, not yet decoded.
    Bytes(Vec<u8>),
    /// Decoded or natively textual value.
    Text(String),
}

impl Cell {
    /// Decode a byte cell as UTF-8, replacing invalid sequences and dropping
    /// trailing NUL padding. Other cells are returned unchanged.
    pub fn decoded(self) -> Cell {
        match self {
            Cell::Bytes(bytes) => {
                let end = bytes
                    .iter()
                    .rposition(|&b| b != 0)
                    .map_or(0, |i| i + 1);
                Cell::Text(String::from_utf8_lossy(&bytes[..end]).into_owned())
            }
            other => other,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::UInt(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bytes(v) => write!(f, "b{:?}", String::from_utf8_lossy(v)),
            Cell::Text(v) => f.write_str(v),
        }
    }
}

/// A slice of rows read from a dataset. Axis 0 is the row axis.
pub type Rows = ArrayD<Cell>;

/// Decode every byte cell in place.
pub fn decode_rows(rows: Rows) -> Rows {
    rows.mapv(Cell::decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    #[test]
    fn decoding_strips_padding_and_tolerates_bad_bytes() {
        let cell = Cell::Bytes(vec![b'a', b'b', 0, 0]).decoded();
        assert_eq!(cell, Cell::Text("ab".to_string()));

        let cell = Cell::Bytes(vec![b'x', 0xc3]).decoded();
        match cell {
            Cell::Text(s) => assert!(s.starts_with('x')),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn decode_rows_leaves_numbers_alone() {
        let rows = Rows::from_shape_vec(
            IxDyn(&[2]),
            vec![Cell::Int(4), Cell::Bytes(b"hi".to_vec())],
        )
        .unwrap();

        let decoded = decode_rows(rows);
        assert_eq!(decoded[IxDyn(&[0])], Cell::Int(4));
        assert_eq!(decoded[IxDyn(&[1])], Cell::Text("hi".to_string()));
    }
}
