/// Dataset construction and lookup errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset has no columns")]
    Empty,

    #[error("column {column} has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column name: {column}")]
    DuplicateColumn { column: String },

    #[error("column {column} contains a non-finite value at row {row}")]
    NonFiniteValue { column: String, row: usize },

    #[error("unknown column: {column}")]
    UnknownColumn { column: String },
}
