use datatables::TableError;
use vercel_lib::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row {index} is out of range ({len} projects)")]
    RowOutOfRange { index: usize, len: usize },
}
