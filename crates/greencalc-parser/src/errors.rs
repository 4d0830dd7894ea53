use thiserror::Error;

use crate::model::TableKind;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("{table} table CSV error: {source}")]
    Csv {
        table: TableKind,
        #[source]
        source: csv::Error,
    },
}
