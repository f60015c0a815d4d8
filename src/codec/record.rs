//! Record and row types for the flat node table

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Node id assigned during export; 0 is the root
pub type NodeId = u64;

/// One exported node: its parent, its fragment and its terminal flag
///
/// Ids are implicit: the n-th record in a list is node n (counting from 1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub parent_id: NodeId,
    pub fragment: String,
    pub terminal: bool,
}

impl Record {
    pub fn new(parent_id: NodeId, fragment: impl Into<String>, terminal: bool) -> Self {
        Record {
            parent_id,
            fragment: fragment.into(),
            terminal,
        }
    }
}

/// A record with its explicit id, in the layout handed to storage
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: NodeId,
    pub parent_id: NodeId,
    pub fragment: String,
    /// 1 if the node ends a stored string, else 0
    pub terminal: u8,
}

/// Number records sequentially from 1
pub fn to_rows(records: &[Record]) -> Vec<Row> {
    records
        .iter()
        .zip(1..)
        .map(|(record, id)| Row {
            id,
            parent_id: record.parent_id,
            fragment: record.fragment.clone(),
            terminal: u8::from(record.terminal),
        })
        .collect()
}

/// Strip ids from a row table, checking they run 1, 2, 3, ...
pub fn from_rows(rows: Vec<Row>) -> Result<Vec<Record>> {
    rows.into_iter()
        .zip(1..)
        .map(|(row, expected)| {
            if row.id != expected {
                return Err(Error::Corruption(format!(
                    "Row id {} out of sequence, expected {}",
                    row.id, expected
                )));
            }
            let terminal = match row.terminal {
                0 => false,
                1 => true,
                other => {
                    return Err(Error::Corruption(format!(
                        "Row {} has terminal flag {}",
                        row.id, other
                    )))
                }
            };
            Ok(Record {
                parent_id: row.parent_id,
                fragment: row.fragment,
                terminal,
            })
        })
        .collect()
}
