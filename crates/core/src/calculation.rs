//! Calculation Domain Entity
//!
//! The immutable record of one completed arithmetic operation. The
//! persistence layer assigns `id` and `created_at`; until then both
//! are `None`.

use serde::{Deserialize, Serialize};

/// Arithmetic operation tag with stable lowercase wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Divide => "divide",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "divide" => Ok(Operation::Divide),
            other => Err(format!("unknown operation: {}", other)),
        }
    }
}

/// Completed calculation record
///
/// Immutable once constructed; there is no update path. A record only
/// becomes observable to callers after the repository acknowledges the
/// write and returns the stamped copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: Option<uuid::Uuid>,
    pub operation: Operation,
    pub operand_a: i32,
    pub operand_b: i32,
    pub result: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Calculation {
    /// Create an unpersisted record for a computed operation
    pub fn new(operation: Operation, operand_a: i32, operand_b: i32, result: i32) -> Self {
        Self {
            id: None,
            operation,
            operand_a,
            operand_b,
            result,
            created_at: None,
        }
    }

    /// Whether the persistence layer has stamped this record
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
