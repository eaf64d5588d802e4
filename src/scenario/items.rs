//! Sample item types written and read by the scenarios
//!
//! Two shapes with different partitioning attributes: documents are
//! partitioned by their document type, employees by their department.
//! Both generate fresh identifiers and a fresh partition key per instance,
//! so every generated item lands in its own partition unless a scenario
//! arranges otherwise.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::ItemPayload;

/// Type tag documents are stored under.
pub const DOCUMENT_TYPE_TAG: &str = "document";

/// Type tag employees are stored under.
pub const EMPLOYEE_TYPE_TAG: &str = "employee";

/// A document, partitioned by its document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub document_name: String,
    pub document_creator: String,
    pub document_type: String,
}

impl Document {
    /// Generates a document with a fresh id and a fresh partition key.
    pub fn generate() -> Self {
        let id = Uuid::new_v4().to_string();
        Self {
            document_name: format!("document-{}", &id[..8]),
            document_creator: "scenario-suite".to_string(),
            document_type: Uuid::new_v4().to_string(),
            id,
        }
    }

    /// The partition key value that routes this document.
    pub fn partition_key(&self) -> &str {
        &self.document_type
    }

    /// The stored payload for this document.
    pub fn payload(&self) -> ItemPayload {
        ItemPayload::new(
            DOCUMENT_TYPE_TAG,
            serde_json::to_value(self).expect("document serialization cannot fail"),
        )
    }
}

/// An employee, partitioned by department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
}

impl Employee {
    /// Generates an employee with a fresh id and a fresh department.
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: "Ada".to_string(),
            last_name: "Gray".to_string(),
            department: Uuid::new_v4().to_string(),
        }
    }

    /// The partition key value that routes this employee.
    pub fn partition_key(&self) -> &str {
        &self.department
    }

    /// The stored payload for this employee.
    pub fn payload(&self) -> ItemPayload {
        ItemPayload::new(
            EMPLOYEE_TYPE_TAG,
            serde_json::to_value(self).expect("employee serialization cannot fail"),
        )
    }
}
