use serde::{Deserialize, Serialize};

/// The canonical task-assignment ticket.
///
/// Exactly the ten caller-supplied fields. The store-assigned identifier is
/// deliberately absent from the model: records are stored and listed without
/// it, so listings can never leak a store-internal id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub assignee: String,
    pub deadline: String,
    pub division: String,
    pub domain: String,
    pub link: String,
    pub note: String,
    pub request_name: String,
    pub status: String,
    pub tag: Vec<String>,
    pub list_input: Vec<InputPair>,
}

/// One input/output pair of a record's `list_input`.
///
/// Both keys are required; an element missing either is a validation
/// failure, never defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPair {
    pub input: String,
    pub output: String,
}
