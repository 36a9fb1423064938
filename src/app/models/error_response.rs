use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Wire shape of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub validation: HashMap<String, String>,
}
