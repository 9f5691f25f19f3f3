//! Template variables for mail-merge placeholders.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A template variable: what the panel shows, and the literal token it inserts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub label: SmolStr,
    /// Literal token inserted at the cursor, e.g. `{{firstName}}`.
    #[serde(rename = "value")]
    pub token: SmolStr,
}

impl Variable {
    pub fn new(label: impl Into<SmolStr>, token: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Variables offered when the host doesn't supply a list.
pub fn default_variables() -> Vec<Variable> {
    vec![
        Variable::new("First Name", "{{firstName}}"),
        Variable::new("Last Name", "{{lastName}}"),
        Variable::new("Email", "{{email}}"),
        Variable::new("Company", "{{company}}"),
        Variable::new("Unsubscribe Link", "{{unsubscribe}}"),
    ]
}
