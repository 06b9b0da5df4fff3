use serde::{Deserialize, Serialize};

/// One row of the Annex A reference catalogue.
///
/// The catalogue carries both the 2013-revision identifiers (`old_*`) and the
/// 2022-revision identifiers (`new_*`); assessment and lookup key on
/// `new_control_id`. Controls introduced in 2022 have `old_control_id = "NEW"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlRecord {
    pub old_control_id: String,
    pub old_title: String,
    pub new_control_id: String,
    pub new_title: String,
    pub domain: String,
    pub description: String,
}
