use serde::{Deserialize, Serialize};

use crate::modules::clients::models::Client;
use crate::modules::expenses::models::Expense;
use crate::modules::time_tracking::models::TimeEntry;

/// Point-in-time copy of the collaborator's records.
///
/// Reports read it and never write back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSnapshot {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub gst_registered: bool,
}

impl RecordSnapshot {
    pub fn find_client(&self, client_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == client_id)
    }
}
