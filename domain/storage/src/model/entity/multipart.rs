use serde::{Deserialize, Serialize};

use crate::model::vo::PartPlan;

/// Multipart upload session, alive for one orchestration call.
///
/// The upload id is issued by the store and scopes every part, complete and
/// abort call of this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSession {
    /// Store issued upload id.
    pub upload_id: String,
    /// Destination object key.
    pub key: String,
    /// Bytes per part, the last part may be shorter.
    pub part_size: usize,
    pub part_count: usize,
}

impl UploadSession {
    pub fn new(upload_id: String, key: String, plan: PartPlan) -> Self {
        Self {
            upload_id,
            key,
            part_size: plan.part_size,
            part_count: plan.part_count,
        }
    }

    pub fn plan(&self) -> PartPlan {
        PartPlan {
            part_size: self.part_size,
            part_count: self.part_count,
        }
    }
}
