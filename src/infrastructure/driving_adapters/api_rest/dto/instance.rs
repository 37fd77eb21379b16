//! Instance DTOs

use serde::Serialize;

use crate::domain::models::instance::InstanceSummary;

/// JSON body served on `/json`
#[derive(Debug, Serialize)]
pub struct InstanceSummaryDto {
    pub name: String,
    pub zone: String,
    pub private_ip: String,
}

impl From<InstanceSummary> for InstanceSummaryDto {
    fn from(summary: InstanceSummary) -> Self {
        Self {
            name: summary.vm_name().to_string(),
            zone: summary.zone().to_string(),
            private_ip: summary.private_ip().to_string(),
        }
    }
}
