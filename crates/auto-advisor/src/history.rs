use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diagnosis::{Category, Diagnosis};
use crate::emissions::{EmissionEstimate, VehicleProfile};

/// Opaque identifier handed out when a record is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub fn next_record_id() -> RecordId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecordId(format!("rec-{id:06}"))
}

/// Emission prediction as submitted, before the store assigns identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmissionRecord {
    pub vehicle_type: String,
    pub fuel_type: String,
    pub engine_size: f64,
    pub year: i32,
    pub co2_emissions: f64,
    pub nox_emissions: f64,
    pub pm_emissions: f64,
}

impl NewEmissionRecord {
    /// Keeps the caller's original vehicle and fuel strings, not the substituted ones.
    pub fn from_estimate(profile: &VehicleProfile, estimate: &EmissionEstimate) -> Self {
        Self {
            vehicle_type: profile.vehicle_type.clone(),
            fuel_type: profile.fuel_type.clone(),
            engine_size: profile.engine_size,
            year: profile.year,
            co2_emissions: estimate.co2,
            nox_emissions: estimate.nox,
            pm_emissions: estimate.pm,
        }
    }

    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> EmissionRecord {
        EmissionRecord {
            id,
            vehicle_type: self.vehicle_type,
            fuel_type: self.fuel_type,
            engine_size: self.engine_size,
            year: self.year,
            co2_emissions: self.co2_emissions,
            nox_emissions: self.nox_emissions,
            pm_emissions: self.pm_emissions,
            created_at,
        }
    }
}

/// Stored, immutable emission prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionRecord {
    pub id: RecordId,
    pub vehicle_type: String,
    pub fuel_type: String,
    pub engine_size: f64,
    pub year: i32,
    pub co2_emissions: f64,
    pub nox_emissions: f64,
    pub pm_emissions: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewChatRecord {
    pub user_message: String,
    pub bot_response: String,
    pub issue_category: Category,
}

impl NewChatRecord {
    pub fn from_diagnosis(message: &str, diagnosis: &Diagnosis) -> Self {
        Self {
            user_message: message.to_string(),
            bot_response: diagnosis.response.clone(),
            issue_category: diagnosis.category,
        }
    }

    pub fn into_record(self, id: RecordId, timestamp: DateTime<Utc>) -> ChatRecord {
        ChatRecord {
            id,
            user_message: self.user_message,
            bot_response: self.bot_response,
            issue_category: self.issue_category,
            timestamp,
        }
    }
}

/// Stored chat exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRecord {
    pub id: RecordId,
    pub user_message: String,
    pub bot_response: String,
    pub issue_category: Category,
    pub timestamp: DateTime<Utc>,
}

/// Append-only storage for predictions and chat exchanges.
///
/// Implementations never update or delete what they were given; listings come
/// back newest first.
pub trait RecordStore: Send + Sync {
    fn save_emission(&self, record: NewEmissionRecord) -> Result<EmissionRecord, RecordStoreError>;
    fn save_chat(&self, record: NewChatRecord) -> Result<ChatRecord, RecordStoreError>;
    fn recent_emissions(&self, limit: usize) -> Result<Vec<EmissionRecord>, RecordStoreError>;
    fn recent_chats(&self, limit: usize) -> Result<Vec<ChatRecord>, RecordStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}
