use auto_advisor::config::DEFAULT_HISTORY_RETENTION;
use auto_advisor::history::{
    next_record_id, ChatRecord, EmissionRecord, NewChatRecord, NewEmissionRecord, RecordStore,
    RecordStoreError,
};
use auto_advisor::rng::EntropySource;
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) records: Arc<dyn RecordStore>,
    pub(crate) entropy: EntropySource,
    pub(crate) history_limit: usize,
}

/// Process-local history; contents are lost on restart.
///
/// Each history keeps at most `retention` records and drops the oldest first.
#[derive(Clone)]
pub(crate) struct MemoryRecordStore {
    retention: usize,
    emissions: Arc<Mutex<VecDeque<EmissionRecord>>>,
    chats: Arc<Mutex<VecDeque<ChatRecord>>>,
}

impl MemoryRecordStore {
    pub(crate) fn new(retention: usize) -> Self {
        Self {
            retention,
            emissions: Arc::new(Mutex::new(VecDeque::new())),
            chats: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    fn push<T>(&self, records: &Mutex<VecDeque<T>>, record: T) -> Result<(), RecordStoreError> {
        let mut records = lock(records)?;
        records.push_back(record);
        while records.len() > self.retention {
            records.pop_front();
        }
        Ok(())
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_RETENTION)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RecordStoreError> {
    mutex
        .lock()
        .map_err(|_| RecordStoreError::Unavailable("history mutex poisoned".to_string()))
}

fn newest_first<T: Clone>(records: &VecDeque<T>, limit: usize) -> Vec<T> {
    records.iter().rev().take(limit).cloned().collect()
}

impl RecordStore for MemoryRecordStore {
    fn save_emission(&self, record: NewEmissionRecord) -> Result<EmissionRecord, RecordStoreError> {
        let stored = record.into_record(next_record_id(), Utc::now());
        self.push(&self.emissions, stored.clone())?;
        Ok(stored)
    }

    fn save_chat(&self, record: NewChatRecord) -> Result<ChatRecord, RecordStoreError> {
        let stored = record.into_record(next_record_id(), Utc::now());
        self.push(&self.chats, stored.clone())?;
        Ok(stored)
    }

    fn recent_emissions(&self, limit: usize) -> Result<Vec<EmissionRecord>, RecordStoreError> {
        Ok(newest_first(&*lock(&self.emissions)?, limit))
    }

    fn recent_chats(&self, limit: usize) -> Result<Vec<ChatRecord>, RecordStoreError> {
        Ok(newest_first(&*lock(&self.chats)?, limit))
    }
}
