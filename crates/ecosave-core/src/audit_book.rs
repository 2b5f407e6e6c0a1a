//! In-memory audit collection backing the staff dashboard.
//!
//! Records are kept newest first and live only as long as the book. The book
//! also tracks which audits have an analysis outstanding so a second request
//! for the same record can be refused while the first is running.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::CoreError;
use crate::models::audit::{AuditRecord, AuditStatus, NewAudit};

#[derive(Debug, Default)]
pub struct AuditBook {
    records: Vec<AuditRecord>,
    in_flight: HashSet<Uuid>,
}

impl AuditBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// A book holding the sample audit the dashboard opens with.
    pub fn with_demo_record() -> Self {
        let mut book = Self::new();
        book.insert(demo_record());
        book
    }

    /// Save a new audit as `pending` at the front of the book.
    pub fn create(&mut self, new: NewAudit, date: jiff::civil::Date) -> AuditRecord {
        let record = new.into_record(Uuid::now_v7(), date);
        self.insert(record.clone());
        record
    }

    /// Put an existing record at the front of the book.
    pub fn insert(&mut self, record: AuditRecord) {
        self.records.insert(0, record);
    }

    /// All records, newest first.
    pub fn list(&self) -> &[AuditRecord] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&AuditRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mark an analysis as started and return a snapshot of the record to
    /// build the prompt from.
    ///
    /// Fails if the record is unknown, already analyzed, or already has an
    /// analysis outstanding.
    pub fn begin_analysis(&mut self, id: Uuid) -> Result<AuditRecord, CoreError> {
        let record = self.get(id).ok_or(CoreError::AuditNotFound(id))?;

        if !record.status.can_analyze() {
            return Err(CoreError::InvalidTransition {
                id,
                from: record.status,
            });
        }
        let snapshot = record.clone();

        if !self.in_flight.insert(id) {
            return Err(CoreError::AnalysisInFlight(id));
        }

        Ok(snapshot)
    }

    /// Attach the analysis text and move the record to `analyzed`.
    ///
    /// Clears the in-flight mark whether or not the transition succeeds.
    pub fn attach_analysis(
        &mut self,
        id: Uuid,
        analysis: String,
    ) -> Result<&AuditRecord, CoreError> {
        self.in_flight.remove(&id);

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::AuditNotFound(id))?;

        if !record.status.can_analyze() {
            return Err(CoreError::InvalidTransition {
                id,
                from: record.status,
            });
        }

        record.status = AuditStatus::Analyzed;
        record.ai_analysis = Some(analysis);
        Ok(record)
    }

    /// Drop the in-flight mark without touching the record, for an analysis
    /// that never produced a result. Returns whether a mark was held.
    pub fn abandon_analysis(&mut self, id: Uuid) -> bool {
        self.in_flight.remove(&id)
    }

    pub fn is_analysis_in_flight(&self, id: Uuid) -> bool {
        self.in_flight.contains(&id)
    }
}

/// The sample audit shown on a fresh dashboard.
pub fn demo_record() -> AuditRecord {
    AuditRecord {
        id: Uuid::now_v7(),
        client_name: "Bakkerij Jansen".to_string(),
        address: "Hoofdstraat 12, Amsterdam".to_string(),
        date: jiff::civil::date(2023, 10, 24),
        property_type: "Bedrijfspand (MKB)".to_string(),
        notes: "Oud pand uit 1980. Enkel glas aan de voorkant. Grote koelinstallaties \
                die 24/7 draaien. Dak is plat en geschikt voor zonnepanelen, ongeveer 80m2."
            .to_string(),
        status: AuditStatus::Completed,
        ai_analysis: None,
    }
}
