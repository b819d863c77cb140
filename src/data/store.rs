//! In-memory, insertion-ordered record storage for one session.

use super::models::SampleRecord;

#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<SampleRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, returning it as stored.
    pub fn push(&mut self, record: SampleRecord) -> &SampleRecord {
        self.records.push(record);
        let last = self.records.len() - 1;
        &self.records[last]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SampleRecord> {
        self.records.get(index)
    }

    /// Position of the record carrying `tracking_number`.
    pub fn position(&self, tracking_number: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.tracking_number() == tracking_number)
    }

    pub fn find(&self, tracking_number: &str) -> Option<&SampleRecord> {
        self.position(tracking_number).map(|i| &self.records[i])
    }

    pub fn find_mut(&mut self, tracking_number: &str) -> Option<&mut SampleRecord> {
        let index = self.position(tracking_number)?;
        self.records.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SampleRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[SampleRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a SampleRecord;
    type IntoIter = std::slice::Iter<'a, SampleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
