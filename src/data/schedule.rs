use chrono::NaiveDateTime;

use super::model::DeliveryRecord;

/// Every scheduled delivery for one client, ordered by delivery time.
///
/// Built once from a fetch and never mutated afterwards. Records are sorted on
/// construction (stable, so equal timestamps keep their fetched order) because
/// the first/last queries, and with them the paging limits, depend on it.
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    records: Vec<DeliveryRecord>,
}

impl ScheduleIndex {
    pub fn new(mut records: Vec<DeliveryRecord>) -> Self {
        let sorted = records.windows(2).all(|w| w[0].delivery <= w[1].delivery);
        if !sorted {
            tracing::debug!(count = records.len(), "meals arrived out of order, sorting");
            records.sort_by_key(|r| r.delivery);
        }
        Self { records }
    }

    /// Records with `start <= delivery < end`, in delivery order.
    pub fn records_in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> &[DeliveryRecord] {
        let lo = self.records.partition_point(|r| r.delivery < start);
        let hi = self.records.partition_point(|r| r.delivery < end);
        if hi <= lo {
            return &[];
        }
        &self.records[lo..hi]
    }

    pub fn first_record(&self) -> Option<&DeliveryRecord> {
        self.records.first()
    }

    pub fn last_record(&self) -> Option<&DeliveryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
