// Tab Layout Records
// Measured geometry of each tab button, keyed by tab position
//
// Usage:
//   let mut layouts = LayoutRegistry::new();
//   layouts.report(0, TabLayoutRecord::new(10.0, 50.0));
//   if let Some(record) = layouts.get(0) {
//       println!("Tab 0 spans {}..{}", record.offset, record.end());
//   }

/// Horizontal geometry of one measured tab button, in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabLayoutRecord {
    /// Distance from the start of the strip content
    pub offset: f32,
    pub width: f32,
}

impl TabLayoutRecord {
    pub const fn new(offset: f32, width: f32) -> Self {
        Self { offset, width }
    }

    pub fn end(&self) -> f32 {
        self.offset + self.width
    }

    pub fn center(&self) -> f32 {
        self.offset + self.width / 2.0
    }

    /// Check if a strip coordinate falls inside this tab
    pub fn contains(&self, x: f32) -> bool {
        x >= self.offset && x < self.end()
    }

    fn is_valid(&self) -> bool {
        self.offset.is_finite() && self.width.is_finite() && self.width >= 0.0
    }
}

/// Sparse per-tab layout storage.
///
/// Entries are created the first time a tab is measured and updated when a later
/// layout pass reports different geometry. Individual entries are never removed;
/// only [`LayoutRegistry::clear`] (a remount) drops them.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    records: Vec<Option<TabLayoutRecord>>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the measured geometry for a tab.
    /// Returns true if the record was created or changed, false for identical
    /// or unusable (non-finite, negative width) input.
    pub fn report(&mut self, index: usize, record: TabLayoutRecord) -> bool {
        if !record.is_valid() {
            tracing::debug!(index, ?record, "ignoring invalid tab layout");
            return false;
        }

        if index >= self.records.len() {
            self.records.resize(index + 1, None);
        }

        let slot = &mut self.records[index];
        if *slot == Some(record) {
            return false;
        }
        *slot = Some(record);
        true
    }

    pub fn get(&self, index: usize) -> Option<TabLayoutRecord> {
        self.records.get(index).copied().flatten()
    }

    /// True when no tab has been measured yet
    pub fn is_empty(&self) -> bool {
        self.records.iter().all(Option::is_none)
    }

    /// Number of tabs with a record
    pub fn measured_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_some()).count()
    }

    /// Iterate over measured tabs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, TabLayoutRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| record.map(|r| (idx, r)))
    }

    /// Index of the tab under a strip coordinate, looking only at the first `limit` tabs
    pub fn index_at(&self, x: f32, limit: usize) -> Option<usize> {
        self.iter()
            .take_while(|(idx, _)| *idx < limit)
            .find(|(_, record)| record.contains(x))
            .map(|(idx, _)| idx)
    }

    /// True when any of the first `limit` tabs has been measured
    pub fn any_within(&self, limit: usize) -> bool {
        self.iter().any(|(idx, _)| idx < limit)
    }

    /// Right edge of the furthest measured tab among the first `limit` tabs
    pub fn content_width(&self, limit: usize) -> f32 {
        self.iter()
            .take_while(|(idx, _)| *idx < limit)
            .map(|(_, r)| r.end())
            .fold(0.0, f32::max)
    }

    /// Drop every record (full remount)
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
