use super::{apply, sort_by_id, FilterCriteria, SortOrder};
use crate::models::PropertyRecord;

/// State behind the property list page: the last fetched listings, the
/// active filters and the sort toggle.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    records: Vec<PropertyRecord>,
    pub criteria: FilterCriteria,
    sort: SortOrder,
}

impl ListingView {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Swap in a fresh fetch; criteria and sort are kept
    pub fn replace_records(&mut self, records: Vec<PropertyRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort = order;
    }

    /// Advance the sort toggle by one step and return the new state
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort = self.sort.advance();
        self.sort
    }

    /// Filtered, then sorted
    pub fn visible(&self) -> Vec<&PropertyRecord> {
        let mut result = apply(&self.records, &self.criteria);
        sort_by_id(&mut result, self.sort);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(ids: &[&str]) -> ListingView {
        ListingView::new(
            ids.iter()
                .map(|id| PropertyRecord {
                    id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
        )
    }

    fn visible_ids(view: &ListingView) -> Vec<String> {
        view.visible().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn sort_toggle_cycle_restores_fetch_order() {
        let mut view = view(&["c", "a", "b"]);
        assert_eq!(visible_ids(&view), vec!["c", "a", "b"]);
        view.toggle_sort();
        assert_eq!(visible_ids(&view), vec!["a", "b", "c"]);
        view.toggle_sort();
        assert_eq!(visible_ids(&view), vec!["c", "b", "a"]);
        view.toggle_sort();
        assert_eq!(visible_ids(&view), vec!["c", "a", "b"]);
    }

    #[test]
    fn filters_apply_before_sort() {
        let mut view = view(&["c", "a", "b"]);
        view.criteria.search = Some("zzz".into());
        view.toggle_sort();
        assert!(view.visible().is_empty());
        view.criteria = FilterCriteria::default();
        assert_eq!(visible_ids(&view), vec!["a", "b", "c"]);
    }

    #[test]
    fn replacing_records_keeps_sort() {
        let mut view = view(&["b", "a"]);
        view.set_sort_order(SortOrder::Descending);
        view.replace_records(vec![
            PropertyRecord { id: "x".into(), ..Default::default() },
            PropertyRecord { id: "y".into(), ..Default::default() },
        ]);
        assert_eq!(visible_ids(&view), vec!["y", "x"]);
    }
}
