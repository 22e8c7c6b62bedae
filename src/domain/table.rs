//! View state for the data table: search text, sort indicator, row selection
//! and the externally driven pagination descriptor.

use std::ops::Range;

pub type RowId = u32;

/// Records that can be projected into table rows.
pub trait TableRecord {
    fn row_id(&self) -> RowId;

    /// Display value for a column accessor key, `None` when the record has no such field.
    fn field(&self, accessor: &str) -> Option<String>;

    fn to_row(&self, columns: &[Column]) -> TableRow {
        TableRow {
            id: self.row_id(),
            cells: columns
                .iter()
                .map(|column| {
                    let value = self.field(&column.accessor_key).unwrap_or_default();
                    (column.accessor_key.clone(), value)
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub id: RowId,
    pub cells: Vec<(String, String)>,
}

impl TableRow {
    pub fn field(&self, accessor: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(key, _)| key == accessor)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellRenderer {
    #[default]
    Text,
    StatusBadge,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub id: String,
    pub header: String,
    pub accessor_key: String,
    pub sortable: bool,
    pub cell: CellRenderer,
}

impl Column {
    pub fn new(id: &str, header: &str, accessor_key: &str) -> Self {
        Self {
            id: id.to_string(),
            header: header.to_string(),
            accessor_key: accessor_key.to_string(),
            sortable: false,
            cell: CellRenderer::Text,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn with_cell(mut self, cell: CellRenderer) -> Self {
        self.cell = cell;
        self
    }
}

/// Full subscriber column set used by the subscriber list.
pub fn subscriber_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Customer Name", "name").sortable(),
        Column::new("address", "Address", "address"),
        Column::new("signupDate", "Signup Date", "signupDate").sortable(),
        Column::new("status", "Status", "status")
            .sortable()
            .with_cell(CellRenderer::StatusBadge),
        Column::new("city", "City", "city"),
        Column::new("zone", "Zone", "zone"),
    ]
}

/// Compact column set used for the dashboard's recent subscribers.
pub fn recent_subscriber_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", "name"),
        Column::new("address", "Address", "address"),
        Column::new("status", "Status", "status"),
        Column::new("signupDate", "Signup Date", "signupDate"),
        Column::new("zone", "Zone", "zone"),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

/// Next sort state after clicking the header bound to `key`.
pub fn next_sort(current: Option<&SortConfig>, key: &str) -> SortConfig {
    let direction = match current {
        Some(config) if config.key == key && config.direction == SortDirection::Asc => {
            SortDirection::Desc
        }
        _ => SortDirection::Asc,
    };
    SortConfig {
        key: key.to_string(),
        direction,
    }
}

/// Selected row ids in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<RowId>,
}

impl Selection {
    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn toggle(&mut self, id: RowId) {
        if self.contains(id) {
            self.ids.retain(|selected| *selected != id);
        } else {
            self.ids.push(id);
        }
    }

    /// Clears when every visible row is selected, otherwise selects exactly the visible rows.
    pub fn toggle_all(&mut self, visible: &[RowId]) {
        if self.ids.len() == visible.len() {
            self.ids.clear();
        } else {
            self.ids = visible.to_vec();
        }
    }

    pub fn has_outside(&self, visible: &[RowId]) -> bool {
        self.ids.iter().any(|id| !visible.contains(id))
    }

    pub fn retain_visible(&mut self, visible: &[RowId]) {
        self.ids.retain(|id| visible.contains(id));
    }

    /// Header checkbox state.
    pub fn covers(&self, row_count: usize) -> bool {
        self.ids.len() == row_count && row_count > 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableState {
    pub search: String,
    pub sort: Option<SortConfig>,
    pub selection: Selection,
}

impl TableState {
    pub fn set_search(&mut self, value: impl Into<String>) {
        self.search = value.into();
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = Some(next_sort(self.sort.as_ref(), key));
    }

    pub fn sort_indicator(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|config| config.key == key)
            .map(|config| config.direction)
    }

    pub fn toggle_row(&mut self, id: RowId) {
        self.selection.toggle(id);
    }

    pub fn toggle_all(&mut self, visible: &[RowId]) {
        self.selection.toggle_all(visible);
    }

    /// Drops selected ids that are no longer displayed. Returns whether anything changed.
    pub fn sync_visible(&mut self, visible: &[RowId]) -> bool {
        if !self.selection.has_outside(visible) {
            return false;
        }
        self.selection.retain_visible(visible);
        true
    }
}

/// Pairs each supplied row with its selection flag. Sort state only drives the
/// header indicator; rows keep the order the caller supplied.
pub fn row_views(rows: &[TableRow], state: &TableState) -> Vec<(TableRow, bool)> {
    rows.iter()
        .map(|row| (row.clone(), state.selection.contains(row.id)))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkAction {
    pub label: String,
    pub action: String,
}

impl BulkAction {
    pub fn new(label: &str, action: &str) -> Self {
        Self {
            label: label.to_string(),
            action: action.to_string(),
        }
    }
}

pub fn default_bulk_actions() -> Vec<BulkAction> {
    vec![
        BulkAction::new("Send Notification", "notify"),
        BulkAction::new("Export Selected", "export"),
        BulkAction::new("Delete Selected", "delete"),
    ]
}

/// What the table records when a bulk action is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkActionRecord {
    pub action: String,
    pub rows: Vec<RowId>,
}

pub fn bulk_action_record(action: &str, selection: &Selection) -> BulkActionRecord {
    BulkActionRecord {
        action: action.to_string(),
        rows: selection.ids().to_vec(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Notify,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Notify];

    pub fn kind(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Notify => "notify",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View Details",
            RowAction::Edit => "Edit",
            RowAction::Notify => "Send Notification",
        }
    }
}

/// One clickable control in the pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    Previous,
    Page(usize),
    Next,
}

/// Externally driven pagination. The table never slices rows itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 10,
            page_count: 5,
        }
    }
}

impl Pagination {
    /// Descriptor for `total` rows split into pages of `page_size`, with the
    /// requested index pulled back onto the last page when it overshoots.
    pub fn for_total(total: usize, page_index: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = total.div_ceil(page_size);
        let page_index = match page_count {
            0 => 0,
            count => page_index.min(count - 1),
        };
        Self {
            page_index,
            page_size,
            page_count,
        }
    }

    pub fn slice<T: Clone>(&self, rows: &[T]) -> Vec<T> {
        rows.iter()
            .skip(self.page_index.saturating_mul(self.page_size))
            .take(self.page_size)
            .cloned()
            .collect()
    }

    pub fn pages(&self) -> Range<usize> {
        0..self.page_count
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.page_index == index
    }

    pub fn previous_disabled(&self) -> bool {
        self.page_index == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.page_count.checked_sub(1) == Some(self.page_index)
    }

    pub fn previous_target(&self) -> Option<usize> {
        self.page_index.checked_sub(1)
    }

    pub fn next_target(&self) -> Option<usize> {
        let next = self.page_index + 1;
        (next < self.page_count).then_some(next)
    }

    /// Index a control leads to, `None` when the control is inert.
    pub fn target(&self, control: PageControl) -> Option<usize> {
        match control {
            PageControl::Previous => self.previous_target(),
            PageControl::Page(index) => Some(index),
            PageControl::Next => self.next_target(),
        }
    }

    /// Reports a click on `control` to `on_change`, at most once.
    pub fn press(&self, control: PageControl, mut on_change: impl FnMut(usize)) {
        if let Some(index) = self.target(control) {
            on_change(index);
        }
    }

    /// First and last entry numbers shown in the footer, 1-based.
    pub fn showing_range(&self, total: usize) -> (usize, usize) {
        let start = self.page_index * self.page_size + 1;
        let end = ((self.page_index + 1) * self.page_size).min(total);
        (start, end)
    }

    pub fn summary(&self, total: usize) -> String {
        let (start, end) = self.showing_range(total);
        format!("Showing {start} to {end} of {total} entries")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: &[RowId]) -> Vec<TableRow> {
        ids.iter()
            .map(|id| TableRow {
                id: *id,
                cells: vec![("name".to_string(), format!("row {id}"))],
            })
            .collect()
    }

    #[test]
    fn header_clicks_cycle_sort_direction() {
        let mut state = TableState::default();
        assert_eq!(state.sort_indicator("name"), None);

        state.toggle_sort("name");
        assert_eq!(state.sort_indicator("name"), Some(SortDirection::Asc));

        state.toggle_sort("name");
        assert_eq!(state.sort_indicator("name"), Some(SortDirection::Desc));

        state.toggle_sort("name");
        assert_eq!(state.sort_indicator("name"), Some(SortDirection::Asc));
    }

    #[test]
    fn switching_sort_key_resets_to_ascending() {
        let mut state = TableState::default();
        state.toggle_sort("name");
        state.toggle_sort("name");
        state.toggle_sort("signupDate");

        assert_eq!(state.sort_indicator("name"), None);
        assert_eq!(
            state.sort,
            Some(SortConfig {
                key: "signupDate".to_string(),
                direction: SortDirection::Asc,
            })
        );
    }

    #[test]
    fn sort_state_never_reorders_rows() {
        let input = rows(&[3, 1, 2]);
        let mut state = TableState::default();
        for key in ["name", "name", "signupDate", "status"] {
            state.toggle_sort(key);
            let order: Vec<_> = row_views(&input, &state).iter().map(|(row, _)| row.id).collect();
            assert_eq!(order, vec![3, 1, 2]);
        }
    }

    #[test]
    fn select_all_toggles_between_empty_and_visible() {
        let visible = [1, 2, 3];
        let mut state = TableState::default();

        state.toggle_all(&visible);
        assert_eq!(state.selection.ids(), &visible);
        assert!(state.selection.covers(visible.len()));

        state.toggle_all(&visible);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn partial_selection_then_select_all_selects_everything() {
        let visible = [1, 2, 3];
        let mut state = TableState::default();
        state.toggle_row(2);
        state.toggle_all(&visible);
        assert_eq!(state.selection.ids(), &visible);
    }

    #[test]
    fn row_toggle_adds_then_removes() {
        let mut state = TableState::default();
        state.toggle_row(4);
        state.toggle_row(1);
        assert_eq!(state.selection.ids(), &[4, 1]);
        state.toggle_row(4);
        assert_eq!(state.selection.ids(), &[1]);
        assert!(!state.selection.covers(0));
    }

    #[test]
    fn selection_is_pruned_to_visible_rows() {
        let mut selection = Selection::default();
        selection.toggle(1);
        selection.toggle(7);
        assert!(selection.has_outside(&[1, 2]));
        selection.retain_visible(&[1, 2]);
        assert_eq!(selection.ids(), &[1]);
        assert!(!selection.has_outside(&[1, 2]));
    }

    #[test]
    fn replacing_rows_drops_hidden_selection() {
        let mut state = TableState::default();
        state.toggle_all(&[1, 2, 3]);

        assert!(!state.sync_visible(&[1, 2, 3, 4]));
        assert_eq!(state.selection.ids(), &[1, 2, 3]);

        assert!(state.sync_visible(&[3, 4]));
        assert_eq!(state.selection.ids(), &[3]);
        assert!(!state.selection.covers(2));

        state.toggle_all(&[3, 4]);
        assert_eq!(state.selection.ids(), &[3, 4]);
    }

    #[test]
    fn row_views_flag_selected_rows() {
        let mut state = TableState::default();
        state.toggle_row(2);
        let flags: Vec<_> = row_views(&rows(&[1, 2]), &state)
            .into_iter()
            .map(|(_, selected)| selected)
            .collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[test]
    fn bulk_record_captures_current_selection() {
        let mut selection = Selection::default();
        selection.toggle(5);
        selection.toggle(2);
        let record = bulk_action_record("export", &selection);
        assert_eq!(record.action, "export");
        assert_eq!(record.rows, vec![5, 2]);
    }

    #[test]
    fn pagination_disables_at_the_edges() {
        let first = Pagination { page_index: 0, page_size: 10, page_count: 3 };
        assert!(first.previous_disabled());
        assert!(!first.next_disabled());
        assert_eq!(first.previous_target(), None);
        assert_eq!(first.next_target(), Some(1));

        let last = Pagination { page_index: 2, ..first };
        assert!(!last.previous_disabled());
        assert!(last.next_disabled());
        assert_eq!(last.previous_target(), Some(1));
        assert_eq!(last.next_target(), None);
    }

    #[test]
    fn page_link_reports_its_index_once() {
        let pagination = Pagination { page_index: 1, page_size: 10, page_count: 4 };
        for index in pagination.pages() {
            let mut calls = Vec::new();
            pagination.press(PageControl::Page(index), |target| calls.push(target));
            assert_eq!(calls, vec![index]);
        }
    }

    #[test]
    fn edge_controls_report_only_when_enabled() {
        let first = Pagination { page_index: 0, page_size: 10, page_count: 2 };
        let mut calls = Vec::new();
        first.press(PageControl::Previous, |target| calls.push(target));
        first.press(PageControl::Next, |target| calls.push(target));
        assert_eq!(calls, vec![1]);

        let last = Pagination { page_index: 1, ..first };
        calls.clear();
        last.press(PageControl::Next, |target| calls.push(target));
        last.press(PageControl::Previous, |target| calls.push(target));
        assert_eq!(calls, vec![0]);
    }

    #[test]
    fn empty_page_count_never_advances() {
        let empty = Pagination { page_index: 0, page_size: 10, page_count: 0 };
        assert!(empty.previous_disabled());
        assert!(!empty.next_disabled());
        assert_eq!(empty.next_target(), None);
        assert_eq!(empty.pages().count(), 0);
    }

    #[test]
    fn footer_summary_matches_page_window() {
        let pagination = Pagination::default();
        assert_eq!(pagination.summary(5), "Showing 1 to 5 of 5 entries");

        let second = Pagination { page_index: 1, page_size: 10, page_count: 3 };
        assert_eq!(second.summary(24), "Showing 11 to 20 of 24 entries");
    }

    #[test]
    fn for_total_clamps_index_and_slices() {
        let pagination = Pagination::for_total(23, 9, 10);
        assert_eq!(pagination.page_count, 3);
        assert_eq!(pagination.page_index, 2);

        let values: Vec<u32> = (0..23).collect();
        assert_eq!(pagination.slice(&values), vec![20, 21, 22]);

        let none = Pagination::for_total(0, 4, 10);
        assert_eq!((none.page_index, none.page_count), (0, 0));
        assert!(none.slice(&values[..0]).is_empty());
    }

    #[test]
    fn to_row_follows_column_accessors() {
        struct Plain;
        impl TableRecord for Plain {
            fn row_id(&self) -> RowId {
                9
            }
            fn field(&self, accessor: &str) -> Option<String> {
                (accessor == "name").then(|| "Plain".to_string())
            }
        }

        let row = Plain.to_row(&recent_subscriber_columns());
        assert_eq!(row.id, 9);
        assert_eq!(row.field("name"), Some("Plain"));
        assert_eq!(row.field("zone"), Some(""));
        assert_eq!(row.cells.len(), 5);
    }
}
