//! List page state and its reducer.
//!
//! The page keeps one `ListState` in a signal and only changes it through
//! [`ListState::apply`]. Every load gets a generation number; a result that
//! arrives for an older generation is dropped.

use contracts::domain::common::RecordId;
use contracts::shared::metadata::FieldMetadata;
use std::collections::{BTreeMap, BTreeSet};

use super::filter::{filter_rows, searchable_fields, sort_rows, FilterValue, Query, SortState};
use super::pagination::{clamp_page, paginate, total_pages, DEFAULT_PAGE_SIZE};
use super::references::ReferenceData;
use super::row::Row;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Banner shown above the table after a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    Loaded {
        generation: u64,
        rows: Vec<Row>,
        references: ReferenceData,
    },
    LoadFailed {
        generation: u64,
        message: String,
    },
    /// The mutation that took this generation failed; the rows stay as they were
    LoadAbandoned { generation: u64 },
    SearchChanged(String),
    TabChanged(Option<String>),
    FilterChanged {
        field: &'static str,
        value: Option<FilterValue>,
    },
    SortBy(&'static str),
    PageRequested(usize),
    PageSizeChanged(usize),
    SelectionToggled(RecordId),
    /// Select (true) or clear (false) every row of the visible page
    SelectAllOnPage(bool),
    ClearSelection,
    Notice(Option<Notice>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub fields: &'static [FieldMetadata],
    pub phase: Phase,
    pub rows: Vec<Row>,
    pub references: ReferenceData,
    pub search: String,
    pub tab_field: Option<&'static str>,
    pub tab: Option<String>,
    pub filters: BTreeMap<&'static str, FilterValue>,
    pub sort: Option<SortState>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub selected: BTreeSet<RecordId>,
    pub generation: u64,
    pub notice: Option<Notice>,
}

impl ListState {
    pub fn new(fields: &'static [FieldMetadata], tab_field: Option<&'static str>) -> Self {
        Self {
            fields,
            phase: Phase::Idle,
            rows: Vec::new(),
            references: ReferenceData::default(),
            search: String::new(),
            tab_field,
            tab: None,
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selected: BTreeSet::new(),
            generation: 0,
            notice: None,
        }
    }

    /// Start a load and return its generation
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.generation
    }

    /// Returns false when the action was ignored (stale load result)
    pub fn apply(&mut self, action: ListAction) -> bool {
        match action {
            ListAction::Loaded {
                generation,
                rows,
                references,
            } => {
                if generation != self.generation {
                    return false;
                }
                self.rows = rows;
                self.references = references;
                self.phase = Phase::Loaded;
                let loaded: BTreeSet<RecordId> = self.rows.iter().map(|r| r.id).collect();
                self.selected.retain(|id| loaded.contains(id));
                self.page = clamp_page(self.page, self.total_pages());
            }
            ListAction::LoadFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    return false;
                }
                self.phase = Phase::Failed(message);
            }
            ListAction::LoadAbandoned { generation } => {
                if generation != self.generation {
                    return false;
                }
                if self.phase == Phase::Loading {
                    self.phase = Phase::Loaded;
                }
            }
            ListAction::SearchChanged(search) => {
                self.search = search;
                self.reset_window();
            }
            ListAction::TabChanged(tab) => {
                self.tab = tab;
                self.reset_window();
            }
            ListAction::FilterChanged { field, value } => {
                match value {
                    Some(value) => self.filters.insert(field, value),
                    None => self.filters.remove(field),
                };
                self.reset_window();
            }
            ListAction::SortBy(field) => {
                self.sort = Some(match self.sort {
                    Some(sort) if sort.field == field => SortState {
                        field,
                        ascending: !sort.ascending,
                    },
                    _ => SortState {
                        field,
                        ascending: true,
                    },
                });
            }
            ListAction::PageRequested(page) => {
                self.page = clamp_page(page, self.total_pages());
            }
            ListAction::PageSizeChanged(size) => {
                self.page_size = size.max(1);
                self.reset_window();
            }
            ListAction::SelectionToggled(id) => {
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
            }
            ListAction::SelectAllOnPage(select) => {
                let ids: Vec<RecordId> = self.page_rows().iter().map(|r| r.id).collect();
                for id in ids {
                    if select {
                        self.selected.insert(id);
                    } else {
                        self.selected.remove(&id);
                    }
                }
            }
            ListAction::ClearSelection => self.selected.clear(),
            ListAction::Notice(notice) => self.notice = notice,
        }
        true
    }

    fn reset_window(&mut self) {
        self.page = 1;
        self.selected.clear();
    }

    /// Rows after search, tab and filters, in display order
    pub fn visible_rows(&self) -> Vec<Row> {
        let query = Query {
            search: &self.search,
            searchable: searchable_fields(self.fields),
            tab: self.tab_field.zip(self.tab.as_deref()),
            filters: Some(&self.filters),
        };
        let mut rows = filter_rows(&self.rows, &query);
        if let Some(sort) = self.sort {
            sort_rows(&mut rows, sort, self.fields);
        }
        rows
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible_rows().len(), self.page_size)
    }

    pub fn page_rows(&self) -> Vec<Row> {
        paginate(&self.visible_rows(), self.page, self.page_size).to_vec()
    }

    pub fn selected_rows(&self) -> Vec<Row> {
        self.visible_rows()
            .into_iter()
            .filter(|r| self.selected.contains(&r.id))
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}
