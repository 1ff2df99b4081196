use contracts::domain::a008_report_line::ReportLine;
use contracts::domain::common::RecordId;

use crate::shared::crud::{FilterSpec, Resource, Row};

/// Tab keys of report-scoped pages: `a008_report_line_<report id>`
pub const REPORT_LINES_TAB_PREFIX: &str = "a008_report_line_";

pub fn report_lines_tab_key(report_id: RecordId) -> String {
    format!("{}{}", REPORT_LINES_TAB_PREFIX, report_id)
}

pub fn parse_report_lines_tab_key(key: &str) -> Option<RecordId> {
    key.strip_prefix(REPORT_LINES_TAB_PREFIX)?.parse().ok()
}

const FILTERS: &[FilterSpec] = &[FilterSpec::reference("report_id", "Отчёт")];

/// Report lines, optionally narrowed to one report
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportLines {
    pub report_id: Option<RecordId>,
}

impl ReportLines {
    pub fn for_report(report_id: RecordId) -> Self {
        Self {
            report_id: Some(report_id),
        }
    }
}

impl Resource for ReportLines {
    type Record = ReportLine;

    fn title(&self) -> String {
        match self.report_id {
            Some(id) => format!("Строки отчёта #{}", id),
            None => self.entity().ui.list_name.to_string(),
        }
    }

    fn list_endpoint(&self) -> String {
        let collection = self.entity().collection_name;
        match self.report_id {
            Some(id) => format!("{}?report={}", collection, id),
            None => collection.to_string(),
        }
    }

    fn filters(&self) -> &'static [FilterSpec] {
        if self.report_id.is_some() {
            &[]
        } else {
            FILTERS
        }
    }

    fn new_record(&self) -> ReportLine {
        ReportLine {
            report_id: self.report_id,
            ..Default::default()
        }
    }

    // The backend may ignore the query parameter
    fn in_scope(&self, row: &Row) -> bool {
        match self.report_id {
            Some(id) => row.id_of("report_id") == Some(id),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::api::load_resource;
    use crate::shared::crud::resource::schema_problems;
    use crate::shared::http::testing::{client, MockSession, MockTransport};
    use crate::shared::http::Method;

    #[test]
    fn test_tab_key_round_trip() {
        assert_eq!(report_lines_tab_key(7), "a008_report_line_7");
        assert_eq!(parse_report_lines_tab_key("a008_report_line_7"), Some(7));
        assert_eq!(parse_report_lines_tab_key("a008_report_line_"), None);
        assert_eq!(parse_report_lines_tab_key("a007_financial_report"), None);
    }

    #[test]
    fn test_scoped_endpoint_and_seed() {
        let scoped = ReportLines::for_report(3);
        assert_eq!(scoped.list_endpoint(), "/finance/report-lines/?report=3");
        assert_eq!(scoped.create_endpoint(), "/finance/report-lines/");
        assert_eq!(scoped.item_endpoint(9), "/finance/report-lines/9/");
        assert_eq!(scoped.new_record().report_id, Some(3));
        assert!(scoped.filters().is_empty());
        assert_eq!(ReportLines::default().list_endpoint(), "/finance/report-lines/");
    }

    #[test]
    fn test_schema_is_consistent() {
        assert!(schema_problems(&ReportLines::default()).is_empty());
        assert!(schema_problems(&ReportLines::for_report(1)).is_empty());
    }

    #[tokio::test]
    async fn test_scope_drops_foreign_lines() {
        let t = MockTransport::new();
        t.respond(
            Method::Get,
            "/finance/report-lines/?report=3",
            200,
            r#"[{"id": 1, "report_id": 3, "name": "Выручка"},
                {"id": 2, "report_id": 4, "name": "Чужая"}]"#,
        );
        let s = MockSession::with_token("tok");
        let loaded = load_resource(&client(&t, &s), &ReportLines::for_report(3))
            .await
            .unwrap();
        let ids: Vec<_> = loaded.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
