//! Load and mutate a resource through the HTTP client.

use contracts::domain::common::{Entity, RecordId};
use contracts::shared::metadata::ReferenceMetadata;
use futures::future::join_all;
use serde_json::Value;

use super::display::id_of;
use super::form::{FormMode, FormModel};
use super::references::{to_ref_items, RefItem, ReferenceData};
use super::resource::Resource;
use super::row::Row;
use crate::shared::http::{ApiClient, ApiError, HttpTransport, Session};

/// Result of one full load: primary rows plus every reference collection
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub rows: Vec<Row>,
    pub references: ReferenceData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Nothing was sent
    Declined,
    Deleted(Loaded),
}

/// A failing reference collection degrades to an empty one
pub async fn load_reference<T: HttpTransport, S: Session>(
    api: &ApiClient<T, S>,
    meta: &ReferenceMetadata,
) -> Vec<RefItem> {
    match api.get_list::<Value>(meta.collection_name).await {
        Ok(objects) => to_ref_items(meta, objects),
        Err(e) => {
            log::warn!("справочник {} недоступен: {}", meta.key, e);
            Vec::new()
        }
    }
}

/// Primary collection and references are fetched concurrently
pub async fn load_resource<R: Resource, T: HttpTransport, S: Session>(
    api: &ApiClient<T, S>,
    resource: &R,
) -> Result<Loaded, ApiError> {
    let endpoint = resource.list_endpoint();
    let primary = api.get_list::<Value>(&endpoint);
    let references = join_all(
        resource
            .references()
            .iter()
            .map(|meta| async move { (meta.key, load_reference(api, meta).await) }),
    );

    let (records, collections) = futures::join!(primary, references);
    let records = records.map_err(|e| {
        log::error!("загрузка {} не удалась: {}", endpoint, e);
        e
    })?;

    let mut data = ReferenceData::default();
    for (key, items) in collections {
        data.insert(key, items);
    }

    let total = records.len();
    let projected: Vec<Row> = records
        .into_iter()
        .filter_map(|item| project_item::<R::Record>(item, &data))
        .collect();
    if projected.len() < total {
        log::warn!(
            "{}: пропущено записей без id: {}",
            endpoint,
            total - projected.len()
        );
    }
    let rows: Vec<Row> = projected
        .into_iter()
        .filter(|row| resource.in_scope(row))
        .collect();
    log::debug!("{}: {} из {} записей", endpoint, rows.len(), total);

    Ok(Loaded {
        rows,
        references: data,
    })
}

/// Typed decode first; a record the DTO rejects (unknown status code and
/// the like) is kept with its raw values as long as it has an id
fn project_item<E: Entity>(item: Value, refs: &ReferenceData) -> Option<Row> {
    match serde_json::from_value::<E>(item.clone()) {
        Ok(record) => Row::project(&record, refs),
        Err(e) => {
            let Value::Object(values) = item else {
                log::warn!("запись списка не является объектом: {}", e);
                return None;
            };
            let id = values.get("id").and_then(id_of)?;
            log::warn!("запись #{} показана без разбора: {}", id, e);
            Some(Row::from_values(id, values, E::field_metadata(), refs))
        }
    }
}

/// Validate, decode and send the form: POST for new records, PUT otherwise
pub async fn save<R: Resource, T: HttpTransport, S: Session>(
    api: &ApiClient<T, S>,
    resource: &R,
    form: FormModel,
) -> Result<(), String> {
    form.validate(resource.fields())?;
    let mode = form.mode;
    let record: R::Record = form.into_record()?;

    let result = match mode {
        FormMode::Create => api.post(&resource.create_endpoint(), &record).await,
        FormMode::Edit(id) => api.put(&resource.item_endpoint(id), &record).await,
    };
    result.map(|_| ()).map_err(|e| {
        log::error!("сохранение {} не удалось: {}", resource.entity().full_name(), e);
        format!("Ошибка сохранения: {}", e)
    })
}

pub async fn submit_and_reload<R: Resource, T: HttpTransport, S: Session>(
    api: &ApiClient<T, S>,
    resource: &R,
    form: FormModel,
) -> Result<Loaded, String> {
    save(api, resource, form).await?;
    load_resource(api, resource)
        .await
        .map_err(|e| format!("Сохранено, но список не обновился: {}", e))
}

pub async fn delete_and_reload<R: Resource, T: HttpTransport, S: Session>(
    api: &ApiClient<T, S>,
    resource: &R,
    id: RecordId,
    confirmed: bool,
) -> Result<DeleteOutcome, String> {
    if !confirmed {
        return Ok(DeleteOutcome::Declined);
    }
    api.delete(&resource.item_endpoint(id)).await.map_err(|e| {
        log::error!("удаление {} #{} не удалось: {}", resource.entity().full_name(), id, e);
        format!("Ошибка удаления: {}", e)
    })?;
    load_resource(api, resource)
        .await
        .map(DeleteOutcome::Deleted)
        .map_err(|e| format!("Удалено, но список не обновился: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::{client, MockSession, MockTransport};
    use crate::shared::http::Method;
    use contracts::domain::a001_purchase_order::PurchaseOrder;
    use contracts::projections::p900_sales_reporting::SalesReportRow;
    use serde_json::json;

    #[derive(Clone)]
    struct Orders;

    impl Resource for Orders {
        type Record = PurchaseOrder;
    }

    const LIST: &str = "/purchases/purchase-orders/";

    fn transport() -> MockTransport {
        let t = MockTransport::new();
        t.respond(
            Method::Get,
            LIST,
            200,
            r#"{"results": [
                {"id": 1, "number": "PO-1", "supplier_id": 3, "order_date": "2024-01-02", "status": "draft"},
                {"id": 2, "number": "PO-2", "supplier_id": 4, "order_date": "2024-01-03", "status": "done"}
            ]}"#,
        );
        t.respond(
            Method::Get,
            "/partners/partners/",
            200,
            r#"[{"id": 3, "name": "ООО Альфа"}]"#,
        );
        t
    }

    fn primary_gets(t: &MockTransport) -> usize {
        t.requests()
            .iter()
            .filter(|r| r.method == Method::Get && r.url.ends_with(LIST))
            .count()
    }

    fn filled_form() -> FormModel {
        let mut form = FormModel::for_create(&PurchaseOrder::default());
        for (name, raw) in [("number", "PO-9"), ("supplier_id", "3"), ("order_date", "2024-02-01")] {
            form.set_input(PurchaseOrder::field(name).unwrap(), raw);
        }
        form
    }

    #[tokio::test]
    async fn test_load_resolves_references() {
        let t = transport();
        let session = MockSession::default();
        let loaded = load_resource(&client(&t, &session), &Orders).await.unwrap();

        assert_eq!(loaded.rows.len(), 2);
        assert_eq!(loaded.rows[0].display("supplier_id"), "ООО Альфа");
        assert_eq!(loaded.rows[1].display("supplier_id"), "N/A");
        // primary + partners + currencies + companies
        assert_eq!(t.count(Method::Get), 4);
    }

    #[tokio::test]
    async fn test_failed_reference_degrades_to_empty() {
        let t = transport();
        t.respond(Method::Get, "/finance/currencies/", 500, "");
        t.fail_network(Method::Get, "/core/companies/");
        let session = MockSession::default();

        let loaded = load_resource(&client(&t, &session), &Orders).await.unwrap();
        assert_eq!(loaded.rows.len(), 2);
        assert!(loaded.references.items("currencies").is_empty());
        assert_eq!(loaded.references.items("partners").len(), 1);
    }

    #[tokio::test]
    async fn test_odd_record_does_not_fail_the_page() {
        let t = MockTransport::new();
        t.respond(
            Method::Get,
            "/partners/partners/",
            200,
            r#"[{"id": 3, "name": "ООО Альфа"}]"#,
        );
        t.respond(
            Method::Get,
            LIST,
            200,
            r#"[
                {"id": 1, "number": "PO-1", "supplier_id": 3, "order_date": "2024-01-02", "status": "draft"},
                {"id": 2, "number": null, "supplier_id": 3, "order_date": null, "status": "done"},
                {"id": 3, "number": "PO-3", "supplier_id": 3, "status": "archived"},
                {"number": "no id", "status": "draft"}
            ]"#,
        );
        let session = MockSession::default();

        let loaded = load_resource(&client(&t, &session), &Orders).await.unwrap();

        let ids: Vec<RecordId> = loaded.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(loaded.rows[1].display("number"), "");
        assert_eq!(loaded.rows[2].value("status"), &json!("archived"));
        assert_eq!(loaded.rows[2].display("status"), "archived");
        assert_eq!(loaded.rows[2].display("number"), "PO-3");
        assert_eq!(loaded.rows[2].display("supplier_id"), "ООО Альфа");
    }

    #[derive(Clone)]
    struct Reporting;

    impl Resource for Reporting {
        type Record = SalesReportRow;
    }

    #[tokio::test]
    async fn test_rows_without_id_are_dropped() {
        let t = MockTransport::new();
        t.respond(
            Method::Get,
            "/sales/reporting/",
            200,
            r#"[{"id": 5, "order_number": "SO-5"}, {"order_number": "SO-?"}]"#,
        );
        let session = MockSession::default();

        let loaded = load_resource(&client(&t, &session), &Reporting).await.unwrap();
        assert_eq!(loaded.rows.len(), 1);
        assert_eq!(loaded.rows[0].display("order_number"), "SO-5");
    }

    #[tokio::test]
    async fn test_failed_primary_is_an_error() {
        let t = MockTransport::new();
        t.respond(Method::Get, LIST, 503, "maintenance");
        let session = MockSession::default();
        let err = load_resource(&client(&t, &session), &Orders).await.unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_create_is_one_post_and_one_reload() {
        let t = transport();
        let session = MockSession::default();
        let loaded = submit_and_reload(&client(&t, &session), &Orders, filled_form())
            .await
            .unwrap();

        assert_eq!(loaded.rows.len(), 2);
        assert_eq!(t.count(Method::Post), 1);
        assert_eq!(t.count(Method::Put), 0);
        assert_eq!(primary_gets(&t), 1);
        let post = t.requests().into_iter().find(|r| r.method == Method::Post).unwrap();
        assert!(post.url.ends_with(LIST));
        let body: Value = serde_json::from_str(post.body.as_deref().unwrap()).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["number"], "PO-9");
    }

    #[tokio::test]
    async fn test_edit_is_one_put_to_item_endpoint() {
        let t = transport();
        let session = MockSession::default();
        let mut form = filled_form();
        form.mode = FormMode::Edit(2);

        submit_and_reload(&client(&t, &session), &Orders, form).await.unwrap();
        let puts: Vec<_> = t.requests().into_iter().filter(|r| r.method == Method::Put).collect();
        assert_eq!(puts.len(), 1);
        assert!(puts[0].url.ends_with("/purchases/purchase-orders/2/"));
        assert_eq!(t.count(Method::Post), 0);
    }

    #[tokio::test]
    async fn test_missing_required_sends_nothing() {
        let t = transport();
        let session = MockSession::default();
        let form = FormModel::for_create(&PurchaseOrder::default());
        let err = save(&client(&t, &session), &Orders, form).await.unwrap_err();
        assert!(err.contains("Поставщик"));
        assert!(t.requests().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_keeps_form_message() {
        let t = transport();
        t.respond(Method::Post, LIST, 400, r#"{"number": ["already exists"]}"#);
        let session = MockSession::default();
        let err = submit_and_reload(&client(&t, &session), &Orders, filled_form())
            .await
            .unwrap_err();
        assert!(err.contains("400"));
        assert!(err.contains("already exists"));
        assert_eq!(primary_gets(&t), 0);
    }

    #[tokio::test]
    async fn test_delete_confirmed_and_declined() {
        let t = transport();
        let session = MockSession::default();
        let api = client(&t, &session);

        let outcome = delete_and_reload(&api, &Orders, 1, false).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Declined);
        assert!(t.requests().is_empty());

        let outcome = delete_and_reload(&api, &Orders, 1, true).await.unwrap();
        assert!(matches!(outcome, DeleteOutcome::Deleted(_)));
        let deletes: Vec<_> = t.requests().into_iter().filter(|r| r.method == Method::Delete).collect();
        assert_eq!(deletes.len(), 1);
        assert!(deletes[0].url.ends_with("/purchases/purchase-orders/1/"));
        assert_eq!(primary_gets(&t), 1);
    }
}
