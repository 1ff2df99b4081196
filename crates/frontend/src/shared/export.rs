//! Экспорт строк списка в CSV (разделитель `;`, UTF-8 с BOM для Excel)
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Собирает CSV: строка заголовков, затем строки данных
pub fn build_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    // UTF-8 BOM для корректного отображения кириллицы в Excel
    let mut csv_content = String::from('\u{FEFF}');

    let header_line: Vec<String> = headers.iter().map(|h| escape_csv_cell(h)).collect();
    csv_content.push_str(&header_line.join(";"));
    csv_content.push('\n');

    for row in rows {
        let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }
    csv_content
}

/// Экспортирует строки в CSV файл и инициирует скачивание
pub fn export_csv(headers: &[&str], rows: &[Vec<String>], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("Нет данных для экспорта".to_string());
    }
    let blob = create_csv_blob(&build_csv(headers, rows))?;
    download_blob(&blob, filename)
}

/// Ячейка с разделителем, кавычкой или переводом строки оборачивается в кавычки
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains([';', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Не удалось создать файл: {:?}", e))
}

/// Скачивание через временную ссылку
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Нет объекта window")?;
    let document = window.document().ok_or("Нет объекта document")?;
    let body = document.body().ok_or("Нет элемента body")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Не удалось создать URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Не удалось создать ссылку: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Не удалось создать ссылку: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| format!("Не удалось добавить ссылку: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Не удалось удалить ссылку: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Не удалось освободить URL: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("ООО Ромашка"), "ООО Ромашка");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(
            &["Номер", "Итого"],
            &[
                vec!["PO-1".into(), "1 200.00".into()],
                vec!["PO;2".into(), "0.00".into()],
            ],
        );
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines, vec!["Номер;Итого", "PO-1;1 200.00", "\"PO;2\";0.00"]);
    }
}
