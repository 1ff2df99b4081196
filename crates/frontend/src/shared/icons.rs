use leptos::prelude::*;

/// Inner markup of the 24x24 stroke icons
pub(crate) const ICONS: &[(&str, &str)] = &[
    ("customers", r#"<path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#),
    ("orders", r#"<path d="M21 15V5a2 2 0 0 0-2-2H7l-4 4v8a2 2 0 0 0 2 2h6"/><path d="M3 7h4V3"/><path d="M16 21l2-2 4 4"/>"#),
    ("purchases", r#"<circle cx="9" cy="21" r="1"/><circle cx="20" cy="21" r="1"/><path d="M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6"/>"#),
    ("invoices", r#"<path d="M14 2H6a2 2 0 0 0-2 2v16l4-2 4 2 4-2 4 2V8z"/><path d="M14 2v6h6"/><path d="M8 13h8"/><path d="M8 17h5"/>"#),
    ("payments", r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="M2 10h20"/>"#),
    ("users", r#"<circle cx="12" cy="7" r="4"/><path d="M5.5 21a6.5 6.5 0 0 1 13 0"/>"#),
    ("plus", r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#),
    ("edit", r#"<path d="M12 20h9"/><path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>"#),
    ("trash", r#"<path d="M3 6h18"/><path d="M8 6V4h8v2"/><path d="M19 6l-1 14H6L5 6"/>"#),
    ("eye", r#"<path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/><circle cx="12" cy="12" r="3"/>"#),
    ("refresh", r#"<path d="M23 4v6h-6"/><path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/>"#),
    ("download", r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="M7 10l5 5 5-5"/><path d="M12 15V3"/>"#),
    ("star", r#"<path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"/>"#),
    ("tree", r#"<path d="M3 3h6v6H3z"/><path d="M15 15h6v6h-6z"/><path d="M6 9v9h9"/>"#),
    ("table", r#"<rect x="3" y="3" width="18" height="18" rx="2"/><path d="M3 9h18"/><path d="M3 15h18"/><path d="M9 3v18"/>"#),
    ("logout", r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><path d="M16 17l5-5-5-5"/><path d="M21 12H9"/>"#),
    ("x", r#"<path d="M18 6L6 18"/><path d="M6 6l12 12"/>"#),
    ("chevron-left", r#"<polyline points="15 18 9 12 15 6"/>"#),
    ("chevron-right", r#"<polyline points="9 18 15 12 9 6"/>"#),
    ("chevron-down", r#"<polyline points="6 9 12 15 18 9"/>"#),
    ("chevrons-left", r#"<polyline points="11 17 6 12 11 7"/><polyline points="18 17 13 12 18 7"/>"#),
    ("chevrons-right", r#"<polyline points="13 17 18 12 13 7"/><polyline points="6 17 11 12 6 7"/>"#),
];

const FALLBACK: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4l3 3"/>"#;

fn markup(name: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, body)| *body)
        .unwrap_or(FALLBACK)
}

pub fn icon(name: &str) -> AnyView {
    let size = if name.starts_with("chevron") || name == "x" { "16" } else { "20" };
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=markup(name)
        ></svg>
    }
    .into_any()
}
