wire_enum! {
    /// Тип строки финансового отчёта
    pub enum ReportLineType {
        Title => ("title", "Заголовок"),
        Accounts => ("accounts", "Счета"),
        Formula => ("formula", "Формула"),
        Total => ("total", "Итог"),
    }
}
