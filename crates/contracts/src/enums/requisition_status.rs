wire_enum! {
    /// Статус заявки на закупку
    pub enum RequisitionStatus {
        Draft => ("draft", "Черновик"),
        Submitted => ("submitted", "Подана"),
        Approved => ("approved", "Одобрена"),
        Rejected => ("rejected", "Отклонена"),
        Done => ("done", "Исполнена"),
    }
}
