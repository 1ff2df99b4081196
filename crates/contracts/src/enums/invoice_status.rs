wire_enum! {
    /// Статус выставления счёта по строке заказа
    pub enum InvoiceStatus {
        No => ("no", "Нечего выставлять"),
        ToInvoice => ("to_invoice", "К выставлению"),
        Invoiced => ("invoiced", "Выставлен"),
        Upselling => ("upselling", "Допродажа"),
    }
}
