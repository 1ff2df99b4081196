wire_enum! {
    /// Состояние строки заказа клиента
    pub enum SalesLineState {
        Draft => ("draft", "Черновик"),
        Sent => ("sent", "Отправлен"),
        Sale => ("sale", "Продажа"),
        Done => ("done", "Закрыт"),
        Cancel => ("cancel", "Отменён"),
    }
}
