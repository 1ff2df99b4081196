wire_enum! {
    /// Статус заказа на закупку
    pub enum PurchaseOrderStatus {
        Draft => ("draft", "Черновик"),
        Sent => ("sent", "Отправлен"),
        ToApprove => ("to_approve", "На согласовании"),
        Purchase => ("purchase", "Заказ"),
        Done => ("done", "Выполнен"),
        Cancel => ("cancel", "Отменён"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes() {
        assert_eq!(PurchaseOrderStatus::default(), PurchaseOrderStatus::Draft);
        assert_eq!(
            serde_json::to_value(PurchaseOrderStatus::ToApprove).unwrap(),
            serde_json::json!("to_approve")
        );
        assert_eq!(
            PurchaseOrderStatus::from_code("cancel"),
            Some(PurchaseOrderStatus::Cancel)
        );
        assert_eq!(PurchaseOrderStatus::from_code("bogus"), None);
        assert_eq!(PurchaseOrderStatus::VALUES.len(), 6);
        assert_eq!(PurchaseOrderStatus::VALUES[0].value, "draft");
    }
}
