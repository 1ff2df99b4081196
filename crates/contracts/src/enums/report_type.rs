wire_enum! {
    /// Тип финансового отчёта
    pub enum ReportType {
        BalanceSheet => ("balance_sheet", "Баланс"),
        ProfitLoss => ("profit_loss", "Прибыли и убытки"),
        CashFlow => ("cash_flow", "Движение денежных средств"),
        Custom => ("custom", "Произвольный"),
    }
}
