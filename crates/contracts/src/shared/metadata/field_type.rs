//! Field type enumeration for metadata system

/// How a field is stored on the wire and edited in a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    LongText,
    /// f64 amount or quantity, `parseFloat(..) || 0` coercion
    Number,
    Integer,
    /// YYYY-MM-DD
    Date,
    /// ISO timestamp, never edited
    DateTime,
    Bool,
    /// One of `FieldMetadata::enum_values`
    Enum,
    /// +1 / -1
    Sign,
    /// Foreign key to a reference collection
    AggregateRef,
    /// Array of foreign keys to a reference collection
    AggregateRefList,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "long_text",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Bool => "bool",
            Self::Enum => "enum",
            Self::Sign => "sign",
            Self::AggregateRef => "aggregate_ref",
            Self::AggregateRefList => "aggregate_ref_list",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Integer | Self::Sign)
    }
}

/// Group a field is rendered in on the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub enum FieldSection {
    #[default]
    Identification,
    Amounts,
    Status,
    Audit,
}

impl FieldSection {
    pub const ALL: [FieldSection; 4] = [
        Self::Identification,
        Self::Amounts,
        Self::Status,
        Self::Audit,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Identification => "Основное",
            Self::Amounts => "Суммы",
            Self::Status => "Статус",
            Self::Audit => "Аудит",
        }
    }
}
