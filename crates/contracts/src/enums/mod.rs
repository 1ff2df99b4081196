//! Status and type enumerations shared by DTOs and field metadata.
//!
//! Each enum serializes as its snake_case code and exposes `VALUES` so that
//! the select options in forms and the labels in lists come from one place.

/// Declares a wire enum together with its `EnumValue` table.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            #[default]
            $( $variant ),+
        }

        impl $name {
            pub const VALUES: &'static [$crate::shared::metadata::EnumValue] = &[
                $( $crate::shared::metadata::EnumValue { value: $code, label: $label } ),+
            ];

            /// Код на проводе
            pub fn code(&self) -> &'static str {
                match self {
                    $( Self::$variant => $code ),+
                }
            }

            /// Человекочитаемое название
            pub fn display_name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

pub mod invoice_status;
pub mod purchase_order_status;
pub mod report_line_type;
pub mod report_type;
pub mod requisition_status;
pub mod sales_line_state;

pub use invoice_status::InvoiceStatus;
pub use purchase_order_status::PurchaseOrderStatus;
pub use report_line_type::ReportLineType;
pub use report_type::ReportType;
pub use requisition_status::RequisitionStatus;
pub use sales_line_state::SalesLineState;
