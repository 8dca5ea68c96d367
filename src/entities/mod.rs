//! Entity module - Contains the record types held by the dashboard store.
//! Every record carries a string id of the form `<PREFIX>-NNN` that is unique
//! within its kind and never changes once assigned.

/// Implements the string form shared by form inputs, fixtures and display
/// for a closed status/type enum.
macro_rules! string_enum {
    ($name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The kebab-case value used by forms and fixtures.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Parses a form value, returning `None` for anything outside the set.
            #[must_use]
            pub fn from_value(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

pub mod allocation;
pub mod employee;
pub mod estimate;
pub mod material;
pub mod project;
pub mod transaction;

pub use allocation::{MaterialAllocation, StaffAllocation};
pub use employee::{Employee, EmployeeStatus};
pub use estimate::{Estimate, EstimateSource, EstimateStatus};
pub use material::{Material, StockStatus};
pub use project::{Project, ProjectStatus};
pub use transaction::{FinancialTransaction, PaymentStatus, TransactionType};

use crate::core::ids::EntityKind;

/// A record that lives in one of the store's collections.
pub trait Record: Clone {
    /// Which collection this record belongs to
    const KIND: EntityKind;

    /// The record's identifier
    fn id(&self) -> &str;
}
