//! Enumerated types.

mod confirmation_type;
mod domain;
mod eresult;
mod guard_type;
mod language;

pub use confirmation_type::ConfirmationType;
pub use domain::Domain;
pub use eresult::EResult;
pub use guard_type::GuardType;
pub use language::Language;
