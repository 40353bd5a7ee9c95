//! Domain record types persisted by the portal.
//!
//! These are the plain records the stores serialize; field names on the
//! wire match the page field ids and historical storage format.

pub mod payment;
pub mod profile;
pub mod todo;

pub use payment::{Payment, PaymentDraft};
pub use profile::Profile;
pub use todo::{Todo, next_todo_id};
