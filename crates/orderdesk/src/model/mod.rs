//! # Domain Records
//!
//! Pure data structures for the order workflow: the persisted [`Order`] with
//! its wire format, and the form-side [`LineItem`] and [`SupplierInfo`]
//! records that exist only on the client until submission.

pub mod line_item;
pub mod order;
pub mod supplier;

pub use line_item::{LineItem, LineItemField};
pub use order::{Order, OrderDraft, OrderId, OrderStatus};
pub use supplier::{SupplierField, SupplierInfo};
