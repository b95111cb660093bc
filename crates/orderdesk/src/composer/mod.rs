//! # Order Composer
//!
//! Client-side state for assembling and submitting one purchase order:
//! supplier details, a variable-length list of line items, and the
//! user-visible status line.
//!
//! ## Submission Semantics
//!
//! `submit` builds a single creation payload, sends it to the store, and
//! cleans up on success. It borrows the composer exclusively for its whole
//! duration, so a second submission cannot start while one is on the wire —
//! single-flight by construction, no flag needed.
//!
//! Failures never touch the form: the user fixes nothing, sees the reason in
//! the status line, and simply submits again. There are no automatic
//! retries.

use crate::catalog::{self, CatalogItem};
use crate::model::{
    LineItem, LineItemField, Order, OrderDraft, OrderStatus, SupplierField, SupplierInfo,
};
use remote_store::StoreClient;
use std::fmt;
use tracing::{debug, info, instrument, warn};

mod error;
pub use error::ComposerError;

/// Category placeholder sent with every submission; the form has no category
/// input.
const CATEGORY_PLACEHOLDER: &str = "Category";

/// User-visible submission status, rendered verbatim by the form footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusLine {
    /// Nothing submitted yet; renders as the empty string.
    #[default]
    Idle,
    /// A submission is on the wire.
    Sending,
    /// The last submission was accepted.
    Submitted,
    /// The last submission failed with the given reason.
    Failed(String),
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Idle => Ok(()),
            StatusLine::Sending => write!(f, "Sending...."),
            StatusLine::Submitted => write!(f, "Form Submitted Successfully"),
            StatusLine::Failed(reason) => write!(f, "Error submitting form: {reason}"),
        }
    }
}

/// Where the caller should route after a successful submission.
///
/// Submission itself performs no navigation; it only signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Jump to the order board so the new record is visible.
    ToBoard,
}

/// Successful submission outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    /// The record as persisted, id included.
    pub order: Order,
    /// Routing signal for the caller to interpret.
    pub navigate: Navigation,
}

/// Client-side state for one order form.
pub struct OrderComposer {
    store: StoreClient<Order>,
    products: Vec<CatalogItem>,
    line_items: Vec<LineItem>,
    supplier: SupplierInfo,
    status: StatusLine,
}

impl OrderComposer {
    /// Creates a composer with an empty form and the bundled product catalog.
    pub fn new(store: StoreClient<Order>) -> Self {
        Self {
            store,
            products: catalog::inventory_data(),
            line_items: Vec::new(),
            supplier: SupplierInfo::default(),
            status: StatusLine::Idle,
        }
    }

    /// Product catalog backing the selection fields.
    pub fn products(&self) -> &[CatalogItem] {
        &self.products
    }

    /// Line items currently on the form, in insertion order.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Supplier details currently on the form.
    pub fn supplier(&self) -> &SupplierInfo {
        &self.supplier
    }

    /// Current user-visible submission status.
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Appends an empty line item to the form. No upper bound.
    pub fn add_line_item(&mut self) {
        self.line_items.push(LineItem::default());
        debug!(items = self.line_items.len(), "Line item added");
    }

    /// Removes the line item at `index`; out-of-range indices are ignored.
    ///
    /// Later items shift down, exactly like rows disappearing from the form.
    pub fn remove_line_item(&mut self, index: usize) {
        if index < self.line_items.len() {
            self.line_items.remove(index);
            debug!(index, items = self.line_items.len(), "Line item removed");
        }
    }

    /// Replaces one field of the line item at `index`.
    ///
    /// # Errors
    ///
    /// [`ComposerError::LineItemOutOfRange`] if `index` is not on the form.
    /// Unlike removal, a silently dropped edit would lose what the user
    /// typed, so this one reports.
    pub fn edit_line_item(
        &mut self,
        index: usize,
        field: LineItemField,
        value: impl Into<String>,
    ) -> Result<(), ComposerError> {
        let len = self.line_items.len();
        match self.line_items.get_mut(index) {
            Some(item) => {
                item.set(field, value.into());
                Ok(())
            }
            None => Err(ComposerError::LineItemOutOfRange { index, len }),
        }
    }

    /// Replaces one field of the supplier details.
    pub fn edit_supplier_field(&mut self, field: SupplierField, value: impl Into<String>) {
        self.supplier.set(field, value.into());
    }

    /// Submits the form as a single order.
    ///
    /// Builds the creation payload, sends exactly one create request, and on
    /// success clears the line items and supplier details. On failure the
    /// form is left exactly as it was so the user can resubmit; the reason is
    /// also recorded in the status line.
    ///
    /// # Errors
    ///
    /// [`ComposerError::EmptyOrder`] if the form has no line items — nothing
    /// is sent in that case — or [`ComposerError::Store`] if the store call
    /// fails.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Submitted, ComposerError> {
        let Some(first) = self.line_items.first() else {
            warn!("Submission with no line items");
            self.status = StatusLine::Failed(ComposerError::EmptyOrder.to_string());
            return Err(ComposerError::EmptyOrder);
        };

        // TODO: submit every line item once the store accepts multi-item
        // orders; the wire contract takes one product per record, so only
        // the first row travels today.
        let draft = OrderDraft {
            product_name: first.product_name.clone(),
            category: CATEGORY_PLACEHOLDER.to_string(),
            quantity: first.quantity.clone(),
            status: OrderStatus::Pending,
        };

        self.status = StatusLine::Sending;
        debug!(?draft, "Sending request");

        match self.store.create(draft).await {
            Ok(order) => {
                self.line_items.clear();
                self.supplier.clear();
                self.status = StatusLine::Submitted;
                info!(id = %order.id, "Order submitted");
                Ok(Submitted {
                    order,
                    navigate: Navigation::ToBoard,
                })
            }
            Err(e) => {
                warn!(error = %e, "Submission failed");
                self.status = StatusLine::Failed(e.to_string());
                Err(ComposerError::Store(e))
            }
        }
    }
}
