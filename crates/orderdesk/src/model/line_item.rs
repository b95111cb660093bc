//! Form-side line item state for the composer.

/// One product entry on the order form.
///
/// Fields hold whatever the user typed; validating them is a rendering
/// concern, not a workflow one. `quantity` stays a string all the way to the
/// wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItem {
    pub product_name: String,
    pub quantity: String,
    pub brand: String,
    /// Optional; empty means absent.
    pub color: String,
}

/// Selector for editing a single [`LineItem`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    ProductName,
    Quantity,
    Brand,
    Color,
}

impl LineItem {
    /// Replaces one field, leaving the rest untouched.
    pub fn set(&mut self, field: LineItemField, value: String) {
        match field {
            LineItemField::ProductName => self.product_name = value,
            LineItemField::Quantity => self.quantity = value,
            LineItemField::Brand => self.brand = value,
            LineItemField::Color => self.color = value,
        }
    }
}
