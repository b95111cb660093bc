//! Supplier contact details captured on the order form.

/// Supplier metadata entered alongside the line items.
///
/// Client-side only: none of it travels with the submission today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierInfo {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub address: String,
    pub contact: String,
}

/// Selector for editing a single [`SupplierInfo`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierField {
    Name,
    Email,
    CompanyName,
    Address,
    Contact,
}

impl SupplierInfo {
    /// Replaces one field, leaving the rest untouched.
    pub fn set(&mut self, field: SupplierField, value: String) {
        match field {
            SupplierField::Name => self.name = value,
            SupplierField::Email => self.email = value,
            SupplierField::CompanyName => self.company_name = value,
            SupplierField::Address => self.address = value,
            SupplierField::Contact => self.contact = value,
        }
    }

    /// Resets every field to empty, as after a successful submission.
    pub fn clear(&mut self) {
        *self = SupplierInfo::default();
    }
}
