//! Feature catalog: bilingual feature records with an icon and an active flag.

pub mod aggregate;
pub mod catalog;
pub mod draft;
pub mod edit_form;
pub mod icon;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;
