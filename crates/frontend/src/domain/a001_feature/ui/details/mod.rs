//! Feature Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: browser file handle and object-URL previews
//! - view_model.rs: ViewModel wrapping the edit form state machine
//! - view.rs: Leptos component (pure UI)

pub mod model;
mod view;
mod view_model;

pub use view::FeatureDetails;
pub use view_model::FeatureDetailsViewModel;
