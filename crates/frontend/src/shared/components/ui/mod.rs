pub mod badge;
pub mod button;
pub mod input;
pub mod select;

pub use badge::{Badge, FeatureStatusBadge};
pub use button::Button;
pub use input::Input;
pub use select::Select;
