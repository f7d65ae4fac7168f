//! Alert value objects and notification templates.

pub mod template;
pub mod value_objects;
