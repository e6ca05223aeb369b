pub mod body;
pub mod body_system;
pub mod collision;
pub mod motion;
pub mod steering;
