pub mod adapters;
pub mod icon;
