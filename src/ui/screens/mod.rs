pub mod header;
pub mod panel;
