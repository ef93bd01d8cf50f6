pub mod header;
pub mod upload_area;
pub mod diagnose_button;
pub mod result_panel;
