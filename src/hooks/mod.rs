pub mod layout;
pub use layout::use_output_panel_layout;
