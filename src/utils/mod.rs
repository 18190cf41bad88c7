pub mod layout;

pub use layout::PanelHeights;
