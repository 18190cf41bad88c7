pub mod output_panels;
pub use output_panels::OutputPanels;
