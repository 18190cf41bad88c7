use super::RegionStyler;
use crate::config::HEIGHT_PROPERTY;
use crate::error::LayoutError;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Styles regions of a live document, looking each one up by id on every write.
pub struct DomRegions {
    document: Document,
}

impl DomRegions {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn for_window(window: &Window) -> Result<Self, LayoutError> {
        window
            .document()
            .map(Self::new)
            .ok_or(LayoutError::NoDocument)
    }
}

impl RegionStyler for DomRegions {
    fn set_height(&self, id: &str, css: &str) -> Result<(), LayoutError> {
        let element: HtmlElement = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| LayoutError::MissingRegion(id.to_string()))?
            .dyn_into()
            .map_err(|_| LayoutError::NotStylable(id.to_string()))?;

        element.style().set_property(HEIGHT_PROPERTY, css)?;
        Ok(())
    }
}

pub fn viewport_height(window: &Window) -> Result<f64, LayoutError> {
    window
        .inner_height()?
        .as_f64()
        .ok_or(LayoutError::NoViewportHeight)
}
