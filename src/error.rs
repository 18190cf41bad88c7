use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("region `{0}` not found")]
    MissingRegion(String),
    #[error("region `{0}` is not an HTML element")]
    NotStylable(String),
    #[error("JS error: {0}")]
    Js(String),
    #[error("no window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("viewport height is not a number")]
    NoViewportHeight,
}

impl From<JsValue> for LayoutError {
    fn from(v: JsValue) -> Self {
        LayoutError::Js(format!("{:?}", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LayoutError::MissingRegion("log-output".to_string()).to_string(),
            "region `log-output` not found"
        );
        assert_eq!(
            LayoutError::NotStylable("technical-output".to_string()).to_string(),
            "region `technical-output` is not an HTML element"
        );
        assert_eq!(
            LayoutError::NoViewportHeight.to_string(),
            "viewport height is not a number"
        );
    }
}
