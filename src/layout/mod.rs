//! Keeps the log and technical output panels sized to the viewport.
//!
//! The height math lives in [`crate::utils::PanelHeights`]; this module only
//! pushes the results into the page through a [`RegionStyler`].

mod dom;

pub use dom::{viewport_height, DomRegions};

use crate::config::RESIZE_EVENT;
use crate::error::LayoutError;
use crate::utils::PanelHeights;
use gloo_events::EventListener;
use tracing::{debug, warn};

/// Writes a CSS height into a region addressed by its element id.
pub trait RegionStyler {
    fn set_height(&self, id: &str, css: &str) -> Result<(), LayoutError>;
}

/// Applies every region height, skipping the ones that fail.
/// Returns the number of regions that were updated.
pub fn apply_heights(styler: &impl RegionStyler, heights: &PanelHeights) -> usize {
    let mut applied = 0;
    for region in heights.regions() {
        match styler.set_height(region.id, &region.css) {
            Ok(()) => applied += 1,
            Err(e) => warn!(region = region.id, "skipping height update: {e}"),
        }
    }
    applied
}

pub fn adjust_to(viewport_height: f64, styler: &impl RegionStyler) -> usize {
    let heights = PanelHeights::for_viewport(viewport_height);
    debug!(
        viewport_height,
        log_output = heights.log_output,
        technical_output = heights.technical_output,
        "adjusting output panels"
    );
    apply_heights(styler, &heights)
}

/// Resizes both panels from the current `window.innerHeight`.
pub fn adjust() {
    if let Err(e) = try_adjust() {
        warn!("output panel layout skipped: {e}");
    }
}

fn try_adjust() -> Result<usize, LayoutError> {
    let window = web_sys::window().ok_or(LayoutError::NoWindow)?;
    let height = viewport_height(&window)?;
    let regions = DomRegions::for_window(&window)?;
    Ok(adjust_to(height, &regions))
}

/// Window `resize` registration. Dropping it removes the listener.
pub struct ResizeSubscription {
    _listener: EventListener,
}

/// Sizes the panels once, then again on every window resize.
///
/// Returns `None` when there is no `window` (e.g. inside a worker).
pub fn initialize() -> Option<ResizeSubscription> {
    initialize_with(adjust, |event, mut on_event| {
        let window = web_sys::window()?;
        let listener = EventListener::new(&window, event, move |_| on_event());
        debug!("output panel {event} listener registered");

        Some(ResizeSubscription {
            _listener: listener,
        })
    })
}

/// Runs `adjust` immediately, then hands it to `subscribe` together with the
/// event it must be re-run on.
pub fn initialize_with<A, S, R>(mut adjust: A, subscribe: S) -> R
where
    A: FnMut() + 'static,
    S: FnOnce(&'static str, Box<dyn FnMut()>) -> R,
{
    adjust();
    subscribe(RESIZE_EVENT, Box::new(adjust))
}
