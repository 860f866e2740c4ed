//! Host capabilities backed by the browser DOM through `web-sys`.

use crate::error::AgentMapError;
use crate::host::{ContainerSpec, ElementBuilder, Notifier};

/// Element builder that inserts the map container into the host document.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebElementBuilder;

impl ElementBuilder for WebElementBuilder {
    fn insert_container(&self, spec: &ContainerSpec) -> Result<(), AgentMapError> {
        let window = web_sys::window()
            .ok_or_else(|| AgentMapError::Generic("window is not available".into()))?;
        let document = window
            .document()
            .ok_or_else(|| AgentMapError::Generic("document is not available".into()))?;

        let region = document
            .query_selector(&spec.region_selector)?
            .ok_or_else(|| {
                AgentMapError::Generic(format!(
                    "page region {} not found",
                    spec.region_selector
                ))
            })?;

        let container = document.create_element("div")?;
        container.set_id(&spec.id);
        container.set_attribute("style", &spec.style)?;
        region.append_child(&container)?;

        Ok(())
    }
}

/// Notifier that shows messages through the blocking browser alert dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebNotifier;

impl Notifier for WebNotifier {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
