//! Browser glue: mount the controller on the live document.

mod listeners;
pub mod view;

use gloo_timers::callback::Interval;
use web_sys::Document;

use crate::attach::AttachStrategy;
use crate::config::WidgetConfig;
use crate::controller::ChatWidget;
use crate::markup::{CLOCK_ID, CONFIG_SCRIPT_ID, CONTAINER_ID, TOGGLER_ID};
use crate::net::api::HttpBackend;
use crate::util::clock::CLOCK_REFRESH_MS;
use view::DomView;

pub type DomWidget = ChatWidget<DomView, HttpBackend>;

/// Read the page's inline JSON config, falling back to defaults.
fn load_config(doc: &Document) -> WidgetConfig {
    let Some(script) = doc.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return WidgetConfig::default();
    };
    let json = script.text_content().unwrap_or_default();
    match WidgetConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[chatbot-ui] {e}; using defaults");
            WidgetConfig::default()
        }
    }
}

/// Build the widget, sync the page to its model and attach listeners.
pub fn mount() {
    log::info!("[chatbot-ui] initializing");
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("[chatbot-ui] no document; widget not mounted");
        return;
    };

    let config = load_config(&document);
    let strategy = AttachStrategy::choose(
        document.get_element_by_id(TOGGLER_ID).is_some(),
        document.get_element_by_id(CONTAINER_ID).is_some(),
    );

    let view = DomView::new(document.clone(), &config.bot_name);
    let backend = HttpBackend::new(&config);
    let widget = ChatWidget::new(view, backend, config);
    widget.sync();
    listeners::bind(&widget, &document, strategy);

    if document.get_element_by_id(CLOCK_ID).is_some() {
        let w = widget.clone();
        Interval::new(CLOCK_REFRESH_MS, move || w.refresh_clock()).forget();
    }
    log::info!("[chatbot-ui] mounted ({strategy:?})");
}
