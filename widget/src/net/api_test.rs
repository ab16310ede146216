use super::*;
use futures::executor::block_on;

#[test]
fn http_backend_uses_configured_endpoints() {
    let cfg = WidgetConfig { chat_endpoint: "/api/chat".into(), ..WidgetConfig::default() };
    let backend = HttpBackend::new(&cfg);
    assert_eq!(backend.chat_endpoint(), "/api/chat");
    assert_eq!(backend.leads_endpoint(), "/leads");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_backend_unavailable_natively() {
    let backend = HttpBackend::new(&WidgetConfig::default());
    assert_eq!(block_on(backend.send_chat("oi")), Err(WidgetError::Unavailable));
    let lead = Lead { name: "Ana".into(), email: "ana@example.com".into() };
    assert_eq!(block_on(backend.register_lead(&lead)), Err(WidgetError::Unavailable));
}

#[test]
fn rejections_name_the_status() {
    assert_eq!(WidgetError::LeadRejected { status: 422 }.to_string(), "leads endpoint returned status 422");
    assert_eq!(WidgetError::ChatRejected { status: 500 }.to_string(), "chat endpoint returned status 500");
}
