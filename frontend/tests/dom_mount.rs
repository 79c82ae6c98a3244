//! Browser-only checks for the DOM-touching pieces: mounting markup into
//! containers and reading the embedded payload element.

#![cfg(target_arch = "wasm32")]

use frontend::charts::render::{mount_into, placeholder_html};
use frontend::data::{read_embedded_payload, PAYLOAD_ELEMENT_ID};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> web_sys::Element {
    gloo_utils::document().body().unwrap().into()
}

#[wasm_bindgen_test]
fn mount_into_writes_markup() {
    let document = gloo_utils::document();
    let container = document.create_element("div").unwrap();
    container.set_id("mount-target");
    body().append_child(&container).unwrap();

    mount_into("mount-target", &placeholder_html()).unwrap();
    assert!(container.inner_html().contains("No data available"));

    container.remove();
}

#[wasm_bindgen_test]
fn mount_into_missing_container_errors() {
    assert!(mount_into("does-not-exist", "<p></p>").is_err());
}

#[wasm_bindgen_test]
fn embedded_payload_roundtrip() {
    let document = gloo_utils::document();
    let script = document.create_element("script").unwrap();
    script.set_id(PAYLOAD_ELEMENT_ID);
    script.set_attribute("type", "application/json").unwrap();
    script.set_text_content(Some(r#"{"platformCounts": [{"_id": "PC", "count": 7}]}"#));
    body().append_child(&script).unwrap();

    let payload = read_embedded_payload().unwrap();
    assert_eq!(payload.platform_counts.unwrap().len(), 1);

    script.remove();
}
