//! The few places the app touches the DOM directly.

use leptos::{document, window};
use rwa_core::store::Theme;
use wasm_bindgen::JsValue;

/// Put the theme class on `<html>` and take the other one off.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        tracing::warn!("document has no root element");
        return;
    };
    let classes = root.class_list();
    let result = classes
        .toggle_with_force(theme.class(), true)
        .and_then(|_| classes.toggle_with_force(theme.flipped().class(), false));
    if let Err(err) = result {
        report("theme class", err);
    }
}

/// Full page reload, used by the error fallback.
pub fn reload() {
    if let Err(err) = window().location().reload() {
        report("reload", err);
    }
}

fn report(action: &str, err: JsValue) {
    tracing::error!(action, error = ?err, "browser call failed");
}
