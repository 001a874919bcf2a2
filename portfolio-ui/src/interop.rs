use web_sys::window;

/// Current viewport width in CSS pixels.
///
/// Falls back to the root element's client width when `innerWidth` is
/// unavailable or zero (some embedded webviews report 0 during startup).
pub fn get_viewport_width() -> Option<u32> {
    let window = window()?;
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);

    if width > 0.0 {
        return Some(width.round() as u32);
    }

    let root = window.document()?.document_element()?;
    Some(root.client_width().max(0) as u32)
}

/// Add or remove `class` on `<html>` so every part of the page can style off it.
pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("No document root; cannot set class {class}");
        return;
    };

    let classes = root.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        log::error!("Failed to update root class {class}: {:?}", e);
    }
}

pub fn root_has_class(class: &str) -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains(class))
        .unwrap_or(false)
}
