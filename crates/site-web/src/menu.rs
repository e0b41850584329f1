use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const MENU_ID: &str = "mobile-menu";
const MENU_TOGGLE_ID: &str = "menu-toggle";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MENU_ID) {
        let _ = el.class_list().add_1("open");
    }
    set_expanded(document, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MENU_ID) {
        let _ = el.class_list().remove_1("open");
    }
    set_expanded(document, false);
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(MENU_ID)
        .map(|el| el.class_list().contains("open"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_open(document) {
        hide(document);
    } else {
        show(document);
    }
}

fn set_expanded(document: &web::Document, open: bool) {
    if let Some(btn) = document.get_element_by_id(MENU_TOGGLE_ID) {
        let _ = btn.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

/// Hamburger button plus close-on-navigate for every link inside the menu.
pub fn wire_mobile_menu(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, MENU_TOGGLE_ID, move || toggle(&doc));

    for link in dom::select_all(document, "#mobile-menu a") {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || hide(&doc)) as Box<dyn FnMut()>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Show only the gallery panel named by `tab`.
pub fn select_gallery_tab(document: &web::Document, tab: &str) {
    for button in dom::select_all(document, "[data-gallery-tab]") {
        let active = button.get_attribute("data-gallery-tab").as_deref() == Some(tab);
        let _ = button
            .class_list()
            .toggle_with_force("active", active);
        let _ = button.set_attribute("aria-selected", if active { "true" } else { "false" });
    }
    for panel in dom::select_all(document, "[data-gallery-panel]") {
        let active = panel.get_attribute("data-gallery-panel").as_deref() == Some(tab);
        if active {
            let _ = panel.remove_attribute("hidden");
        } else {
            let _ = panel.set_attribute("hidden", "");
        }
    }
}

pub fn wire_gallery_tabs(document: &web::Document) {
    for button in dom::select_all(document, "[data-gallery-tab]") {
        let Some(tab) = button.get_attribute("data-gallery-tab") else {
            continue;
        };
        let doc = document.clone();
        let closure =
            Closure::wrap(Box::new(move || select_gallery_tab(&doc, &tab)) as Box<dyn FnMut()>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    select_gallery_tab(document, "photos");
}
