#![cfg(target_arch = "wasm32")]
use site_core::content::Language;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod hero;
mod input;
mod lifecycle;
mod locale;
mod menu;
mod page;
mod render;
mod sections;

use hero::HeroScene;
use lifecycle::PageLifecycle;
use locale::LanguageContext;

thread_local! {
    static HERO: RefCell<Option<HeroScene>> = const { RefCell::new(None) };
    static PAGE: PageLifecycle = const { PageLifecycle::new() };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear down the hero banner: animation frame, idle timer and listeners.
#[wasm_bindgen]
pub fn stop_hero() {
    if let Some(scene) = HERO.with(|h| h.borrow_mut().take()) {
        drop(scene);
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ctx = LanguageContext::new(initial_language(&window));
    page::render(&document, &ctx);
    wire_language_toggle(&document, ctx);
    menu::wire_mobile_menu(&document);
    menu::wire_gallery_tabs(&document);
    wire_page_transitions(&window);
    mount_hero(&document).await
}

/// Find the hero canvas and start the scene. A mount that completes after
/// the page was hidden is dropped instead of installed.
async fn mount_hero(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id("hero-canvas") else {
        log::warn!("missing #hero-canvas; hero disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let fallback = document
        .get_element_by_id("hero-glider-fallback")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());

    let ticket = PAGE.with(|p| p.begin_mount());
    let scene = HeroScene::mount(canvas, fallback).await;
    if !PAGE.with(|p| p.is_current(ticket)) {
        log::info!("page hidden during hero mount; discarding scene");
        drop(scene);
        return Ok(());
    }
    HERO.with(|h| *h.borrow_mut() = Some(scene));
    Ok(())
}

fn initial_language(window: &web::Window) -> Language {
    let search = window.location().search().unwrap_or_default();
    match locale::language_from_query(&search) {
        Ok(Some(lang)) => lang,
        Ok(None) => Language::default(),
        Err(e) => {
            log::warn!("ignoring ?lang: {e}");
            Language::default()
        }
    }
}

fn wire_language_toggle(document: &web::Document, ctx: LanguageContext) {
    let doc = document.clone();
    dom::add_click_listener(document, "lang-toggle", move || {
        let lang = ctx.toggle();
        log::info!("language -> {}", lang);
        page::render(&doc, &ctx);
    });
}

fn wire_page_transitions(window: &web::Window) {
    let on_hide = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        PAGE.with(|p| p.hide());
        log::debug!("pagehide (persisted: {})", ev.persisted());
        stop_hero();
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let on_show = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if !PAGE.with(|p| p.show(ev.persisted())) {
            return;
        }
        log::info!("restored from back/forward cache; remounting hero");
        spawn_local(async move {
            let Some(document) = dom::window_document() else {
                return;
            };
            if let Err(e) = mount_hero(&document).await {
                log::error!("hero remount error: {:?}", e);
            }
        });
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}
