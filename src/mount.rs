//! Hooks the behaviors up to real browser events.
//!
//! Every listener and observer lives for the rest of the page, so closures are
//! leaked with `forget` once attached.

use std::rc::Rc;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

use crate::app::Portfolio;
use crate::config::{FxConfig, CONFIG_SCRIPT_ID};
use crate::console;
use crate::dom::DomPage;
use crate::page::Page;
use crate::error::{FxError, FxResult};
use crate::scheduler::BrowserScheduler;

type App = Rc<Portfolio<DomPage, BrowserScheduler>>;

pub fn start() -> FxResult<()> {
    let window = web_sys::window().ok_or(FxError::NoWindow)?;
    let document = window.document().ok_or(FxError::NoDocument)?;
    let config = load_config(&document);

    let page = DomPage::new(window.clone(), document.clone());
    let app: App = Rc::new(Portfolio::new(page, BrowserScheduler, config, StdRng::from_entropy()));
    let watched = app.init();

    {
        let app = app.clone();
        listen(&window, "scroll", move |_| app.on_scroll())?;
    }
    if app.on_mounted(&document.ready_state()) {
        let app = app.clone();
        listen(&window, "load", move |_| app.on_load())?;
    }
    {
        let app = app.clone();
        listen(&document, "keydown", move |e: Event| {
            if let Some(key_event) = e.dyn_ref::<KeyboardEvent>() {
                app.on_keydown(&key_event.key());
            }
        })?;
    }

    let selectors = app.config().selectors.clone();
    for anchor in app.page().query_all(&selectors.anchors) {
        let app = app.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |e: Event| {
            e.prevent_default();
            app.on_anchor_click(&link);
        })?;
    }

    if let Some(brand) = app.page().query(&selectors.brand) {
        let app = app.clone();
        listen(&brand, "click", move |e: Event| {
            e.prevent_default();
            app.on_logo_click();
        })?;
    }

    for tag in app.page().query_all(&selectors.tags) {
        for (kind, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let app = app.clone();
            let node = tag.clone();
            listen(&tag, kind, move |_| app.on_hover(&node, entered))?;
        }
    }

    let motion = app.config().motion.clone();
    {
        let app = app.clone();
        watch(
            &watched.revealed,
            motion.reveal_threshold,
            Some(motion.reveal_root_margin.as_str()),
            move |batch| app.on_reveal_batch(&batch),
        )?;
    }
    {
        let threshold = app.config().counter.threshold;
        let app = app.clone();
        watch(&watched.stat_cards, threshold, None, move |batch| app.on_stat_batch(&batch))?;
    }
    {
        let app = app.clone();
        watch(&watched.timeline_items, motion.timeline_threshold, None, move |batch| app.on_timeline_batch(&batch))?;
    }

    console::greet();
    info!("Portfolio effects mounted");
    Ok(())
}

/// Defaults, overridden by the JSON in `<script id="fx-config">` when present.
fn load_config(document: &Document) -> FxConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return FxConfig::default();
    };
    match FxConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring #{}: {}", CONFIG_SCRIPT_ID, e);
            FxConfig::default()
        }
    }
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> FxResult<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Observes `nodes` and hands each notification batch over as
/// `(element, is_intersecting)` pairs in delivery order.
fn watch<F>(nodes: &[Element], threshold: f64, root_margin: Option<&str>, mut on_batch: F) -> FxResult<()>
where
    F: FnMut(Vec<(Element, bool)>) + 'static,
{
    if nodes.is_empty() {
        return Ok(());
    }
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>())
                .map(|entry| (entry.target(), entry.is_intersecting()))
                .collect();
            on_batch(batch);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for node in nodes {
        observer.observe(node);
    }
    callback.forget();
    Ok(())
}
