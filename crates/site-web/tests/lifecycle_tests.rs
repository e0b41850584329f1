// Host-side tests for hero mount bookkeeping across page transitions.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn mount_on_a_visible_page_is_installed() {
    let page = PageLifecycle::new();
    let ticket = page.begin_mount();
    assert!(page.is_current(ticket));
}

#[test]
fn mount_finishing_after_pagehide_is_discarded() {
    let page = PageLifecycle::new();
    let ticket = page.begin_mount();
    page.hide();
    assert!(!page.is_current(ticket));
}

#[test]
fn restore_from_cache_requests_a_fresh_mount() {
    let page = PageLifecycle::new();
    let first = page.begin_mount();
    page.hide();
    assert!(page.show(true));
    let second = page.begin_mount();
    assert!(page.is_current(second));
    // The mount that was in flight when the page was hidden stays stale.
    assert!(!page.is_current(first));
}

#[test]
fn ordinary_pageshow_does_not_remount() {
    let page = PageLifecycle::new();
    assert!(!page.show(false));
    let ticket = page.begin_mount();
    assert!(page.is_current(ticket));
}
