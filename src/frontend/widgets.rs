//! Floating overlay for third-party embeddable widgets.
//!
//! `embed_code` is an opaque HTML/script fragment. Injection recreates
//! `<script>` tags so they execute, then tries to click the widget's own
//! open button. Because the scripts are black boxes, closing is detected
//! heuristically three ways (delegated close-button clicks, the container
//! emptying out, the widget's modal nodes leaving the document), any of
//! which tears the session down. The matching rules themselves live in
//! `models::widgets` as pure functions.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, MutationObserver, MutationObserverInit};

use crate::models::{
    content_looks_closed, is_close_control, is_widget_artifact_class, Widget,
};

const CONTAINER_ID: &str = "brochure-widget-host";

/// Delay before poking the widget's own open button, giving its script a
/// beat to set up.
const AUTO_OPEN_DELAY_MS: i32 = 150;

#[component]
pub fn WidgetOverlay(widgets: Vec<Widget>) -> impl IntoView {
    let active: Vec<Widget> = widgets.into_iter().filter(|w| w.data.is_active).collect();
    let count = active.len();
    if count == 0 {
        return ().into_any();
    }

    let menu_open = RwSignal::new(false);
    let selected: RwSignal<Option<usize>> = RwSignal::new(None);
    let stored = StoredValue::new(active);
    let session: StoredValue<Option<WidgetSession>, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move |_| {
        let choice = selected.get();

        session.update_value(|slot| {
            if let Some(old) = slot.take() {
                old.teardown();
            }
        });

        if let Some(index) = choice {
            if let Some(widget) = stored.with_value(|w| w.get(index).cloned()) {
                let on_close = move || selected.set(None);
                session.set_value(WidgetSession::open(&widget, on_close));
            }
        }
    });

    on_cleanup(move || {
        session.update_value(|slot| {
            if let Some(old) = slot.take() {
                old.teardown();
            }
        });
    });

    let fab_click = move |_| {
        if count == 1 {
            selected.set(Some(0));
        } else {
            menu_open.update(|open| *open = !*open);
        }
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-3">
            <Show when=move || menu_open.get()>
                <ul class="rounded-lg border border-[var(--color-neutral)]
                           bg-[var(--color-background)] shadow-lg py-2">
                    {stored.with_value(|widgets| {
                        widgets
                            .iter()
                            .enumerate()
                            .map(|(index, widget)| {
                                let label = widget.display_name();
                                view! {
                                    <li>
                                        <button
                                            class="block w-full px-4 py-2 text-left text-sm
                                                   hover:bg-[var(--color-neutral)]"
                                            on:click=move |_| {
                                                selected.set(Some(index));
                                                menu_open.set(false);
                                            }
                                        >
                                            {label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    })}
                </ul>
            </Show>
            <button
                class="w-14 h-14 rounded-full shadow-lg text-2xl
                       bg-[var(--color-primary)] text-[var(--color-background)]"
                aria-label="Open support widgets"
                on:click=fab_click
            >
                "💬"
            </button>
        </div>
        <div id=CONTAINER_ID class="widget-embed-host"></div>
    }
    .into_any()
}

type EventCallback = Closure<dyn FnMut(web_sys::Event)>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// One open widget: the injected DOM plus every observer and listener that
/// watches for it closing. Dropped wholesale on close.
struct WidgetSession {
    container: Element,
    observers: Vec<MutationObserver>,
    // Held only to keep the JS-side callbacks alive.
    _observer_callbacks: Vec<ObserverCallback>,
    listeners: Vec<(EventTarget, &'static str, EventCallback)>,
}

impl WidgetSession {
    fn open(widget: &Widget, on_close: impl Fn() + Clone + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let container = document.get_element_by_id(CONTAINER_ID)?;

        container.set_inner_html(&widget.data.embed_code);
        reexecute_scripts(&document, &container);
        defer_auto_open(&container);

        let mut observers = Vec::new();
        let mut observer_callbacks = Vec::new();
        let mut listeners: Vec<(EventTarget, &'static str, EventCallback)> = Vec::new();

        // (a) Delegated clicks on anything close-button-shaped.
        {
            let close = on_close.clone();
            let boundary = container.clone();
            let callback: EventCallback = Closure::new(move |event: web_sys::Event| {
                let Some(target) = event.target() else { return };
                let mut current = target.dyn_into::<Element>().ok();
                while let Some(element) = current {
                    let aria = element.get_attribute("aria-label").unwrap_or_default();
                    if is_close_control(&element.tag_name(), &element.class_name(), &aria) {
                        close();
                        return;
                    }
                    if element.is_same_node(Some(boundary.as_ref())) {
                        return;
                    }
                    current = element.parent_element();
                }
            });
            container
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                .ok()?;
            listeners.push((EventTarget::from(container.clone()), "click", callback));
        }

        // (b) The container shrinking to nothing means the widget closed
        // itself.
        {
            let close = on_close.clone();
            let watched = container.clone();
            let callback: ObserverCallback = Closure::new(move |_records, _observer| {
                if content_looks_closed(&watched.inner_html()) {
                    close();
                }
            });
            let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;
            let init = MutationObserverInit::new();
            init.set_child_list(true);
            init.set_subtree(true);
            observer.observe_with_options(&container, &init).ok()?;
            observers.push(observer);
            observer_callbacks.push(callback);
        }

        // (c) Widgets that render their modal outside the container: watch
        // the body for those nodes disappearing.
        if let Some(body) = document.body() {
            let close = on_close.clone();
            let callback: ObserverCallback =
                Closure::new(move |records: js_sys::Array, _observer| {
                    for record in records.iter() {
                        let Ok(record) = record.dyn_into::<web_sys::MutationRecord>() else {
                            continue;
                        };
                        let removed = record.removed_nodes();
                        for i in 0..removed.length() {
                            let Some(node) = removed.item(i) else { continue };
                            if let Some(element) = node.dyn_ref::<Element>() {
                                if is_widget_artifact_class(&element.class_name()) {
                                    close();
                                    return;
                                }
                            }
                        }
                    }
                });
            let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;
            let init = MutationObserverInit::new();
            init.set_child_list(true);
            init.set_subtree(true);
            observer.observe_with_options(&body, &init).ok()?;
            observers.push(observer);
            observer_callbacks.push(callback);
        }

        // Escape always closes.
        {
            let close = on_close;
            let callback: EventCallback = Closure::new(move |event: web_sys::Event| {
                if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                    if key_event.key() == "Escape" {
                        close();
                    }
                }
            });
            document
                .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                .ok()?;
            listeners.push((EventTarget::from(document), "keydown", callback));
        }

        Some(Self {
            container,
            observers,
            _observer_callbacks: observer_callbacks,
            listeners,
        })
    }

    fn teardown(self) {
        for observer in &self.observers {
            observer.disconnect();
        }
        for (target, name, callback) in &self.listeners {
            let _ = target
                .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref());
        }
        self.container.set_inner_html("");
        sweep_artifacts(&self.container);
    }
}

/// Injected `<script>` tags do not execute; replace each with a fresh
/// element carrying the same source so the browser runs it.
fn reexecute_scripts(document: &Document, container: &Element) {
    let Ok(scripts) = container.query_selector_all("script") else {
        return;
    };
    let stale: Vec<Element> = (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();

    for old in stale {
        let Ok(fresh) = document.create_element("script") else {
            continue;
        };
        if let Some(src) = old.get_attribute("src") {
            let _ = fresh.set_attribute("src", &src);
        }
        if let Some(kind) = old.get_attribute("type") {
            let _ = fresh.set_attribute("type", &kind);
        }
        fresh.set_text_content(old.text_content().as_deref());
        if let Some(parent) = old.parent_node() {
            let _ = parent.replace_child(&fresh, &old);
        }
    }
}

/// Many embeds render collapsed; poke their own open button once the
/// script has had a moment to attach it.
fn defer_auto_open(container: &Element) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = container.clone();
    let callback = Closure::once_into_js(move || {
        if let Ok(Some(button)) = container.query_selector("button, [role='button']") {
            if let Some(button) = button.dyn_ref::<web_sys::HtmlElement>() {
                button.click();
            }
        }
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        AUTO_OPEN_DELAY_MS,
    );
}

/// Some embeds leave modal/backdrop nodes all over the document; remove
/// anything whose class list marks it as widget debris.
fn sweep_artifacts(container: &Element) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all("[class]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Some(element) = node.dyn_ref::<Element>().cloned() else {
            continue;
        };
        if element.is_same_node(Some(container.as_ref())) {
            continue;
        }
        if is_widget_artifact_class(&element.class_name()) {
            element.remove();
        }
    }
}
