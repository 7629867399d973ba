//! Theme publication.
//!
//! The document root is shared by every view, so mutation goes through one
//! owned [`ThemeShell`] with an explicit apply/teardown lifecycle, invoked
//! once per view transition. Server-rendered documents get the same
//! variables as an inline `:root` rule so the first paint is already themed.

use leptos::prelude::*;
use leptos_meta::Style;
use wasm_bindgen::JsCast;

use crate::models::{ColorTheme, CSS_PROPERTY_NAMES};

/// Owner of the CSS custom properties on the document root.
pub struct ThemeShell {
    root: web_sys::HtmlElement,
}

impl ThemeShell {
    /// Grabs the document root. Returns `None` outside a browser.
    pub fn mount() -> Option<Self> {
        let root = web_sys::window()?.document()?.document_element()?;
        root.dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(|root| Self { root })
    }

    /// Publishes the theme's custom properties. Applying the same theme
    /// twice leaves the document in the same state as applying it once.
    pub fn apply(&self, theme: &ColorTheme) {
        let style = self.root.style();
        for (name, value) in theme.css_properties() {
            if style.set_property(name, &value).is_err() {
                log::warn!("Failed to set {name}");
            }
        }
    }

    /// Removes every property [`apply`](Self::apply) may have written.
    pub fn teardown(&self) {
        let style = self.root.style();
        for name in CSS_PROPERTY_NAMES {
            let _ = style.remove_property(name);
        }
    }
}

/// Applies a page document's theme for as long as the page is mounted.
#[component]
pub fn ThemeProvider(
    theme: Option<ColorTheme>,
    children: Children,
) -> impl IntoView {
    let resolved = theme.unwrap_or_else(ColorTheme::fallback);
    let inline_css = resolved.css_root_block();

    Effect::new(move |_| {
        if let Some(shell) = ThemeShell::mount() {
            shell.apply(&resolved);
        }
    });

    on_cleanup(|| {
        if let Some(shell) = ThemeShell::mount() {
            shell.teardown();
        }
    });

    view! {
        <Style>{inline_css}</Style>
        {children()}
    }
}
