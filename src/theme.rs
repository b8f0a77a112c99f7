//! Theme Context
//!
//! Dark mode with system-preference detection and localStorage persistence,
//! provided app-wide via the Leptos Context API. The active theme is
//! reflected as a `dark` class on the document root so stylesheets can key
//! off `html.dark`.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "leptos-starter.theme";

/// Persisted theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePrefs {
    pub dark: bool,
}

/// Theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_dark: ReadSignal<bool>,
    set_is_dark: WriteSignal<bool>,
}

impl ThemeContext {
    /// Flip the theme, update the root class, persist the choice
    pub fn toggle(&self) {
        let dark = !self.is_dark.get_untracked();
        self.set_is_dark.set(dark);
        apply_root_class(dark);
        save_prefs(ThemePrefs { dark });
    }
}

/// Resolve the initial theme (stored preference, else system preference),
/// provide the context, and tag the document root. Call once from `App`.
pub fn provide_theme() -> ThemeContext {
    let dark = load_prefs()
        .map(|prefs| prefs.dark)
        .unwrap_or_else(system_prefers_dark);
    apply_root_class(dark);
    let (is_dark, set_is_dark) = signal(dark);
    let ctx = ThemeContext { is_dark, set_is_dark };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn load_prefs() -> Option<ThemePrefs> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn save_prefs(prefs: ThemePrefs) {
    let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(&prefs) {
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
}

fn apply_root_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        web_sys::console::warn_1(&"[Theme] failed to update root class".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefs_round_trip() {
        for dark in [true, false] {
            let raw = serde_json::to_string(&ThemePrefs { dark }).unwrap();
            let back: ThemePrefs = serde_json::from_str(&raw).unwrap();
            assert_eq!(back, ThemePrefs { dark });
        }
    }

    #[test]
    fn prefs_reject_garbage() {
        assert!(serde_json::from_str::<ThemePrefs>("not json").is_err());
    }
}
