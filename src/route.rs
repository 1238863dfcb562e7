// Hash routing: "#/people" lists everyone, "#/people/<slug>" highlights one.

use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

pub const PEOPLE_ROUTE: &str = "#/people";

pub fn person_href(slug: &str) -> String {
    format!("{PEOPLE_ROUTE}/{slug}")
}

/// Extracts the raw (still URI-encoded) slug from a location hash.
pub fn slug_from_hash(hash: &str) -> Option<&str> {
    let path = hash.trim_start_matches('#').trim_start_matches('/');
    let mut parts = path.split('/');
    if parts.next()? != "people" {
        return None;
    }
    parts.next().filter(|s| !s.is_empty())
}

fn decode_uri(s: &str) -> String {
    js_sys::decode_uri_component(s)
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| s.to_string())
}

fn current_slug() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    slug_from_hash(&hash).map(decode_uri)
}

/// The slug in the current route, re-read on every `hashchange`.
#[hook]
pub fn use_route_slug() -> Option<String> {
    let slug = use_state_eq(current_slug);

    {
        let slug = slug.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "hashchange", move |_| slug.set(current_slug()))
            });
            move || drop(listener)
        });
    }

    (*slug).clone()
}
