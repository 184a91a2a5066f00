//! WebAssembly bindings for the ReColl core
//!
//! The web UI keeps the resource list as a plain JS array and calls into
//! these bindings on every filter state change. Values cross the boundary via
//! `js-sys` reflection; survivors are reported back as indices into the
//! caller's array so the UI never re-materializes its records.

use wasm_bindgen::prelude::*;

use rc_core::types::{Category, Preview, Resource, ResourceKind};
use rc_core::FilterCriteria;

#[wasm_bindgen]
pub fn classify(url: &str) -> String {
    rc_core::classify(url).as_str().to_string()
}

#[wasm_bindgen]
pub fn category_label(name: &str) -> Option<String> {
    parse_category(name).map(|category| category.label().to_string())
}

#[wasm_bindgen]
pub fn category_icon(name: &str) -> Option<String> {
    parse_category(name).map(|category| category.icon().to_string())
}

#[wasm_bindgen]
pub fn extract_youtube_id(url: &str) -> Option<String> {
    rc_core::extract_youtube_id(url).map(str::to_string)
}

#[wasm_bindgen]
pub fn extract_instagram_reel_id(url: &str) -> Option<String> {
    rc_core::extract_instagram_reel_id(url).map(str::to_string)
}

#[wasm_bindgen]
pub fn favicon_url(url: &str) -> String {
    rc_core::favicon_url(url)
}

/// Derive the `{ type, url }` preview hint recorded when a link is saved.
#[wasm_bindgen]
pub fn preview_for_url(url: &str) -> JsValue {
    let preview = Preview::for_url(url);

    let result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&result, &"type".into(), &JsValue::from_str(preview.kind.as_str()));
    let _ = js_sys::Reflect::set(&result, &"url".into(), &JsValue::from_str(&preview.url));
    result.into()
}

/// Filter the UI's resource array.
///
/// `resources` is an array of objects shaped like the backend's records
/// (`title`, `tags`, `url`, ...); `tags` is the array of selected tag chips;
/// `category` is a category name or absent. Returns the indices of surviving
/// elements, in input order. Malformed entries and unknown category names are
/// skipped with a console warning rather than failing the call.
#[wasm_bindgen]
pub fn filter_resources(
    resources: JsValue,
    query: &str,
    tags: JsValue,
    category: Option<String>,
) -> js_sys::Array {
    let criteria = FilterCriteria {
        query: query.to_string(),
        tags: string_array(&tags),
        category: category.as_deref().and_then(parse_category),
    };

    let survivors = js_sys::Array::new();
    let input = js_sys::Array::from(&resources);

    for (index, value) in input.iter().enumerate() {
        let resource = match resource_from_js(&value) {
            Some(resource) => resource,
            None => {
                warn(&format!("skipping malformed resource at index {index}"));
                continue;
            }
        };

        if criteria.matches(&resource) {
            survivors.push(&JsValue::from(index as u32));
        }
    }

    survivors
}

fn parse_category(name: &str) -> Option<Category> {
    match name.parse() {
        Ok(category) => Some(category),
        Err(_) => {
            warn(&format!("unknown category: {name}"));
            None
        }
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

fn string_array(value: &JsValue) -> Vec<String> {
    js_sys::Array::from(value)
        .iter()
        .filter_map(|entry| entry.as_string())
        .collect()
}

fn resource_from_js(value: &JsValue) -> Option<Resource> {
    if !value.is_object() {
        return None;
    }

    let title = get(value, "title")?.as_string()?;
    let id = get(value, "id").and_then(|v| v.as_string()).unwrap_or_default();
    let kind = get(value, "type")
        .and_then(|v| v.as_string())
        .map(|s| ResourceKind::from_str(&s))
        .unwrap_or(ResourceKind::Link);
    let tags = get(value, "tags").map(|v| string_array(&v)).unwrap_or_default();
    let url = get(value, "url").and_then(|v| v.as_string());

    Some(Resource {
        id,
        title,
        tags,
        kind,
        url,
        preview: None,
    })
}

fn get(value: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(value, &key.into()).ok()
}
