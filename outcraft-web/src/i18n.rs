//! Text bundle lookup.
//!
//! Every user-visible string is looked up by dotted key from an embedded JSON
//! bundle. Values are either plain strings or plural objects keyed by
//! `Intl.PluralRules` category with `_` as the catch-all.
#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const DEFAULT_LANG: &str = "en";

const LOCALE_TABLE: &[(&str, &str)] = &[("en", include_str!("../i18n/en.json"))];

pub struct TextBundle {
    pub lang: String,
    translations: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    match serde_json::from_str(bundle) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("text bundle {lang} is invalid: {err}");
            None
        }
    }
}

fn build_bundle(lang: &str) -> Option<TextBundle> {
    Some(TextBundle {
        lang: lang.to_string(),
        translations: load_translations(lang)?,
    })
}

fn empty_bundle() -> TextBundle {
    TextBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: Value::Object(serde_json::Map::new()),
    }
}

thread_local! {
    static CURRENT: RefCell<TextBundle> =
        RefCell::new(build_bundle(DEFAULT_LANG).unwrap_or_else(empty_bundle));
}

/// Set the active text bundle and mirror it onto `<html lang>`.
///
/// Unknown languages are ignored.
pub fn set_lang(lang: &str) {
    if let Some(b) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(b));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
                let _ = el.set_attribute("lang", lang);
            }
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = {
            let arr = Array::new();
            arr.push(&JsValue::from_str(lang));
            arr
        };
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        if let Some(selected) = rules.select(count).as_string() {
            return selected;
        }
    }

    let _ = lang;
    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else {
        "other".to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok())
                .map(|count| plural_category(lang, count));
            category
                .as_deref()
                .and_then(|c| map.get(c))
                .or_else(|| map.get("other"))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Translate a key to the current language
///
/// Unknown keys render as the key itself so gaps are visible on the page.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{name}` placeholder substitution.
///
/// A `count` argument selects the plural form.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    CURRENT
        .with(|cell| {
            let bundle = cell.borrow();
            get_nested_value(&bundle.translations, key)
                .and_then(|v| render_value(v, &bundle.lang, args))
        })
        .unwrap_or_else(|| key.to_string())
}

/// Translate a plural key for `count`.
#[must_use]
pub fn tn(key: &str, count: u32) -> String {
    let count = count.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("count", count.as_str());
    tr(key, Some(&vars))
}
