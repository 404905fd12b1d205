//! Key path resolution against translation objects.

use crate::config::LookupSettings;
use crate::types::TranslationValue;

/// Default separator between key path segments.
const KEY_SEPARATOR: &str = ".";

/// Default wrapper key unwrapped before lookup.
const WRAPPER_KEY: &str = "translation";

/// Resolves a dot-separated `path` against `object`.
///
/// Returns `None` as soon as an intermediate value cannot be descended into.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_page_kit::{TranslationValue, prop_by_path};
///
/// let object = TranslationValue::from(json!({ "a": { "b": { "c": "x" } } }));
///
/// assert_eq!(prop_by_path(&object, "a.b.c").and_then(TranslationValue::as_str), Some("x"));
/// assert_eq!(prop_by_path(&object, "a.x.c"), None);
/// ```
#[must_use]
pub fn prop_by_path<'a>(object: &'a TranslationValue, path: &str) -> Option<&'a TranslationValue> {
    prop_by_path_with(object, path, KEY_SEPARATOR)
}

/// Resolves `path` against `object` using a custom segment separator.
#[must_use]
pub fn prop_by_path_with<'a>(
    object: &'a TranslationValue,
    path: &str,
    separator: &str,
) -> Option<&'a TranslationValue> {
    path.split(separator).try_fold(object, child)
}

/// Steps one segment down from `value`.
///
/// Sequences are addressed by canonical decimal indices (`0`, `12`), the same
/// way property access on an array works in JSON-shaped data.
fn child<'a>(value: &'a TranslationValue, segment: &str) -> Option<&'a TranslationValue> {
    match value {
        TranslationValue::Mapping(map) => map.get(segment),
        TranslationValue::Sequence(items) => parse_index(segment).and_then(|index| items.get(index)),
        TranslationValue::Scalar(_) => None,
    }
}

/// Parses a canonical decimal array index.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if !canonical {
        return None;
    }
    segment.parse().ok()
}

/// Looks up the translation stored under `key`.
///
/// When `translations` carries a non-null `translation` member, lookup starts
/// there; otherwise it starts at `translations` itself.
///
/// Missing keys and explicit `null` values both yield `None`. Every other
/// value is returned as-is, including `0`, `false` and `""`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_page_kit::{TranslationValue, get_translation_value};
///
/// let wrapped = TranslationValue::from(json!({ "translation": { "a": "y" } }));
/// assert_eq!(get_translation_value(Some(&wrapped), "a").and_then(TranslationValue::as_str), Some("y"));
/// assert_eq!(get_translation_value(Some(&wrapped), ""), None);
/// ```
#[must_use]
pub fn get_translation_value<'a>(
    translations: Option<&'a TranslationValue>,
    key: &str,
) -> Option<&'a TranslationValue> {
    lookup(translations, key, KEY_SEPARATOR, Some(WRAPPER_KEY))
}

/// Same as [`get_translation_value`] with the separator and wrapper key taken
/// from `settings`.
#[must_use]
pub fn get_translation_value_with<'a>(
    translations: Option<&'a TranslationValue>,
    key: &str,
    settings: &LookupSettings,
) -> Option<&'a TranslationValue> {
    lookup(translations, key, &settings.key_separator, settings.wrapper_key.as_deref())
}

/// Shared lookup behind the public entry points.
fn lookup<'a>(
    translations: Option<&'a TranslationValue>,
    key: &str,
    separator: &str,
    wrapper_key: Option<&str>,
) -> Option<&'a TranslationValue> {
    if key.is_empty() {
        return None;
    }
    let translations = translations?;

    let root = wrapper_key
        .and_then(|wrapper| translations.get(wrapper))
        .filter(|wrapped| !wrapped.is_null())
        .unwrap_or(translations);

    prop_by_path_with(root, key, separator).filter(|value| !value.is_null())
}
