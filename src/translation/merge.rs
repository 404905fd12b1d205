//! Deep merge of translation objects.

use crate::types::{
    TranslationMap,
    TranslationValue,
};

/// Merges `source` over `target` into a new mapping.
///
/// Nested mappings present on both sides are merged recursively. Any other
/// source value, sequences included, replaces the target value wholesale.
/// Keys present only in `target` are kept.
///
/// Keys keep the position they have in `target`; keys new in `source` are
/// appended after them, in source order.
///
/// A non-mapping `target` contributes no keys; a non-mapping `source` leaves
/// the copy of `target` unchanged.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_page_kit::{TranslationValue, deep_merge};
///
/// let base = TranslationValue::from(json!({ "nav": { "home": "Home", "about": "About" } }));
/// let page = TranslationValue::from(json!({ "nav": { "home": "Start" } }));
///
/// let merged = TranslationValue::Mapping(deep_merge(&base, &page));
/// assert_eq!(
///     merged,
///     TranslationValue::from(json!({ "nav": { "home": "Start", "about": "About" } }))
/// );
/// ```
#[must_use]
pub fn deep_merge(target: &TranslationValue, source: &TranslationValue) -> TranslationMap {
    let mut output = target.as_mapping().cloned().unwrap_or_default();

    if let Some(source) = source.as_mapping() {
        merge_into(&mut output, source);
    }

    output
}

/// Overlays `source` onto `output` in place.
fn merge_into(output: &mut TranslationMap, source: &TranslationMap) {
    for (key, source_value) in source {
        match (output.get_mut(key), source_value) {
            (Some(TranslationValue::Mapping(existing)), TranslationValue::Mapping(nested)) => {
                merge_into(existing, nested);
            }
            _ => {
                output.insert(key.clone(), source_value.clone());
            }
        }
    }
}

/// Assembles the translations of a page from shared `base` translations and
/// page-specific ones, `page` taking priority at every nesting level.
///
/// A JSON `null` document counts as absent. When only one side is present it
/// is returned unchanged.
#[must_use]
pub fn build_translations(
    base: Option<TranslationValue>,
    page: Option<TranslationValue>,
) -> Option<TranslationValue> {
    match (present(base), present(page)) {
        (None, None) => None,
        (None, Some(page)) => Some(page),
        (Some(base), None) => Some(base),
        (Some(base), Some(page)) => Some(TranslationValue::Mapping(deep_merge(&base, &page))),
    }
}

/// Treats a `null` document as absent.
fn present(value: Option<TranslationValue>) -> Option<TranslationValue> {
    value.filter(|value| !value.is_null())
}
