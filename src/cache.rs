//! Formatter caching for the convenience API.
//!
//! Building a [`DecimalFormat`] resolves a locale and constructs three
//! oracles; callers going through [`DecimalValue::to_locale_string`] would
//! otherwise pay that cost on every call.
//!
//! [`DecimalValue::to_locale_string`]: crate::value::DecimalValue::to_locale_string

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use crate::error::OptionsError;
use crate::formatter::DecimalFormat;
use crate::options::FormatOptions;

/// Global cache of default-options formatters, keyed by requested locale.
static CACHE: Mutex<Option<LruCache<String, Arc<DecimalFormat>>>> = Mutex::new(None);

const CACHE_SIZE: usize = 32;

/// Get or build a default-options formatter for `locale`, using the cache.
pub(crate) fn get_or_create(locale: &str) -> Result<Arc<DecimalFormat>, OptionsError> {
    let mut cache_guard = CACHE.lock().unwrap();

    let cache = cache_guard
        .get_or_insert_with(|| LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap()));

    if let Some(format) = cache.get(locale) {
        return Ok(Arc::clone(format));
    }

    let locales: &[&str] = if locale.is_empty() { &[] } else { &[locale] };
    let format = Arc::new(DecimalFormat::new(locales, FormatOptions::default())?);
    cache.put(locale.to_string(), Arc::clone(&format));
    Ok(format)
}
