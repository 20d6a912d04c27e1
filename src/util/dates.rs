//! Locale date formatting for league timestamps.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Format a unix-seconds timestamp as an Italian short date.
///
/// Uses the browser's locale machinery; outside the browser the raw seconds
/// value is returned, which only ever surfaces in native tests since the
/// timestamps arrive through browser-only fetches.
#[allow(clippy::cast_precision_loss)]
pub fn format_unix_date(seconds: i64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let millis = wasm_bindgen::JsValue::from_f64(seconds as f64 * 1000.0);
        js_sys::Date::new(&millis)
            .to_locale_date_string("it-IT", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        seconds.to_string()
    }
}
