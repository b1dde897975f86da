use chrono::{DateTime, Utc};
use wasm_bindgen::JsValue;

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

pub(crate) fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Formats a timestamp the way the browser's locale prefers.
pub(crate) fn format_local_time(at: DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn utc_now_reads_browser_clock() {
        let now = utc_now();
        assert!(now.timestamp() > 1_600_000_000);
    }

    #[wasm_bindgen_test]
    fn local_time_is_not_empty() {
        let at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        assert!(!format_local_time(at).is_empty());
    }

    #[wasm_bindgen_test]
    fn random_seeds_differ() {
        assert_ne!(js_random_seed(), js_random_seed());
    }
}
