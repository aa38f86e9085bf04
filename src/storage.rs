pub const TOKEN_KEY: &str = "token";
pub const THEME_KEY: &str = "theme";

pub fn read(key: &str) -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(value) = storage.get_item(key) {
                return value;
            }
        }
    }
    None
}

pub fn write(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub fn remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn write_read_remove_round_trip() {
        write("storage-test-key", "storage-test-value");
        assert_eq!(read("storage-test-key").as_deref(), Some("storage-test-value"));

        remove("storage-test-key");
        assert_eq!(read("storage-test-key"), None);
    }

    #[wasm_bindgen_test]
    fn read_missing_key_is_none() {
        assert_eq!(read("never-written-key"), None);
    }
}
