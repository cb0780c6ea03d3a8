use folio_core::PreferenceStore;
use web_sys::Storage;

/// `localStorage`-backed preferences. Reads come back empty and writes fail
/// softly when storage is blocked (private mode, sandboxed iframes).
pub(crate) struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::warn!("theme: storage unavailable");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let Some(storage) = self.storage.as_ref() else {
            return Err("storage unavailable".to_string());
        };
        storage
            .set_item(key, value)
            .map_err(|_| format!("storage set failed for {key}"))
    }
}
