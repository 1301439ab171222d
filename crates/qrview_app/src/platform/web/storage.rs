use std::rc::Rc;

use qrview_engine::{KeyValueStore, MemoryStore, StoreError};
use qrview_logging::qr_warn;
use web_sys::{Storage, Window};

use super::describe_js;

struct LocalStorage {
    storage: Storage,
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|err| StoreError::Access(describe_js(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError::Access(describe_js(&err)))
    }
}

/// `localStorage`, or a session-only store when the browser denies it.
pub(super) fn open(window: &Window) -> Rc<dyn KeyValueStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Rc::new(LocalStorage { storage }),
        Ok(None) => {
            qr_warn!("localStorage unavailable; theme will not persist");
            Rc::new(MemoryStore::new())
        }
        Err(err) => {
            qr_warn!(
                "localStorage denied ({}); theme will not persist",
                describe_js(&err)
            );
            Rc::new(MemoryStore::new())
        }
    }
}
