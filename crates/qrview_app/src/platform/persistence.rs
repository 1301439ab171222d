use qrview_core::Theme;
use qrview_engine::{KeyValueStore, StoreError};
use qrview_logging::{qr_error, qr_info, qr_warn};

pub(crate) const THEME_KEY: &str = "qr-theme";

/// Reads the stored theme; anything missing, unreadable or unknown yields `None`.
pub(crate) fn load_theme(store: &dyn KeyValueStore) -> Option<Theme> {
    let raw = match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(StoreError::Unavailable) => {
            qr_info!("Theme storage unavailable, using default theme");
            return None;
        }
        Err(err) => {
            qr_warn!("Failed to read stored theme: {}", err);
            return None;
        }
    };

    match raw.parse::<Theme>() {
        Ok(theme) => {
            qr_info!("Loaded stored theme {}", theme);
            Some(theme)
        }
        Err(err) => {
            qr_warn!("Ignoring stored theme: {}", err);
            None
        }
    }
}

pub(crate) fn save_theme(store: &dyn KeyValueStore, theme: Theme) {
    if let Err(err) = store.set(THEME_KEY, theme.as_str()) {
        qr_error!("Failed to persist theme {}: {}", theme, err);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qrview_engine::MemoryStore;

    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Access("quota".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Access("quota".to_string()))
        }
    }

    #[test]
    fn saved_theme_loads_back() {
        let store = MemoryStore::new();
        save_theme(&store, Theme::Light);
        assert_eq!(load_theme(&store), Some(Theme::Light));
        assert_eq!(
            store.writes(),
            vec![(THEME_KEY.to_string(), "light".to_string())]
        );
    }

    #[test]
    fn unknown_or_missing_theme_is_ignored() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), None);

        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store), None);
    }

    #[test]
    fn storage_errors_are_swallowed() {
        assert_eq!(load_theme(&BrokenStore), None);
        save_theme(&BrokenStore, Theme::Dark);
    }
}
