//! Browser bindings for the engine: the localStorage save slot and the
//! wall clock the day cycle runs against.

pub use mindflow_game::*;

/// localStorage key holding the encoded save blob.
pub const SAVE_KEY: &str = "mindflow.save";

/// Single-slot save store backed by browser `localStorage`. On non-wasm
/// targets it is a no-op so server-side renders stay side-effect free.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSaveStore;

#[derive(Debug, thiserror::Error)]
pub enum SaveStoreError {
    #[error("localStorage: {0}")]
    Storage(String),
    #[error(transparent)]
    Codec(#[from] SaveError),
}

#[cfg(target_arch = "wasm32")]
fn storage() -> Result<web_sys::Storage, SaveStoreError> {
    crate::dom::local_storage()
        .map_err(|err| SaveStoreError::Storage(crate::dom::js_error_message(&err)))
}

#[cfg(target_arch = "wasm32")]
impl GameStorage for LocalSaveStore {
    type Error = SaveStoreError;

    fn save_game(&self, state: &GameState) -> Result<(), Self::Error> {
        let blob = save::encode(state)?;
        storage()?
            .set_item(SAVE_KEY, &blob)
            .map_err(|err| SaveStoreError::Storage(crate::dom::js_error_message(&err)))
    }

    fn load_game(&self) -> Result<Option<GameState>, Self::Error> {
        let blob = storage()?
            .get_item(SAVE_KEY)
            .map_err(|err| SaveStoreError::Storage(crate::dom::js_error_message(&err)))?;
        match blob {
            Some(raw) => Ok(Some(save::decode(&raw)?)),
            None => Ok(None),
        }
    }

    fn delete_save(&self) -> Result<(), Self::Error> {
        storage()?
            .remove_item(SAVE_KEY)
            .map_err(|err| SaveStoreError::Storage(crate::dom::js_error_message(&err)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl GameStorage for LocalSaveStore {
    type Error = SaveStoreError;

    fn save_game(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    fn load_game(&self) -> Result<Option<GameState>, Self::Error> {
        Ok(None)
    }

    fn delete_save(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Today's local calendar day as a `YYYY-MM-DD` key.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn today_string() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Fixed day key so server-side renders are deterministic.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn today_string() -> String {
    String::from("2024-01-01")
}

/// Seed for a fresh run, taken from the millisecond clock.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn seed_from_clock() -> u64 {
    u64::try_from(mindflow_game::numbers::floor_f64_to_i64(js_sys::Date::now())).unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn seed_from_clock() -> u64 {
    0
}
