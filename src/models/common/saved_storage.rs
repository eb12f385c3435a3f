use crate::constants::SAVED_STORAGE_KEY;
use crate::runtime::{Env, EnvFutureExt, TryEnvFuture};
use crate::types::saved::SavedCollection;
use futures::{future, TryFutureExt};

// Every helper reads the persisted slot again, nothing is cached in memory.

pub fn load_saved<E: Env + 'static>() -> TryEnvFuture<SavedCollection> {
    E::get_storage::<SavedCollection>(SAVED_STORAGE_KEY)
        .map_ok(|saved| saved.unwrap_or_default())
        .boxed_env()
}

pub fn is_saved<E: Env + 'static>(id: &str) -> TryEnvFuture<bool> {
    let id = id.to_owned();
    load_saved::<E>()
        .map_ok(move |saved| saved.contains(&id))
        .boxed_env()
}

/// Resolves with the new membership of `id`.
pub fn toggle_saved<E: Env + 'static>(id: &str) -> TryEnvFuture<bool> {
    let id = id.to_owned();
    load_saved::<E>()
        .and_then(move |mut saved| {
            let is_saved = saved.toggle(&id);
            E::set_storage(SAVED_STORAGE_KEY, Some(&saved)).map_ok(move |_| is_saved)
        })
        .boxed_env()
}

/// Resolves with `false` without writing when `id` was not saved.
pub fn remove_saved<E: Env + 'static>(id: &str) -> TryEnvFuture<bool> {
    let id = id.to_owned();
    load_saved::<E>()
        .and_then(move |mut saved| {
            if saved.remove(&id) {
                E::set_storage(SAVED_STORAGE_KEY, Some(&saved))
                    .map_ok(|_| true)
                    .boxed_env()
            } else {
                future::ok(false).boxed_env()
            }
        })
        .boxed_env()
}
