mod app;
mod effects;
mod persistence;
mod services;
mod ui;

#[cfg(target_arch = "wasm32")]
pub(crate) mod web;

#[cfg(test)]
mod testing;
