// src/utils/app_time.rs
//! Instant type that works on both native and wasm targets.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}
