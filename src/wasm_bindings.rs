//! WebAssembly bindings for the visualizer core
//!
//! Exposes [`Session`] to JavaScript via `wasm-bindgen`. The page owns the
//! timer: `start()` returns a run id, each tick calls `advance(run)` and
//! renders the returned step, and the timer stops when `advance` yields
//! `null`. A timer left over from before `reset()` still carries the old
//! run id, so its next `advance` returns `null` without touching the new run.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::algorithm::Algorithm;
use crate::config::{Config, DEFAULT_DATASET};
use crate::session::{RunTicket, Session};
use crate::step::Step;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The dataset every visualizer starts from.
#[wasm_bindgen(js_name = defaultDataset)]
pub fn default_dataset() -> Vec<i32> {
    DEFAULT_DATASET.to_vec()
}

#[derive(Serialize)]
struct CatalogEntry {
    name: &'static str,
    title: &'static str,
    complexity: &'static str,
    summary: &'static str,
    stable: bool,
    delay_ms: u64,
}

fn catalog() -> Vec<CatalogEntry> {
    Algorithm::ALL
        .into_iter()
        .map(|a| CatalogEntry {
            name: a.name(),
            title: a.title(),
            complexity: a.complexity(),
            summary: a.summary(),
            stable: a.is_stable(),
            delay_ms: a.default_delay().as_millis() as u64,
        })
        .collect()
}

/// Catalog of every algorithm, as shown on the landing page.
#[wasm_bindgen]
pub fn algorithms() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&catalog()).map_err(to_js_error)
}

#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session for `algorithm` (e.g. `"merge"` or `"mergeSort"`).
    #[wasm_bindgen(constructor)]
    pub fn new(algorithm: &str) -> Result<WasmSession, JsValue> {
        let algorithm: Algorithm = algorithm.parse().map_err(to_js_error)?;
        Ok(WasmSession::with_algorithm(algorithm))
    }

    /// Begin a run and return its id, or `undefined` if one is already in
    /// progress.
    pub fn start(&mut self) -> Result<Option<u64>, JsValue> {
        let ticket = self.inner.start().map_err(to_js_error)?;
        Ok(ticket.map(RunTicket::id))
    }

    /// Apply and return the next step of run `run`, or `null` once that run
    /// is over or has been reset.
    pub fn advance(&mut self, run: u64) -> Result<JsValue, JsValue> {
        match self.next_step(run) {
            Some(step) => serde_wasm_bindgen::to_value(&step).map_err(to_js_error),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn data(&self) -> Vec<i32> {
        self.inner.data().to_vec()
    }

    /// Milliseconds the page should wait after a paced step.
    #[wasm_bindgen(getter, js_name = delayMs)]
    pub fn delay_ms(&self) -> u64 {
        self.inner.algorithm().default_delay().as_millis() as u64
    }
}

impl WasmSession {
    fn with_algorithm(algorithm: Algorithm) -> Self {
        WasmSession {
            inner: Session::new(algorithm, Config::default()),
        }
    }

    fn next_step(&mut self, run: u64) -> Option<Step> {
        self.inner.resume(RunTicket::from_id(run))
    }
}
