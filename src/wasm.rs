//! WebAssembly bindings for Gridlife.
//!
//! Provides a thin wrapper around [`Simulation`] for browser visualizers:
//! JSON configuration in, flat byte buffers out.

use wasm_bindgen::prelude::*;

use crate::engine::{SequencePhase, Simulation};
use crate::schema::{EngineConfig, Pattern, RuleSequence, RuleTable};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

/// WebAssembly wrapper around a [`Simulation`].
#[wasm_bindgen]
pub struct WasmSimulation {
    sim: Simulation,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Create a simulation from a JSON [`EngineConfig`].
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmSimulation, JsValue> {
        let config: EngineConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;
        let sim = Simulation::new(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?;
        Ok(WasmSimulation { sim })
    }

    /// Advance exactly one generation (pauses the clock).
    #[wasm_bindgen]
    pub fn step(&mut self) {
        self.sim.step();
    }

    /// Feed elapsed seconds (e.g. a requestAnimationFrame delta) to the
    /// clock. Returns true if a generation ran.
    #[wasm_bindgen]
    pub fn advance(&mut self, dt: f32) -> bool {
        self.sim.advance(dt)
    }

    /// Let the clock drive steps.
    #[wasm_bindgen]
    pub fn run(&mut self) {
        self.sim.run();
    }

    /// Stop the clock.
    #[wasm_bindgen]
    pub fn pause(&mut self) {
        self.sim.pause();
    }

    /// Pause, kill every cell, and return to generation 0.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.sim.reset();
    }

    /// Reallocate the grid.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), JsValue> {
        self.sim
            .resize(width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Select the rule table from JSON.
    #[wasm_bindgen(js_name = setRules)]
    pub fn set_rules(&mut self, rules_json: &str) -> Result<(), JsValue> {
        let rules: RuleTable = serde_json::from_str(rules_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid rules JSON: {e}")))?;
        self.sim
            .set_rule_table(rules)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Select the stamp brush from JSON.
    #[wasm_bindgen(js_name = setBrush)]
    pub fn set_brush(&mut self, pattern_json: &str) -> Result<(), JsValue> {
        let pattern: Pattern = serde_json::from_str(pattern_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid pattern JSON: {e}")))?;
        self.sim.set_brush(pattern);
        Ok(())
    }

    /// Stamp the brush at a viewport-relative anchor.
    #[wasm_bindgen(js_name = stampAt)]
    pub fn stamp_at(&mut self, x: i32, y: i32) {
        self.sim.stamp_at(x, y);
    }

    /// Clear the grid and place a JSON pattern centered on it.
    #[wasm_bindgen(js_name = placePreset)]
    pub fn place_preset(&mut self, pattern_json: &str) -> Result<(), JsValue> {
        let pattern: Pattern = serde_json::from_str(pattern_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid pattern JSON: {e}")))?;
        self.sim.place_preset_centered(&pattern);
        Ok(())
    }

    /// Rewrite every cell: alive with the given probability.
    #[wasm_bindgen]
    pub fn randomize(&mut self, chance: f32) -> Result<(), JsValue> {
        self.sim
            .randomize(chance)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Start a scripted sequence from JSON.
    #[wasm_bindgen(js_name = startSequence)]
    pub fn start_sequence(&mut self, sequence_json: &str) -> Result<(), JsValue> {
        let sequence: RuleSequence = serde_json::from_str(sequence_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid sequence JSON: {e}")))?;
        self.sim
            .start_sequence(sequence)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Abandon the sequence; the grid keeps its state.
    #[wasm_bindgen(js_name = stopSequence)]
    pub fn stop_sequence(&mut self) {
        self.sim.stop_sequence();
    }

    /// Flat row-major cell buffer (0 = dead, 1 = alive).
    #[wasm_bindgen(js_name = getCells)]
    pub fn get_cells(&self) -> Vec<u8> {
        self.sim.cells().to_vec()
    }

    /// Full state snapshot as a JS object.
    #[wasm_bindgen(js_name = getSnapshot)]
    pub fn get_snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.sim.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Aggregate statistics as a JS object.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.sim.stats())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Grid width in cells.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.sim.width()
    }

    /// Grid height in cells.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.sim.height()
    }

    /// Generations since the last reset.
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 {
        self.sim.generation()
    }

    /// Whether the clock is driving steps.
    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }

    /// Whether a sequence is loaded and not yet finished.
    #[wasm_bindgen(getter, js_name = isSequenceActive)]
    pub fn is_sequence_active(&self) -> bool {
        matches!(self.sim.sequence_phase(), SequencePhase::Armed { .. })
    }
}
