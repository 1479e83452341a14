#![cfg(target_arch = "wasm32")]

use lifegrid_engine::Engine;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn engine_ticks_and_exposes_rects() {
    let mut engine = Engine::new(32, 18);
    engine.resize(640.0, 360.0);
    engine.set_speed(0.0);
    engine.set_cell(16, 9, true);

    engine.tick(16.7);

    assert_eq!(engine.population(), 1);
    assert_eq!(engine.rects_len(), 3);
    assert!(!engine.rects_ptr().is_null());
}
