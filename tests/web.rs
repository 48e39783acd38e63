//! Facade checks; they need a JS host (`wasm-pack test --node`).
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use lifezone_engine::Life;

#[wasm_bindgen_test]
fn facade_runs_a_blinker() {
    let mut life = Life::new(3).unwrap();
    life.load_builtin("blinker".to_string()).unwrap();
    let before = life.window(-2, -2, 5, 5).unwrap();

    life.step();
    assert_ne!(life.window(-2, -2, 5, 5).unwrap(), before);
    life.step();
    assert_eq!(life.window(-2, -2, 5, 5).unwrap(), before);
    assert_eq!(life.generation(), 2);
    assert_eq!(life.population(), 3);
}

#[wasm_bindgen_test]
fn facade_rejects_even_zone_size() {
    assert!(Life::new(4).is_err());
    assert!(Life::from_config_json(r#"{ "zoneSize": 2 }"#.to_string()).is_err());
}

#[wasm_bindgen_test]
fn facade_exposes_zones() {
    let mut life = Life::new(3).unwrap();
    life.toggle(0, 0);
    life.toggle(4, 0);
    let addresses = life.zone_addresses();
    assert_eq!(addresses.len(), 4);
    assert_eq!(life.zone_cells(0, 0).unwrap()[4], 1);
    assert!(life.zone_cells(5, 5).is_none());

    let fork = life.fork();
    life.clear();
    assert_eq!(fork.population(), 2);
}

#[wasm_bindgen_test]
fn facade_refuses_huge_requests() {
    let mut life = Life::new(3).unwrap();
    assert!(life.window(0, 0, u32::MAX, u32::MAX).is_err());
    assert!(life.load_random(u32::MAX, u32::MAX, 1).is_err());
    assert!(life.load_random(8, 8, 1).is_ok());
    assert!(life.population() > 0);
}
