#![allow(dead_code)]

use serde_json::{json, Value};
use zatlas::{handle_event, initialize, AppState, Config, Event, Request};

pub fn record(common: &str, code: &str, region: &str, population: u64) -> Value {
    json!({
        "name": { "common": common, "official": format!("Official {common}") },
        "flags": { "png": format!("https://flagcdn.com/w320/{}.png", code.to_lowercase()), "svg": "" },
        "flag": "🏳",
        "population": population,
        "region": region,
        "capital": [format!("{common} City")],
        "currencies": {},
        "languages": {},
        "cca3": code,
    })
}

pub fn world() -> Value {
    json!([
        record("France", "FRA", "Europe", 67_391_582),
        record("Germany", "DEU", "Europe", 83_240_525),
        record("Åland Islands", "ALA", "Europe", 29_458),
        record("Japan", "JPN", "Asia", 125_836_021),
        record("Brazil", "BRA", "Americas", 212_559_409),
        record("Kenya", "KEN", "Africa", 53_771_300),
        record("Albania", "ALB", "Europe", 2_837_743),
    ])
}

pub fn detail(common: &str, code: &str, borders: &[&str]) -> Value {
    let mut value = record(common, code, "Europe", 1_000);
    value["borders"] = json!(borders);
    value["subregion"] = json!("Western Europe");
    value["area"] = json!(551_695.0);
    json!([value])
}

/// Fresh state with web access granted and the list response applied.
pub fn loaded_state() -> AppState {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::PermissionsGranted).expect("grant");
    respond(&mut state, Request::AllCountries, 200, &world());
    state
}

pub fn respond(state: &mut AppState, request: Request, status: u16, body: &Value) -> bool {
    let (render, actions) = handle_event(
        state,
        &Event::Response {
            request,
            status,
            body: serde_json::to_vec(body).expect("serialize fixture"),
        },
    )
    .expect("response");
    assert!(actions.is_empty());
    render
}

pub fn send(state: &mut AppState, event: Event) -> Vec<zatlas::Action> {
    handle_event(state, &event).expect("event").1
}

pub fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}
