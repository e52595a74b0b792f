//! Shared inputs for integration tests.

use serde_json::{json, Value};

/// Template used by the building walk-through: building, floor, VAV box.
pub const BUILDING_TEMPLATE: &str = "slot:/Building{[]}/Floor{[]}/VAV{[]}{[]}";

/// Ranges for [`BUILDING_TEMPLATE`]: 3 buildings, 5 floors, 5 boxes, 2 letters.
pub const BUILDING_RANGES: [&str; 4] = ["A:A..C", "1..5", "1..5", "A:A..B"];

/// A plan linking one AHU's zone outputs to three VAV inputs.
pub fn ahu_to_vav_plan() -> Value {
    json!({
        "from": { "template": "slot:/AHU1", "range": "1..3", "slot": "zone{[]}Out" },
        "to": { "template": "slot:/Floor1/VAV{[]}", "range": "1..3", "slot": "in" }
    })
}

/// A plan whose sides compile to different lengths.
pub fn mismatched_plan() -> Value {
    json!({
        "from": { "template": "slot:/AHU{[]}", "range": "1..4", "slot": "out" },
        "to": { "template": "slot:/VAV{[]}", "range": "1..2", "slot": "in" }
    })
}
