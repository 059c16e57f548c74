//! Common test helpers and sample lines shared across the test suite.

#![allow(dead_code)]

use std::path::PathBuf;

/// Worked example with two quarter parts.
pub const BORING_CAVERNS: &str = "Boring Caverns SE1/4 NW1/4 sec. 16, T. 37 N., R. 10 W., \
    Pulaski County Not shown on Waynesville Quadrangle map The mouth of this cave...";

/// Worked example with a half part.
pub const ANOTHER_CAVE: &str = "Another Cave S1/2 sec. 15, T. 36 N., R. 12 W., \
    Pulaski County Not shown on Waynesville Quadrangle map There are two large caves...";

/// Worked example straddling two sections.
pub const SOMETHING_BRIDGE: &str = "Something Bridge Sec. 15 or 22, T. 36 N., R. 13 W., \
    Pulaski County Not shown on Richland Quadrangle map This cave is near Ozark...";

/// A line with the `County` keyword missing.
pub const MISSING_COUNTY: &str = "Lost Cave NE1/4 sec. 3, T. 36 N., R. 12 W., Pulaski \
    Not shown on Waynesville Quadrangle map About 200 feet up the hollow.";

/// Path to a fixture under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Contents of a fixture under `tests/data`.
pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture should be readable")
}
