//! Static inputs shared across harnesses.

use nodelog::LogLevel;

/// Node names used across harnesses.
pub const NODE: &str = "fpga_driver";
pub const OTHER_NODE: &str = "motor_ctrl";

/// Every ordered pair `(lower, higher)` of distinct levels.
pub fn level_pairs() -> Vec<(LogLevel, LogLevel)> {
    let mut pairs = Vec::new();
    for (i, &low) in LogLevel::ALL.iter().enumerate() {
        for &high in &LogLevel::ALL[i + 1..] {
            pairs.push((low, high));
        }
    }
    pairs
}

/// A config file exercising every section.
pub const FULL_CONFIG_TOML: &str = r#"
[logger]
node_name      = "lidar_front"
min_level      = "warn"
local_output   = false
sequence_start = 100

[console]
color = true

[console.colors]
debug = "blue"
warn  = "white"
"#;

/// Messages as a sensor node would produce them.
pub const SENSOR_MESSAGES: &[&str] = &[
    "temperature 41.5 C",
    "voltage 11.9 V",
    "fifo depth 12/64",
    "link up",
    "calibration loaded from /etc/sensor.yaml",
];
