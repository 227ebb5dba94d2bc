//! Raw platform data sources for the metric readers.
//!
//! Thin query helpers over the Raspberry Pi thermal sysfs node and the
//! `vcgencmd` vendor tool. Every helper returns `Option`; the readers map
//! `None` to their sentinel reading.

use std::fs;
use std::process::Command;

/// Read the SoC temperature from thermal_zone0, in degrees Celsius.
pub fn soc_temp_celsius() -> Option<f64> {
    let raw = fs::read_to_string("/sys/class/thermal/thermal_zone0/temp").ok()?;
    let millicelsius = raw.trim().parse::<i64>().ok()?;
    Some(millicelsius as f64 / 1000.0)
}

/// Read the GPU core temperature via `vcgencmd measure_temp`.
pub fn gpu_temp_celsius() -> Option<f64> {
    let output = vcgencmd(&["measure_temp"])?;
    parse_measure_temp(&output)
}

/// Read the memory split for one side of the ARM/GPU divide, in megabytes.
///
/// `section` is `"arm"` or `"gpu"`, matching `vcgencmd get_mem` arguments.
pub fn memory_split_mb(section: &str) -> Option<f64> {
    let output = vcgencmd(&["get_mem", section])?;
    parse_get_mem(&output, section)
}

/// Run `vcgencmd` with the given arguments and capture stdout.
fn vcgencmd(args: &[&str]) -> Option<String> {
    let output = Command::new("vcgencmd").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse `temp=48.3'C` output from `vcgencmd measure_temp`.
fn parse_measure_temp(output: &str) -> Option<f64> {
    output
        .trim()
        .strip_prefix("temp=")?
        .strip_suffix("'C")?
        .parse::<f64>()
        .ok()
}

/// Parse `arm=948M` / `gpu=76M` output from `vcgencmd get_mem`.
fn parse_get_mem(output: &str, section: &str) -> Option<f64> {
    output
        .trim()
        .strip_prefix(section)?
        .strip_prefix('=')?
        .strip_suffix('M')?
        .parse::<f64>()
        .ok()
}
