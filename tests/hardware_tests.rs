use pi_hal::{
    platform, CpuMetrics, GpuMetrics, PinController, RamMetrics, SimulatedPin, SENTINEL_READING,
};
use std::time::{Duration, Instant};

/// The minimal acceptance script for any pin backend, run against the
/// simulated pin at index 18.
#[test]
fn test_pin_acceptance_sequence() {
    let mut pin = SimulatedPin::new(18);

    pin.set_high();
    assert!(pin.state());

    pin.set_low();
    assert!(!pin.state());

    pin.toggle();
    assert!(pin.state());

    pin.toggle();
    assert!(!pin.state());

    pin.set_state(true);
    assert!(pin.state());

    pin.set_state(false);
    assert!(!pin.state());

    assert!(pin.shutdown());
}

/// blink(period, cycles) performs two toggles per cycle with a sleep before
/// each, so it blocks for at least period * 2 * cycles milliseconds and the
/// pin ends at its starting level.
#[test]
fn test_blink_blocks_for_full_schedule() {
    let mut pin = SimulatedPin::new(18);
    pin.set_high();

    let start = Instant::now();
    pin.blink(10, 3);
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(10 * 2 * 3),
        "blink returned after {:?}, before the full schedule",
        elapsed
    );
    // Even toggle count: final level equals starting level.
    assert!(pin.state());
}

#[test]
fn test_blink_zero_cycles_returns_immediately() {
    let mut pin = SimulatedPin::new(18);
    pin.set_low();
    pin.blink(1000, 0);
    assert!(!pin.state());
}

#[test]
fn test_shutdown_is_one_shot() {
    let mut pin = SimulatedPin::new(23);
    assert!(pin.shutdown());
    assert!(!pin.shutdown());
    assert!(!pin.shutdown());
}

#[test]
fn test_released_pin_never_panics() {
    let mut pin = SimulatedPin::new(23);
    pin.set_high();
    pin.shutdown();

    pin.set_high();
    pin.set_low();
    pin.toggle();
    pin.set_state(false);
    pin.blink(1, 1);
    assert!(pin.state());
}

/// Off-target, every metric accessor reports its sentinel instead of
/// failing, so this test exercises real queries only on a Pi.
#[test]
fn test_metric_readers_degrade_to_sentinels() {
    let cpu = CpuMetrics::instance();
    let gpu = GpuMetrics::instance();
    let ram = RamMetrics::instance();

    if platform::is_raspberry_pi() {
        assert!((0.0..=100.0).contains(&cpu.utilization_percent()));
        assert!(ram.used_mb() >= 0.0);
    } else {
        assert_eq!(cpu.memory_mb(), SENTINEL_READING);
        assert_eq!(cpu.temp_celsius(), SENTINEL_READING);
        assert_eq!(cpu.utilization_percent(), SENTINEL_READING);
        assert_eq!(gpu.memory_mb(), SENTINEL_READING);
        assert_eq!(gpu.temp_celsius(), SENTINEL_READING);
        assert_eq!(ram.used_mb(), SENTINEL_READING);
    }
}

/// Concurrent first access must yield the identical shared instance.
#[test]
fn test_singleton_identity_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (
                    CpuMetrics::instance() as *const CpuMetrics as usize,
                    GpuMetrics::instance() as *const GpuMetrics as usize,
                    RamMetrics::instance() as *const RamMetrics as usize,
                )
            })
        })
        .collect();

    let expected = (
        CpuMetrics::instance() as *const CpuMetrics as usize,
        GpuMetrics::instance() as *const GpuMetrics as usize,
        RamMetrics::instance() as *const RamMetrics as usize,
    );

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_snapshot_capture_is_serializable() {
    let snapshot = pi_hal::HardwareSnapshot::capture();
    let json = serde_json::to_string(&snapshot).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("timestamp").is_some());
    assert!(value.get("cpu").is_some());
    assert!(value.get("gpu").is_some());
    assert!(value.get("ram").is_some());
}

/// Mirrors the caller-side backend selection: the hardware backend is only
/// constructed after a positive platform check.
#[cfg(feature = "gpio")]
#[test]
fn test_hardware_pin_on_target() {
    use pi_hal::{HardwarePin, DEFAULT_PWM_RANGE};

    if !platform::is_raspberry_pi() {
        return;
    }

    let mut pin =
        HardwarePin::new(18, 0, DEFAULT_PWM_RANGE).expect("hardware pin should be claimable");

    pin.set_high();
    assert!(pin.state());
    pin.set_low();
    assert!(!pin.state());

    pin.blink(125, 3);
    assert!(!pin.state());

    assert!(pin.shutdown());
    assert!(!pin.shutdown());
}
