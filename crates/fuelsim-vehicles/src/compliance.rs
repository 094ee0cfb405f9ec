//! Vehicle trait compliance test helpers.
//!
//! These functions verify that a `Vehicle` implementation satisfies the
//! fuel-state contract. Reused by every backend test module (Car, Truck).
//! Each check takes a factory so it starts from a fresh, empty vehicle.

use fuelsim_core::{CommandPayload, ErrorKind, FuelError, Scalar, Vehicle};

/// Assert that a freshly built vehicle has an empty tank.
pub fn assert_starts_empty(v: &dyn Vehicle) {
    assert_eq!(v.remaining_fuel(), 0.0, "{:?} did not start empty", v.kind());
    assert!(v.capacity() > 0.0);
    assert!(v.consumption() >= 0.0);
}

/// Assert that fills add `min(previous + x, capacity)` and never overflow.
pub fn assert_fill_clamps(v: &mut dyn Vehicle) {
    let cap = v.capacity();
    let step = cap / 3.0;
    for _ in 0..5 {
        let before = v.remaining_fuel();
        v.fill_up(step).expect("positive fill should succeed");
        let expected = (before + step).min(cap);
        assert_eq!(v.remaining_fuel(), expected);
        assert!(v.remaining_fuel() <= cap);
    }
    assert_eq!(v.remaining_fuel(), cap);
}

/// Assert that non-positive and non-finite fills fail without mutation.
pub fn assert_fill_rejects_invalid(v: &mut dyn Vehicle) {
    v.fill_up(1.0).expect("positive fill should succeed");
    for bad in [0.0, -1.0, -0.001, f64::NAN, f64::INFINITY] {
        let err = v.fill_up(bad).expect_err("invalid fill should fail");
        assert_eq!(err.kind(), ErrorKind::Value, "fill_up({bad}) -> {err}");
        assert_eq!(v.remaining_fuel(), 1.0, "fill_up({bad}) mutated fuel");
    }
}

/// Assert that a drive burns exactly `consumption * distance / 100`.
pub fn assert_drive_burns_exactly(v: &mut dyn Vehicle) {
    let cap = v.capacity();
    v.fill_up(cap).expect("fill to capacity should succeed");
    for distance in [0.0, 1.0, 5.777, 100.0] {
        let before = v.remaining_fuel();
        let needed = v.consumption() * distance / 100.0;
        assert_eq!(v.fuel_needed(distance), Ok(needed));
        v.drive(distance).expect("drive within range should succeed");
        assert_eq!(v.remaining_fuel(), before - needed);
        assert!(v.remaining_fuel() >= 0.0);
    }
}

/// Assert that negative or non-finite distances fail without mutation.
pub fn assert_drive_rejects_invalid(v: &mut dyn Vehicle) {
    v.fill_up(10.0).expect("positive fill should succeed");
    for bad in [-1.0, -0.5, f64::NAN, f64::NEG_INFINITY] {
        let err = v.drive(bad).expect_err("invalid drive should fail");
        assert_eq!(err.kind(), ErrorKind::Value, "drive({bad}) -> {err}");
        assert_eq!(v.remaining_fuel(), 10.0, "drive({bad}) mutated fuel");
    }
}

/// Assert that a drive the tank cannot cover fails without mutation.
///
/// Skipped for vehicles that currently burn nothing.
pub fn assert_insufficient_fuel_unchanged(v: &mut dyn Vehicle) {
    if v.consumption() == 0.0 {
        return;
    }
    v.fill_up(1.0).expect("positive fill should succeed");
    // Twice the distance one unit of fuel covers.
    let distance = 200.0 / v.consumption();
    let err = v.drive(distance).expect_err("drive beyond range should fail");
    assert!(
        matches!(err, FuelError::InsufficientFuel { .. }),
        "expected InsufficientFuel, got {err}"
    );
    assert_eq!(v.remaining_fuel(), 1.0);
}

/// Assert that non-numeric command operands are type errors.
pub fn assert_bad_operands_are_type_errors(v: &mut dyn Vehicle) {
    let operands = [
        Scalar::Bool(true),
        Scalar::Bool(false),
        Scalar::from("10"),
        Scalar::Null,
        Scalar::from(vec![10.0]),
    ];
    for op in operands {
        for payload in [
            CommandPayload::FillUp { amount: op.clone() },
            CommandPayload::Drive {
                distance: op.clone(),
            },
        ] {
            let err = v.apply(&payload).expect_err("bad operand should fail");
            assert_eq!(err.kind(), ErrorKind::Type, "{} with {op} -> {err}", payload.name());
        }
    }
    assert_eq!(v.remaining_fuel(), 0.0);
}

/// Run all compliance checks, each on a fresh vehicle from `make`.
pub fn run_full_compliance<V: Vehicle + 'static>(make: impl Fn() -> V) {
    assert_starts_empty(&make());
    assert_fill_clamps(&mut make());
    assert_fill_rejects_invalid(&mut make());
    assert_drive_burns_exactly(&mut make());
    assert_drive_rejects_invalid(&mut make());
    assert_insufficient_fuel_unchanged(&mut make());
    assert_bad_operands_are_type_errors(&mut make());
}
