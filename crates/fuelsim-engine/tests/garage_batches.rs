//! Integration test: batched command dispatch against real vehicles.
//!
//! Random batches of fill, drive, and trailer commands (including
//! wrong-kind operands) are applied to a mixed garage. After every batch
//! each vehicle must still be within its tank bounds, rejected commands
//! must report the fuel level they left untouched, and the metrics must
//! balance against the observed fuel levels.

use fuelsim_core::{Command, ErrorKind, RejectReason, Scalar};
use fuelsim_engine::{Garage, GarageConfig, VehicleConfig, VehicleSpec};
use proptest::prelude::*;

fn mixed_config() -> GarageConfig {
    GarageConfig {
        vehicles: vec![
            VehicleSpec::new("sedan", VehicleConfig::Car { consumption: 7.0 }),
            VehicleSpec::new(
                "hauler",
                VehicleConfig::Truck {
                    trailer_consumption: 15.0,
                    trailer_count: 2,
                },
            ),
        ],
        max_batch: 64,
    }
}

fn arb_operand() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        4 => (-50i64..700).prop_map(Scalar::Int),
        4 => (-50.0f64..700.0).prop_map(Scalar::Float),
        1 => any::<bool>().prop_map(Scalar::Bool),
        1 => Just(Scalar::from("100")),
        1 => Just(Scalar::Null),
    ]
}

fn arb_command() -> impl Strategy<Value = Command> {
    let target = prop_oneof![Just("sedan"), Just("hauler")];
    (target, 0u8..3, arb_operand()).prop_map(|(name, op, operand)| match op {
        0 => Command::fill_up(name, operand),
        1 => Command::drive(name, operand),
        _ => Command::set_trailer_count(name, operand),
    })
}

#[test]
fn reference_scenarios_through_garage() {
    let mut garage = Garage::new(mixed_config()).unwrap();
    let receipts = garage.submit(vec![
        Command::fill_up("sedan", 100),
        Command::drive("sedan", 200),
        Command::fill_up("hauler", 600),
        Command::drive("hauler", 100),
    ]);
    assert!(receipts.iter().all(|r| r.accepted));
    assert!((garage.vehicle("sedan").unwrap().remaining_fuel() - 86.0).abs() < 1e-9);
    assert!((garage.vehicle("hauler").unwrap().remaining_fuel() - 570.0).abs() < 1e-9);
    assert!((garage.total_remaining_fuel() - 656.0).abs() < 1e-9);
}

#[test]
fn truck_short_on_fuel_through_garage() {
    let mut garage = Garage::new(mixed_config()).unwrap();
    let receipts = garage.submit(vec![
        Command::fill_up("hauler", 10),
        Command::drive("hauler", 100),
    ]);
    assert!(receipts[0].accepted);
    assert!(!receipts[1].accepted);
    assert_eq!(receipts[1].remaining_fuel, Some(10.0));
    match &receipts[1].reason {
        Some(RejectReason::Rejected(e)) => assert_eq!(e.kind(), ErrorKind::Value),
        other => panic!("expected vehicle rejection, got {other:?}"),
    }
}

#[test]
fn boolean_operands_rejected_as_type_errors() {
    let mut garage = Garage::new(mixed_config()).unwrap();
    let receipts = garage.submit(vec![
        Command::fill_up("sedan", true),
        Command::drive("hauler", false),
        Command::set_trailer_count("hauler", true),
    ]);
    for r in &receipts {
        match &r.reason {
            Some(RejectReason::Rejected(e)) => assert!(e.is_type_error(), "{e}"),
            other => panic!("expected type error, got {other:?}"),
        }
    }
    assert_eq!(garage.total_remaining_fuel(), 0.0);
    assert_eq!(garage.metrics().commands_rejected, 3);
}

proptest! {
    #[test]
    fn random_batches_preserve_invariants(
        batches in prop::collection::vec(prop::collection::vec(arb_command(), 0..20), 1..6),
    ) {
        let mut garage = Garage::new(mixed_config()).unwrap();
        let mut submitted = 0u64;

        for batch in batches {
            let levels_before: Vec<f64> = garage
                .names()
                .map(|n| garage.vehicle(n).unwrap().remaining_fuel())
                .collect();
            let len = batch.len();
            let receipts = garage.submit(batch);
            submitted += len as u64;
            prop_assert_eq!(receipts.len(), len);

            for (i, r) in receipts.iter().enumerate() {
                prop_assert_eq!(r.command_index, i);
                prop_assert_eq!(r.accepted, r.reason.is_none());
                prop_assert!(r.remaining_fuel.is_some());
            }

            for name in garage.names() {
                let v = garage.vehicle(name).unwrap();
                prop_assert!(v.remaining_fuel() >= 0.0);
                prop_assert!(v.remaining_fuel() <= v.capacity());
            }

            // An all-rejected batch changes nothing.
            if receipts.iter().all(|r| !r.accepted) {
                let levels_after: Vec<f64> = garage
                    .names()
                    .map(|n| garage.vehicle(n).unwrap().remaining_fuel())
                    .collect();
                prop_assert_eq!(levels_before, levels_after);
            }
        }

        let m = garage.metrics();
        prop_assert_eq!(m.commands_total(), submitted);
        let balance = m.fuel_added - m.fuel_burned;
        prop_assert!((balance - garage.total_remaining_fuel()).abs() < 1e-6);
    }
}
