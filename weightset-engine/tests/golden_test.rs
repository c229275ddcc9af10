//! Replays every golden redistribution case from test-fixtures.

use weightset_core::config::EngineConfig;
use weightset_core::errors::WeightErrorCode;
use weightset_core::traits::IWeightRedistributor;
use weightset_engine::WeightSetEngine;

#[test]
fn golden_redistribution_cases() {
    let cases = test_fixtures::redistribution_cases();
    assert!(!cases.is_empty(), "no golden cases found");

    for case in cases {
        let engine = WeightSetEngine::with_config(EngineConfig {
            saturation: case.saturation,
            ..EngineConfig::default()
        });
        let outcome = engine.redistribute(&case.group, &case.locks, &case.member, case.requested);

        match (&case.expected, &case.expected_error, outcome) {
            (Some(expected), None, Ok(result)) => {
                assert_eq!(
                    result.group.len(),
                    expected.len(),
                    "{}: member count changed",
                    case.name
                );
                for (key, want) in expected.iter() {
                    let got = result.group.get(key).unwrap_or(f64::NAN);
                    assert!(
                        (got - want).abs() < 1e-9,
                        "{}: {key} expected {want}, got {got}",
                        case.name
                    );
                }
                assert!(
                    engine.validate_total(&result.group).is_balanced,
                    "{}: result not balanced",
                    case.name
                );
            }
            (None, Some(code), Err(err)) => {
                assert_eq!(err.error_code(), code.as_str(), "{}: wrong error", case.name);
            }
            (_, _, other) => panic!("{}: unexpected outcome {:?}", case.name, other),
        }
    }
}
