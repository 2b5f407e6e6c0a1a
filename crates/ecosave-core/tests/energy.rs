use ecosave_core::error::CoreError;
use ecosave_core::models::energy::{EnergyUsageInput, PropertyType};

fn terraced_household() -> EnergyUsageInput {
    EnergyUsageInput {
        electricity_kwh: 2500.0,
        gas_m3: 1200.0,
        monthly_cost: 250.0,
        household_size: 2,
        property_type: PropertyType::Terraced,
    }
}

#[test]
fn valid_input_passes() {
    assert_eq!(terraced_household().validate(), Ok(()));
}

#[test]
fn all_electric_home_is_valid() {
    let input = EnergyUsageInput {
        gas_m3: 0.0,
        ..terraced_household()
    };
    assert!(input.validate().is_ok());
}

#[test]
fn zero_electricity_is_rejected() {
    let input = EnergyUsageInput {
        electricity_kwh: 0.0,
        ..terraced_household()
    };
    match input.validate() {
        Err(CoreError::InvalidInput { field, .. }) => assert_eq!(field, "electricityKwh"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn negative_gas_is_rejected() {
    let input = EnergyUsageInput {
        gas_m3: -1.0,
        ..terraced_household()
    };
    assert!(matches!(
        input.validate(),
        Err(CoreError::InvalidInput { field: "gasM3", .. })
    ));
}

#[test]
fn non_finite_monthly_cost_is_rejected() {
    let input = EnergyUsageInput {
        monthly_cost: f64::NAN,
        ..terraced_household()
    };
    assert!(matches!(
        input.validate(),
        Err(CoreError::InvalidInput { field: "monthlyCost", .. })
    ));
}

#[test]
fn household_size_bounds() {
    for size in [0u8, 7] {
        let input = EnergyUsageInput {
            household_size: size,
            ..terraced_household()
        };
        assert!(
            matches!(
                input.validate(),
                Err(CoreError::InvalidInput { field: "householdSize", .. })
            ),
            "size {size} should be rejected"
        );
    }
    for size in 1u8..=6 {
        let input = EnergyUsageInput {
            household_size: size,
            ..terraced_household()
        };
        assert!(input.validate().is_ok(), "size {size} should be accepted");
    }
}

#[test]
fn annual_cost_is_twelve_months() {
    assert_eq!(terraced_household().annual_cost(), 3000.0);
}

#[test]
fn deserializes_camel_case_form() {
    let json = r#"{
        "electricityKwh": 3100,
        "gasM3": 0,
        "monthlyCost": 180.5,
        "householdSize": 4,
        "propertyType": "semi-detached"
    }"#;
    let input: EnergyUsageInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.property_type, PropertyType::SemiDetached);
    assert_eq!(input.monthly_cost, 180.5);
    assert_eq!(input.household_size, 4);
}

#[test]
fn unknown_property_type_fails_to_parse() {
    let json = r#"{
        "electricityKwh": 3100,
        "gasM3": 0,
        "monthlyCost": 180.5,
        "householdSize": 4,
        "propertyType": "castle"
    }"#;
    assert!(serde_json::from_str::<EnergyUsageInput>(json).is_err());
}

#[test]
fn property_type_display_matches_wire_name() {
    assert_eq!(PropertyType::SemiDetached.to_string(), "semi-detached");
    assert_eq!(
        serde_json::to_string(&PropertyType::Apartment).unwrap(),
        "\"apartment\""
    );
}
