mod common;

use common::{ScriptedModel, transport_error};
use ecosave_core::models::energy::{EnergyUsageInput, PropertyType};
use ecosave_gemini::advice::{FALLBACK_ROI_YEARS, FALLBACK_TIPS, fallback_report, generate_advice};
use ecosave_gemini::error::GeminiError;
use ecosave_gemini::outcome::{FailureKind, Source};

const MODEL: &str = "gemini-test-flash";

fn terraced_household() -> EnergyUsageInput {
    EnergyUsageInput {
        electricity_kwh: 2500.0,
        gas_m3: 1200.0,
        monthly_cost: 250.0,
        household_size: 2,
        property_type: PropertyType::Terraced,
    }
}

fn assert_fallback_for(monthly_cost: f64, report: &ecosave_core::models::report::SavingsReport) {
    let tolerance = 1e-9 * monthly_cost.max(1.0);
    assert!((report.current_annual_cost - 12.0 * monthly_cost).abs() < tolerance);
    assert!((report.projected_annual_cost - 9.6 * monthly_cost).abs() < tolerance);
    assert!((report.potential_savings - 2.4 * monthly_cost).abs() < tolerance);
    assert_eq!(report.roi_year, FALLBACK_ROI_YEARS);
    assert_eq!(report.tips, FALLBACK_TIPS);
}

#[tokio::test]
async fn transport_failure_returns_documented_fallback() {
    let model = ScriptedModel::failing(transport_error());
    let outcome = generate_advice(&model, MODEL, &terraced_household()).await;

    let report = &outcome.value;
    assert_eq!(report.current_annual_cost, 3000.0);
    assert_eq!(report.projected_annual_cost, 2400.0);
    assert_eq!(report.potential_savings, 600.0);
    assert_eq!(report.roi_year, 3.5);
    assert_eq!(
        report.tips,
        vec![
            "Controleer uw isolatie.",
            "Overweeg zonnepanelen.",
            "Zet de thermostaat een graadje lager.",
        ]
    );
    assert_eq!(outcome.failure(), Some(FailureKind::Transport));
}

#[tokio::test]
async fn fallback_scales_with_monthly_cost() {
    for monthly_cost in [1.0, 99.99, 180.5, 1234.0] {
        let input = EnergyUsageInput {
            monthly_cost,
            ..terraced_household()
        };
        let model = ScriptedModel::failing(transport_error());
        let outcome = generate_advice(&model, MODEL, &input).await;
        assert_fallback_for(monthly_cost, &outcome.value);
        assert_eq!(outcome.value, fallback_report(&input));
    }
}

#[tokio::test]
async fn empty_reply_falls_back() {
    let model = ScriptedModel::replying("");
    let outcome = generate_advice(&model, MODEL, &terraced_household()).await;
    assert_eq!(outcome.failure(), Some(FailureKind::EmptyResponse));
    assert_fallback_for(250.0, &outcome.value);
}

#[tokio::test]
async fn malformed_json_falls_back() {
    let model = ScriptedModel::replying("{\"currentAnnualCost\": 3000,");
    let outcome = generate_advice(&model, MODEL, &terraced_household()).await;
    assert_eq!(outcome.failure(), Some(FailureKind::MalformedResponse));
    assert_fallback_for(250.0, &outcome.value);
}

#[tokio::test]
async fn reply_missing_required_field_falls_back() {
    let model = ScriptedModel::replying(
        r#"{"currentAnnualCost": 3000, "projectedAnnualCost": 2100, "tips": [], "roiYear": 4}"#,
    );
    let outcome = generate_advice(&model, MODEL, &terraced_household()).await;
    match &outcome.source {
        Source::Fallback { failure, detail } => {
            assert_eq!(*failure, FailureKind::MalformedResponse);
            assert!(detail.contains("potentialSavings"), "detail: {detail}");
        }
        Source::Generated => panic!("expected fallback"),
    }
}

#[tokio::test]
async fn rejected_api_key_is_tagged_as_authentication() {
    let model = ScriptedModel::failing(GeminiError::Api {
        status: 400,
        body: r#"{"error":{"status":"INVALID_ARGUMENT","details":[{"reason":"API_KEY_INVALID"}]}}"#
            .to_string(),
    });
    let outcome = generate_advice(&model, MODEL, &terraced_household()).await;
    assert_eq!(outcome.failure(), Some(FailureKind::Authentication));
    assert_fallback_for(250.0, &outcome.value);
}

#[tokio::test]
async fn conforming_reply_is_returned_verbatim() {
    // Savings deliberately inconsistent with the two costs: nothing is recomputed.
    let model = ScriptedModel::replying(
        r#"{
            "currentAnnualCost": 3012.5,
            "projectedAnnualCost": 2150,
            "potentialSavings": 700,
            "tips": ["Isoleer de spouwmuur.", "Plaats HR++ glas.", "Leg 8 zonnepanelen."],
            "roiYear": 6.25
        }"#,
    );
    let outcome = generate_advice(&model, MODEL, &terraced_household()).await;

    assert_eq!(outcome.source, Source::Generated);
    let report = outcome.value;
    assert_eq!(report.current_annual_cost, 3012.5);
    assert_eq!(report.projected_annual_cost, 2150.0);
    assert_eq!(report.potential_savings, 700.0);
    assert_eq!(report.roi_year, 6.25);
    assert_eq!(
        report.tips,
        vec!["Isoleer de spouwmuur.", "Plaats HR++ glas.", "Leg 8 zonnepanelen."]
    );
}

#[tokio::test]
async fn tip_count_is_not_enforced() {
    let model = ScriptedModel::replying(
        r#"{"currentAnnualCost": 1, "projectedAnnualCost": 1, "potentialSavings": 0,
            "tips": ["Alleen deze."], "roiYear": 0}"#,
    );
    let outcome = generate_advice(&model, MODEL, &terraced_household()).await;
    assert!(!outcome.is_fallback());
    assert_eq!(outcome.value.tips.len(), 1);
}

#[tokio::test]
async fn request_is_structured_with_household_profile() {
    let model = ScriptedModel::failing(transport_error());
    generate_advice(&model, MODEL, &terraced_household()).await;

    let request = model.last_request();
    assert_eq!(request.model, MODEL);
    assert!(request.system_instruction.is_none());
    assert_eq!(request.contents.len(), 1);

    let prompt = &request.contents[0].text;
    assert!(prompt.contains("Electricity: 2500 kWh/year"));
    assert!(prompt.contains("Gas: 1200 m3/year"));
    assert!(prompt.contains("Monthly Cost: €250"));
    assert!(prompt.contains("Household Size: 2 persons"));
    assert!(prompt.contains("Property Type: terraced"));

    let schema = request.response_schema.expect("advice must request a schema");
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        required,
        vec!["currentAnnualCost", "projectedAnnualCost", "potentialSavings", "tips", "roiYear"]
    );
    assert_eq!(schema["properties"]["tips"]["items"]["type"], "STRING");
}

#[tokio::test]
async fn identical_inputs_give_identical_outcomes() {
    let reply = r#"{"currentAnnualCost": 3000, "projectedAnnualCost": 2400,
                    "potentialSavings": 600, "tips": ["a", "b", "c"], "roiYear": 5}"#;

    let ok_model = ScriptedModel::replying(reply);
    let first = generate_advice(&ok_model, MODEL, &terraced_household()).await;
    let second = generate_advice(&ok_model, MODEL, &terraced_household()).await;
    assert_eq!(first, second);

    let failing = ScriptedModel::failing(transport_error());
    let first = generate_advice(&failing, MODEL, &terraced_household()).await;
    let second = generate_advice(&failing, MODEL, &terraced_household()).await;
    assert_eq!(first, second);

    let requests = failing.requests();
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn works_through_a_trait_object() {
    let model = ScriptedModel::failing(transport_error());
    let dyn_model: &dyn ecosave_gemini::client::GenerativeModel = &model;
    let outcome = generate_advice(dyn_model, MODEL, &terraced_household()).await;
    assert!(outcome.is_fallback());
}
