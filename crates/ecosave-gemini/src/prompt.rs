//! Prompt text and response schema for the three workflows.

use ecosave_core::models::audit::AuditRecord;
use ecosave_core::models::energy::EnergyUsageInput;
use serde_json::json;

/// Persona for the in-app assistant. It serves both customers and staff and
/// always answers in Dutch.
pub const CHAT_SYSTEM_INSTRUCTION: &str = "\
Je bent 'EcoBot', een behulpzame AI-assistent in de EcoSave app. \
Je helpt zowel klanten met energiebesparingstips als personeel met technische vragen \
over audits, isolatiewaarden en warmtepompen. \
Antwoord altijd beknopt, behulpzaam en in het Nederlands.";

/// Instruction for the customer savings report.
pub fn advice_prompt(input: &EnergyUsageInput) -> String {
    format!(
        "Analyze the following energy usage data for a Dutch household:\n\
         - Electricity: {electricity} kWh/year\n\
         - Gas: {gas} m3/year\n\
         - Monthly Cost: €{monthly}\n\
         - Household Size: {household} persons\n\
         - Property Type: {property}\n\
         \n\
         Act as an energy consultant. Provide a JSON response with:\n\
         1. Projected annual cost after implementing standard energy saving measures \
         (insulation, solar panels, heat pump, behavioral changes).\n\
         2. A list of 3 specific, actionable tips in Dutch.\n\
         3. Estimated ROI in years for major investments.\n\
         4. Current annual cost based on monthly * 12.",
        electricity = input.electricity_kwh,
        gas = input.gas_m3,
        monthly = input.monthly_cost,
        household = input.household_size,
        property = input.property_type,
    )
}

/// Instruction for the staff-facing audit summary.
pub fn audit_prompt(audit: &AuditRecord) -> String {
    format!(
        "Je bent een technische sales engineer voor energieoplossingen. \
         Analyseer deze woningopname (audit):\n\
         \n\
         Klant: {client}\n\
         Adres: {address}\n\
         Woningtype: {property}\n\
         Notities van adviseur: \"{notes}\"\n\
         \n\
         Geef een professionele samenvatting voor het verkoopteam.\n\
         Identificeer:\n\
         1. De grootste kansen voor verduurzaming.\n\
         2. Mogelijke technische obstakels op basis van de notities.\n\
         3. Een aanbevolen verkoopstrategie voor deze klant.\n\
         \n\
         Schrijf het antwoord in het Nederlands, professioneel opgemaakt met markdown bullets.",
        client = audit.client_name,
        address = audit.address,
        property = audit.property_type,
        notes = audit.notes,
    )
}

/// Gemini response schema for a `SavingsReport`. Every field is required.
pub fn savings_report_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "currentAnnualCost": { "type": "NUMBER" },
            "projectedAnnualCost": { "type": "NUMBER" },
            "potentialSavings": { "type": "NUMBER" },
            "tips": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "roiYear": { "type": "NUMBER" }
        },
        "required": [
            "currentAnnualCost",
            "projectedAnnualCost",
            "potentialSavings",
            "tips",
            "roiYear"
        ]
    })
}
