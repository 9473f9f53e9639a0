use crate::build::{GraphBuilder, NodeBuilder};
use crate::error::TemplateError;
use crate::pathway::{DynamicDataSpec, NodeKind, Pathway, ResponseMapping, VariableSpec};
use itertools::Itertools;
use serde::Deserialize;
use serde_json::json;

/// Input for the appointment booking template.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentConfig {
    pub company: String,
    /// Bookable services, read out during service selection.
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub business_hours: Option<String>,
    /// Scheduling endpoint queried live for open slots, when given.
    #[serde(default)]
    pub availability_url: Option<String>,
}

/// Builds a fixed appointment-booking pathway: greeting, service selection,
/// availability lookup, slot and contact capture, confirmation, terminal.
/// Rescheduling is handled by a global node so it is available at any point
/// in the call.
pub fn appointment_pathway(config: &AppointmentConfig) -> Result<Pathway, TemplateError> {
    if config.company.trim().is_empty() {
        return Err(TemplateError::MissingField { field: "company" });
    }

    let mut g = GraphBuilder::new();

    let mut greeting_prompt = format!(
        "You are the booking assistant for {}. Greet the caller and ask \
         what they would like to schedule.",
        config.company
    );
    if let Some(hours) = &config.business_hours {
        greeting_prompt.push_str(&format!(" Appointments are available {}.", hours));
    }

    let greeting = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Greeting")
            .start()
            .prompt(greeting_prompt)
            .extract(VariableSpec::required(
                "caller_name",
                "string",
                "Caller's name",
            )),
    );

    let mut selection_prompt = "Ask which service the caller wants to book.".to_string();
    if !config.services.is_empty() {
        selection_prompt.push_str(&format!(
            " Available services: {}.",
            config.services.iter().join(", ")
        ));
    }
    let selection = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Service Selection")
            .prompt(selection_prompt)
            .condition("the caller has named a service to book")
            .extract(VariableSpec::required(
                "service_requested",
                "string",
                "Service the caller wants to book",
            )),
    );
    g.connect(&greeting, &selection, "caller wants to book an appointment");

    let mut availability = NodeBuilder::new(NodeKind::Default, "Availability")
        .prompt(
            "Offer the caller open time slots for the requested service and \
             agree on one.",
        )
        .extract_all([
            VariableSpec::required("appointment_date", "date", "Agreed appointment date"),
            VariableSpec::required("appointment_time", "string", "Agreed appointment time"),
        ]);
    if let Some(url) = &config.availability_url {
        availability = availability.dynamic_data(DynamicDataSpec {
            url: url.clone(),
            method: "GET".to_string(),
            query: Some(json!({ "service": "{{service_requested}}" })),
            body: None,
            response_data: vec![ResponseMapping {
                name: "open_slots".to_string(),
                data: "$.slots".to_string(),
                context: Some("Open appointment slots".to_string()),
            }],
            cache_ttl_secs: Some(60),
            error_fallback: Some(json!("slot lookup unavailable, take a preferred time instead")),
        });
    }
    let availability = g.add_node(availability);
    g.connect(&selection, &availability, "service selected");

    let contact = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Contact Details")
            .prompt("Capture the contact details needed to confirm the booking.")
            .extract_all([
                VariableSpec::required("phone_number", "phone", "Caller's phone number"),
                VariableSpec::optional("email", "email", "Caller's email for confirmation"),
            ]),
    );
    g.connect(&availability, &contact, "slot agreed");

    let confirmation = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Confirmation")
            .prompt(
                "Read the booking back to the caller: service, date, time, \
                 and contact details. Ask them to confirm.",
            )
            .extract(VariableSpec::required(
                "confirmed",
                "boolean",
                "Whether the caller confirmed the booking",
            )),
    );
    g.connect(&contact, &confirmation, "contact details captured");

    let terminal = g.add_node(
        NodeBuilder::new(NodeKind::EndCall, "Booking Complete")
            .text("You're all set. We look forward to seeing you. Goodbye!"),
    );
    g.connect(&confirmation, &terminal, "booking confirmed");

    g.add_node(
        NodeBuilder::new(NodeKind::Default, "Reschedule")
            .global("caller wants to change or cancel an existing appointment")
            .prompt(
                "Look up the caller's existing appointment and agree on a \
                 new time or a cancellation.",
            )
            .extract_all([
                VariableSpec::required(
                    "existing_appointment_date",
                    "date",
                    "Date of the appointment to change",
                ),
                VariableSpec::optional("new_appointment_date", "date", "New date, if rescheduling"),
            ]),
    );

    let pathway = g.finish(
        format!("{} Appointment Booking", config.company),
        format!("Appointment booking pathway for {}", config.company),
    )?;
    Ok(pathway)
}
