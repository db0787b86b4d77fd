//! WebSocket message envelopes: outgoing commands and incoming responses.
//!
//! Both directions use a flat JSON object discriminated by `msg_type`.

use serde::{Deserialize, Serialize};

/// Commands the bridge sends to the scenario server.
///
/// Serializes to `{"msg_type": "<command>", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "msg_type", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Forward a scenario file path for execution.
    SendScenarioParam {
        /// Path of the scenario file on the server host.
        value: String,
    },
}

/// Responses the scenario server sends back, discriminated by `msg_type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "msg_type", rename_all = "snake_case")]
pub enum ServerResponse {
    /// Outcome of a previously sent scenario parameter.
    SendScenarioParamResponse {
        /// Whether the server accepted the scenario parameter.
        success: bool,
    },
    /// Catch-all for message types this client does not handle.
    #[serde(other)]
    Unrecognized,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn scenario_param_wire_format() {
        let command = ClientCommand::SendScenarioParam {
            value: "/scenarios/cut-in.xosc".to_string(),
        };
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(
            json,
            r#"{"msg_type":"send_scenario_param","value":"/scenarios/cut-in.xosc"}"#
        );
    }

    #[test]
    fn parses_scenario_param_response() {
        let response: ServerResponse =
            serde_json::from_str(r#"{"msg_type":"send_scenario_param_response","success":true}"#)
                .unwrap();
        assert_eq!(
            response,
            ServerResponse::SendScenarioParamResponse { success: true }
        );
    }

    #[test]
    fn unknown_msg_type_parses_as_unrecognized() {
        let response: ServerResponse =
            serde_json::from_str(r#"{"msg_type":"ros2_command_feedback","success":true}"#).unwrap();
        assert_eq!(response, ServerResponse::Unrecognized);
    }

    #[test]
    fn missing_success_field_is_an_error() {
        let result =
            serde_json::from_str::<ServerResponse>(r#"{"msg_type":"send_scenario_param_response"}"#);
        assert!(result.is_err());
    }
}
