//! Scenario parameter validation and forwarding.

use crate::error::BridgeError;
use crate::ws::connection::Connection;
use crate::ws::messages::ClientCommand;

/// File suffix required for scenario files (OpenSCENARIO).
pub const SCENARIO_SUFFIX: &str = ".xosc";

/// Checks that the path names a scenario file.
///
/// # Errors
///
/// Returns [`BridgeError::InvalidScenarioPath`] when the path does not end
/// with [`SCENARIO_SUFFIX`].
pub fn validate_scenario_path(path: &str) -> Result<(), BridgeError> {
    if path.ends_with(SCENARIO_SUFFIX) {
        Ok(())
    } else {
        Err(BridgeError::InvalidScenarioPath(path.to_string()))
    }
}

/// Validates the scenario path and forwards it to the server.
///
/// Exactly one envelope is sent for a valid path; nothing is sent for an
/// invalid one.
///
/// # Errors
///
/// Returns [`BridgeError::InvalidScenarioPath`] before touching the socket
/// when validation fails, or a transport/encoding error from
/// [`Connection::send`].
pub async fn send_scenario_param(
    connection: &mut Connection,
    scenario_path: &str,
) -> Result<(), BridgeError> {
    validate_scenario_path(scenario_path)?;
    tracing::info!(scenario_path, "sending scenario file");
    connection
        .send(&ClientCommand::SendScenarioParam {
            value: scenario_path.to_string(),
        })
        .await
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn xosc_path_is_valid() {
        validate_scenario_path("/scenarios/cut-in.xosc").unwrap();
    }

    #[test]
    fn non_xosc_path_is_rejected() {
        let err = validate_scenario_path("/scenarios/notes.txt").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidScenarioPath(_)));
    }

    #[test]
    fn suffix_must_be_at_the_end() {
        // The suffix check is a real suffix match, not a substring search.
        let err = validate_scenario_path("/scenarios/cut-in.xosc.bak").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidScenarioPath(_)));
    }
}
