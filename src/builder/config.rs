//! Declarative blueprint configuration.
//!
//! A blueprint's shape (start state and edges) can be loaded from JSON.
//! Handlers are code and cannot be configured; attach them afterwards with
//! [`Blueprint::on`].

use crate::builder::blueprint::Blueprint;
use crate::builder::error::BuildError;
use crate::core::{Edge, State};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Serializable description of a blueprint.
///
/// ```json
/// {
///   "start": "Draft",
///   "transitions": [
///     { "from": "Draft", "to": "Review" },
///     { "from": "Review", "to": "Draft" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlueprintConfig<S> {
    pub start: Option<S>,

    #[serde(default = "Vec::new")]
    pub transitions: Vec<TransitionConfig<S>>,
}

/// One configured edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig<S> {
    pub from: S,
    pub to: S,
}

impl<S: State> Blueprint<S> {
    /// Build a blueprint from configuration.
    /// Duplicate edges are rejected exactly as for hand-written declarations.
    pub fn from_config(config: BlueprintConfig<S>) -> Result<Self, BuildError> {
        let mut blueprint = Self::new();
        if let Some(start) = config.start {
            blueprint.start(start);
        }
        for transition in config.transitions {
            blueprint.insert(Edge::new(transition.from, transition.to))?;
        }
        Ok(blueprint)
    }

    /// Parse a JSON [`BlueprintConfig`] and build a blueprint from it.
    pub fn from_json(json: &str) -> Result<Self, BuildError>
    where
        S: DeserializeOwned,
    {
        let config: BlueprintConfig<S> =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        Self::from_config(config)
    }

    /// Export the start state and edges, in key order.
    pub fn to_config(&self) -> BlueprintConfig<S> {
        BlueprintConfig {
            start: self.start_state().cloned(),
            transitions: self
                .table()
                .iter()
                .map(|edge| TransitionConfig {
                    from: edge.from().clone(),
                    to: edge.to().clone(),
                })
                .collect(),
        }
    }

    /// Serialize [`to_config`](Self::to_config) as JSON.
    pub fn to_json(&self) -> Result<String, BuildError>
    where
        S: Serialize,
    {
        serde_json::to_string(&self.to_config())
            .map_err(|e| BuildError::ExportFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKFLOW: &str = r#"{
        "start": "Draft",
        "transitions": [
            { "from": "Review", "to": "Approved" },
            { "from": "Draft", "to": "Review" },
            { "from": "Review", "to": "Draft" }
        ]
    }"#;

    #[test]
    fn json_config_builds_sorted_blueprint() {
        let blueprint: Blueprint<String> = Blueprint::from_json(WORKFLOW).unwrap();

        assert_eq!(blueprint.start_state().map(String::as_str), Some("Draft"));
        assert_eq!(
            blueprint.describe(),
            "(Draft -> Review) -> (Review -> Approved) -> (Review -> Draft)"
        );
    }

    #[test]
    fn configured_machine_runs() {
        let blueprint: Blueprint<String> = Blueprint::from_json(WORKFLOW).unwrap();
        let mut machine = blueprint.machine().unwrap();

        machine.goto("Review".to_string()).unwrap();
        machine.goto("Approved".to_string()).unwrap();
        assert!(!machine.has_next());
    }

    #[test]
    fn start_and_transitions_are_optional() {
        let blueprint: Blueprint<u32> = Blueprint::from_json("{}").unwrap();

        assert!(blueprint.start_state().is_none());
        assert!(blueprint.table().is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = Blueprint::<String>::from_json(r#"{ "transitions": [ { "from": "A" } ] }"#);

        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }

    crate::state_enum! {
        enum Ticket {
            Open,
            Assigned,
            Closed,
        }
    }

    #[test]
    fn enum_states_load_from_json() {
        let json = r#"{
            "start": "Open",
            "transitions": [
                { "from": "Assigned", "to": "Closed" },
                { "from": "Open", "to": "Assigned" }
            ]
        }"#;

        let blueprint: Blueprint<Ticket> = Blueprint::from_json(json).unwrap();
        assert_eq!(
            blueprint.describe(),
            "(Open -> Assigned) -> (Assigned -> Closed)"
        );

        let mut machine = blueprint.machine().unwrap();
        machine.goto(Ticket::Assigned).unwrap();
        machine.goto(Ticket::Closed).unwrap();
        assert!(!machine.has_next());
    }

    #[test]
    fn enum_states_without_transitions_key() {
        let blueprint: Blueprint<Ticket> =
            Blueprint::from_json(r#"{ "start": "Open" }"#).unwrap();

        assert_eq!(blueprint.start_state(), Some(&Ticket::Open));
        assert!(blueprint.table().is_empty());
    }

    #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
    struct Opaque(u8);

    impl State for Opaque {
        fn name(&self) -> std::borrow::Cow<'_, str> {
            self.0.to_string().into()
        }
    }

    impl Serialize for Opaque {
        fn serialize<Ser>(&self, _serializer: Ser) -> Result<Ser::Ok, Ser::Error>
        where
            Ser: serde::Serializer,
        {
            Err(serde::ser::Error::custom("opaque state"))
        }
    }

    #[test]
    fn export_failure_is_reported() {
        let mut blueprint = Blueprint::new();
        blueprint.start(Opaque(0));

        let result = blueprint.to_json();

        assert!(matches!(
            result,
            Err(BuildError::ExportFailed(ref msg)) if msg.contains("opaque state")
        ));
    }

    #[test]
    fn duplicate_config_edge_is_rejected() {
        let config = BlueprintConfig {
            start: Some(1u8),
            transitions: vec![
                TransitionConfig { from: 1, to: 2 },
                TransitionConfig { from: 1, to: 2 },
            ],
        };

        assert!(matches!(
            Blueprint::from_config(config),
            Err(BuildError::DuplicateTransition { .. })
        ));
    }

    #[test]
    fn config_survives_export_and_reload() {
        let mut blueprint = Blueprint::new();
        blueprint.start(0u16);
        blueprint.from(0).to(1).unwrap().also(2).unwrap();
        blueprint.from(2).to(0).unwrap();

        let json = blueprint.to_json().unwrap();
        let reloaded: Blueprint<u16> = Blueprint::from_json(&json).unwrap();

        assert_eq!(reloaded.to_config(), blueprint.to_config());
        assert_eq!(reloaded.describe(), blueprint.describe());
    }
}
