//! Flow Catalog - the declarative registry of dialogue flows.
//!
//! The catalog is data, not control flow: each flow is a list of steps and
//! each step carries its own transition rules. Adding a flow means adding a
//! YAML entry; the dialogue engine never changes.
//!
//! The built-in catalog is compiled into the binary. A replacement can be
//! loaded from a file with [`FlowCatalog::from_yaml`]. Either way the catalog
//! is validated once at load time and is read-only afterwards, so it can be
//! shared freely between sessions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::errors::CatalogError;
use super::ids::{FlowId, Position, StepId};
use super::step::Step;
use crate::domain::profile::Industry;
use crate::domain::scoring::Action;

/// Template variables bound for every step, whatever the flow.
pub const ALWAYS_BOUND: &[&str] = &[
    "name",
    "cv_refresh_count",
    "days_since_last_refresh",
    "profile_completeness",
    "emp_cv_views_last_week",
    "applications_count",
    "unique_jobs_applied",
    "login_count",
    "unique_skills_added",
    "job_searches",
    "industry",
    "years",
    "confidence",
];

static BUILTIN: Lazy<Arc<FlowCatalog>> = Lazy::new(|| {
    let catalog = FlowCatalog::from_yaml(include_str!("catalog.yaml"))
        .unwrap_or_else(|e| panic!("Built-in flow catalog is invalid: {}", e));
    Arc::new(catalog)
});

/// A scripted dialogue belonging to one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    pub id: FlowId,
    pub action: Action,
    pub steps: Vec<Step>,
}

impl Flow {
    pub fn step(&self, id: &StepId) -> Option<&Step> {
        self.steps.iter().find(|s| &s.id == id)
    }
}

/// Ordered skill labels offered per industry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndustrySkills(BTreeMap<String, Vec<String>>);

impl IndustrySkills {
    /// Skills for an industry, or an empty list when none are registered.
    pub fn skills_for(&self, industry: &Industry) -> &[String] {
        self.0
            .get(industry.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, industry: &Industry, skill: &str) -> bool {
        self.skills_for(industry).iter().any(|s| s == skill)
    }

    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    industry_skills: IndustrySkills,
    flows: Vec<Flow>,
}

/// Validated, immutable set of flows plus the industry skills data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowCatalog {
    flows: Vec<Flow>,
    industry_skills: IndustrySkills,
}

impl FlowCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Arc<FlowCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// - `Parse` if the YAML is malformed or a template has a syntax error
    /// - `Inconsistent` if the flows reference missing steps, duplicate ids,
    ///   or templates use variables that are never bound
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_yaml::from_str(source)?;
        Self::new(doc.flows, doc.industry_skills)
    }

    /// Builds a catalog from parts, validating it.
    pub fn new(flows: Vec<Flow>, industry_skills: IndustrySkills) -> Result<Self, CatalogError> {
        let catalog = Self {
            flows,
            industry_skills,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    pub fn industry_skills(&self) -> &IndustrySkills {
        &self.industry_skills
    }

    /// Looks up a flow by id.
    pub fn flow(&self, id: &FlowId) -> Result<&Flow, CatalogError> {
        self.flows
            .iter()
            .find(|f| &f.id == id)
            .ok_or_else(|| CatalogError::UnknownFlow(id.clone()))
    }

    /// Looks up the step at a position.
    pub fn step(&self, position: &Position) -> Result<&Step, CatalogError> {
        self.flow(&position.flow)?
            .step(&position.step)
            .ok_or_else(|| CatalogError::UnknownStep {
                flow: position.flow.clone(),
                step: position.step.clone(),
            })
    }

    /// The flow that walks the user through an action.
    pub fn flow_for_action(&self, action: Action) -> Result<&Flow, CatalogError> {
        self.flows
            .iter()
            .find(|f| f.action == action)
            .ok_or(CatalogError::NoFlowForAction(action))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut flow_ids = HashSet::new();
        let mut actions = HashSet::new();

        for flow in &self.flows {
            if !flow_ids.insert(&flow.id) {
                return Err(CatalogError::inconsistent(format!(
                    "duplicate flow '{}'",
                    flow.id
                )));
            }
            if !actions.insert(flow.action) {
                return Err(CatalogError::inconsistent(format!(
                    "action '{}' has more than one flow",
                    flow.action
                )));
            }
            if flow.step(&StepId::initial()).is_none() {
                return Err(CatalogError::inconsistent(format!(
                    "flow '{}' has no '{}' step",
                    flow.id,
                    StepId::INITIAL
                )));
            }

            let mut step_ids = HashSet::new();
            for step in &flow.steps {
                if !step_ids.insert(&step.id) {
                    return Err(CatalogError::inconsistent(format!(
                        "duplicate step '{}' in flow '{}'",
                        step.id, flow.id
                    )));
                }
                self.validate_step(flow, step)?;
            }
        }
        Ok(())
    }

    fn validate_step(&self, flow: &Flow, step: &Step) -> Result<(), CatalogError> {
        let at = Position::new(flow.id.clone(), step.id.clone());
        let offered = step.responses.static_labels();

        let mut seen = HashSet::new();
        for transition in &step.transitions {
            if !seen.insert(transition.on.as_str()) {
                return Err(CatalogError::inconsistent(format!(
                    "{}: duplicate rule for '{}'",
                    at, transition.on
                )));
            }
            if !offered.contains(&transition.on.as_str()) {
                return Err(CatalogError::inconsistent(format!(
                    "{}: rule for '{}' which the step never offers",
                    at, transition.on
                )));
            }
            let target = transition.to.resolve(&flow.id);
            self.step(&target).map_err(|e| {
                CatalogError::inconsistent(format!("{}: transition '{}': {}", at, transition.on, e))
            })?;
        }

        if let Some((_, confirm)) = step.confirmation() {
            if step.transition_for(confirm).is_none() {
                return Err(CatalogError::inconsistent(format!(
                    "{}: confirmation '{}' leads nowhere",
                    at, confirm
                )));
            }
        }

        let derived = step.derive.map(|d| d.names()).unwrap_or(&[]);
        for name in step.message.placeholders() {
            if !ALWAYS_BOUND.contains(&name) && !derived.contains(&name) {
                return Err(CatalogError::inconsistent(format!(
                    "{}: template references unbound variable '{}'",
                    at, name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flow::TransitionTarget;

    fn industry(label: &str) -> Industry {
        Industry::new(label).unwrap()
    }

    fn pos(flow: &str, step: &str) -> Position {
        Position::new(FlowId::new(flow), StepId::new(step))
    }

    const MINIMAL: &str = r#"
flows:
  - id: refresh_cv
    action: refresh_cv
    steps:
      - id: initial
        message: "Hi {name}"
        responses: { kind: buttons, labels: ["Go"] }
        transitions:
          - on: "Go"
            to: done
      - id: done
        message: "Done"
        responses: { kind: buttons, labels: [] }
"#;

    mod builtin {
        use super::*;

        #[test]
        fn loads_three_flows() {
            let catalog = FlowCatalog::builtin();
            let ids: Vec<&str> = catalog.flows().iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids, vec!["refresh_cv", "add_skill", "apply_job"]);
        }

        #[test]
        fn every_action_has_a_flow() {
            let catalog = FlowCatalog::builtin();
            for action in Action::ALL {
                let flow = catalog.flow_for_action(action).unwrap();
                assert_eq!(flow.id.as_str(), action.id());
            }
        }

        #[test]
        fn step_counts_match_scripts() {
            let catalog = FlowCatalog::builtin();
            let count = |id: &str| catalog.flow(&FlowId::new(id)).unwrap().steps.len();
            assert_eq!(count("refresh_cv"), 5);
            assert_eq!(count("add_skill"), 4);
            assert_eq!(count("apply_job"), 5);
        }

        #[test]
        fn remind_set_switches_into_add_skill() {
            let catalog = FlowCatalog::builtin();
            let step = catalog.step(&pos("refresh_cv", "remind_set")).unwrap();
            assert_eq!(
                step.transition_for("Sure, let's add skills"),
                Some(&TransitionTarget::Flow {
                    flow: FlowId::new("add_skill"),
                    step: StepId::new("show_skills"),
                })
            );
        }

        #[test]
        fn show_skills_is_the_accumulation_step() {
            let catalog = FlowCatalog::builtin();
            let step = catalog.step(&pos("add_skill", "show_skills")).unwrap();
            assert_eq!(step.confirmation(), Some((5, "Add These Skills")));
            let added = catalog.step(&pos("add_skill", "skills_added")).unwrap();
            assert!(added.derive.is_some());
        }

        #[test]
        fn industry_skills_are_ordered() {
            let catalog = FlowCatalog::builtin();
            let skills = catalog.industry_skills();
            assert_eq!(
                skills.skills_for(&industry("Software Engineering")),
                &[
                    "JavaScript", "Python", "React", "Node.js", "AWS", "Docker", "Git", "Agile"
                ]
            );
            assert_eq!(skills.skills_for(&industry("Data Analytics")).len(), 8);
            assert_eq!(skills.skills_for(&industry("Marketing"))[0], "SEO");
        }

        #[test]
        fn unlisted_industry_has_no_skills() {
            let catalog = FlowCatalog::builtin();
            let skills = catalog.industry_skills();
            assert!(skills.skills_for(&industry("Finance")).is_empty());
            assert!(!skills.contains(&industry("Finance"), "Python"));
        }
    }

    mod lookups {
        use super::*;

        #[test]
        fn unknown_flow_is_reported() {
            let err = FlowCatalog::builtin()
                .flow(&FlowId::new("negotiate_salary"))
                .unwrap_err();
            assert_eq!(err, CatalogError::UnknownFlow(FlowId::new("negotiate_salary")));
        }

        #[test]
        fn unknown_step_is_reported() {
            let err = FlowCatalog::builtin()
                .step(&pos("refresh_cv", "celebrate"))
                .unwrap_err();
            assert!(matches!(err, CatalogError::UnknownStep { .. }));
        }

        #[test]
        fn missing_action_flow_is_reported() {
            let catalog = FlowCatalog::from_yaml(MINIMAL).unwrap();
            assert_eq!(
                catalog.flow_for_action(Action::ApplyJob).unwrap_err(),
                CatalogError::NoFlowForAction(Action::ApplyJob)
            );
        }
    }

    mod validation {
        use super::*;

        fn inconsistent(yaml: &str) -> String {
            match FlowCatalog::from_yaml(yaml) {
                Err(CatalogError::Inconsistent(reason)) => reason,
                other => panic!("expected Inconsistent, got {:?}", other),
            }
        }

        #[test]
        fn minimal_catalog_loads() {
            let catalog = FlowCatalog::from_yaml(MINIMAL).unwrap();
            assert_eq!(catalog.flows().len(), 1);
            assert_eq!(catalog.industry_skills().industries().count(), 0);
        }

        #[test]
        fn rejects_dangling_target() {
            let yaml = MINIMAL.replace("to: done", "to: nowhere");
            assert!(inconsistent(&yaml).contains("nowhere"));
        }

        #[test]
        fn rejects_missing_initial_step() {
            let yaml = MINIMAL.replace("id: initial", "id: start");
            assert!(inconsistent(&yaml).contains("initial"));
        }

        #[test]
        fn rejects_unbound_placeholder() {
            let yaml = MINIMAL.replace("Hi {name}", "Hi {nickname}");
            assert!(inconsistent(&yaml).contains("nickname"));
        }

        #[test]
        fn derived_placeholder_needs_derivation() {
            let yaml = MINIMAL.replace("\"Done\"", "\"Now {new_completeness}%\"");
            assert!(inconsistent(&yaml).contains("new_completeness"));

            let yaml = yaml.replace(
                "      - id: done\n",
                "      - id: done\n        derive: skills_summary\n",
            );
            assert!(FlowCatalog::from_yaml(&yaml).is_ok());
        }

        #[test]
        fn rejects_rule_for_unoffered_label() {
            let yaml = MINIMAL.replace("on: \"Go\"", "on: \"Stop\"");
            assert!(inconsistent(&yaml).contains("Stop"));
        }

        #[test]
        fn rejects_duplicate_flow_for_action() {
            let second = r#"
  - id: refresh_again
    action: refresh_cv
    steps:
      - id: initial
        message: "Again"
        responses: { kind: buttons, labels: [] }
"#;
            let yaml = format!("{}{}", MINIMAL, second);
            assert!(inconsistent(&yaml).contains("more than one flow"));
        }

        #[test]
        fn rejects_confirmation_without_rule() {
            let yaml = r#"
flows:
  - id: add_skill
    action: add_skill
    steps:
      - id: initial
        message: "Pick"
        responses: { kind: skills, min_selections: 2, confirm: "Done" }
"#;
            assert!(inconsistent(yaml).contains("Done"));
        }

        #[test]
        fn template_syntax_error_is_a_parse_error() {
            let yaml = MINIMAL.replace("Hi {name}", "Hi {name");
            assert!(matches!(
                FlowCatalog::from_yaml(&yaml),
                Err(CatalogError::Parse(_))
            ));
        }
    }
}
