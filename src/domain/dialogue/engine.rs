//! Dialogue Engine - the conversation state machine.
//!
//! Two events drive a session forward: starting a flow and a user response.
//! The engine looks up the current step in the catalog, applies the step's
//! transition rules, renders the destination message and commits the result
//! to the session. Rendering happens before any mutation, so a failed
//! transition leaves the position, selections and assistant messages intact.
//!
//! # Response handling order
//!
//! 1. The user entry is appended unconditionally
//! 2. Skill labels in an accumulation step toggle the selection
//! 3. The confirmation label waits until enough skills are selected
//! 4. The step's explicit rule for the response, if any, is applied
//! 5. Anything else is ignored

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::errors::DialogueError;
use super::skills_summary::SkillsSummary;
use crate::domain::flow::{
    CatalogError, DerivedVariables, FlowCatalog, Position, Step, StepId, TemplateError,
    TemplateVariables,
};
use crate::domain::scoring::Action;
use crate::domain::session::{Message, Session};

/// Years of experience quoted in job detail messages unless configured.
pub const DEFAULT_YEARS_OF_EXPERIENCE: u32 = 6;

/// What a response did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResponseOutcome {
    /// A transition fired and its message was appended.
    Advanced { from: Position, to: Position },

    /// A skill was added to or removed from the selection. No message.
    SelectionToggled {
        label: String,
        selected: bool,
        count: usize,
    },

    /// The confirmation was sent before enough skills were selected.
    AwaitingSelections { selected: usize, required: usize },

    /// No flow is active or the step has no rule for the response.
    Ignored,
}

impl ResponseOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self, ResponseOutcome::Advanced { .. })
    }
}

/// Drives sessions through the flows of a catalog.
#[derive(Debug, Clone)]
pub struct DialogueEngine {
    catalog: Arc<FlowCatalog>,
    years_of_experience: u32,
}

impl DialogueEngine {
    pub fn new(catalog: Arc<FlowCatalog>) -> Self {
        Self {
            catalog,
            years_of_experience: DEFAULT_YEARS_OF_EXPERIENCE,
        }
    }

    /// Overrides the `years` template variable.
    pub fn with_years_of_experience(mut self, years: u32) -> Self {
        self.years_of_experience = years;
        self
    }

    pub fn catalog(&self) -> &FlowCatalog {
        &self.catalog
    }

    /// Starts the flow for an action at its initial step.
    ///
    /// Always allowed: an in-progress flow is abandoned without warning.
    ///
    /// # Errors
    ///
    /// - `MissingScores` if no prediction has been recorded
    /// - `Catalog(NoFlowForAction)` if the catalog has no flow for the action
    /// - `TemplateSubstitution` if the initial message cannot be rendered
    pub fn start_flow(&self, session: &mut Session, action: Action) -> Result<Position, DialogueError> {
        if session.scores().is_none() {
            return Err(DialogueError::MissingScores);
        }

        let flow = self.catalog.flow_for_action(action)?;
        let position = Position::new(flow.id.clone(), StepId::initial());
        let step = self.catalog.step(&position)?;

        let vars = self.variables(session, flow.action);
        let content = self.render(session, step, &position, &vars)?;

        if let Some(previous) = session.position() {
            info!(
                session_id = %session.id(),
                from = %previous,
                flow = %position.flow,
                "Abandoning flow in progress"
            );
        }

        session.selections_mut().clear();
        session.push(Message::assistant(content));
        session.move_to(position.clone());

        info!(
            session_id = %session.id(),
            flow = %position.flow,
            action = %action,
            "Started flow"
        );
        Ok(position)
    }

    /// Applies a user response.
    ///
    /// The response is recorded in the transcript first, whatever happens
    /// next.
    ///
    /// # Errors
    ///
    /// - `Catalog(UnknownFlow | UnknownStep)` for a transition table gap
    /// - `TemplateSubstitution` if the destination message cannot be rendered
    pub fn respond(&self, session: &mut Session, response: &str) -> Result<ResponseOutcome, DialogueError> {
        session.push(Message::user(response));

        let Some(from) = session.position().cloned() else {
            debug!(session_id = %session.id(), response, "No active flow; response ignored");
            return Ok(ResponseOutcome::Ignored);
        };
        let step = self.lookup(session, &from)?;

        if step.is_accumulation()
            && self
                .catalog
                .industry_skills()
                .contains(session.profile().industry(), response)
        {
            let selected = session.selections_mut().toggle(response);
            let count = session.selections().len();
            debug!(
                session_id = %session.id(),
                skill = response,
                selected,
                count,
                "Toggled skill selection"
            );
            return Ok(ResponseOutcome::SelectionToggled {
                label: response.to_string(),
                selected,
                count,
            });
        }

        if let Some((required, confirm)) = step.confirmation() {
            let selected = session.selections().len();
            if response == confirm && selected < required {
                debug!(
                    session_id = %session.id(),
                    selected,
                    required,
                    "Confirmation before enough selections"
                );
                return Ok(ResponseOutcome::AwaitingSelections { selected, required });
            }
        }

        let Some(target) = step.transition_for(response) else {
            debug!(
                session_id = %session.id(),
                position = %from,
                response,
                "No transition for response; ignored"
            );
            return Ok(ResponseOutcome::Ignored);
        };
        let to = target.resolve(&from.flow);
        let next = self.lookup(session, &to)?;
        let action = self.catalog.flow(&to.flow)?.action;

        let mut vars = self.variables(session, action);
        if let Some(DerivedVariables::SkillsSummary) = next.derive {
            SkillsSummary::compute(session.profile().features(), session.selections().len())
                .bind(&mut vars);
        }
        let content = self.render(session, next, &to, &vars)?;

        if to != from {
            session.selections_mut().clear();
        }
        session.push(Message::assistant(content));
        session.move_to(to.clone());

        if to.flow != from.flow {
            info!(
                session_id = %session.id(),
                from = %from,
                to = %to,
                "Switched flow"
            );
        } else {
            debug!(
                session_id = %session.id(),
                from = %from,
                to = %to,
                "Transitioned"
            );
        }
        Ok(ResponseOutcome::Advanced { from, to })
    }

    /// The responses the current step accepts, in display order.
    ///
    /// Button steps list their labels. Accumulation steps list the user's
    /// industry skills, followed by the confirmation once enough are
    /// selected. Without an active flow the list is empty.
    ///
    /// # Errors
    ///
    /// - `Catalog(UnknownFlow | UnknownStep)` if the session points outside
    ///   the catalog
    pub fn available_responses(&self, session: &Session) -> Result<Vec<String>, DialogueError> {
        let Some(position) = session.position() else {
            return Ok(Vec::new());
        };
        let step = self.lookup(session, position)?;

        let labels = match step.confirmation() {
            None => step
                .responses
                .static_labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            Some((required, confirm)) => {
                let mut labels = self
                    .catalog
                    .industry_skills()
                    .skills_for(session.profile().industry())
                    .to_vec();
                if session.selections().len() >= required {
                    labels.push(confirm.to_string());
                }
                labels
            }
        };
        Ok(labels)
    }

    fn lookup(&self, session: &Session, position: &Position) -> Result<&Step, CatalogError> {
        self.catalog.step(position).map_err(|err| {
            warn!(
                session_id = %session.id(),
                position = %position,
                error = %err,
                "Catalog gap"
            );
            err
        })
    }

    fn variables(&self, session: &Session, action: Action) -> TemplateVariables {
        let mut vars = TemplateVariables::new();
        vars.extend(session.profile().variables());
        vars.bind("years", self.years_of_experience);
        if let Some(confidence) = session.scores().and_then(|s| s.percent(action)) {
            vars.bind("confidence", confidence.value());
        }
        vars
    }

    fn render(
        &self,
        session: &Session,
        step: &Step,
        position: &Position,
        vars: &TemplateVariables,
    ) -> Result<String, DialogueError> {
        step.message.render(vars).map_err(|err| {
            let placeholder = match err {
                TemplateError::Unbound(name) => name,
                TemplateError::Syntax { reason, .. } => reason,
            };
            error!(
                session_id = %session.id(),
                position = %position,
                placeholder = %placeholder,
                "Template substitution failed"
            );
            DialogueError::TemplateSubstitution {
                flow: position.flow.clone(),
                step: position.step.clone(),
                placeholder,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flow::FlowId;
    use crate::domain::foundation::{Percentage, UserId};
    use crate::domain::profile::{FeatureVector, Industry, UserProfile};
    use crate::domain::scoring::RuleBasedScorer;
    use crate::domain::session::Role;
    use crate::ports::NudgeScorer;

    const DATA_SKILLS: [&str; 8] = [
        "Python",
        "SQL",
        "Tableau",
        "Machine Learning",
        "Data Visualization",
        "Statistics",
        "Excel",
        "Communication",
    ];

    fn engine() -> DialogueEngine {
        DialogueEngine::new(FlowCatalog::builtin())
    }

    fn features(completeness: u8, industry: &str) -> FeatureVector {
        FeatureVector {
            cv_refresh_count: 0,
            days_since_last_refresh: 14,
            profile_completeness: Percentage::new(completeness),
            emp_cv_views_last_week: 3,
            applications_count: 1,
            unique_jobs_applied: 3,
            login_count: 4,
            unique_skills_added: 3,
            job_searches: 5,
            industry: Industry::new(industry).unwrap(),
        }
    }

    fn session_with(features: FeatureVector) -> Session {
        let profile = UserProfile::new(UserId::new("fatima_hassan").unwrap(), "Fatima Hassan", features);
        let scores = RuleBasedScorer::new().score(profile.features()).unwrap();
        let mut session = Session::new(profile);
        session.record_scores(scores);
        session
    }

    fn fatima() -> Session {
        session_with(features(68, "Data Analytics"))
    }

    fn pos(flow: &str, step: &str) -> Position {
        Position::new(FlowId::new(flow), StepId::new(step))
    }

    fn last_assistant(session: &Session) -> &str {
        session
            .transcript()
            .iter()
            .rev()
            .find(|m| m.is_assistant())
            .map(|m| m.content())
            .unwrap()
    }

    fn assistant_count(session: &Session) -> usize {
        session.transcript().iter().filter(|m| m.is_assistant()).count()
    }

    mod start_flow {
        use super::*;

        #[test]
        fn renders_initial_step_with_confidence() {
            let engine = engine();
            let mut session = fatima();

            let position = engine.start_flow(&mut session, Action::RefreshCv).unwrap();

            assert_eq!(position, pos("refresh_cv", "initial"));
            assert_eq!(session.position(), Some(&position));
            let message = last_assistant(&session);
            assert!(message.starts_with("Hey Fatima Hassan! 👋"));
            assert!(message.contains("Your profile got 3 employer views this week"));
            assert!(message.contains("it's been 14 days since your last CV refresh"));
            assert!(message.contains("(45% probability)"));
        }

        #[test]
        fn confidence_uses_the_flow_action_score() {
            let engine = engine();
            let mut session = fatima();

            engine.start_flow(&mut session, Action::ApplyJob).unwrap();

            // 0.45 / 1.76 rounds to 26%.
            assert!(last_assistant(&session).contains("Our model is 26% confident"));
        }

        #[test]
        fn requires_scores() {
            let engine = engine();
            let profile = fatima().profile().clone();
            let mut session = Session::new(profile);

            let err = engine.start_flow(&mut session, Action::RefreshCv).unwrap_err();

            assert_eq!(err, DialogueError::MissingScores);
            assert!(session.transcript().is_empty());
            assert!(session.position().is_none());
        }

        #[test]
        fn overwrites_flow_in_progress() {
            let engine = engine();
            let mut session = fatima();
            engine.start_flow(&mut session, Action::AddSkill).unwrap();
            engine.respond(&mut session, "Yes, show me").unwrap();
            engine.respond(&mut session, "SQL").unwrap();

            engine.start_flow(&mut session, Action::ApplyJob).unwrap();

            assert_eq!(session.position(), Some(&pos("apply_job", "initial")));
            assert!(session.selections().is_empty());
        }
    }

    mod respond {
        use super::*;

        #[test]
        fn refresh_scenario_reaches_success() {
            let engine = engine();
            let mut session = fatima();
            engine.start_flow(&mut session, Action::RefreshCv).unwrap();

            let outcome = engine.respond(&mut session, "Why does this help?").unwrap();
            assert_eq!(
                outcome,
                ResponseOutcome::Advanced {
                    from: pos("refresh_cv", "initial"),
                    to: pos("refresh_cv", "why"),
                }
            );
            assert!(last_assistant(&session).contains("- 4 logins this week ✓"));

            engine.respond(&mut session, "Yes, refresh it").unwrap();
            assert_eq!(session.position(), Some(&pos("refresh_cv", "success")));
            assert!(last_assistant(&session).starts_with("Done! ✅"));

            let roles: Vec<Role> = session.transcript().iter().map(|m| m.role()).collect();
            assert_eq!(
                roles,
                vec![Role::Assistant, Role::User, Role::Assistant, Role::User, Role::Assistant]
            );
        }

        #[test]
        fn unmatched_response_only_records_user_entry() {
            let engine = engine();
            let mut session = fatima();
            engine.start_flow(&mut session, Action::RefreshCv).unwrap();
            let before = session.clone();

            let outcome = engine.respond(&mut session, "Tell me a joke").unwrap();

            assert_eq!(outcome, ResponseOutcome::Ignored);
            assert_eq!(session.position(), before.position());
            assert_eq!(session.selections(), before.selections());
            assert_eq!(session.transcript().len(), before.transcript().len() + 1);
            let last = session.transcript().last().unwrap();
            assert!(last.is_user());
            assert_eq!(last.content(), "Tell me a joke");
        }

        #[test]
        fn offered_label_without_rule_is_ignored() {
            let engine = engine();
            let mut session = fatima();
            engine.start_flow(&mut session, Action::RefreshCv).unwrap();
            engine.respond(&mut session, "Not right now").unwrap();
            assert_eq!(session.position(), Some(&pos("refresh_cv", "later")));

            let outcome = engine.respond(&mut session, "I'm all set").unwrap();

            assert_eq!(outcome, ResponseOutcome::Ignored);
            assert_eq!(session.position(), Some(&pos("refresh_cv", "later")));
        }

        #[test]
        fn response_without_flow_is_recorded_and_ignored() {
            let engine = engine();
            let mut session = fatima();

            let outcome = engine.respond(&mut session, "Hello?").unwrap();

            assert_eq!(outcome, ResponseOutcome::Ignored);
            assert_eq!(session.transcript().len(), 1);
            assert!(session.position().is_none());
        }

        #[test]
        fn remind_set_switches_to_add_skill_flow() {
            let engine = engine();
            let mut session = fatima();
            engine.start_flow(&mut session, Action::RefreshCv).unwrap();
            engine.respond(&mut session, "Yes, refresh it").unwrap();
            engine.respond(&mut session, "Yes, remind me").unwrap();
            assert!(last_assistant(&session).contains("your profile is 68% complete"));

            let outcome = engine.respond(&mut session, "Sure, let's add skills").unwrap();

            assert_eq!(
                outcome,
                ResponseOutcome::Advanced {
                    from: pos("refresh_cv", "remind_set"),
                    to: pos("add_skill", "show_skills"),
                }
            );
            assert!(last_assistant(&session).contains("**Top Skills for Data Analytics:**"));
            assert!(session.selections().is_empty());
        }

        #[test]
        fn job_details_quotes_years_of_experience() {
            let engine = engine().with_years_of_experience(9);
            let mut session = fatima();
            engine.start_flow(&mut session, Action::ApplyJob).unwrap();
            engine.respond(&mut session, "Yes, show me jobs").unwrap();
            assert!(last_assistant(&session).contains("based on your Data Analytics background"));

            engine.respond(&mut session, "Tell me about #2").unwrap();

            assert_eq!(session.position(), Some(&pos("apply_job", "job_details")));
            assert!(last_assistant(&session).contains("You have 9 years"));
        }

        #[test]
        fn not_qualified_path_reaches_submission() {
            let engine = engine();
            let mut session = fatima();
            engine.start_flow(&mut session, Action::ApplyJob).unwrap();
            for response in ["Yes, show me jobs", "Tell me about #1", "I'm not qualified enough"] {
                assert!(engine.respond(&mut session, response).unwrap().advanced());
            }
            engine.respond(&mut session, "Okay, let's apply").unwrap();

            assert_eq!(session.position(), Some(&pos("apply_job", "application_submitted")));
            assert!(last_assistant(&session).starts_with("Submitted! ✅"));
        }

        #[test]
        fn why_matters_can_return_to_initial() {
            let engine = engine();
            let mut session = fatima();
            engine.start_flow(&mut session, Action::AddSkill).unwrap();
            engine.respond(&mut session, "Why does this matter?").unwrap();

            engine.respond(&mut session, "I'll do it later").unwrap();

            assert_eq!(session.position(), Some(&pos("add_skill", "initial")));
            assert!(last_assistant(&session).contains("Profile completeness: 68%"));
        }
    }

    mod skills {
        use super::*;

        fn at_show_skills(session: &mut Session) -> DialogueEngine {
            let engine = engine();
            engine.start_flow(session, Action::AddSkill).unwrap();
            engine.respond(session, "Yes, show me").unwrap();
            engine
        }

        #[test]
        fn lists_industry_skills_until_threshold() {
            let mut session = fatima();
            let engine = at_show_skills(&mut session);

            assert_eq!(engine.available_responses(&session).unwrap(), DATA_SKILLS);

            for skill in &DATA_SKILLS[..5] {
                engine.respond(&mut session, skill).unwrap();
            }
            let available = engine.available_responses(&session).unwrap();
            assert_eq!(available.len(), 9);
            assert_eq!(available.last().map(String::as_str), Some("Add These Skills"));
        }

        #[test]
        fn five_skills_then_confirm_derives_summary() {
            let mut session = fatima();
            let engine = at_show_skills(&mut session);
            let assistants = assistant_count(&session);

            for skill in ["Python", "SQL", "Tableau", "Statistics", "Excel"] {
                let outcome = engine.respond(&mut session, skill).unwrap();
                assert!(matches!(outcome, ResponseOutcome::SelectionToggled { selected: true, .. }));
            }
            assert_eq!(assistant_count(&session), assistants);

            let outcome = engine.respond(&mut session, "Add These Skills").unwrap();

            assert!(outcome.advanced());
            assert_eq!(session.position(), Some(&pos("add_skill", "skills_added")));
            let message = last_assistant(&session);
            assert!(message.contains("Completeness: 68% → 83% (+15%)"));
            assert!(message.contains("Skills listed: 3 → 8 (+5)"));
            assert!(session.selections().is_empty());
        }

        #[test]
        fn completeness_is_capped() {
            let mut session = session_with(features(92, "Data Analytics"));
            let engine = at_show_skills(&mut session);
            for skill in DATA_SKILLS {
                engine.respond(&mut session, skill).unwrap();
            }

            engine.respond(&mut session, "Add These Skills").unwrap();

            let message = last_assistant(&session);
            assert!(message.contains("Completeness: 92% → 100% (+8%)"));
            assert!(message.contains("Skills listed: 3 → 11 (+8)"));
        }

        #[test]
        fn toggling_twice_restores_selection() {
            let mut session = fatima();
            let engine = at_show_skills(&mut session);
            engine.respond(&mut session, "Python").unwrap();
            let before = session.selections().clone();
            let assistants = assistant_count(&session);

            let first = engine.respond(&mut session, "SQL").unwrap();
            let second = engine.respond(&mut session, "SQL").unwrap();

            assert!(matches!(first, ResponseOutcome::SelectionToggled { selected: true, count: 2, .. }));
            assert!(matches!(second, ResponseOutcome::SelectionToggled { selected: false, count: 1, .. }));
            assert_eq!(session.selections(), &before);
            assert_eq!(assistant_count(&session), assistants);
            assert_eq!(session.position(), Some(&pos("add_skill", "show_skills")));
        }

        #[test]
        fn early_confirmation_waits() {
            let mut session = fatima();
            let engine = at_show_skills(&mut session);
            engine.respond(&mut session, "Python").unwrap();

            let outcome = engine.respond(&mut session, "Add These Skills").unwrap();

            assert_eq!(
                outcome,
                ResponseOutcome::AwaitingSelections {
                    selected: 1,
                    required: 5
                }
            );
            assert_eq!(session.position(), Some(&pos("add_skill", "show_skills")));
            assert_eq!(session.selections().len(), 1);
        }

        #[test]
        fn skills_from_other_industries_are_ignored() {
            let mut session = fatima();
            let engine = at_show_skills(&mut session);

            let outcome = engine.respond(&mut session, "Docker").unwrap();

            assert_eq!(outcome, ResponseOutcome::Ignored);
            assert!(session.selections().is_empty());
        }

        #[test]
        fn unlisted_industry_offers_nothing() {
            let mut session = session_with(features(55, "Finance"));
            let engine = at_show_skills(&mut session);

            assert!(engine.available_responses(&session).unwrap().is_empty());
            let outcome = engine.respond(&mut session, "Python").unwrap();
            assert_eq!(outcome, ResponseOutcome::Ignored);
        }
    }

    mod available_responses {
        use super::*;

        #[test]
        fn empty_without_flow() {
            assert!(engine().available_responses(&fatima()).unwrap().is_empty());
        }

        #[test]
        fn button_labels_in_order() {
            let engine = engine();
            let mut session = fatima();
            engine.start_flow(&mut session, Action::RefreshCv).unwrap();

            assert_eq!(
                engine.available_responses(&session).unwrap(),
                vec!["Yes, refresh it", "Why does this help?", "Not right now"]
            );
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn unknown_step_leaves_session_unchanged() {
            let engine = engine();
            let mut session = fatima();
            session.move_to(pos("refresh_cv", "celebrate"));

            let err = engine.respond(&mut session, "Yes, refresh it").unwrap_err();

            assert!(matches!(err, DialogueError::Catalog(CatalogError::UnknownStep { .. })));
            assert_eq!(session.position(), Some(&pos("refresh_cv", "celebrate")));
            assert_eq!(session.transcript().len(), 1);
            assert!(session.transcript()[0].is_user());
        }

        #[test]
        fn unknown_flow_is_reported_by_available_responses() {
            let engine = engine();
            let mut session = fatima();
            session.move_to(pos("negotiate_salary", "initial"));

            let err = engine.available_responses(&session).unwrap_err();

            assert_eq!(err.code(), crate::domain::foundation::ErrorCode::UnknownFlow);
        }

        #[test]
        fn substitution_failure_keeps_position() {
            let engine = engine();
            let profile = fatima().profile().clone();
            let mut session = Session::new(profile);
            session.move_to(pos("add_skill", "why_matters"));

            // The initial step needs `confidence`, which requires scores.
            let err = engine.respond(&mut session, "I'll do it later").unwrap_err();

            assert_eq!(
                err,
                DialogueError::TemplateSubstitution {
                    flow: FlowId::new("add_skill"),
                    step: StepId::initial(),
                    placeholder: "confidence".to_string(),
                }
            );
            assert_eq!(session.position(), Some(&pos("add_skill", "why_matters")));
            assert_eq!(assistant_count(&session), 0);
        }
    }
}
