//! Values derived from accumulated skill selections.

use serde::{Deserialize, Serialize};

use crate::domain::flow::TemplateVariables;
use crate::domain::foundation::Percentage;
use crate::domain::profile::FeatureVector;

/// Completeness points credited per added skill.
pub const POINTS_PER_SKILL: u32 = 3;

/// Profile deltas after adding the selected skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsSummary {
    pub old_completeness: Percentage,
    pub new_completeness: Percentage,
    pub improvement: u8,
    pub old_skills: u32,
    pub new_skills: u32,
    pub skills_added: u32,
}

impl SkillsSummary {
    /// Completeness grows by three points per skill, capped at 100.
    pub fn compute(features: &FeatureVector, selected: usize) -> Self {
        let added = u32::try_from(selected).unwrap_or(u32::MAX);
        let old = features.profile_completeness;
        let new = old.saturating_add(added.saturating_mul(POINTS_PER_SKILL));
        Self {
            old_completeness: old,
            new_completeness: new,
            improvement: new.points_since(old),
            old_skills: features.unique_skills_added,
            new_skills: features.unique_skills_added.saturating_add(added),
            skills_added: added,
        }
    }

    pub fn bind(&self, vars: &mut TemplateVariables) {
        vars.bind("new_completeness", self.new_completeness.value())
            .bind("improvement", self.improvement)
            .bind("old_skills", self.old_skills)
            .bind("new_skills", self.new_skills)
            .bind("skills_added", self.skills_added);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flow::DerivedVariables;
    use crate::domain::profile::Industry;

    fn features(completeness: u8, skills: u32) -> FeatureVector {
        FeatureVector {
            cv_refresh_count: 0,
            days_since_last_refresh: 7,
            profile_completeness: Percentage::new(completeness),
            emp_cv_views_last_week: 0,
            applications_count: 0,
            unique_jobs_applied: 0,
            login_count: 0,
            unique_skills_added: skills,
            job_searches: 0,
            industry: Industry::new("Data Analytics").unwrap(),
        }
    }

    #[test]
    fn five_skills_from_68() {
        let summary = SkillsSummary::compute(&features(68, 3), 5);
        assert_eq!(summary.new_completeness.value(), 83);
        assert_eq!(summary.improvement, 15);
        assert_eq!(summary.old_skills, 3);
        assert_eq!(summary.new_skills, 8);
        assert_eq!(summary.skills_added, 5);
    }

    #[test]
    fn completeness_caps_at_100() {
        let summary = SkillsSummary::compute(&features(92, 9), 9);
        assert_eq!(summary.new_completeness.value(), 100);
        assert_eq!(summary.improvement, 8);
        assert_eq!(summary.new_skills, 18);
    }

    #[test]
    fn nothing_selected_changes_nothing() {
        let summary = SkillsSummary::compute(&features(40, 2), 0);
        assert_eq!(summary.new_completeness.value(), 40);
        assert_eq!(summary.improvement, 0);
    }

    #[test]
    fn binds_every_derived_name() {
        let mut vars = TemplateVariables::new();
        SkillsSummary::compute(&features(68, 3), 5).bind(&mut vars);
        for name in DerivedVariables::SkillsSummary.names() {
            assert!(vars.contains(name), "{} not bound", name);
        }
        assert_eq!(vars.get("improvement"), Some("15"));
    }
}
