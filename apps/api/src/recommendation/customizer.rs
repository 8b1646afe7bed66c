//! Pathway Customizer: turns a selected template into three career pathways.
//!
//! Only a handful of profile attributes move the numbers:
//! - fast-income: +15,000 when willing to relocate
//! - balanced: +10,000 when `educationInterest` mentions "bachelor" or "master"
//!   (case-insensitive substring), plus an injected degree credential
//! - max-upside: +15,000 at ≥8 years of service, +8,000 at ≥4 years
//!
//! Everything else (roadmaps, credentials, family impact) comes from the
//! template or fixed per-strategy text.

use crate::models::analysis::{
    AnalysisResult, CareerPathway, Credential, FamilyImpact, IncomeTrajectory, PathwayType,
    RoadmapPhase,
};
use crate::models::profile::Profile;
use crate::recommendation::catalogue::{CredentialDef, PathwayOption, PathwayTemplate};
use crate::recommendation::formatting::format_usd_range;

pub const RELOCATION_BONUS: i64 = 15_000;
pub const EDUCATION_BONUS: i64 = 10_000;
pub const SENIOR_EXPERIENCE_BONUS: i64 = 15_000;
pub const MID_EXPERIENCE_BONUS: i64 = 8_000;
pub const SENIOR_EXPERIENCE_YEARS: f64 = 8.0;
pub const MID_EXPERIENCE_YEARS: f64 = 4.0;

/// Appended to the balanced pathway when the education bonus applies.
pub const DEGREE_CREDENTIAL: CredentialDef = CredentialDef {
    name: "Bachelor's Degree (optional accelerated program)",
    timeline: "2-4 years (part-time)",
    cost: "Covered by Post-9/11 GI Bill",
};

/// Salary offsets from the pathway base at years 1, 3 and 5 as (low, high).
#[derive(Debug, Clone, Copy)]
pub struct Spread {
    pub year1: (i64, i64),
    pub year3: (i64, i64),
    pub year5: (i64, i64),
}

pub const FAST_INCOME_SPREAD: Spread = Spread {
    year1: (0, 10_000),
    year3: (15_000, 25_000),
    year5: (30_000, 45_000),
};

pub const BALANCED_SPREAD: Spread = Spread {
    year1: (0, 15_000),
    year3: (20_000, 35_000),
    year5: (40_000, 60_000),
};

pub const MAX_UPSIDE_SPREAD: Spread = Spread {
    year1: (0, 20_000),
    year3: (30_000, 50_000),
    year5: (60_000, 100_000),
};

impl Spread {
    pub fn for_type(pathway_type: PathwayType) -> Self {
        match pathway_type {
            PathwayType::FastIncome => FAST_INCOME_SPREAD,
            PathwayType::Balanced => BALANCED_SPREAD,
            PathwayType::MaxUpside => MAX_UPSIDE_SPREAD,
        }
    }

    fn trajectory(&self, base: i64) -> IncomeTrajectory {
        let range = |(low, high): (i64, i64)| format_usd_range(base + low, base + high);
        IncomeTrajectory {
            year1: range(self.year1),
            year3: range(self.year3),
            year5: range(self.year5),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Adjustments
// ────────────────────────────────────────────────────────────────────────────

pub fn relocation_bonus(profile: &Profile) -> i64 {
    if profile.willing_to_relocate {
        RELOCATION_BONUS
    } else {
        0
    }
}

/// Loose on purpose: "no interest in bachelor-level work" also matches.
pub fn wants_degree(profile: &Profile) -> bool {
    let interest = profile.education_interest.to_lowercase();
    interest.contains("bachelor") || interest.contains("master")
}

pub fn education_bonus(profile: &Profile) -> i64 {
    if wants_degree(profile) {
        EDUCATION_BONUS
    } else {
        0
    }
}

pub fn experience_bonus(years_of_service: f64) -> i64 {
    if years_of_service >= SENIOR_EXPERIENCE_YEARS {
        SENIOR_EXPERIENCE_BONUS
    } else if years_of_service >= MID_EXPERIENCE_YEARS {
        MID_EXPERIENCE_BONUS
    } else {
        0
    }
}

/// Template starting salary plus the one bonus that applies to this strategy.
pub fn base_salary(profile: &Profile, option: &PathwayOption, pathway_type: PathwayType) -> i64 {
    let bonus = match pathway_type {
        PathwayType::FastIncome => relocation_bonus(profile),
        PathwayType::Balanced => education_bonus(profile),
        PathwayType::MaxUpside => experience_bonus(profile.years_of_service),
    };
    option.base_salary + bonus
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Produces the full result for a profile and its selected template.
/// Pathways are always emitted fast-income, balanced, max-upside.
pub fn customize(profile: &Profile, template: &PathwayTemplate) -> AnalysisResult {
    AnalysisResult {
        summary: build_summary(profile, template),
        pathways: PathwayType::ALL
            .iter()
            .map(|&kind| build_pathway(profile, template, kind))
            .collect(),
    }
}

pub fn build_summary(profile: &Profile, template: &PathwayTemplate) -> String {
    let location_clause = if profile.willing_to_relocate {
        "Your willingness to relocate opens up opportunities nationwide, including higher-paying markets and employers with relocation packages.".to_string()
    } else {
        format!(
            "These pathways focus on opportunities you can pursue in and around {}.",
            profile.current_location
        )
    };

    format!(
        "Your service in the {branch} as a {rank} ({mos}) has given you strong experience in {skill_area}. \
        Your leadership experience, {leadership}, translates directly into the responsibility civilian employers look for. {location_clause}",
        branch = profile.branch,
        rank = profile.rank,
        mos = profile.military_occupation_code,
        skill_area = template.skill_area,
        leadership = profile.leadership_experience.trim(),
    )
}

fn build_pathway(
    profile: &Profile,
    template: &PathwayTemplate,
    pathway_type: PathwayType,
) -> CareerPathway {
    let option = template.option(pathway_type);
    let base = base_salary(profile, option, pathway_type);

    let mut required_credentials: Vec<Credential> =
        option.credentials.iter().map(to_credential).collect();
    if pathway_type == PathwayType::Balanced && wants_degree(profile) {
        required_credentials.push(to_credential(&DEGREE_CREDENTIAL));
    }

    CareerPathway {
        pathway_type,
        title: option.title.to_string(),
        description: option.description.to_string(),
        income_trajectory: Spread::for_type(pathway_type).trajectory(base),
        roadmap: option
            .roadmap
            .iter()
            .map(|p| RoadmapPhase {
                phase: p.phase.to_string(),
                duration: p.duration.to_string(),
                steps: p.steps.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
        required_credentials,
        family_impact: family_impact(pathway_type),
        why_this_path: option.why_this_path.to_string(),
    }
}

fn to_credential(def: &CredentialDef) -> Credential {
    Credential {
        name: def.name.to_string(),
        timeline: def.timeline.to_string(),
        cost: def.cost.to_string(),
    }
}

fn family_impact(pathway_type: PathwayType) -> FamilyImpact {
    let (time_commitment, flexibility, stability, notes) = match pathway_type {
        PathwayType::FastIncome => (
            "Full-time, 40-50 hours per week; some roles include shift or on-call work",
            "Low to moderate during the first year",
            "High: established employers with steady demand",
            "The quickest route to a civilian paycheck. Expect an intense onboarding period, then a predictable routine.",
        ),
        PathwayType::Balanced => (
            "Full-time, around 40 hours per week plus optional part-time study",
            "Moderate to high: many employers offer hybrid or flexible schedules",
            "High: steady growth with limited income risk",
            "Leaves room for family commitments while income grows steadily.",
        ),
        PathwayType::MaxUpside => (
            "45-60 hours per week during training and early career",
            "Low at first, improving with seniority",
            "Moderate: more variance early, strongest long-term earnings",
            "Plan the first two to three years with your family; the payoff comes later.",
        ),
    };

    FamilyImpact {
        time_commitment: time_commitment.to_string(),
        flexibility: flexibility.to_string(),
        stability: stability.to_string(),
        notes: notes.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::fixtures::army_infantry;
    use crate::recommendation::catalogue::TEMPLATES;
    use crate::recommendation::formatting::parse_range_low;
    use crate::validation::result::validate_result;

    fn year1_low(result: &AnalysisResult, kind: PathwayType) -> i64 {
        let pathway = result.pathway(kind).unwrap();
        parse_range_low(&pathway.income_trajectory.year1).unwrap()
    }

    #[test]
    fn test_experience_tiers() {
        let cases = [
            (0.0, 0),
            (3.0, 0),
            (4.0, 8_000),
            (7.0, 8_000),
            (8.0, 15_000),
            (12.0, 15_000),
        ];
        for (years, expected) in cases {
            assert_eq!(experience_bonus(years), expected, "years = {years}");
        }
    }

    #[test]
    fn test_experience_tier_boundary_is_inclusive_only_at_threshold() {
        assert_eq!(experience_bonus(3.99), 0);
        assert_eq!(experience_bonus(7.5), 8_000);
    }

    #[test]
    fn test_relocation_adds_exactly_15000_to_fast_income() {
        let template = &TEMPLATES[0];
        let mut moving = army_infantry();
        moving.willing_to_relocate = true;
        let mut staying = moving.clone();
        staying.willing_to_relocate = false;

        let a = customize(&moving, template);
        let b = customize(&staying, template);
        assert_eq!(
            year1_low(&a, PathwayType::FastIncome) - year1_low(&b, PathwayType::FastIncome),
            15_000
        );
        // Relocation does not touch the other strategies.
        assert_eq!(
            year1_low(&a, PathwayType::Balanced),
            year1_low(&b, PathwayType::Balanced)
        );
    }

    #[test]
    fn test_fast_income_ranges_follow_formula() {
        let template = &TEMPLATES[2];
        let mut profile = army_infantry();
        profile.willing_to_relocate = false;
        let base = template.fast_income.base_salary;

        let result = customize(&profile, template);
        let trajectory = &result.pathway(PathwayType::FastIncome).unwrap().income_trajectory;
        assert_eq!(trajectory.year1, format_usd_range(base, base + 10_000));
        assert_eq!(trajectory.year3, format_usd_range(base + 15_000, base + 25_000));
        assert_eq!(trajectory.year5, format_usd_range(base + 30_000, base + 45_000));
    }

    #[test]
    fn test_education_bonus_is_case_insensitive() {
        let mut profile = army_infantry();
        profile.education_interest = "Interested in a MASTER'S program".to_string();
        assert_eq!(education_bonus(&profile), 10_000);

        profile.education_interest = "Trade school only".to_string();
        assert_eq!(education_bonus(&profile), 0);
    }

    #[test]
    fn test_education_match_is_a_plain_substring() {
        let mut profile = army_infantry();
        profile.education_interest = "No interest in bachelor-level work".to_string();
        assert!(wants_degree(&profile));
    }

    #[test]
    fn test_degree_credential_injected_only_for_balanced() {
        let template = &TEMPLATES[3];
        let profile = army_infantry();
        let result = customize(&profile, template);

        let has_degree = |kind: PathwayType| {
            result
                .pathway(kind)
                .unwrap()
                .required_credentials
                .iter()
                .any(|c| c.name == DEGREE_CREDENTIAL.name)
        };
        assert!(has_degree(PathwayType::Balanced));
        assert!(!has_degree(PathwayType::FastIncome));
        assert!(!has_degree(PathwayType::MaxUpside));
        assert_eq!(
            result.pathway(PathwayType::Balanced).unwrap().required_credentials.len(),
            template.balanced.credentials.len() + 1
        );
    }

    #[test]
    fn test_no_degree_credential_without_interest() {
        let template = &TEMPLATES[3];
        let mut profile = army_infantry();
        profile.education_interest = "Certifications".to_string();
        let result = customize(&profile, template);
        assert_eq!(
            result.pathway(PathwayType::Balanced).unwrap().required_credentials.len(),
            template.balanced.credentials.len()
        );
    }

    #[test]
    fn test_pathways_emitted_in_fixed_order() {
        let result = customize(&army_infantry(), &TEMPLATES[1]);
        let order: Vec<PathwayType> = result.pathways.iter().map(|p| p.pathway_type).collect();
        assert_eq!(order, PathwayType::ALL.to_vec());
    }

    #[test]
    fn test_every_template_yields_a_valid_result() {
        let profile = army_infantry();
        for template in &TEMPLATES {
            let result = customize(&profile, template);
            validate_result(&result).unwrap_or_else(|e| panic!("{}: {e}", template.id));
        }
    }

    #[test]
    fn test_roadmap_copied_verbatim() {
        let template = &TEMPLATES[4];
        let result = customize(&army_infantry(), template);
        let roadmap = &result.pathway(PathwayType::MaxUpside).unwrap().roadmap;
        assert_eq!(roadmap.len(), template.max_upside.roadmap.len());
        assert_eq!(roadmap[0].phase, template.max_upside.roadmap[0].phase);
        assert_eq!(roadmap[0].steps.len(), template.max_upside.roadmap[0].steps.len());
    }

    #[test]
    fn test_summary_mentions_profile_and_relocation() {
        let template = &TEMPLATES[0];
        let profile = army_infantry();
        let summary = build_summary(&profile, template);
        assert!(summary.contains("Army"));
        assert!(summary.contains("11B"));
        assert!(summary.contains("Staff Sergeant (E-6)"));
        assert!(summary.contains(template.skill_area));
        assert!(summary.contains("Led a 9-soldier squad"));
        assert!(summary.contains("relocate"));
    }

    #[test]
    fn test_summary_names_current_location_when_staying() {
        let mut profile = army_infantry();
        profile.willing_to_relocate = false;
        let summary = build_summary(&profile, &TEMPLATES[0]);
        assert!(summary.contains("Fort Liberty, NC"));
    }

    #[test]
    fn test_family_impact_is_not_data_derived() {
        let template = &TEMPLATES[0];
        let a = customize(&army_infantry(), template);
        let mut other = army_infantry();
        other.dependents = 0;
        other.family_status = "Single".to_string();
        let b = customize(&other, template);
        for kind in PathwayType::ALL {
            assert_eq!(
                a.pathway(kind).unwrap().family_impact,
                b.pathway(kind).unwrap().family_impact
            );
        }
    }
}
