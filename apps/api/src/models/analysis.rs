use std::fmt;

use serde::{Deserialize, Serialize};

/// The three strategy tags. Every `AnalysisResult` carries each exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathwayType {
    #[serde(rename = "fast-income")]
    FastIncome,
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "max-upside")]
    MaxUpside,
}

impl PathwayType {
    /// Fixed emission order for generated results.
    pub const ALL: [PathwayType; 3] = [
        PathwayType::FastIncome,
        PathwayType::Balanced,
        PathwayType::MaxUpside,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathwayType::FastIncome => "fast-income",
            PathwayType::Balanced => "balanced",
            PathwayType::MaxUpside => "max-upside",
        }
    }
}

impl fmt::Display for PathwayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salary ranges at years 1, 3 and 5, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTrajectory {
    pub year1: String,
    pub year3: String,
    pub year5: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub duration: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub name: String,
    pub timeline: String,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyImpact {
    pub time_commitment: String,
    pub flexibility: String,
    pub stability: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathway {
    #[serde(rename = "type")]
    pub pathway_type: PathwayType,
    pub title: String,
    pub description: String,
    pub income_trajectory: IncomeTrajectory,
    pub roadmap: Vec<RoadmapPhase>,
    pub required_credentials: Vec<Credential>,
    pub family_impact: FamilyImpact,
    pub why_this_path: String,
}

/// Output contract shared by every recommendation provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub pathways: Vec<CareerPathway>,
}

impl AnalysisResult {
    pub fn pathway(&self, pathway_type: PathwayType) -> Option<&CareerPathway> {
        self.pathways
            .iter()
            .find(|p| p.pathway_type == pathway_type)
    }
}
