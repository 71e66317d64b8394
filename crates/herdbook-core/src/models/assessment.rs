use serde::{Deserialize, Serialize};

use super::reference::{Labelled, Reference};
use crate::utils::{format_date, humanize, yes_no};

/// Placeholder shown for clinical fields the record leaves empty
const MISSING_VALUE: &str = "N/A";

/// Body condition is scored on a 1-5 scale
const BCS_SCALE_MAX: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CowSummary {
    pub cow_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Labelled for CowSummary {
    fn label(&self) -> &str {
        &self.cow_id
    }
}

/// A lookup-table entry such as a health grade or mastitis status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedOption {
    pub name: String,
}

impl Labelled for NamedOption {
    fn label(&self) -> &str {
        &self.name
    }
}

/// A veterinary assessment of a single cow, as returned by the farm API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalAssessment {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub cow: Reference<CowSummary>,
    pub assessment_date: String,
    #[serde(default)]
    pub is_cow_sick: bool,
    #[serde(default)]
    pub general_health: Option<Reference<NamedOption>>,
    #[serde(default)]
    pub udder_health: Option<Reference<NamedOption>>,
    #[serde(default)]
    pub mastitis: Option<Reference<NamedOption>>,
    #[serde(default)]
    pub has_lameness: bool,
    #[serde(default)]
    pub body_condition_score: Option<f32>,
    #[serde(default)]
    pub sickness_type: Option<String>,
    #[serde(default)]
    pub is_cow_vaccinated: bool,
    #[serde(default)]
    pub vaccination_type: Option<String>,
    #[serde(default)]
    pub has_deworming: bool,
    #[serde(default)]
    pub deworming_type: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub prescription: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBadge {
    Sick,
    Healthy,
}

impl HealthBadge {
    pub fn label(&self) -> &'static str {
        match self {
            HealthBadge::Sick => "Sick",
            HealthBadge::Healthy => "Healthy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Everything the read-only assessment detail view shows, already resolved to text.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentView {
    pub title: String,
    pub date: String,
    pub badge: HealthBadge,
    pub findings: Vec<Field>,
    pub treatments: Vec<Field>,
    /// Empty when the record has no treatment, prescription or notes
    pub notes: Vec<Field>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn reference_label(value: &Option<Reference<NamedOption>>) -> String {
    value
        .as_ref()
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

impl From<&MedicalAssessment> for AssessmentView {
    fn from(a: &MedicalAssessment) -> Self {
        let badge = if a.is_cow_sick {
            HealthBadge::Sick
        } else {
            HealthBadge::Healthy
        };

        let mut findings = vec![
            Field::new("General Health", reference_label(&a.general_health)),
            Field::new("Udder Health", reference_label(&a.udder_health)),
            Field::new("Mastitis", reference_label(&a.mastitis)),
            Field::new("Lameness", yes_no(a.has_lameness, None)),
            Field::new(
                "BCS",
                match a.body_condition_score {
                    Some(score) => format!("{}/{}", score, BCS_SCALE_MAX),
                    None => MISSING_VALUE.to_string(),
                },
            ),
        ];
        if let Some(kind) = non_empty(&a.sickness_type) {
            findings.push(Field::new("Sickness Type", humanize(kind)));
        }

        let mut treatments = vec![
            Field::new(
                "Vaccinated?",
                yes_no(a.is_cow_vaccinated, a.vaccination_type.as_deref()),
            ),
            Field::new(
                "Dewormed?",
                yes_no(a.has_deworming, a.deworming_type.as_deref()),
            ),
        ];
        if let Some(diagnosis) = non_empty(&a.diagnosis) {
            treatments.push(Field::new("Diagnosis", diagnosis));
        }

        let notes = [
            ("Treatment", &a.treatment),
            ("Rx", &a.prescription),
            ("Notes", &a.notes),
        ]
        .into_iter()
        .filter_map(|(label, value)| non_empty(value).map(|v| Field::new(label, v)))
        .collect();

        Self {
            title: format!("Cow: {}", a.cow.label()),
            date: format_date(&a.assessment_date),
            badge,
            findings,
            treatments,
            notes,
        }
    }
}
