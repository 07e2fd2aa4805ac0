//! Maps predicted labels to their guidance bundles.

use crate::domain::model::ScoreLabel;
use crate::utils::error::{Result, ScoreError};

/// Visual treatment a client should give the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTone {
    Success,
    Warning,
    Alert,
}

/// Celebratory effect attached to a category, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration {
    Balloons,
    Snow,
}

/// The fixed recommendation content for one predicted category.
#[derive(Debug)]
pub struct GuidanceBundle {
    pub category: ScoreLabel,
    pub headline: &'static str,
    pub tone: DisplayTone,
    pub celebration: Option<Celebration>,
    pub recommendations: &'static [&'static str],
}

static GOOD_BUNDLE: GuidanceBundle = GuidanceBundle {
    category: ScoreLabel::Good,
    headline: "Excellent Credit Score! Keep up the great work!",
    tone: DisplayTone::Success,
    celebration: Some(Celebration::Balloons),
    recommendations: &[
        "Continue paying all bills on time",
        "Keep credit utilization below 30%",
        "Don't close old credit accounts",
        "Monitor your credit report regularly",
        "Consider becoming an authorized user on family accounts",
    ],
};

static STANDARD_BUNDLE: GuidanceBundle = GuidanceBundle {
    category: ScoreLabel::Standard,
    headline: "Good Credit Score! Here's how to improve:",
    tone: DisplayTone::Warning,
    celebration: Some(Celebration::Snow),
    recommendations: &[
        "Set up automatic payments to avoid late fees",
        "Pay down existing debt to improve utilization ratio",
        "Don't apply for new credit cards frequently",
        "Keep old accounts open to maintain credit history",
        "Consider a secured credit card if needed",
    ],
};

static POOR_BUNDLE: GuidanceBundle = GuidanceBundle {
    category: ScoreLabel::Poor,
    headline: "Credit Score Needs Improvement! Here's your action plan:",
    tone: DisplayTone::Alert,
    celebration: None,
    recommendations: &[
        "Pay all bills on time - this is the most important factor",
        "Reduce credit card balances - aim for under 30% utilization",
        "Don't close old accounts - they help your credit history length",
        "Check your credit report - look for errors and dispute them",
        "Consider a secured credit card - to build positive payment history",
        "Pay more than the minimum - reduces debt faster",
    ],
};

/// Tips shown before any prediction exists.
pub static GENERAL_TIPS: &[&str] = &[
    "Set up automatic bill payments",
    "Pay credit cards twice per month",
    "Request credit limit increases",
    "Diversify your credit mix (cards, loans, mortgage)",
    "Keep old accounts open",
    "Monitor credit reports monthly",
    "Avoid hard inquiries when possible",
];

/// Parses the model's raw label. The label vocabulary is fixed at training
/// time; anything else is a model/presenter version mismatch.
pub fn categorize(label: &str) -> Result<ScoreLabel> {
    match label {
        "Good" => Ok(ScoreLabel::Good),
        "Standard" => Ok(ScoreLabel::Standard),
        "Poor" => Ok(ScoreLabel::Poor),
        other => Err(ScoreError::PresenterError {
            label: other.to_string(),
        }),
    }
}

/// Total mapping from category to its guidance bundle.
pub fn guidance_for(label: ScoreLabel) -> &'static GuidanceBundle {
    match label {
        ScoreLabel::Good => &GOOD_BUNDLE,
        ScoreLabel::Standard => &STANDARD_BUNDLE,
        ScoreLabel::Poor => &POOR_BUNDLE,
    }
}
