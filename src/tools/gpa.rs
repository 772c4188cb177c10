use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Letter grades on the 4.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LetterGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    DMinus,
    F,
}

impl LetterGrade {
    pub fn points(&self) -> f64 {
        match self {
            LetterGrade::APlus | LetterGrade::A => 4.0,
            LetterGrade::AMinus => 3.7,
            LetterGrade::BPlus => 3.3,
            LetterGrade::B => 3.0,
            LetterGrade::BMinus => 2.7,
            LetterGrade::CPlus => 2.3,
            LetterGrade::C => 2.0,
            LetterGrade::CMinus => 1.7,
            LetterGrade::DPlus => 1.3,
            LetterGrade::D => 1.0,
            LetterGrade::DMinus => 0.7,
            LetterGrade::F => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A-",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B-",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C-",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::DMinus => "D-",
            LetterGrade::F => "F",
        }
    }
}

impl FromStr for LetterGrade {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grade = match s.trim().to_ascii_uppercase().as_str() {
            "A+" => LetterGrade::APlus,
            "A" => LetterGrade::A,
            "A-" => LetterGrade::AMinus,
            "B+" => LetterGrade::BPlus,
            "B" => LetterGrade::B,
            "B-" => LetterGrade::BMinus,
            "C+" => LetterGrade::CPlus,
            "C" => LetterGrade::C,
            "C-" => LetterGrade::CMinus,
            "D+" => LetterGrade::DPlus,
            "D" => LetterGrade::D,
            "D-" => LetterGrade::DMinus,
            "F" => LetterGrade::F,
            _ => return Err(GpaError::UnknownGrade(s.to_owned())),
        };
        Ok(grade)
    }
}

impl TryFrom<String> for LetterGrade {
    type Error = GpaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LetterGrade> for String {
    fn from(grade: LetterGrade) -> Self {
        grade.as_str().to_owned()
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GpaError {
    #[error("`{0}` is not a recognised letter grade")]
    UnknownGrade(String),
    #[error("Course `{name}` has invalid credits: {credits}")]
    InvalidCredits { name: String, credits: f64 },
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct Course {
    #[serde(default)]
    pub name: String,
    pub credits: f64,
    /// Letter grade such as `A-` or `B+`.
    #[schema(value_type = String)]
    pub grade: LetterGrade,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GpaSummary {
    /// Credit-weighted grade point average, rounded to two decimals.
    pub gpa: f64,
    pub total_credits: f64,
    pub quality_points: f64,
}

/// Credit-weighted GPA. No credits at all gives a GPA of 0.
pub fn calculate_gpa(courses: &[Course]) -> Result<GpaSummary, GpaError> {
    let mut total_credits = 0.0;
    let mut quality_points = 0.0;
    for course in courses {
        if !course.credits.is_finite() || course.credits < 0.0 {
            return Err(GpaError::InvalidCredits {
                name: course.name.clone(),
                credits: course.credits,
            });
        }
        total_credits += course.credits;
        quality_points += course.credits * course.grade.points();
    }
    let gpa = if total_credits > 0.0 {
        round_to_hundredths(quality_points / total_credits)
    } else {
        0.0
    };
    Ok(GpaSummary {
        gpa,
        total_credits,
        quality_points: round_to_hundredths(quality_points),
    })
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
