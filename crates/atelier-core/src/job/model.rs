//! Job posting domain model.

use serde::{Deserialize, Serialize};

/// Kind of engagement a job offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobCategory {
    Commission,
    Freelance,
    FullTime,
    Collaboration,
}

impl JobCategory {
    pub const ALL: [JobCategory; 4] = [
        JobCategory::Commission,
        JobCategory::Freelance,
        JobCategory::FullTime,
        JobCategory::Collaboration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commission => "commission",
            Self::Freelance => "freelance",
            Self::FullTime => "full-time",
            Self::Collaboration => "collaboration",
        }
    }
}

impl std::str::FromStr for JobCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown job category: {s}"))
    }
}

/// A posted opportunity.
///
/// `posted_by` references a user id and is not validated against any
/// collection. `created_at` is assigned once, at posting time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub category: JobCategory,
    pub description: String,
    pub budget: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub deadline: String,
    pub posted_by: String,
    pub created_at: String,
}

/// Everything a poster supplies; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub category: JobCategory,
    pub description: String,
    pub budget: String,
    pub skills: Vec<String>,
    pub deadline: String,
    pub posted_by: String,
}

impl JobDraft {
    /// Parses the comma separated skill field of the posting form.
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn into_job(self, id: String, created_at: String) -> Job {
        Job {
            id,
            title: self.title,
            company: self.company,
            category: self.category,
            description: self.description,
            budget: self.budget,
            skills: self.skills,
            deadline: self.deadline,
            posted_by: self.posted_by,
            created_at,
        }
    }
}

/// Jobs in the given category, newest-first order preserved. `None` is "All".
pub fn jobs_in_category(jobs: &[Job], category: Option<JobCategory>) -> Vec<&Job> {
    jobs.iter()
        .filter(|job| category.is_none_or(|c| job.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in JobCategory::ALL {
            assert_eq!(category.as_str().parse::<JobCategory>(), Ok(category));
        }
        assert!("gig".parse::<JobCategory>().is_err());
    }

    #[test]
    fn test_full_time_serializes_with_hyphen() {
        assert_eq!(
            serde_json::to_string(&JobCategory::FullTime).unwrap(),
            "\"full-time\""
        );
    }

    #[test]
    fn test_parse_skills_trims_and_drops_blanks() {
        assert_eq!(
            JobDraft::parse_skills(" Branding, Vector Illustration ,,"),
            vec!["Branding".to_string(), "Vector Illustration".to_string()]
        );
    }
}
