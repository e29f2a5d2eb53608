use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The platforms a search can target. Adding a platform means adding a
/// variant here and a search call in the dispatcher; the compiler flags
/// every match that needs extending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Linkedin,
    Instagram,
    Facebook,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Linkedin,
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linkedin" => Ok(Platform::Linkedin),
            "instagram" => Ok(Platform::Instagram),
            "facebook" => Ok(Platform::Facebook),
            "twitter" => Ok(Platform::Twitter),
            other => Err(CriteriaError::UnknownPlatform(other.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
    #[error("page must be a positive integer")]
    InvalidPage,
}

/// One editable criteria field. The closed set keeps filter edits
/// exhaustively matched instead of keyed by arbitrary strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    JobTitle,
    Location,
    Industry,
    CompanySize,
    Company,
    Experience,
    Education,
    Skills,
    Languages,
    Seniority,
    Page,
    Platform,
}

/// The full set of search filters a dashboard session holds. Serialized
/// camelCase because that is the wire shape the search endpoints take.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    pub job_title: String,
    pub location: String,
    pub industry: String,
    pub company_size: String,
    pub company: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub languages: String,
    pub seniority: String,
    pub page: u32,
    pub platform: Platform,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            location: String::new(),
            industry: String::new(),
            company_size: String::new(),
            company: String::new(),
            experience: String::new(),
            education: String::new(),
            skills: String::new(),
            languages: String::new(),
            seniority: String::new(),
            page: 1,
            platform: Platform::default(),
        }
    }
}

impl SearchCriteria {
    /// Replaces exactly one field, leaving the rest untouched. Free-text
    /// fields take any value; `page` and `platform` must parse.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), CriteriaError> {
        match field {
            FilterField::JobTitle => self.job_title = value.to_string(),
            FilterField::Location => self.location = value.to_string(),
            FilterField::Industry => self.industry = value.to_string(),
            FilterField::CompanySize => self.company_size = value.to_string(),
            FilterField::Company => self.company = value.to_string(),
            FilterField::Experience => self.experience = value.to_string(),
            FilterField::Education => self.education = value.to_string(),
            FilterField::Skills => self.skills = value.to_string(),
            FilterField::Languages => self.languages = value.to_string(),
            FilterField::Seniority => self.seniority = value.to_string(),
            FilterField::Page => {
                self.page = value
                    .parse()
                    .ok()
                    .filter(|page| *page >= 1)
                    .ok_or(CriteriaError::InvalidPage)?;
            }
            FilterField::Platform => self.platform = value.parse()?,
        }

        Ok(())
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// A query may only be dispatched with at least one of job title,
    /// company, or skills filled in.
    pub fn has_required(&self) -> bool {
        !(self.job_title.is_empty() && self.company.is_empty() && self.skills.is_empty())
    }
}
