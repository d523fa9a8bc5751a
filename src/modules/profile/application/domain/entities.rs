use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::patch::PatchField;
use crate::shared::validation::{non_blank, required, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    #[schema(example = "Backend Engineer")]
    pub title: String,
    #[schema(example = "Acme")]
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// A user's developer profile. Experience and education are kept newest first.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub user: UserId,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    #[schema(example = "Developer")]
    pub status: String,
    #[schema(example = json!(["HTML", "CSS", "JS"]))]
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    /// Revision used for compare-and-swap writes.
    #[serde(skip)]
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// Returns whether an entry was removed.
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        let before = self.experience.len();
        self.experience.retain(|e| e.id != id);
        self.experience.len() != before
    }

    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    pub fn remove_education(&mut self, id: Uuid) -> bool {
        let before = self.education.len();
        self.education.retain(|e| e.id != id);
        self.education.len() != before
    }

    /// Applies a validated partial update. Experience and education are never touched.
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        update.company.apply_to(&mut self.company);
        update.website.apply_to(&mut self.website);
        update.location.apply_to(&mut self.location);
        update.bio.apply_to(&mut self.bio);
        update.githubusername.apply_to(&mut self.githubusername);

        if let PatchField::Value(status) = update.status {
            self.status = status.trim().to_string();
        }
        if let PatchField::Value(skills) = update.skills {
            self.skills = parse_skills(&skills);
        }

        update.youtube.apply_to(&mut self.social.youtube);
        update.twitter.apply_to(&mut self.social.twitter);
        update.facebook.apply_to(&mut self.social.facebook);
        update.linkedin.apply_to(&mut self.social.linkedin);
        update.instagram.apply_to(&mut self.social.instagram);
    }
}

/// Public summary of the account that owns a profile.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileOwner {
    #[schema(value_type = String)]
    pub id: UserId,
    pub name: String,
    pub avatar: String,
}

/// Profile as returned by read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub owner: Option<ProfileOwner>,
}

// ========================= Profile Fields =========================

/// Body of `POST /api/profile`. Social links are accepted flat.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProfileForm {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    #[schema(example = "Developer")]
    pub status: Option<String>,
    /// Comma separated
    #[schema(example = "HTML, CSS, JS")]
    pub skills: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Validated content of a new profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: SocialLinks,
}

impl TryFrom<ProfileForm> for ProfileFields {
    type Error = FieldErrors;

    fn try_from(form: ProfileForm) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        let status = required(&mut errors, "status", form.status, "Status is required");

        let skills = form.skills.as_deref().map(parse_skills).unwrap_or_default();
        if skills.is_empty() {
            errors.add("skills", "Skills is required");
        }

        errors.into_result(Self {
            company: non_blank(form.company),
            website: non_blank(form.website),
            location: non_blank(form.location),
            status,
            skills,
            bio: non_blank(form.bio),
            githubusername: non_blank(form.githubusername),
            social: SocialLinks {
                youtube: non_blank(form.youtube),
                twitter: non_blank(form.twitter),
                facebook: non_blank(form.facebook),
                linkedin: non_blank(form.linkedin),
                instagram: non_blank(form.instagram),
            },
        })
    }
}

/// Body of `PUT /api/profile`. Absent fields are left as they are,
/// `null` or `""` clears an optional field.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProfileUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub company: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub website: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub skills: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub githubusername: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub youtube: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub twitter: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub facebook: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub linkedin: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub instagram: PatchField<String>,
}

impl ProfileUpdate {
    /// `status` and `skills` may be omitted but never cleared.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        match &self.status {
            PatchField::Unset => {}
            PatchField::Value(s) if !s.trim().is_empty() => {}
            _ => errors.add("status", "Status is required"),
        }

        match &self.skills {
            PatchField::Unset => {}
            PatchField::Value(s) if !parse_skills(s).is_empty() => {}
            _ => errors.add("skills", "Skills is required"),
        }

        errors.into_result(())
    }
}

// ========================= Experience / Education =========================

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceForm {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339
    #[schema(example = "2020-01-01")]
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl TryFrom<ExperienceForm> for Experience {
    type Error = FieldErrors;

    fn try_from(form: ExperienceForm) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        let title = required(&mut errors, "title", form.title, "Title is required");
        let company = required(&mut errors, "company", form.company, "Company is required");
        let (from, to) = parse_period(&mut errors, form.from, form.to);

        let from = match (from, errors.is_empty()) {
            (Some(from), true) => from,
            _ => return Err(errors),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            company,
            location: non_blank(form.location),
            from,
            to,
            current: form.current.unwrap_or(false),
            description: non_blank(form.description),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct EducationForm {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub fieldofstudy: Option<String>,
    #[schema(example = "2016-09-01")]
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

impl TryFrom<EducationForm> for Education {
    type Error = FieldErrors;

    fn try_from(form: EducationForm) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();

        let school = required(&mut errors, "school", form.school, "School is required");
        let degree = required(&mut errors, "degree", form.degree, "Degree is required");
        let fieldofstudy = required(
            &mut errors,
            "fieldofstudy",
            form.fieldofstudy,
            "Field of study is required",
        );
        let (from, to) = parse_period(&mut errors, form.from, form.to);

        let from = match (from, errors.is_empty()) {
            (Some(from), true) => from,
            _ => return Err(errors),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            school,
            degree,
            fieldofstudy,
            from,
            to,
            current: form.current.unwrap_or(false),
            description: non_blank(form.description),
        })
    }
}

fn parse_period(
    errors: &mut FieldErrors,
    from: Option<String>,
    to: Option<String>,
) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let from = match non_blank(from) {
        None => {
            errors.add("from", "From date is required");
            None
        }
        Some(raw) => {
            let parsed = parse_date(&raw);
            if parsed.is_none() {
                errors.add("from", "From date is invalid");
            }
            parsed
        }
    };

    let to = non_blank(to).and_then(|raw| {
        let parsed = parse_date(&raw);
        if parsed.is_none() {
            errors.add("to", "To date is invalid");
        }
        parsed
    });

    (from, to)
}

/// Splits a comma separated list, trimming entries and dropping blanks.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
