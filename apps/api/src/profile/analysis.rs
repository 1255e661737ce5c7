//! Profile analysis — derives content themes, target audience, tone, and
//! posting preferences from a user's profile fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::user::UserRow;

const TECH_KEYWORDS: &[&str] = &["python", "javascript", "ai", "machine learning", "data science"];
const BUSINESS_KEYWORDS: &[&str] = &["marketing", "sales", "management", "strategy"];
const DESIGN_KEYWORDS: &[&str] = &["ui", "ux", "design", "graphic"];

/// Default posting slots used when a profile declares none.
pub const DEFAULT_POSTING_TIMES: &[&str] = &["08:00", "12:00", "18:00"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalIdentity {
    pub name: String,
    pub headline: String,
    pub skills: Vec<String>,
    pub experience: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub professional_identity: ProfessionalIdentity,
    pub content_themes: Vec<String>,
    pub target_audience: Vec<String>,
    pub content_tone: String,
}

/// Analyzes a profile for content generation: keyword-driven themes from
/// skills, audience derivation from experience titles, and a tone reading
/// from about/headline cues. Output ordering is first-encountered and
/// deterministic.
pub fn analyze_user_profile(user: &UserRow) -> ProfileAnalysis {
    let mut content_themes = Vec::new();
    for skill in &user.skills {
        let skill_lower = skill.to_lowercase();
        if TECH_KEYWORDS.iter().any(|kw| skill_lower.contains(kw)) {
            push_unique(&mut content_themes, "Technology");
        }
        if BUSINESS_KEYWORDS.iter().any(|kw| skill_lower.contains(kw)) {
            push_unique(&mut content_themes, "Business");
        }
        if DESIGN_KEYWORDS.iter().any(|kw| skill_lower.contains(kw)) {
            push_unique(&mut content_themes, "Design");
        }
    }

    let mut target_audience = Vec::new();
    for title in experience_titles(&user.experience) {
        let title_lower = title.to_lowercase();
        if title_lower.contains("engineer") {
            for audience in ["Developers", "Engineers", "Tech Enthusiasts"] {
                push_unique(&mut target_audience, audience);
            }
        }
        if title_lower.contains("manager") {
            for audience in ["Managers", "Leaders", "Professionals"] {
                push_unique(&mut target_audience, audience);
            }
        }
    }

    let about = user.about.as_deref().unwrap_or("").to_lowercase();
    let headline = user.headline.as_deref().unwrap_or("").to_lowercase();
    let content_tone = if about.contains("passionate") || headline.contains("enthusiast") {
        "Enthusiastic and Educational"
    } else if about.contains("expert") || headline.contains("senior") {
        "Authoritative and Insightful"
    } else {
        "Professional and Informative"
    };

    ProfileAnalysis {
        professional_identity: ProfessionalIdentity {
            name: user.name.clone().unwrap_or_default(),
            headline: user.headline.clone().unwrap_or_default(),
            skills: user.skills.clone(),
            experience: user.experience.clone(),
        },
        content_themes,
        target_audience,
        content_tone: content_tone.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsAndInterests {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

pub fn extract_skills_and_interests(user: &UserRow) -> SkillsAndInterests {
    SkillsAndInterests {
        skills: user.skills.clone(),
        interests: user.interests.clone(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPreferences {
    pub content_types: Vec<String>,
    pub posting_frequency: String,
    pub optimal_posting_times: Vec<String>,
}

/// Derives content preferences from the profile's skills. Frequency and
/// posting times are fixed defaults until audience data can refine them.
pub fn content_preferences(user: &UserRow) -> ContentPreferences {
    let mut content_types = Vec::new();

    if user
        .skills
        .iter()
        .any(|s| matches!(s.to_lowercase().as_str(), "python" | "javascript" | "programming"))
    {
        content_types.push("technical_tutorials".to_string());
        content_types.push("code_snippets".to_string());
    }
    if user
        .skills
        .iter()
        .any(|s| matches!(s.to_lowercase().as_str(), "marketing" | "sales"))
    {
        content_types.push("industry_insights".to_string());
        content_types.push("case_studies".to_string());
    }

    ContentPreferences {
        content_types,
        posting_frequency: "daily".to_string(),
        optimal_posting_times: DEFAULT_POSTING_TIMES.iter().map(|t| t.to_string()).collect(),
    }
}

fn experience_titles(experience: &Value) -> Vec<String> {
    experience
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("title").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn push_unique(items: &mut Vec<String>, candidate: &str) {
    if !items.iter().any(|existing| existing == candidate) {
        items.push(candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn user(skills: &[&str], headline: &str, about: &str, experience: Value) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            linkedin_profile_url: "https://linkedin.com/in/test".to_string(),
            name: Some("Test User".to_string()),
            headline: Some(headline.to_string()),
            about: Some(about.to_string()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience,
            education: json!([]),
            interests: vec!["AI".to_string()],
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_tech_skills_yield_technology_theme() {
        let analysis = analyze_user_profile(&user(
            &["Python", "Machine Learning"],
            "Engineer",
            "",
            json!([]),
        ));
        assert_eq!(analysis.content_themes, vec!["Technology"]);
    }

    #[test]
    fn test_mixed_skills_yield_themes_in_order() {
        let analysis = analyze_user_profile(&user(
            &["Marketing Strategy", "UX Design", "Python"],
            "Generalist",
            "",
            json!([]),
        ));
        // First skill hits Business, second Design, third Technology.
        assert_eq!(analysis.content_themes, vec!["Business", "Design", "Technology"]);
    }

    #[test]
    fn test_engineer_experience_yields_developer_audience() {
        let analysis = analyze_user_profile(&user(
            &[],
            "",
            "",
            json!([{"title": "Software Engineer", "company": "Acme"}]),
        ));
        assert_eq!(
            analysis.target_audience,
            vec!["Developers", "Engineers", "Tech Enthusiasts"]
        );
    }

    #[test]
    fn test_engineering_manager_gets_both_audiences() {
        let analysis = analyze_user_profile(&user(
            &[],
            "",
            "",
            json!([{"title": "Engineering Manager"}]),
        ));
        assert_eq!(analysis.target_audience.len(), 6);
        assert_eq!(analysis.target_audience[0], "Developers");
        assert_eq!(analysis.target_audience[3], "Managers");
    }

    #[test]
    fn test_tone_cues_precedence() {
        let passionate = analyze_user_profile(&user(&[], "", "Passionate about data", json!([])));
        assert_eq!(passionate.content_tone, "Enthusiastic and Educational");

        let senior = analyze_user_profile(&user(&[], "Senior Engineer", "", json!([])));
        assert_eq!(senior.content_tone, "Authoritative and Insightful");

        // "passionate" wins over "senior" when both are present
        let both = analyze_user_profile(&user(&[], "Senior Engineer", "passionate builder", json!([])));
        assert_eq!(both.content_tone, "Enthusiastic and Educational");

        let neither = analyze_user_profile(&user(&[], "Engineer", "", json!([])));
        assert_eq!(neither.content_tone, "Professional and Informative");
    }

    #[test]
    fn test_non_array_experience_is_tolerated() {
        let analysis = analyze_user_profile(&user(&[], "", "", json!("imported as text")));
        assert!(analysis.target_audience.is_empty());
    }

    #[test]
    fn test_programming_skills_drive_content_types() {
        let prefs = content_preferences(&user(&["Python"], "", "", json!([])));
        assert_eq!(prefs.content_types, vec!["technical_tutorials", "code_snippets"]);
        assert_eq!(prefs.posting_frequency, "daily");
        assert_eq!(prefs.optimal_posting_times, vec!["08:00", "12:00", "18:00"]);
    }

    #[test]
    fn test_content_type_matching_is_exact_not_substring() {
        // "python scripting" is not the literal skill "python"
        let prefs = content_preferences(&user(&["python scripting"], "", "", json!([])));
        assert!(prefs.content_types.is_empty());
    }

    #[test]
    fn test_sales_and_python_accumulate_types() {
        let prefs = content_preferences(&user(&["Python", "Sales"], "", "", json!([])));
        assert_eq!(prefs.content_types.len(), 4);
    }

    #[test]
    fn test_extract_skills_and_interests_passthrough() {
        let row = user(&["Python"], "", "", json!([]));
        let extracted = extract_skills_and_interests(&row);
        assert_eq!(extracted.skills, vec!["Python"]);
        assert_eq!(extracted.interests, vec!["AI"]);
    }
}
