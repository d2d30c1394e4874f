// All prompt templates for the profile advisor.
// Each template carries a `{profile_json}` placeholder filled by the prompt builder.

/// Analysis prompt. The `Rating:` line is the only channel the rating comes
/// back through, so the response shape is spelled out literally.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"As a professional career advisor and resume expert, analyze this professional profile and provide a rating out of 100 along with specific recommendations for improvement.

Respond in EXACTLY this format:
Rating: <integer from 0 to 100>
Analysis: <a short assessment of the profile's strengths and weaknesses>
Recommendations:
1. <first recommendation>
2. <second recommendation>
3. <third recommendation>

The first line MUST start with "Rating:" followed by a single whole number.

PROFILE:
{profile_json}"#;

pub const RESUME_PROMPT_TEMPLATE: &str = r#"As a professional resume writer, generate a well-formatted resume in markdown format based on this profile information.

Use markdown headings for each section (Experience, Projects, Profiles) and bullet points for details. Only use facts present in the profile.

PROFILE:
{profile_json}"#;

pub const COLD_EMAIL_PROMPT_TEMPLATE: &str = r#"As a professional career coach specializing in cold email outreach, generate a personalized cold email template based on this candidate's profile.

Include a subject line, a short introduction, two or three concrete highlights from the profile, and a clear call to action.

PROFILE:
{profile_json}"#;
