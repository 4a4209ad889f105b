// Prompt templates for the pipeline. Placeholders are `{name}` and are
// filled by `render`, never by chained `str::replace`, so user text that
// happens to contain `{...}` is left alone.

/// Job extraction. Replace: {page_data}
pub const EXTRACT_JOBS_TEMPLATE: &str = r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}

### INSTRUCTION:
The scraped text is from the careers page of a website.
Your job is to extract the job postings and return them in JSON format containing the following keys: `role`, `experience`, `skills` and `description`.
Return a single JSON object for one posting or a JSON array of objects for several.
Only return the valid JSON.

### VALID JSON (NO PREAMBLE):"#;

/// Resume field extraction. Replace: {resume_text}
pub const EXTRACT_RESUME_TEMPLATE: &str = r#"### RESUME TEXT:
{resume_text}

### INSTRUCTION:
Extract the following information from the resume: Name, Skills, Projects, Experience.
Only return the valid JSON object containing exactly the keys: `name`, `skills`, `projects`, `experience`.

### VALID JSON (NO PREAMBLE):"#;

/// Cold email generation.
/// Replace: {job_description}, {name}, {skills}, {projects}, {experience},
///          {profession}, {job_title}, {num_emails}, {delimiter}
pub const GENERATE_EMAIL_TEMPLATE: &str = r#"### JOB DESCRIPTION:
{job_description}

### CANDIDATE DETAILS:
Name: {name}
Skills: {skills}
Projects: {projects}
Experience: {experience}

### INSTRUCTION:
You are a highly motivated {profession} applying for the role of {job_title}.
Write exactly {num_emails} fully formatted cold email(s) to the hiring manager. Each email MUST include:
- A greeting (e.g., "Dear Hiring Manager")
- A compelling opening
- A highlight of 1-2 key skills or projects
- A closing paragraph inviting next steps
- A professional sign-off ("Best regards, {name}")

**Separate each email with the exact delimiter on its own line**:
{delimiter}

### EMAILS (NO PREAMBLE):"#;

/// ATS match evaluation. Replace: {job_description}, {resume_info}
pub const ATS_SCORE_TEMPLATE: &str = r#"### JOB DESCRIPTION:
{job_description}

### RESUME INFORMATION:
{resume_info}

### INSTRUCTION:
Evaluate how well the resume matches the job description (skills, experience, fit).
Provide a concise, point-wise ATS score (1-5):
1. Point 1
2. Point 2
3. Point 3
4. Point 4
5. Point 5"#;

/// ATS resume rewrite. Replace: {job_description}, {resume_text}
pub const OPTIMIZE_RESUME_TEMPLATE: &str = r#"### JOB DESCRIPTION:
{job_description}

### ORIGINAL RESUME:
{resume_text}

### INSTRUCTION:
Optimize this resume for ATS using strong power verbs, matching job language, and keeping all original sections intact.
Then provide a brief summary of changes.

### OPTIMIZED RESUME:"#;

/// Fills `{key}` placeholders in a single left-to-right pass.
/// Unknown placeholders and stray braces are copied through unchanged.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
