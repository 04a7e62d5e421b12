//! Prompt template for the feedback service

/// Fixed feedback prompt. Both texts are embedded verbatim; the service is
/// asked for four named sections so the output renders predictably.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub feedback: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            feedback: FEEDBACK_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
}

impl PromptTemplates {
    pub fn render_feedback(&self, params: &PromptParams) -> String {
        self.feedback
            .replace("{resume}", &params.resume_content)
            .replace("{job}", &params.job_content)
    }
}

const FEEDBACK_TEMPLATE: &str = r#"You are an expert career coach and resume analyst.
Analyze the following resume and job description and provide constructive feedback.

**Resume Text:**
{resume}

**Job Description Text:**
{job}

**Instructions:** Provide your analysis in Markdown format with sections for: '1. Overall Summary', '2. Strengths', '3. Actionable Suggestions for Improvement', and '4. Missing Keywords Analysis'."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_rendering() {
        let templates = PromptTemplates::default();
        let params = PromptParams {
            resume_content: "Software Engineer with Python experience at Tech Corp.".to_string(),
            job_content: "Senior Software Engineer role requiring React and Python.".to_string(),
        };

        let prompt = templates.render_feedback(&params);

        assert!(prompt.contains("Software Engineer with Python experience at Tech Corp"));
        assert!(prompt.contains("Senior Software Engineer role requiring React and Python"));
        assert!(!prompt.contains("{resume}"));
        assert!(!prompt.contains("{job}"));
    }

    #[test]
    fn test_required_sections_present() {
        let templates = PromptTemplates::default();

        assert!(templates.feedback.contains("1. Overall Summary"));
        assert!(templates.feedback.contains("2. Strengths"));
        assert!(templates
            .feedback
            .contains("3. Actionable Suggestions for Improvement"));
        assert!(templates.feedback.contains("4. Missing Keywords Analysis"));
    }
}
