use crate::structs::analysis::analysis_result::AnalysisResult;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub struct AnalysisLogger;

impl AnalysisLogger {

    pub fn print_analysis(result: &AnalysisResult) {
        println!("{}", Self::render(result));
    }

    pub fn render(result: &AnalysisResult) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n📄 Content type: {}\n", Self::or_unknown(&result.content_type)));
        out.push_str(RULE);
        out.push('\n');

        let pii = &result.pii_detected;
        if pii.has_pii {
            out.push_str(&format!("\n🔒 PII detected: {}\n", pii.types.join(", ")));
            for location in &pii.locations {
                out.push_str(&format!("   • {}\n", location));
            }
        } else {
            out.push_str("\n🔓 No sensitive PII detected\n");
        }

        let scores = &result.quality_scores;
        let feedback = &result.guardrails_feedback;
        out.push_str("\n📊 Quality scores\n");
        out.push_str(&format!("   Clarity  {:>2}/10  {}\n", scores.clarity, feedback.clarity_feedback));
        out.push_str(&format!("   Tone     {:>2}/10  {}\n", scores.tone, feedback.tone_feedback));
        out.push_str(&format!("   Grammar  {:>2}/10  {}\n", scores.grammar, feedback.grammar_feedback));
        out.push_str(&format!("   Overall  {:>2}/10\n", scores.overall));

        if !result.quality_feedback.is_empty() {
            out.push_str(&format!("\n💬 {}\n", result.quality_feedback));
        }

        if !result.improved_version.is_empty() {
            out.push_str("\n✨ Improved version\n");
            out.push_str(RULE);
            out.push('\n');
            out.push_str(&result.improved_version);
            out.push('\n');
            out.push_str(RULE);
            out.push('\n');
        }

        out
    }

    fn or_unknown(value: &str) -> &str {
        if value.is_empty() { "unknown" } else { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::analysis::pii_detection::PiiDetection;
    use crate::structs::analysis::quality_scores::QualityScores;

    #[test]
    fn render_lists_pii_types_and_locations() {
        let result = AnalysisResult {
            content_type: "personal_message".to_string(),
            pii_detected: PiiDetection {
                has_pii: true,
                types: vec!["phone_number".to_string()],
                locations: vec!["First sentence".to_string()],
            },
            quality_scores: QualityScores { clarity: 8, tone: 7, grammar: 9, overall: 8 },
            improved_version: "Please call me to discuss.".to_string(),
            ..AnalysisResult::default()
        };

        let rendered = AnalysisLogger::render(&result);
        assert!(rendered.contains("Content type: personal_message"));
        assert!(rendered.contains("PII detected: phone_number"));
        assert!(rendered.contains("• First sentence"));
        assert!(rendered.contains("Overall   8/10"));
        assert!(rendered.contains("Please call me to discuss."));
    }

    #[test]
    fn render_handles_empty_analysis() {
        let rendered = AnalysisLogger::render(&AnalysisResult::default());
        assert!(rendered.contains("Content type: unknown"));
        assert!(rendered.contains("No sensitive PII detected"));
        assert!(!rendered.contains("Improved version"));
    }
}
