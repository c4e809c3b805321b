pub const TEXT_PLACEHOLDER: &str = "{text}";

pub const ANALYSIS_PROMPT: &str = r#"Analyze the following text and provide a structured analysis in JSON format.

Text to analyze:
<text>
{text}
</text>

Provide your analysis as a JSON object with these fields:
1. "content_type": Classify the content (e.g., "email", "article", "social_media_post", "technical_documentation", "marketing_copy", "personal_message", "formal_letter", "creative_writing", "resume", "other")
2. "pii_detected": An object containing:
   - "has_pii": boolean indicating if SENSITIVE PII was found
   - "types": array of PII types found
   - "locations": array of brief descriptions of where PII appears (do not include the actual PII values)

   IMPORTANT - Only flag these as PII:
   - Social Security Numbers (SSN)
   - Credit card numbers
   - Bank account numbers
   - Full home addresses (street address with city/state/zip)
   - Phone numbers

   DO NOT flag these as PII (they are normal professional information):
   - First names or last names alone
   - Company names or employer names
   - Job titles or professional roles
   - Professional/work email addresses
   - LinkedIn URLs or professional profiles
   - Dates of employment

3. "quality_scores": An object with scores from 1-10 for:
   - "clarity": How clear and understandable the text is
   - "tone": How appropriate and consistent the tone is
   - "grammar": Grammatical correctness
   - "overall": Overall quality score
4. "guardrails_feedback": An object with brief, specific feedback (max 6 words each) explaining WHY each score was given:
   - "grammar_feedback": Specific grammar issues found (e.g., "Missing apostrophes and commas", "Run-on sentences throughout", "No issues detected")
   - "tone_feedback": Specific tone observations (e.g., "Too casual for business context", "Overly formal for audience", "Appropriate and professional")
   - "clarity_feedback": Specific clarity issues (e.g., "Vague claims lack specifics", "Well-structured and focused", "Rambling without clear point")
5. "quality_feedback": Brief explanation of the scores and areas for improvement
6. "improved_version": A rewritten version of the text with improvements to clarity, tone, and grammar while preserving the original meaning and intent

Respond ONLY with the JSON object, no additional text."#;
