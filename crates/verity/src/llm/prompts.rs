//! Prompt templates for field validation.

/// Build the field-validation instruction for a given field kind and value.
///
/// The model is asked for bare JSON with `result` and `explanation` keys;
/// [`super::extract_json`] tolerates fencing and prose anyway.
pub fn field_validation_prompt(field: &str, value: &str) -> String {
    format!(
        r#"Decide whether the following value is valid for the field '{}'.
Value: '{}'

Respond with a single JSON object and nothing else - no markdown fences,
no commentary:
{{
  "result": true or false,
  "explanation": "why the value is or is not valid for this field"
}}

Notes:
- Ignore letter case unless case is intrinsic to the field.
- Accept date layouts used anywhere in the world, including
  YYYY-MM-DD, MM/DD/YYYY, DD/MM/YYYY, YYYY/MM/DD, DD-MM-YYYY,
  YYYY.MM.DD, DD.MM.YYYY, YYYYMMDD, and YYYY-MM-DD HH:mm:ss.
- A string containing only 0s and 1s counts as binary.
- For phone numbers, accept international formats, not only US ones.
- For zip/postal codes, accept formats from any country."#,
        field, value
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_field_and_value() {
        let prompt = field_validation_prompt("email", "test@gmail.com");
        assert!(prompt.contains("'email'"));
        assert!(prompt.contains("'test@gmail.com'"));
        assert!(prompt.contains("\"result\""));
        assert!(prompt.contains("\"explanation\""));
    }
}
