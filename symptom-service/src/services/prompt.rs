//! Prompt sent to the generator for every check.
//!
//! The response keys requested here are the ones the extractor and the
//! outbound translator expect; keep them in sync with `models::assessment`.

/// Render the assessment prompt for one patient.
///
/// Every line is indented by four spaces and blank lines keep that
/// indentation, so the text sent to the model is stable byte for byte.
pub fn build_prompt(age: &str, gender: &str, symptoms: &str) -> String {
    format!(
        concat!(
            "\n",
            "    Act as a medical assistant providing initial assessment. This is NOT a substitute for professional medical advice.\n",
            "    \n",
            "    Patient details:\n",
            "    - Age: {age}\n",
            "    - Gender: {gender}\n",
            "    - Symptoms: {symptoms}\n",
            "    \n",
            "    Please provide:\n",
            "    1. A brief assessment of possible conditions\n",
            "    2. Severity level (Low, Medium, High)\n",
            "    3. Recommended next steps (home care, consult doctor, emergency)\n",
            "    4. General care suggestions\n",
            "    \n",
            "    Format the response as JSON with keys: \"possible_conditions\", \"severity\", \"next_steps\", \"care_suggestions\", and \"disclaimer\".\n",
            "    "
        ),
        age = age,
        gender = gender,
        symptoms = symptoms,
    )
}
