use crate::domain::{Language, UploadClassification, VoiceClassification};

/// Longest explanation, in words, the model is asked to produce.
pub const MAX_EXPLANATION_WORDS: usize = 50;

const PERSONA: &str =
    "You are an expert forensic audio analyst specializing in synthetic speech detection.";

const SYNTHETIC_CUES: [&str; 4] = [
    "metallic or buzzy timbre",
    "spectral cutoffs or band-limited high frequencies",
    "missing breaths between phrases",
    "unnaturally even or robotic prosody",
];

const HUMAN_CUES: [&str; 3] = [
    "natural hesitations and disfluencies",
    "emotional nuance that follows the content",
    "background noise that stays consistent with the room",
];

/// Instructions for the `/api/voice-detection` contract.
pub fn voice_detection_prompt(language: Language) -> String {
    let mut prompt = String::new();
    prompt.push_str(PERSONA);
    prompt.push('\n');
    prompt.push_str(&format!(
        "The attached audio sample is spoken in {language}.\n\n"
    ));
    prompt.push_str(&format!(
        "Task:\n- Decide whether the voice is {} (synthetic) or {} (organic).\n",
        VoiceClassification::AiGenerated.as_str(),
        VoiceClassification::Human.as_str(),
    ));
    push_cues(&mut prompt);
    prompt.push_str("\nReturn ONLY a JSON object with these fields:\n");
    prompt.push_str(&format!("- language: \"{language}\"\n"));
    prompt.push_str(&format!(
        "- classification: \"{}\" or \"{}\"\n",
        VoiceClassification::AiGenerated.as_str(),
        VoiceClassification::Human.as_str(),
    ));
    prompt.push_str("- confidenceScore: a float between 0.0 and 1.0\n");
    prompt.push_str(&format!(
        "- explanation: a concise summary (max {MAX_EXPLANATION_WORDS} words)\n"
    ));
    prompt
}

/// Instructions for the `/analyze` contract. Without a hint the model is
/// asked to identify the language itself.
pub fn upload_analysis_prompt(language: Option<&str>) -> String {
    let mut prompt = String::new();
    prompt.push_str(PERSONA);
    prompt.push('\n');
    match language {
        Some(language) => prompt.push_str(&format!(
            "The attached audio sample is spoken in {language}.\n\n"
        )),
        None => prompt.push_str("The language of the attached audio sample is unknown.\n\n"),
    }
    prompt.push_str(&format!(
        "Task:\n- Decide whether the voice is {}, {} or {} when the evidence is inconclusive.\n",
        UploadClassification::AiGenerated.as_str(),
        UploadClassification::HumanGenerated.as_str(),
        UploadClassification::Uncertain.as_str(),
    ));
    if language.is_none() {
        prompt.push_str("- Identify the spoken language.\n");
    }
    push_cues(&mut prompt);
    prompt.push_str("\nReturn ONLY a JSON object with these fields:\n");
    match language {
        Some(language) => prompt.push_str(&format!("- detectedLanguage: \"{language}\"\n")),
        None => prompt.push_str("- detectedLanguage: the language you identified\n"),
    }
    prompt.push_str(&format!(
        "- classification: \"{}\", \"{}\" or \"{}\"\n",
        UploadClassification::AiGenerated.as_str(),
        UploadClassification::HumanGenerated.as_str(),
        UploadClassification::Uncertain.as_str(),
    ));
    prompt.push_str("- confidence: a number between 0 and 100\n");
    prompt.push_str(&format!(
        "- explanation: a concise summary (max {MAX_EXPLANATION_WORDS} words)\n"
    ));
    prompt.push_str("- artifacts: the specific cues you observed, most significant first\n");
    prompt
}

fn push_cues(prompt: &mut String) {
    prompt.push_str("- Check for synthetic artifacts:\n");
    for cue in SYNTHETIC_CUES {
        prompt.push_str(&format!("  * {cue}\n"));
    }
    prompt.push_str("- Look for human traits:\n");
    for cue in HUMAN_CUES {
        prompt.push_str(&format!("  * {cue}\n"));
    }
}
