//! Prompt construction for the three generation operations.
//!
//! Prompts are plain strings assembled from session state; the wire envelope
//! around them lives in [`super::protocol`].

use vyasa_core::{Myth, MythLength, MythOptions, Tone};

/// Prompt for generating a new myth in JSON mode.
pub fn myth_prompt(options: &MythOptions) -> String {
    let length = match options.length {
        MythLength::Short => "A concise short story",
        MythLength::Full => "A more detailed, full myth",
    };
    format!(
        "Generate a mini-myth in the style of the Indian Puranas.\n\
         - Theme/Moral: {}\n\
         - Length: {}\n\
         - Tone: {}\n\
         The myth should feature characters like deities, asuras, rishis, and mortals, \
         and involve cosmic symbolism. Provide a title, a list of characters, the plot, \
         and an explanation of the symbolism.",
        options.theme, length, options.tone
    )
}

/// Prompt for the myth illustration.
pub fn illustration_prompt(options: &MythOptions) -> String {
    format!(
        "An epic, divine illustration in the style of Indian Puranic art, evoking a sense \
         of ancient mythology. The scene is about the concept of \"{}\". The style is {}.",
        options.theme, options.tone
    )
}

/// Prompt for expanding an existing myth into a detailed legend.
pub fn expansion_prompt(myth: &Myth, tone: Tone) -> String {
    let characters = myth
        .characters
        .iter()
        .map(|c| format!("{} ({})", c.name, c.role))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are a master storyteller in the tradition of the Puranas. Take the following \
         plot summary and characters and expand it into a detailed, multi-paragraph legend.\n\
         Maintain a {} tone. Embellish the narrative with rich descriptions, dialogues, and \
         divine interventions.\n\n\
         Title: {}\n\
         Characters: {}\n\
         Plot Summary to Expand: {}",
        tone, myth.title, characters, myth.plot
    )
}

/// Narration instruction prepended to the text handed to the speech model.
pub fn narration_prompt(text: &str) -> String {
    format!(
        "Narrate the following text in a clear, resonant, and epic storytelling voice.\n\n{}",
        text
    )
}

/// Response schema the myth generation request constrains the model to.
pub fn myth_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "An epic title for the myth."
            },
            "characters": {
                "type": "ARRAY",
                "description": "A list of key characters in the myth.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "The character's name."
                        },
                        "role": {
                            "type": "STRING",
                            "description": "The character's role (e.g., Hero, Deity, Asura, Apsara)."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A brief description of the character."
                        }
                    },
                    "required": ["name", "role", "description"]
                }
            },
            "plot": {
                "type": "STRING",
                "description": "A summary of the myth's plot. Should be a single paragraph for 'short' length or multiple paragraphs for 'full' length."
            },
            "symbolism": {
                "type": "STRING",
                "description": "An explanation of the symbolic meanings of key elements, characters, or events in the myth."
            }
        },
        "required": ["title", "characters", "plot", "symbolism"]
    })
}
