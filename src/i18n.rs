use serde::{Deserialize, Serialize};

/// Languages the UI ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "fr")]
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::De, Language::Fr];

    /// Parse a stored language code. Unknown codes fall back to English,
    /// the universal fallback table.
    pub fn from_code(code: &str) -> Self {
        match code {
            "de" => Language::De,
            "fr" => Language::Fr,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

/// One translation table. Every key exists in every table by construction;
/// the completeness test below keeps the entries non-empty.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Messages {
    pub title: &'static str,
    pub opening: &'static str,
    pub hold_to_open: &'static str,
    pub settings: &'static str,
    pub settings_title: &'static str,
    pub language: &'static str,
    pub api_url: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub error: &'static str,
    pub fail: &'static str,
    pub fail_reason: &'static str,
    pub funny_success: &'static str,
    pub unknown: &'static str,
}

const EN: Messages = Messages {
    title: "Door Bob",
    opening: "Door Opening...",
    hold_to_open: "Hold to Open",
    settings: "⚙️ Settings",
    settings_title: "Settings",
    language: "Language",
    api_url: "API URL",
    cancel: "Cancel",
    save: "Save",
    error: "Error",
    fail: "Sorry, try again later...",
    fail_reason: "The door didn't respond. Maybe it's napping?",
    funny_success: "Door opened! 🥳 Don't let the cat out!",
    unknown: "Hmm, something unexpected happened.",
};

const DE: Messages = Messages {
    title: "Tür Bob",
    opening: "Tür öffnet...",
    hold_to_open: "Halten zum Öffnen",
    settings: "⚙️ Einstellungen",
    settings_title: "Einstellungen",
    language: "Sprache",
    api_url: "API-URL",
    cancel: "Abbrechen",
    save: "Speichern",
    error: "Fehler",
    fail: "Sorry, versuch es später nochmal...",
    fail_reason: "Die Tür hat nicht geantwortet. Vielleicht schläft sie?",
    funny_success: "Tür geöffnet! 🥳 Lass die Katze nicht raus!",
    unknown: "Hmm, etwas Unerwartetes ist passiert.",
};

const FR: Messages = Messages {
    title: "Porte Bob",
    opening: "Ouverture de la porte...",
    hold_to_open: "Maintenir pour ouvrir",
    settings: "⚙️ Paramètres",
    settings_title: "Paramètres",
    language: "Langue",
    api_url: "URL de l'API",
    cancel: "Annuler",
    save: "Enregistrer",
    error: "Erreur",
    fail: "Désolé, réessayez plus tard...",
    fail_reason: "La porte n'a pas répondu. Elle fait peut-être la sieste ?",
    funny_success: "Porte ouverte ! 🥳 Ne laisse pas sortir le chat !",
    unknown: "Hmm, quelque chose d'inattendu s'est produit.",
};

pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::En => &EN,
        Language::De => &DE,
        Language::Fr => &FR,
    }
}

#[cfg(test)]
#[path = "tests/i18n_tests.rs"]
mod tests;
