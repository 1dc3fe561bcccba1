/// An LLM provider the service can run the analysis with. The user brings
/// their own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provider {
    pub id: &'static str,
    pub name: &'static str,
    pub key_label: &'static str,
    pub key_url: &'static str,
    /// Environment variable the console reads the key from.
    pub key_env: &'static str,
    help_text: &'static str,
}

impl Provider {
    /// Where to get a key, e.g. `🔑 Get OpenAI API key: https://...`.
    pub fn help(&self) -> String {
        format!("🔑 {}: {}", self.help_text, self.key_url)
    }

    pub fn missing_key_message(&self) -> String {
        format!("Please enter your {} API key. {}", self.name, self.help())
    }
}

pub const PROVIDERS: &[Provider] = &[
    Provider {
        id: "gemini",
        name: "Gemini",
        key_label: "Gemini API Key *",
        key_url: "https://aistudio.google.com/app/apikey",
        key_env: "GEMINI_API_KEY",
        help_text: "Get free Gemini API key",
    },
    Provider {
        id: "openai",
        name: "OpenAI",
        key_label: "OpenAI API Key *",
        key_url: "https://platform.openai.com/api-keys",
        key_env: "OPENAI_API_KEY",
        help_text: "Get OpenAI API key",
    },
    Provider {
        id: "deepseek",
        name: "DeepSeek",
        key_label: "DeepSeek API Key *",
        key_url: "https://platform.deepseek.com/api_keys",
        key_env: "DEEPSEEK_API_KEY",
        help_text: "Get DeepSeek API key",
    },
];

pub fn default_provider() -> Provider {
    PROVIDERS[0]
}

pub fn find(id: &str) -> Option<Provider> {
    let id = id.trim().to_lowercase();
    PROVIDERS.iter().find(|p| p.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_gemini() {
        assert_eq!(default_provider().id, "gemini");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find("DeepSeek").map(|p| p.name), Some("DeepSeek"));
        assert_eq!(find("claude"), None);
    }

    #[test]
    fn missing_key_message_names_provider_and_link() {
        let msg = find("openai").unwrap().missing_key_message();
        assert_eq!(
            msg,
            "Please enter your OpenAI API key. 🔑 Get OpenAI API key: https://platform.openai.com/api-keys"
        );
    }
}
