use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub log_path: String,
    pub console_level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_path: "./logs".to_string(),
            console_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    Memory,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub provider: StorageProvider,
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProvider::File,
            path: "./data/local_storage.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoIdentityConfig {
    pub id: String,
    pub username: String,
    pub email: String,
    pub college_id: String,
}

impl Default for DemoIdentityConfig {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            username: "demo".to_string(),
            email: "demo@university.edu".to_string(),
            college_id: "STU123456".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub demo_username: String,
    pub demo_password: String,
    pub demo_identity: DemoIdentityConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_username: "demo".to_string(),
            demo_password: "password".to_string(),
            demo_identity: DemoIdentityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1_500,
            greeting: "Hello! I'm your AI academic assistant. Ask me anything about your studies, \
                programming concepts, or career advice!"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRuleConfig {
    pub keywords: Vec<String>,
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub default_response: String,
    pub rules: Vec<KeywordRuleConfig>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            default_response: "That's a great question! Based on your skills and academic background, \
                I'd recommend focusing on practical application of your knowledge through projects. \
                Building real-world applications will help solidify your understanding and make you \
                more attractive to employers. What specific topic would you like to explore further?"
                .to_string(),
            rules: default_rules(),
        }
    }
}

fn rule(keywords: &[&str], response: &str) -> KeywordRuleConfig {
    KeywordRuleConfig {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        response: response.to_string(),
    }
}

fn default_rules() -> Vec<KeywordRuleConfig> {
    vec![
        rule(
            &["javascript", "js"],
            "JavaScript is a versatile programming language! Here are some key concepts you should \
             focus on: Variables, Functions, Objects, Arrays, DOM manipulation, and Asynchronous \
             programming (Promises, async/await). Would you like me to explain any specific concept?",
        ),
        rule(
            &["react"],
            "React is a powerful library for building user interfaces! Key concepts include: \
             Components, JSX, Props, State, Hooks (useState, useEffect), and Component lifecycle. \
             I recommend practicing with small projects like a todo app or weather app.",
        ),
        rule(
            &["career", "job"],
            "For a successful tech career, focus on: 1) Building a strong portfolio with real \
             projects, 2) Contributing to open source, 3) Networking with professionals, 4) \
             Continuous learning, and 5) Preparing for technical interviews. What specific area \
             would you like guidance on?",
        ),
        rule(
            &["leetcode", "coding"],
            "For coding practice, I recommend starting with easy problems and gradually moving to \
             medium difficulty. Focus on these patterns: Arrays, Strings, Linked Lists, Trees, and \
             Dynamic Programming. Consistency is key - try to solve at least one problem daily!",
        ),
    ]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub chat: ChatConfig,
    pub assistant: AssistantConfig,
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
