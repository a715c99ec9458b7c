pub mod assistant;
pub mod gemini;
pub mod keyword;
pub mod prompts;
pub mod traits;
pub mod types;

pub use assistant::{smart_search, PropertyAssistant};
pub use gemini::GeminiClient;
pub use keyword::KeywordMatcher;
pub use traits::{ModelClient, ModelRequest, SmartMatcher};
pub use types::{
    EnhanceDescriptionInput, EnhanceDescriptionOutput, GenerateTitleInput, GenerateTitleOutput,
    SmartSearchOutput,
};
