pub mod auth;
pub mod author_resolver;
pub mod classifier;
pub mod prompt;
pub mod session_store;

pub use auth::{AuthState, AuthenticationFlow, Credentials};
pub use author_resolver::{disambiguate, Answer, AuthorResolver};
pub use classifier::{MalformedEntry, MalformedReport, ReferenceClassifier};
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};
pub use session_store::SessionStore;
