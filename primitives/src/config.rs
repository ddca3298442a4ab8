use serde::{Deserialize, Serialize};
use slog::Level;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
/// The environment in which the application is running
/// Defaults to [`Environment::Development`]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// The minimum level of the records which get logged.
    pub fn log_level(&self) -> Level {
        match self {
            Environment::Development => Level::Debug,
            Environment::Production => Level::Info,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn environment() {
        let development = serde_json::from_value::<Environment>(json!("development"))
            .expect("Should deserialize");
        let production =
            serde_json::from_value::<Environment>(json!("production")).expect("Should deserialize");

        assert_eq!(Environment::Development, development);
        assert_eq!(Environment::Production, production);
        assert_eq!(Environment::Development, Environment::default());
        assert_eq!(Level::Info, production.log_level());
    }
}
