use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Resolve the database URL for the given profile.
///
/// `Prod` reads `DATABASE_URL`; `Test` reads `TEST_DATABASE_URL` and
/// refuses to proceed unless the database name ends with `_test`, so a
/// destructive test run can never point at a real database.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("DATABASE_URL"),
        DbProfile::Test => {
            let url = must_var("TEST_DATABASE_URL")?;
            let db_name = url.rsplit('/').next().unwrap_or("");
            let db_name = db_name.split('?').next().unwrap_or(db_name);
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(url)
        }
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::Mutex;

    use super::{db_url, DbProfile};

    // Serialize tests that mutate the same env var
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_db_url_test_profile_enforces_suffix() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(
            "TEST_DATABASE_URL",
            "postgresql://u:p@localhost:5432/tourneyhub",
        );
        let result = db_url(DbProfile::Test);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("_test"));
        env::remove_var("TEST_DATABASE_URL");
    }

    #[test]
    fn test_db_url_test_profile_accepts_test_db() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(
            "TEST_DATABASE_URL",
            "postgresql://u:p@localhost:5432/tourneyhub_test",
        );
        let url = db_url(DbProfile::Test).unwrap();
        assert!(url.ends_with("/tourneyhub_test"));
        env::remove_var("TEST_DATABASE_URL");
    }

    #[test]
    fn test_db_url_test_profile_ignores_query_params() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(
            "TEST_DATABASE_URL",
            "postgresql://u:p@localhost:5432/tourneyhub_test?sslmode=disable",
        );
        assert!(db_url(DbProfile::Test).is_ok());
        env::remove_var("TEST_DATABASE_URL");
    }
}
