/// Capability the login route checks credentials against. Kept behind a
/// trait so the static pair can later be swapped for a real credential
/// store without touching the handlers.
pub trait CredentialCheck: Send + Sync {
    fn validate(&self, username: &str, password: &str) -> bool;
}

/// Fixed username/password pair, compared verbatim.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: &str, password: &str) -> StaticCredentials {
        StaticCredentials {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> StaticCredentials {
        StaticCredentials::new("gidro", "gidro")
    }
}

impl CredentialCheck for StaticCredentials {
    fn validate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_pair_passes() {
        let creds = StaticCredentials::default();
        assert!(creds.validate("gidro", "gidro"));
        assert!(!creds.validate("gidro", "wrong"));
        assert!(!creds.validate("", ""));
        assert!(!creds.validate("Gidro", "Gidro"));
        assert!(!creds.validate("gidro ", "gidro"));
    }
}
