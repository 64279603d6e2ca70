use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AdminCredential;
use crate::store::DataStore;

/// Plaintext credential check: linear scan, exact string equality.
pub fn login(admins: &[AdminCredential], username: &str, password: &str) -> bool {
    admins.iter().any(|a| a.matches(username, password))
}

/// Append a new credential and persist the list. Usernames are not required
/// to be unique.
pub fn add<S: DataStore>(
    admins: &mut Vec<AdminCredential>,
    store: &mut S,
    credential: AdminCredential,
) -> Result<CmdResult> {
    let username = credential.username.clone();
    admins.push(credential);
    store.save_admins(admins)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Admin added: {}", username)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn login_requires_exact_match() {
        let admins = vec![AdminCredential::new("admin", "admin")];
        assert!(login(&admins, "admin", "admin"));
        assert!(!login(&admins, "admin", "wrong"));
        assert!(!login(&admins, "ADMIN", "admin"));
    }

    #[test]
    fn add_appends_and_persists() {
        let mut admins = vec![AdminCredential::new("admin", "admin")];
        let mut store = InMemoryStore::new();

        add(&mut admins, &mut store, AdminCredential::new("bob", "pw")).unwrap();

        assert_eq!(admins.len(), 2);
        assert!(login(&admins, "bob", "pw"));
        assert_eq!(store.load_admins().unwrap().records.len(), 2);
    }

    #[test]
    fn duplicate_usernames_are_not_rejected() {
        let mut admins = vec![AdminCredential::new("admin", "admin")];
        let mut store = InMemoryStore::new();
        add(&mut admins, &mut store, AdminCredential::new("admin", "pw")).unwrap();
        assert_eq!(admins.len(), 2);
    }
}
