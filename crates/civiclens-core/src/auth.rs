//! Static account lookup.
//!
//! Two demo accounts stand in for an identity service.

use serde::{Deserialize, Serialize};

use crate::model::{Role, Viewer};

/// A signed-in user as echoed into the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    #[must_use]
    pub fn viewer(&self) -> Viewer {
        Viewer {
            role: self.role,
            department: self.department.clone(),
        }
    }

    /// Name when set, otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

impl From<&User> for Viewer {
    fn from(user: &User) -> Self {
        user.viewer()
    }
}

struct Account {
    email: &'static str,
    password: &'static str,
    role: Role,
    department: Option<&'static str>,
    name: &'static str,
}

const ACCOUNTS: [Account; 2] = [
    Account {
        email: "admin@civiclens.com",
        password: "admin123",
        role: Role::Admin,
        department: None,
        name: "Admin User",
    },
    Account {
        email: "dept@civiclens.com",
        password: "dept123",
        role: Role::DepartmentOfficer,
        department: Some("Sanitation Dept"),
        name: "Department Officer",
    },
];

/// Look up a demo account. Returns `None` when the credentials don't match.
#[must_use]
pub fn authenticate(email: &str, password: &str) -> Option<User> {
    ACCOUNTS
        .iter()
        .find(|account| account.email == email && account.password == password)
        .map(|account| User {
            email: account.email.to_string(),
            role: account.role,
            department: account.department.map(str::to_string),
            name: Some(account.name.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_login() {
        let user = authenticate("admin@civiclens.com", "admin123").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.department.is_none());
        assert_eq!(user.display_name(), "Admin User");
        assert!(user.viewer().is_admin());
    }

    #[test]
    fn test_officer_login_carries_department() {
        let user = authenticate("dept@civiclens.com", "dept123").unwrap();
        assert_eq!(user.role, Role::DepartmentOfficer);
        assert_eq!(
            Viewer::from(&user),
            Viewer::officer("Sanitation Dept")
        );
    }

    #[test]
    fn test_wrong_password_rejected() {
        assert!(authenticate("admin@civiclens.com", "dept123").is_none());
        assert!(authenticate("nobody@civiclens.com", "admin123").is_none());
    }

    #[test]
    fn test_user_serde_shape() {
        let user = authenticate("dept@civiclens.com", "dept123").unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"email":"dept@civiclens.com","role":"Department Officer","department":"Sanitation Dept","name":"Department Officer"}"#
        );
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
