//! Identity fixtures

/// A user identity as the (external) store would hold it.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: String,
}

/// Standard registered user.
pub fn sample_user() -> TestUser {
    TestUser {
        id: 9001,
        name: "ada".to_string(),
        email: "ada@example.com".to_string(),
        role: "member".to_string(),
        password: "Str0ng!Pass_2024".to_string(),
    }
}

/// Administrator identity for role-propagation checks.
pub fn admin_user() -> TestUser {
    TestUser {
        id: 1,
        name: "root".to_string(),
        email: "root@example.com".to_string(),
        role: "admin".to_string(),
        password: "R00t!Admin_Pass#77".to_string(),
    }
}
