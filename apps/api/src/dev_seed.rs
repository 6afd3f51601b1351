use concierge_core::AppResult;
use concierge_domain::{User, UserStatus};

const DEV_SEED_USERS: [(&str, &str, &str, UserStatus, Option<&str>); 4] = [
    (
        "U-1234",
        "Front Desk Lead",
        "frontdesk.lead@concierge.local",
        UserStatus::Active,
        Some("staff"),
    ),
    (
        "U-5678",
        "Purchasing Agent",
        "purchasing@concierge.local",
        UserStatus::Active,
        Some("staff"),
    ),
    (
        "U-9012",
        "Night Auditor",
        "night.audit@concierge.local",
        UserStatus::Active,
        None,
    ),
    (
        "U-3456",
        "Former Controller",
        "controller@concierge.local",
        UserStatus::Inactive,
        Some("admin"),
    ),
];

/// Users known to the directory in local development.
pub fn demo_users() -> AppResult<Vec<User>> {
    DEV_SEED_USERS
        .into_iter()
        .map(|(id, name, email, status, platform_role)| {
            User::new(id, name, email, status, platform_role.map(ToOwned::to_owned))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use concierge_domain::UserStatus;

    use super::demo_users;

    #[test]
    fn demo_users_include_scenario_user() {
        let users = demo_users().unwrap_or_else(|_| unreachable!());

        assert_eq!(users.len(), 4);
        assert!(users.iter().any(|user| user.id().as_str() == "U-1234"));
    }

    #[test]
    fn demo_users_carry_directory_details() {
        let users = demo_users().unwrap_or_else(|_| unreachable!());
        let controller = users
            .iter()
            .find(|user| user.id().as_str() == "U-3456")
            .unwrap_or_else(|| unreachable!());

        assert_eq!(controller.name(), "Former Controller");
        assert_eq!(controller.email().as_str(), "controller@concierge.local");
        assert_eq!(controller.status(), UserStatus::Inactive);
        assert_eq!(controller.platform_role(), Some("admin"));
    }
}
