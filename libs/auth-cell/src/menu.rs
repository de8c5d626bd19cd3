use shared_models::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub text: &'static str,
    pub path: &'static str,
}

const MENU_ITEMS: &[NavItem] = &[
    NavItem {
        text: "Patients",
        path: "/patients",
    },
    NavItem {
        text: "Dentists",
        path: "/dentists",
    },
    NavItem {
        text: "Appointments",
        path: "/appointments",
    },
    NavItem {
        text: "Bills",
        path: "/bills",
    },
    NavItem {
        text: "Treatments",
        path: "/treatments",
    },
    NavItem {
        text: "Prescriptions",
        path: "/prescriptions",
    },
    NavItem {
        text: "Finance",
        path: "/finance",
    },
    NavItem {
        text: "Insurance",
        path: "/insurance",
    },
    NavItem {
        text: "User Management",
        path: "/users",
    },
];

/// Role-based menu filtering: administrators see everything, everyone else
/// loses the User Management entry. Presentation-level only - the backend
/// owns real authorization.
pub fn nav_items(role: Role) -> Vec<NavItem> {
    if role == Role::Administrator {
        return MENU_ITEMS.to_vec();
    }
    MENU_ITEMS
        .iter()
        .copied()
        .filter(|item| item.path != "/users")
        .collect()
}
