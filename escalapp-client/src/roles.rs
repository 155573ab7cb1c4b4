use std::collections::HashSet;

use crate::models::user::User;

/// Role that grants access to every guarded route, regardless of business.
pub const SUPER_ADMIN_ROLE: &str = "SUPER ADMINISTRADOR";

/// Flattens a user's role assignments into the set of role descriptions held:
/// the union of global roles and every role across every business membership.
///
/// Descriptions are compared verbatim. Two differently-phrased descriptions
/// of the same role will not match; see DESIGN.md.
pub fn role_names(user: &User) -> HashSet<String> {
    user.global_roles
        .iter()
        .map(|role| role.description.clone())
        .chain(
            user.businesses
                .iter()
                .flat_map(|business| business.roles.iter().map(|role| role.description.clone())),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{UserBusiness, UserRole};

    fn user(global: &[&str], per_business: &[&[&str]]) -> User {
        User {
            id: 1,
            first_name: "Ana".to_string(),
            middle_name: None,
            last_name: "López".to_string(),
            second_last_name: None,
            email: "ana@example.com".to_string(),
            businesses: per_business
                .iter()
                .enumerate()
                .map(|(i, roles)| UserBusiness {
                    id: i as i64 + 1,
                    name: format!("negocio-{}", i + 1),
                    roles: roles
                        .iter()
                        .enumerate()
                        .map(|(j, description)| UserRole {
                            id: j as i64 + 1,
                            description: (*description).to_string(),
                        })
                        .collect(),
                })
                .collect(),
            global_roles: global
                .iter()
                .enumerate()
                .map(|(j, description)| UserRole {
                    id: 100 + j as i64,
                    description: (*description).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn unions_global_and_business_roles() {
        let names = role_names(&user(
            &["SUPER ADMINISTRADOR"],
            &[&["CAJERO RESTAURANTE"], &["BARBERO"]],
        ));

        assert_eq!(names.len(), 3);
        assert!(names.contains("SUPER ADMINISTRADOR"));
        assert!(names.contains("CAJERO RESTAURANTE"));
        assert!(names.contains("BARBERO"));
    }

    #[test]
    fn duplicate_descriptions_collapse() {
        let names = role_names(&user(&[], &[&["CAJERO RESTAURANTE"], &["CAJERO RESTAURANTE"]]));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn no_roles_yields_empty_set() {
        assert!(role_names(&user(&[], &[])).is_empty());
    }
}
