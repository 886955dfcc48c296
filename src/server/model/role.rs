//! Role domain model and the closed role set.

use crate::model::account::RoleDto;

/// Role id of the administrator role.
pub const ROLE_ADMIN: i32 = 1;
/// Role id of the operator (contractor) role.
pub const ROLE_OPERATOR: i32 = 2;
/// Role id of the default unprivileged role.
pub const ROLE_BASIC: i32 = 3;

/// Resolves the role id granted at signup.
///
/// Requesting the elevated operator role yields `ROLE_OPERATOR`; otherwise the
/// default `ROLE_BASIC` is granted. The admin role is never granted at signup.
///
/// # Arguments
/// - `want_to_be_operator` - Whether the requester asked for the operator role
///
/// # Returns
/// - `i32` - Role id to embed in the pending registration
pub fn signup_role_id(want_to_be_operator: bool) -> i32 {
    if want_to_be_operator {
        ROLE_OPERATOR
    } else {
        ROLE_BASIC
    }
}

/// A privilege level from the closed role set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Internal role id.
    pub id: i32,
    /// Role name ("admin", "operator", "basic").
    pub name: String,
}

impl Role {
    /// Converts an entity model to a role domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Role` - The converted role domain model
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the role domain model to a DTO for API responses.
    ///
    /// The internal role id is not exposed.
    ///
    /// # Returns
    /// - `RoleDto` - The converted role DTO
    pub fn into_dto(self) -> RoleDto {
        RoleDto { name: self.name }
    }
}
