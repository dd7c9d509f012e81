//! DTO to contract model mappers

use super::dto::*;
use crate::contract::{NewUser, UpdateUser, User, UserListFilter};
use sitekit::{Problem, Role};
use std::str::FromStr;

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Problem;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name,
            email: req.email,
            password: req.password,
            role: parse_role(&req.role)?,
            active: req.active,
        })
    }
}

impl TryFrom<UpdateUserRequest> for UpdateUser {
    type Error = Problem;

    fn try_from(req: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name,
            email: req.email,
            role: parse_role(&req.role)?,
            active: req.active,
        })
    }
}

impl TryFrom<UserFilterQuery> for UserListFilter {
    type Error = Problem;

    fn try_from(query: UserFilterQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            role: query.role.as_deref().map(parse_role).transpose()?,
            active: query.active,
            search: query.search,
        })
    }
}

// Unknown role strings are a validation problem, not a parse panic
pub fn parse_role(value: &str) -> Result<Role, Problem> {
    Role::from_str(value).map_err(|e| Problem::invalid_field("role", e))
}
