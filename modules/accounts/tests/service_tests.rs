//! Integration tests for the accounts service

use accounts::contract::*;
use accounts::domain::{NoOpEventPublisher, Service};
use sitekit::Role;
use std::sync::Arc;
use uuid::Uuid;

fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

// Mock repository implementation for testing
pub mod mocks {
    use super::*;
    use accounts::domain::repository::{Credential, UserRepository};
    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::RwLock;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    pub struct MockUserRepo {
        data: Arc<RwLock<HashMap<Uuid, (User, String)>>>,
    }

    impl MockUserRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn stored_hash(&self, id: Uuid) -> Option<String> {
            self.data.read().get(&id).map(|(_, hash)| hash.clone())
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepo {
        async fn insert(&self, user: &User, password_hash: &str) -> anyhow::Result<User> {
            self.data
                .write()
                .insert(user.id, (user.clone(), password_hash.to_string()));
            Ok(user.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
            Ok(self
                .data
                .read()
                .get(&id)
                .map(|(user, _)| user.clone())
                .filter(|u| u.deleted_at.is_none()))
        }

        async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Credential>> {
            let probe = email.to_lowercase();
            Ok(self
                .data
                .read()
                .values()
                .filter(|(user, _)| user.deleted_at.is_none())
                .find(|(user, _)| user.email.to_lowercase() == probe)
                .map(|(user, hash)| Credential {
                    user: user.clone(),
                    password_hash: hash.clone(),
                }))
        }

        async fn list(
            &self,
            filter: &UserListFilter,
            limit: u64,
            offset: u64,
        ) -> anyhow::Result<(Vec<User>, u64)> {
            let mut matches: Vec<User> = self
                .data
                .read()
                .values()
                .map(|(user, _)| user.clone())
                .filter(|u| u.deleted_at.is_none())
                .filter(|u| match filter.role {
                    Some(role) => u.role == role,
                    None => true,
                })
                .filter(|u| match filter.active {
                    Some(active) => u.active == active,
                    None => true,
                })
                .filter(|u| match &filter.search {
                    Some(term) => {
                        let term = term.to_lowercase();
                        u.name.to_lowercase().contains(&term)
                            || u.email.to_lowercase().contains(&term)
                    }
                    None => true,
                })
                .collect();
            matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            let total = matches.len() as u64;
            let items = matches
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect();
            Ok((items, total))
        }

        async fn update(&self, user: &User) -> anyhow::Result<User> {
            let mut data = self.data.write();
            let hash = data
                .get(&user.id)
                .map(|(_, hash)| hash.clone())
                .unwrap_or_default();
            data.insert(user.id, (user.clone(), hash));
            Ok(user.clone())
        }

        async fn set_password(&self, id: Uuid, password_hash: &str) -> anyhow::Result<()> {
            if let Some(entry) = self.data.write().get_mut(&id) {
                entry.1 = password_hash.to_string();
            }
            Ok(())
        }

        async fn soft_delete(&self, id: Uuid) -> anyhow::Result<()> {
            if let Some(entry) = self.data.write().get_mut(&id) {
                entry.0.deleted_at = Some(Utc::now());
            }
            Ok(())
        }
    }
}

struct TestContext {
    service: Service,
    users: Arc<mocks::MockUserRepo>,
}

fn create_test_context() -> TestContext {
    let users = Arc::new(mocks::MockUserRepo::new());
    let service = Service::new(users.clone(), Arc::new(NoOpEventPublisher));
    TestContext { service, users }
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: "a sound passphrase".to_string(),
        role: Role::Technician,
        active: true,
    }
}

#[tokio::test]
async fn test_create_user_round_trip() {
    print_test_header(
        "test_create_user_round_trip",
        &[
            "Created users come back with their fields, and the stored",
            "hash is a salted digest rather than the password itself",
        ],
    );

    let ctx = create_test_context();
    let user = ctx
        .service
        .create_user(new_user("Dana Ivers", "dana@example.com"))
        .await
        .expect("create");

    assert_eq!(user.name, "Dana Ivers");
    assert_eq!(user.email, "dana@example.com");
    assert_eq!(user.role, Role::Technician);
    assert!(user.active);

    let fetched = ctx.service.get_user(user.id).await.expect("get");
    assert_eq!(fetched.id, user.id);

    let stored = ctx.users.stored_hash(user.id).expect("hash stored");
    assert!(stored.starts_with("s2$"));
    assert_ne!(stored, "a sound passphrase");
}

#[tokio::test]
async fn test_create_validates_fields() {
    print_test_header(
        "test_create_validates_fields",
        &["Blank names, malformed emails and short passwords are refused"],
    );

    let ctx = create_test_context();

    let err = ctx
        .service
        .create_user(NewUser {
            name: "   ".to_string(),
            ..new_user("x", "dana@example.com")
        })
        .await
        .unwrap_err();
    match err {
        AccountsError::Validation { field, .. } => assert_eq!(field, "name"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    let err = ctx
        .service
        .create_user(new_user("Dana Ivers", "not-an-email"))
        .await
        .unwrap_err();
    match err {
        AccountsError::Validation { field, .. } => assert_eq!(field, "email"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    let err = ctx
        .service
        .create_user(NewUser {
            password: "short".to_string(),
            ..new_user("Dana Ivers", "dana@example.com")
        })
        .await
        .unwrap_err();
    match err {
        AccountsError::Validation { field, .. } => assert_eq!(field, "password"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_email_uniqueness_is_case_insensitive() {
    print_test_header(
        "test_email_uniqueness_is_case_insensitive",
        &[
            "A second user cannot take an email that differs only in case;",
            "updates may keep their own email",
        ],
    );

    let ctx = create_test_context();
    let user = ctx
        .service
        .create_user(new_user("Dana Ivers", "Dana@Example.com"))
        .await
        .expect("create");

    println!("📝 Stage 1: The same email in another case is taken");
    let err = ctx
        .service
        .create_user(new_user("Impostor", "dana@example.com"))
        .await
        .unwrap_err();
    match err {
        AccountsError::Validation { field, message } => {
            assert_eq!(field, "email");
            assert!(message.contains("taken"), "unexpected message: {message}");
        }
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    println!("📝 Stage 2: An update keeping its own email passes");
    let updated = ctx
        .service
        .update_user(
            user.id,
            UpdateUser {
                name: "Dana Ivers".to_string(),
                email: "Dana@Example.com".to_string(),
                role: Role::Admin,
                active: true,
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.role, Role::Admin);
}

#[tokio::test]
async fn test_authenticate() {
    print_test_header(
        "test_authenticate",
        &[
            "Login succeeds only with the right password on an active",
            "account; every refusal looks identical",
        ],
    );

    let ctx = create_test_context();
    let user = ctx
        .service
        .create_user(new_user("Dana Ivers", "dana@example.com"))
        .await
        .expect("create");

    println!("📝 Stage 1: The right password signs in, case-blind on email");
    let signed_in = ctx
        .service
        .authenticate("DANA@EXAMPLE.COM", "a sound passphrase")
        .await
        .expect("authenticate");
    assert_eq!(signed_in.id, user.id);

    println!("📝 Stage 2: Wrong password and unknown email are refused alike");
    let err = ctx
        .service
        .authenticate("dana@example.com", "a wrong passphrase")
        .await
        .unwrap_err();
    match err {
        AccountsError::InvalidCredentials => {}
        e => panic!("Expected InvalidCredentials error, got: {e:?}"),
    }
    let err = ctx
        .service
        .authenticate("nobody@example.com", "a sound passphrase")
        .await
        .unwrap_err();
    match err {
        AccountsError::InvalidCredentials => {}
        e => panic!("Expected InvalidCredentials error, got: {e:?}"),
    }

    println!("📝 Stage 3: A deactivated account is refused the same way");
    ctx.service
        .update_user(
            user.id,
            UpdateUser {
                name: user.name.clone(),
                email: user.email.clone(),
                role: user.role,
                active: false,
            },
        )
        .await
        .expect("deactivate");
    let err = ctx
        .service
        .authenticate("dana@example.com", "a sound passphrase")
        .await
        .unwrap_err();
    match err {
        AccountsError::InvalidCredentials => {}
        e => panic!("Expected InvalidCredentials error, got: {e:?}"),
    }
}

#[tokio::test]
async fn test_soft_deleted_user_cannot_sign_in_but_frees_email() {
    print_test_header(
        "test_soft_deleted_user_cannot_sign_in_but_frees_email",
        &["Deleting a user ends their sign-in and releases the email"],
    );

    let ctx = create_test_context();
    let user = ctx
        .service
        .create_user(new_user("Dana Ivers", "dana@example.com"))
        .await
        .expect("create");

    ctx.service.delete_user(user.id).await.expect("delete");

    let err = ctx
        .service
        .authenticate("dana@example.com", "a sound passphrase")
        .await
        .unwrap_err();
    match err {
        AccountsError::InvalidCredentials => {}
        e => panic!("Expected InvalidCredentials error, got: {e:?}"),
    }

    let replacement = ctx
        .service
        .create_user(new_user("New Dana", "dana@example.com"))
        .await
        .expect("email is free again");
    assert_ne!(replacement.id, user.id);
}

#[tokio::test]
async fn test_update_leaves_the_password_alone() {
    print_test_header(
        "test_update_leaves_the_password_alone",
        &["Profile updates never touch the stored password hash"],
    );

    let ctx = create_test_context();
    let user = ctx
        .service
        .create_user(new_user("Dana Ivers", "dana@example.com"))
        .await
        .expect("create");
    let hash_before = ctx.users.stored_hash(user.id).expect("hash");

    ctx.service
        .update_user(
            user.id,
            UpdateUser {
                name: "Dana I. Rivers".to_string(),
                email: "dana.rivers@example.com".to_string(),
                role: Role::Viewer,
                active: true,
            },
        )
        .await
        .expect("update");

    assert_eq!(ctx.users.stored_hash(user.id).expect("hash"), hash_before);
    ctx.service
        .authenticate("dana.rivers@example.com", "a sound passphrase")
        .await
        .expect("old password still signs in");
}

#[tokio::test]
async fn test_set_password() {
    print_test_header(
        "test_set_password",
        &["A changed password replaces the old one immediately"],
    );

    let ctx = create_test_context();
    let user = ctx
        .service
        .create_user(new_user("Dana Ivers", "dana@example.com"))
        .await
        .expect("create");

    println!("📝 Stage 1: Short replacements are refused");
    let err = ctx.service.set_password(user.id, "short").await.unwrap_err();
    match err {
        AccountsError::Validation { field, .. } => assert_eq!(field, "password"),
        e => panic!("Expected Validation error, got: {e:?}"),
    }

    println!("📝 Stage 2: A sound replacement takes effect");
    ctx.service
        .set_password(user.id, "a fresher passphrase")
        .await
        .expect("set password");

    let err = ctx
        .service
        .authenticate("dana@example.com", "a sound passphrase")
        .await
        .unwrap_err();
    match err {
        AccountsError::InvalidCredentials => {}
        e => panic!("Expected InvalidCredentials error, got: {e:?}"),
    }
    ctx.service
        .authenticate("dana@example.com", "a fresher passphrase")
        .await
        .expect("new password signs in");
}

#[tokio::test]
async fn test_list_users_filters() {
    print_test_header(
        "test_list_users_filters",
        &["Role, active flag and free-text search each narrow the list"],
    );

    let ctx = create_test_context();
    let admin = ctx
        .service
        .create_user(NewUser {
            role: Role::Admin,
            ..new_user("Site Admin", "admin@example.com")
        })
        .await
        .expect("create");
    let technician = ctx
        .service
        .create_user(new_user("Dana Ivers", "dana@example.com"))
        .await
        .expect("create");
    let parked = ctx
        .service
        .create_user(NewUser {
            active: false,
            role: Role::Viewer,
            ..new_user("Former Contractor", "contractor@example.com")
        })
        .await
        .expect("create");

    let (admins, total) = ctx
        .service
        .list_users(
            UserListFilter {
                role: Some(Role::Admin),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(total, 1);
    assert_eq!(admins[0].id, admin.id);

    let (inactive, _) = ctx
        .service
        .list_users(
            UserListFilter {
                active: Some(false),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].id, parked.id);

    let (found, _) = ctx
        .service
        .list_users(
            UserListFilter {
                search: Some("DANA".to_string()),
                ..Default::default()
            },
            50,
            0,
        )
        .await
        .expect("list");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, technician.id);
}

#[tokio::test]
async fn test_get_and_exists_resolve_inactive_users() {
    print_test_header(
        "test_get_and_exists_resolve_inactive_users",
        &[
            "Deactivated users still resolve for history references;",
            "unknown ids answer not-found",
        ],
    );

    let ctx = create_test_context();
    let parked = ctx
        .service
        .create_user(NewUser {
            active: false,
            ..new_user("Former Contractor", "contractor@example.com")
        })
        .await
        .expect("create");

    assert!(ctx.service.user_exists(parked.id).await.expect("exists"));
    let fetched = ctx.service.get_user(parked.id).await.expect("get");
    assert!(!fetched.active);

    assert!(!ctx.service.user_exists(Uuid::new_v4()).await.expect("exists"));
    let err = ctx.service.get_user(Uuid::new_v4()).await.unwrap_err();
    match err {
        AccountsError::NotFound { resource, .. } => assert_eq!(resource, "user"),
        e => panic!("Expected NotFound error, got: {e:?}"),
    }
}
