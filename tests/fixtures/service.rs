//! Sample annotated service.
//!
//! `service_gen.rs` is the module `apigen` generates from this file; the
//! golden test keeps the two in sync.

#![allow(dead_code)]

use apigen::runtime::{ApiError, RequestContext};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[path = "service_gen.rs"]
mod service_gen;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub full_name: String,
    pub status: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub id: u64,
}

fn status_code(status: &str) -> u8 {
    match status {
        "admin" => 20,
        "moderator" => 10,
        _ => 0,
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

pub struct MyApi {
    next_id: Mutex<u64>,
    users: Mutex<HashMap<String, User>>,
}

impl Default for MyApi {
    fn default() -> Self {
        let mut users = HashMap::new();
        users.insert(
            "rvasily".to_string(),
            User {
                id: 42,
                login: "rvasily".to_string(),
                full_name: "Vasily Romanov".to_string(),
                status: 20,
            },
        );
        Self {
            next_id: Mutex::new(43),
            users: Mutex::new(users),
        }
    }
}

#[derive(Debug, Default, apigen::ApiParams)]
pub struct ProfileParams {
    #[apivalidator("required")]
    login: String,
}

#[derive(Debug, Default, apigen::ApiParams)]
pub struct CreateParams {
    #[apivalidator("required,min=10")]
    login: String,
    #[apivalidator("paramname=full_name")]
    name: String,
    #[apivalidator("enum=user|moderator|admin,default=user")]
    status: String,
    #[apivalidator("min=0,max=128")]
    age: i32,
}

impl MyApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// apigen:api {"url": "/user/profile", "auth": false}
    pub fn profile(&self, params: ProfileParams) -> Result<User, ApiError> {
        if params.login == "bad_user" {
            return Err(ApiError::new("bad user"));
        }
        lock(&self.users)
            .get(&params.login)
            .cloned()
            .ok_or_else(|| ApiError::with_status(404, "user not exist"))
    }

    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, params: CreateParams) -> Result<NewUser, ApiError> {
        if params.login == "bad_username" {
            return Err(ApiError::new("bad user"));
        }
        let mut users = lock(&self.users);
        if users.contains_key(&params.login) {
            return Err(ApiError::with_status(
                409,
                format!("user {} exist", params.login),
            ));
        }
        let mut next_id = lock(&self.next_id);
        let id = *next_id;
        *next_id += 1;
        users.insert(
            params.login.clone(),
            User {
                id,
                login: params.login,
                full_name: params.name,
                status: status_code(&params.status),
            },
        );
        Ok(NewUser { id })
    }

    pub fn user_count(&self) -> usize {
        lock(&self.users).len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtherUser {
    pub id: u64,
    pub login: String,
    pub full_name: String,
    pub level: i32,
}

#[derive(Debug, Default, apigen::ApiParams)]
pub struct OtherCreateParams {
    #[apivalidator("required,min=3")]
    username: String,
    #[apivalidator = "paramname=account_name"]
    name: String,
    #[apivalidator("enum=warrior|sorcerer|rouge,default=warrior")]
    class: String,
    #[apivalidator("min=1,max=50")]
    level: i32,
}

#[derive(Debug, Default, apigen::ApiParams)]
pub struct PingParams {}

#[derive(Debug, Default, apigen::ApiParams)]
pub struct SearchParams {
    #[apivalidator("min=2,max=4")]
    code: String,
    #[apivalidator("min=1,max=10,default=3")]
    page: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub code: String,
    pub page: u8,
}

#[derive(Default)]
pub struct OtherApi;

impl OtherApi {
    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, params: OtherCreateParams) -> Result<OtherUser, anyhow::Error> {
        if params.username == "bad_username" {
            anyhow::bail!("bad user");
        }
        Ok(OtherUser {
            id: 12,
            login: params.username,
            full_name: params.name,
            level: params.level,
        })
    }

    /// apigen:api {"url": "/ping"}
    pub fn ping(&self, ctx: &RequestContext, _params: PingParams) -> Result<String, ApiError> {
        Ok(ctx.request_id.to_string())
    }

    /// apigen:api {"url": "/search"}
    pub fn search(&self, params: SearchParams) -> Result<SearchPage, ApiError> {
        Ok(SearchPage {
            code: params.code,
            page: params.page,
        })
    }
}
