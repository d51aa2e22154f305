// Code generated by apigen from service.rs. DO NOT EDIT.

#[allow(unused_imports)]
use super::*;
#[allow(unused_imports)]
use apigen::runtime::{ApiRequest, ApiResponse, Bind, BindError, Service};

impl Bind for ProfileParams {
    fn bind(&mut self, req: &ApiRequest) -> Result<(), BindError> {
        // login
        self.login = req.param("login").to_owned();
        if self.login.is_empty() {
            return Err(BindError::new("login must be not empty"));
        }
        Ok(())
    }
}

impl Bind for CreateParams {
    fn bind(&mut self, req: &ApiRequest) -> Result<(), BindError> {
        // login
        self.login = req.param("login").to_owned();
        if self.login.is_empty() {
            return Err(BindError::new("login must be not empty"));
        }
        if self.login.chars().count() < 10 {
            return Err(BindError::new("login len must be >= 10"));
        }
        // name
        self.name = req.param("full_name").to_owned();
        // status
        self.status = req.param("status").to_owned();
        if !matches!(self.status.as_str(), "user" | "moderator" | "admin" | "") {
            return Err(BindError::new("status must be one of [user, moderator, admin]"));
        }
        if self.status.is_empty() {
            self.status = "user".to_owned();
        }
        // age
        self.age = req
            .param("age")
            .parse::<i32>()
            .map_err(|_| BindError::new("age must be int"))?;
        if self.age > 128 {
            return Err(BindError::new("age must be <= 128"));
        }
        if self.age < 0 {
            return Err(BindError::new("age must be >= 0"));
        }
        Ok(())
    }
}

impl MyApi {
    pub fn profile_handler(&self, req: &ApiRequest) -> ApiResponse {
        let mut params = ProfileParams::default();
        if let Err(err) = params.bind(req) {
            return ApiResponse::error(400, err.to_string());
        }
        match self.profile(params) {
            Ok(result) => ApiResponse::success(&result),
            Err(err) => ApiResponse::failure(&err),
        }
    }
}

impl MyApi {
    pub fn create_handler(&self, req: &ApiRequest) -> ApiResponse {
        if req.header("X-Auth") != "100500" {
            return ApiResponse::error(403, "unauthorized");
        }
        if req.method().as_str() != "POST" {
            return ApiResponse::error(406, "bad method");
        }
        let mut params = CreateParams::default();
        if let Err(err) = params.bind(req) {
            return ApiResponse::error(400, err.to_string());
        }
        match self.create(params) {
            Ok(result) => ApiResponse::success(&result),
            Err(err) => ApiResponse::failure(&err),
        }
    }
}

impl Bind for OtherCreateParams {
    fn bind(&mut self, req: &ApiRequest) -> Result<(), BindError> {
        // username
        self.username = req.param("username").to_owned();
        if self.username.is_empty() {
            return Err(BindError::new("username must be not empty"));
        }
        if self.username.chars().count() < 3 {
            return Err(BindError::new("username len must be >= 3"));
        }
        // name
        self.name = req.param("account_name").to_owned();
        // class
        self.class = req.param("class").to_owned();
        if !matches!(self.class.as_str(), "warrior" | "sorcerer" | "rouge" | "") {
            return Err(BindError::new("class must be one of [warrior, sorcerer, rouge]"));
        }
        if self.class.is_empty() {
            self.class = "warrior".to_owned();
        }
        // level
        self.level = req
            .param("level")
            .parse::<i32>()
            .map_err(|_| BindError::new("level must be int"))?;
        if self.level > 50 {
            return Err(BindError::new("level must be <= 50"));
        }
        if self.level < 1 {
            return Err(BindError::new("level must be >= 1"));
        }
        Ok(())
    }
}

impl Bind for PingParams {
    fn bind(&mut self, _req: &ApiRequest) -> Result<(), BindError> {
        Ok(())
    }
}

impl Bind for SearchParams {
    fn bind(&mut self, req: &ApiRequest) -> Result<(), BindError> {
        // code
        self.code = req.param("code").to_owned();
        if self.code.chars().count() > 4 {
            return Err(BindError::new("code len must be <= 4"));
        }
        if self.code.chars().count() < 2 {
            return Err(BindError::new("code len must be >= 2"));
        }
        // page
        self.page = req
            .param_or("page", "3")
            .parse::<u8>()
            .map_err(|_| BindError::new("page must be int"))?;
        if self.page > 10 {
            return Err(BindError::new("page must be <= 10"));
        }
        if self.page < 1 {
            return Err(BindError::new("page must be >= 1"));
        }
        Ok(())
    }
}

impl OtherApi {
    pub fn create_handler(&self, req: &ApiRequest) -> ApiResponse {
        if req.header("X-Auth") != "100500" {
            return ApiResponse::error(403, "unauthorized");
        }
        if req.method().as_str() != "POST" {
            return ApiResponse::error(406, "bad method");
        }
        let mut params = OtherCreateParams::default();
        if let Err(err) = params.bind(req) {
            return ApiResponse::error(400, err.to_string());
        }
        match self.create(params) {
            Ok(result) => ApiResponse::success(&result),
            Err(err) => ApiResponse::failure(&err),
        }
    }
}

impl OtherApi {
    pub fn ping_handler(&self, req: &ApiRequest) -> ApiResponse {
        let mut params = PingParams::default();
        if let Err(err) = params.bind(req) {
            return ApiResponse::error(400, err.to_string());
        }
        match self.ping(req.context(), params) {
            Ok(result) => ApiResponse::success(&result),
            Err(err) => ApiResponse::failure(&err),
        }
    }
}

impl OtherApi {
    pub fn search_handler(&self, req: &ApiRequest) -> ApiResponse {
        let mut params = SearchParams::default();
        if let Err(err) = params.bind(req) {
            return ApiResponse::error(400, err.to_string());
        }
        match self.search(params) {
            Ok(result) => ApiResponse::success(&result),
            Err(err) => ApiResponse::failure(&err),
        }
    }
}

impl Service for MyApi {
    fn serve(&self, req: &ApiRequest) -> ApiResponse {
        match req.path() {
            "/user/profile" => self.profile_handler(req),
            "/user/create" => self.create_handler(req),
            _ => ApiResponse::error(404, "unknown method"),
        }
    }
}

impl Service for OtherApi {
    fn serve(&self, req: &ApiRequest) -> ApiResponse {
        match req.path() {
            "/user/create" => self.create_handler(req),
            "/ping" => self.ping_handler(req),
            "/search" => self.search_handler(req),
            _ => ApiResponse::error(404, "unknown method"),
        }
    }
}
