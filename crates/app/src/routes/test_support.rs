//! In-memory `PubCashApi` used by the view controller tests.

use api_client::PubCashApi;
use async_trait::async_trait;
use shared_types::{
    AppError, LoginRequest, LoginResponse, MaintenanceStatus, MessageResponse, Profile,
    RegisterAdminRequest, VerifyOtpRequest, VerifyOtpResponse,
};
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<&'static str>>,
    pub maintenance: Cell<bool>,
    pub login: RefCell<Option<Result<LoginResponse, AppError>>>,
    pub register: RefCell<Option<Result<MessageResponse, AppError>>>,
    pub verify: RefCell<Option<Result<VerifyOtpResponse, AppError>>>,
    pub profile: RefCell<Option<Result<Profile, AppError>>>,
    /// Fails every maintenance call with this error when set.
    pub maintenance_error: RefCell<Option<AppError>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == name).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, name: &'static str) {
        self.calls.borrow_mut().push(name);
    }

    fn canned<T: Clone + Default>(slot: &RefCell<Option<Result<T, AppError>>>) -> Result<T, AppError> {
        slot.borrow().clone().unwrap_or_else(|| Ok(T::default()))
    }
}

#[async_trait(?Send)]
impl PubCashApi for FakeApi {
    async fn login(&self, _req: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.record("login");
        Self::canned(&self.login)
    }

    async fn register_admin(
        &self,
        _req: &RegisterAdminRequest,
    ) -> Result<MessageResponse, AppError> {
        self.record("register_admin");
        Self::canned(&self.register)
    }

    async fn verify_otp(&self, _req: &VerifyOtpRequest) -> Result<VerifyOtpResponse, AppError> {
        self.record("verify_otp");
        Self::canned(&self.verify)
    }

    async fn maintenance(&self) -> Result<MaintenanceStatus, AppError> {
        self.record("maintenance");
        if let Some(err) = self.maintenance_error.borrow().clone() {
            return Err(err);
        }
        Ok(MaintenanceStatus {
            maintenance_mode: self.maintenance.get(),
        })
    }

    async fn set_maintenance(&self, enabled: bool) -> Result<MaintenanceStatus, AppError> {
        self.record("set_maintenance");
        if let Some(err) = self.maintenance_error.borrow().clone() {
            return Err(err);
        }
        self.maintenance.set(enabled);
        Ok(MaintenanceStatus {
            maintenance_mode: enabled,
        })
    }

    async fn admin_profile(&self) -> Result<Profile, AppError> {
        self.record("admin_profile");
        Self::canned(&self.profile)
    }

    async fn user_profile(&self) -> Result<Profile, AppError> {
        self.record("user_profile");
        Self::canned(&self.profile)
    }
}
