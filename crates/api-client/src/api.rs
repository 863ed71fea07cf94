use async_trait::async_trait;
use shared_types::{
    AppError, LoginRequest, LoginResponse, MaintenanceStatus, MaintenanceUpdateResponse,
    MessageResponse, Profile, RegisterAdminRequest, UpdateMaintenanceRequest, VerifyOtpRequest,
    VerifyOtpResponse,
};

use crate::client::ApiClient;

/// Backend endpoint paths, relative to the configured base URL.
pub mod endpoints {
    pub const LOGIN: &str = "/auth/admin/login";
    pub const REGISTER: &str = "/auth/admin/register";
    pub const VERIFY_OTP: &str = "/auth/verify-otp";
    pub const MAINTENANCE: &str = "/settings/maintenance";
    pub const ADMIN_PROFILE: &str = "/admin/profile";
    pub const USER_PROFILE: &str = "/user/profile";
}

/// Backend operations used by the page views.
///
/// Views depend on this trait rather than on [`ApiClient`] so they can be
/// driven by an in-memory fake in tests. Futures are not `Send` because the
/// browser build runs on a single thread.
#[async_trait(?Send)]
pub trait PubCashApi {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError>;

    async fn register_admin(&self, req: &RegisterAdminRequest)
        -> Result<MessageResponse, AppError>;

    async fn verify_otp(&self, req: &VerifyOtpRequest) -> Result<VerifyOtpResponse, AppError>;

    async fn maintenance(&self) -> Result<MaintenanceStatus, AppError>;

    /// Set the maintenance flag. Idempotent: sending the current value is a no-op server side.
    async fn set_maintenance(&self, enabled: bool) -> Result<MaintenanceStatus, AppError>;

    async fn admin_profile(&self) -> Result<Profile, AppError>;

    async fn user_profile(&self) -> Result<Profile, AppError>;
}

#[async_trait(?Send)]
impl PubCashApi for ApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        Ok(self.post_json(endpoints::LOGIN, req).await?)
    }

    async fn register_admin(
        &self,
        req: &RegisterAdminRequest,
    ) -> Result<MessageResponse, AppError> {
        Ok(self.post_json(endpoints::REGISTER, req).await?)
    }

    async fn verify_otp(&self, req: &VerifyOtpRequest) -> Result<VerifyOtpResponse, AppError> {
        Ok(self.post_json(endpoints::VERIFY_OTP, req).await?)
    }

    async fn maintenance(&self) -> Result<MaintenanceStatus, AppError> {
        Ok(self.get_json(endpoints::MAINTENANCE).await?)
    }

    async fn set_maintenance(&self, enabled: bool) -> Result<MaintenanceStatus, AppError> {
        let body = UpdateMaintenanceRequest {
            maintenance_mode: enabled,
        };
        let resp: MaintenanceUpdateResponse = self.put_json(endpoints::MAINTENANCE, &body).await?;
        Ok(MaintenanceStatus {
            maintenance_mode: resp.maintenance_mode.unwrap_or(enabled),
        })
    }

    async fn admin_profile(&self) -> Result<Profile, AppError> {
        Ok(self.get_json(endpoints::ADMIN_PROFILE).await?)
    }

    async fn user_profile(&self) -> Result<Profile, AppError> {
        Ok(self.get_json(endpoints::USER_PROFILE).await?)
    }
}
