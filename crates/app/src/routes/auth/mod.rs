pub mod login;
pub mod register;
pub mod verify_otp;
