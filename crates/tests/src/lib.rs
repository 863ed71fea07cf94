#[cfg(test)]
mod common;

#[cfg(test)]
mod maintenance_tests;

#[cfg(test)]
mod register_tests;

#[cfg(test)]
mod login_otp_tests;

#[cfg(test)]
mod client_tests;
