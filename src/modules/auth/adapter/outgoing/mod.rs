pub mod bcrypt_verifier;
pub mod jwt;
