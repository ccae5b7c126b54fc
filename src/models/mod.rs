pub mod activities;

pub use activities::{Activity, Directory, SignupMessage};
