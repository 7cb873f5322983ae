pub mod builder;
pub mod models;
pub mod money;
pub mod validator;

pub use builder::{DeductionField, FormSnapshot, RequestBuilder, RequestPlan};
pub use models::*;
pub use validator::{CapStatus, CapValidator};
