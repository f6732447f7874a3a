//! Service module

mod wordcheck_api_service;

pub use wordcheck_api_service::{WordcheckApiService, WordcheckApiServiceFull};
