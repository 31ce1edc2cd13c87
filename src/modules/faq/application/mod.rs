pub mod domain;
pub mod faq_use_cases;
pub mod ports;
pub mod services;
