pub mod chart_service;
pub mod conversion_service;
