pub mod dto;
pub mod report_service;
