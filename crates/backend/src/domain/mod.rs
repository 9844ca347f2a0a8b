pub mod sample_service;
