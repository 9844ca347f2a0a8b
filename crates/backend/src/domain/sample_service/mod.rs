mod metadata;
mod service;

pub use metadata::SAMPLE_SERVICE;
pub use service::SampleService;

/// Call every sample method once
pub fn run_sample() {
    let service = SampleService::new();
    service.get_all_items();
    service.get_item_by_id(1);
    service.add_item("New item".to_string());
    service.delete_item(1);
}
