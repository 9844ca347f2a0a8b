/// Sample service whose developer annotations feed the console report
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleService;

impl SampleService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_all_items(&self) {
        tracing::info!("get_all_items called");
    }

    pub fn get_item_by_id(&self, id: i32) {
        tracing::info!("get_item_by_id called, id: {}", id);
    }

    pub fn add_item(&self, name: String) {
        tracing::info!("add_item called, name: {}", name);
    }

    pub fn delete_item(&self, id: i32) {
        tracing::info!("delete_item called, id: {}", id);
    }
}
