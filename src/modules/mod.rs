pub mod books;
pub mod sellers;

use std::sync::Arc;

use bookmart_kernel::ModuleRegistry;

/// Register all entity modules. Sellers go first: books reference them.
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(Arc::new(sellers::SellersModule::new()));
    registry.register(Arc::new(books::BooksModule::new()));
}
