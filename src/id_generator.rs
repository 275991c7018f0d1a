use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all drawable objects
static NEXT_OBJECT_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> usize {
    NEXT_OBJECT_ID.fetch_add(1, Ordering::SeqCst)
}
