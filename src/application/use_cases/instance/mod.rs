//! Instance Use Cases

mod get_instance_summary;

pub use get_instance_summary::GetInstanceSummaryUseCase;
