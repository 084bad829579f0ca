use personnel::config::{AppConfiguration, ReferenceData};
use personnel::{error::PersonnelError, ApplicationRuntime, ApplicationRuntimeBuilder};
use std::sync::Arc;

/// Creates a test runtime with the database in memory and a few positions and departments
pub fn create_test_runtime() -> Result<Arc<ApplicationRuntime>, PersonnelError> {
    let config = AppConfiguration {
        reference: ReferenceData {
            positions: vec!["Инженер".to_string(), "Бухгалтер".to_string()],
            departments: vec!["Разработка".to_string(), "Финансы".to_string()],
        },
        ..Default::default()
    };

    let runtime = ApplicationRuntimeBuilder::new()
        .with_config(config)
        .use_in_memory_db()
        .build()?;

    Ok(Arc::new(runtime))
}
