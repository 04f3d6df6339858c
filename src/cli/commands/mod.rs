pub mod config;
pub mod section;
pub mod statement;
pub mod system;

use super::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let mut definitions = Vec::new();
    definitions.extend(section::definitions());
    definitions.extend(statement::definitions());
    definitions.extend(config::definitions());
    definitions.extend(system::definitions());

    for entry in definitions {
        registry.register(entry);
    }
}
