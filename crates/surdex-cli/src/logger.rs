use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Crates whose logs the binary shows at `Info` unless `RUST_LOG` says otherwise.
const SURDEX_MODULES: [&str; 3] = ["surdex", "surdex_index", "surdex_snapshot"];

/// Logger configuration before environment overrides are applied.
fn builder() -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    for module in SURDEX_MODULES {
        builder.filter_module(module, LevelFilter::Info);
    }
    builder.format_timestamp_millis();
    builder
}

/// Installs the process-wide logger once. Load, generation and teardown
/// milestones from the catalog crates show up on stderr.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = builder();
        builder.parse_default_env();

        // Tests may have installed a logger already.
        let _ = builder.try_init();
    });
}
