use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Defaults are used if nothing was installed.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Install the global configuration
///
/// Later calls replace the previous value.
pub fn init_config(config: StaticConfig) {
    match CONFIG.get() {
        Some(current) => current.store(Arc::new(config)),
        None => {
            if let Err(rejected) = CONFIG.set(ArcSwap::from_pointee(config)) {
                // 并发初始化：另一个线程先完成了 set
                if let Some(current) = CONFIG.get() {
                    current.store(rejected.load_full());
                }
            }
        }
    }
}
