use std::sync::atomic::{AtomicI64, Ordering};

struct Config {
    shift_magnitude: AtomicI64,
}

static CONFIG: Config = Config {
    shift_magnitude: AtomicI64::new(5),
};

pub struct ConfigSnapshot {
    pub shift_magnitude: i64,
}

pub fn get_config() -> ConfigSnapshot {
    ConfigSnapshot {
        shift_magnitude: CONFIG.shift_magnitude.load(Ordering::Relaxed),
    }
}

pub fn set_shift_magnitude(magnitude: i64) {
    CONFIG.shift_magnitude.store(magnitude, Ordering::Relaxed);
}
