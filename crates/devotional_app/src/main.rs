use devotional_app::app::run;
use devotional_app::config::AppConfig;

fn main() {
    devotional_app::init_tracing();
    let config = AppConfig::from_env().unwrap_or_default();
    if let Err(err) = run(config) {
        eprintln!("Failed to start the devotional reader: {err:#}");
    }
}
