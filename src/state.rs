use crate::certificate::Composer;
use crate::config::Config;
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub composer: Arc<Composer>,
    pub tera: Arc<Tera>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let tera = crate::templates::load_tera(&config.base_dir.join("templates"));
        let composer = Composer::new(config.composer.clone());
        Self {
            config: Arc::new(config),
            composer: Arc::new(composer),
            tera: Arc::new(tera),
        }
    }
}
