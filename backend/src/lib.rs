pub mod config;
pub mod errors;
pub mod router;
pub mod seed;
pub mod sim_db;
pub mod structs;

use log::{error, info, warn};
use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::{catchers, Build, Rocket};

use crate::config::AppConfig;
use crate::sim_db::SimDb;

/// The service configured from `Rocket.toml` and `ROCKET_*` variables.
pub fn build() -> Rocket<Build> {
    assemble(rocket::build())
}

/// The service configured from an explicit figment.
pub fn build_from(figment: Figment) -> Rocket<Build> {
    assemble(rocket::custom(figment))
}

fn assemble(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .attach(notes_store())
        .mount("/api", router::routes())
        .register("/", catchers![errors::not_found, errors::default_catcher])
}

// Reads the app config, seeds the store and mounts the static directory.
fn notes_store() -> AdHoc {
    AdHoc::try_on_ignite("Notes store", |rocket| async move {
        let config = match AppConfig::from_figment(rocket.figment()) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return Err(rocket);
            }
        };

        let db = match SimDb::initialize(&seed::notes(), config.sim()) {
            Ok(db) => db,
            Err(e) => {
                error!("{}", e);
                return Err(rocket);
            }
        };
        info!("notes store seeded, simulation: {:?}", db.config());

        let rocket = if config.static_dir.is_dir() {
            rocket.mount("/", FileServer::from(&config.static_dir))
        } else {
            warn!("static directory {} not found, not serving assets", config.static_dir.display());
            rocket
        };

        Ok(rocket.manage(db).manage(config))
    })
}
